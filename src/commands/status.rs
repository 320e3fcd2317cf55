use crate::app::{Data, Error};
use crate::db::models::ContentType;

pub async fn status(
    data: &Data,
    user_id: u64,
    content_type: ContentType,
    json: bool,
) -> Result<i32, Error> {
    let status = data.guard.status(user_id, content_type).await?;
    let policy = data.guard.policy(content_type);

    if json {
        let report = serde_json::json!({
            "user_id": user_id,
            "content_type": content_type.as_str(),
            "policy": policy,
            "status": status,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    println!("User {} / {}", user_id, content_type);
    println!(
        "  posts in window: {} (limit {} per {}s)",
        status.count, policy.count, policy.time_seconds
    );
    match status.checked_at {
        Some(at) => println!("  last check: {}", at.to_rfc3339()),
        None => println!("  last check: never"),
    }
    match status.locked_until {
        Some(until) => println!("  locked until: {}", until.to_rfc3339()),
        None => println!("  not locked"),
    }

    Ok(0)
}
