use crate::app::{Data, Error};
use crate::commands::EXIT_BLOCKED;
use crate::db::models::ContentType;
use crate::services::validation::Validation;

pub async fn check(data: &Data, user_id: u64, content_type: ContentType) -> Result<i32, Error> {
    let mut validation = Validation::new();
    let spam = data
        .guard
        .check_for_spam(user_id, content_type, &mut validation)
        .await?;

    if !spam {
        println!("{} by user {} allowed", content_type, user_id);
        return Ok(0);
    }

    println!("{} by user {} blocked", content_type, user_id);
    for result in validation.results() {
        println!("  {}: {}", result.field, result.message);
    }
    Ok(EXIT_BLOCKED)
}
