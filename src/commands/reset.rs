use crate::app::{Data, Error};
use crate::db::models::ContentType;

pub async fn reset(data: &Data, user_id: u64, content_type: ContentType) -> Result<i32, Error> {
    if data.guard.reset(user_id, content_type).await? {
        println!("Cleared {} spam check for user {}", content_type, user_id);
    } else {
        println!("No {} spam check stored for user {}", content_type, user_id);
    }
    Ok(0)
}
