use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::models::{ContentType, SpamCheckRecord};

pub async fn get(
    pool: &PgPool,
    user_id: i64,
    content_type: ContentType,
) -> Result<Option<SpamCheckRecord>, sqlx::Error> {
    sqlx::query_as::<_, SpamCheckRecord>(
        "SELECT * FROM user_spam_checks WHERE user_id = $1 AND content_type = $2"
    )
    .bind(user_id)
    .bind(content_type)
    .fetch_optional(pool)
    .await
}

/// Save the counter and window start for a user, creating the row on first use
pub async fn upsert(
    pool: &PgPool,
    user_id: i64,
    content_type: ContentType,
    check_count: i32,
    checked_at: Option<DateTime<Utc>>,
) -> Result<SpamCheckRecord, sqlx::Error> {
    sqlx::query_as::<_, SpamCheckRecord>(
        r#"
        INSERT INTO user_spam_checks (user_id, content_type, check_count, checked_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, content_type)
        DO UPDATE SET
            check_count = $3,
            checked_at = $4,
            updated_at = NOW()
        RETURNING *
        "#
    )
    .bind(user_id)
    .bind(content_type)
    .bind(check_count)
    .bind(checked_at)
    .fetch_one(pool)
    .await
}

/// Returns true if a row was removed
pub async fn delete(
    pool: &PgPool,
    user_id: i64,
    content_type: ContentType,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM user_spam_checks WHERE user_id = $1 AND content_type = $2"
    )
    .bind(user_id)
    .bind(content_type)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

