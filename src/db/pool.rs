use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{debug, info};

const SPAM_CHECKS_SCHEMA: &str = include_str!("../../migrations/001_spam_checks.sql");

/// Postgres codes for `duplicate_object` and `duplicate_table`
const ALREADY_EXISTS_CODES: [&str; 2] = ["42710", "42P07"];

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("Database connection established");

    Ok(pool)
}

/// Create the spam check schema. Safe to run against an initialised database.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Applying spam check schema...");

    let mut applied = 0;
    for statement in statements(SPAM_CHECKS_SCHEMA) {
        match sqlx::query(statement).execute(pool).await {
            Ok(_) => applied += 1,
            Err(e) if already_exists(&e) => debug!("Skipping existing object: {}", e),
            Err(e) => return Err(e),
        }
    }

    info!("Spam check schema ready ({} statements applied)", applied);
    Ok(())
}

fn statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|s| !s.is_empty())
}

fn already_exists(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db
            .code()
            .is_some_and(|code| ALREADY_EXISTS_CODES.iter().any(|c| *c == code)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements() {
        let statements: Vec<&str> = statements(SPAM_CHECKS_SCHEMA).collect();
        assert_eq!(statements.len(), 3);
        assert!(statements[0].contains("CREATE TYPE spam_content_type"));
        assert!(statements[1].contains("CREATE TABLE IF NOT EXISTS user_spam_checks"));
        assert!(statements[2].contains("CREATE INDEX IF NOT EXISTS"));
    }

    #[test]
    fn test_non_database_errors_are_not_skipped() {
        assert!(!already_exists(&sqlx::Error::RowNotFound));
    }
}
