use chrono::{DateTime, Utc};

use super::ContentType;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpamCheckRecord {
    pub user_id: i64,
    pub content_type: ContentType,
    pub check_count: i32,
    pub checked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rolling spam counter for one user and content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpamCheckState {
    /// Posts made inside the current window
    pub count: u32,
    /// Start of the window, or when the lockout was last refreshed
    pub checked_at: Option<DateTime<Utc>>,
}

impl SpamCheckState {
    /// Whole seconds since `checked_at`, `None` when never checked.
    /// Both ends are truncated to the second before subtracting.
    pub fn seconds_since_check(&self, now: DateTime<Utc>) -> Option<i64> {
        self.checked_at.map(|at| now.timestamp() - at.timestamp())
    }
}

impl From<SpamCheckRecord> for SpamCheckState {
    fn from(record: SpamCheckRecord) -> Self {
        Self {
            count: record.check_count.max(0) as u32,
            checked_at: record.checked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_elapsed_compares_whole_seconds() {
        let at = Utc.timestamp_millis_opt(1_709_294_400_900).unwrap();
        let state = SpamCheckState {
            count: 2,
            checked_at: Some(at),
        };

        let now = Utc.timestamp_millis_opt(1_709_294_430_100).unwrap();
        assert_eq!(state.seconds_since_check(now), Some(30));

        let same_second = Utc.timestamp_millis_opt(1_709_294_400_999).unwrap();
        assert_eq!(state.seconds_since_check(same_second), Some(0));

        assert_eq!(SpamCheckState::default().seconds_since_check(now), None);
    }
}
