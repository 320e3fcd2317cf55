use serde::Serialize;
use tracing::warn;

use crate::config::ForumConfig;
use crate::constants::spam::{
    DEFAULT_SPAM_COUNT, DEFAULT_SPAM_LOCK_SECONDS, DEFAULT_SPAM_TIME_SECONDS, MIN_SPAM_COUNT,
    MIN_SPAM_LOCK_SECONDS, MIN_SPAM_TIME_SECONDS,
};
use crate::db::models::ContentType;

/// Users cannot post more than `count` times within `time_seconds`
/// or their account is locked for `lock_seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpamPolicy {
    pub count: u32,
    pub time_seconds: i64,
    pub lock_seconds: i64,
}

impl Default for SpamPolicy {
    fn default() -> Self {
        Self {
            count: DEFAULT_SPAM_COUNT,
            time_seconds: DEFAULT_SPAM_TIME_SECONDS,
            lock_seconds: DEFAULT_SPAM_LOCK_SECONDS,
        }
    }
}

impl SpamPolicy {
    /// Read `Vanilla.<Type>.SpamCount|SpamTime|SpamLock`, falling back to
    /// defaults for missing or non-numeric values and clamping to minimums.
    pub fn resolve(config: &ForumConfig, content_type: ContentType) -> Self {
        let prefix = content_type.config_prefix();

        let count = setting(config, prefix, "SpamCount", DEFAULT_SPAM_COUNT as i64, MIN_SPAM_COUNT as i64);
        let time_seconds = setting(
            config,
            prefix,
            "SpamTime",
            DEFAULT_SPAM_TIME_SECONDS,
            MIN_SPAM_TIME_SECONDS,
        );
        let lock_seconds = setting(
            config,
            prefix,
            "SpamLock",
            DEFAULT_SPAM_LOCK_SECONDS,
            MIN_SPAM_LOCK_SECONDS,
        );

        Self {
            count: u32::try_from(count).unwrap_or(u32::MAX),
            time_seconds,
            lock_seconds,
        }
    }
}

fn setting(config: &ForumConfig, prefix: &str, name: &str, default: i64, min: i64) -> i64 {
    let path = format!("{}.{}", prefix, name);

    match config.get_number(&path) {
        Some(value) if value.trunc() < min as f64 => {
            warn!("{} = {} is below the minimum, using {}", path, value, min);
            min
        }
        // `as` saturates on overflow
        Some(value) => value.trunc() as i64,
        None => {
            if config.get(&path).is_some() {
                warn!("{} is not numeric, using default {}", path, default);
            }
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> ForumConfig {
        ForumConfig::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_when_unset() {
        let policy = SpamPolicy::resolve(&ForumConfig::new(), ContentType::Comment);
        assert_eq!(policy, SpamPolicy { count: 2, time_seconds: 30, lock_seconds: 30 });
    }

    #[test]
    fn test_configured_values() {
        let config = config(json!({
            "Vanilla": {
                "Comment": { "SpamCount": 5, "SpamTime": 60, "SpamLock": 120 },
                "Discussion": { "SpamCount": "3", "SpamTime": 90.7, "SpamLock": "300" }
            }
        }));

        assert_eq!(
            SpamPolicy::resolve(&config, ContentType::Comment),
            SpamPolicy { count: 5, time_seconds: 60, lock_seconds: 120 }
        );
        assert_eq!(
            SpamPolicy::resolve(&config, ContentType::Discussion),
            SpamPolicy { count: 3, time_seconds: 90, lock_seconds: 300 }
        );
    }

    #[test]
    fn test_invalid_values_use_defaults() {
        let config = config(json!({
            "Vanilla": { "Comment": { "SpamCount": "many", "SpamTime": [], "SpamLock": {} } }
        }));
        assert_eq!(SpamPolicy::resolve(&config, ContentType::Comment), SpamPolicy::default());
    }

    #[test]
    fn test_values_below_minimum_are_clamped() {
        let config = config(json!({
            "Vanilla": { "Discussion": { "SpamCount": 1, "SpamTime": -10, "SpamLock": 5 } }
        }));
        assert_eq!(
            SpamPolicy::resolve(&config, ContentType::Discussion),
            SpamPolicy { count: 2, time_seconds: 0, lock_seconds: 30 }
        );
    }

    #[test]
    fn test_policies_are_per_content_type() {
        let config = config(json!({ "Vanilla": { "Discussion": { "SpamCount": 10 } } }));
        assert_eq!(SpamPolicy::resolve(&config, ContentType::Comment).count, 2);
        assert_eq!(SpamPolicy::resolve(&config, ContentType::Discussion).count, 10);
    }
}
