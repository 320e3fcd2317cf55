use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::app::Error;

/// Dotted-path configuration tree, e.g. `Vanilla.Comment.SpamCount`
#[derive(Debug, Clone, Default)]
pub struct ForumConfig {
    root: Map<String, Value>,
}

impl ForumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::InvalidOperation(format!(
                "forum config must be a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load from a JSON file; a missing file yields an empty config
    pub async fn load(path: &Path) -> Result<Self, Error> {
        if !tokio::fs::try_exists(path).await? {
            warn!("Forum config {} not found, using defaults", path.display());
            return Ok(Self::new());
        }
        let contents = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json_str(&contents)?;
        debug!("Loaded forum config from {}", path.display());
        Ok(config)
    }

    /// Look up a dotted path
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut node = self.root.get(parts.next()?)?;
        for part in parts {
            node = node.as_object()?.get(part)?;
        }
        Some(node)
    }

    /// Numeric value at `path`; numeric strings count, anything else is `None`
    pub fn get_number(&self, path: &str) -> Option<f64> {
        match self.get(path)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Set a dotted path, creating intermediate objects as needed
    pub fn set(&mut self, path: &str, value: Value) {
        let mut parts: Vec<&str> = path.split('.').collect();
        let Some(last) = parts.pop() else {
            return;
        };

        let mut node = &mut self.root;
        for part in parts {
            let entry = node
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            node = match entry {
                Value::Object(map) => map,
                _ => unreachable!("entry was just made an object"),
            };
        }
        node.insert(last.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dotted_lookup() {
        let config = ForumConfig::from_value(json!({
            "Vanilla": { "Comment": { "SpamCount": 4, "SpamTime": "60" } }
        }))
        .unwrap();

        assert_eq!(config.get_number("Vanilla.Comment.SpamCount"), Some(4.0));
        assert_eq!(config.get_number("Vanilla.Comment.SpamTime"), Some(60.0));
        assert_eq!(config.get_number("Vanilla.Comment.SpamLock"), None);
        assert_eq!(config.get_number("Vanilla.Discussion.SpamCount"), None);
        assert!(config.get("Vanilla.Comment").is_some());
    }

    #[test]
    fn test_non_numeric_values() {
        let config = ForumConfig::from_value(json!({
            "Vanilla": { "Comment": { "SpamCount": "lots", "SpamTime": true, "SpamLock": null } }
        }))
        .unwrap();

        assert_eq!(config.get_number("Vanilla.Comment.SpamCount"), None);
        assert_eq!(config.get_number("Vanilla.Comment.SpamTime"), None);
        assert_eq!(config.get_number("Vanilla.Comment.SpamLock"), None);
    }

    #[test]
    fn test_set_creates_path() {
        let mut config = ForumConfig::new();
        config.set("Vanilla.Discussion.SpamLock", json!(120));
        assert_eq!(config.get_number("Vanilla.Discussion.SpamLock"), Some(120.0));

        config.set("Vanilla.Discussion", json!("flat"));
        config.set("Vanilla.Discussion.SpamCount", json!(3));
        assert_eq!(config.get_number("Vanilla.Discussion.SpamCount"), Some(3.0));
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            ForumConfig::from_json_str("[1, 2]"),
            Err(Error::InvalidOperation(_))
        ));
        assert!(matches!(ForumConfig::from_json_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let config = tokio_test::block_on(ForumConfig::load(Path::new(
            "/nonexistent/forum-config.json",
        )))
        .unwrap();
        assert!(config.get("Vanilla").is_none());
        assert_eq!(config.get_number("Vanilla.Comment.SpamCount"), None);
    }
}
