use std::env;
use std::path::PathBuf;

use crate::constants::spam::DEFAULT_MAX_CONNECTIONS;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    /// JSON document holding `Vanilla.<Type>.Spam*` values
    pub forum_config_path: Option<PathBuf>,
    /// JSON object mapping source strings to translations
    pub locale_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable not set")?;

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let forum_config_path = env::var("FORUM_CONFIG_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let locale_path = env::var("FORUM_LOCALE_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url,
            database_max_connections,
            forum_config_path,
            locale_path,
        })
    }
}
