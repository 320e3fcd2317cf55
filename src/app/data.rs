use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::app::Error;
use crate::config::{ForumConfig, Settings};
use crate::services::locale::Locale;
use crate::services::spam::{PgAttributeStore, SpamGuard};

/// Shared state for the process
pub struct Data {
    pub pool: PgPool,
    pub settings: Settings,
    pub guard: SpamGuard<PgAttributeStore>,
}

impl Data {
    /// Load forum config and translations named by `settings`, then wire the guard
    pub async fn load(pool: PgPool, settings: Settings) -> Result<Self, Error> {
        let config = match &settings.forum_config_path {
            Some(path) => ForumConfig::load(path).await?,
            None => ForumConfig::new(),
        };

        let locale = match &settings.locale_path {
            Some(path) => {
                let locale = Locale::load(path).await?;
                info!("Loaded {} translations", locale.len());
                locale
            }
            None => Locale::default(),
        };

        let guard = SpamGuard::new(
            PgAttributeStore::new(pool.clone()),
            &config,
            Arc::new(locale),
        );

        Ok(Self {
            pool,
            settings,
            guard,
        })
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("pool_size", &self.pool.size())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
