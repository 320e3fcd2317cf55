use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use sqlx::PgPool;

use crate::app::Error;
use crate::db::models::{ContentType, SpamCheckState};
use crate::db::queries::spam_check;

/// Per-user persistence of spam check state
pub trait AttributeStore: Send + Sync {
    fn load(
        &self,
        user_id: u64,
        content_type: ContentType,
    ) -> impl Future<Output = Result<Option<SpamCheckState>, Error>> + Send;

    fn save(
        &self,
        user_id: u64,
        content_type: ContentType,
        state: &SpamCheckState,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Returns true if a state existed
    fn clear(
        &self,
        user_id: u64,
        content_type: ContentType,
    ) -> impl Future<Output = Result<bool, Error>> + Send;
}

/// State kept in the `user_spam_checks` table
#[derive(Debug, Clone)]
pub struct PgAttributeStore {
    pool: PgPool,
}

impl PgAttributeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_user_id(user_id: u64) -> Result<i64, Error> {
    i64::try_from(user_id).map_err(|_| Error::UserNotFound(user_id))
}

impl AttributeStore for PgAttributeStore {
    async fn load(
        &self,
        user_id: u64,
        content_type: ContentType,
    ) -> Result<Option<SpamCheckState>, Error> {
        let record = spam_check::get(&self.pool, db_user_id(user_id)?, content_type).await?;
        Ok(record.map(SpamCheckState::from))
    }

    async fn save(
        &self,
        user_id: u64,
        content_type: ContentType,
        state: &SpamCheckState,
    ) -> Result<(), Error> {
        spam_check::upsert(
            &self.pool,
            db_user_id(user_id)?,
            content_type,
            i32::try_from(state.count).unwrap_or(i32::MAX),
            state.checked_at,
        )
        .await?;
        Ok(())
    }

    async fn clear(&self, user_id: u64, content_type: ContentType) -> Result<bool, Error> {
        Ok(spam_check::delete(&self.pool, db_user_id(user_id)?, content_type).await?)
    }
}

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryAttributeStore {
    states: Arc<DashMap<(u64, ContentType), SpamCheckState>>,
}

impl MemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl AttributeStore for MemoryAttributeStore {
    async fn load(
        &self,
        user_id: u64,
        content_type: ContentType,
    ) -> Result<Option<SpamCheckState>, Error> {
        Ok(self.states.get(&(user_id, content_type)).map(|s| *s))
    }

    async fn save(
        &self,
        user_id: u64,
        content_type: ContentType,
        state: &SpamCheckState,
    ) -> Result<(), Error> {
        self.states.insert((user_id, content_type), *state);
        Ok(())
    }

    async fn clear(&self, user_id: u64, content_type: ContentType) -> Result<bool, Error> {
        Ok(self.states.remove(&(user_id, content_type)).is_some())
    }
}
