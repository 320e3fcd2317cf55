use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::app::Error;
use crate::config::ForumConfig;
use crate::constants::spam::{SPAM_BLOCK_FIELD, SPAM_BLOCK_MESSAGE};
use crate::db::models::{ContentType, SpamCheckState};
use crate::services::locale::Locale;
use crate::services::session::Session;
use crate::services::spam::policy::SpamPolicy;
use crate::services::spam::store::AttributeStore;
use crate::services::validation::Validation;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::formatting::{format_positional, format_seconds};

/// Outcome of one post attempt against the stored state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub spam: bool,
    pub next: SpamCheckState,
}

/// Decide whether an attempt at `now` is spam and compute the state to store.
///
/// A lockout holds while fewer than `lock_seconds` have passed since the last
/// check and the counter has reached `count`. Every attempt during a lockout
/// restarts the lockout clock without touching the counter. Outside a lockout
/// the counter either restarts at 1 (window expired) or is incremented.
pub fn evaluate(
    state: Option<SpamCheckState>,
    policy: &SpamPolicy,
    now: DateTime<Utc>,
) -> Evaluation {
    let state = state.unwrap_or_default();

    if is_locked(&state, policy, now) {
        return Evaluation {
            spam: true,
            next: SpamCheckState {
                count: state.count,
                checked_at: Some(now),
            },
        };
    }

    let window_expired = match state.seconds_since_check(now) {
        Some(elapsed) => elapsed > policy.time_seconds,
        None => true,
    };

    let next = if window_expired {
        SpamCheckState {
            count: 1,
            checked_at: Some(now),
        }
    } else {
        SpamCheckState {
            count: state.count.saturating_add(1),
            checked_at: state.checked_at,
        }
    };

    Evaluation { spam: false, next }
}

fn is_locked(state: &SpamCheckState, policy: &SpamPolicy, now: DateTime<Utc>) -> bool {
    match state.seconds_since_check(now) {
        Some(elapsed) => elapsed < policy.lock_seconds && state.count >= policy.count,
        None => false,
    }
}

/// Read-only view of a user's spam check state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpamStatus {
    pub count: u32,
    pub checked_at: Option<DateTime<Utc>>,
    /// Set while a lockout is in effect
    pub locked_until: Option<DateTime<Utc>>,
}

/// Per-user posting rate limiter for forum content.
///
/// Concurrent attempts by the same user are not serialised: each check
/// loads, evaluates and saves, so two simultaneous attempts may both read
/// the same state and the last save wins.
pub struct SpamGuard<S, C = SystemClock> {
    store: S,
    clock: C,
    locale: Arc<Locale>,
    comment_policy: SpamPolicy,
    discussion_policy: SpamPolicy,
}

impl<S: AttributeStore> SpamGuard<S> {
    pub fn new(store: S, config: &ForumConfig, locale: Arc<Locale>) -> Self {
        Self::with_clock(store, config, locale, SystemClock)
    }
}

impl<S: AttributeStore, C: Clock> SpamGuard<S, C> {
    pub fn with_clock(store: S, config: &ForumConfig, locale: Arc<Locale>, clock: C) -> Self {
        Self {
            store,
            clock,
            locale,
            comment_policy: SpamPolicy::resolve(config, ContentType::Comment),
            discussion_policy: SpamPolicy::resolve(config, ContentType::Discussion),
        }
    }

    pub fn policy(&self, content_type: ContentType) -> &SpamPolicy {
        match content_type {
            ContentType::Comment => &self.comment_policy,
            ContentType::Discussion => &self.discussion_policy,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a post attempt and return true if the user is spamming.
    /// A rejection message is added to `validation` when blocked.
    pub async fn check_for_spam(
        &self,
        user_id: u64,
        content_type: ContentType,
        validation: &mut Validation,
    ) -> Result<bool, Error> {
        if user_id == 0 {
            return Err(Error::UserNotFound(user_id));
        }

        let now = self.clock.now();
        let policy = self.policy(content_type);
        let state = self.store.load(user_id, content_type).await?;
        let evaluation = evaluate(state, policy, now);

        debug!(
            "Spam check for user {} ({}): count {} -> {}, spam: {}",
            user_id,
            content_type,
            state.map(|s| s.count).unwrap_or(0),
            evaluation.next.count,
            evaluation.spam
        );

        if evaluation.spam {
            info!(
                "Spam block for user {} on {}: {} posts within {}, locked for {}",
                user_id,
                content_type,
                policy.count,
                format_seconds(policy.time_seconds),
                format_seconds(policy.lock_seconds)
            );
        }

        self.store
            .save(user_id, content_type, &evaluation.next)
            .await?;

        if evaluation.spam {
            validation.add_result(SPAM_BLOCK_FIELD, self.block_message(policy));
        }

        Ok(evaluation.spam)
    }

    /// Check for the session's acting user
    pub async fn check_session(
        &self,
        session: &Session,
        content_type: ContentType,
        validation: &mut Validation,
    ) -> Result<bool, Error> {
        if !session.is_valid() {
            return Err(Error::UserNotFound(session.user_id));
        }
        self.check_for_spam(session.user_id, content_type, validation)
            .await
    }

    /// Check by content type name.
    ///
    /// # Panics
    ///
    /// Panics if `content_type` is not a moderated content type; callers are
    /// expected to pass one of their own, statically known type names.
    pub async fn check_for_spam_named(
        &self,
        user_id: u64,
        content_type: &str,
        validation: &mut Validation,
    ) -> Result<bool, Error> {
        let content_type = match content_type.parse::<ContentType>() {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        };
        self.check_for_spam(user_id, content_type, validation).await
    }

    /// Current state without recording an attempt
    pub async fn status(&self, user_id: u64, content_type: ContentType) -> Result<SpamStatus, Error> {
        let now = self.clock.now();
        let policy = self.policy(content_type);
        let state = self
            .store
            .load(user_id, content_type)
            .await?
            .unwrap_or_default();

        let locked_until = match state.checked_at {
            Some(at) if is_locked(&state, policy, now) => {
                Some(at + Duration::seconds(policy.lock_seconds))
            }
            _ => None,
        };

        Ok(SpamStatus {
            count: state.count,
            checked_at: state.checked_at,
            locked_until,
        })
    }

    /// Forget a user's state so the next attempt starts a fresh window
    pub async fn reset(&self, user_id: u64, content_type: ContentType) -> Result<bool, Error> {
        let existed = self.store.clear(user_id, content_type).await?;
        if existed {
            info!("Reset spam check for user {} on {}", user_id, content_type);
        }
        Ok(existed)
    }

    fn block_message(&self, policy: &SpamPolicy) -> String {
        format_positional(
            self.locale.translate(SPAM_BLOCK_MESSAGE),
            &[
                i64::from(policy.count),
                policy.time_seconds,
                policy.lock_seconds,
            ],
        )
    }
}
