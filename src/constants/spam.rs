/// Posts allowed inside the window before a lockout (also the minimum)
pub const DEFAULT_SPAM_COUNT: u32 = 2;
pub const MIN_SPAM_COUNT: u32 = 2;

/// Width of the counting window in seconds
pub const DEFAULT_SPAM_TIME_SECONDS: i64 = 30;
pub const MIN_SPAM_TIME_SECONDS: i64 = 0;

/// Lockout duration in seconds (also the minimum)
pub const DEFAULT_SPAM_LOCK_SECONDS: i64 = 30;
pub const MIN_SPAM_LOCK_SECONDS: i64 = 30;

/// Validation field the rejection message is reported against
pub const SPAM_BLOCK_FIELD: &str = "Body";

/// Source text of the rejection message; arguments are count, time, lock
pub const SPAM_BLOCK_MESSAGE: &str = "You have posted %1$s times within %2$s seconds. A spam block is now in effect on your account. You must wait at least %3$s seconds before attempting to post again.";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
