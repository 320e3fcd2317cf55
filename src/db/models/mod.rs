mod content_type;
mod spam_check;

pub use content_type::{ContentType, UnknownContentType};
pub use spam_check::{SpamCheckRecord, SpamCheckState};
