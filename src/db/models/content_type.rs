use std::str::FromStr;

use thiserror::Error;

/// Kinds of posts the spam guard moderates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "spam_content_type", rename_all = "lowercase")]
pub enum ContentType {
    Comment,
    Discussion,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Spam check type unknown: {0}")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Comment, ContentType::Discussion];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Comment => "Comment",
            ContentType::Discussion => "Discussion",
        }
    }

    /// Config prefix, e.g. `Vanilla.Comment`
    pub fn config_prefix(&self) -> &'static str {
        match self {
            ContentType::Comment => "Vanilla.Comment",
            ContentType::Discussion => "Vanilla.Discussion",
        }
    }

    /// Legacy user attribute holding the post counter
    pub fn count_attribute(&self) -> &'static str {
        match self {
            ContentType::Comment => "CountCommentSpamCheck",
            ContentType::Discussion => "CountDiscussionSpamCheck",
        }
    }

    /// Legacy user attribute holding the window start
    pub fn date_attribute(&self) -> &'static str {
        match self {
            ContentType::Comment => "DateCommentSpamCheck",
            ContentType::Discussion => "DateDiscussionSpamCheck",
        }
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_type() {
        assert_eq!("Comment".parse::<ContentType>(), Ok(ContentType::Comment));
        assert_eq!("discussion".parse::<ContentType>(), Ok(ContentType::Discussion));
        assert_eq!(
            "Activity".parse::<ContentType>(),
            Err(UnknownContentType("Activity".to_string()))
        );
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(ContentType::Comment.count_attribute(), "CountCommentSpamCheck");
        assert_eq!(ContentType::Discussion.date_attribute(), "DateDiscussionSpamCheck");
        assert_eq!(ContentType::Discussion.config_prefix(), "Vanilla.Discussion");
    }
}
