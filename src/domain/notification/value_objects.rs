use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub i64);

impl NotificationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "notification id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NotificationId> for i64 {
    fn from(value: NotificationId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    NewComment,
    ReplyToComment,
    NewFollower,
    StoryLiked,
    StoryPublished,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::NewComment => "NEW_COMMENT",
            NotificationType::ReplyToComment => "REPLY_TO_COMMENT",
            NotificationType::NewFollower => "NEW_FOLLOWER",
            NotificationType::StoryLiked => "STORY_LIKED",
            NotificationType::StoryPublished => "STORY_PUBLISHED",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW_COMMENT" => Ok(NotificationType::NewComment),
            "REPLY_TO_COMMENT" => Ok(NotificationType::ReplyToComment),
            "NEW_FOLLOWER" => Ok(NotificationType::NewFollower),
            "STORY_LIKED" => Ok(NotificationType::StoryLiked),
            "STORY_PUBLISHED" => Ok(NotificationType::StoryPublished),
            other => Err(DomainError::Validation(format!(
                "unknown notification type '{other}'"
            ))),
        }
    }
}
