use crate::domain::notification::{Notification, NotificationType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: i64,
    pub recipient_id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub is_read: bool,
    #[serde(default)]
    pub related_story_id: Option<i64>,
    #[serde(default)]
    pub related_comment_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.into(),
            recipient_id: notification.recipient_id.into(),
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
            is_read: notification.is_read,
            related_story_id: notification.related_story_id.map(Into::into),
            related_comment_id: notification.related_comment_id.map(Into::into),
            created_at: notification.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCountDto {
    pub unread: u64,
}
