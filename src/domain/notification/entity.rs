use crate::domain::comment::CommentId;
use crate::domain::notification::value_objects::{NotificationId, NotificationType};
use crate::domain::story::StoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_id: UserId,
    pub title: String,
    pub message: String,
    pub kind: NotificationType,
    pub is_read: bool,
    pub related_story_id: Option<StoryId>,
    pub related_comment_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.recipient_id == user_id
    }
}

/// Always stored unread.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: UserId,
    pub title: String,
    pub message: String,
    pub kind: NotificationType,
    pub related_story_id: Option<StoryId>,
    pub related_comment_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}
