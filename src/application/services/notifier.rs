// src/application/services/notifier.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::CommentId,
        notification::{NewNotification, NotificationRepository, NotificationType},
        story::StoryId,
        user::{UserId, UserRepository},
    },
};

/// A notification waiting to be stored for one recipient.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub recipient_id: UserId,
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub related_story_id: Option<StoryId>,
    pub related_comment_id: Option<CommentId>,
}

impl NotificationDraft {
    pub fn new(
        recipient_id: UserId,
        kind: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            recipient_id,
            kind,
            title: title.into(),
            message: message.into(),
            related_story_id: None,
            related_comment_id: None,
        }
    }

    pub fn with_story(mut self, story_id: StoryId) -> Self {
        self.related_story_id = Some(story_id);
        self
    }

    pub fn with_comment(mut self, comment_id: CommentId) -> Self {
        self.related_comment_id = Some(comment_id);
        self
    }
}

/// Outcome of a multi-recipient dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FanOutReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Creates notification rows. The only writer of notifications.
pub struct NotificationDispatcher {
    users: Arc<dyn UserRepository>,
    notifications: Arc<dyn NotificationRepository>,
    clock: Arc<dyn Clock>,
}

impl NotificationDispatcher {
    pub fn new(
        users: Arc<dyn UserRepository>,
        notifications: Arc<dyn NotificationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            notifications,
            clock,
        }
    }

    /// Stores one unread notification. Fails with `NotFound` when the
    /// recipient is missing or deactivated.
    pub async fn dispatch(&self, draft: NotificationDraft) -> ApplicationResult<()> {
        let recipient = self
            .users
            .find_by_id(draft.recipient_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| ApplicationError::not_found("notification recipient not found"))?;

        self.notifications
            .insert(NewNotification {
                recipient_id: recipient.id,
                title: draft.title,
                message: draft.message,
                kind: draft.kind,
                related_story_id: draft.related_story_id,
                related_comment_id: draft.related_comment_id,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(())
    }

    /// Best-effort variant used as a side effect of other operations: failures
    /// are logged and reported as `false`, never returned.
    pub async fn notify(&self, draft: NotificationDraft) -> bool {
        let recipient_id = i64::from(draft.recipient_id);
        let kind = draft.kind;
        match self.dispatch(draft).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    recipient_id,
                    kind = %kind,
                    error = %err,
                    "notification dropped"
                );
                false
            }
        }
    }

    /// Sends one notification per recipient, sequentially. Each recipient is
    /// isolated: a failure is logged and counted, and the remaining
    /// recipients are still served.
    pub async fn fan_out<I, F>(&self, recipients: I, make_draft: F) -> FanOutReport
    where
        I: IntoIterator<Item = UserId>,
        F: Fn(UserId) -> NotificationDraft + Sync,
    {
        let mut report = FanOutReport::default();
        for recipient in recipients {
            if self.notify(make_draft(recipient)).await {
                report.delivered += 1;
            } else {
                report.failed += 1;
            }
        }
        report
    }

    /// Resolves the name shown in messages about `user_id`. Lookup failures
    /// fall back to `fallback` rather than failing the caller.
    pub async fn display_name(&self, user_id: UserId, fallback: &str) -> String {
        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => user.display_name_or(fallback),
            Ok(None) => fallback.to_string(),
            Err(err) => {
                tracing::warn!(user_id = i64::from(user_id), error = %err, "display name lookup failed");
                fallback.to_string()
            }
        }
    }
}
