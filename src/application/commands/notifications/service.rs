// src/application/commands/notifications/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_self,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        notification::{NotificationId, NotificationRepository},
        user::UserId,
    },
};

/// Read-state changes. Recipients only ever touch their own notifications.
pub struct NotificationCommandService {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationCommandService {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn mark_read(&self, actor: &AuthenticatedUser, notification_id: i64) -> ApplicationResult<()> {
        let id = NotificationId::new(notification_id)?;
        let notification = self
            .notifications
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("notification not found"))?;
        if !notification.is_owned_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "cannot mark another user's notification as read",
            ));
        }

        if !notification.is_read {
            self.notifications.mark_read(id).await?;
        }
        Ok(())
    }

    /// Returns how many notifications were flipped to read.
    pub async fn mark_all_read(&self, actor: &AuthenticatedUser, user_id: i64) -> ApplicationResult<u64> {
        let user_id = UserId::new(user_id)?;
        ensure_self(actor, user_id)?;
        Ok(self.notifications.mark_all_read(user_id).await?)
    }
}
