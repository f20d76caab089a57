use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_self,
        dto::{AuthenticatedUser, NotificationDto, UnreadCountDto},
        error::ApplicationResult,
    },
    domain::{notification::NotificationRepository, user::UserId},
};

pub struct NotificationQueryService {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationQueryService {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn list_for_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<Vec<NotificationDto>> {
        self.list(actor, user_id, false).await
    }

    pub async fn list_unread_for_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<Vec<NotificationDto>> {
        self.list(actor, user_id, true).await
    }

    pub async fn count_unread(&self, actor: &AuthenticatedUser, user_id: i64) -> ApplicationResult<UnreadCountDto> {
        let user_id = UserId::new(user_id)?;
        ensure_self(actor, user_id)?;
        Ok(UnreadCountDto {
            unread: self.notifications.count_unread(user_id).await?,
        })
    }

    async fn list(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
        unread_only: bool,
    ) -> ApplicationResult<Vec<NotificationDto>> {
        let user_id = UserId::new(user_id)?;
        ensure_self(actor, user_id)?;
        let notifications = self
            .notifications
            .list_for_recipient(user_id, unread_only)
            .await?;
        Ok(notifications.into_iter().map(Into::into).collect())
    }
}
