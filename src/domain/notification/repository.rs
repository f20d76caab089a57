use crate::domain::errors::DomainResult;
use crate::domain::notification::entity::{NewNotification, Notification};
use crate::domain::notification::value_objects::NotificationId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification>;
    async fn find_by_id(&self, id: NotificationId) -> DomainResult<Option<Notification>>;
    /// Newest first.
    async fn list_for_recipient(
        &self,
        recipient_id: UserId,
        unread_only: bool,
    ) -> DomainResult<Vec<Notification>>;
    async fn mark_read(&self, id: NotificationId) -> DomainResult<()>;
    /// Returns how many notifications flipped to read.
    async fn mark_all_read(&self, recipient_id: UserId) -> DomainResult<u64>;
    async fn count_unread(&self, recipient_id: UserId) -> DomainResult<u64>;
}
