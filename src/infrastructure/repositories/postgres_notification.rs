// src/infrastructure/repositories/postgres_notification.rs
use super::{map_sqlx, non_negative};
use crate::domain::comment::CommentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notification::{
    NewNotification, Notification, NotificationId, NotificationRepository, NotificationType,
};
use crate::domain::story::StoryId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const NOTIFICATION_COLUMNS: &str = "id, recipient_id, title, message, type, is_read, \
     related_story_id, related_comment_id, created_at";

#[derive(Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRow {
    id: i64,
    recipient_id: i64,
    title: String,
    message: String,
    #[sqlx(rename = "type")]
    kind: String,
    is_read: bool,
    related_story_id: Option<i64>,
    related_comment_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = DomainError;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: NotificationId::new(row.id)?,
            recipient_id: UserId::new(row.recipient_id)?,
            title: row.title,
            message: row.message,
            kind: row.kind.parse::<NotificationType>()?,
            is_read: row.is_read,
            related_story_id: row.related_story_id.map(StoryId::new).transpose()?,
            related_comment_id: row.related_comment_id.map(CommentId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification> {
        let sql = format!(
            "INSERT INTO notifications
                 (recipient_id, title, message, type, is_read, related_story_id, related_comment_id, created_at)
             VALUES ($1, $2, $3, $4, FALSE, $5, $6, $7)
             RETURNING {NOTIFICATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(i64::from(notification.recipient_id))
            .bind(notification.title)
            .bind(notification.message)
            .bind(notification.kind.as_str())
            .bind(notification.related_story_id.map(i64::from))
            .bind(notification.related_comment_id.map(i64::from))
            .bind(notification.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Notification::try_from(row)
    }

    async fn find_by_id(&self, id: NotificationId) -> DomainResult<Option<Notification>> {
        let sql = format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = $1");
        let row = sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Notification::try_from).transpose()
    }

    async fn list_for_recipient(
        &self,
        recipient_id: UserId,
        unread_only: bool,
    ) -> DomainResult<Vec<Notification>> {
        let sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE recipient_id = $1 AND (NOT $2 OR NOT is_read)
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(i64::from(recipient_id))
            .bind(unread_only)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    async fn mark_read(&self, id: NotificationId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("notification not found".into()));
        }
        Ok(())
    }

    async fn mark_all_read(&self, recipient_id: UserId) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE recipient_id = $1 AND NOT is_read",
        )
        .bind(i64::from(recipient_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn count_unread(&self, recipient_id: UserId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND NOT is_read",
        )
        .bind(i64::from(recipient_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(non_negative(count))
    }
}
