// src/infrastructure/repositories/mod.rs
mod counters;
mod error;
mod postgres_comment;
mod postgres_engagement;
mod postgres_notification;
mod postgres_story;
mod postgres_user;

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::Repositories;

pub use error::map_sqlx;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_engagement::{
    PostgresFollowRepository, PostgresLikeRepository, PostgresSavedStoryRepository,
};
pub use postgres_notification::PostgresNotificationRepository;
pub use postgres_story::PostgresStoryRepository;
pub use postgres_user::PostgresUserRepository;

/// Every repository backed by the same pool.
pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        stories: Arc::new(PostgresStoryRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        likes: Arc::new(PostgresLikeRepository::new(pool.clone())),
        follows: Arc::new(PostgresFollowRepository::new(pool.clone())),
        saves: Arc::new(PostgresSavedStoryRepository::new(pool.clone())),
        notifications: Arc::new(PostgresNotificationRepository::new(pool.clone())),
    }
}

/// Counters are `BIGINT ... CHECK (>= 0)` in the schema.
pub(crate) fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}
