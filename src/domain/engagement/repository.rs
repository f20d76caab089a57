// src/domain/engagement/repository.rs
use crate::domain::engagement::value_objects::{FollowCounts, FollowKey, LikeKey, SaveKey, Toggle};
use crate::domain::errors::DomainResult;
use crate::domain::story::StoryId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Soft-deleted membership relation keyed by `K`.
///
/// `activate` inserts the row or revives an inactive one and reports
/// `Toggle::Unchanged` when an active row already exists; the composite key is
/// the race guard, so two concurrent activations yield exactly one `Changed`.
/// `deactivate` reports `Toggle::Unchanged` when no active row exists.
#[async_trait]
pub trait ToggleRepository<K>: Send + Sync
where
    K: Send + Sync + 'static,
{
    async fn is_active(&self, key: &K) -> DomainResult<bool>;
    async fn activate(&self, key: &K, at: DateTime<Utc>) -> DomainResult<Toggle>;
    async fn deactivate(&self, key: &K, at: DateTime<Utc>) -> DomainResult<Toggle>;
}

/// Likes also move `stories.like_count` in the same transaction as the row:
/// +1 on `Changed` activation, -1 (floored at zero) on `Changed` deactivation.
pub trait LikeRepository: ToggleRepository<LikeKey> {}

#[async_trait]
pub trait FollowRepository: ToggleRepository<FollowKey> {
    async fn active_followers(&self, followed_id: UserId) -> DomainResult<Vec<UserId>>;
    async fn counts(&self, user_id: UserId) -> DomainResult<FollowCounts>;
}

#[async_trait]
pub trait SavedStoryRepository: ToggleRepository<SaveKey> {
    async fn saved_story_ids(&self, user_id: UserId) -> DomainResult<Vec<StoryId>>;
}
