// src/domain/engagement/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::story::StoryId;
use crate::domain::user::UserId;

/// Result of an activate/deactivate request against a membership relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Changed,
    /// The relation was already in the requested state.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeKey {
    pub user_id: UserId,
    pub story_id: StoryId,
}

impl LikeKey {
    pub fn new(user_id: UserId, story_id: StoryId) -> Self {
        Self { user_id, story_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaveKey {
    pub user_id: UserId,
    pub story_id: StoryId,
}

impl SaveKey {
    pub fn new(user_id: UserId, story_id: StoryId) -> Self {
        Self { user_id, story_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowKey {
    pub follower_id: UserId,
    pub followed_id: UserId,
}

impl FollowKey {
    pub fn new(follower_id: UserId, followed_id: UserId) -> DomainResult<Self> {
        if follower_id == followed_id {
            return Err(DomainError::Validation(
                "users cannot follow themselves".into(),
            ));
        }
        Ok(Self {
            follower_id,
            followed_id,
        })
    }
}

/// Follower/following totals, computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowCounts {
    pub followers: u64,
    pub following: u64,
}
