use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::story::StoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Stores the comment and increments the story's `comment_count` in the
    /// same transaction.
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;

    /// Marks the comment inactive and decrements the story's `comment_count`
    /// (never below zero) in the same transaction. Returns `false` when the
    /// comment was already inactive, in which case nothing changes.
    async fn deactivate(&self, id: CommentId, at: DateTime<Utc>) -> DomainResult<bool>;

    /// Active, approved comments of a story, oldest first.
    async fn list_visible_for_story(&self, story_id: StoryId) -> DomainResult<Vec<Comment>>;
}
