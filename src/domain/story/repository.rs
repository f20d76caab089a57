use crate::domain::errors::DomainResult;
use crate::domain::story::entity::{NewStory, Story, StoryUpdate};
use crate::domain::story::value_objects::{StoryId, StorySlug};
use async_trait::async_trait;

#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Returns the row whether or not it is active.
    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>>;
    async fn find_by_slug(&self, slug: &StorySlug) -> DomainResult<Option<Story>>;
    /// The story that holds or once held `slug`. Slugs left behind by a
    /// rename stay with their story.
    async fn slug_owner(&self, slug: &StorySlug) -> DomainResult<Option<StoryId>>;
    /// Fails with `DomainError::SlugTaken` when the slug is already stored.
    async fn insert(&self, story: NewStory) -> DomainResult<Story>;
    /// Applies the update only if the row still carries
    /// `original_updated_at`; fails with `DomainError::Conflict` otherwise and
    /// with `DomainError::SlugTaken` on a slug collision. A replaced slug is
    /// retired, never released.
    async fn update(&self, update: StoryUpdate) -> DomainResult<Story>;
    /// Atomically bumps `view_count`.
    async fn record_view(&self, id: StoryId) -> DomainResult<()>;
}
