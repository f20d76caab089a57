// src/application/commands/stories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::notifier::NotificationDispatcher,
    },
    domain::{
        engagement::FollowRepository,
        errors::DomainError,
        slug::SlugService,
        story::{NewStory, Story, StoryId, StoryRepository, StorySlug, StorySlugProbe, StoryUpdate},
    },
};

pub(super) const SLUG_FALLBACK_PREFIX: &str = "story";

pub struct StoryCommandService {
    pub(super) stories: Arc<dyn StoryRepository>,
    pub(super) follows: Arc<dyn FollowRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) notifier: Arc<NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl StoryCommandService {
    pub fn new(
        stories: Arc<dyn StoryRepository>,
        follows: Arc<dyn FollowRepository>,
        slug_service: Arc<SlugService>,
        notifier: Arc<NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stories,
            follows,
            slug_service,
            notifier,
            clock,
        }
    }

    pub(super) async fn load_active(&self, id: i64) -> ApplicationResult<Story> {
        let id = StoryId::new(id)?;
        self.stories
            .find_by_id(id)
            .await?
            .filter(|story| story.is_active)
            .ok_or_else(|| ApplicationError::not_found("story not found"))
    }

    pub(super) async fn unique_slug(
        &self,
        title: &str,
        owner: Option<StoryId>,
    ) -> ApplicationResult<StorySlug> {
        let probe = StorySlugProbe::new(self.stories.as_ref(), owner);
        let slug = self
            .slug_service
            .unique_slug_for(title, SLUG_FALLBACK_PREFIX, &probe)
            .await?;
        Ok(StorySlug::new(slug)?)
    }

    async fn reprobe_slug(
        &self,
        title: &str,
        owner: Option<StoryId>,
        lost: &StorySlug,
    ) -> ApplicationResult<StorySlug> {
        let probe = StorySlugProbe::new(self.stories.as_ref(), owner);
        let slug = self
            .slug_service
            .unique_slug_skipping(title, SLUG_FALLBACK_PREFIX, &probe, lost.as_str())
            .await?;
        tracing::debug!(lost = %lost, slug = %slug, "slug collision, retrying once");
        Ok(StorySlug::new(slug)?)
    }

    /// Inserts the story, re-probing the slug once if a concurrent insert
    /// claimed it between probe and write.
    pub(super) async fn insert_with_slug_retry(&self, new_story: NewStory) -> ApplicationResult<Story> {
        match self.stories.insert(new_story.clone()).await {
            Err(DomainError::SlugTaken(_)) => {
                let slug = self
                    .reprobe_slug(new_story.title.as_str(), None, &new_story.slug)
                    .await?;
                Ok(self.stories.insert(new_story.with_slug(slug)).await?)
            }
            other => Ok(other?),
        }
    }

    /// Update counterpart of [`Self::insert_with_slug_retry`].
    pub(super) async fn update_with_slug_retry(&self, update: StoryUpdate) -> ApplicationResult<Story> {
        match self.stories.update(update.clone()).await {
            Err(DomainError::SlugTaken(_)) => {
                let (Some(title), Some(lost)) = (update.title.clone(), update.slug.clone()) else {
                    return Err(ApplicationError::conflict("slug already in use"));
                };
                let slug = self.reprobe_slug(title.as_str(), Some(update.id), &lost).await?;
                Ok(self.stories.update(update.with_slug(slug)).await?)
            }
            other => Ok(other?),
        }
    }
}
