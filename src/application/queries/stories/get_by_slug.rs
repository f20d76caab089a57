use super::StoryQueryService;
use crate::{
    application::{
        dto::StoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::StorySlug,
};

pub struct GetStoryBySlugQuery {
    pub slug: String,
}

impl StoryQueryService {
    /// Public read of a live story; counts as one view.
    pub async fn get_story_by_slug(&self, query: GetStoryBySlugQuery) -> ApplicationResult<StoryDto> {
        let slug = StorySlug::new(query.slug)?;
        let mut story = self
            .stories
            .find_by_slug(&slug)
            .await?
            .filter(|story| story.is_active && story.is_published())
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;

        self.stories.record_view(story.id).await?;
        story.view_count += 1;
        Ok(story.into())
    }
}
