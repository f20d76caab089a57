use std::sync::Arc;

use crate::{
    application::{
        dto::CommentThreadDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentRepository, CommentThread},
        story::{StoryId, StoryRepository},
    },
};

pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
    stories: Arc<dyn StoryRepository>,
}

impl CommentQueryService {
    pub fn new(comments: Arc<dyn CommentRepository>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { comments, stories }
    }

    /// Approved, active top-level comments of a story, each with its approved
    /// active replies, oldest first.
    pub async fn list_top_level(&self, story_id: i64) -> ApplicationResult<Vec<CommentThreadDto>> {
        let story_id = StoryId::new(story_id)?;
        self.stories
            .find_by_id(story_id)
            .await?
            .filter(|story| story.is_active)
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;

        let comments = self.comments.list_visible_for_story(story_id).await?;
        Ok(CommentThread::assemble(comments)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
