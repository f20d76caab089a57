use super::StoryQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, StoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::{Story, StoryId},
};

pub struct GetStoryByIdQuery {
    pub id: i64,
}

impl StoryQueryService {
    /// Unpublished stories are reported missing to everyone but their author
    /// and administrators.
    fn ensure_actor_can_view_unpublished(
        actor: Option<&AuthenticatedUser>,
        story: &Story,
    ) -> ApplicationResult<()> {
        if story.is_published() {
            return Ok(());
        }

        let actor = actor.ok_or_else(|| ApplicationError::not_found("story not found"))?;
        if !actor.is_administrator() && !story.is_owned_by(actor.id) {
            return Err(ApplicationError::not_found("story not found"));
        }

        Ok(())
    }

    pub async fn get_story(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetStoryByIdQuery,
    ) -> ApplicationResult<StoryDto> {
        let id = StoryId::new(query.id)?;
        let story = self
            .stories
            .find_by_id(id)
            .await?
            .filter(|story| story.is_active)
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;

        Self::ensure_actor_can_view_unpublished(actor, &story)?;
        Ok(story.into())
    }
}
