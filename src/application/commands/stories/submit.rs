use super::StoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, StoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::StoryUpdate,
};

pub struct SubmitStoryCommand {
    pub id: i64,
}

impl StoryCommandService {
    pub async fn submit_story(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        let mut story = self.load_active(command.id).await?;
        if !story.is_owned_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "only the author can submit a story",
            ));
        }

        let original_updated_at = story.updated_at;
        story.submit_for_review(self.clock.now())?;

        let mut update = StoryUpdate::new(story.id, original_updated_at)
            .with_status(story.status, story.published_at);
        update.set_updated_at(story.updated_at);
        let updated = self.stories.update(update).await?;
        Ok(updated.into())
    }
}
