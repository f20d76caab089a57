use super::StoryCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::StoryUpdate,
};

pub struct DeleteStoryCommand {
    pub id: i64,
}

impl StoryCommandService {
    /// Soft delete. Comments and likes stay in place; the story's counters
    /// freeze with it.
    pub async fn delete_story(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteStoryCommand,
    ) -> ApplicationResult<()> {
        let mut story = self.load_active(command.id).await?;
        if !story.is_owned_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "only the author can delete a story",
            ));
        }

        let original_updated_at = story.updated_at;
        story.deactivate(self.clock.now());
        let mut update = StoryUpdate::new(story.id, original_updated_at).with_active(false);
        update.set_updated_at(story.updated_at);
        self.stories.update(update).await?;
        Ok(())
    }
}
