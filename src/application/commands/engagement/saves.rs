use super::{
    EngagementCommandService,
    toggle::{self, Repeat},
};
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::engagement::SaveKey,
};

impl EngagementCommandService {
    /// Saving an already saved story succeeds without changes.
    pub async fn save_story(&self, actor: &AuthenticatedUser, story_id: i64) -> ApplicationResult<()> {
        let story = self.load_active_story(story_id).await?;
        let key = SaveKey::new(actor.id, story.id);
        toggle::activate(self.saves.as_ref(), &key, self.clock.now(), Repeat::Allow).await?;
        Ok(())
    }

    pub async fn unsave_story(&self, actor: &AuthenticatedUser, story_id: i64) -> ApplicationResult<()> {
        let story = self.load_active_story(story_id).await?;
        let key = SaveKey::new(actor.id, story.id);
        toggle::deactivate(
            self.saves.as_ref(),
            &key,
            self.clock.now(),
            "story is not saved",
        )
        .await
    }
}
