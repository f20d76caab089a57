use super::{
    EngagementCommandService,
    toggle::{self, Repeat},
};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::ApplicationResult,
        services::messages::{self, GENERIC_USER},
    },
    domain::engagement::LikeKey,
};

impl EngagementCommandService {
    /// Fails with `BadRequest` when the story is already liked by `actor`.
    pub async fn like_story(&self, actor: &AuthenticatedUser, story_id: i64) -> ApplicationResult<()> {
        let story = self.load_active_story(story_id).await?;
        let key = LikeKey::new(actor.id, story.id);
        toggle::activate(
            self.likes.as_ref(),
            &key,
            self.clock.now(),
            Repeat::Reject("story already liked"),
        )
        .await?;

        if !story.is_owned_by(actor.id) {
            let liker = self.notifier.display_name(actor.id, GENERIC_USER).await;
            self.notifier
                .notify(messages::story_liked(&story, &liker))
                .await;
        }
        Ok(())
    }

    pub async fn unlike_story(&self, actor: &AuthenticatedUser, story_id: i64) -> ApplicationResult<()> {
        let story = self.load_active_story(story_id).await?;
        let key = LikeKey::new(actor.id, story.id);
        toggle::deactivate(self.likes.as_ref(), &key, self.clock.now(), "like not found").await
    }
}
