// src/application/commands/stories/moderate.rs
use super::StoryCommandService;
use crate::{
    application::{
        commands::capability::ensure_administrator,
        dto::{AuthenticatedUser, StoryDto},
        error::ApplicationResult,
        services::messages::{self, GENERIC_WRITER},
    },
    domain::story::{Story, StoryUpdate},
};

pub struct ApproveStoryCommand {
    pub id: i64,
}

pub struct RejectStoryCommand {
    pub id: i64,
    pub reason: Option<String>,
}

pub struct ToggleEditorPickCommand {
    pub id: i64,
}

impl StoryCommandService {
    /// Publishes the story and tells every active follower of its author.
    /// The approval is committed before the fan-out starts and stands no
    /// matter how many notifications fail.
    pub async fn approve_story(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        ensure_administrator(actor)?;
        let mut story = self.load_active(command.id).await?;
        let original_updated_at = story.updated_at;
        story.approve(self.clock.now());

        let mut update = StoryUpdate::new(story.id, original_updated_at)
            .with_status(story.status, story.published_at);
        update.set_updated_at(story.updated_at);
        let published = self.stories.update(update).await?;

        self.announce_publication(&published).await;
        Ok(published.into())
    }

    async fn announce_publication(&self, story: &Story) {
        let story_id = i64::from(story.id);
        let followers = match self.follows.active_followers(story.author_id).await {
            Ok(followers) => followers,
            Err(err) => {
                tracing::warn!(story_id, error = %err, "could not load followers, skipping fan-out");
                return;
            }
        };
        if followers.is_empty() {
            return;
        }

        let author = self
            .notifier
            .display_name(story.author_id, GENERIC_WRITER)
            .await;
        let follower_count = followers.len();
        let report = self
            .notifier
            .fan_out(followers, |follower| {
                messages::story_published(follower, story, &author)
            })
            .await;

        tracing::info!(
            story_id,
            follower_count,
            delivered = report.delivered,
            failed = report.failed,
            "story publication fan-out finished"
        );
    }

    /// The reason is logged only; it is neither stored nor sent to the author.
    pub async fn reject_story(
        &self,
        actor: &AuthenticatedUser,
        command: RejectStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        ensure_administrator(actor)?;
        let mut story = self.load_active(command.id).await?;
        let original_updated_at = story.updated_at;
        story.reject(self.clock.now());

        let mut update = StoryUpdate::new(story.id, original_updated_at)
            .with_status(story.status, story.published_at);
        update.set_updated_at(story.updated_at);
        let rejected = self.stories.update(update).await?;

        tracing::info!(
            story_id = i64::from(rejected.id),
            admin_id = i64::from(actor.id),
            admin = %actor.username,
            reason = command.reason.as_deref().unwrap_or(""),
            "story rejected"
        );
        Ok(rejected.into())
    }

    pub async fn toggle_editor_pick(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleEditorPickCommand,
    ) -> ApplicationResult<StoryDto> {
        ensure_administrator(actor)?;
        let mut story = self.load_active(command.id).await?;
        let original_updated_at = story.updated_at;
        let picked = story.toggle_editor_pick(self.clock.now())?;

        let mut update = StoryUpdate::new(story.id, original_updated_at).with_editor_pick(picked);
        update.set_updated_at(story.updated_at);
        Ok(self.stories.update(update).await?.into())
    }
}
