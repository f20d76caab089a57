// src/application/commands/stories/update.rs
use super::StoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, StoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::{CategoryId, StoryContent, StoryTitle, StoryUpdate, TagId},
};

/// Fields left as `None` keep their stored value.
#[derive(Default)]
pub struct UpdateStoryCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
}

impl StoryCommandService {
    pub async fn update_story(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        let mut story = self.load_active(command.id).await?;
        if !story.is_owned_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "only the author can edit a story",
            ));
        }

        let UpdateStoryCommand {
            id: _,
            title,
            content,
            summary,
            category_id,
            tag_ids,
        } = command;

        let now = self.clock.now();
        let mut update = StoryUpdate::new(story.id, story.updated_at);

        if let Some(title) = title.map(StoryTitle::new).transpose()? {
            if title != story.title {
                let slug = self.unique_slug(title.as_str(), Some(story.id)).await?;
                story.rename(title.clone(), slug.clone(), now);
                update = update.with_title(title).with_slug(slug);
            }
        }
        if let Some(content) = content.map(StoryContent::new).transpose()? {
            update = update.with_content(content);
        }
        if let Some(summary) = summary {
            update = update.with_summary(summary);
        }
        if let Some(category_id) = category_id.map(CategoryId::new).transpose()? {
            update = update.with_category(category_id);
        }
        if let Some(tag_ids) = tag_ids {
            let mut tag_ids = tag_ids
                .into_iter()
                .map(TagId::new)
                .collect::<Result<Vec<_>, _>>()?;
            tag_ids.sort_unstable();
            tag_ids.dedup();
            update = update.with_tags(tag_ids);
        }

        update.set_updated_at(now);
        let updated = self.update_with_slug_retry(update).await?;
        Ok(updated.into())
    }
}
