// src/application/commands/stories/create.rs
use super::StoryCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, StoryDto},
        error::ApplicationResult,
    },
    domain::story::{CategoryId, NewStory, StoryContent, StoryTitle, TagId},
};

pub struct CreateStoryCommand {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl CreateStoryCommand {
    pub fn builder() -> CreateStoryCommandBuilder {
        CreateStoryCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateStoryCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    summary: Option<String>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
}

impl CreateStoryCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag_id(mut self, tag_id: i64) -> Self {
        self.tag_ids.push(tag_id);
        self
    }

    pub fn build(self) -> Result<CreateStoryCommand, &'static str> {
        Ok(CreateStoryCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            summary: self.summary,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
        })
    }
}

impl StoryCommandService {
    /// Creates a draft owned by `actor`.
    pub async fn create_story(
        &self,
        actor: &AuthenticatedUser,
        command: CreateStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        let title = StoryTitle::new(command.title)?;
        let content = StoryContent::new(command.content)?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        let mut tag_ids = command
            .tag_ids
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        let slug = self.unique_slug(title.as_str(), None).await?;
        let new_story = NewStory {
            title,
            slug,
            content,
            summary: command.summary,
            author_id: actor.id,
            category_id,
            tag_ids,
            created_at: self.clock.now(),
        };

        let created = self.insert_with_slug_retry(new_story).await?;
        tracing::info!(story_id = i64::from(created.id), slug = %created.slug, "story created");
        Ok(created.into())
    }
}
