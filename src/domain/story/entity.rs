// src/domain/story/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::story::value_objects::{
    CategoryId, StoryContent, StoryId, StorySlug, StoryStatus, StoryTitle, TagId,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Story {
    pub id: StoryId,
    pub title: StoryTitle,
    pub slug: StorySlug,
    pub content: StoryContent,
    pub summary: Option<String>,
    pub status: StoryStatus,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_editor_pick: bool,
    pub is_active: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn is_published(&self) -> bool {
        self.status == StoryStatus::Published
    }

    /// Hands the story to moderators. Drafts and rejected stories may be
    /// submitted; anything already in review or live may not.
    pub fn submit_for_review(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.status {
            StoryStatus::Draft | StoryStatus::Rejected => {
                self.status = StoryStatus::PendingReview;
                self.updated_at = now;
                Ok(())
            }
            StoryStatus::PendingReview => Err(DomainError::Validation(
                "story is already pending review".into(),
            )),
            StoryStatus::Published => {
                Err(DomainError::Validation("story is already published".into()))
            }
        }
    }

    pub fn approve(&mut self, now: DateTime<Utc>) {
        let published_at = now.max(self.created_at);
        self.status = StoryStatus::Published;
        self.published_at = Some(published_at);
        self.updated_at = published_at;
    }

    pub fn reject(&mut self, now: DateTime<Utc>) {
        self.status = StoryStatus::Rejected;
        self.updated_at = now;
    }

    /// Flips the editor pick flag and returns the new value.
    pub fn toggle_editor_pick(&mut self, now: DateTime<Utc>) -> DomainResult<bool> {
        if !self.is_published() {
            return Err(DomainError::Validation(
                "only published stories can be editor picks".into(),
            ));
        }
        self.is_editor_pick = !self.is_editor_pick;
        self.updated_at = now;
        Ok(self.is_editor_pick)
    }

    pub fn rename(&mut self, title: StoryTitle, slug: StorySlug, now: DateTime<Utc>) {
        self.title = title;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: StoryTitle,
    pub slug: StorySlug,
    pub content: StoryContent,
    pub summary: Option<String>,
    pub author_id: UserId,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
}

impl NewStory {
    pub fn with_slug(mut self, slug: StorySlug) -> Self {
        self.slug = slug;
        self
    }
}

#[derive(Debug, Clone)]
pub struct StatusChange {
    pub status: StoryStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct StoryUpdate {
    pub id: StoryId,
    pub title: Option<StoryTitle>,
    pub slug: Option<StorySlug>,
    pub content: Option<StoryContent>,
    pub summary: Option<String>,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Option<Vec<TagId>>,
    pub status: Option<StatusChange>,
    pub is_editor_pick: Option<bool>,
    pub is_active: Option<bool>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoryUpdate {
    pub fn new(id: StoryId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            summary: None,
            category_id: None,
            tag_ids: None,
            status: None,
            is_editor_pick: None,
            is_active: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: StoryTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: StorySlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: StoryContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn with_status(mut self, status: StoryStatus, published_at: Option<DateTime<Utc>>) -> Self {
        self.status = Some(StatusChange {
            status,
            published_at,
        });
        self
    }

    pub fn with_editor_pick(mut self, is_editor_pick: bool) -> Self {
        self.is_editor_pick = Some(is_editor_pick);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
