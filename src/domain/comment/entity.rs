// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentStatus};
use crate::domain::story::StoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub author_id: UserId,
    pub story_id: StoryId,
    pub parent_id: Option<CommentId>,
    pub status: CommentStatus,
    pub like_count: u64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.is_active && self.status == CommentStatus::Approved
    }

    /// Edits go back through moderation even though new comments do not.
    pub fn edit(&mut self, content: CommentContent, now: DateTime<Utc>) {
        self.content = content;
        self.status = CommentStatus::Pending;
        self.updated_at = now;
    }

    pub fn moderate(&mut self, status: CommentStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

/// Comments are published on creation and only taken down afterwards.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub author_id: UserId,
    pub story_id: StoryId,
    pub parent_id: Option<CommentId>,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn approved(
        content: CommentContent,
        author_id: UserId,
        story_id: StoryId,
        parent_id: Option<CommentId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content,
            author_id,
            story_id,
            parent_id,
            status: CommentStatus::Approved,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub content: Option<CommentContent>,
    pub status: Option<CommentStatus>,
    pub updated_at: DateTime<Utc>,
}

impl CommentUpdate {
    pub fn new(id: CommentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_content(mut self, content: CommentContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: CommentStatus) -> Self {
        self.status = Some(status);
        self
    }
}
