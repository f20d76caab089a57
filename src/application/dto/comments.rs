use crate::domain::comment::{Comment, CommentStatus, CommentThread};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub story_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub status: CommentStatus,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content.into_inner(),
            author_id: comment.author_id.into(),
            story_id: comment.story_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            status: comment.status,
            like_count: comment.like_count,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThreadDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub replies: Vec<CommentDto>,
}

impl From<CommentThread> for CommentThreadDto {
    fn from(thread: CommentThread) -> Self {
        Self {
            comment: thread.root.into(),
            replies: thread.replies.into_iter().map(Into::into).collect(),
        }
    }
}
