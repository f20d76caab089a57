use crate::domain::story::{Story, StoryStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub status: StoryStatus,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_editor_pick: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for StoryDto {
    fn from(story: Story) -> Self {
        Self {
            id: story.id.into(),
            title: story.title.into_inner(),
            slug: story.slug.into_inner(),
            content: story.content.into_inner(),
            summary: story.summary,
            status: story.status,
            author_id: story.author_id.into(),
            category_id: story.category_id.map(Into::into),
            tag_ids: story.tag_ids.into_iter().map(Into::into).collect(),
            view_count: story.view_count,
            like_count: story.like_count,
            comment_count: story.comment_count,
            is_editor_pick: story.is_editor_pick,
            published_at: story.published_at,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}
