// src/infrastructure/repositories/postgres_comment.rs
use super::counters::{self, StoryCounter};
use super::{map_sqlx, non_negative};
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentRepository, CommentStatus, CommentUpdate,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::story::StoryId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "id, content, author_id, story_id, parent_id, status, like_count, \
     is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    author_id: i64,
    story_id: i64,
    parent_id: Option<i64>,
    status: String,
    like_count: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content: CommentContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            story_id: StoryId::new(row.story_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            status: row.status.parse::<CommentStatus>()?,
            like_count: non_negative(row.like_count),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            author_id,
            story_id,
            parent_id,
            status,
            created_at,
        } = comment;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO comments (content, author_id, story_id, parent_id, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(content.as_str())
            .bind(i64::from(author_id))
            .bind(i64::from(story_id))
            .bind(parent_id.map(i64::from))
            .bind(status.as_str())
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        counters::increment(&mut tx, story_id, StoryCounter::Comments)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let CommentUpdate {
            id,
            content,
            status,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE comments
             SET content = COALESCE($2, content),
                 status = COALESCE($3, status),
                 updated_at = $4
             WHERE id = $1
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .bind(content.map(CommentContent::into_inner))
            .bind(status.map(|s| s.as_str()))
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn deactivate(&self, id: CommentId, at: DateTime<Utc>) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let story_id: Option<i64> = sqlx::query_scalar(
            "UPDATE comments SET is_active = FALSE, updated_at = $2
             WHERE id = $1 AND is_active
             RETURNING story_id",
        )
        .bind(i64::from(id))
        .bind(at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some(story_id) = story_id else {
            tx.rollback().await.map_err(map_sqlx)?;
            return Ok(false);
        };

        counters::decrement(&mut tx, StoryId::new(story_id)?, StoryCounter::Comments)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(true)
    }

    async fn list_visible_for_story(&self, story_id: StoryId) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE story_id = $1 AND is_active AND status = $2
             ORDER BY created_at, id"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(story_id))
            .bind(CommentStatus::Approved.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
