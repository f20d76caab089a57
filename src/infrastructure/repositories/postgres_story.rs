// src/infrastructure/repositories/postgres_story.rs
use super::{map_sqlx, non_negative};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::story::{
    CategoryId, NewStory, Story, StoryContent, StoryId, StoryRepository, StorySlug, StoryStatus,
    StoryTitle, StoryUpdate, TagId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const STORY_COLUMNS: &str = "id, title, slug, content, summary, status, author_id, category_id, tag_ids, \
     view_count, like_count, comment_count, is_editor_pick, is_active, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresStoryRepository {
    pool: PgPool,
}

impl PostgresStoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Records `slug` as held by `story_id`. Re-claiming one of the story's own
/// retired slugs is allowed; a slug held by any other story is `SlugTaken`.
async fn claim_slug(
    conn: &mut PgConnection,
    slug: &str,
    story_id: i64,
    at: DateTime<Utc>,
) -> DomainResult<()> {
    let claimed: Option<i64> = sqlx::query_scalar(
        "INSERT INTO story_slugs (slug, story_id, claimed_at) VALUES ($1, $2, $3)
         ON CONFLICT (slug) DO UPDATE SET claimed_at = EXCLUDED.claimed_at
         WHERE story_slugs.story_id = EXCLUDED.story_id
         RETURNING story_id",
    )
    .bind(slug)
    .bind(story_id)
    .bind(at)
    .fetch_optional(conn)
    .await
    .map_err(map_sqlx)?;

    match claimed {
        Some(_) => Ok(()),
        None => Err(DomainError::SlugTaken("story slug already exists".into())),
    }
}

#[derive(Debug, FromRow)]
struct StoryRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    summary: Option<String>,
    status: String,
    author_id: i64,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    view_count: i64,
    like_count: i64,
    comment_count: i64,
    is_editor_pick: bool,
    is_active: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<StoryRow> for Story {
    type Error = DomainError;

    fn try_from(row: StoryRow) -> Result<Self, Self::Error> {
        Ok(Story {
            id: StoryId::new(row.id)?,
            title: StoryTitle::new(row.title)?,
            slug: StorySlug::new(row.slug)?,
            content: StoryContent::new(row.content)?,
            summary: row.summary,
            status: row.status.parse::<StoryStatus>()?,
            author_id: UserId::new(row.author_id)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            tag_ids: row
                .tag_ids
                .into_iter()
                .map(TagId::new)
                .collect::<Result<Vec<_>, _>>()?,
            view_count: non_negative(row.view_count),
            like_count: non_negative(row.like_count),
            comment_count: non_negative(row.comment_count),
            is_editor_pick: row.is_editor_pick,
            is_active: row.is_active,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>> {
        let sql = format!("SELECT {STORY_COLUMNS} FROM stories WHERE id = $1");
        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Story::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &StorySlug) -> DomainResult<Option<Story>> {
        let sql = format!("SELECT {STORY_COLUMNS} FROM stories WHERE slug = $1");
        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Story::try_from).transpose()
    }

    async fn slug_owner(&self, slug: &StorySlug) -> DomainResult<Option<StoryId>> {
        let owner: Option<i64> =
            sqlx::query_scalar("SELECT story_id FROM story_slugs WHERE slug = $1")
                .bind(slug.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        owner.map(StoryId::new).transpose()
    }

    async fn insert(&self, story: NewStory) -> DomainResult<Story> {
        let NewStory {
            title,
            slug,
            content,
            summary,
            author_id,
            category_id,
            tag_ids,
            created_at,
        } = story;

        let sql = format!(
            "INSERT INTO stories (title, slug, content, summary, status, author_id, category_id, tag_ids, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {STORY_COLUMNS}"
        );
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, StoryRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(content.as_str())
            .bind(summary)
            .bind(StoryStatus::Draft.as_str())
            .bind(i64::from(author_id))
            .bind(category_id.map(i64::from))
            .bind(tag_ids.into_iter().map(i64::from).collect::<Vec<_>>())
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        claim_slug(&mut tx, &row.slug, row.id, created_at).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Story::try_from(row)
    }

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story> {
        let StoryUpdate {
            id,
            title,
            slug,
            content,
            summary,
            category_id,
            tag_ids,
            status,
            is_editor_pick,
            is_active,
            original_updated_at,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        if let Some(slug) = &slug {
            claim_slug(&mut tx, slug.as_str(), i64::from(id), updated_at).await?;
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE stories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(summary);
        }
        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(tag_ids) = tag_ids {
            builder.push(", tag_ids = ");
            builder.push_bind(tag_ids.into_iter().map(i64::from).collect::<Vec<_>>());
        }
        if let Some(change) = status {
            builder.push(", status = ");
            builder.push_bind(change.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(change.published_at);
        }
        if let Some(is_editor_pick) = is_editor_pick {
            builder.push(", is_editor_pick = ");
            builder.push_bind(is_editor_pick);
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(STORY_COLUMNS);

        let maybe_row = builder
            .build_query_as::<StoryRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("story update conflict, please retry".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Story::try_from(row)
    }

    async fn record_view(&self, id: StoryId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE stories SET view_count = view_count + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("story not found".into()));
        }
        Ok(())
    }
}
