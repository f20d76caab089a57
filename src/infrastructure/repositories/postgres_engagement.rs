// src/infrastructure/repositories/postgres_engagement.rs
//! Soft-deleted membership tables: `story_likes`, `follows`, `saved_stories`.
//!
//! Activation relies on the composite primary key: the upsert only touches an
//! inactive row, so a concurrent duplicate gets no row back and reports
//! `Toggle::Unchanged`.
use super::counters::{self, StoryCounter};
use super::{map_sqlx, non_negative};
use crate::domain::engagement::{
    FollowCounts, FollowKey, FollowRepository, LikeKey, LikeRepository, SaveKey,
    SavedStoryRepository, Toggle, ToggleRepository,
};
use crate::domain::errors::DomainResult;
use crate::domain::story::StoryId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

/// Table and key columns of one relation.
#[derive(Debug, Clone, Copy)]
struct Relation {
    table: &'static str,
    left: &'static str,
    right: &'static str,
}

const LIKES: Relation = Relation {
    table: "story_likes",
    left: "user_id",
    right: "story_id",
};

const FOLLOWS: Relation = Relation {
    table: "follows",
    left: "follower_id",
    right: "followed_id",
};

const SAVES: Relation = Relation {
    table: "saved_stories",
    left: "user_id",
    right: "story_id",
};

impl Relation {
    async fn is_active(self, conn: &mut PgConnection, left: i64, right: i64) -> sqlx::Result<bool> {
        let Relation { table, left: l, right: r } = self;
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {table} WHERE {l} = $1 AND {r} = $2 AND is_active)"
        );
        sqlx::query_scalar(&sql)
            .bind(left)
            .bind(right)
            .fetch_one(conn)
            .await
    }

    async fn activate(
        self,
        conn: &mut PgConnection,
        left: i64,
        right: i64,
        at: DateTime<Utc>,
    ) -> sqlx::Result<Toggle> {
        let Relation { table, left: l, right: r } = self;
        let sql = format!(
            "INSERT INTO {table} ({l}, {r}, is_active, created_at, updated_at)
             VALUES ($1, $2, TRUE, $3, $3)
             ON CONFLICT ({l}, {r}) DO UPDATE
                 SET is_active = TRUE, updated_at = EXCLUDED.updated_at
                 WHERE {table}.is_active = FALSE
             RETURNING {l}"
        );
        let changed: Option<i64> = sqlx::query_scalar(&sql)
            .bind(left)
            .bind(right)
            .bind(at)
            .fetch_optional(conn)
            .await?;
        Ok(toggle(changed.is_some()))
    }

    async fn deactivate(
        self,
        conn: &mut PgConnection,
        left: i64,
        right: i64,
        at: DateTime<Utc>,
    ) -> sqlx::Result<Toggle> {
        let Relation { table, left: l, right: r } = self;
        let sql = format!(
            "UPDATE {table} SET is_active = FALSE, updated_at = $3
             WHERE {l} = $1 AND {r} = $2 AND is_active"
        );
        let result = sqlx::query(&sql)
            .bind(left)
            .bind(right)
            .bind(at)
            .execute(conn)
            .await?;
        Ok(toggle(result.rows_affected() > 0))
    }
}

fn toggle(changed: bool) -> Toggle {
    if changed {
        Toggle::Changed
    } else {
        Toggle::Unchanged
    }
}

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToggleRepository<LikeKey> for PostgresLikeRepository {
    async fn is_active(&self, key: &LikeKey) -> DomainResult<bool> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        LIKES
            .is_active(&mut conn, key.user_id.into(), key.story_id.into())
            .await
            .map_err(map_sqlx)
    }

    async fn activate(&self, key: &LikeKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let outcome = LIKES
            .activate(&mut tx, key.user_id.into(), key.story_id.into(), at)
            .await
            .map_err(map_sqlx)?;
        if outcome == Toggle::Changed {
            counters::increment(&mut tx, key.story_id, StoryCounter::Likes)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(outcome)
    }

    async fn deactivate(&self, key: &LikeKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let outcome = LIKES
            .deactivate(&mut tx, key.user_id.into(), key.story_id.into(), at)
            .await
            .map_err(map_sqlx)?;
        if outcome == Toggle::Changed {
            counters::decrement(&mut tx, key.story_id, StoryCounter::Likes)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(outcome)
    }
}

impl LikeRepository for PostgresLikeRepository {}

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToggleRepository<FollowKey> for PostgresFollowRepository {
    async fn is_active(&self, key: &FollowKey) -> DomainResult<bool> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        FOLLOWS
            .is_active(&mut conn, key.follower_id.into(), key.followed_id.into())
            .await
            .map_err(map_sqlx)
    }

    async fn activate(&self, key: &FollowKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        FOLLOWS
            .activate(&mut conn, key.follower_id.into(), key.followed_id.into(), at)
            .await
            .map_err(map_sqlx)
    }

    async fn deactivate(&self, key: &FollowKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        FOLLOWS
            .deactivate(&mut conn, key.follower_id.into(), key.followed_id.into(), at)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn active_followers(&self, followed_id: UserId) -> DomainResult<Vec<UserId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT follower_id FROM follows
             WHERE followed_id = $1 AND is_active
             ORDER BY created_at, follower_id",
        )
        .bind(i64::from(followed_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }

    async fn counts(&self, user_id: UserId) -> DomainResult<FollowCounts> {
        let (followers, following): (i64, i64) = sqlx::query_as(
            "SELECT
                 (SELECT COUNT(*) FROM follows WHERE followed_id = $1 AND is_active),
                 (SELECT COUNT(*) FROM follows WHERE follower_id = $1 AND is_active)",
        )
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(FollowCounts {
            followers: non_negative(followers),
            following: non_negative(following),
        })
    }
}

#[derive(Clone)]
pub struct PostgresSavedStoryRepository {
    pool: PgPool,
}

impl PostgresSavedStoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToggleRepository<SaveKey> for PostgresSavedStoryRepository {
    async fn is_active(&self, key: &SaveKey) -> DomainResult<bool> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        SAVES
            .is_active(&mut conn, key.user_id.into(), key.story_id.into())
            .await
            .map_err(map_sqlx)
    }

    async fn activate(&self, key: &SaveKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        SAVES
            .activate(&mut conn, key.user_id.into(), key.story_id.into(), at)
            .await
            .map_err(map_sqlx)
    }

    async fn deactivate(&self, key: &SaveKey, at: DateTime<Utc>) -> DomainResult<Toggle> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        SAVES
            .deactivate(&mut conn, key.user_id.into(), key.story_id.into(), at)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl SavedStoryRepository for PostgresSavedStoryRepository {
    async fn saved_story_ids(&self, user_id: UserId) -> DomainResult<Vec<StoryId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT story_id FROM saved_stories
             WHERE user_id = $1 AND is_active
             ORDER BY updated_at DESC, story_id DESC",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(StoryId::new).collect()
    }
}
