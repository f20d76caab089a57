// src/infrastructure/repositories/counters.rs
//! Denormalised story counters. Always changed in SQL, never read-modify-write,
//! and always on the caller's transaction so the counter moves with its row.
//! Counters of a soft-deleted story are frozen.
use sqlx::PgConnection;

use crate::domain::story::StoryId;

#[derive(Debug, Clone, Copy)]
pub(super) enum StoryCounter {
    Likes,
    Comments,
}

impl StoryCounter {
    fn column(self) -> &'static str {
        match self {
            StoryCounter::Likes => "like_count",
            StoryCounter::Comments => "comment_count",
        }
    }
}

pub(super) async fn increment(
    conn: &mut PgConnection,
    story_id: StoryId,
    counter: StoryCounter,
) -> Result<(), sqlx::Error> {
    let column = counter.column();
    let sql = format!("UPDATE stories SET {column} = {column} + 1 WHERE id = $1 AND is_active");
    sqlx::query(&sql)
        .bind(i64::from(story_id))
        .execute(conn)
        .await?;
    Ok(())
}

/// Floors at zero.
pub(super) async fn decrement(
    conn: &mut PgConnection,
    story_id: StoryId,
    counter: StoryCounter,
) -> Result<(), sqlx::Error> {
    let column = counter.column();
    let sql = format!(
        "UPDATE stories SET {column} = GREATEST({column} - 1, 0) WHERE id = $1 AND is_active"
    );
    sqlx::query(&sql)
        .bind(i64::from(story_id))
        .execute(conn)
        .await?;
    Ok(())
}
