// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_STORY_SLUG: &str = "stories_slug_key";
const CNT_STORY_SLUG_CLAIM: &str = "story_slugs_pkey";
const CNT_STORY_AUTHOR: &str = "stories_author_id_fkey";
const CNT_COMMENT_STORY: &str = "comments_story_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_parent_id_fkey";
const CNT_FOLLOW_SELF: &str = "follows_not_self_chk";
const CNT_NOTIFICATION_RECIPIENT: &str = "notifications_recipient_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_STORY_SLUG | CNT_STORY_SLUG_CLAIM => {
                        DomainError::SlugTaken("story slug already exists".into())
                    }
                    CNT_STORY_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_COMMENT_STORY => DomainError::NotFound("story not found".into()),
                    CNT_COMMENT_PARENT => DomainError::NotFound("parent comment not found".into()),
                    CNT_FOLLOW_SELF => {
                        DomainError::Validation("users cannot follow themselves".into())
                    }
                    CNT_NOTIFICATION_RECIPIENT => {
                        DomainError::NotFound("notification recipient not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
