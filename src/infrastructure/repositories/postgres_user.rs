use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Role, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: Option<String>,
    first_name: Option<String>,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: row.username.and_then(Username::from_stored),
            first_name: row.first_name,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, first_name, role, is_active, created_at FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: Option<&str>) -> UserRow {
        UserRow {
            id: 5,
            username: username.map(str::to_string),
            first_name: Some("Deniz".into()),
            role: "writer".into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn short_stored_username_still_decodes() {
        let user = User::try_from(row(Some("al"))).unwrap();
        assert_eq!(user.username.unwrap().as_str(), "al");
    }

    #[test]
    fn blank_stored_username_decodes_as_missing() {
        let user = User::try_from(row(Some(" "))).unwrap();
        assert!(user.username.is_none());
        assert_eq!(user.first_name.as_deref(), Some("Deniz"));
    }
}
