// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Option<Username>,
    pub first_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }

    /// Name shown to other users: username, then first name, then `fallback`.
    pub fn display_name_or(&self, fallback: &str) -> String {
        if let Some(username) = &self.username {
            return username.as_str().to_string();
        }
        self.first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
