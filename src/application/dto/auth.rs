use crate::domain::user::{Role, UserId};

/// Identity of the caller, supplied by the authentication layer.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
        }
    }

    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }
}
