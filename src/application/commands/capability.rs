// src/application/commands/capability.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub(crate) fn ensure_administrator(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_administrator() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("administrator role required"))
    }
}

/// Rejects access to another user's private data.
pub(crate) fn ensure_self(actor: &AuthenticatedUser, owner: UserId) -> ApplicationResult<()> {
    if actor.id == owner {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "cannot access another user's notifications",
        ))
    }
}
