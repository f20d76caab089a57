// src/application/commands/engagement/toggle.rs
use chrono::{DateTime, Utc};

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::engagement::{Toggle, ToggleRepository},
};

/// What a repeated activation means for a relation.
#[derive(Debug, Clone, Copy)]
pub(super) enum Repeat {
    /// A second activation is a client error carrying this message.
    Reject(&'static str),
    /// A second activation succeeds without changing anything.
    Allow,
}

/// Returns `true` when the relation changed.
pub(super) async fn activate<K, R>(
    repo: &R,
    key: &K,
    at: DateTime<Utc>,
    repeat: Repeat,
) -> ApplicationResult<bool>
where
    K: Send + Sync + 'static,
    R: ToggleRepository<K> + ?Sized,
{
    match (repo.activate(key, at).await?, repeat) {
        (Toggle::Changed, _) => Ok(true),
        (Toggle::Unchanged, Repeat::Allow) => Ok(false),
        (Toggle::Unchanged, Repeat::Reject(message)) => Err(ApplicationError::bad_request(message)),
    }
}

pub(super) async fn deactivate<K, R>(
    repo: &R,
    key: &K,
    at: DateTime<Utc>,
    missing: &'static str,
) -> ApplicationResult<()>
where
    K: Send + Sync + 'static,
    R: ToggleRepository<K> + ?Sized,
{
    match repo.deactivate(key, at).await? {
        Toggle::Changed => Ok(()),
        Toggle::Unchanged => Err(ApplicationError::not_found(missing)),
    }
}
