// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// Machine-readable classification handed to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Forbidden,
    Internal,
}

impl ErrorKind {
    /// Stable reason code; never localized.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Internal => "internal",
        }
    }
}

impl ApplicationError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::BadRequest(_) => ErrorKind::BadRequest,
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::Conflict(_) => ErrorKind::Conflict,
            ApplicationError::Forbidden(_) => ErrorKind::Forbidden,
            ApplicationError::Domain(err) => match err {
                DomainError::Validation(_) => ErrorKind::BadRequest,
                DomainError::NotFound(_) => ErrorKind::NotFound,
                DomainError::Conflict(_) | DomainError::SlugTaken(_) => ErrorKind::Conflict,
                DomainError::Persistence(_) => ErrorKind::Internal,
            },
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
