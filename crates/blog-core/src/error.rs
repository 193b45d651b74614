//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::validation::Violations;

/// Post validation errors - raised by the validator, never recovered there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostValidationError {
    #[error("Post is null.")]
    NullPost,

    #[error("Invalid post. Please correct the errors and try again: {0}")]
    InvalidPost(Violations),

    #[error("Couldn't find post with id: {id}.")]
    NotFoundPost { id: Uuid },
}

impl PostValidationError {
    /// Violation record, when this is an aggregated validation failure.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::InvalidPost(violations) => Some(violations),
            _ => None,
        }
    }
}

impl From<Violations> for PostValidationError {
    fn from(violations: Violations) -> Self {
        Self::InvalidPost(violations)
    }
}

/// Post service errors - every failure surfaced by the post service.
#[derive(Debug, Error)]
pub enum PostServiceError {
    #[error("Post validation error occurred, fix the errors and try again.")]
    Validation(#[from] PostValidationError),

    #[error("Post dependency validation error occurred, fix the errors and try again.")]
    DependencyValidation(#[source] RepoError),

    #[error("Post dependency error occurred, contact support.")]
    Dependency(#[source] RepoError),

    #[error("Post critical dependency error occurred, contact support.")]
    CriticalDependency(#[source] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Entity was changed by another write: {0}")]
    Conflict(String),
}
