//! Authentication service errors.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from admin authentication.
///
/// Credential failures are deliberately collapsed into one variant so the
/// login page cannot leak which part of the credentials was wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email, wrong password, or malformed email input.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// The lockout guard is active for this session.
    #[error("too many failed attempts")]
    LockedOut,

    /// A stored password hash could not be parsed.
    #[error("invalid password hash in database")]
    InvalidHash,

    /// Password hashing failed.
    #[error("password hashing error: {0}")]
    Hashing(String),

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
