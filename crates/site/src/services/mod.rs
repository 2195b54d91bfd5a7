//! External service clients and application services.

pub mod auth;
pub mod storage;

pub use auth::{AuthError, AuthService};
pub use storage::{StorageClient, StorageError};
