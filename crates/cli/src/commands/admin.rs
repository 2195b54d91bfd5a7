//! Admin account management commands.
//!
//! There is no self-registration on the site; this is the only way admin
//! accounts come into existence.

use scalehouse_core::Email;
use scalehouse_site::services::AuthService;

use super::{CommandError, connect};

/// Create a new admin user. The password is argon2-hashed before storage.
///
/// # Errors
///
/// Returns an error if the email is invalid, the database is unreachable,
/// or an account with this email already exists.
pub async fn create_user(email: &str, password: &str) -> Result<i32, CommandError> {
    let email =
        Email::parse(email.trim()).map_err(|e| CommandError::InvalidEmail(e.to_string()))?;

    let pool = connect().await?;

    tracing::info!("Creating admin user: {}", email);
    let user = AuthService::new(&pool).create_user(&email, password).await?;

    tracing::info!("Admin user created. ID: {}, Email: {}", user.id, user.email);
    Ok(user.id.as_i32())
}
