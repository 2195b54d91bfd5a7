//! Admin authentication service.
//!
//! Email + argon2 password authentication for the admin panel. Admin accounts
//! are created via the CLI; there is no self-registration and no password
//! reset flow.

mod error;

pub use error::AuthError;

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use sqlx::PgPool;

use scalehouse_core::Email;

use crate::db::AdminUserRepository;
use crate::models::AdminUser;

/// Admin authentication service.
pub struct AuthService<'a> {
    users: AdminUserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: AdminUserRepository::new(pool),
        }
    }

    /// Verify an email/password pair against the admin user table.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any credential failure -
    /// malformed email, unknown email, or wrong password - so callers present
    /// one uniform message. Returns `AuthError::Repository` if the lookup
    /// fails.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminUser, AuthError> {
        let email = Email::parse(email.trim()).map_err(|_| AuthError::InvalidCredentials)?;

        let Some((user, password_hash)) = self.users.get_with_password_hash(&email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        let parsed_hash = PasswordHash::new(&password_hash).map_err(|_| AuthError::InvalidHash)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(user)
    }

    /// Create an admin user from a plaintext password (CLI only).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Hashing` if hashing fails, or
    /// `AuthError::Repository` if the insert fails (including duplicate
    /// emails).
    pub async fn create_user(&self, email: &Email, password: &str) -> Result<AdminUser, AuthError> {
        let password_hash = hash_password(password)?;
        let user = self.users.create(email, &password_hash).await?;
        Ok(user)
    }
}

/// Hash a password into a PHC string with argon2 and a random salt.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_produces_phc_string() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hash_verifies_against_original_password() {
        let hash = hash_password("correct horse battery staple").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(
            Argon2::default()
                .verify_password(b"correct horse battery staple", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrong password", &parsed)
                .is_err()
        );
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }
}
