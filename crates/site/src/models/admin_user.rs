//! Admin user model.

use chrono::{DateTime, Utc};

use scalehouse_core::{AdminUserId, Email};

/// An admin panel user.
///
/// Admin users are created only via the CLI; there is no self-registration.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}
