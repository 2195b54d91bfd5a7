//! Middleware for the site.

pub mod admin_gate;
pub mod auth;
pub mod session;

pub use admin_gate::require_admin_cookie;
pub use auth::{RequireAdminAuth, clear_current_admin, set_current_admin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
