//! Domain models for the site.

pub mod admin_user;
pub mod product;
pub mod session;

pub use admin_user::AdminUser;
pub use product::{NewProduct, Product};
pub use session::{CurrentAdmin, LockoutState, session_keys};
