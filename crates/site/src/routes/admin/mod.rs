//! Admin panel route handlers.

pub mod auth;
pub mod dashboard;
pub mod products;
