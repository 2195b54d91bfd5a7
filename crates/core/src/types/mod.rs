//! Core types for ScaleHouse.

pub mod category;
pub mod email;
pub mod id;

pub use category::ProductCategory;
pub use email::{Email, EmailError};
pub use id::{AdminUserId, ProductId};
