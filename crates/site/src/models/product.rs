//! Catalogue product model.

use chrono::{DateTime, Utc};

use scalehouse_core::{ProductCategory, ProductId};

/// A published catalogue product.
///
/// Rows are created through the admin publish flow and read everywhere else;
/// there is no update or delete path in the UI.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Stored as free text - no category table, no referential invariant.
    pub category: ProductCategory,
    pub description: String,
    /// Public URL of the uploaded image in object storage.
    pub image_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new catalogue row.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    pub image_url: String,
}
