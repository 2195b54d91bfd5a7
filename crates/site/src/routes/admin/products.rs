//! Admin product publish flow.
//!
//! Publishing is a two-step pipeline: the image goes to object storage
//! first, then the catalogue row is inserted with the resulting public URL.
//! There is no rollback; if the insert fails the uploaded object is left
//! behind and logged for manual cleanup.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tracing::instrument;

use scalehouse_core::ProductCategory;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::{CurrentAdmin, NewProduct};
use crate::services::storage::object_key;
use crate::state::AppState;

/// A category option in the publish form dropdown.
pub struct CategoryOption {
    pub slug: String,
    pub label: String,
}

/// New product form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_new.html")]
pub struct ProductNewTemplate {
    pub categories: Vec<CategoryOption>,
    pub error: Option<String>,
}

fn category_options() -> Vec<CategoryOption> {
    ProductCategory::KNOWN
        .iter()
        .map(|category| CategoryOption {
            slug: category.as_str().to_string(),
            label: category.label(),
        })
        .collect()
}

/// Display the new product form.
pub async fn new_form(RequireAdminAuth(_admin): RequireAdminAuth) -> ProductNewTemplate {
    ProductNewTemplate {
        categories: category_options(),
        error: None,
    }
}

/// Parsed multipart fields for the publish form.
#[derive(Default)]
struct PublishFields {
    name: Option<String>,
    category: Option<String>,
    category_custom: Option<String>,
    description: Option<String>,
    image_filename: Option<String>,
    image_content_type: Option<String>,
    image_bytes: Option<Vec<u8>>,
}

async fn read_fields(mut multipart: Multipart) -> Result<PublishFields, AppError> {
    let mut fields = PublishFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let Some(field_name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "name" => {
                fields.name = Some(read_text(field).await?);
            }
            "category" => {
                fields.category = Some(read_text(field).await?);
            }
            "category_custom" => {
                fields.category_custom = Some(read_text(field).await?);
            }
            "description" => {
                fields.description = Some(read_text(field).await?);
            }
            "image" => {
                fields.image_filename = field.file_name().map(ToString::to_string);
                fields.image_content_type = field.content_type().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("failed to read image: {e}")))?;
                fields.image_bytes = Some(bytes.to_vec());
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown form field");
            }
        }
    }

    Ok(fields)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid form field: {e}")))
}

/// Handle the publish form: upload the image, then insert the product.
///
/// On failure the form is re-rendered with the user-facing message so the
/// admin can correct and resubmit; server errors are still captured first.
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    multipart: Multipart,
) -> Response {
    match publish(&state, &admin, multipart).await {
        Ok(redirect) => redirect.into_response(),
        Err(err) => {
            err.capture();
            let form = ProductNewTemplate {
                categories: category_options(),
                error: Some(err.client_message()),
            };
            (err.status_code(), form).into_response()
        }
    }
}

async fn publish(
    state: &AppState,
    admin: &CurrentAdmin,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let fields = read_fields(multipart).await?;

    let name = fields
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("product name is required".to_string()))?
        .to_string();

    // A filled-in custom category wins over the dropdown
    let category = fields
        .category_custom
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            fields
                .category
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .map(ProductCategory::parse)
        .ok_or_else(|| AppError::BadRequest("category is required".to_string()))?;

    let description = fields
        .description
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let image_bytes = fields
        .image_bytes
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("product image is required".to_string()))?;

    let filename = fields.image_filename.unwrap_or_default();
    let content_type = fields
        .image_content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    // Step 1: upload the image
    let key = object_key(&filename, Utc::now());
    let image_url = state
        .storage()
        .upload(&key, image_bytes, &content_type)
        .await?;

    // Step 2: insert the catalogue row. If this fails the uploaded object
    // stays in the bucket; flag it for manual cleanup.
    let new_product = NewProduct {
        name,
        category,
        description,
        image_url,
    };

    let product = crate::db::ProductRepository::new(state.pool())
        .insert(&new_product)
        .await
        .inspect_err(|e| {
            tracing::warn!(
                object_key = %key,
                error = %e,
                "Product insert failed after upload; orphaned object needs manual cleanup"
            );
        })?;

    tracing::info!(
        product_id = %product.id,
        admin_id = %admin.id,
        "Product published"
    );

    Ok(Redirect::to("/admin"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_publish_rerenders_form_with_message() {
        let err = AppError::BadRequest("product image is required".to_string());
        let form = ProductNewTemplate {
            categories: category_options(),
            error: Some(err.client_message()),
        };

        let html = form.render().unwrap();
        assert!(html.contains("product image is required"));
        // Dropdown still present so the admin can correct and resubmit
        assert!(html.contains("Retail"));
    }
}
