//! Catalogue route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::instrument;

use scalehouse_core::{ProductCategory, ProductId};

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub category_label: String,
    /// Listing URL filtered to this product's category. Encoded here because
    /// free-form categories can contain anything.
    pub category_url: String,
    pub description: String,
    pub image_url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_label: product.category.label(),
            category_url: format!(
                "/products?category={}",
                urlencoding::encode(product.category.as_str())
            ),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

/// A category tab in the listing filter bar.
pub struct CategoryTab {
    pub slug: String,
    pub label: String,
    pub active: bool,
}

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Category slug to filter by. Unknown slugs are treated as free-form
    /// categories rather than rejected.
    pub category: Option<String>,
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductIndexTemplate {
    pub products: Vec<ProductView>,
    pub tabs: Vec<CategoryTab>,
    /// Label of the active filter, if any.
    pub active_filter: Option<String>,
    /// Category blurb shown under the heading for known categories.
    pub blurb: Option<&'static str>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Display the product listing, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ProductIndexTemplate, AppError> {
    let repo = ProductRepository::new(state.pool());

    let filter = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ProductCategory::parse);

    let products = match &filter {
        Some(category) => repo.list_active_by_category(category).await?,
        None => repo.list_active().await?,
    };

    let tabs = ProductCategory::KNOWN
        .iter()
        .map(|category| CategoryTab {
            slug: category.as_str().to_string(),
            label: category.label(),
            active: filter.as_ref() == Some(category),
        })
        .collect();

    Ok(ProductIndexTemplate {
        products: products.iter().map(ProductView::from).collect(),
        tabs,
        active_filter: filter.as_ref().map(ProductCategory::label),
        blurb: filter.as_ref().and_then(ProductCategory::blurb),
    })
}

/// Display a single product. Missing or inactive rows get the 404 page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let repo = ProductRepository::new(state.pool());

    let Some(product) = repo.get_active(ProductId::from(id)).await? else {
        return Ok(super::pages::not_found().await.into_response());
    };

    Ok(ProductShowTemplate {
        product: ProductView::from(&product),
    }
    .into_response())
}
