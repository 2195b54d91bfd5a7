//! Admin dashboard handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::Product;
use crate::state::AppState;

/// A catalogue row on the dashboard. Unlike the public views this includes
/// inactive products and timestamps.
pub struct DashboardRow {
    pub id: String,
    pub name: String,
    pub category_label: String,
    pub active: bool,
    pub created_at: String,
}

impl From<&Product> for DashboardRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category_label: product.category.label(),
            active: product.active,
            created_at: product.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub rows: Vec<DashboardRow>,
}

/// Display the dashboard with the full catalogue.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
) -> Result<DashboardTemplate, AppError> {
    let products = ProductRepository::new(state.pool()).list_all().await?;

    Ok(DashboardTemplate {
        admin_email: admin.email,
        rows: products.iter().map(DashboardRow::from).collect(),
    })
}
