//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Static pages
//! GET  /services               - Services page
//! GET  /contact                - Contact page
//!
//! # Catalogue
//! GET  /products               - Product listing (optional ?category= filter)
//! GET  /products/{id}          - Product detail
//!
//! # Admin (cookie-gated, see middleware::admin_gate)
//! GET  /admin                  - Dashboard with product list
//! GET  /admin/login            - Login page
//! POST /admin/login            - Login action (lockout-guarded)
//! POST /admin/logout           - Logout action
//! GET  /admin/products/new     - New product form
//! POST /admin/products         - Publish a product (multipart upload + insert)
//! ```

pub mod admin;
pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::middleware::require_admin_cookie;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the admin routes router.
///
/// Everything except the login page sits behind the session-cookie gate;
/// handlers additionally verify the session via `RequireAdminAuth`.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard::index))
        .route(
            "/login",
            get(admin::auth::login_page).post(admin::auth::login),
        )
        .route("/logout", post(admin::auth::logout))
        .route("/products/new", get(admin::products::new_form))
        .route("/products", post(admin::products::create))
        .layer(axum_middleware::from_fn(require_admin_cookie))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Static pages
        .route("/services", get(pages::services))
        .route("/contact", get(pages::contact))
        // Catalogue
        .nest("/products", product_routes())
        // Admin panel
        .nest("/admin", admin_routes())
        .fallback(pages::not_found)
}
