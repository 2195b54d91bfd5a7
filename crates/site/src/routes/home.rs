//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use scalehouse_core::ProductCategory;

use super::products::ProductView;
use crate::db::ProductRepository;
use crate::filters;
use crate::state::AppState;

/// Hero banner content.
#[derive(Clone)]
pub struct HeroContent {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            eyebrow: "Sales, service and calibration since 1994",
            title: "Weighing equipment you can certify your business on",
            subtitle: "From counter scales to weighbridges, we supply, repair and \
                       calibrate weighing equipment for shops, farms and factories.",
            button_text: "Browse the catalogue",
            button_url: "/products",
        }
    }
}

/// A category tile on the home page.
pub struct CategoryTile {
    pub label: String,
    pub blurb: &'static str,
    pub url: String,
}

/// Build tiles for the well-known categories. Free-form categories are
/// reachable from the listing page but have no curated home page copy.
fn category_tiles() -> Vec<CategoryTile> {
    ProductCategory::KNOWN
        .iter()
        .filter_map(|category| {
            category.blurb().map(|blurb| CategoryTile {
                label: category.label(),
                blurb,
                url: format!("/products?category={}", category.as_str()),
            })
        })
        .collect()
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero: HeroContent,
    pub category_tiles: Vec<CategoryTile>,
    /// Latest published products for the "new in" strip.
    pub latest_products: Vec<ProductView>,
}

/// Number of products to show in the "new in" strip.
const LATEST_PRODUCTS: i64 = 4;

/// Display the home page.
///
/// The product strip is best-effort: if the catalogue query fails the page
/// still renders, just without it.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let latest_products = ProductRepository::new(state.pool())
        .latest(LATEST_PRODUCTS)
        .await
        .map_or_else(
            |e| {
                tracing::error!("Failed to fetch latest products: {e}");
                Vec::new()
            },
            |products| products.iter().map(ProductView::from).collect(),
        );

    HomeTemplate {
        hero: HeroContent::default(),
        category_tiles: category_tiles(),
        latest_products,
    }
}
