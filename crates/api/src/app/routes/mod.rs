use axum::Router;

pub mod category_mappings;
pub mod common;
pub mod product_skus;
pub mod product_variants;
pub mod system;
pub mod team_members;

pub fn router() -> Router {
    Router::new()
        .nest("/category-mappings", category_mappings::router())
        .nest("/product-variants", product_variants::router())
        .nest("/product-skus", product_skus::router())
        .nest("/team-members", team_members::router())
}
