use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

use categorydesk_catalog::{NewProductSku, ProductSku, ProductSkuPatch};
use categorydesk_infra::Page;

use crate::app::dto::SkuListParams;
use crate::app::errors::{ApiError, ResultExt};
use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_product_skus).post(create_product_sku))
        .route("/:id", patch(update_product_sku))
}

pub async fn list_product_skus(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<SkuListParams>, QueryRejection>,
) -> Result<Json<Page<ProductSku>>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query(services.max_page_size)?;
    let page = services
        .store
        .query_product_skus(&query)
        .or_fail("Failed to fetch product SKUs")?;
    Ok(Json(page))
}

pub async fn create_product_sku(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewProductSku>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductSku>), ApiError> {
    let Json(body) = body?;
    let created = services
        .store
        .create_product_sku(body)
        .or_fail("Failed to create product SKU")?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product_sku(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductSkuPatch>, JsonRejection>,
) -> Result<Json<ProductSku>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = body?;
    let updated = services
        .store
        .update_product_sku(id, patch)
        .or_fail("Failed to update product SKU")?;
    Ok(Json(updated))
}
