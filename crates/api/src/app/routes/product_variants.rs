use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    routing::{get, patch, post},
    Json, Router,
};

use categorydesk_catalog::{validation, ProductVariant};

use crate::app::dto::{CreateGroupRequest, MessageResponse, UpdateProductVariantRequest};
use crate::app::errors::{ApiError, ResultExt};
use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_product_variants))
        .route("/create-group", post(create_group))
        .route("/approve", post(approve_product_groupings))
        .route("/:id", patch(update_product_variant))
}

pub async fn list_product_variants(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<ProductVariant>>, ApiError> {
    let variants = services
        .store
        .product_variants()
        .or_fail("Failed to fetch product variants")?;
    Ok(Json(variants))
}

/// Replace the variant's tags. When the new list is empty the variant is
/// deleted and the removed record is returned.
pub async fn update_product_variant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProductVariantRequest>, JsonRejection>,
) -> Result<Json<ProductVariant>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let variant = services
        .store
        .update_product_variant(id, body.product_tags)
        .or_fail("Failed to update product variant")?;
    Ok(Json(variant))
}

pub async fn create_group(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> Result<Json<ProductVariant>, ApiError> {
    let Json(body) = body?;
    validation::check(&body)?;
    let created = services
        .store
        .create_new_group(body.source_variant_id(), &body.tag_text)
        .or_fail("Failed to create new group")?;
    Ok(Json(created))
}

pub async fn approve_product_groupings(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<MessageResponse>, ApiError> {
    services
        .store
        .approve_product_groupings()
        .or_fail("Failed to approve product groupings")?;
    Ok(Json(MessageResponse::new("Product groupings approved successfully")))
}
