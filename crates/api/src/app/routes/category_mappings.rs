use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    routing::{get, patch, post},
    Json, Router,
};

use categorydesk_catalog::CategoryMapping;

use crate::app::dto::{MessageResponse, UpdateCategoryMappingRequest};
use crate::app::errors::{ApiError, ResultExt};
use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_category_mappings))
        .route("/approve", post(approve_category_mappings))
        .route("/:id", patch(update_category_mapping))
}

pub async fn list_category_mappings(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<CategoryMapping>>, ApiError> {
    let mappings = services
        .store
        .category_mappings()
        .or_fail("Failed to fetch category mappings")?;
    Ok(Json(mappings))
}

pub async fn update_category_mapping(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateCategoryMappingRequest>, JsonRejection>,
) -> Result<Json<CategoryMapping>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let updated = services
        .store
        .update_category_mapping(id, body.selected_category)
        .or_fail("Failed to update category mapping")?;
    Ok(Json(updated))
}

pub async fn approve_category_mappings(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<MessageResponse>, ApiError> {
    services
        .store
        .approve_category_mappings()
        .or_fail("Failed to approve category mappings")?;
    Ok(Json(MessageResponse::new("Category mappings approved successfully")))
}
