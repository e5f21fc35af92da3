use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    routing::{delete, get},
    Json, Router,
};

use categorydesk_catalog::{NewTeamMember, TeamMember};

use crate::app::dto::MessageResponse;
use crate::app::errors::{ApiError, ResultExt};
use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_team_members).post(add_team_member))
        .route("/:id", delete(remove_team_member))
}

pub async fn list_team_members(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let members = services
        .store
        .team_members()
        .or_fail("Failed to fetch team members")?;
    Ok(Json(members))
}

pub async fn add_team_member(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<NewTeamMember>, JsonRejection>,
) -> Result<Json<TeamMember>, ApiError> {
    let Json(body) = body?;
    let member = services
        .store
        .add_team_member(body)
        .or_fail("Failed to add team member")?;
    Ok(Json(member))
}

/// Removing an unknown id still succeeds.
pub async fn remove_team_member(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    services
        .store
        .remove_team_member(id)
        .or_fail("Failed to remove team member")?;
    Ok(Json(MessageResponse::new("Team member removed successfully")))
}
