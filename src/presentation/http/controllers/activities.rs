// src/presentation/http/controllers/activities.rs
use crate::application::{
    commands::activities::CreateActivityCommand,
    dto::{ActivityDto, PaginatedResponse},
    queries::activities::ListActivitiesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::PageQuery;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateActivityRequest {
    pub kind: String,
    pub summary: String,
    #[serde(default)]
    pub contact_isd: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/activities",
    params(
        ("limit" = Option<u32>, Query, description = "Maximum number of records per page."),
        ("timestamp" = Option<i64>, Query, description = "Cursor from a previous `next` link: microseconds since the epoch."),
        ("fields" = Option<String>, Query, description = "Comma separated fields to keep."),
        ("exclude" = Option<String>, Query, description = "Comma separated fields to drop.")
    ),
    responses(
        (status = 200, description = "One page of activities, newest first.", body = crate::presentation::http::openapi::ActivityListResponse),
        (status = 400, description = "Invalid pagination or projection parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activities"
)]
pub async fn list_activities(
    Extension(state): Extension<HttpState>,
    query: PageQuery,
) -> HttpResult<Json<PaginatedResponse<Value>>> {
    let page = state
        .services
        .activity_queries
        .list_activities(ListActivitiesQuery {
            params: query.params,
            request_url: query.request_url,
        })
        .await
        .into_http()?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/v1/activities",
    request_body = CreateActivityRequest,
    responses(
        (status = 201, description = "Activity recorded.", body = ActivityDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activities"
)]
pub async fn create_activity(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateActivityRequest>,
) -> HttpResult<(StatusCode, Json<ActivityDto>)> {
    let activity = state
        .services
        .activity_commands
        .create_activity(CreateActivityCommand {
            kind: payload.kind,
            summary: payload.summary,
            contact_isd: payload.contact_isd,
            contact_phone: payload.contact_phone,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(activity)))
}
