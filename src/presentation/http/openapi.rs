// src/presentation/http/openapi.rs
use crate::application::{dto::ActivityDto, error::ApplicationError};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::extensions::ExtensionsBuilder;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// `{next, results}` envelope returned by keyset paginated endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityListResponse {
    #[schema(example = "https://api.example.com/api/v1/activities?limit=100&timestamp=1585748268846043")]
    pub next: Option<String>,
    pub results: Vec<ActivityDto>,
}

/// Branding shown by ReDoc through the `x-logo` info extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiLogo {
    pub url: String,
    pub alt_text: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::activities::list_activities,
        crate::presentation::http::controllers::activities::create_activity,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ActivityListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::activities::CreateActivityRequest,
            crate::application::dto::ActivityDto
        )
    ),
    tags(
        (name = "Activities", description = "Keyset paginated activity feed"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "API Base",
        description = "Base-layer API with keyset pagination",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Brands the document with ReDoc's `x-logo` info extension.
struct ApiLogoCustomizer<'a>(&'a ApiLogo);

impl Modify for ApiLogoCustomizer<'_> {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let logo = ExtensionsBuilder::new()
            .add(
                "x-logo",
                json!({ "url": self.0.url, "altText": self.0.alt_text }),
            )
            .build();
        match openapi.info.extensions.as_mut() {
            Some(extensions) => extensions.merge(logo),
            None => openapi.info.extensions = Some(logo),
        }
    }
}

/// The OpenAPI document, branded when a logo is configured.
pub fn api_doc(logo: Option<&ApiLogo>) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    if let Some(logo) = logo {
        ApiLogoCustomizer(logo).modify(&mut openapi);
    }
    openapi
}

/// [`api_doc`] as JSON.
pub fn openapi_document(logo: Option<&ApiLogo>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(api_doc(logo))
}

pub async fn serve_openapi(Extension(state): Extension<HttpState>) -> HttpResult<Json<Value>> {
    openapi_document(state.api_logo.as_ref())
        .map(Json)
        .map_err(|err| {
            HttpError::from_error(ApplicationError::infrastructure(format!(
                "failed to serialize openapi document: {err}"
            )))
        })
}

/// Swagger UI, ReDoc and the raw document; all three share the branding.
pub fn docs_router(logo: Option<&ApiLogo>) -> Router {
    let openapi = api_doc(logo);
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path, logo: Option<&ApiLogo>) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &openapi_document(logo)?)?;
    Ok(())
}
