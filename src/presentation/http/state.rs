// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::openapi::ApiLogo;
use std::sync::Arc;
use url::Url;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Scheme and authority clients reach the API on; next links are absolute.
    pub public_base_url: Url,
    pub api_logo: Option<ApiLogo>,
}
