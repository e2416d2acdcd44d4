// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::pagination::QueryParams,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequestParts, OriginalUri},
    http::{Uri, request::Parts},
};
use url::Url;

use super::error::HttpError;

/// Raw query parameters of a list request plus its absolute URL.
#[derive(Debug, Clone)]
pub struct PageQuery {
    pub params: QueryParams,
    pub request_url: Url,
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.clone(), |original| original.0.clone());

        let params = QueryParams::parse(uri.query().unwrap_or_default()).map_err(|err| {
            HttpError::from_error(ApplicationError::Validation(format!(
                "invalid query string: {err}"
            )))
        })?;

        let request_url = absolute_request_url(&app_state.public_base_url, &uri);

        Ok(Self {
            params,
            request_url,
        })
    }
}

/// `uri` resolved against `base`, keeping any path prefix `base` carries.
pub fn absolute_request_url(base: &Url, uri: &Uri) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{prefix}{}", uri.path()));
    url.set_query(uri.query());
    url.set_fragment(None);
    url
}
