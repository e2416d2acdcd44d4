// src/application/queries/activities.rs
use crate::application::{
    dto::{ActivityDto, PaginatedResponse},
    error::ApplicationResult,
    pagination::KeysetPaginator,
    projection::FieldSelection,
};
use crate::domain::{activity::ActivityRepository, pagination::QueryParams};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

pub struct ListActivitiesQuery {
    pub params: QueryParams,
    /// Absolute URL of the inbound request, used to build the next link.
    pub request_url: Url,
}

pub struct ActivityQueryService {
    repo: Arc<dyn ActivityRepository>,
    paginator: Arc<KeysetPaginator>,
}

impl ActivityQueryService {
    pub fn new(repo: Arc<dyn ActivityRepository>, paginator: Arc<KeysetPaginator>) -> Self {
        Self { repo, paginator }
    }

    pub async fn list_activities(
        &self,
        query: ListActivitiesQuery,
    ) -> ApplicationResult<PaginatedResponse<Value>> {
        let selection = FieldSelection::from_params(&query.params)?;
        let page = self
            .paginator
            .paginate(&query.params, self.repo.as_ref())
            .await?;

        let next = self
            .paginator
            .build_next_link(&page, &query.request_url)
            .map(String::from);
        let results = page
            .into_records()
            .into_iter()
            .map(|activity| selection.project(&ActivityDto::from(activity)))
            .collect::<ApplicationResult<Vec<_>>>()?;

        Ok(PaginatedResponse::new(next, results))
    }
}
