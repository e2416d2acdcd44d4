// src/application/services.rs
use crate::application::{
    commands::activities::ActivityCommandService, pagination::KeysetPaginator,
    ports::time::Clock, queries::activities::ActivityQueryService,
};
use crate::domain::activity::ActivityRepository;
use std::sync::Arc;

pub struct ApplicationServices {
    pub activity_commands: ActivityCommandService,
    pub activity_queries: ActivityQueryService,
}

impl ApplicationServices {
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        clock: Arc<dyn Clock>,
        paginator: Arc<KeysetPaginator>,
    ) -> Self {
        Self {
            activity_commands: ActivityCommandService::new(Arc::clone(&activity_repo), clock),
            activity_queries: ActivityQueryService::new(activity_repo, paginator),
        }
    }
}
