// src/infrastructure/repositories/memory_activity.rs
use crate::domain::activity::{Activity, ActivityId, ActivityRepository, NewActivity};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{KeysetQuery, KeysetSource};
use crate::infrastructure::pagination::select_page;
use async_trait::async_trait;
use std::sync::RwLock;

/// Process-local activity store; ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn len(&self) -> usize {
        self.activities.read().map(|items| items.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    DomainError::persistence("activity store lock poisoned")
}

#[async_trait]
impl KeysetSource for InMemoryActivityRepository {
    type Item = Activity;

    async fn fetch(&self, query: &KeysetQuery) -> DomainResult<Vec<Activity>> {
        let activities = self.activities.read().map_err(|_| poisoned())?;
        Ok(select_page(&activities, query))
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn insert(&self, activity: NewActivity) -> DomainResult<Activity> {
        let mut activities = self.activities.write().map_err(|_| poisoned())?;
        let next_id = activities
            .iter()
            .map(|existing| i64::from(existing.id))
            .max()
            .unwrap_or(0)
            + 1;
        let activity = activity.into_activity(ActivityId::new(next_id)?);
        activities.push(activity.clone());
        Ok(activity)
    }
}
