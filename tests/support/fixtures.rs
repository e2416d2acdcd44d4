// tests/support/fixtures.rs
use super::builders::ActivityBuilder;
use super::time::at_secs;
use api_base::domain::activity::Activity;
use api_base::domain::errors::{DomainError, DomainResult};
use api_base::domain::pagination::{CursorRecord, KeysetQuery, KeysetSource, QueryParams};
use api_base::infrastructure::pagination::InMemorySource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Minimal record keyed by `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

impl CursorRecord for Row {
    fn cursor_value(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn tie_breaker(&self) -> i64 {
        self.id
    }
}

pub fn row(id: i64, secs: i64) -> Row {
    Row {
        id,
        created_at: at_secs(secs),
    }
}

/// Rows created at the given seconds, ids assigned in order from 1.
pub fn rows_at(secs: &[i64]) -> InMemorySource<Row> {
    secs.iter()
        .zip(1..)
        .map(|(&secs, id)| row(id, secs))
        .collect()
}

pub fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs.iter().copied().collect()
}

pub fn seconds_of(rows: &[Row]) -> Vec<i64> {
    rows.iter().map(|row| row.created_at.timestamp()).collect()
}

pub fn activity(id: i64, secs: i64) -> Activity {
    ActivityBuilder::new()
        .id(id)
        .summary(&format!("activity {id}"))
        .created_at_secs(secs)
        .build()
}

/// Source whose every read fails.
pub struct FailingSource;

#[async_trait]
impl KeysetSource for FailingSource {
    type Item = Row;

    async fn fetch(&self, _query: &KeysetQuery) -> DomainResult<Vec<Row>> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}
