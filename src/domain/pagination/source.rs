// src/domain/pagination/source.rs
use super::{Comparison, Cursor, Direction};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A record that can be traversed by a keyset paginator.
pub trait CursorRecord {
    /// Value of the ordering field (non-decreasing per insert).
    fn cursor_value(&self) -> DateTime<Utc>;

    /// Stable secondary key used to order records sharing a cursor value.
    fn tie_breaker(&self) -> i64;
}

/// Lower or upper bound a page starts after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeysetBound {
    pub comparison: Comparison,
    pub timestamp: DateTime<Utc>,
    pub tie_breaker: Option<i64>,
}

impl KeysetBound {
    pub const fn new(direction: Direction, cursor: &Cursor) -> Self {
        Self {
            comparison: direction.comparison(),
            timestamp: cursor.timestamp(),
            tie_breaker: cursor.tie_breaker(),
        }
    }

    /// Whether a record lies strictly beyond this bound.
    pub fn admits<R: CursorRecord + ?Sized>(&self, record: &R) -> bool {
        let ordering = match self.tie_breaker {
            Some(id) => (record.cursor_value(), record.tie_breaker()).cmp(&(self.timestamp, id)),
            None => record.cursor_value().cmp(&self.timestamp),
        };
        self.comparison.holds(ordering)
    }
}

/// Everything a data source needs to produce one probe of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysetQuery {
    pub field: String,
    pub direction: Direction,
    pub bound: Option<KeysetBound>,
    pub take: usize,
}

impl KeysetQuery {
    /// Ordering of two records in traversal order.
    pub fn compare<R: CursorRecord + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        let ascending = a
            .cursor_value()
            .cmp(&b.cursor_value())
            .then_with(|| a.tie_breaker().cmp(&b.tie_breaker()));
        self.direction.orient(ascending)
    }
}

/// Ordered, filterable collection a paginator reads from.
///
/// Implementations filter by `query.bound`, order by the cursor field (then
/// the tie-breaker) in `query.direction` and return at most `query.take`
/// records. Errors are returned unchanged to the caller.
#[async_trait]
pub trait KeysetSource: Send + Sync {
    type Item: CursorRecord + Send;

    async fn fetch(&self, query: &KeysetQuery) -> DomainResult<Vec<Self::Item>>;
}
