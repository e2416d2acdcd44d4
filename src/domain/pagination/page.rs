// src/domain/pagination/page.rs
use super::Cursor;

/// A bounded, ordered slice of a keyset traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    records: Vec<T>,
    limit: u32,
    next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// Final page of a traversal.
    pub const fn last(records: Vec<T>, limit: u32) -> Self {
        Self {
            records,
            limit,
            next_cursor: None,
        }
    }

    /// Page followed by more records, resuming after `next_cursor`.
    pub const fn with_next(records: Vec<T>, limit: u32, next_cursor: Cursor) -> Self {
        Self {
            records,
            limit,
            next_cursor: Some(next_cursor),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub const fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            records: self.records.into_iter().map(f).collect(),
            limit: self.limit,
            next_cursor: self.next_cursor,
        }
    }
}
