// src/infrastructure/pagination/memory.rs
use crate::domain::{
    errors::DomainResult,
    pagination::{CursorRecord, KeysetQuery, KeysetSource},
};
use async_trait::async_trait;

/// Apply a keyset query to an in-memory slice.
pub fn select_page<T>(items: &[T], query: &KeysetQuery) -> Vec<T>
where
    T: CursorRecord + Clone,
{
    let mut selected: Vec<&T> = items
        .iter()
        .filter(|item| query.bound.is_none_or(|bound| bound.admits(*item)))
        .collect();
    selected.sort_by(|a, b| query.compare(*a, *b));
    selected.into_iter().take(query.take).cloned().collect()
}

/// Read-only keyset source over a snapshot of records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<T> {
    items: Vec<T>,
}

impl<T> InMemorySource<T> {
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for InMemorySource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl<T> KeysetSource for InMemorySource<T>
where
    T: CursorRecord + Clone + Send + Sync,
{
    type Item = T;

    async fn fetch(&self, query: &KeysetQuery) -> DomainResult<Vec<T>> {
        Ok(select_page(&self.items, query))
    }
}
