use super::entity::{Activity, NewActivity};
use crate::domain::{errors::DomainResult, pagination::KeysetSource};
use async_trait::async_trait;

/// Activity storage; reads go through the keyset source.
#[async_trait]
pub trait ActivityRepository: KeysetSource<Item = Activity> {
    async fn insert(&self, activity: NewActivity) -> DomainResult<Activity>;
}
