// src/application/projection.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::pagination::QueryParams;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

const FIELDS_PARAM: &str = "fields";
const EXCLUDE_PARAM: &str = "exclude";

/// Sparse fieldset applied to serialized records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSelection {
    #[default]
    All,
    Only(HashSet<String>),
    Exclude(HashSet<String>),
}

impl FieldSelection {
    pub fn new(fields: Option<Vec<String>>, exclude: Option<Vec<String>>) -> ApplicationResult<Self> {
        match (fields, exclude) {
            (Some(_), Some(_)) => Err(ApplicationError::validation(
                "Cannot pass both 'fields' and 'exclude'",
            )),
            (Some(fields), None) => Ok(Self::Only(fields.into_iter().collect())),
            (None, Some(exclude)) => Ok(Self::Exclude(exclude.into_iter().collect())),
            (None, None) => Ok(Self::All),
        }
    }

    /// Read comma separated `fields` / `exclude` query parameters.
    pub fn from_params(params: &QueryParams) -> ApplicationResult<Self> {
        Self::new(
            params.get(FIELDS_PARAM).map(split_list),
            params.get(EXCLUDE_PARAM).map(split_list),
        )
    }

    pub fn apply(&self, value: &mut Value) {
        let Value::Object(map) = value else {
            return;
        };
        match self {
            Self::All => {}
            Self::Only(keep) => map.retain(|key, _| keep.contains(key)),
            Self::Exclude(drop) => map.retain(|key, _| !drop.contains(key)),
        }
    }

    /// Serialize `record` and apply the selection.
    pub fn project<T: Serialize>(&self, record: &T) -> ApplicationResult<Value> {
        let mut value = serde_json::to_value(record)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        self.apply(&mut value);
        Ok(value)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
