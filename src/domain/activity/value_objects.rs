use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const KIND_MAX_LEN: usize = 64;
const SUMMARY_MAX_LEN: usize = 280;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(i64);

impl ActivityId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("activity id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ActivityId> for i64 {
    fn from(value: ActivityId) -> Self {
        value.0
    }
}

/// Machine readable activity type, e.g. `profile_viewed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityKind(String);

impl ActivityKind {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() || value.len() > KIND_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "kind must be between 1 and {KIND_MAX_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(DomainError::validation(
                "kind may only contain lowercase letters, digits and underscores",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySummary(String);

impl ActivitySummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("summary cannot be empty"));
        }
        if value.chars().count() > SUMMARY_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "summary cannot exceed {SUMMARY_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
