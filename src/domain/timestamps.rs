// src/domain/timestamps.rs
use chrono::{DateTime, Utc};

/// Creation and last-modification instants carried by every stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Timestamps {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            modified_at: now,
        }
    }

    pub const fn from_parts(created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }
}
