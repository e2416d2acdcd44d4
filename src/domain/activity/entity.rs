// src/domain/activity/entity.rs
use super::value_objects::{ActivityId, ActivityKind, ActivitySummary};
use crate::domain::{
    contact::{IsdCode, PhoneNumber},
    pagination::CursorRecord,
    timestamps::Timestamps,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub isd_code: IsdCode,
    pub phone: PhoneNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub kind: ActivityKind,
    pub summary: ActivitySummary,
    pub contact: Option<Contact>,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub summary: ActivitySummary,
    pub contact: Option<Contact>,
    pub timestamps: Timestamps,
}

impl NewActivity {
    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            kind: self.kind,
            summary: self.summary,
            contact: self.contact,
            timestamps: self.timestamps,
        }
    }
}

impl CursorRecord for Activity {
    fn cursor_value(&self) -> DateTime<Utc> {
        self.timestamps.created_at
    }

    fn tie_breaker(&self) -> i64 {
        self.id.into()
    }
}
