use crate::domain::activity::Activity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: i64,
    pub kind: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_isd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Activity> for ActivityDto {
    fn from(activity: Activity) -> Self {
        let (contact_isd, contact_phone) = match activity.contact {
            Some(contact) => (
                Some(String::from(contact.isd_code)),
                Some(String::from(contact.phone)),
            ),
            None => (None, None),
        };
        Self {
            id: activity.id.into(),
            kind: activity.kind.to_string(),
            summary: activity.summary.to_string(),
            contact_isd,
            contact_phone,
            created_at: activity.timestamps.created_at,
            modified_at: activity.timestamps.modified_at,
        }
    }
}
