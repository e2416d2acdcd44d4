// src/application/commands/activities.rs
use crate::application::{
    dto::ActivityDto,
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    activity::{ActivityKind, ActivityRepository, ActivitySummary, Contact, NewActivity},
    contact::{IsdCode, PhoneNumber},
    timestamps::Timestamps,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateActivityCommand {
    pub kind: String,
    pub summary: String,
    pub contact_isd: Option<String>,
    pub contact_phone: Option<String>,
}

pub struct ActivityCommandService {
    repo: Arc<dyn ActivityRepository>,
    clock: Arc<dyn Clock>,
}

impl ActivityCommandService {
    pub fn new(repo: Arc<dyn ActivityRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_activity(&self, command: CreateActivityCommand) -> ApplicationResult<ActivityDto> {
        let kind = ActivityKind::new(command.kind)?;
        let summary = ActivitySummary::new(command.summary)?;
        let contact = parse_contact(command.contact_isd, command.contact_phone)?;

        let new_activity = NewActivity {
            kind,
            summary,
            contact,
            timestamps: Timestamps::new(self.clock.now()),
        };

        let activity = self.repo.insert(new_activity).await?;
        tracing::info!(
            activity_id = i64::from(activity.id),
            kind = %activity.kind,
            "activity recorded"
        );
        Ok(activity.into())
    }
}

fn parse_contact(isd: Option<String>, phone: Option<String>) -> ApplicationResult<Option<Contact>> {
    match (isd, phone) {
        (Some(isd), Some(phone)) => Ok(Some(Contact {
            isd_code: IsdCode::new(isd)?,
            phone: PhoneNumber::new(phone)?,
        })),
        (None, None) => Ok(None),
        _ => Err(ApplicationError::validation(
            "contact_isd and contact_phone must be provided together",
        )),
    }
}
