// tests/support/builders.rs
use super::time::at_secs;
use api_base::domain::activity::{Activity, ActivityId, ActivityKind, ActivitySummary, Contact};
use api_base::domain::contact::{IsdCode, PhoneNumber};
use api_base::domain::timestamps::Timestamps;

pub struct ActivityBuilder {
    id: i64,
    kind: String,
    summary: String,
    contact: Option<(String, String)>,
    created_secs: i64,
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            kind: "profile_viewed".into(),
            summary: "Test activity".into(),
            contact: None,
            created_secs: 1_700_000_000,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn contact(mut self, isd: &str, phone: &str) -> Self {
        self.contact = Some((isd.into(), phone.into()));
        self
    }

    pub fn created_at_secs(mut self, secs: i64) -> Self {
        self.created_secs = secs;
        self
    }

    pub fn build(self) -> Activity {
        Activity {
            id: ActivityId::new(self.id).expect("id"),
            kind: ActivityKind::new(self.kind).expect("kind"),
            summary: ActivitySummary::new(self.summary).expect("summary"),
            contact: self.contact.map(|(isd, phone)| Contact {
                isd_code: IsdCode::new(isd).expect("isd"),
                phone: PhoneNumber::new(phone).expect("phone"),
            }),
            timestamps: Timestamps::new(at_secs(self.created_secs)),
        }
    }
}
