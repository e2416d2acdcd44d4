// src/infrastructure/repositories/postgres_activity.rs
use super::map_sqlx;
use crate::domain::activity::{
    Activity, ActivityId, ActivityKind, ActivityRepository, ActivitySummary, Contact, NewActivity,
};
use crate::domain::contact::{IsdCode, PhoneNumber};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{KeysetBound, KeysetQuery, KeysetSource};
use crate::domain::timestamps::Timestamps;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CURSOR_COLUMN: &str = "created_at";
const SELECT_ACTIVITIES: &str = "SELECT id, kind, summary, contact_isd, contact_phone, created_at, modified_at FROM activities";

#[derive(Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    kind: String,
    summary: String,
    contact_isd: Option<String>,
    contact_phone: Option<String>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = DomainError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let contact = match (row.contact_isd, row.contact_phone) {
            (Some(isd), Some(phone)) => Some(Contact {
                isd_code: IsdCode::new(isd)?,
                phone: PhoneNumber::new(phone)?,
            }),
            _ => None,
        };
        Ok(Self {
            id: ActivityId::new(row.id)?,
            kind: ActivityKind::new(row.kind)?,
            summary: ActivitySummary::new(row.summary)?,
            contact,
            timestamps: Timestamps::from_parts(row.created_at, row.modified_at),
        })
    }
}

impl PostgresActivityRepository {
    fn apply_bound(builder: &mut QueryBuilder<'_, Postgres>, bound: Option<&KeysetBound>) {
        let Some(bound) = bound else {
            return;
        };
        match bound.tie_breaker {
            Some(id) => {
                builder.push(" WHERE (created_at, id) ");
                builder.push(bound.comparison.as_sql());
                builder.push(" (");
                builder.push_bind(bound.timestamp);
                builder.push(", ");
                builder.push_bind(id);
                builder.push(")");
            }
            None => {
                builder.push(" WHERE created_at ");
                builder.push(bound.comparison.as_sql());
                builder.push(" ");
                builder.push_bind(bound.timestamp);
            }
        }
    }

    fn select_page<'args>(query: &KeysetQuery, take: i64) -> QueryBuilder<'args, Postgres> {
        let mut builder = QueryBuilder::new(SELECT_ACTIVITIES);
        Self::apply_bound(&mut builder, query.bound.as_ref());
        Self::apply_ordering(&mut builder, query);
        builder.push(" LIMIT ");
        builder.push_bind(take);
        builder
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, query: &KeysetQuery) {
        let direction = query.direction.as_sql();
        builder.push(" ORDER BY created_at ");
        builder.push(direction);
        builder.push(", id ");
        builder.push(direction);
    }
}

#[async_trait]
impl KeysetSource for PostgresActivityRepository {
    type Item = Activity;

    async fn fetch(&self, query: &KeysetQuery) -> DomainResult<Vec<Activity>> {
        if query.field != CURSOR_COLUMN {
            return Err(DomainError::Validation(format!(
                "activities cannot be paginated by `{}`",
                query.field
            )));
        }
        let take = i64::try_from(query.take)
            .map_err(|_| DomainError::validation("page size out of range"))?;

        let mut builder = Self::select_page(query, take);
        let rows = builder
            .build_query_as::<ActivityRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Activity::try_from).collect()
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn insert(&self, activity: NewActivity) -> DomainResult<Activity> {
        let (contact_isd, contact_phone) = match &activity.contact {
            Some(contact) => (
                Some(contact.isd_code.as_str().to_string()),
                Some(contact.phone.as_str().to_string()),
            ),
            None => (None, None),
        };

        let row = sqlx::query_as::<_, ActivityRow>(
            r"
            INSERT INTO activities (kind, summary, contact_isd, contact_phone, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, kind, summary, contact_isd, contact_phone, created_at, modified_at
            ",
        )
        .bind(activity.kind.as_str())
        .bind(activity.summary.as_str())
        .bind(contact_isd)
        .bind(contact_phone)
        .bind(activity.timestamps.created_at)
        .bind(activity.timestamps.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Activity::try_from(row)
    }
}
