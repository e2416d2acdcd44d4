// tests/support/time.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic "now" for tests.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub fn at_secs(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid timestamp")
}
