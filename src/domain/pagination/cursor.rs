// src/domain/pagination/cursor.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Ticks per second used when encoding cursor positions (microseconds).
pub const DEFAULT_PRECISION: u32 = 1_000_000;

/// Opaque continuation token pointing at the boundary record of a page.
///
/// `position` is the cursor field expressed in ticks of the codec's
/// precision; `timestamp` is that position converted back to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: i64,
    timestamp: DateTime<Utc>,
    tie_breaker: Option<i64>,
}

impl Cursor {
    pub const fn position(&self) -> i64 {
        self.position
    }

    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub const fn tie_breaker(&self) -> Option<i64> {
        self.tie_breaker
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tie_breaker {
            Some(id) => write!(f, "{}.{id}", self.position),
            None => write!(f, "{}", self.position),
        }
    }
}

/// Converts between cursor field values and cursor tokens.
///
/// Values closer together than one tick are indistinguishable once encoded;
/// enabling the tie-breaker appends the record id so such records still
/// resume at the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCodec {
    precision: u32,
    tie_breaker: bool,
}

impl Default for CursorCodec {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tie_breaker: false,
        }
    }
}

impl CursorCodec {
    pub fn new(precision: u32, tie_breaker: bool) -> DomainResult<Self> {
        if precision == 0 {
            return Err(DomainError::validation("cursor precision must be positive"));
        }
        if i128::from(precision) > NANOS_PER_SECOND {
            return Err(DomainError::validation(
                "cursor precision cannot exceed nanoseconds",
            ));
        }
        Ok(Self {
            precision,
            tie_breaker,
        })
    }

    pub const fn precision(&self) -> u32 {
        self.precision
    }

    pub const fn uses_tie_breaker(&self) -> bool {
        self.tie_breaker
    }

    /// Encode a record boundary: `round(seconds * precision)`.
    pub fn encode(&self, timestamp: DateTime<Utc>, id: i64) -> DomainResult<Cursor> {
        let nanos = i128::from(timestamp.timestamp()) * NANOS_PER_SECOND
            + i128::from(timestamp.timestamp_subsec_nanos());
        let scaled = nanos * i128::from(self.precision);
        let half = NANOS_PER_SECOND / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / NANOS_PER_SECOND
        } else {
            (scaled - half) / NANOS_PER_SECOND
        };
        let position = i64::try_from(rounded)
            .map_err(|_| DomainError::validation("cursor position out of range"))?;
        self.from_position(position, self.tie_breaker.then_some(id))
    }

    /// Decode a client supplied token.
    pub fn decode(&self, token: &str) -> DomainResult<Cursor> {
        let token = token.trim();
        let (position, tie_breaker) = match token.split_once('.') {
            Some((position, id)) if self.tie_breaker => (position, Some(parse_int(id)?)),
            Some(_) => return Err(invalid_cursor()),
            None => (token, None),
        };
        self.from_position(parse_int(position)?, tie_breaker)
    }

    fn from_position(&self, position: i64, tie_breaker: Option<i64>) -> DomainResult<Cursor> {
        let nanos = i128::from(position) * NANOS_PER_SECOND / i128::from(self.precision);
        let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).map_err(|_| invalid_cursor())?;
        let subsec = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).map_err(|_| invalid_cursor())?;
        let timestamp = DateTime::from_timestamp(secs, subsec).ok_or_else(invalid_cursor)?;
        Ok(Cursor {
            position,
            timestamp,
            tie_breaker,
        })
    }
}

fn parse_int(raw: &str) -> DomainResult<i64> {
    raw.parse::<i64>().map_err(|_| invalid_cursor())
}

fn invalid_cursor() -> DomainError {
    DomainError::validation("invalid cursor")
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod cursor_tests;
