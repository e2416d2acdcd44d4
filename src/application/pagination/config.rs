// src/application/pagination/config.rs
use crate::domain::pagination::{CursorCodec, DEFAULT_PRECISION, Direction};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_LIMIT_PARAM: &str = "limit";
pub const DEFAULT_CURSOR_FIELD: &str = "created_at";

const TIMESTAMP_PARAM: &str = "timestamp";
const BEFORE_PARAM: &str = "before";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeysetConfigError {
    #[error("default page size must be positive")]
    ZeroDefaultLimit,
    #[error("default page size {default} exceeds maximum {max}")]
    DefaultAboveMax { default: u32, max: u32 },
    #[error("query parameter name for {0} cannot be empty")]
    EmptyParam(&'static str),
    #[error("limit and cursor query parameters must differ (both `{0}`)")]
    ParamClash(String),
    #[error("cursor field name cannot be empty")]
    EmptyCursorField,
    #[error("invalid cursor precision: {0}")]
    Precision(String),
}

/// Immutable settings of a [`KeysetPaginator`](super::KeysetPaginator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysetConfig {
    limit_param: String,
    cursor_param: String,
    cursor_field: String,
    default_limit: u32,
    max_limit: Option<u32>,
    direction: Direction,
    strict_parsing: bool,
    codec: CursorCodec,
}

impl KeysetConfig {
    /// `?limit=&timestamp=` traversal of `created_at`, newest first.
    pub fn timestamp() -> KeysetConfigBuilder {
        KeysetConfigBuilder::default()
    }

    /// Same traversal keyed by `?before=`.
    pub fn before() -> KeysetConfigBuilder {
        KeysetConfigBuilder::default().cursor_param(BEFORE_PARAM)
    }

    pub fn limit_param(&self) -> &str {
        &self.limit_param
    }

    pub fn cursor_param(&self) -> &str {
        &self.cursor_param
    }

    pub fn cursor_field(&self) -> &str {
        &self.cursor_field
    }

    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub const fn max_limit(&self) -> Option<u32> {
        self.max_limit
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn strict_parsing(&self) -> bool {
        self.strict_parsing
    }

    pub const fn codec(&self) -> &CursorCodec {
        &self.codec
    }
}

#[derive(Debug, Clone)]
pub struct KeysetConfigBuilder {
    limit_param: String,
    cursor_param: String,
    cursor_field: String,
    default_limit: u32,
    max_limit: Option<u32>,
    direction: Direction,
    strict_parsing: bool,
    precision: u32,
    tie_breaker: bool,
}

impl Default for KeysetConfigBuilder {
    fn default() -> Self {
        Self {
            limit_param: DEFAULT_LIMIT_PARAM.into(),
            cursor_param: TIMESTAMP_PARAM.into(),
            cursor_field: DEFAULT_CURSOR_FIELD.into(),
            default_limit: DEFAULT_PAGE_SIZE,
            max_limit: None,
            direction: Direction::Desc,
            strict_parsing: false,
            precision: DEFAULT_PRECISION,
            tie_breaker: false,
        }
    }
}

impl KeysetConfigBuilder {
    #[must_use]
    pub fn limit_param(mut self, name: impl Into<String>) -> Self {
        self.limit_param = name.into();
        self
    }

    #[must_use]
    pub fn cursor_param(mut self, name: impl Into<String>) -> Self {
        self.cursor_param = name.into();
        self
    }

    #[must_use]
    pub fn cursor_field(mut self, name: impl Into<String>) -> Self {
        self.cursor_field = name.into();
        self
    }

    #[must_use]
    pub fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Ceiling on `limit`; requests above it are rejected, never clamped.
    #[must_use]
    pub fn max_limit(mut self, max: Option<u32>) -> Self {
        self.max_limit = max;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Reject malformed `limit` / cursor values instead of ignoring them.
    #[must_use]
    pub fn strict_parsing(mut self, strict: bool) -> Self {
        self.strict_parsing = strict;
        self
    }

    /// Cursor ticks per second.
    #[must_use]
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Append the record id to cursors so equal timestamps resume exactly.
    #[must_use]
    pub fn tie_breaker(mut self, enabled: bool) -> Self {
        self.tie_breaker = enabled;
        self
    }

    pub fn build(self) -> Result<KeysetConfig, KeysetConfigError> {
        if self.default_limit == 0 {
            return Err(KeysetConfigError::ZeroDefaultLimit);
        }
        if let Some(max) = self.max_limit.filter(|&max| self.default_limit > max) {
            return Err(KeysetConfigError::DefaultAboveMax {
                default: self.default_limit,
                max,
            });
        }
        if self.limit_param.trim().is_empty() {
            return Err(KeysetConfigError::EmptyParam("limit"));
        }
        if self.cursor_param.trim().is_empty() {
            return Err(KeysetConfigError::EmptyParam("cursor"));
        }
        if self.limit_param == self.cursor_param {
            return Err(KeysetConfigError::ParamClash(self.limit_param));
        }
        if self.cursor_field.trim().is_empty() {
            return Err(KeysetConfigError::EmptyCursorField);
        }
        let codec = CursorCodec::new(self.precision, self.tie_breaker)
            .map_err(|err| KeysetConfigError::Precision(err.to_string()))?;

        Ok(KeysetConfig {
            limit_param: self.limit_param,
            cursor_param: self.cursor_param,
            cursor_field: self.cursor_field,
            default_limit: self.default_limit,
            max_limit: self.max_limit,
            direction: self.direction,
            strict_parsing: self.strict_parsing,
            codec,
        })
    }
}
