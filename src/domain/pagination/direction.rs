// src/domain/pagination/direction.rs
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Traversal polarity of a keyset paginator.
///
/// The sort order and the comparison applied against a cursor are both
/// derived from this single value, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

/// Comparison a record's cursor field must satisfy against a cursor bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("order must be either `ASC` or `DESC`, got `{0}`")]
pub struct ParseDirectionError(pub String);

impl Direction {
    pub const fn comparison(self) -> Comparison {
        match self {
            Self::Asc => Comparison::GreaterThan,
            Self::Desc => Comparison::LessThan,
        }
    }

    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Ordering expression in `field` / `-field` notation.
    pub fn order_by(self, field: &str) -> String {
        match self {
            Self::Asc => field.to_string(),
            Self::Desc => format!("-{field}"),
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl Comparison {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }

    /// Whether `value.cmp(bound)` satisfies this comparison.
    pub const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterThan => matches!(ordering, Ordering::Greater),
            Self::LessThan => matches!(ordering, Ordering::Less),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
