//! Iteration bound for the long running app.
//!
//! The bound is read once at startup from the `max_count` environment
//! variable. There is no configuration file.
//!
//! ```text
//! unset / ""  -> Bound::Unbounded
//! "-1"        -> Bound::Unbounded   (legacy sentinel)
//! " 42 "      -> Bound::Limit(42)
//! "-5"        -> Bound::Limit(-5)   (loop body never runs)
//! "abc"       -> BoundError::Invalid
//! ```

use std::env::{self, VarError};
use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable holding the iteration bound.
pub const MAX_COUNT_VAR: &str = "max_count";

/// Raw value that means "no maximum".
pub const UNBOUNDED_SENTINEL: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundError {
    #[error("invalid {var} value '{raw}': {source}")]
    Invalid {
        var: &'static str,
        raw: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Whitespace allowed around the digits: ASCII whitespace plus vertical tab.
fn is_number_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{b}'
}

/// Maximum counter value at which the loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    #[default]
    Unbounded,
    Limit(i32),
}

impl Bound {
    /// Parses a raw environment value.
    ///
    /// An absent or empty value is unbounded. Anything else must be a
    /// base-10 `i32`; surrounding whitespace and a leading sign are accepted.
    pub fn parse(raw: Option<&str>) -> Result<Self, BoundError> {
        let raw = match raw {
            None | Some("") => return Ok(Self::Unbounded),
            Some(raw) => raw,
        };

        let value: i32 = raw
            .trim_matches(is_number_whitespace)
            .parse()
            .map_err(|source| BoundError::Invalid {
                var: MAX_COUNT_VAR,
                raw: raw.to_string(),
                source,
            })?;

        Ok(Self::from_raw(value))
    }

    /// Reads and parses [`MAX_COUNT_VAR`] from the process environment.
    pub fn from_env() -> Result<Self, BoundError> {
        let bound = match env::var(MAX_COUNT_VAR) {
            Ok(raw) => Self::parse(Some(&raw))?,
            Err(VarError::NotPresent) => Self::Unbounded,
            Err(VarError::NotUnicode(_)) => {
                return Err(BoundError::NotUnicode { var: MAX_COUNT_VAR });
            }
        };
        tracing::debug!(var = MAX_COUNT_VAR, bound = bound.as_raw(), "Loaded bound");
        Ok(bound)
    }

    /// Maps the sentinel form back to a bound.
    #[must_use]
    pub const fn from_raw(value: i32) -> Self {
        if value == UNBOUNDED_SENTINEL {
            Self::Unbounded
        } else {
            Self::Limit(value)
        }
    }

    /// Sentinel form: [`UNBOUNDED_SENTINEL`] when there is no maximum.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Unbounded => UNBOUNDED_SENTINEL,
            Self::Limit(max) => max,
        }
    }

    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Whether the loop may run another iteration with `counter` ticks done.
    #[must_use]
    pub fn allows(self, counter: i64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Limit(max) => counter < i64::from(max),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Limit(max) => write!(f, "{max}"),
        }
    }
}
