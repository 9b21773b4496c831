//! Timestamp type for auction temporal data.

use std::{borrow::Borrow, fmt::Display};
use time::format_description::well_known::Rfc3339;

/// A UTC timestamp with whole-second precision.
///
/// Stored in SQLite as an integer column of unix seconds; the expiration
/// cutoff comparison in the sweep query is a plain integer comparison.
/// Displays in RFC3339 for logs and output.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The current wall-clock time, truncated to whole seconds.
    pub fn now() -> Self {
        Self(time::OffsetDateTime::now_utc().unix_timestamp())
    }
}

impl<T: Borrow<time::OffsetDateTime>> From<T> for Timestamp {
    fn from(value: T) -> Self {
        Self(value.borrow().unix_timestamp())
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value =
            time::OffsetDateTime::from_unix_timestamp(self.0).map_err(|_| std::fmt::Error)?;
        let formatted = value.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_offset_datetime() {
        let now = time::OffsetDateTime::now_utc();
        let timestamp = Timestamp::from(now);
        assert_eq!(timestamp.0, now.unix_timestamp());
    }

    #[test]
    fn displays_rfc3339() {
        let timestamp = Timestamp(0);
        assert_eq!(timestamp.to_string(), "1970-01-01T00:00:00Z");
    }
}
