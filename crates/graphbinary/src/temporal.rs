//! Millisecond-precision instants: [`Date`] and [`Timestamp`].
//!
//! Both wrap a signed count of milliseconds since `1970-01-01T00:00:00.000Z`.
//! Their text form is RFC 3339 through `chrono`: any offset parses, and
//! display is always UTC with millisecond precision, e.g.
//! `1969-12-31T23:59:59.999Z`. They are separate types because they travel
//! under separate type markers.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Error returned when an RFC 3339 instant cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid RFC 3339 instant `{input}`: {source}")]
pub struct ParseInstantError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

macro_rules! instant_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(i64);

        impl $name {
            /// `1970-01-01T00:00:00.000Z`.
            pub const EPOCH: $name = $name(0);

            pub const fn from_millis(millis: i64) -> Self {
                Self(millis)
            }

            /// Milliseconds relative to the epoch; negative before it.
            pub const fn as_millis(self) -> i64 {
                self.0
            }

            /// The instant as a UTC date-time, `None` if it lies outside the
            /// range `chrono` can represent (roughly ±262 000 years).
            pub fn to_datetime(self) -> Option<DateTime<Utc>> {
                DateTime::<Utc>::from_timestamp_millis(self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseInstantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                DateTime::parse_from_rfc3339(s)
                    .map(|dt| Self(dt.timestamp_millis()))
                    .map_err(|source| ParseInstantError {
                        input: s.to_owned(),
                        source,
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.to_datetime() {
                    Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
                    None => write!(f, "{}ms since epoch", self.0),
                }
            }
        }

        impl From<DateTime<Utc>> for $name {
            fn from(dt: DateTime<Utc>) -> Self {
                Self(dt.timestamp_millis())
            }
        }

        impl From<SystemTime> for $name {
            fn from(time: SystemTime) -> Self {
                let millis = match time.duration_since(UNIX_EPOCH) {
                    Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
                    Err(before) => {
                        let before = before.duration();
                        // Round toward negative infinity so sub-millisecond
                        // instants before the epoch land on the earlier tick.
                        let whole = i64::try_from(before.as_millis()).unwrap_or(i64::MAX);
                        if before.subsec_nanos() % 1_000_000 == 0 {
                            -whole
                        } else {
                            -whole - 1
                        }
                    }
                };
                Self(millis)
            }
        }

        impl From<$name> for SystemTime {
            fn from(instant: $name) -> Self {
                let magnitude = Duration::from_millis(instant.0.unsigned_abs());
                if instant.0 >= 0 {
                    UNIX_EPOCH + magnitude
                } else {
                    UNIX_EPOCH - magnitude
                }
            }
        }
    };
}

instant_type!(
    /// A calendar instant with millisecond precision.
    ///
    /// ```
    /// use graphbinary::Date;
    ///
    /// let date: Date = "1969-12-31T23:59:59.999Z".parse().unwrap();
    /// assert_eq!(date.as_millis(), -1);
    /// assert_eq!(date.to_string(), "1969-12-31T23:59:59.999Z");
    /// ```
    Date
);

instant_type!(
    /// A point in time with millisecond precision, distinct from [`Date`] on
    /// the wire.
    Timestamp
);
