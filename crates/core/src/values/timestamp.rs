//! Nanosecond-precision UTC timestamp
//!
//! A `Timestamp` holds a single absolute instant, always normalized to UTC.
//! Whatever offset the input carried is applied and then forgotten.
//!
//! ## Construction
//!
//! Use one of the four named constructors:
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use commerce_core::Timestamp;
//!
//! let now = Timestamp::now();
//!
//! let cst = FixedOffset::west_opt(6 * 3600).unwrap();
//! let from_time = Timestamp::from_time(cst.with_ymd_and_hms(2021, 1, 1, 16, 23, 19).unwrap());
//! assert_eq!(from_time.to_string(), "2021-01-01T22:23:19Z");
//!
//! let parsed = Timestamp::from_rfc3339_nano("2021-01-01T16:23:19.123456789-06:00").unwrap();
//! assert_eq!(parsed.to_string(), "2021-01-01T22:23:19.123456789Z");
//!
//! let pb = parsed.pb_timestamp();
//! assert_eq!(Timestamp::from_pb_timestamp(Some(&pb)).unwrap(), parsed);
//! # let _ = now;
//! ```
//!
//! ## Rendering
//!
//! `Display` prints RFC 3339 in UTC with a `Z` suffix. The fractional part is
//! printed only when non-zero and trailing zeroes are trimmed, so a
//! whole-second instant renders as `...:SSZ`.

use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Absolute instant at nanosecond resolution, stored in UTC
///
/// ## Invariants
///
/// - The stored instant is always in UTC
/// - Equality and ordering compare absolute instants
/// - Immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a timestamp from an instant in any timezone
    pub fn from_time<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Timestamp(time.with_timezone(&Utc))
    }

    /// Create a timestamp for the current moment
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Parse an RFC 3339 string with optional fractional seconds (up to nanoseconds)
    ///
    /// Any offset is accepted; the result is normalized to UTC.
    ///
    /// # Errors
    ///
    /// Returns `Error::ParseTimestamp` if the input is not RFC 3339.
    pub fn from_rfc3339_nano(input: &str) -> Result<Self> {
        match DateTime::parse_from_rfc3339(input) {
            Ok(time) => Ok(Self::from_time(time)),
            Err(source) => {
                tracing::debug!(input, error = %source, "rejected RFC 3339 timestamp");
                Err(Error::ParseTimestamp {
                    input: input.to_string(),
                    source,
                })
            }
        }
    }

    /// Create a timestamp from a possibly absent wire timestamp
    ///
    /// Nanos outside `0..1_000_000_000` are carried into the seconds, so
    /// `{seconds: 1, nanos: -1}` denotes 0.999999999s after the epoch.
    ///
    /// # Errors
    ///
    /// - `Error::NilTimestamp` if `pb` is `None`
    /// - `Error::TimestampOutOfRange` if the instant lies beyond what chrono
    ///   can represent (roughly ±262,000 years)
    pub fn from_pb_timestamp(pb: Option<&prost_types::Timestamp>) -> Result<Self> {
        let Some(pb) = pb else {
            tracing::debug!("received nil protobuf timestamp");
            return Err(Error::NilTimestamp);
        };

        let nanos_per_second = i64::from(NANOS_PER_SECOND);
        let nanos = i64::from(pb.nanos);
        let seconds = pb.seconds.checked_add(nanos.div_euclid(nanos_per_second));
        let subsec = nanos.rem_euclid(nanos_per_second) as u32;

        seconds
            .and_then(|s| DateTime::<Utc>::from_timestamp(s, subsec))
            .map(Timestamp)
            .ok_or_else(|| {
                tracing::debug!(
                    seconds = pb.seconds,
                    nanos = pb.nanos,
                    "protobuf timestamp not representable"
                );
                Error::TimestampOutOfRange {
                    seconds: pb.seconds,
                    nanos: pb.nanos,
                }
            })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The stored instant, in UTC
    #[inline]
    pub fn time(&self) -> DateTime<Utc> {
        self.0
    }

    /// Wire timestamp denoting the same instant
    ///
    /// Leap-second instants are pinned to the last nanosecond of the
    /// preceding second, as the wire format has no leap seconds.
    pub fn pb_timestamp(&self) -> prost_types::Timestamp {
        let nanos = self.0.timestamp_subsec_nanos().min(NANOS_PER_SECOND - 1);
        prost_types::Timestamp {
            seconds: self.0.timestamp(),
            nanos: nanos as i32,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))?;

        let nanos = self.0.timestamp_subsec_nanos() % NANOS_PER_SECOND;
        if nanos != 0 {
            let digits = format!("{:09}", nanos);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        f.write_str("Z")
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::from_rfc3339_nano(s)
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(time: DateTime<Tz>) -> Self {
        Timestamp::from_time(time)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Timestamp(DateTime::<Utc>::from(time))
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl From<Timestamp> for prost_types::Timestamp {
    fn from(ts: Timestamp) -> Self {
        ts.pb_timestamp()
    }
}

impl TryFrom<&prost_types::Timestamp> for Timestamp {
    type Error = Error;

    fn try_from(pb: &prost_types::Timestamp) -> Result<Self> {
        Timestamp::from_pb_timestamp(Some(pb))
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::from_rfc3339_nano(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
