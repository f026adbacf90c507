//! Error types for commerce value types
//!
//! Only the boundary factories can fail: parsing a timestamp string, reading
//! a wire timestamp, and the optional validating money constructor. The
//! wire converters for Money, Person and PostalAddress are total.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for commerce value operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the commerce value library
#[derive(Debug, Error)]
pub enum Error {
    /// Timestamp string is not RFC 3339 with optional nanosecond fraction
    #[error("cannot parse {input:?} as RFC 3339 timestamp: {source}")]
    ParseTimestamp {
        /// The rejected input
        input: String,
        /// Parser diagnostic
        #[source]
        source: chrono::ParseError,
    },

    /// Wire timestamp was absent
    ///
    /// The message text is matched by downstream consumers; keep it stable.
    #[error("cannot interpret nil protobuf timestamp")]
    NilTimestamp,

    /// Wire timestamp denotes an instant chrono cannot represent
    ///
    /// Only reachable near the ends of the `i64` seconds range; any instant
    /// within roughly ±262,000 years of the epoch converts.
    #[error("protobuf timestamp out of range: seconds={seconds}, nanos={nanos}")]
    TimestampOutOfRange {
        /// Seconds since Unix epoch
        seconds: i64,
        /// Nanosecond part
        nanos: i32,
    },

    /// Money failed the validating constructor
    #[error("invalid money: {0}")]
    InvalidMoney(#[from] MoneyError),
}

impl Error {
    /// Get the reason code for wire protocol error mapping
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::ParseTimestamp { .. } => "timestamp_parse",
            Error::NilTimestamp => "timestamp_nil",
            Error::TimestampOutOfRange { .. } => "timestamp_out_of_range",
            Error::InvalidMoney(e) => e.reason_code(),
        }
    }
}

/// Reasons a money amount fails validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// Nanos outside -999,999,999..=999,999,999
    #[error("nanos {nanos} out of range (must be within ±999,999,999)")]
    NanosOutOfRange {
        /// The offending nanos value
        nanos: i32,
    },

    /// Units and nanos have opposite signs
    #[error("units {units} and nanos {nanos} have opposite signs")]
    SignMismatch {
        /// Whole units
        units: i64,
        /// Fractional nanos
        nanos: i32,
    },

    /// Currency code is not three uppercase ASCII letters
    #[error("invalid ISO 4217 currency code {0:?}")]
    InvalidCurrencyCode(String),
}

impl MoneyError {
    /// Get the reason code for wire protocol error mapping
    pub fn reason_code(&self) -> &'static str {
        match self {
            MoneyError::NanosOutOfRange { .. } => "money_nanos_out_of_range",
            MoneyError::SignMismatch { .. } => "money_sign_mismatch",
            MoneyError::InvalidCurrencyCode(_) => "money_invalid_currency",
        }
    }
}
