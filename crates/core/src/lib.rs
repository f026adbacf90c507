//! Core value types for commerce services
//!
//! This crate defines the shared domain values passed between services:
//! - Money: ISO 4217 currency with signed (units, nanos)
//! - Person: name parts keyed by a stable identifier
//! - PostalAddress: structured address with ordered lines and recipients
//! - Timestamp: nanosecond UTC instant
//! - WireConvert: mapping to and from the `commerce-wire` messages
//! - KeyKind: document-store key prefixes
//! - Error: boundary failures (timestamp parsing, nil wire timestamp, money validation)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod traits;
pub mod values;

pub use error::{Error, MoneyError, Result};
pub use key::{KeyKind, PERSON_KEY_PREFIX, POSTAL_ADDRESS_KEY_PREFIX};
pub use traits::WireConvert;
pub use values::{Money, Person, PostalAddress, Timestamp};
