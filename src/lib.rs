//! Commerce value types
//!
//! Shared domain values for backend services: [`Money`], [`Person`],
//! [`PostalAddress`] and [`Timestamp`]. Each has a serde form for the
//! document store and JSON, and converts to and from its [`wire`] message.
//!
//! # Quick Start
//!
//! ```
//! use commerce_types::{wire, Money, Timestamp, WireConvert};
//!
//! let pb = wire::Money { currency_code: "USD".into(), units: 1651, nanos: 940_000_000 };
//! let price = Money::from_wire(Some(&pb)).unwrap();
//! assert_eq!(price.to_wire(), pb);
//!
//! let ts = Timestamp::from_rfc3339_nano("2021-01-01T16:23:19-06:00").unwrap();
//! assert_eq!(ts.to_string(), "2021-01-01T22:23:19Z");
//! ```

pub use commerce_core::*;

/// Wire messages exchanged over RPC
pub use commerce_wire as wire;
