//! Domain value types
//!
//! Each type is an immutable, independently owned record with two faces:
//! a serde representation for the document store and JSON, and a mapping to
//! and from its wire message.
//!
//! ## Module Structure
//!
//! - `money`: currency code plus signed (units, nanos)
//! - `person`: name parts keyed by identifier
//! - `postal_address`: structured address with ordered lines
//! - `timestamp`: UTC instant with RFC 3339 and wire conversions
//!
//! ## Usage
//!
//! ```
//! use commerce_core::values::{Money, Person, PostalAddress, Timestamp};
//! ```

pub mod money;
pub mod person;
pub mod postal_address;
pub mod timestamp;

// Re-exports
pub use money::{Money, MAX_NANOS};
pub use person::Person;
pub use postal_address::PostalAddress;
pub use timestamp::Timestamp;
