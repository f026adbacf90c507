//! Wire message shapes for commerce RPC
//!
//! These are the protobuf messages exchanged between services. They mirror
//! what `prost-build` emits for the shared schema, so the in-memory value
//! types in `commerce-core` map to and from them without knowing how they
//! were produced.
//!
//! - `Money`: `google.type.Money` layout (currency code, units, nanos)
//! - `Person`: identifier plus name parts
//! - `PostalAddress`: `google.type.PostalAddress` layout plus `mailbox_id`
//! - `Timestamp`: the well-known `google.protobuf.Timestamp`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod messages;

pub use messages::{Money, Person, PostalAddress};
pub use prost_types::Timestamp;

/// Re-exported so callers can encode and decode without a direct `prost` dependency
pub use prost::Message;
