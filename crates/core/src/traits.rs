//! Conversion trait between in-memory values and wire messages
//!
//! Money, Person and PostalAddress convert totally in both directions.
//! Absent wire input maps to an absent value rather than an error, so callers
//! at the RPC boundary never have to tell "field missing" from "field zero".
//!
//! Timestamp is deliberately not a `WireConvert`: reading an absent wire
//! timestamp is an error (see `Timestamp::from_pb_timestamp`).

/// Reversible mapping to and from a wire message
///
/// # Examples
///
/// ```
/// use commerce_core::{Money, WireConvert};
/// use commerce_wire as wire;
///
/// assert_eq!(Money::from_wire(None), None);
///
/// let pb = wire::Money { currency_code: "USD".into(), units: 3, nanos: 0 };
/// let money = Money::from_wire(Some(&pb)).unwrap();
/// assert_eq!(money.to_wire(), pb);
/// ```
pub trait WireConvert: Sized {
    /// The wire message this value maps to
    type Wire;

    /// Build the value from a present wire message
    fn from_wire_message(wire: &Self::Wire) -> Self;

    /// Produce the wire message for this value
    fn to_wire(&self) -> Self::Wire;

    /// Build the value from a possibly absent wire message
    ///
    /// Absent in, absent out.
    fn from_wire(wire: Option<&Self::Wire>) -> Option<Self> {
        wire.map(Self::from_wire_message)
    }
}
