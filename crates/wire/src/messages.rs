//! Protobuf message definitions
//!
//! Field tags are part of the wire contract and MUST NOT change.

/// Represents an amount of money with its currency type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Money {
    /// The three-letter currency code defined in ISO 4217.
    #[prost(string, tag = "1")]
    pub currency_code: ::prost::alloc::string::String,
    /// The whole units of the amount.
    #[prost(int64, tag = "2")]
    pub units: i64,
    /// Number of nano (10^-9) units of the amount, in
    /// -999,999,999..=+999,999,999, with the same sign as `units` when
    /// `units` is non-zero.
    #[prost(int32, tag = "3")]
    pub nanos: i32,
}

/// A person's name.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Person {
    /// Stable identifier, usually a UUID.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// Family name.
    #[prost(string, tag = "2")]
    pub family_name: ::prost::alloc::string::String,
    /// Given name.
    #[prost(string, tag = "3")]
    pub given_name: ::prost::alloc::string::String,
    /// Middle name(s) as one string.
    #[prost(string, tag = "4")]
    pub middle_name: ::prost::alloc::string::String,
    /// Display name.
    #[prost(string, tag = "5")]
    pub display_name: ::prost::alloc::string::String,
}

/// A postal address, e.g. for postal delivery or payments addresses.
///
/// Tag 1 (`revision`) is reserved and not carried.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostalAddress {
    /// CLDR region code of the country/region of the address. Required.
    #[prost(string, tag = "2")]
    pub region_code: ::prost::alloc::string::String,
    /// BCP-47 language code of the contents of this address.
    #[prost(string, tag = "3")]
    pub language_code: ::prost::alloc::string::String,
    /// Postal code of the address.
    #[prost(string, tag = "4")]
    pub postal_code: ::prost::alloc::string::String,
    /// Additional, country-specific, sorting code.
    #[prost(string, tag = "5")]
    pub sorting_code: ::prost::alloc::string::String,
    /// Highest administrative subdivision (state, province, ...).
    #[prost(string, tag = "6")]
    pub administrative_area: ::prost::alloc::string::String,
    /// City or town.
    #[prost(string, tag = "7")]
    pub locality: ::prost::alloc::string::String,
    /// Sublocality of the address.
    #[prost(string, tag = "8")]
    pub sublocality: ::prost::alloc::string::String,
    /// Unstructured address lines, in order.
    #[prost(string, repeated, tag = "9")]
    pub address_lines: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Recipients at the address.
    #[prost(string, repeated, tag = "10")]
    pub recipients: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Organization at the address.
    #[prost(string, tag = "11")]
    pub organization: ::prost::alloc::string::String,
    /// Mailbox identifier, e.g. a PO box.
    #[prost(string, tag = "12")]
    pub mailbox_id: ::prost::alloc::string::String,
}
