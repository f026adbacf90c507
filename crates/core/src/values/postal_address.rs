//! Postal address
//!
//! Only `region_code` is required. `address_lines` order is significant and
//! survives conversion in both directions; `recipients` likewise. An empty
//! list and an absent list are treated as equal.

use crate::key::KeyKind;
use crate::traits::WireConvert;
use commerce_wire as wire;
use serde::{Deserialize, Serialize};

/// Structured postal address
///
/// Field names are the stored document and JSON names; empty fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalAddress {
    /// CLDR region code, e.g. "CH"
    // Required, so stored even when empty
    #[serde(rename = "regionCode", default)]
    pub region_code: String,
    /// BCP-47 language code
    #[serde(rename = "languageCode", default, skip_serializing_if = "String::is_empty")]
    pub language_code: String,
    /// Postal code
    #[serde(rename = "postalCode", default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    /// Country-specific sorting code
    #[serde(rename = "sortingCode", default, skip_serializing_if = "String::is_empty")]
    pub sorting_code: String,
    /// State, province or similar
    #[serde(
        rename = "administrativeArea",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub administrative_area: String,
    /// City or town
    #[serde(rename = "locality", default, skip_serializing_if = "String::is_empty")]
    pub locality: String,
    /// Sublocality
    #[serde(rename = "sublocality", default, skip_serializing_if = "String::is_empty")]
    pub sublocality: String,
    /// Unstructured lines, in order
    #[serde(rename = "addressLines", default, skip_serializing_if = "Vec::is_empty")]
    pub address_lines: Vec<String>,
    /// Recipients, in order
    #[serde(rename = "recipients", default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<String>,
    /// Organization
    #[serde(rename = "organization", default, skip_serializing_if = "String::is_empty")]
    pub organization: String,
    /// Mailbox identifier
    #[serde(rename = "mailboxId", default, skip_serializing_if = "String::is_empty")]
    pub mailbox_id: String,
}

impl PostalAddress {
    /// Create an address with only the required region code set
    pub fn new(region_code: impl Into<String>) -> Self {
        PostalAddress {
            region_code: region_code.into(),
            ..Default::default()
        }
    }

    /// Document-store key, `postaladdress:<id>`
    pub fn datastore_key(id: &str) -> String {
        KeyKind::PostalAddress.key(id)
    }
}

impl WireConvert for PostalAddress {
    type Wire = wire::PostalAddress;

    fn from_wire_message(pb: &wire::PostalAddress) -> Self {
        PostalAddress::from(pb.clone())
    }

    fn to_wire(&self) -> wire::PostalAddress {
        wire::PostalAddress::from(self.clone())
    }
}

impl From<wire::PostalAddress> for PostalAddress {
    fn from(pb: wire::PostalAddress) -> Self {
        PostalAddress {
            region_code: pb.region_code,
            language_code: pb.language_code,
            postal_code: pb.postal_code,
            sorting_code: pb.sorting_code,
            administrative_area: pb.administrative_area,
            locality: pb.locality,
            sublocality: pb.sublocality,
            address_lines: pb.address_lines,
            recipients: pb.recipients,
            organization: pb.organization,
            mailbox_id: pb.mailbox_id,
        }
    }
}

impl From<PostalAddress> for wire::PostalAddress {
    fn from(address: PostalAddress) -> Self {
        wire::PostalAddress {
            region_code: address.region_code,
            language_code: address.language_code,
            postal_code: address.postal_code,
            sorting_code: address.sorting_code,
            administrative_area: address.administrative_area,
            locality: address.locality,
            sublocality: address.sublocality,
            address_lines: address.address_lines,
            recipients: address.recipients,
            organization: address.organization,
            mailbox_id: address.mailbox_id,
        }
    }
}

impl From<&wire::PostalAddress> for PostalAddress {
    fn from(pb: &wire::PostalAddress) -> Self {
        PostalAddress::from_wire_message(pb)
    }
}

impl From<&PostalAddress> for wire::PostalAddress {
    fn from(address: &PostalAddress) -> Self {
        address.to_wire()
    }
}
