//! Person name record
//!
//! Identity is the `id`. `display_name_last_first` exists only in storage:
//! the wire `Person` has no such field, so conversion neither reads nor
//! writes it. Converting to the wire and back therefore drops it.

use crate::key::KeyKind;
use crate::traits::WireConvert;
use commerce_wire as wire;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person's name parts
///
/// Field names are the stored document and JSON names; empty fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Stable identifier, usually a UUID
    #[serde(rename = "id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Family name
    #[serde(rename = "familyName", default, skip_serializing_if = "String::is_empty")]
    pub family_name: String,
    /// Given name
    #[serde(rename = "givenName", default, skip_serializing_if = "String::is_empty")]
    pub given_name: String,
    /// Middle name(s)
    #[serde(rename = "middleName", default, skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    /// Display name
    #[serde(rename = "displayName", default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// Display name in last-first form; storage only
    #[serde(
        rename = "displayNameLastFirst",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub display_name_last_first: String,
}

impl Person {
    /// Return this person with a freshly generated UUID v4 identifier
    pub fn with_generated_id(mut self) -> Self {
        self.id = Uuid::new_v4().to_string();
        self
    }

    /// Document-store key, `person:<id>`
    pub fn datastore_key(&self) -> String {
        KeyKind::Person.key(&self.id)
    }
}

impl WireConvert for Person {
    type Wire = wire::Person;

    fn from_wire_message(pb: &wire::Person) -> Self {
        Person {
            id: pb.id.clone(),
            family_name: pb.family_name.clone(),
            given_name: pb.given_name.clone(),
            middle_name: pb.middle_name.clone(),
            display_name: pb.display_name.clone(),
            display_name_last_first: String::new(),
        }
    }

    fn to_wire(&self) -> wire::Person {
        wire::Person {
            id: self.id.clone(),
            family_name: self.family_name.clone(),
            given_name: self.given_name.clone(),
            middle_name: self.middle_name.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

impl From<wire::Person> for Person {
    fn from(pb: wire::Person) -> Self {
        Person {
            id: pb.id,
            family_name: pb.family_name,
            given_name: pb.given_name,
            middle_name: pb.middle_name,
            display_name: pb.display_name,
            display_name_last_first: String::new(),
        }
    }
}

impl From<&wire::Person> for Person {
    fn from(pb: &wire::Person) -> Self {
        Person::from_wire_message(pb)
    }
}

impl From<&Person> for wire::Person {
    fn from(person: &Person) -> Self {
        person.to_wire()
    }
}
