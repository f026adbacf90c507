//! Document-store key prefixes
//!
//! Callers compose document-store keys from a type tag and an identifier,
//! e.g. `person:10615145-2010-4c5f-8347-2bb556232c31`.
//!
//! ## Contract
//!
//! The prefix spellings are part of the stored data and are FROZEN.

use std::fmt;

/// Key prefix for `Person` records
pub const PERSON_KEY_PREFIX: &str = "person:";

/// Key prefix for `PostalAddress` records
pub const POSTAL_ADDRESS_KEY_PREFIX: &str = "postaladdress:";

/// Type tag for keys composed with a well-known prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `person:`
    Person,
    /// `postaladdress:`
    PostalAddress,
}

impl KeyKind {
    /// All kinds, in declaration order
    pub const ALL: [KeyKind; 2] = [KeyKind::Person, KeyKind::PostalAddress];

    /// The key prefix for this kind
    pub const fn prefix(self) -> &'static str {
        match self {
            KeyKind::Person => PERSON_KEY_PREFIX,
            KeyKind::PostalAddress => POSTAL_ADDRESS_KEY_PREFIX,
        }
    }

    /// Compose a key from this kind's prefix and an identifier
    ///
    /// ```
    /// use commerce_core::KeyKind;
    ///
    /// assert_eq!(KeyKind::Person.key("42"), "person:42");
    /// ```
    pub fn key(self, id: &str) -> String {
        let prefix = self.prefix();
        let mut key = String::with_capacity(prefix.len() + id.len());
        key.push_str(prefix);
        key.push_str(id);
        key
    }

    /// Split a composed key into its kind and identifier
    ///
    /// Returns `None` when the key carries no known prefix.
    pub fn parse(key: &str) -> Option<(KeyKind, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|kind| key.strip_prefix(kind.prefix()).map(|id| (kind, id)))
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches(':'))
    }
}
