//! Document-store key composition

use commerce_types::{KeyKind, Person, PostalAddress, PERSON_KEY_PREFIX, POSTAL_ADDRESS_KEY_PREFIX};

#[test]
fn person_key_uses_prefix() {
    let person = Person {
        id: "abc".to_string(),
        ..Default::default()
    };
    let key = person.datastore_key();
    assert!(key.starts_with(PERSON_KEY_PREFIX));
    assert_eq!(KeyKind::parse(&key), Some((KeyKind::Person, "abc")));
}

#[test]
fn postal_address_key_uses_prefix() {
    let key = PostalAddress::datastore_key("home");
    assert!(key.starts_with(POSTAL_ADDRESS_KEY_PREFIX));
    assert_eq!(KeyKind::parse(&key), Some((KeyKind::PostalAddress, "home")));
}

#[test]
fn unknown_prefix_is_not_parsed() {
    assert_eq!(KeyKind::parse("cart:1"), None);
}
