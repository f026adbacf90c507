//! Seed scenarios, driven through encoded wire bytes

use commerce_types::wire::{self, Message};
use commerce_types::{Money, Person, PostalAddress, Timestamp, WireConvert};
use proptest::collection::vec;
use proptest::prelude::*;

/// Encode, decode, convert in, convert out
fn through_bytes<T>(pb: &T::Wire) -> T::Wire
where
    T: WireConvert,
    T::Wire: Message + Default,
{
    let bytes = pb.encode_to_vec();
    let decoded = T::Wire::decode(bytes.as_slice()).unwrap();
    T::from_wire(Some(&decoded)).unwrap().to_wire()
}

#[test]
fn money_roundtrip() {
    let pb = wire::Money {
        currency_code: "USD".to_string(),
        units: 1651,
        nanos: 940_000_000,
    };
    assert_eq!(through_bytes::<Money>(&pb), pb);
}

#[test]
fn negative_money_keeps_signs() {
    let pb = wire::Money {
        currency_code: "USD".to_string(),
        units: -1,
        nanos: -750_000_000,
    };
    let money = Money::from_wire(Some(&pb)).unwrap();
    assert!(money.validate().is_ok());
    assert_eq!(money.to_string(), "-1.750000000 USD");
    assert_eq!(through_bytes::<Money>(&pb), pb);
}

#[test]
fn person_roundtrip() {
    let pb = wire::Person {
        id: "10615145-2010-4c5f-8347-2bb556232c31".to_string(),
        family_name: "Grint".to_string(),
        given_name: "Rupert".to_string(),
        middle_name: "Alexander Lloyd".to_string(),
        display_name: "Rupert".to_string(),
    };
    assert_eq!(through_bytes::<Person>(&pb), pb);
}

#[test]
fn postal_address_roundtrip() {
    let pb = wire::PostalAddress {
        region_code: "GB".to_string(),
        language_code: "en-GB".to_string(),
        postal_code: "EX11 1HF".to_string(),
        sorting_code: "63/63".to_string(),
        administrative_area: "Exeter".to_string(),
        locality: "Ottery St Catchpole".to_string(),
        sublocality: "St Catchpole".to_string(),
        address_lines: vec!["55 Yonder St".to_string(), "Flat B".to_string()],
        recipients: vec!["care of Molly Weasley".to_string()],
        organization: "The Order of the Phoenix".to_string(),
        mailbox_id: "PO 7".to_string(),
    };
    let back = through_bytes::<PostalAddress>(&pb);
    assert_eq!(back.address_lines, vec!["55 Yonder St", "Flat B"]);
    assert_eq!(back, pb);
}

#[test]
fn absent_wire_values_stay_absent() {
    assert!(Money::from_wire(None).is_none());
    assert!(Person::from_wire(None).is_none());
    assert!(PostalAddress::from_wire(None).is_none());
}

#[test]
fn absent_wire_timestamp_is_an_error() {
    let err = Timestamp::from_pb_timestamp(None).unwrap_err();
    assert!(err
        .to_string()
        .contains("cannot interpret nil protobuf timestamp"));
}

#[test]
fn timestamp_through_wire_bytes() {
    let ts = Timestamp::from_rfc3339_nano("2021-01-01T16:23:19.123456789-06:00").unwrap();
    let bytes = ts.pb_timestamp().encode_to_vec();
    let pb = wire::Timestamp::decode(bytes.as_slice()).unwrap();
    let back = Timestamp::from_pb_timestamp(Some(&pb)).unwrap();
    assert_eq!(back, ts);
    assert_eq!(back.to_string(), "2021-01-01T22:23:19.123456789Z");
}

proptest! {
    #[test]
    fn money_through_bytes_is_unchanged(
        code in "[A-Z]{3}",
        units in any::<i64>(),
        nanos in -999_999_999..=999_999_999i32,
    ) {
        let pb = wire::Money {
            currency_code: code,
            units,
            nanos,
        };
        prop_assert_eq!(through_bytes::<Money>(&pb), pb);
    }

    #[test]
    fn person_through_bytes_is_unchanged(
        id in "[0-9a-f-]{0,36}",
        family in ".*",
        given in ".*",
    ) {
        let pb = wire::Person {
            id,
            family_name: family,
            given_name: given,
            ..Default::default()
        };
        prop_assert_eq!(through_bytes::<Person>(&pb), pb);
    }

    #[test]
    fn postal_address_through_bytes_keeps_list_order(
        region in "[A-Z]{2}",
        lines in vec(".*", 0..6),
        recipients in vec(".*", 0..4),
    ) {
        let pb = wire::PostalAddress {
            region_code: region,
            address_lines: lines,
            recipients,
            ..Default::default()
        };
        prop_assert_eq!(through_bytes::<PostalAddress>(&pb), pb);
    }

    #[test]
    fn wire_timestamp_through_bytes_is_same_instant(
        seconds in -62_135_596_800i64..=253_402_300_799,
        nanos in 0..1_000_000_000i32,
    ) {
        let pb = wire::Timestamp { seconds, nanos };
        let bytes = pb.encode_to_vec();
        let decoded = wire::Timestamp::decode(bytes.as_slice()).unwrap();
        let ts = Timestamp::from_pb_timestamp(Some(&decoded)).unwrap();
        prop_assert_eq!(ts.time().timestamp(), seconds);
        prop_assert_eq!(ts.pb_timestamp(), pb);
    }
}
