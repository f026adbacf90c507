//! Timestamp normalization and parsing invariants

use chrono::{FixedOffset, TimeZone, Utc};
use commerce_types::{Error, Timestamp};

#[test]
fn utc_normalization() {
    let cst = FixedOffset::west_opt(6 * 3600).unwrap();
    let ts = Timestamp::from_time(cst.with_ymd_and_hms(2021, 1, 1, 16, 23, 19).unwrap());
    assert_eq!(ts.to_string(), "2021-01-01T22:23:19Z");

    let parsed = Timestamp::from_rfc3339_nano("2021-01-01T16:23:19-06:00").unwrap();
    assert_eq!(parsed, ts);
}

#[test]
fn nanosecond_parse() {
    let ts = Timestamp::from_rfc3339_nano("2021-01-01T16:23:19.123456789-06:00").unwrap();
    assert_eq!(ts.to_string(), "2021-01-01T22:23:19.123456789Z");
}

#[test]
fn positive_offset_crosses_midnight() {
    let ts = Timestamp::from_rfc3339_nano("2021-01-01T01:00:00.5+02:00").unwrap();
    assert_eq!(ts.to_string(), "2020-12-31T23:00:00.5Z");
}

#[test]
fn now_lies_between_clock_reads() {
    let t0 = Utc::now().timestamp();
    let ts = Timestamp::now();
    let t1 = Utc::now().timestamp();

    let secs = ts.time().timestamp();
    assert!(t0 <= secs, "{t0} <= {secs}");
    assert!(secs <= t1, "{secs} <= {t1}");
}

#[test]
fn unparseable_input_yields_parse_error() {
    let result = Timestamp::from_rfc3339_nano("there is no time like the present");
    match result {
        Err(err @ Error::ParseTimestamp { .. }) => {
            assert_eq!(err.reason_code(), "timestamp_parse");
            assert!(err
                .to_string()
                .contains("there is no time like the present"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn pb_timestamp_denotes_same_instant() {
    let ts = Timestamp::from_rfc3339_nano("2021-06-30T12:00:00.000000001Z").unwrap();
    let pb = ts.pb_timestamp();
    assert_eq!(pb.seconds, ts.time().timestamp());
    assert_eq!(pb.nanos, 1);
}
