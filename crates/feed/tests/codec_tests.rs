// ABOUTME: Integration tests for the scalar codecs exposed by podfeed-feed.
// ABOUTME: Checks that decoders invert encoders and accept the lenient forms found in real feeds.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use podfeed_feed::duration_format::{
    encode_chapter_timestamp, encode_fractional_seconds, encode_integer_seconds,
    parse_chapter_timestamp, parse_fractional_seconds, parse_integer_seconds,
};
use podfeed_feed::scalars::{encode_yes_no, parse_yes_no, trim_decimal};
use podfeed_feed::time_format::{encode_pub_date, encode_timestamp, parse_pub_date, parse_timestamp};
use podfeed_feed::{Geo, Osm, OsmType};

#[test]
fn test_chapter_timestamps_round_trip() {
    for ms in [0, 187_000, 506_250, 3_787_500, 7_387_000] {
        let d = Duration::from_millis(ms);
        let encoded = encode_chapter_timestamp(d);
        assert_eq!(parse_chapter_timestamp(&encoded).unwrap(), d, "{}", encoded);
    }
}

#[test]
fn test_chapter_timestamp_rejects_garbage() {
    assert!(parse_chapter_timestamp("1:2:3:4").is_err());
    assert!(parse_chapter_timestamp("03:61").is_err());
    assert!(parse_chapter_timestamp("03:07.").is_err());
    assert!(parse_chapter_timestamp("abc").is_err());
}

#[test]
fn test_fractional_seconds_round_trip() {
    let d = Duration::from_millis(42_250);
    assert_eq!(encode_fractional_seconds(d), "42.25");
    assert_eq!(parse_fractional_seconds("42.25").unwrap(), d);
    assert_eq!(parse_fractional_seconds("73.0").unwrap(), Duration::from_secs(73));
    assert!(parse_fractional_seconds("-1").is_err());
}

#[test]
fn test_integer_seconds_rounds_on_encode() {
    assert_eq!(encode_integer_seconds(Duration::from_millis(671_900)), "672");
    assert_eq!(encode_integer_seconds(Duration::from_millis(671_400)), "671");
    assert_eq!(parse_integer_seconds("600").unwrap(), Duration::from_secs(600));
    assert!(parse_integer_seconds("600.5").is_err());
}

#[test]
fn test_pub_date_round_trip_and_legacy_forms() {
    let t = Utc.with_ymd_and_hms(2021, 4, 1, 8, 0, 0).unwrap();
    let encoded = encode_pub_date(&t);
    assert_eq!(encoded, "Thu, 01 Apr 2021 08:00:00 GMT");
    assert_eq!(parse_pub_date(&encoded).unwrap(), t);
    assert_eq!(parse_pub_date("Thu, 1 Apr 2021 08:00:00 GMT").unwrap(), t);
    assert_eq!(parse_pub_date("Thu, 01 Apr 2021 08:00:00 UTC").unwrap(), t);
    assert!(parse_pub_date("").is_err());
}

#[test]
fn test_timestamp_round_trip() {
    let t = Utc.with_ymd_and_hms(2021, 9, 10, 2, 7, 30).unwrap();
    assert_eq!(encode_timestamp(&t), "2021-09-10T02:07:30Z");
    assert_eq!(parse_timestamp("2021-09-09T21:07:30-05:00").unwrap(), t);
}

#[test]
fn test_yes_no() {
    assert_eq!(parse_yes_no(encode_yes_no(true)).unwrap(), true);
    assert_eq!(parse_yes_no("NO").unwrap(), false);
    assert!(parse_yes_no("maybe").is_err());
}

#[test]
fn test_trim_decimal() {
    assert_eq!(trim_decimal(315.5), "315.5");
    assert_eq!(trim_decimal(3.0), "3");
    assert_eq!(trim_decimal(-0.0), "0");
}

#[test]
fn test_geo_uri_round_trip() {
    let geo = Geo::new(39.7837304, -100.445882).with_uncertainty(3_900_000.0);
    let uri = geo.to_uri().unwrap();
    assert_eq!(uri, "geo:39.7837304,-100.445882;u=3900000");
    assert_eq!(uri.parse::<Geo>().unwrap(), geo);

    let with_alt = Geo::new(30.2672, 97.7431).with_altitude(150.5);
    assert_eq!(with_alt.to_uri().unwrap().parse::<Geo>().unwrap(), with_alt);
}

#[test]
fn test_osm_round_trip() {
    let osm = Osm::new(OsmType::Relation, 148838);
    assert_eq!(osm.to_string(), "R148838");
    assert_eq!("R148838".parse::<Osm>().unwrap(), osm);

    let with_rev = Osm::new(OsmType::Way, 7).with_revision(2);
    assert_eq!(with_rev.to_string().parse::<Osm>().unwrap(), with_rev);
    assert!("X1".parse::<Osm>().is_err());
}
