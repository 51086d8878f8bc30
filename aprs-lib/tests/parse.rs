mod common;

use aprs::*;
use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use common::fixture_packets;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn reference() -> DateTime<Utc> {
    "2024-06-15T12:34:56.250Z".parse().unwrap()
}

fn fixed_parser() -> Parser {
    Parser::builder()
        .clock(Box::new(FixedClock::new(reference())))
        .build()
}

fn assert_close(got: f64, expected: f64) {
    assert!(
        (got - expected).abs() < 1e-4,
        "expected {expected}, got {got}"
    );
}

#[test]
fn callsign() {
    let report = fixed_parser().parse("N0CALL>APRS,WIDE1-1:!4903.50N/07201.75W-");
    assert_eq!(report.call, "N0CALL");
}

#[test]
fn zulu_timestamp() {
    let report = fixed_parser().parse("N0CALL>APRS:@221854z4903.50N/07201.75W>");
    let ts = report.time_stamp();
    assert_eq!((ts.day(), ts.hour(), ts.minute()), (22, 18, 54));
    assert_eq!(ts.timestamp_subsec_millis(), 0);
    assert_eq!((ts.year(), ts.month()), (2024, 6));
}

#[test]
fn local_timestamp() {
    let report = fixed_parser().parse("N0CALL>APRS:@221854l4903.50N/07201.75W>");
    let ts = report.time_stamp().with_timezone(&Local);
    assert_eq!((ts.day(), ts.hour(), ts.minute()), (22, 18, 54));
}

#[test]
fn position_sign() {
    let report = fixed_parser().parse("N0CALL>APRS:!4903.50N/07201.75W-");
    assert_close(report.latitude(), 49.0583);
    assert_close(report.longitude(), -72.0292);
    assert_eq!(report.parallel(), Some(Parallel::North));
    assert_eq!(report.meridian(), Some(Meridian::West));

    let report = fixed_parser().parse("N0CALL>APRS:!4903.50S/07201.75E-");
    assert_close(report.latitude(), -49.0583);
    assert_close(report.longitude(), 72.0292);
}

#[test]
fn altitude() {
    let report = fixed_parser().parse("N0CALL>APRS:!4903.50N/07201.75W-/A=001234");
    assert_eq!(report.altitude(), Some(1234));

    let report = fixed_parser().parse("N0CALL>APRS:!4903.50N/07201.75W-");
    assert_eq!(report.altitude(), None);
    assert_eq!(report.altitude, Field::Unavailable(Error::NoAltitude));
}

#[test]
fn ambiguous_position() {
    let report = fixed_parser().parse("N0CALL>APRS:!4903.  N/07201.  W-");
    assert_close(report.latitude(), 49.05);
    assert_close(report.longitude(), -(72.0 + 1.0 / 60.0));
    assert_eq!(report.position.value().map(|p| p.ambiguity), Some(2));

    let report = fixed_parser().parse("N0CALL>APRS:!4903. 5N/07201.  W-");
    assert_eq!(report.latitude(), 0.0);
    assert_eq!(
        report.position.reason().and_then(Error::code),
        Some(ErrorCode::LocAmbInv)
    );
}

#[test]
fn altitude_followed_by_comment() {
    let report = fixed_parser().parse("N0CALL>APRS:!4903.50N/07201.75W-/A=1234 ft");
    assert_eq!(report.altitude(), Some(1234));
}

#[test]
fn malformed_position_defaults_to_zero() {
    let report = fixed_parser().parse("N0CALL>APRS:!4903.50N07201.75W-");
    assert_eq!(report.latitude(), 0.0);
    assert_eq!(report.longitude(), 0.0);
    assert_eq!(report.parallel(), None);
    assert_eq!(report.position, Field::Unavailable(Error::NoSymbolTable));
    assert_eq!(
        report.position.reason().and_then(Error::code),
        Some(ErrorCode::LocInv)
    );
}

#[test]
fn zero_position_is_distinguishable() {
    let report = fixed_parser().parse("N0CALL>APRS:!0000.00N/00000.00E-");
    assert_eq!(report.latitude(), 0.0);
    assert!(report.position.is_decoded());
}

#[test]
fn reparse_is_identical() {
    let parser = fixed_parser();
    for packet in fixture_packets("packets.txt") {
        assert_eq!(parser.parse(&packet), parser.parse(&packet), "{packet}");
    }
}

#[test]
fn fixtures() {
    let parser = fixed_parser();
    let reports: Vec<PositionReport> = fixture_packets("packets.txt")
        .iter()
        .map(|p| parser.parse(p))
        .collect();
    assert_eq!(reports.len(), 9);

    let decoded: Vec<&str> = reports
        .iter()
        .filter(|r| r.position.is_decoded())
        .map(|r| r.call.as_str())
        .collect();
    assert_eq!(decoded, ["N0CALL", "VK2XYZ-12", "ICA3D17F2", "W1AW", "N0CALL"]);

    let sydney = &reports[1];
    assert_close(sydney.latitude(), -(33.0 + 52.10 / 60.0));
    assert_close(sydney.longitude(), 151.0 + 12.45 / 60.0);
    assert_eq!(sydney.altitude(), Some(321));
    assert_eq!(
        sydney.time_stamp(),
        "2024-06-22T18:54:56Z".parse::<DateTime<Utc>>().unwrap()
    );

    let glider = &reports[2];
    assert_eq!(glider.altitude(), Some(3054));
    assert_eq!(
        glider.timestamp,
        Field::Unavailable(Error::NotTimestamped('/'))
    );
    assert_eq!(
        glider.callsign.reason().and_then(Error::code),
        Some(ErrorCode::SrccallNoax25)
    );

    assert_eq!(reports[4].kind, Some(PacketKind::MicE));
    assert_eq!(reports[5].kind, Some(PacketKind::Nmea));
    assert_eq!(reports[6].kind, Some(PacketKind::Object));
    assert_eq!(reports[7].kind, Some(PacketKind::Status));
    assert_eq!(reports[8].kind, None);
    assert_eq!(reports[8].time_stamp(), reference());
}

#[test]
fn parse_is_total() {
    let parser = fixed_parser();
    let mut rng = StdRng::seed_from_u64(0x41505253);
    let alphabet: Vec<char> = "N0CAL>:/\\@!=zlASEW.-A=0123456789 ßé\u{0}\u{1c}`"
        .chars()
        .collect();

    for _ in 0..5_000 {
        let len = rng.gen_range(0..48);
        let packet: String = (0..len)
            .map(|_| {
                if rng.gen_bool(0.1) {
                    rng.gen::<char>()
                } else {
                    alphabet[rng.gen_range(0..alphabet.len())]
                }
            })
            .collect();
        let report = parser.parse(&packet);
        assert_eq!(report.raw, packet);
        if let Some(pos) = report.position.value() {
            assert!((-90.0..=90.0).contains(&pos.latitude), "{packet:?}");
            assert!((-180.0..=180.0).contains(&pos.longitude), "{packet:?}");
        }
    }
}

#[test]
fn catalog_lookup() {
    assert_eq!(get_message("packet_nobody"), Some("No body in packet"));
    assert_eq!(get_message("nope"), None);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_fields_with_status() {
    let report = fixed_parser().parse("N0CALL>APRS:!4903.50N/07201.75W-");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["call"], "N0CALL");
    assert_eq!(json["position"]["status"], "decoded");
    assert_eq!(json["position"]["value"]["parallel"], "N");
    assert_eq!(json["altitude"]["status"], "unavailable");
    assert_eq!(json["altitude"]["value"]["code"], serde_json::Value::Null);
    assert_eq!(json["callsign"]["value"]["base"], "N0CALL");
}
