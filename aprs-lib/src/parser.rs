use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

use crate::callsign::{extract_call, Callsign};
use crate::clock::{Clock, SystemClock};
use crate::decode::{altitude, position, timestamp};
use crate::field::Field;
use crate::message::{extract_message, Message};
use crate::report::PositionReport;

/// Decodes packets into [PositionReport]s.
///
/// Parsing never fails. Fields that cannot be decoded are reported as
/// [Field::Unavailable] and the rest of the packet is still decoded.
///
/// # Example
/// ```
/// use aprs::{FixedClock, Parser};
///
/// let now = "2024-06-15T12:00:00Z".parse().unwrap();
/// let parser = Parser::builder()
///     .clock(Box::new(FixedClock::new(now)))
///     .build();
/// let report = parser.parse("N0CALL>APRS,WIDE1-1:@221854z4903.50N/07201.75W>/A=001234");
///
/// assert_eq!(report.call, "N0CALL");
/// assert_eq!(report.altitude(), Some(1234));
/// assert_eq!(report.time_stamp().to_rfc3339(), "2024-06-22T18:54:00+00:00");
/// ```
#[derive(TypedBuilder)]
pub struct Parser {
    /// Source of the reference instant partial timestamps are anchored to.
    #[builder(default = Box::new(SystemClock))]
    clock: Box<dyn Clock>,
    /// Offset for local (`l`) timestamps. The system time zone is used when unset.
    #[builder(default)]
    local_offset: Option<FixedOffset>,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::builder().build()
    }
}

impl Parser {
    /// Decode `packet` using the current instant of the configured clock as reference.
    #[must_use]
    pub fn parse(&self, packet: &str) -> PositionReport {
        self.parse_at(packet, self.clock.now())
    }

    /// Decode `packet` anchoring partial timestamps to `reference`.
    #[must_use]
    pub fn parse_at(&self, packet: &str, reference: DateTime<Utc>) -> PositionReport {
        let call = extract_call(packet);
        let message: Field<Message> = extract_message(packet).into();

        let kind = message.value().map(Message::kind);
        if let Some(code) = kind.as_ref().and_then(|k| k.unsupported_code()) {
            debug!(call, ?kind, %code, "unsupported packet kind");
        }

        let (timestamp, position, altitude) = match &message {
            Field::Decoded(msg) => (
                timestamp::decode(msg)
                    .and_then(|ts| ts.resolve(&reference, self.local_offset))
                    .into(),
                position::decode(msg).into(),
                altitude::decode(msg).into(),
            ),
            Field::Unavailable(err) => {
                trace!(call, %err, "no information field");
                (
                    Field::Unavailable(err.clone()),
                    Field::Unavailable(err.clone()),
                    Field::Unavailable(err.clone()),
                )
            }
        };
        if let Field::Unavailable(err) = &position {
            trace!(call, %err, "position unavailable");
        }

        PositionReport {
            raw: packet.to_string(),
            call: call.to_string(),
            callsign: call.parse::<Callsign>().into(),
            message,
            kind,
            timestamp,
            position,
            altitude,
            speed: 0.0,
            direction: 0.0,
            reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::kind::PacketKind;

    fn reference() -> DateTime<Utc> {
        "2024-06-15T12:34:56Z".parse().unwrap()
    }

    fn parser() -> Parser {
        Parser::builder()
            .clock(Box::new(FixedClock::new(reference())))
            .local_offset(FixedOffset::west_opt(5 * 3600))
            .build()
    }

    #[test]
    fn full_report() {
        let report = parser().parse("N0CALL-9>APRS,WIDE1-1:@221854z4903.50N/07201.75W>/A=001234");

        assert_eq!(report.call, "N0CALL-9");
        assert_eq!(
            report.callsign,
            Field::Decoded(Callsign {
                base: "N0CALL".to_string(),
                ssid: 9
            })
        );
        assert_eq!(report.message().unwrap().data_type, '@');
        assert_eq!(
            report.kind,
            Some(PacketKind::Position {
                timestamped: true,
                messaging: true
            })
        );
        assert_eq!(
            report.time_stamp(),
            "2024-06-22T18:54:56Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert!((report.latitude() - 49.0583).abs() < 1e-4);
        assert!((report.longitude() + 72.0292).abs() < 1e-4);
        assert_eq!(report.altitude(), Some(1234));
        assert_eq!(report.speed, 0.0);
        assert_eq!(report.direction, 0.0);
    }

    #[test]
    fn local_timestamp_uses_configured_offset() {
        let report = parser().parse("N0CALL>APRS:@221854l4903.50N/07201.75W>");
        // 18:54 at UTC-5
        assert_eq!(
            report.time_stamp(),
            "2024-06-22T23:54:56Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn no_information_field() {
        let report = parser().parse("N0CALL>APRS");
        assert_eq!(report.message, Field::Unavailable(Error::NoBody));
        assert_eq!(report.kind, None);
        assert_eq!(report.timestamp, Field::Unavailable(Error::NoBody));
        assert_eq!(report.time_stamp(), reference());
        assert_eq!(report.latitude(), 0.0);
        assert_eq!(report.longitude(), 0.0);
        assert_eq!(report.parallel(), None);
        assert_eq!(report.meridian(), None);
        assert_eq!(report.altitude(), None);
    }

    #[test]
    fn empty_packet() {
        let report = parser().parse("");
        assert_eq!(report.call, "");
        assert_eq!(report.raw, "");
        assert_eq!(report.message, Field::Unavailable(Error::NoPacket));
        assert_eq!(report.callsign, Field::Unavailable(Error::CallsignNotAx25(String::new())));
    }

    #[test]
    fn unsupported_kind_still_reported() {
        let report = parser().parse("N0CALL>APRS:$GPRMC,063909,A,3349.4302,N,11700.3721,W");
        assert_eq!(report.kind, Some(PacketKind::Nmea));
        assert!(!report.position.is_decoded());
        assert_eq!(report.time_stamp(), reference());
    }

    #[test]
    fn parse_at_overrides_clock() {
        let other: DateTime<Utc> = "2023-01-05T00:00:00Z".parse().unwrap();
        let report = parser().parse_at("N0CALL>APRS:@221854z4903.50N/07201.75W>", other);
        assert_eq!(report.reference, other);
        assert_eq!(
            report.time_stamp(),
            "2023-01-22T18:54:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
