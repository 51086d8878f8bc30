use chrono::{DateTime, Utc};

use crate::callsign::Callsign;
use crate::decode::position::{Meridian, Parallel, Position};
use crate::field::Field;
use crate::kind::PacketKind;
use crate::message::Message;

/// The decoded form of a single APRS packet.
///
/// Every field that can fail to decode is a [Field], which keeps the reason it is
/// unavailable. The accessor methods apply the conventional fallbacks instead: the reference
/// instant for the timestamp, `0.0` for coordinates and `None` for the altitude.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionReport {
    /// The packet exactly as given.
    pub raw: String,
    /// Source callsign as found in the packet, unvalidated.
    pub call: String,
    /// `call` validated as an AX.25 callsign.
    pub callsign: Field<Callsign>,
    pub message: Field<Message>,
    /// `None` when there is no information field.
    pub kind: Option<PacketKind>,
    pub timestamp: Field<DateTime<Utc>>,
    pub position: Field<Position>,
    /// Feet.
    pub altitude: Field<i32>,
    /// Reserved, always zero.
    pub speed: f64,
    /// Reserved, always zero.
    pub direction: f64,
    /// Instant partial timestamps were anchored to.
    pub reference: DateTime<Utc>,
}

impl PositionReport {
    /// The decoded timestamp, or the reference instant if there is none.
    #[must_use]
    pub fn time_stamp(&self) -> DateTime<Utc> {
        self.timestamp.value().copied().unwrap_or(self.reference)
    }

    /// Decoded latitude, or `0.0`.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.position.value().map_or(0.0, |p| p.latitude)
    }

    /// Decoded longitude, or `0.0`.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.position.value().map_or(0.0, |p| p.longitude)
    }

    #[must_use]
    pub fn parallel(&self) -> Option<Parallel> {
        self.position.value().map(|p| p.parallel)
    }

    #[must_use]
    pub fn meridian(&self) -> Option<Meridian> {
        self.position.value().map(|p| p.meridian)
    }

    #[must_use]
    pub fn altitude(&self) -> Option<i32> {
        self.altitude.value().copied()
    }

    /// Message text and data type, if the packet has an information field.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.value()
    }
}
