#![doc = include_str!("../README.md")]

mod callsign;
mod clock;
mod error;
mod field;
mod message;
mod parser;
mod report;

pub mod catalog;
pub mod decode;
pub mod kind;

pub use callsign::{extract_call, Callsign};
pub use catalog::ErrorCode;
pub use clock::{Clock, FixedClock, SystemClock};
pub use decode::position::{Meridian, Parallel, Position};
pub use decode::timestamp::{PartialTimestamp, Zone};
pub use error::{Error, Result};
pub use field::Field;
pub use kind::PacketKind;
pub use message::{extract_message, Message};
pub use parser::Parser;
pub use report::PositionReport;

/// Decode `packet` with a default [Parser], i.e., against the system clock and time zone.
#[must_use]
pub fn parse(packet: &str) -> PositionReport {
    Parser::default().parse(packet)
}

/// Look up the human readable description of a symbolic error code such as `loc_short`.
#[must_use]
pub fn get_message(code: &str) -> Option<&'static str> {
    catalog::get_message(code)
}
