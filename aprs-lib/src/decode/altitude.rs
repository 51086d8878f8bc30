//! Altitude comment extension, e.g. `/A=001234`.
use tracing::trace;

use super::parse_leading_int;
use crate::error::{Error, Result};
use crate::message::Message;

pub const MARKER: &str = "/A=";
/// Number of characters following [MARKER] that hold the altitude.
pub const WIDTH: usize = 6;

/// Decode the altitude in feet from the first [MARKER] in the text. At most [WIDTH]
/// characters are read and the leading integer among them is taken, so a short value
/// followed by comment text still decodes. No unit conversion or range validation is applied.
///
/// # Errors
/// [Error::NoAltitude] without a marker, [Error::AltitudeAtStart] if the marker opens the
/// text, or [Error::InvalidAltitude] if the value does not start with an integer.
pub fn decode(msg: &Message) -> Result<i32> {
    let text = msg.text.as_str();
    let Some(idx) = text.find(MARKER) else {
        return Err(Error::NoAltitude);
    };
    if idx == 0 {
        return Err(Error::AltitudeAtStart);
    }
    let value = &text[idx + MARKER.len()..];
    let end = value
        .char_indices()
        .nth(WIDTH)
        .map_or(value.len(), |(i, _)| i);
    let value = &value[..end];

    let altitude =
        parse_leading_int(value).ok_or_else(|| Error::InvalidAltitude(value.to_string()))?;
    trace!(altitude, "decoded altitude");
    Ok(altitude)
}
