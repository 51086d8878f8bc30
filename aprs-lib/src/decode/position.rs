//! Uncompressed latitude/longitude, e.g. `4903.50N/07201.75W`.
//!
//! Position ambiguity blanks trailing minute digits with spaces, e.g. `4903.  N` is only
//! accurate to the minute. Blanked digits decode as zero.
use std::ops::Range;

use tracing::trace;

use super::parse_digits;
use crate::error::{Error, Result};
use crate::message::Message;

/// Symbol table identifiers separating latitude from longitude: primary `/` and alternate `\`.
pub const SYMBOL_TABLES: [char; 2] = ['/', '\\'];

/// Character offsets of one coordinate within its fixed-width window.
#[derive(Debug, Clone)]
pub struct CoordinateLayout {
    /// Total window width, including the hemisphere letter.
    pub width: usize,
    pub degrees: Range<usize>,
    pub minutes: Range<usize>,
    pub hemisphere: usize,
    pub max_degrees: f64,
}

/// Offset of the decimal point within the `MM.mm` minutes.
const MINUTES_POINT: usize = 2;

/// `DDMM.mmH`, the trailing 8 characters before the symbol table.
pub const LATITUDE: CoordinateLayout = CoordinateLayout {
    width: 8,
    degrees: 0..2,
    minutes: 2..7,
    hemisphere: 7,
    max_degrees: 90.0,
};

/// `DDDMM.mmH`, the leading 9 characters after the symbol table.
pub const LONGITUDE: CoordinateLayout = CoordinateLayout {
    width: 9,
    degrees: 0..3,
    minutes: 3..8,
    hemisphere: 8,
    max_degrees: 180.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Parallel {
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
}

impl TryFrom<char> for Parallel {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'N' => Ok(Parallel::North),
            'S' => Ok(Parallel::South),
            _ => Err(Error::InvalidHemisphere(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Meridian {
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

impl TryFrom<char> for Meridian {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'E' => Ok(Meridian::East),
            'W' => Ok(Meridian::West),
            _ => Err(Error::InvalidHemisphere(c)),
        }
    }
}

/// A decoded position. Southern latitudes and western longitudes are negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub parallel: Parallel,
    pub meridian: Meridian,
    pub symbol_table: char,
    /// The character following the longitude, if any.
    pub symbol_code: Option<char>,
    /// Number of latitude minute digits blanked for position ambiguity, 0 to 4.
    pub ambiguity: u8,
}

/// Decode the position of a report.
///
/// The text is split at the first symbol table character; the latitude is the trailing
/// [LATITUDE] window before it and the longitude the leading [LONGITUDE] window after it,
/// up to the next `/`.
///
/// # Errors
/// [Error::NoSymbolTable] without a separator, [Error::LocationTooShort] if a window does
/// not fit, [Error::InvalidLocation] or [Error::InvalidHemisphere] for malformed content,
/// [Error::InvalidAmbiguity] if a digit follows a blanked one, and [Error::DegreesTooLarge]
/// for values beyond ±90/±180 degrees.
pub fn decode(msg: &Message) -> Result<Position> {
    let text = msg.text.as_str();
    // the data type identifier is never part of the latitude, and may itself be a `/`
    let body = text.chars().next().map_or(0, char::len_utf8);
    let Some(sep) = text[body..]
        .find(|c| SYMBOL_TABLES.contains(&c))
        .map(|idx| idx + body)
    else {
        return Err(Error::NoSymbolTable);
    };
    // separators are ASCII, so sep + 1 is a char boundary
    let symbol_table = char::from(text.as_bytes()[sep]);
    let lat_chunk = &text[..sep];
    let rest = &text[sep + 1..];
    let lon_chunk = rest.split_once('/').map_or(rest, |(chunk, _)| chunk);

    let lat_window = trailing(lat_chunk, LATITUDE.width)?;
    let lon_window = leading(lon_chunk, LONGITUDE.width)?;

    let (latitude, parallel, ambiguity) = decode_coordinate(lat_window, &LATITUDE)?;
    let parallel = Parallel::try_from(parallel)?;
    let (longitude, meridian, _) = decode_coordinate(lon_window, &LONGITUDE)?;
    let meridian = Meridian::try_from(meridian)?;

    let position = Position {
        latitude: if parallel == Parallel::South {
            -latitude
        } else {
            latitude
        },
        longitude: if meridian == Meridian::West {
            -longitude
        } else {
            longitude
        },
        parallel,
        meridian,
        symbol_table,
        symbol_code: rest.get(LONGITUDE.width..).and_then(|s| s.chars().next()),
        ambiguity,
    };
    trace!(
        latitude = position.latitude,
        longitude = position.longitude,
        "decoded position"
    );
    Ok(position)
}

fn trailing(chunk: &str, width: usize) -> Result<&str> {
    let Some(start) = chunk.len().checked_sub(width) else {
        return Err(Error::LocationTooShort {
            actual: chunk.len(),
            minimum: width,
        });
    };
    chunk
        .get(start..)
        .ok_or_else(|| Error::InvalidLocation(chunk.to_string()))
}

fn leading(chunk: &str, width: usize) -> Result<&str> {
    if chunk.len() < width {
        return Err(Error::LocationTooShort {
            actual: chunk.len(),
            minimum: width,
        });
    }
    chunk
        .get(..width)
        .ok_or_else(|| Error::InvalidLocation(chunk.to_string()))
}

/// Decode an unsigned coordinate and return it along with its hemisphere letter and the
/// number of blanked minute digits.
fn decode_coordinate(window: &str, layout: &CoordinateLayout) -> Result<(f64, char, u8)> {
    let invalid = || Error::InvalidLocation(window.to_string());
    let degrees: u16 = window
        .get(layout.degrees.clone())
        .and_then(parse_digits)
        .ok_or_else(invalid)?;
    let minutes = window.get(layout.minutes.clone()).ok_or_else(invalid)?;
    let (minutes, ambiguity) = decode_minutes(minutes, window)?;
    let hemisphere = window
        .get(layout.hemisphere..)
        .and_then(|s| s.chars().next())
        .ok_or_else(invalid)?;

    if minutes >= 60.0 {
        return Err(invalid());
    }
    let value = f64::from(degrees) + minutes / 60.0;
    if value > layout.max_degrees {
        return Err(Error::DegreesTooLarge(window.to_string()));
    }
    Ok((value, hemisphere, ambiguity))
}

/// Decode `MM.mm` minutes in which trailing digits may be blanked with spaces.
fn decode_minutes(minutes: &str, window: &str) -> Result<(f64, u8)> {
    let invalid = || Error::InvalidLocation(window.to_string());
    let mut digits = String::with_capacity(minutes.len());
    let mut blanked = 0u8;
    for (idx, b) in minutes.bytes().enumerate() {
        match b {
            b'.' if idx == MINUTES_POINT => digits.push('.'),
            _ if idx == MINUTES_POINT => return Err(invalid()),
            b'0'..=b'9' if blanked > 0 => {
                return Err(Error::InvalidAmbiguity(window.to_string()));
            }
            b'0'..=b'9' => digits.push(char::from(b)),
            b' ' => {
                blanked += 1;
                digits.push('0');
            }
            _ => return Err(invalid()),
        }
    }
    let value = digits.parse::<f64>().map_err(|_| invalid())?;
    Ok((value, blanked))
}
