//! Day/hour/minute timestamps of `@` position reports.
//!
//! The encoding only carries day of month, hour and minute. Month and year are taken from a
//! reference instant, so a report sent in a different month than the reference (e.g. sent on
//! the 31st and decoded on the 1st) resolves to the wrong month. This is inherent to the
//! format and is not corrected for.
use std::fmt::Display;
use std::ops::Range;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Timelike, Utc,
};
use tracing::trace;

use super::parse_digits;
use crate::error::{Error, Result};
use crate::message::Message;

/// Data type identifier of position reports carrying a decodable timestamp.
pub const TIMESTAMPED_DATA_TYPE: char = '@';

/// Time zone a [PartialTimestamp] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Zone {
    Zulu,
    Local,
}

/// Character offsets of a day/hour/minute timestamp within the information field.
#[derive(Debug, Clone)]
pub struct Layout {
    pub zone: Zone,
    /// Offset of the zone indicator character.
    pub indicator: usize,
    pub marker: u8,
    pub day: Range<usize>,
    pub hour: Range<usize>,
    pub minute: Range<usize>,
}

pub const ZULU_DHM: Layout = Layout {
    zone: Zone::Zulu,
    indicator: 7,
    marker: b'z',
    day: 1..3,
    hour: 3..5,
    minute: 5..7,
};

pub const LOCAL_DHM: Layout = Layout {
    zone: Zone::Local,
    indicator: 7,
    marker: b'l',
    day: 1..3,
    hour: 3..5,
    minute: 5..7,
};

/// Supported layouts, in the order they are tried.
pub const LAYOUTS: [Layout; 2] = [ZULU_DHM, LOCAL_DHM];

/// A day/hour/minute timestamp that still has to be anchored to a month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PartialTimestamp {
    pub zone: Zone,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl PartialTimestamp {
    /// Anchor to `reference` as seen in `tz`: year, month and seconds come from the
    /// reference, day/hour/minute from self, sub-seconds are zeroed.
    ///
    /// # Errors
    /// [Error::InvalidTimestamp] if the fields do not form a valid time in the reference
    /// month, e.g. day 31 in April or hour 24.
    pub fn anchor<Tz: TimeZone>(
        &self,
        reference: &DateTime<Utc>,
        tz: &Tz,
    ) -> Result<DateTime<Utc>> {
        let invalid = || Error::InvalidTimestamp(self.to_string());
        let base = reference.with_timezone(tz);
        let date =
            NaiveDate::from_ymd_opt(base.year(), base.month(), self.day).ok_or_else(invalid)?;
        let time =
            NaiveTime::from_hms_opt(self.hour, self.minute, base.second()).ok_or_else(invalid)?;
        tz.from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(invalid)
    }

    /// Anchor using UTC for zulu timestamps and `local_offset` (or the system zone if there
    /// is none) for local timestamps.
    ///
    /// # Errors
    /// See [PartialTimestamp::anchor].
    pub fn resolve(
        &self,
        reference: &DateTime<Utc>,
        local_offset: Option<FixedOffset>,
    ) -> Result<DateTime<Utc>> {
        match (self.zone, local_offset) {
            (Zone::Zulu, _) => self.anchor(reference, &Utc),
            (Zone::Local, Some(offset)) => self.anchor(reference, &offset),
            (Zone::Local, None) => self.anchor(reference, &Local),
        }
    }
}

impl Display for PartialTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let zone = match self.zone {
            Zone::Zulu => 'z',
            Zone::Local => 'l',
        };
        write!(f, "{:02}{:02}{:02}{zone}", self.day, self.hour, self.minute)
    }
}

/// Decode the day/hour/minute timestamp of an `@` report.
///
/// # Errors
/// [Error::NotTimestamped] for other data types, [Error::UnsupportedTimestamp] if no
/// [LAYOUTS] entry matches, and [Error::InvalidTimestamp] for non-numeric fields.
pub fn decode(msg: &Message) -> Result<PartialTimestamp> {
    if msg.data_type != TIMESTAMPED_DATA_TYPE {
        return Err(Error::NotTimestamped(msg.data_type));
    }
    let text = msg.text.as_str();
    let Some(layout) = LAYOUTS
        .iter()
        .find(|l| text.as_bytes().get(l.indicator) == Some(&l.marker))
    else {
        return Err(Error::UnsupportedTimestamp);
    };

    let field = |range: &Range<usize>| -> Result<u32> {
        text.get(range.clone())
            .and_then(parse_digits::<u32>)
            .ok_or_else(|| Error::InvalidTimestamp(text.chars().take(8).collect()))
    };
    let ts = PartialTimestamp {
        zone: layout.zone,
        day: field(&layout.day)?,
        hour: field(&layout.hour)?,
        minute: field(&layout.minute)?,
    };
    trace!(timestamp = %ts, "decoded timestamp");
    Ok(ts)
}
