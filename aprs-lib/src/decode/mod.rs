//! Field decoders for the information field of a position report.
//!
//! Each decoder works on fixed character offsets described by a named layout constant so
//! the boundaries can be checked on their own.
pub mod altitude;
pub mod position;
pub mod timestamp;

use std::str::FromStr;

/// Parse `s` only if it is made up entirely of ASCII digits, i.e., no sign, whitespace or
/// other characters `FromStr` would accept.
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse the leading integer of `s`, e.g. `1234` out of `1234 f`. Leading whitespace and a
/// sign are accepted; anything after the digits is ignored.
fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = s.len() - unsigned.len() + digits;
    s.get(..end)?.parse().ok()
}
