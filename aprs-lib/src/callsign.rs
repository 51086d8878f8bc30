use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Maximum number of characters in the base of an AX.25 callsign.
const MAX_BASE_LEN: usize = 6;
/// Largest AX.25 secondary station identifier.
const MAX_SSID: u8 = 15;

/// Everything before the first `>`, or the whole packet if there is none. Nothing is
/// validated here; see [`Callsign`] for that.
#[must_use]
pub fn extract_call(packet: &str) -> &str {
    packet.split_once('>').map_or(packet, |(call, _)| call)
}

/// An AX.25 source callsign, e.g. `N0CALL-9`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Callsign {
    pub base: String,
    /// Secondary station identifier, 0 when not given.
    pub ssid: u8,
}

impl FromStr for Callsign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::CallsignBadChars(s.to_string()));
        }
        let noax25 = || Error::CallsignNotAx25(s.to_string());

        let (base, ssid) = match s.split_once('-') {
            Some((base, ssid)) => {
                // zero padded SSIDs are not valid AX.25
                if ssid.is_empty() || ssid.len() > 2 || (ssid.starts_with('0') && ssid.len() > 1) {
                    return Err(noax25());
                }
                let ssid = ssid.parse::<u8>().map_err(|_| noax25())?;
                (base, ssid)
            }
            None => (s, 0),
        };
        if base.is_empty() || base.len() > MAX_BASE_LEN || ssid > MAX_SSID {
            return Err(noax25());
        }

        Ok(Callsign {
            base: base.to_ascii_uppercase(),
            ssid,
        })
    }
}

impl Display for Callsign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ssid == 0 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}-{}", self.base, self.ssid)
        }
    }
}
