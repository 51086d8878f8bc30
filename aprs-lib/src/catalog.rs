//! Symbolic error codes and their human readable descriptions.
//!
//! The catalog covers the full range of APRS packet format failures, including formats this
//! crate does not decode (NMEA, Mic-E, compressed positions, telemetry, ...). Codes that the
//! decoders do produce are reachable through [`crate::Error::code`].
use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

macro_rules! error_codes {
    ($($variant:ident => $code:literal, $text:literal;)+) => {
        /// Symbolic packet format error code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum ErrorCode {
            $($variant,)+
        }

        impl ErrorCode {
            /// Every code in catalog order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant,)+];

            /// The symbolic name, e.g. `loc_short`.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $code,)+
                }
            }

            #[must_use]
            pub fn description(&self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $text,)+
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(ErrorCode::$variant),)+
                    _ => Err(Error::UnknownCode(s.to_string())),
                }
            }
        }
    };
}

error_codes! {
    Unknown => "unknown", "Unsupported packet format";
    PacketNo => "packet_no", "No packet given to parse";
    PacketShort => "packet_short", "Too short packet";
    PacketNobody => "packet_nobody", "No body in packet";
    SrccallNoax25 => "srccall_noax25", "Source callsign is not a valid AX.25 call";
    SrccallBadchars => "srccall_badchars", "Source callsign contains bad characters";
    DstpathToomany => "dstpath_toomany", "Too many destination path components to be AX.25";
    DstcallNone => "dstcall_none", "No destination field in packet";
    DstcallNoax25 => "dstcall_noax25", "Destination callsign is not a valid AX.25 call";
    DigicallNoax25 => "digicall_noax25", "Digipeater callsign is not a valid AX.25 call";
    DigicallBadchars => "digicall_badchars", "Digipeater callsign contains bad characters";
    TimestampInvLoc => "timestamp_inv_loc", "Invalid timestamp in location";
    TimestampInvObj => "timestamp_inv_obj", "Invalid timestamp in object";
    TimestampInvSta => "timestamp_inv_sta", "Invalid timestamp in status";
    TimestampInvGpgga => "timestamp_inv_gpgga", "Invalid timestamp in GPGGA sentence";
    TimestampInvGpgll => "timestamp_inv_gpgll", "Invalid timestamp in GPGLL sentence";
    PacketInvalid => "packet_invalid", "Invalid packet";
    NmeaInvCval => "nmea_inv_cval", "Invalid coordinate value in NMEA sentence";
    NmeaLargeEw => "nmea_large_ew", "Too large value in NMEA sentence (east/west)";
    NmeaLargeNs => "nmea_large_ns", "Too large value in NMEA sentence (north/south)";
    NmeaInvSign => "nmea_inv_sign", "Invalid lat/long sign in NMEA sentence";
    NmeaInvCksum => "nmea_inv_cksum", "Invalid checksum in NMEA sentence";
    GprmcFewfields => "gprmc_fewfields", "Less than ten fields in GPRMC sentence ";
    GprmcNofix => "gprmc_nofix", "No GPS fix in GPRMC sentence";
    GprmcInvTime => "gprmc_inv_time", "Invalid timestamp in GPRMC sentence";
    GprmcInvDate => "gprmc_inv_date", "Invalid date in GPRMC sentence";
    GprmcDateOut => "gprmc_date_out", "GPRMC date does not fit in an Unix timestamp";
    GpggaFewfields => "gpgga_fewfields", "Less than 11 fields in GPGGA sentence";
    GpggaNofix => "gpgga_nofix", "No GPS fix in GPGGA sentence";
    GpgllFewfields => "gpgll_fewfields", "Less than 5 fields in GPGLL sentence";
    GpgllNofix => "gpgll_nofix", "No GPS fix in GPGLL sentence";
    NmeaUnsupp => "nmea_unsupp", "Unsupported NMEA sentence type";
    ObjShort => "obj_short", "Too short object";
    ObjInv => "obj_inv", "Invalid object";
    ObjDecErr => "obj_dec_err", "Error in object location decoding";
    ItemShort => "item_short", "Too short item";
    ItemInv => "item_inv", "Invalid item";
    ItemDecErr => "item_dec_err", "Error in item location decoding";
    LocShort => "loc_short", "Too short uncompressed location";
    LocInv => "loc_inv", "Invalid uncompressed location";
    LocLarge => "loc_large", "Degree value too large";
    LocAmbInv => "loc_amb_inv", "Invalid position ambiguity";
    MiceShort => "mice_short", "Too short mic-e packet";
    MiceInv => "mice_inv", "Invalid characters in mic-e packet";
    MiceInvInfo => "mice_inv_info", "Invalid characters in mic-e information field";
    MiceAmbLarge => "mice_amb_large", "Too much position ambiguity in mic-e packet";
    MiceAmbInv => "mice_amb_inv", "Invalid position ambiguity in mic-e packet";
    MiceAmbOdd => "mice_amb_odd", "Odd position ambiguity in mic-e packet";
    CompInv => "comp_inv", "Invalid compressed packet";
    MsgInv => "msg_inv", "Invalid message packet";
    WxUnsupp => "wx_unsupp", "Unsupported weather format";
    UserUnsupp => "user_unsupp", "Unsupported user format";
    DxInvSrc => "dx_inv_src", "Invalid DX spot source callsign";
    DxInfFreq => "dx_inf_freq", "Invalid DX spot frequency";
    DxNoDx => "dx_no_dx", "No DX spot callsign found";
    TlmInv => "tlm_inv", "Invalid telemetry packet";
    TlmLarge => "tlm_large", "Too large telemetry value";
    TlmUnsupp => "tlm_unsupp", "Unsupported telemetry";
    ExpUnsupp => "exp_unsupp", "Unsupported experimental";
    SymInvTable => "sym_inv_table", "Invalid symbol table or overlay";
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Look up the description for a symbolic error code. Returns `None` for codes not in the
/// catalog.
#[must_use]
pub fn get_message(code: &str) -> Option<&'static str> {
    ErrorCode::from_str(code).ok().map(|c| c.description())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("packet_no", "No packet given to parse"; "packet_no")]
    #[test_case("srccall_noax25", "Source callsign is not a valid AX.25 call"; "srccall")]
    #[test_case("gprmc_fewfields", "Less than ten fields in GPRMC sentence "; "trailing space kept")]
    #[test_case("sym_inv_table", "Invalid symbol table or overlay"; "last entry")]
    fn lookup(code: &str, expected: &str) {
        assert_eq!(get_message(code), Some(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("LOC_SHORT"; "case sensitive")]
    #[test_case("not_a_code"; "unknown")]
    fn lookup_missing(code: &str) {
        assert_eq!(get_message(code), None);
    }

    #[test]
    fn names_roundtrip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate code {code}");
            assert_eq!(ErrorCode::from_str(code.as_str()).unwrap(), *code);
        }
        assert_eq!(ErrorCode::ALL.len(), 60);
    }
}
