use crate::catalog::ErrorCode;

/// Reasons a packet, or one of its fields, could not be decoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("No packet given to parse")]
    NoPacket,
    #[error("No information field in packet")]
    NoBody,

    #[error("Source callsign contains bad characters: {0:?}")]
    CallsignBadChars(String),
    #[error("Source callsign is not a valid AX.25 call: {0:?}")]
    CallsignNotAx25(String),

    /// Only `@` reports carry a decodable timestamp.
    #[error("Data type {0:?} does not carry a timestamp")]
    NotTimestamped(char),
    #[error("Unsupported timestamp format")]
    UnsupportedTimestamp,
    #[error("Invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("No symbol table separator in location")]
    NoSymbolTable,
    #[error("Too short uncompressed location")]
    LocationTooShort {
        /// Number of characters we got
        actual: usize,
        /// Minimum number of expected characters
        minimum: usize,
    },
    #[error("Invalid uncompressed location {0:?}")]
    InvalidLocation(String),
    #[error("Invalid hemisphere {0:?}")]
    InvalidHemisphere(char),
    #[error("Degree value too large: {0:?}")]
    DegreesTooLarge(String),
    /// A digit follows a blanked (space) digit in the minutes.
    #[error("Invalid position ambiguity in {0:?}")]
    InvalidAmbiguity(String),

    #[error("No altitude marker")]
    NoAltitude,
    #[error("Altitude marker at start of information field")]
    AltitudeAtStart,
    #[error("Invalid altitude {0:?}")]
    InvalidAltitude(String),

    #[error("Unknown error code {0:?}")]
    UnknownCode(String),
}

impl Error {
    /// The catalog entry describing this error, if there is one. Errors that only signal the
    /// absence of optional data, such as a missing altitude marker, have none.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        let code = match self {
            Error::NoPacket => ErrorCode::PacketNo,
            Error::NoBody => ErrorCode::PacketNobody,
            Error::CallsignBadChars(_) => ErrorCode::SrccallBadchars,
            Error::CallsignNotAx25(_) => ErrorCode::SrccallNoax25,
            Error::InvalidTimestamp(_) => ErrorCode::TimestampInvLoc,
            Error::LocationTooShort { .. } => ErrorCode::LocShort,
            Error::NoSymbolTable | Error::InvalidLocation(_) | Error::InvalidHemisphere(_) => {
                ErrorCode::LocInv
            }
            Error::DegreesTooLarge(_) => ErrorCode::LocLarge,
            Error::InvalidAmbiguity(_) => ErrorCode::LocAmbInv,
            Error::NotTimestamped(_)
            | Error::UnsupportedTimestamp
            | Error::NoAltitude
            | Error::AltitudeAtStart
            | Error::InvalidAltitude(_)
            | Error::UnknownCode(_) => return None,
        };
        Some(code)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
