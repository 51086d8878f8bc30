//! Classification of information fields by their APRS data type identifier.
use std::fmt::Display;

use crate::catalog::ErrorCode;

/// The kind of an APRS information field.
///
/// Only [PacketKind::Position] is decoded by this crate. Every other kind is recognized so
/// callers can tell an unsupported format from a malformed position; see
/// [PacketKind::unsupported_code].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
#[non_exhaustive]
pub enum PacketKind {
    /// Uncompressed position report: `!`, `=`, `/` or `@`.
    Position {
        /// `/` and `@` carry a timestamp ahead of the position.
        timestamped: bool,
        /// `=` and `@` stations are APRS message capable.
        messaging: bool,
    },
    MicE,
    Nmea,
    Object,
    Item,
    Message,
    Status,
    Capabilities,
    Query,
    Telemetry,
    Weather,
    UserDefined,
    /// `{{` prefixed experimental formats.
    Experimental,
    ThirdParty,
    Unknown(char),
}

impl PacketKind {
    /// Classify an information field from its leading characters.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let Some(data_type) = text.chars().next() else {
            return PacketKind::Unknown('\0');
        };
        match data_type {
            '!' | '=' | '/' | '@' => PacketKind::Position {
                timestamped: matches!(data_type, '/' | '@'),
                messaging: matches!(data_type, '=' | '@'),
            },
            '`' | '\'' | '\x1c' | '\x1d' => PacketKind::MicE,
            '$' => PacketKind::Nmea,
            ';' => PacketKind::Object,
            ')' => PacketKind::Item,
            ':' => PacketKind::Message,
            '>' => PacketKind::Status,
            '<' => PacketKind::Capabilities,
            '?' => PacketKind::Query,
            'T' => PacketKind::Telemetry,
            '_' | '#' | '*' => PacketKind::Weather,
            '{' if text.starts_with("{{") => PacketKind::Experimental,
            '{' => PacketKind::UserDefined,
            '}' => PacketKind::ThirdParty,
            other => PacketKind::Unknown(other),
        }
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, PacketKind::Position { .. })
    }

    /// Catalog code describing why this kind is not decoded, `None` for supported kinds.
    #[must_use]
    pub fn unsupported_code(&self) -> Option<ErrorCode> {
        let code = match self {
            PacketKind::Position { .. } => return None,
            PacketKind::Nmea => ErrorCode::NmeaUnsupp,
            PacketKind::Weather => ErrorCode::WxUnsupp,
            PacketKind::UserDefined => ErrorCode::UserUnsupp,
            PacketKind::Experimental => ErrorCode::ExpUnsupp,
            PacketKind::Telemetry => ErrorCode::TlmUnsupp,
            _ => ErrorCode::Unknown,
        };
        Some(code)
    }
}

impl Display for PacketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PacketKind::Position {
                timestamped: false, ..
            } => "position",
            PacketKind::Position {
                timestamped: true, ..
            } => "timestamped position",
            PacketKind::MicE => "mic-e",
            PacketKind::Nmea => "nmea",
            PacketKind::Object => "object",
            PacketKind::Item => "item",
            PacketKind::Message => "message",
            PacketKind::Status => "status",
            PacketKind::Capabilities => "capabilities",
            PacketKind::Query => "query",
            PacketKind::Telemetry => "telemetry",
            PacketKind::Weather => "weather",
            PacketKind::UserDefined => "user-defined",
            PacketKind::Experimental => "experimental",
            PacketKind::ThirdParty => "third-party",
            PacketKind::Unknown(c) => return write!(f, "unknown ({c:?})"),
        };
        f.write_str(name)
    }
}
