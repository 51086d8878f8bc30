use crate::error::{Error, Result};
use crate::kind::PacketKind;

/// The information field of a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    /// Everything after the first `:` of the packet.
    pub text: String,
    /// APRS data type identifier, the first character of `text`.
    pub data_type: char,
}

impl Message {
    #[must_use]
    pub fn kind(&self) -> PacketKind {
        PacketKind::classify(&self.text)
    }
}

/// Split the information field off `packet`.
///
/// # Errors
/// [Error::NoPacket] for an empty packet, or [Error::NoBody] if there is no `:` or nothing
/// follows it.
pub fn extract_message(packet: &str) -> Result<Message> {
    if packet.is_empty() {
        return Err(Error::NoPacket);
    }
    let Some((_, text)) = packet.split_once(':') else {
        return Err(Error::NoBody);
    };
    let Some(data_type) = text.chars().next() else {
        return Err(Error::NoBody);
    };
    Ok(Message {
        text: text.to_string(),
        data_type,
    })
}
