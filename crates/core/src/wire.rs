//! Message form of a hex, for passing coordinates across service boundaries.
//! A message carries the two independent components as plain integer fields.
//! Message fields are typically optional on the wire, so an absent message is
//! treated as the origin.

use crate::Hex;
use serde::{Deserialize, Serialize};

/// A hex as a flat message with `q` and `r` fields
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct HexMessage {
    pub q: i32,
    pub r: i32,
}

impl HexMessage {
    /// Convert a possibly-absent message into a hex. A missing message maps
    /// to [Hex::ZERO].
    pub fn to_hex(message: Option<&Self>) -> Hex {
        message.map_or(Hex::ZERO, |message| Hex::new(message.q, message.r))
    }
}

impl From<Hex> for HexMessage {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q(),
            r: hex.r(),
        }
    }
}

impl From<HexMessage> for Hex {
    fn from(message: HexMessage) -> Self {
        HexMessage::to_hex(Some(&message))
    }
}

impl From<Option<HexMessage>> for Hex {
    fn from(message: Option<HexMessage>) -> Self {
        HexMessage::to_hex(message.as_ref())
    }
}
