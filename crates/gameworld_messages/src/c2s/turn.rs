use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode};

/// `0x65..0x6D` — a single cardinal/diagonal step, or the move-cancel
/// opcode. These carry no payload; the direction is implied by the
/// opcode byte itself (see `gameworld_messages::c2s::opcode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Turn;

impl Encode for Turn {
    fn encode(&self, _buf: &mut BytesMut) {}
}

impl<'a> Decode<'a> for Turn {
    fn decode(_r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Turn)
    }
}
