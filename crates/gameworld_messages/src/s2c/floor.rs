use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode};

/// `0xBE` — the player stepped onto a staircase/ladder and moved up a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorChangeUp {
    pub new_floor: u8,
}

impl Encode for FloorChangeUp {
    fn encode(&self, buf: &mut BytesMut) {
        self.new_floor.encode(buf);
    }
}

impl<'a> Decode<'a> for FloorChangeUp {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(FloorChangeUp {
            new_floor: u8::decode(r)?,
        })
    }
}

/// `0xBF`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorChangeDown {
    pub new_floor: u8,
}

impl Encode for FloorChangeDown {
    fn encode(&self, buf: &mut BytesMut) {
        self.new_floor.encode(buf);
    }
}

impl<'a> Decode<'a> for FloorChangeDown {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(FloorChangeDown {
            new_floor: u8::decode(r)?,
        })
    }
}
