use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, Light};

/// `0x82` — ambient world light level changed (day/night cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldLight {
    pub light: Light,
}

impl Encode for WorldLight {
    fn encode(&self, buf: &mut BytesMut) {
        self.light.encode(buf);
    }
}

impl<'a> Decode<'a> for WorldLight {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(WorldLight {
            light: Light::decode(r)?,
        })
    }
}
