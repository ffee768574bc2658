use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode};

/// `0xA0` — combat stance: attack mode, chase toggle, "secure mode" (don't
/// attack allies) toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FightModes {
    pub attack_mode: u8,
    pub chase: bool,
    pub secure: bool,
}

impl Encode for FightModes {
    fn encode(&self, buf: &mut BytesMut) {
        self.attack_mode.encode(buf);
        self.chase.encode(buf);
        self.secure.encode(buf);
    }
}

impl<'a> Decode<'a> for FightModes {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(FightModes {
            attack_mode: u8::decode(r)?,
            chase: bool::decode(r)?,
            secure: bool::decode(r)?,
        })
    }
}
