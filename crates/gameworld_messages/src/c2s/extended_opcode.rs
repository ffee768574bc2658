use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0x32` — an addon-defined sub-opcode with a string payload. The session
/// core forwards these to the `ScriptHost` collaborator unmodified; only
/// clients that negotiated the extended feature at handshake are allowed
/// to send them (§4.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedOpcode {
    pub sub_opcode: u8,
    pub data: GameString,
}

impl Encode for ExtendedOpcode {
    fn encode(&self, buf: &mut BytesMut) {
        self.sub_opcode.encode(buf);
        self.data.encode(buf);
    }
}

impl<'a> Decode<'a> for ExtendedOpcode {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ExtendedOpcode {
            sub_opcode: u8::decode(r)?,
            data: GameString::decode(r)?,
        })
    }
}
