use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode};

/// `0xF9` — the button/choice a player picked in a modal window.
/// Extended-client-only; §4.3 requires dropping this from clients that
/// did not negotiate the extended feature at handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalAnswer {
    pub window_id: u32,
    pub button_id: u8,
    pub choice_id: u8,
}

impl Encode for ModalAnswer {
    fn encode(&self, buf: &mut BytesMut) {
        self.window_id.encode(buf);
        self.button_id.encode(buf);
        self.choice_id.encode(buf);
    }
}

impl<'a> Decode<'a> for ModalAnswer {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ModalAnswer {
            window_id: u32::decode(r)?,
            button_id: u8::decode(r)?,
            choice_id: u8::decode(r)?,
        })
    }
}
