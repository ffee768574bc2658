use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Direction, Encode};

/// `0xB5` — sent in place of a move/turn effect when the opcode handling
/// fails at runtime (§7 tier 3); the client snaps the player back to
/// `facing` instead of showing the attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementCancel {
    pub facing: Direction,
}

impl Encode for MovementCancel {
    fn encode(&self, buf: &mut BytesMut) {
        self.facing.encode(buf);
    }
}

impl<'a> Decode<'a> for MovementCancel {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(MovementCancel {
            facing: Direction::decode(r)?,
        })
    }
}
