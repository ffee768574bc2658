use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, Position};

/// `0x8C` — a client asking for the description text of whatever is at
/// `position`, stack slot `stack_pos`. Two bytes between the position and
/// the stack slot are a client-side sprite id echo the session core never
/// needs to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAt {
    pub position: Position,
    pub stack_pos: u8,
}

impl Encode for LookAt {
    fn encode(&self, buf: &mut BytesMut) {
        self.position.encode(buf);
        0u16.encode(buf);
        self.stack_pos.encode(buf);
    }
}

impl<'a> Decode<'a> for LookAt {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let position = Position::decode(r)?;
        let _sprite_id = u16::decode(r)?;
        let stack_pos = u8::decode(r)?;
        Ok(LookAt { position, stack_pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let msg = LookAt { position: Position { x: 100, y: 100, z: 7 }, stack_pos: 1 };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(LookAt::decode(&mut slice).unwrap(), msg);
    }
}
