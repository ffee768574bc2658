use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, Position};

/// `0x78` — move an item (a "throw") from one tile stack position to
/// another, or into/out of a container slot addressed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub from: Position,
    pub sprite_id: u16,
    pub from_stackpos: u8,
    pub to: Position,
    pub count: u8,
}

impl Encode for Throw {
    fn encode(&self, buf: &mut BytesMut) {
        self.from.encode(buf);
        self.sprite_id.encode(buf);
        self.from_stackpos.encode(buf);
        self.to.encode(buf);
        self.count.encode(buf);
    }
}

impl<'a> Decode<'a> for Throw {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Throw {
            from: Position::decode(r)?,
            sprite_id: u16::decode(r)?,
            from_stackpos: u8::decode(r)?,
            to: Position::decode(r)?,
            count: u8::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let msg = Throw {
            from: Position { x: 100, y: 100, z: 7 },
            sprite_id: 2160,
            from_stackpos: 1,
            to: Position { x: 101, y: 100, z: 7 },
            count: 1,
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(Throw::decode(&mut slice).unwrap(), msg);
    }
}
