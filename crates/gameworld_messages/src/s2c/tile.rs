use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, Position};

/// `0x6A` — a thing appeared at a stack position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAdd {
    pub pos: Position,
    pub stackpos: u8,
    pub thing_id: u16,
}

impl Encode for TileAdd {
    fn encode(&self, buf: &mut BytesMut) {
        self.pos.encode(buf);
        self.stackpos.encode(buf);
        self.thing_id.encode(buf);
    }
}

impl<'a> Decode<'a> for TileAdd {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TileAdd {
            pos: Position::decode(r)?,
            stackpos: u8::decode(r)?,
            thing_id: u16::decode(r)?,
        })
    }
}

/// `0x6B` — the thing at a stack position changed identity in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileUpdate {
    pub pos: Position,
    pub stackpos: u8,
    pub thing_id: u16,
}

impl Encode for TileUpdate {
    fn encode(&self, buf: &mut BytesMut) {
        self.pos.encode(buf);
        self.stackpos.encode(buf);
        self.thing_id.encode(buf);
    }
}

impl<'a> Decode<'a> for TileUpdate {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TileUpdate {
            pos: Position::decode(r)?,
            stackpos: u8::decode(r)?,
            thing_id: u16::decode(r)?,
        })
    }
}

/// `0x6C` — a thing was removed from a stack position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRemove {
    pub pos: Position,
    pub stackpos: u8,
}

impl Encode for TileRemove {
    fn encode(&self, buf: &mut BytesMut) {
        self.pos.encode(buf);
        self.stackpos.encode(buf);
    }
}

impl<'a> Decode<'a> for TileRemove {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TileRemove {
            pos: Position::decode(r)?,
            stackpos: u8::decode(r)?,
        })
    }
}

/// `0x6D` — a creature walked from one tile to an adjacent one; cheaper
/// than an add+remove pair for the common case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMove {
    pub from: Position,
    pub from_stackpos: u8,
    pub to: Position,
}

impl Encode for TileMove {
    fn encode(&self, buf: &mut BytesMut) {
        self.from.encode(buf);
        self.from_stackpos.encode(buf);
        self.to.encode(buf);
    }
}

impl<'a> Decode<'a> for TileMove {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TileMove {
            from: Position::decode(r)?,
            from_stackpos: u8::decode(r)?,
            to: Position::decode(r)?,
        })
    }
}
