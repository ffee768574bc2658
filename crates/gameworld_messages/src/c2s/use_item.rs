use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, Position};

/// `0x82` — use an item in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseItem {
    pub pos: Position,
    pub sprite_id: u16,
    pub stackpos: u8,
    pub index: u8,
}

impl Encode for UseItem {
    fn encode(&self, buf: &mut BytesMut) {
        self.pos.encode(buf);
        self.sprite_id.encode(buf);
        self.stackpos.encode(buf);
        self.index.encode(buf);
    }
}

impl<'a> Decode<'a> for UseItem {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(UseItem {
            pos: Position::decode(r)?,
            sprite_id: u16::decode(r)?,
            stackpos: u8::decode(r)?,
            index: u8::decode(r)?,
        })
    }
}

/// `0x83` — use an item on a target tile ("use with").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseItemEx {
    pub from: Position,
    pub from_sprite_id: u16,
    pub from_stackpos: u8,
    pub to: Position,
    pub to_sprite_id: u16,
    pub to_stackpos: u8,
}

impl Encode for UseItemEx {
    fn encode(&self, buf: &mut BytesMut) {
        self.from.encode(buf);
        self.from_sprite_id.encode(buf);
        self.from_stackpos.encode(buf);
        self.to.encode(buf);
        self.to_sprite_id.encode(buf);
        self.to_stackpos.encode(buf);
    }
}

impl<'a> Decode<'a> for UseItemEx {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(UseItemEx {
            from: Position::decode(r)?,
            from_sprite_id: u16::decode(r)?,
            from_stackpos: u8::decode(r)?,
            to: Position::decode(r)?,
            to_sprite_id: u16::decode(r)?,
            to_stackpos: u8::decode(r)?,
        })
    }
}

/// `0x84` — use an item targeting a creature by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseWithCreature {
    pub from: Position,
    pub sprite_id: u16,
    pub from_stackpos: u8,
    pub creature_id: u32,
}

impl Encode for UseWithCreature {
    fn encode(&self, buf: &mut BytesMut) {
        self.from.encode(buf);
        self.sprite_id.encode(buf);
        self.from_stackpos.encode(buf);
        self.creature_id.encode(buf);
    }
}

impl<'a> Decode<'a> for UseWithCreature {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(UseWithCreature {
            from: Position::decode(r)?,
            sprite_id: u16::decode(r)?,
            from_stackpos: u8::decode(r)?,
            creature_id: u32::decode(r)?,
        })
    }
}

/// `0x85` — rotate an item in place (e.g. a lever or directional sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateItem {
    pub pos: Position,
    pub sprite_id: u16,
    pub stackpos: u8,
}

impl Encode for RotateItem {
    fn encode(&self, buf: &mut BytesMut) {
        self.pos.encode(buf);
        self.sprite_id.encode(buf);
        self.stackpos.encode(buf);
    }
}

impl<'a> Decode<'a> for RotateItem {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(RotateItem {
            pos: Position::decode(r)?,
            sprite_id: u16::decode(r)?,
            stackpos: u8::decode(r)?,
        })
    }
}
