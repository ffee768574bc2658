use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString, Outfit, Position};

/// `0x61` — the known-set was full; `evicted_id` left it to make room for
/// `new_id`. Mirrors the known-set eviction contract in the view layer:
/// the victim is chosen and removed before the new id is inserted, never
/// the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCreature {
    pub evicted_id: u32,
    pub new_id: u32,
}

impl Encode for KnownCreature {
    fn encode(&self, buf: &mut BytesMut) {
        self.evicted_id.encode(buf);
        self.new_id.encode(buf);
    }
}

impl<'a> Decode<'a> for KnownCreature {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(KnownCreature {
            evicted_id: u32::decode(r)?,
            new_id: u32::decode(r)?,
        })
    }
}

/// `0x62` — a creature the client has never seen before entered view; the
/// known set had room so no eviction happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCreature {
    pub id: u32,
    pub name: GameString,
    pub outfit: Outfit,
    pub position: Position,
}

impl Encode for NewCreature {
    fn encode(&self, buf: &mut BytesMut) {
        self.id.encode(buf);
        self.name.encode(buf);
        self.outfit.encode(buf);
        self.position.encode(buf);
    }
}

impl<'a> Decode<'a> for NewCreature {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(NewCreature {
            id: u32::decode(r)?,
            name: GameString::decode(r)?,
            outfit: Outfit::decode(r)?,
            position: Position::decode(r)?,
        })
    }
}

/// `0x8C`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatureHealth {
    pub creature_id: u32,
    pub health_percent: u8,
}

impl Encode for CreatureHealth {
    fn encode(&self, buf: &mut BytesMut) {
        self.creature_id.encode(buf);
        self.health_percent.encode(buf);
    }
}

impl<'a> Decode<'a> for CreatureHealth {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(CreatureHealth {
            creature_id: u32::decode(r)?,
            health_percent: u8::decode(r)?,
        })
    }
}

/// `0x8E`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatureOutfit {
    pub creature_id: u32,
    pub outfit: Outfit,
}

impl Encode for CreatureOutfit {
    fn encode(&self, buf: &mut BytesMut) {
        self.creature_id.encode(buf);
        self.outfit.encode(buf);
    }
}

impl<'a> Decode<'a> for CreatureOutfit {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(CreatureOutfit {
            creature_id: u32::decode(r)?,
            outfit: Outfit::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_creature_round_trip() {
        let msg = KnownCreature { evicted_id: 42, new_id: 99 };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(KnownCreature::decode(&mut slice).unwrap(), msg);
    }

    #[test]
    fn new_creature_round_trip() {
        let msg = NewCreature {
            id: 7,
            name: "Rat".into(),
            outfit: Outfit { look_type: 21, head: 0, body: 0, legs: 0, feet: 0, addons: 0 },
            position: Position { x: 5, y: 5, z: 7 },
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(NewCreature::decode(&mut slice).unwrap(), msg);
    }
}
