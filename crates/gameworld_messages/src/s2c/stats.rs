use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode};

/// `0xA0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub health: u32,
    pub max_health: u32,
    pub capacity: u32,
    pub experience: u64,
    pub level: u16,
    pub mana: u32,
    pub max_mana: u32,
    pub magic_level: u8,
    pub soul: u8,
    pub stamina_minutes: u16,
}

impl Encode for Stats {
    fn encode(&self, buf: &mut BytesMut) {
        self.health.encode(buf);
        self.max_health.encode(buf);
        self.capacity.encode(buf);
        self.experience.encode(buf);
        self.level.encode(buf);
        self.mana.encode(buf);
        self.max_mana.encode(buf);
        self.magic_level.encode(buf);
        self.soul.encode(buf);
        self.stamina_minutes.encode(buf);
    }
}

impl<'a> Decode<'a> for Stats {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Stats {
            health: u32::decode(r)?,
            max_health: u32::decode(r)?,
            capacity: u32::decode(r)?,
            experience: u64::decode(r)?,
            level: u16::decode(r)?,
            mana: u32::decode(r)?,
            max_mana: u32::decode(r)?,
            magic_level: u8::decode(r)?,
            soul: u8::decode(r)?,
            stamina_minutes: u16::decode(r)?,
        })
    }
}

/// One row of `0xA1`: skill level plus percent progress to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub level: u8,
    pub percent: u8,
}

impl Encode for SkillEntry {
    fn encode(&self, buf: &mut BytesMut) {
        self.level.encode(buf);
        self.percent.encode(buf);
    }
}

impl<'a> Decode<'a> for SkillEntry {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(SkillEntry {
            level: u8::decode(r)?,
            percent: u8::decode(r)?,
        })
    }
}

/// `0xA1` — fixed seven-skill layout (fist, club, sword, axe, distance,
/// shielding, fishing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skills {
    pub entries: [SkillEntry; 7],
}

impl Encode for Skills {
    fn encode(&self, buf: &mut BytesMut) {
        for entry in &self.entries {
            entry.encode(buf);
        }
    }
}

impl<'a> Decode<'a> for Skills {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let mut entries = [SkillEntry { level: 0, percent: 0 }; 7];
        for entry in &mut entries {
            *entry = SkillEntry::decode(r)?;
        }
        Ok(Skills { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_round_trip() {
        let msg = Skills {
            entries: [SkillEntry { level: 10, percent: 50 }; 7],
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(Skills::decode(&mut slice).unwrap(), msg);
    }
}
