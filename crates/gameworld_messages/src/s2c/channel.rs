use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub id: u16,
    pub name: GameString,
}

impl Encode for ChannelEntry {
    fn encode(&self, buf: &mut BytesMut) {
        self.id.encode(buf);
        self.name.encode(buf);
    }
}

impl<'a> Decode<'a> for ChannelEntry {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ChannelEntry {
            id: u16::decode(r)?,
            name: GameString::decode(r)?,
        })
    }
}

/// `0xAB` — the list of channels available to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelList {
    pub channels: Vec<ChannelEntry>,
}

impl Encode for ChannelList {
    fn encode(&self, buf: &mut BytesMut) {
        (self.channels.len() as u8).encode(buf);
        for entry in &self.channels {
            entry.encode(buf);
        }
    }
}

impl<'a> Decode<'a> for ChannelList {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let count = u8::decode(r)? as usize;
        let mut channels = Vec::with_capacity(count);
        for _ in 0..count {
            channels.push(ChannelEntry::decode(r)?);
        }
        Ok(ChannelList { channels })
    }
}

/// `0xAC`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOpen {
    pub id: u16,
    pub name: GameString,
}

impl Encode for ChannelOpen {
    fn encode(&self, buf: &mut BytesMut) {
        self.id.encode(buf);
        self.name.encode(buf);
    }
}

impl<'a> Decode<'a> for ChannelOpen {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ChannelOpen {
            id: u16::decode(r)?,
            name: GameString::decode(r)?,
        })
    }
}

/// `0xAD`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelClosePrivate {
    pub id: u16,
}

impl Encode for ChannelClosePrivate {
    fn encode(&self, buf: &mut BytesMut) {
        self.id.encode(buf);
    }
}

impl<'a> Decode<'a> for ChannelClosePrivate {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ChannelClosePrivate {
            id: u16::decode(r)?,
        })
    }
}

/// `0xB2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOpenPrivate {
    pub name: GameString,
}

impl Encode for ChannelOpenPrivate {
    fn encode(&self, buf: &mut BytesMut) {
        self.name.encode(buf);
    }
}

impl<'a> Decode<'a> for ChannelOpenPrivate {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ChannelOpenPrivate {
            name: GameString::decode(r)?,
        })
    }
}

/// `0xB3` — the sender was warned for a rule violation in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRuleViolation {
    pub channel_name: GameString,
}

impl Encode for ChannelRuleViolation {
    fn encode(&self, buf: &mut BytesMut) {
        self.channel_name.encode(buf);
    }
}

impl<'a> Decode<'a> for ChannelRuleViolation {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ChannelRuleViolation {
            channel_name: GameString::decode(r)?,
        })
    }
}
