use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0xD2` — acknowledges an added VIP list entry with its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VipEntryAdd {
    pub guid: u32,
    pub name: GameString,
    pub online: bool,
}

impl Encode for VipEntryAdd {
    fn encode(&self, buf: &mut BytesMut) {
        self.guid.encode(buf);
        self.name.encode(buf);
        self.online.encode(buf);
    }
}

impl<'a> Decode<'a> for VipEntryAdd {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(VipEntryAdd {
            guid: u32::decode(r)?,
            name: GameString::decode(r)?,
            online: bool::decode(r)?,
        })
    }
}

/// `0xD3` — a VIP logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VipOnline {
    pub guid: u32,
}

impl Encode for VipOnline {
    fn encode(&self, buf: &mut BytesMut) {
        self.guid.encode(buf);
    }
}

impl<'a> Decode<'a> for VipOnline {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(VipOnline { guid: u32::decode(r)? })
    }
}

/// `0xD4` — a VIP logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VipOffline {
    pub guid: u32,
}

impl Encode for VipOffline {
    fn encode(&self, buf: &mut BytesMut) {
        self.guid.encode(buf);
    }
}

impl<'a> Decode<'a> for VipOffline {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(VipOffline { guid: u32::decode(r)? })
    }
}
