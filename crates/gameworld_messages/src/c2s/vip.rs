use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0xD2` — add a character to the sender's VIP list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VipAdd {
    pub name: GameString,
}

impl Encode for VipAdd {
    fn encode(&self, buf: &mut BytesMut) {
        self.name.encode(buf);
    }
}

impl<'a> Decode<'a> for VipAdd {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(VipAdd {
            name: GameString::decode(r)?,
        })
    }
}

/// `0xD3` — remove a VIP list entry by guid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VipRemove {
    pub guid: u32,
}

impl Encode for VipRemove {
    fn encode(&self, buf: &mut BytesMut) {
        self.guid.encode(buf);
    }
}

impl<'a> Decode<'a> for VipRemove {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(VipRemove {
            guid: u32::decode(r)?,
        })
    }
}

/// `0xD4` — edit the notify-on-login flag for a VIP list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VipEdit {
    pub guid: u32,
    pub notify: bool,
}

impl Encode for VipEdit {
    fn encode(&self, buf: &mut BytesMut) {
        self.guid.encode(buf);
        self.notify.encode(buf);
    }
}

impl<'a> Decode<'a> for VipEdit {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(VipEdit {
            guid: u32::decode(r)?,
            notify: bool::decode(r)?,
        })
    }
}
