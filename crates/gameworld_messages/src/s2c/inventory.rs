use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode};

/// `0x78` — sets (or replaces) the item occupying an equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySet {
    pub slot: u8,
    pub item_id: u16,
    pub count: u8,
}

impl Encode for InventorySet {
    fn encode(&self, buf: &mut BytesMut) {
        self.slot.encode(buf);
        self.item_id.encode(buf);
        self.count.encode(buf);
    }
}

impl<'a> Decode<'a> for InventorySet {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(InventorySet {
            slot: u8::decode(r)?,
            item_id: u16::decode(r)?,
            count: u8::decode(r)?,
        })
    }
}

/// `0x79` — an equipment slot became empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryClear {
    pub slot: u8,
}

impl Encode for InventoryClear {
    fn encode(&self, buf: &mut BytesMut) {
        self.slot.encode(buf);
    }
}

impl<'a> Decode<'a> for InventoryClear {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(InventoryClear {
            slot: u8::decode(r)?,
        })
    }
}
