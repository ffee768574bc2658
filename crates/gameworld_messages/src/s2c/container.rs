use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerItem {
    pub item_id: u16,
    pub count: u8,
}

impl Encode for ContainerItem {
    fn encode(&self, buf: &mut BytesMut) {
        self.item_id.encode(buf);
        self.count.encode(buf);
    }
}

impl<'a> Decode<'a> for ContainerItem {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ContainerItem {
            item_id: u16::decode(r)?,
            count: u8::decode(r)?,
        })
    }
}

fn encode_items(items: &[ContainerItem], buf: &mut BytesMut) {
    (items.len() as u8).encode(buf);
    for item in items {
        item.encode(buf);
    }
}

fn decode_items(r: &mut &[u8]) -> DecodeResult<Vec<ContainerItem>> {
    let count = u8::decode(r)? as usize;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(ContainerItem::decode(r)?);
    }
    Ok(items)
}

/// `0x6E`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOpen {
    pub container_id: u8,
    pub item_id: u16,
    pub name: GameString,
    pub slots: u8,
    pub has_parent: bool,
    pub items: Vec<ContainerItem>,
}

impl Encode for ContainerOpen {
    fn encode(&self, buf: &mut BytesMut) {
        self.container_id.encode(buf);
        self.item_id.encode(buf);
        self.name.encode(buf);
        self.slots.encode(buf);
        self.has_parent.encode(buf);
        encode_items(&self.items, buf);
    }
}

impl<'a> Decode<'a> for ContainerOpen {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ContainerOpen {
            container_id: u8::decode(r)?,
            item_id: u16::decode(r)?,
            name: GameString::decode(r)?,
            slots: u8::decode(r)?,
            has_parent: bool::decode(r)?,
            items: decode_items(r)?,
        })
    }
}

/// `0x6F`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerClose {
    pub container_id: u8,
}

impl Encode for ContainerClose {
    fn encode(&self, buf: &mut BytesMut) {
        self.container_id.encode(buf);
    }
}

impl<'a> Decode<'a> for ContainerClose {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ContainerClose {
            container_id: u8::decode(r)?,
        })
    }
}

/// `0x70`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerAdd {
    pub container_id: u8,
    pub item: ContainerItem,
}

impl Encode for ContainerAdd {
    fn encode(&self, buf: &mut BytesMut) {
        self.container_id.encode(buf);
        self.item.encode(buf);
    }
}

impl<'a> Decode<'a> for ContainerAdd {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ContainerAdd {
            container_id: u8::decode(r)?,
            item: ContainerItem::decode(r)?,
        })
    }
}

/// `0x71`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerUpdate {
    pub container_id: u8,
    pub slot: u8,
    pub item: ContainerItem,
}

impl Encode for ContainerUpdate {
    fn encode(&self, buf: &mut BytesMut) {
        self.container_id.encode(buf);
        self.slot.encode(buf);
        self.item.encode(buf);
    }
}

impl<'a> Decode<'a> for ContainerUpdate {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ContainerUpdate {
            container_id: u8::decode(r)?,
            slot: u8::decode(r)?,
            item: ContainerItem::decode(r)?,
        })
    }
}

/// `0x72`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRemove {
    pub container_id: u8,
    pub slot: u8,
}

impl Encode for ContainerRemove {
    fn encode(&self, buf: &mut BytesMut) {
        self.container_id.encode(buf);
        self.slot.encode(buf);
    }
}

impl<'a> Decode<'a> for ContainerRemove {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ContainerRemove {
            container_id: u8::decode(r)?,
            slot: u8::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_open_round_trip() {
        let msg = ContainerOpen {
            container_id: 0,
            item_id: 1987,
            name: "Backpack".into(),
            slots: 20,
            has_parent: false,
            items: vec![ContainerItem { item_id: 2148, count: 1 }],
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(ContainerOpen::decode(&mut slice).unwrap(), msg);
        assert!(slice.is_empty());
    }
}
