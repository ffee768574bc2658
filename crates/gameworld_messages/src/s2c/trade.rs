use bytes::BytesMut;

use crate::s2c::container::ContainerItem;
use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0x7A`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItem {
    pub item_id: u16,
    pub name: GameString,
    pub weight: u32,
    pub buy_price: u32,
    pub sell_price: u32,
}

impl Encode for ShopItem {
    fn encode(&self, buf: &mut BytesMut) {
        self.item_id.encode(buf);
        self.name.encode(buf);
        self.weight.encode(buf);
        self.buy_price.encode(buf);
        self.sell_price.encode(buf);
    }
}

impl<'a> Decode<'a> for ShopItem {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ShopItem {
            item_id: u16::decode(r)?,
            name: GameString::decode(r)?,
            weight: u32::decode(r)?,
            buy_price: u32::decode(r)?,
            sell_price: u32::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopOpen {
    pub items: Vec<ShopItem>,
}

impl Encode for ShopOpen {
    fn encode(&self, buf: &mut BytesMut) {
        (self.items.len() as u8).encode(buf);
        for item in &self.items {
            item.encode(buf);
        }
    }
}

impl<'a> Decode<'a> for ShopOpen {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let count = u8::decode(r)? as usize;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(ShopItem::decode(r)?);
        }
        Ok(ShopOpen { items })
    }
}

/// `0x7B`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopSale {
    pub item_id: u16,
    pub amount: u8,
}

impl Encode for ShopSale {
    fn encode(&self, buf: &mut BytesMut) {
        self.item_id.encode(buf);
        self.amount.encode(buf);
    }
}

impl<'a> Decode<'a> for ShopSale {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ShopSale {
            item_id: u16::decode(r)?,
            amount: u8::decode(r)?,
        })
    }
}

/// `0x7C`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopClose;

impl Encode for ShopClose {
    fn encode(&self, _buf: &mut BytesMut) {}
}

impl<'a> Decode<'a> for ShopClose {
    fn decode(_r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ShopClose)
    }
}

/// `0x7D`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    pub partner_name: GameString,
}

impl Encode for TradeRequest {
    fn encode(&self, buf: &mut BytesMut) {
        self.partner_name.encode(buf);
    }
}

impl<'a> Decode<'a> for TradeRequest {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TradeRequest {
            partner_name: GameString::decode(r)?,
        })
    }
}

/// `0x7E`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeLook {
    pub items: Vec<ContainerItem>,
}

impl Encode for TradeLook {
    fn encode(&self, buf: &mut BytesMut) {
        (self.items.len() as u8).encode(buf);
        for item in &self.items {
            item.encode(buf);
        }
    }
}

impl<'a> Decode<'a> for TradeLook {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let count = u8::decode(r)? as usize;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(ContainerItem::decode(r)?);
        }
        Ok(TradeLook { items })
    }
}

/// `0x7F`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeClose;

impl Encode for TradeClose {
    fn encode(&self, _buf: &mut BytesMut) {}
}

impl<'a> Decode<'a> for TradeClose {
    fn decode(_r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TradeClose)
    }
}
