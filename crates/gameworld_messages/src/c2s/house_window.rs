use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0x8A` — the edited text from a house door's description window,
/// identified by door id plus the house's `house_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseWindow {
    pub door_id: u8,
    pub house_id: u32,
    pub text: GameString,
}

impl Encode for HouseWindow {
    fn encode(&self, buf: &mut BytesMut) {
        self.door_id.encode(buf);
        self.house_id.encode(buf);
        self.text.encode(buf);
    }
}

impl<'a> Decode<'a> for HouseWindow {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(HouseWindow {
            door_id: u8::decode(r)?,
            house_id: u32::decode(r)?,
            text: GameString::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let msg = HouseWindow { door_id: 2, house_id: 55, text: "welcome".into() };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(HouseWindow::decode(&mut slice).unwrap(), msg);
    }
}
