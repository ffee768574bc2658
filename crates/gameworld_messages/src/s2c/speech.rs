use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0xAA` — a chat line attributed to a speaker. Position is intentionally
/// absent: nearby-say speech bubbles ride on the regular tile diff stream
/// instead of duplicating coordinates here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    pub speaker: GameString,
    pub kind: u8,
    pub channel_id: u16,
    pub text: GameString,
}

impl Encode for Speech {
    fn encode(&self, buf: &mut BytesMut) {
        self.speaker.encode(buf);
        self.kind.encode(buf);
        self.channel_id.encode(buf);
        self.text.encode(buf);
    }
}

impl<'a> Decode<'a> for Speech {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Speech {
            speaker: GameString::decode(r)?,
            kind: u8::decode(r)?,
            channel_id: u16::decode(r)?,
            text: GameString::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_round_trip() {
        let msg = Speech {
            speaker: "Gamemaster".into(),
            kind: 0x04,
            channel_id: 0,
            text: "hello".into(),
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(Speech::decode(&mut slice).unwrap(), msg);
    }
}
