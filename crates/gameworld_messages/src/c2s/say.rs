use bytes::BytesMut;

use crate::c2s::opcode::MAX_SAY_LEN;
use crate::wire_value::{Decode, DecodeError, DecodeResult, Encode, GameString};

/// `0x96` — a chat line. Depending on `kind`, it addresses either a
/// private-message receiver (by name) or a channel (by id); §4.3 requires
/// silently dropping messages whose text exceeds 255 bytes rather than
/// disconnecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SayTarget {
    Default,
    PrivateMessage { receiver: GameString },
    Channel { channel_id: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Say {
    pub kind: u8,
    pub target: SayTarget,
    pub text: GameString,
}

impl Encode for Say {
    fn encode(&self, buf: &mut BytesMut) {
        self.kind.encode(buf);
        match &self.target {
            SayTarget::Default => {}
            SayTarget::PrivateMessage { receiver } => receiver.encode(buf),
            SayTarget::Channel { channel_id } => channel_id.encode(buf),
        }
        self.text.encode(buf);
    }
}

impl<'a> Decode<'a> for Say {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let kind = u8::decode(r)?;

        // Private-message kinds carry a receiver name; channel kinds carry
        // a channel id. Any other kind addresses the speaker's own tile.
        let target = match kind {
            k if is_private_message_kind(k) => SayTarget::PrivateMessage {
                receiver: GameString::decode(r)?,
            },
            k if is_channel_kind(k) => SayTarget::Channel {
                channel_id: u16::decode(r)?,
            },
            _ => SayTarget::Default,
        };

        let text = GameString::decode(r)?;

        if text.0.len() > MAX_SAY_LEN {
            return Err(DecodeError::StringTooLong(text.0.len()));
        }

        Ok(Say { kind, target, text })
    }
}

fn is_private_message_kind(kind: u8) -> bool {
    kind == 0x04
}

fn is_channel_kind(kind: u8) -> bool {
    kind == 0x05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_default_say() {
        let msg = Say {
            kind: 0x01,
            target: SayTarget::Default,
            text: "hello".into(),
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(Say::decode(&mut slice).unwrap(), msg);
    }

    #[test]
    fn round_trip_private_message() {
        let msg = Say {
            kind: 0x04,
            target: SayTarget::PrivateMessage {
                receiver: "Bob".into(),
            },
            text: "hi there".into(),
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(Say::decode(&mut slice).unwrap(), msg);
    }

    #[test]
    fn rejects_overlong_text() {
        let mut buf = BytesMut::new();
        1u8.encode(&mut buf);
        let long_text = "x".repeat(MAX_SAY_LEN + 1);
        GameString(long_text).encode(&mut buf);

        let mut slice = &buf[..];
        assert!(matches!(
            Say::decode(&mut slice),
            Err(DecodeError::StringTooLong(_))
        ));
    }
}
