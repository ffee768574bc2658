use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0x0A` — sent once immediately after a session reaches `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfIntroduction {
    pub player_id: u32,
    pub beat_ms: u16,
    pub can_report_bugs: bool,
}

impl Encode for SelfIntroduction {
    fn encode(&self, buf: &mut BytesMut) {
        self.player_id.encode(buf);
        self.beat_ms.encode(buf);
        self.can_report_bugs.encode(buf);
    }
}

impl<'a> Decode<'a> for SelfIntroduction {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(SelfIntroduction {
            player_id: u32::decode(r)?,
            beat_ms: u16::decode(r)?,
            can_report_bugs: bool::decode(r)?,
        })
    }
}

/// `0x14` — closes the connection after delivery. Used for both handshake
/// rejections and mid-session policy denials (§7 tier 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDisconnect {
    pub reason: GameString,
}

impl Encode for TextDisconnect {
    fn encode(&self, buf: &mut BytesMut) {
        self.reason.encode(buf);
    }
}

impl<'a> Decode<'a> for TextDisconnect {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TextDisconnect {
            reason: GameString::decode(r)?,
        })
    }
}

/// `0x15` — non-fatal informational popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub message: GameString,
}

impl Encode for Popup {
    fn encode(&self, buf: &mut BytesMut) {
        self.message.encode(buf);
    }
}

impl<'a> Decode<'a> for Popup {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(Popup {
            message: GameString::decode(r)?,
        })
    }
}

/// `0x16` — admission queue status; connection closes right after, the
/// client is expected to retry after `retry_seconds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStatus {
    pub message: GameString,
    pub position: u16,
    pub retry_seconds: u8,
}

impl Encode for QueueStatus {
    fn encode(&self, buf: &mut BytesMut) {
        self.message.encode(buf);
        self.position.encode(buf);
        self.retry_seconds.encode(buf);
    }
}

impl<'a> Decode<'a> for QueueStatus {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(QueueStatus {
            message: GameString::decode(r)?,
            position: u16::decode(r)?,
            retry_seconds: u8::decode(r)?,
        })
    }
}

/// `0x28` — prompts the account-manager character flow to re-authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloginPrompt;

impl Encode for ReloginPrompt {
    fn encode(&self, _buf: &mut BytesMut) {}
}

impl<'a> Decode<'a> for ReloginPrompt {
    fn decode(_r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ReloginPrompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_status_round_trip() {
        let msg = QueueStatus {
            message: "You are place 1 on the waiting list.".into(),
            position: 1,
            retry_seconds: 20,
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(QueueStatus::decode(&mut slice).unwrap(), msg);
    }
}
