use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

/// `0x89` — the edited text from a writable-item text window the client
/// had open, identified by the server-issued `window_text_id` the original
/// handed out when the window was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWindow {
    pub window_text_id: u32,
    pub text: GameString,
}

impl Encode for TextWindow {
    fn encode(&self, buf: &mut BytesMut) {
        self.window_text_id.encode(buf);
        self.text.encode(buf);
    }
}

impl<'a> Decode<'a> for TextWindow {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(TextWindow {
            window_text_id: u32::decode(r)?,
            text: GameString::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let msg = TextWindow { window_text_id: 7, text: "a sign".into() };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(TextWindow::decode(&mut slice).unwrap(), msg);
    }
}
