use bytes::BytesMut;

use crate::wire_value::{Decode, DecodeResult, Encode, GameString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalButton {
    pub id: u8,
    pub text: GameString,
}

impl Encode for ModalButton {
    fn encode(&self, buf: &mut BytesMut) {
        self.id.encode(buf);
        self.text.encode(buf);
    }
}

impl<'a> Decode<'a> for ModalButton {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ModalButton {
            id: u8::decode(r)?,
            text: GameString::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalChoice {
    pub id: u8,
    pub text: GameString,
}

impl Encode for ModalChoice {
    fn encode(&self, buf: &mut BytesMut) {
        self.id.encode(buf);
        self.text.encode(buf);
    }
}

impl<'a> Decode<'a> for ModalChoice {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        Ok(ModalChoice {
            id: u8::decode(r)?,
            text: GameString::decode(r)?,
        })
    }
}

/// `0xFA` — extended-client-only modal window, answered by
/// `c2s::ModalAnswer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalWindow {
    pub window_id: u32,
    pub title: GameString,
    pub message: GameString,
    pub buttons: Vec<ModalButton>,
    pub choices: Vec<ModalChoice>,
    pub default_enter_button: u8,
    pub default_escape_button: u8,
}

impl Encode for ModalWindow {
    fn encode(&self, buf: &mut BytesMut) {
        self.window_id.encode(buf);
        self.title.encode(buf);
        self.message.encode(buf);
        (self.buttons.len() as u8).encode(buf);
        for button in &self.buttons {
            button.encode(buf);
        }
        (self.choices.len() as u8).encode(buf);
        for choice in &self.choices {
            choice.encode(buf);
        }
        self.default_enter_button.encode(buf);
        self.default_escape_button.encode(buf);
    }
}

impl<'a> Decode<'a> for ModalWindow {
    fn decode(r: &mut &'a [u8]) -> DecodeResult<Self> {
        let window_id = u32::decode(r)?;
        let title = GameString::decode(r)?;
        let message = GameString::decode(r)?;
        let button_count = u8::decode(r)? as usize;
        let mut buttons = Vec::with_capacity(button_count);
        for _ in 0..button_count {
            buttons.push(ModalButton::decode(r)?);
        }
        let choice_count = u8::decode(r)? as usize;
        let mut choices = Vec::with_capacity(choice_count);
        for _ in 0..choice_count {
            choices.push(ModalChoice::decode(r)?);
        }
        Ok(ModalWindow {
            window_id,
            title,
            message,
            buttons,
            choices,
            default_enter_button: u8::decode(r)?,
            default_escape_button: u8::decode(r)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_window_round_trip() {
        let msg = ModalWindow {
            window_id: 1,
            title: "Quest".into(),
            message: "Accept?".into(),
            buttons: vec![
                ModalButton { id: 1, text: "Yes".into() },
                ModalButton { id: 2, text: "No".into() },
            ],
            choices: vec![],
            default_enter_button: 1,
            default_escape_button: 2,
        };
        let mut buf = BytesMut::new();
        msg.encode(&mut buf);
        let mut slice = &buf[..];
        assert_eq!(ModalWindow::decode(&mut slice).unwrap(), msg);
        assert!(slice.is_empty());
    }
}
