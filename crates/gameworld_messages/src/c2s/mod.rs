//! Client-to-server opcode payloads.

pub mod autowalk;
pub mod extended_opcode;
pub mod fight_modes;
pub mod house_window;
pub mod look_at;
pub mod modal_answer;
pub mod opcode;
pub mod say;
pub mod text_window;
pub mod throw;
pub mod turn;
pub mod use_item;
pub mod vip;

pub use autowalk::Autowalk;
pub use extended_opcode::ExtendedOpcode;
pub use fight_modes::FightModes;
pub use house_window::HouseWindow;
pub use look_at::LookAt;
pub use modal_answer::ModalAnswer;
pub use say::{Say, SayTarget};
pub use text_window::TextWindow;
pub use throw::Throw;
pub use turn::Turn;
pub use use_item::{RotateItem, UseItem, UseItemEx, UseWithCreature};
pub use vip::{VipAdd, VipEdit, VipRemove};

use crate::wire_value::{Decode, DecodeError, DecodeResult};

/// A decoded client-to-server message, tagged by which opcode produced it.
/// The session state machine (`gameworld_session`) is responsible for
/// deciding, per its dispatch table, which opcodes are even attempted
/// here versus ignored/disconnected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum C2sMessage {
    LogoutOnDead,
    Logout,
    Ping,
    ExtendedOpcode(ExtendedOpcode),
    Autowalk(Autowalk),
    Turn(Turn),
    Throw(Throw),
    UseItem(UseItem),
    UseItemEx(UseItemEx),
    UseWithCreature(UseWithCreature),
    RotateItem(RotateItem),
    Say(Say),
    FightModes(FightModes),
    VipAdd(VipAdd),
    VipRemove(VipRemove),
    VipEdit(VipEdit),
    ModalAnswer(ModalAnswer),
    TextWindow(TextWindow),
    HouseWindow(HouseWindow),
    LookAt(LookAt),
}

/// Decodes a message body given the leading opcode byte the caller has
/// already stripped off the frame.
pub fn decode_c2s(op: u8, body: &mut &[u8]) -> DecodeResult<C2sMessage> {
    use opcode::*;

    Ok(match op {
        LOGOUT_ON_DEAD => C2sMessage::LogoutOnDead,
        LOGOUT => C2sMessage::Logout,
        PING => C2sMessage::Ping,
        EXTENDED_OPCODE => C2sMessage::ExtendedOpcode(ExtendedOpcode::decode(body)?),
        AUTOWALK => C2sMessage::Autowalk(Autowalk::decode(body)?),
        TURN_NORTH | TURN_EAST | TURN_SOUTH | TURN_WEST | MOVE_NORTHEAST | MOVE_SOUTHEAST
        | MOVE_SOUTHWEST | MOVE_NORTHWEST | MOVE_CANCEL => C2sMessage::Turn(Turn::decode(body)?),
        THROW => C2sMessage::Throw(Throw::decode(body)?),
        USE_ITEM => C2sMessage::UseItem(UseItem::decode(body)?),
        USE_ITEM_EX => C2sMessage::UseItemEx(UseItemEx::decode(body)?),
        USE_WITH_CREATURE => C2sMessage::UseWithCreature(UseWithCreature::decode(body)?),
        ROTATE_ITEM => C2sMessage::RotateItem(RotateItem::decode(body)?),
        SAY => C2sMessage::Say(Say::decode(body)?),
        FIGHT_MODES => C2sMessage::FightModes(FightModes::decode(body)?),
        VIP_ADD => C2sMessage::VipAdd(VipAdd::decode(body)?),
        VIP_REMOVE => C2sMessage::VipRemove(VipRemove::decode(body)?),
        VIP_EDIT => C2sMessage::VipEdit(VipEdit::decode(body)?),
        TEXT_WINDOW => C2sMessage::TextWindow(TextWindow::decode(body)?),
        HOUSE_WINDOW => C2sMessage::HouseWindow(HouseWindow::decode(body)?),
        LOOK_AT => C2sMessage::LookAt(LookAt::decode(body)?),
        MODAL_ANSWER => C2sMessage::ModalAnswer(ModalAnswer::decode(body)?),
        other => return Err(DecodeError::UnknownOpcode(other)),
    })
}

/// Decodes a message body the same way [`decode_c2s`] does, except for the
/// account-manager conversation's one quirk: the original treats the whole
/// `0x64..=0x6D` movement block — autowalk included — as a bare cancel-move
/// with no payload, rather than autowalk's normal direction-list body. Used
/// only while a session is in `AccountManager` state.
pub fn decode_c2s_for_account_manager(op: u8, body: &mut &[u8]) -> DecodeResult<C2sMessage> {
    use opcode::*;

    match op {
        AUTOWALK | TURN_NORTH | TURN_EAST | TURN_SOUTH | TURN_WEST | MOVE_NORTHEAST
        | MOVE_SOUTHEAST | MOVE_SOUTHWEST | MOVE_NORTHWEST | MOVE_CANCEL => {
            Ok(C2sMessage::Turn(Turn::decode(body)?))
        }
        _ => decode_c2s(op, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_no_payload_opcodes() {
        let mut empty: &[u8] = &[];
        assert_eq!(
            decode_c2s(opcode::LOGOUT, &mut empty).unwrap(),
            C2sMessage::Logout
        );
        assert_eq!(
            decode_c2s(opcode::PING, &mut empty).unwrap(),
            C2sMessage::Ping
        );
    }

    #[test]
    fn decodes_autowalk_opcode() {
        let body = [2u8, 1, 3];
        let mut slice = &body[..];
        let msg = decode_c2s(opcode::AUTOWALK, &mut slice).unwrap();
        assert_eq!(
            msg,
            C2sMessage::Autowalk(Autowalk {
                directions: vec![
                    crate::wire_value::Direction::East,
                    crate::wire_value::Direction::North
                ]
            })
        );
    }
}
