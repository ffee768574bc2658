use gameworld_messages::c2s::opcode;

use crate::state::{accepts_packets, SessionState};

/// Whether a player is bound, alive, and eligible for the full dispatch
/// table, or whether only the death/logout path is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerLiveness {
    Alive,
    /// No player bound, or the bound player is dead/removed.
    NoPlayer,
}

/// What the dispatch table decided to do with one inbound opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Parsed and posted to the world loop as a task.
    Enqueued,
    Disconnect,
    Ignored,
    /// Not in the core's table; forwarded to the scripting collaborator.
    RoutedToScript,
}

/// The `AccountManager` subtable: a strict subset of `Playing`'s opcodes.
/// The whole `0x64..=0x6D` movement block collapses to a single cancel-move
/// entry here (the wire layer decodes all of them as `Turn` in this state,
/// see `decode_c2s_for_account_manager`), and `TEXT_WINDOW`/`HOUSE_WINDOW`/
/// `LOOK_AT` are reachable because the virtual account-manager conversation
/// still drives its menus through those windows.
const ACCOUNT_MANAGER_OPCODES: &[u8] = &[
    opcode::LOGOUT,
    opcode::PING,
    opcode::EXTENDED_OPCODE,
    opcode::AUTOWALK,
    opcode::TURN_NORTH,
    opcode::TURN_EAST,
    opcode::TURN_SOUTH,
    opcode::TURN_WEST,
    opcode::MOVE_NORTHEAST,
    opcode::MOVE_SOUTHEAST,
    opcode::MOVE_SOUTHWEST,
    opcode::MOVE_NORTHWEST,
    opcode::MOVE_CANCEL,
    opcode::TEXT_WINDOW,
    opcode::HOUSE_WINDOW,
    opcode::LOOK_AT,
    opcode::SAY,
];

/// Opcodes the core recognizes and enqueues while `Playing`. Everything
/// else in that state routes to the scripting collaborator rather than
/// being dropped, per §7.
const PLAYING_OPCODES: &[u8] = &[
    opcode::LOGOUT,
    opcode::PING,
    opcode::EXTENDED_OPCODE,
    opcode::AUTOWALK,
    opcode::TURN_NORTH,
    opcode::TURN_EAST,
    opcode::TURN_SOUTH,
    opcode::TURN_WEST,
    opcode::MOVE_NORTHEAST,
    opcode::MOVE_SOUTHEAST,
    opcode::MOVE_SOUTHWEST,
    opcode::MOVE_NORTHWEST,
    opcode::MOVE_CANCEL,
    opcode::THROW,
    opcode::USE_ITEM,
    opcode::USE_ITEM_EX,
    opcode::USE_WITH_CREATURE,
    opcode::ROTATE_ITEM,
    opcode::SAY,
    opcode::FIGHT_MODES,
    opcode::VIP_ADD,
    opcode::VIP_REMOVE,
    opcode::VIP_EDIT,
    opcode::MODAL_ANSWER,
];

/// Classifies one inbound opcode for a session currently in `state`, given
/// whether its bound player (if any) is alive, and whether the client
/// negotiated the extended feature set at handshake.
///
/// `liveness` only constrains the `Playing` state — it models a bound
/// player going dead/removed mid-session, not the account-manager
/// conversation, which never has a real player bound and must still reach
/// its own subtable.
pub fn dispatch(
    state: SessionState,
    liveness: PlayerLiveness,
    extended_client: bool,
    op: u8,
) -> DispatchOutcome {
    if op == opcode::LOGOUT_ON_DEAD && liveness == PlayerLiveness::NoPlayer {
        return DispatchOutcome::Disconnect;
    }

    if !accepts_packets(state) {
        return DispatchOutcome::Ignored;
    }

    if op == opcode::MODAL_ANSWER && !extended_client {
        return DispatchOutcome::Ignored;
    }

    match state {
        SessionState::AccountManager => {
            if ACCOUNT_MANAGER_OPCODES.contains(&op) {
                DispatchOutcome::Enqueued
            } else {
                DispatchOutcome::Ignored
            }
        }
        SessionState::Playing => {
            if liveness == PlayerLiveness::NoPlayer {
                return match op {
                    opcode::LOGOUT | opcode::LOGOUT_ON_DEAD => DispatchOutcome::Enqueued,
                    _ => DispatchOutcome::Ignored,
                };
            }

            if PLAYING_OPCODES.contains(&op) {
                DispatchOutcome::Enqueued
            } else {
                DispatchOutcome::RoutedToScript
            }
        }
        _ => DispatchOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_on_dead_with_no_player_disconnects() {
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::NoPlayer, true, opcode::LOGOUT_ON_DEAD),
            DispatchOutcome::Disconnect
        );
    }

    #[test]
    fn non_accepting_state_ignores_everything() {
        assert_eq!(
            dispatch(SessionState::Loading, PlayerLiveness::Alive, true, opcode::SAY),
            DispatchOutcome::Ignored
        );
    }

    #[test]
    fn dead_player_only_accepts_logout() {
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::NoPlayer, true, opcode::LOGOUT),
            DispatchOutcome::Enqueued
        );
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::NoPlayer, true, opcode::SAY),
            DispatchOutcome::Ignored
        );
    }

    #[test]
    fn account_manager_subtable_is_a_strict_subset() {
        assert_eq!(
            dispatch(SessionState::AccountManager, PlayerLiveness::Alive, true, opcode::SAY),
            DispatchOutcome::Enqueued
        );
        assert_eq!(
            dispatch(SessionState::AccountManager, PlayerLiveness::Alive, true, opcode::FIGHT_MODES),
            DispatchOutcome::Ignored
        );
    }

    /// Account-manager sessions never bind a real player, so their
    /// liveness is always `NoPlayer` — the subtable must still be reachable
    /// rather than being starved by the `Playing`-only liveness gate.
    #[test]
    fn account_manager_subtable_is_reachable_with_no_player_bound() {
        assert_eq!(
            dispatch(SessionState::AccountManager, PlayerLiveness::NoPlayer, true, opcode::SAY),
            DispatchOutcome::Enqueued
        );
        assert_eq!(
            dispatch(SessionState::AccountManager, PlayerLiveness::NoPlayer, true, opcode::AUTOWALK),
            DispatchOutcome::Enqueued
        );
        assert_eq!(
            dispatch(SessionState::AccountManager, PlayerLiveness::NoPlayer, true, opcode::TEXT_WINDOW),
            DispatchOutcome::Enqueued
        );
    }

    #[test]
    fn playing_routes_unknown_opcodes_to_script() {
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::Alive, true, 0x99),
            DispatchOutcome::RoutedToScript
        );
    }

    #[test]
    fn playing_enqueues_known_opcodes() {
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::Alive, true, opcode::AUTOWALK),
            DispatchOutcome::Enqueued
        );
    }

    #[test]
    fn modal_answer_requires_extended_client() {
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::Alive, false, opcode::MODAL_ANSWER),
            DispatchOutcome::Ignored
        );
        assert_eq!(
            dispatch(SessionState::Playing, PlayerLiveness::Alive, true, opcode::MODAL_ANSWER),
            DispatchOutcome::Enqueued
        );
    }
}
