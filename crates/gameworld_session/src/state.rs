/// The per-connection protocol state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Handshake,
    Authenticating,
    Queued,
    Loading,
    Playing,
    AccountManager,
    Disposed,
}

/// `acceptPackets` — gates every non-handshake opcode.
pub fn accepts_packets(state: SessionState) -> bool {
    matches!(state, SessionState::Playing | SessionState::AccountManager)
}

/// Whether `to` is a legal next state from `from`. Mirrors the transition
/// list in §4.3: handshake completion, authentication outcomes, admission
/// routing, loading outcomes, and the terminal disposal edge from every
/// non-terminal state.
pub fn can_transition(from: SessionState, to: SessionState) -> bool {
    use SessionState::*;

    if to == Disposed {
        return from != Disposed;
    }

    matches!(
        (from, to),
        (Handshake, Authenticating)
            | (Authenticating, Queued)
            | (Authenticating, Loading)
            | (Queued, Loading)
            | (Loading, Playing)
            | (Loading, AccountManager)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use SessionState::*;

    #[test]
    fn accept_packets_only_in_playing_or_account_manager() {
        assert!(accepts_packets(Playing));
        assert!(accepts_packets(AccountManager));
        assert!(!accepts_packets(Handshake));
        assert!(!accepts_packets(Authenticating));
        assert!(!accepts_packets(Queued));
        assert!(!accepts_packets(Loading));
        assert!(!accepts_packets(Disposed));
    }

    #[test]
    fn handshake_flows_forward() {
        assert!(can_transition(Handshake, Authenticating));
        assert!(can_transition(Authenticating, Queued));
        assert!(can_transition(Authenticating, Loading));
        assert!(can_transition(Queued, Loading));
        assert!(can_transition(Loading, Playing));
        assert!(can_transition(Loading, AccountManager));
    }

    #[test]
    fn every_non_terminal_state_can_dispose() {
        for state in [Handshake, Authenticating, Queued, Loading, Playing, AccountManager] {
            assert!(can_transition(state, Disposed));
        }
        assert!(!can_transition(Disposed, Disposed));
    }

    #[test]
    fn rejects_skipping_states() {
        assert!(!can_transition(Handshake, Playing));
        assert!(!can_transition(Queued, Playing));
        assert!(!can_transition(Playing, Loading));
    }
}
