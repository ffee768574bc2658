use std::time::Instant;

use crate::dispatch::PlayerLiveness;
use crate::state::{accepts_packets, can_transition, SessionState};

/// Per-connection record. The socket, cipher state, and known-entity set
/// live in `gameworld_wire`/`gameworld_view`; this only tracks what the
/// state machine itself needs to decide transitions and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: u64,
    pub state: SessionState,
    pub liveness: PlayerLiveness,
    pub extended_client: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalTransition {
    pub from: SessionState,
    pub to: SessionState,
}

impl Session {
    pub fn new(id: u64, extended_client: bool) -> Self {
        Session {
            id,
            state: SessionState::Handshake,
            liveness: PlayerLiveness::NoPlayer,
            extended_client,
        }
    }

    pub fn accepts_packets(&self) -> bool {
        accepts_packets(self.state)
    }

    /// Moves to `to` if the edge is legal, else leaves the state untouched
    /// and reports the rejected edge.
    pub fn transition(&mut self, to: SessionState) -> Result<(), IllegalTransition> {
        if can_transition(self.state, to) {
            self.state = to;
            Ok(())
        } else {
            Err(IllegalTransition { from: self.state, to })
        }
    }
}

/// Tracks the wall-clock moment a session last produced any inbound
/// traffic, for the world loop's idle-kick sweep.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub last_seen: Instant,
}

impl Activity {
    pub fn new(now: Instant) -> Self {
        Activity { last_seen: now }
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_seen = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_handshake() {
        let s = Session::new(1, false);
        assert_eq!(s.state, SessionState::Handshake);
        assert!(!s.accepts_packets());
    }

    #[test]
    fn legal_transition_updates_state() {
        let mut s = Session::new(1, false);
        assert!(s.transition(SessionState::Authenticating).is_ok());
        assert_eq!(s.state, SessionState::Authenticating);
    }

    #[test]
    fn illegal_transition_is_rejected_and_state_unchanged() {
        let mut s = Session::new(1, false);
        let err = s.transition(SessionState::Playing).unwrap_err();
        assert_eq!(err.from, SessionState::Handshake);
        assert_eq!(err.to, SessionState::Playing);
        assert_eq!(s.state, SessionState::Handshake);
    }
}
