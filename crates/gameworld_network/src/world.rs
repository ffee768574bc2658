use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use tokio::sync::{mpsc, Notify};

use gameworld_admission::{AdmissionOutcome, AdmissionRequest};
use gameworld_collab::{AccountId, CharacterId, PlayerRecord};
use gameworld_messages::c2s::C2sMessage;

/// One already-opcode-tagged outbound payload, handed from a world
/// broadcast (or a reply to the player's own action) to the connection
/// task that owns the socket.
pub type OutboundTx = mpsc::UnboundedSender<Bytes>;
pub type OutboundRx = mpsc::UnboundedReceiver<Bytes>;

/// Lets the world end a connection it no longer owns the socket for —
/// a replacement login kicking the session it's superseding. The
/// connection task awaits this alongside its normal read/outbound loop.
pub type ShutdownHandle = Arc<Notify>;

/// Where a newly admitted player's creature is placed: the saved login
/// position, or (if that tile is no longer valid) the town temple — the
/// fallback itself is the world's call, since map validity is out of
/// this crate's scope.
#[derive(Debug, Clone, Copy)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

/// The world's own lifecycle phase, independent of any one session's
/// state machine. A login arriving while the world is not `Normal` is
/// disconnected before admission is even attempted (§4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldPhase {
    Startup,
    Normal,
    Maintain,
    Shutdown,
}

impl WorldPhase {
    /// Whether a login attempt may proceed at all while the world is in
    /// this phase.
    pub fn accepts_logins(self) -> bool {
        matches!(self, WorldPhase::Normal)
    }
}

/// The subset of world-owned state the login/connect flow needs to read
/// or mutate. Implemented by whatever embeds this crate's accept loop;
/// every method here runs as a closure on the single dispatcher task, so
/// none of them may block on I/O.
pub trait GameWorld: Send + 'static {
    /// The world's current lifecycle phase, consulted right after a
    /// session enters `Authenticating` — logins are refused outright
    /// while the world isn't `Normal` (§4.3).
    fn world_phase(&self) -> WorldPhase;

    fn check_admission(&mut self, req: AdmissionRequest, now: Instant) -> AdmissionOutcome;

    fn is_character_online(&self, character_id: CharacterId) -> bool;

    /// Whether some character other than `excluding` belonging to
    /// `account_id` is already online, for enforcing the one-character-
    /// per-account ("clone") policy.
    fn other_character_online_for_account(&self, account_id: AccountId, excluding: CharacterId) -> bool;

    /// Disconnects the existing session bound to `character_id` and marks
    /// the player `isConnecting`, ahead of a reconnect task that rebinds
    /// it one second later.
    fn begin_replacement_login(&mut self, character_id: CharacterId);

    /// Finishes placing `record` into the world under `session_id`,
    /// registering `outbound` as the channel world broadcasts for this
    /// player are sent through, and returning the creature's spawn
    /// position.
    fn admit_player(
        &mut self,
        session_id: u64,
        account_id: AccountId,
        record: PlayerRecord,
        outbound: OutboundTx,
        shutdown: ShutdownHandle,
    ) -> PlacementPosition;

    /// Binds `session_id` (and its `outbound` channel) to the
    /// already-online player identified by `character_id`, completing a
    /// replacement login.
    fn rebind_replaced_session(
        &mut self,
        session_id: u64,
        character_id: CharacterId,
        outbound: OutboundTx,
        shutdown: ShutdownHandle,
    ) -> PlacementPosition;

    /// Admits a session into the `AccountManager` virtual conversation:
    /// no map placement, no viewport, just an outbound channel and the
    /// ability to be kicked. There is no backing character, only the
    /// account the login resolved to.
    fn admit_account_manager(
        &mut self,
        session_id: u64,
        account_id: AccountId,
        outbound: OutboundTx,
        shutdown: ShutdownHandle,
    );

    /// Routes one decoded inbound message for `session_id` to world logic.
    fn handle_message(&mut self, session_id: u64, msg: C2sMessage);

    /// An opcode the dispatch table didn't recognize for `Playing`
    /// (`DispatchOutcome::RoutedToScript`) — forwarded here instead of
    /// being parsed, since the core's own opcode table has nothing to
    /// decode it with.
    fn route_unhandled_opcode(&mut self, session_id: u64, opcode: u8);

    /// Releases all world-side state for a session that has disconnected.
    fn remove_session(&mut self, session_id: u64);
}
