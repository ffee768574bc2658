//! The concrete world state the dispatcher owns: the admission queue,
//! the online-player index, and enough per-player bookkeeping (outbound
//! channel, known-creature cache, viewport) to place a player and route
//! `say` to nearby spectators. Map/item/combat state is out of scope —
//! see the session core's Non-goals — so this is intentionally thin.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use bytes::BytesMut;
use tracing::{debug, info};

use gameworld_admission::{AdmissionOutcome, AdmissionQueue, AdmissionRequest};
use gameworld_collab::{AccountId, CharacterId, PlayerRecord, ScriptHost, ScriptOutcome};
use gameworld_messages::c2s::C2sMessage;
use gameworld_messages::s2c::{opcode as s2c_opcode, Speech};
use gameworld_messages::Encode;
use gameworld_network::{GameWorld, OutboundTx, PlacementPosition, ShutdownHandle, WorldPhase};
use gameworld_view::{KnownCreatureSet, Viewport};

struct OnlinePlayer {
    session_id: u64,
    account_id: AccountId,
    name: String,
    outbound: OutboundTx,
    shutdown: ShutdownHandle,
    known: KnownCreatureSet,
    viewport: Viewport,
}

/// The account-manager's virtual, unplaced conversation: an outbound
/// channel and a kick handle, nothing map-related.
struct AccountManagerSession {
    account_id: AccountId,
    outbound: OutboundTx,
    shutdown: ShutdownHandle,
}

/// Owns everything the dispatcher is allowed to touch. Constructed once
/// per server and handed to [`gameworld_dispatch::spawn`].
pub struct World<S: ScriptHost = ()> {
    admission: AdmissionQueue,
    online: HashMap<CharacterId, OnlinePlayer>,
    session_to_character: HashMap<u64, CharacterId>,
    account_managers: HashMap<u64, AccountManagerSession>,
    max_players: u32,
    script: Arc<S>,
    /// A real deployment drives this from an admin command or shutdown
    /// sequence; this reference world never leaves `Normal`.
    phase: WorldPhase,
}

impl<S: ScriptHost> World<S> {
    pub fn new(max_players: u32, script: Arc<S>) -> Self {
        World {
            admission: AdmissionQueue::new(),
            online: HashMap::new(),
            session_to_character: HashMap::new(),
            account_managers: HashMap::new(),
            max_players,
            script,
            phase: WorldPhase::Normal,
        }
    }

    pub fn online_count(&self) -> u32 {
        self.online.len() as u32
    }

    /// Sends `text` as nearby speech to every online player whose
    /// viewport can currently see `speaker`'s position — the C4 diff
    /// encoder's spectator-fan-out contract, applied to chat instead of
    /// a tile change.
    fn broadcast_say(&mut self, speaker_id: CharacterId, speaker_name: &str, text: &str) {
        let Some(origin) = self.online.get(&speaker_id).map(|p| p.viewport) else {
            return;
        };

        let msg = Speech {
            speaker: speaker_name.into(),
            kind: 0x01,
            channel_id: 0,
            text: text.into(),
        };
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[s2c_opcode::SPEECH]);
        msg.encode(&mut buf);
        let payload = buf.freeze();

        for player in self.online.values() {
            if player.viewport.can_see(origin.px, origin.py, origin.pz) {
                let _ = player.outbound.send(payload.clone());
            }
        }
    }
}

impl<S: ScriptHost> GameWorld for World<S> {
    fn world_phase(&self) -> WorldPhase {
        self.phase
    }

    fn check_admission(&mut self, req: AdmissionRequest, now: Instant) -> AdmissionOutcome {
        self.admission.check(req, self.online_count(), self.max_players, now)
    }

    fn is_character_online(&self, character_id: CharacterId) -> bool {
        self.online.contains_key(&character_id)
    }

    fn other_character_online_for_account(&self, account_id: AccountId, excluding: CharacterId) -> bool {
        self.online
            .iter()
            .any(|(&cid, p)| cid != excluding && p.account_id == account_id)
    }

    fn begin_replacement_login(&mut self, character_id: CharacterId) {
        if let Some(player) = self.online.get(&character_id) {
            info!(character_id, "replacement login: kicking previous session");
            player.shutdown.notify_one();
        }
    }

    fn admit_player(
        &mut self,
        session_id: u64,
        account_id: AccountId,
        record: PlayerRecord,
        outbound: OutboundTx,
        shutdown: ShutdownHandle,
    ) -> PlacementPosition {
        let viewport = Viewport::new(record.login_x as i64, record.login_y as i64, record.login_z);
        self.online.insert(
            record.character_id,
            OnlinePlayer {
                session_id,
                account_id,
                name: format!("player-{}", record.character_id),
                outbound,
                shutdown,
                known: KnownCreatureSet::new(),
                viewport,
            },
        );
        self.session_to_character.insert(session_id, record.character_id);
        self.script.on_login(record.character_id);

        PlacementPosition { x: record.login_x, y: record.login_y, z: record.login_z }
    }

    fn rebind_replaced_session(
        &mut self,
        session_id: u64,
        character_id: CharacterId,
        outbound: OutboundTx,
        shutdown: ShutdownHandle,
    ) -> PlacementPosition {
        let placement = self
            .online
            .get(&character_id)
            .map(|p| {
                let vp = p.viewport;
                PlacementPosition { x: vp.px as i32, y: vp.py as i32, z: vp.pz }
            })
            .unwrap_or(PlacementPosition { x: 0, y: 0, z: 7 });

        if let Some(player) = self.online.get_mut(&character_id) {
            self.session_to_character.remove(&player.session_id);
            player.session_id = session_id;
            player.outbound = outbound;
            player.shutdown = shutdown;
        }
        self.session_to_character.insert(session_id, character_id);

        placement
    }

    fn admit_account_manager(
        &mut self,
        session_id: u64,
        account_id: AccountId,
        outbound: OutboundTx,
        shutdown: ShutdownHandle,
    ) {
        self.account_managers.insert(session_id, AccountManagerSession { account_id, outbound, shutdown });
    }

    fn handle_message(&mut self, session_id: u64, msg: C2sMessage) {
        if let Some(&character_id) = self.session_to_character.get(&session_id) {
            match msg {
                C2sMessage::Say(say) => {
                    let name = self
                        .online
                        .get(&character_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    if self.script.on_say(character_id, &say.text.0) == ScriptOutcome::Continue {
                        self.broadcast_say(character_id, &name, &say.text.0);
                    }
                }
                C2sMessage::ExtendedOpcode(ext) => {
                    self.script.on_extended_opcode(character_id, ext.sub_opcode, &ext.data.0);
                }
                C2sMessage::Logout | C2sMessage::LogoutOnDead => {
                    self.script.on_logout(character_id);
                    self.remove_character(character_id);
                }
                other => {
                    debug!(character_id, ?other, "unhandled playing-state message");
                }
            }
            return;
        }

        if self.account_managers.contains_key(&session_id) {
            match msg {
                C2sMessage::Logout => {
                    self.account_managers.remove(&session_id);
                }
                other => {
                    debug!(session_id, ?other, "unhandled account-manager message");
                }
            }
        }
    }

    fn route_unhandled_opcode(&mut self, session_id: u64, opcode: u8) {
        if let Some(&character_id) = self.session_to_character.get(&session_id) {
            self.script.on_unhandled_opcode(character_id, opcode);
        }
    }

    fn remove_session(&mut self, session_id: u64) {
        if let Some(character_id) = self.session_to_character.remove(&session_id) {
            self.remove_character(character_id);
        }
        self.account_managers.remove(&session_id);
    }
}

impl<S: ScriptHost> World<S> {
    fn remove_character(&mut self, character_id: CharacterId) {
        self.online.remove(&character_id);
    }
}
