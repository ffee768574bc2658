//! End-to-end handshake tests driving a real `TcpStream` against
//! `serve`/`bind_listener`, the way the teacher's own connection tests
//! exercise `valence_network::connect` against a loopback listener.

use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::{Buf, BytesMut};
use rand::rngs::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use tokio::net::TcpStream;

use gameworld_admission::{AdmissionOutcome, AdmissionQueue, AdmissionRequest};
use gameworld_collab::{
    AccountId, BanAuthority, BanInfo, CharacterId, LoginAuthority, LoginDenied, PlayerPreload,
    PlayerRecord,
};
use gameworld_network::{
    bind_listener, serve, GameWorld, GameworldConfig, PlacementPosition, SharedNetworkState, WorldPhase,
};
use gameworld_wire::{FrameDecoder, FrameEncoder};

struct AllowAllLogin;

#[async_trait]
impl LoginAuthority for AllowAllLogin {
    async fn authenticate(
        &self,
        _account_name: &str,
        _password: &str,
        _character_name: &str,
    ) -> Option<(AccountId, CharacterId)> {
        Some((1, 42))
    }

    async fn account_id_by_account_name(&self, _account_name: &str) -> Option<AccountId> {
        Some(1)
    }

    async fn preload_player(&self, character_id: CharacterId) -> Result<PlayerPreload, LoginDenied> {
        Ok(PlayerPreload {
            character_id,
            name: "Tester".into(),
            account_id: 1,
            deleted: false,
        })
    }

    async fn load_player_by_id(&self, character_id: CharacterId) -> Result<PlayerRecord, LoginDenied> {
        Ok(PlayerRecord {
            character_id,
            login_x: 100,
            login_y: 100,
            login_z: 7,
            blob: Vec::new(),
        })
    }

    async fn save_player(&self, _record: &PlayerRecord) -> anyhow::Result<()> {
        Ok(())
    }
}

struct NoBans;

#[async_trait]
impl BanAuthority for NoBans {
    async fn is_ip_banned(&self, _ip: IpAddr) -> Option<BanInfo> {
        None
    }

    async fn is_account_banned(&self, _account_id: AccountId) -> Option<BanInfo> {
        None
    }

    async fn is_player_namelocked(&self, _character_id: CharacterId) -> bool {
        false
    }
}

/// Minimal `GameWorld` impl: one admission queue plus a flag recording
/// whether `admit_player` ran, enough to drive the happy-path handshake.
struct TestWorld {
    queue: AdmissionQueue,
    admitted: Arc<AtomicBool>,
}

impl GameWorld for TestWorld {
    fn world_phase(&self) -> WorldPhase {
        WorldPhase::Normal
    }

    fn check_admission(
        &mut self,
        req: AdmissionRequest,
        now: std::time::Instant,
    ) -> AdmissionOutcome {
        self.queue.check(req, 0, 0, now)
    }

    fn is_character_online(&self, _character_id: CharacterId) -> bool {
        false
    }

    fn other_character_online_for_account(&self, _account_id: AccountId, _excluding: CharacterId) -> bool {
        false
    }

    fn begin_replacement_login(&mut self, _character_id: CharacterId) {}

    fn admit_player(
        &mut self,
        _session_id: u64,
        _account_id: AccountId,
        _record: PlayerRecord,
        _outbound: gameworld_network::world::OutboundTx,
        _shutdown: gameworld_network::world::ShutdownHandle,
    ) -> PlacementPosition {
        self.admitted.store(true, Ordering::SeqCst);
        PlacementPosition { x: 100, y: 100, z: 7 }
    }

    fn rebind_replaced_session(
        &mut self,
        _session_id: u64,
        _character_id: CharacterId,
        _outbound: gameworld_network::world::OutboundTx,
        _shutdown: gameworld_network::world::ShutdownHandle,
    ) -> PlacementPosition {
        PlacementPosition { x: 100, y: 100, z: 7 }
    }

    fn admit_account_manager(
        &mut self,
        _session_id: u64,
        _account_id: AccountId,
        _outbound: gameworld_network::world::OutboundTx,
        _shutdown: gameworld_network::world::ShutdownHandle,
    ) {
    }

    fn handle_message(&mut self, _session_id: u64, _msg: gameworld_messages::c2s::C2sMessage) {}

    fn route_unhandled_opcode(&mut self, _session_id: u64, _opcode: u8) {}

    fn remove_session(&mut self, _session_id: u64) {}
}

async fn spawn_test_server() -> (SharedNetworkState<TestWorld>, std::net::SocketAddr, Arc<AtomicBool>) {
    let admitted = Arc::new(AtomicBool::new(false));
    let world = TestWorld {
        queue: AdmissionQueue::new(),
        admitted: admitted.clone(),
    };
    let dispatcher = gameworld_dispatch::spawn(world);

    let mut config = GameworldConfig::default();
    config.bind_address = "127.0.0.1:0".parse().unwrap();

    let shared = SharedNetworkState::new(config, Arc::new(AllowAllLogin), Arc::new(NoBans), dispatcher)
        .expect("rsa keygen");

    let listener = bind_listener(&shared).await.expect("bind");
    let addr = listener.local_addr().unwrap();

    let serve_shared = shared.clone();
    tokio::spawn(async move {
        let _ = serve(listener, serve_shared).await;
    });

    (shared, addr, admitted)
}

/// Reads raw bytes off the socket into `dec` until one frame decodes.
async fn read_one_frame(stream: &mut TcpStream, dec: &mut FrameDecoder) -> BytesMut {
    loop {
        if let Some(payload) = dec.try_next_frame().expect("valid frame") {
            return payload;
        }
        dec.reserve(4096);
        let mut buf = dec.take_capacity();
        let n = tokio::io::AsyncReadExt::read_buf(stream, &mut buf)
            .await
            .expect("read");
        assert!(n > 0, "server closed before sending a full frame");
        dec.queue_bytes(buf);
    }
}

fn encode_login_block(
    key_words: [u32; 4],
    account: &str,
    character: &str,
    password: &str,
    challenge_timestamp: u32,
    challenge_random_byte: u8,
    extended: bool,
) -> Vec<u8> {
    let mut buf = Vec::new();
    for w in key_words {
        buf.extend_from_slice(&w.to_le_bytes());
    }
    for s in [account, character, password] {
        buf.extend_from_slice(&(s.len() as u16).to_le_bytes());
        buf.extend_from_slice(s.as_bytes());
    }
    buf.extend_from_slice(&challenge_timestamp.to_le_bytes());
    buf.push(challenge_random_byte);
    buf.push(u8::from(extended));
    buf
}

#[tokio::test]
async fn successful_login_reaches_self_introduction() {
    let (shared, addr, admitted) = spawn_test_server().await;
    let public_key: RsaPublicKey = shared.rsa_public_key();

    let mut stream = TcpStream::connect(addr).await.expect("connect");

    let mut dec = FrameDecoder::new();
    let challenge_frame = read_one_frame(&mut stream, &mut dec).await;
    assert_eq!(challenge_frame[0], gameworld_wire::handshake::CHALLENGE_OPCODE);

    let timestamp = u32::from_le_bytes(challenge_frame[1..5].try_into().unwrap());
    let random_byte = challenge_frame[5];

    let login_plain = encode_login_block(
        [11, 22, 33, 44],
        "account1",
        "Tester",
        "hunter2",
        timestamp,
        random_byte,
        false,
    );
    let encrypted = public_key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, &login_plain)
        .expect("rsa encrypt");

    let mut first_body = Vec::new();
    first_body.extend_from_slice(&1u16.to_le_bytes()); // os_tag
    first_body.extend_from_slice(&1050u16.to_le_bytes()); // protocol_version, within default window
    first_body.extend_from_slice(&encrypted);

    let enc = FrameEncoder::new();
    let first_frame = enc.encode_frame(&first_body).expect("encode first frame");
    tokio::io::AsyncWriteExt::write_all(&mut stream, &first_frame)
        .await
        .expect("write first frame");

    // The server now switches to an XTEA-encrypted stream, keyed by the
    // symmetric key we just sent it.
    let key = gameworld_wire::SymmetricKey::from_words([11, 22, 33, 44]);
    dec.enable_encryption(key);

    let intro_frame = read_one_frame(&mut stream, &mut dec).await;
    assert_eq!(intro_frame[0], gameworld_messages::s2c::opcode::SELF_INTRODUCTION);

    let mut body = &intro_frame[1..];
    let player_id = u32::from_le_bytes([body[0], body[1], body[2], body[3]]);
    body.advance(4);
    assert_eq!(player_id, 42);

    // Give the posted `admit_player` closure a moment to run on the
    // dispatcher before asserting on its side effect.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    assert!(admitted.load(Ordering::SeqCst));
}

#[tokio::test]
async fn unsupported_protocol_version_drops_the_connection() {
    let (shared, addr, _admitted) = spawn_test_server().await;
    let public_key: RsaPublicKey = shared.rsa_public_key();

    let mut stream = TcpStream::connect(addr).await.expect("connect");

    let mut dec = FrameDecoder::new();
    let challenge_frame = read_one_frame(&mut stream, &mut dec).await;
    let timestamp = u32::from_le_bytes(challenge_frame[1..5].try_into().unwrap());
    let random_byte = challenge_frame[5];

    let login_plain = encode_login_block(
        [1, 2, 3, 4],
        "account1",
        "Tester",
        "hunter2",
        timestamp,
        random_byte,
        false,
    );
    let encrypted = public_key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, &login_plain)
        .expect("rsa encrypt");

    let mut first_body = Vec::new();
    first_body.extend_from_slice(&1u16.to_le_bytes());
    first_body.extend_from_slice(&1u16.to_le_bytes()); // far below the configured window
    first_body.extend_from_slice(&encrypted);

    let enc = FrameEncoder::new();
    let first_frame = enc.encode_frame(&first_body).expect("encode first frame");
    tokio::io::AsyncWriteExt::write_all(&mut stream, &first_frame)
        .await
        .expect("write first frame");

    // The server drops the connection without sending anything further;
    // the next read should observe EOF rather than a decodable frame.
    let mut scratch = [0u8; 16];
    let n = tokio::time::timeout(
        std::time::Duration::from_millis(500),
        tokio::io::AsyncReadExt::read(&mut stream, &mut scratch),
    )
    .await
    .expect("no response within timeout")
    .expect("read");
    assert_eq!(n, 0, "expected connection close, got bytes");
}
