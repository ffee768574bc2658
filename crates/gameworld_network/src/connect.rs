//! Accept loop and the login orchestration that wires C1 (handshake), C2
//! (admission), and C3 (session state machine) together. Grounded on the
//! teacher's `connect.rs`: one task per connection, a chain of
//! `handle_*` functions threading state down, `anyhow::Context` at every
//! fallible step.

use std::net::SocketAddr;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use gameworld_admission::{AdmissionOutcome, AdmissionRequest};
use gameworld_collab::{AccountId, CharacterId, LoginDenied};
use gameworld_dispatch::DispatcherHandle;
use gameworld_messages::c2s::{decode_c2s, decode_c2s_for_account_manager, opcode as c2s_opcode};
use gameworld_messages::s2c::{opcode as s2c_opcode, QueueStatus, SelfIntroduction, TextDisconnect};
use gameworld_messages::Encode;
use gameworld_session::{dispatch, DispatchOutcome, PlayerLiveness, Session, SessionState};
use gameworld_wire::handshake::{parse_first_frame, validate_handshake, Challenge};

use crate::packet_io::PacketIo;
use crate::state::SharedNetworkState;
use crate::world::{GameWorld, WorldPhase};

/// Reserved character name that selects the account-manager conversation
/// once normal authentication against it has failed. The original falls
/// back to `getAccountIdByAccountName` specifically in this case
/// (`protocolgame.cpp:349-411`); its literal reserved-name constant lives
/// in a header outside this pack's grounding corpus, so this is a local
/// convention rather than a ported value.
const ACCOUNT_MANAGER_CHARACTER_NAME: &str = "Account Manager";

/// Sentinel id for the account-manager's virtual "character", reported in
/// `SelfIntroduction` for that conversation. Real character ids start at 1
/// (see `InMemoryLoginAuthority::next_character_id`), so `0` never
/// collides with one.
const ACCOUNT_MANAGER_CHARACTER_ID: CharacterId = 0;

#[derive(Clone, Copy)]
enum LoginOutcome {
    Character { account_id: AccountId, character_id: CharacterId },
    AccountManager { account_id: AccountId },
}

/// Binds the listening socket named in `shared`'s config. Split out from
/// [`serve`] so callers (and tests) can discover the bound address before
/// the accept loop starts running, which matters when the configured
/// port is `0`.
pub async fn bind_listener<W>(shared: &SharedNetworkState<W>) -> anyhow::Result<TcpListener> {
    TcpListener::bind(shared.config().bind_address)
        .await
        .context("binding gameworld TCP listener")
}

/// Binds and accepts connections until the listener itself fails.
pub async fn run_accept_loop<W: GameWorld>(shared: SharedNetworkState<W>) -> anyhow::Result<()> {
    let listener = bind_listener(&shared).await?;
    serve(listener, shared).await
}

/// Accepts connections from an already-bound listener until it fails.
pub async fn serve<W: GameWorld>(listener: TcpListener, shared: SharedNetworkState<W>) -> anyhow::Result<()> {
    info!(addr = ?listener.local_addr().ok(), "accepting connections");

    loop {
        let (stream, remote_addr) = listener.accept().await.context("accepting connection")?;
        let shared = shared.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(shared, stream, remote_addr).await {
                debug!(%remote_addr, error = %e, "connection ended");
            }
        });
    }
}

async fn handle_connection<W: GameWorld>(
    shared: SharedNetworkState<W>,
    stream: TcpStream,
    remote_addr: SocketAddr,
) -> anyhow::Result<()> {
    let mut io = PacketIo::new(stream);
    io.set_nodelay().ok();

    if let Some(ban) = shared.ban().is_ip_banned(remote_addr.ip()).await {
        warn!(ip = %remote_addr.ip(), reason = %ban.reason, "rejecting banned IP at connect");
        return Ok(());
    }

    let now_unix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as u32;
    let challenge = Challenge::generate(now_unix);
    io.send_frame(&challenge.encode()).await.context("sending challenge frame")?;

    let first_frame_body = io.recv_frame().await.context("reading first frame")?;
    let first_frame =
        parse_first_frame(&first_frame_body, shared.rsa_key()).context("parsing first frame")?;

    if let Err(e) = validate_handshake(
        &first_frame.login,
        &challenge,
        shared.config().protocol_version_window(),
        first_frame.protocol_version,
    ) {
        debug!(%remote_addr, error = %e, "handshake validation failed");
        return Ok(());
    }

    io.enable_encryption(first_frame.login.symmetric_key);

    let session_id = shared.next_session_id();
    let mut session = Session::new(session_id, first_frame.login.extended_client);

    session.transition(SessionState::Authenticating).expect("legal from Handshake");

    let phase = call_world(shared.dispatcher(), |world| world.world_phase()).await?;
    if !phase.accepts_logins() {
        let reason = match phase {
            WorldPhase::Startup => "Gameworld is starting up. Please wait.",
            WorldPhase::Maintain => "Gameworld is under maintenance. Please re-connect in a while.",
            WorldPhase::Shutdown => "Gameworld is shutting down. Please re-connect in a while.",
            WorldPhase::Normal => unreachable!("accepts_logins is true for Normal"),
        };
        send_disconnect(&mut io, reason).await?;
        return Ok(());
    }

    let config = shared.config();
    let account_name = first_frame.login.account_name.as_str();
    let password = first_frame.login.password.as_str();

    let login = shared.login();
    let character_name = first_frame.login.character_name.as_str();

    let login_outcome = match login.authenticate(account_name, password, character_name).await {
        Some((account_id, character_id)) => LoginOutcome::Character { account_id, character_id },
        None if config.account_manager && character_name == ACCOUNT_MANAGER_CHARACTER_NAME => {
            match login.account_id_by_account_name(account_name).await {
                Some(account_id) => LoginOutcome::AccountManager { account_id },
                None => {
                    send_disconnect(&mut io, "Account name or password is not correct.").await?;
                    return Ok(());
                }
            }
        }
        None => {
            send_disconnect(&mut io, "Account name or password is not correct.").await?;
            return Ok(());
        }
    };

    let account_id = match login_outcome {
        LoginOutcome::Character { account_id, .. } => account_id,
        LoginOutcome::AccountManager { account_id } => account_id,
    };

    if let Some(ban) = shared.ban().is_account_banned(account_id).await {
        send_disconnect(&mut io, &format!("Your account is banned. Reason: {}", ban.reason)).await?;
        return Ok(());
    }

    let LoginOutcome::Character { character_id, .. } = login_outcome else {
        let (outbound_tx, outbound_rx) = tokio::sync::mpsc::unbounded_channel();
        let shutdown: crate::world::ShutdownHandle = std::sync::Arc::new(tokio::sync::Notify::new());

        session.transition(SessionState::Loading).expect("legal from Authenticating");
        session.transition(SessionState::AccountManager).expect("legal from Loading");
        session.liveness = PlayerLiveness::Alive;

        let outbound = outbound_tx.clone();
        let shutdown_for_world = shutdown.clone();
        call_world(shared.dispatcher(), move |world| {
            world.admit_account_manager(session_id, account_id, outbound, shutdown_for_world)
        })
        .await?;

        send_self_introduction(&mut io, ACCOUNT_MANAGER_CHARACTER_ID).await?;

        return run_playing_loop(shared, io, session, outbound_rx, shutdown).await;
    };

    let admission_outcome = call_world(shared.dispatcher(), move |world| {
        world.check_admission(
            AdmissionRequest { guid: character_id, premium: false, always_admit: false },
            Instant::now(),
        )
    })
    .await?;

    match admission_outcome {
        AdmissionOutcome::Deferred { slot, retry_after_secs } => {
            session.transition(SessionState::Queued).expect("legal from Authenticating");
            send_queue_status(&mut io, slot, retry_after_secs).await?;
            return Ok(());
        }
        AdmissionOutcome::Admit => {
            session.transition(SessionState::Loading).expect("legal from Authenticating");
        }
    }

    let preload = match login.preload_player(character_id).await {
        Ok(preload) => preload,
        Err(LoginDenied::NameLocked) => {
            send_disconnect(&mut io, "Your character has been namelocked.").await?;
            return Ok(());
        }
        Err(_) => {
            send_disconnect(&mut io, "Your character could not be found.").await?;
            return Ok(());
        }
    };

    if preload.deleted {
        send_disconnect(&mut io, "Your character no longer exists.").await?;
        return Ok(());
    }

    if shared.ban().is_player_namelocked(character_id).await {
        send_disconnect(&mut io, "Your character has been namelocked.").await?;
        return Ok(());
    }

    if !config.allow_clones
        && config.one_player_on_account
        && call_world(shared.dispatcher(), move |world| {
            world.other_character_online_for_account(account_id, character_id)
        })
        .await?
    {
        send_disconnect(&mut io, "You may only login with one character of your account at the same time.").await?;
        return Ok(());
    }

    let already_online = call_world(shared.dispatcher(), move |world| world.is_character_online(character_id)).await?;

    let (outbound_tx, outbound_rx) = tokio::sync::mpsc::unbounded_channel();
    let shutdown: crate::world::ShutdownHandle = std::sync::Arc::new(tokio::sync::Notify::new());

    let placement = if already_online {
        use gameworld_session::{resolve_duplicate_login, DuplicateLoginOutcome, REPLACEMENT_DELAY};

        match resolve_duplicate_login(true, shared.config().replace_kick_on_login) {
            DuplicateLoginOutcome::Proceed => unreachable!("already_online implies a duplicate"),
            DuplicateLoginOutcome::Rejected => {
                send_disconnect(&mut io, "You are already logged in.").await?;
                return Ok(());
            }
            DuplicateLoginOutcome::ReplacementLogin => {
                call_world(shared.dispatcher(), move |world| {
                    world.begin_replacement_login(character_id)
                })
                .await?;

                let dispatcher = shared.dispatcher().clone();
                let (tx, rx) = oneshot::channel();
                let outbound_tx = outbound_tx.clone();
                let shutdown = shutdown.clone();
                dispatcher.schedule_after(REPLACEMENT_DELAY, move |world| {
                    let placement = world.rebind_replaced_session(session_id, character_id, outbound_tx, shutdown);
                    let _ = tx.send(placement);
                });
                rx.await.context("waiting for replacement-login reconnect task")?
            }
        }
    } else {
        let record = match login.load_player_by_id(character_id).await {
            Ok(record) => record,
            Err(_) => {
                send_disconnect(&mut io, "Your character could not be loaded.").await?;
                return Ok(());
            }
        };

        let outbound_tx = outbound_tx.clone();
        let shutdown = shutdown.clone();
        call_world(shared.dispatcher(), move |world| {
            world.admit_player(session_id, account_id, record, outbound_tx, shutdown)
        })
        .await?
    };

    session
        .transition(SessionState::Playing)
        .expect("legal from Loading");
    session.liveness = PlayerLiveness::Alive;

    send_self_introduction(&mut io, character_id).await?;
    let _ = placement;

    run_playing_loop(shared, io, session, outbound_rx, shutdown).await
}

/// Reads frames and dispatches them until the connection drops or the
/// dispatch table says to disconnect. Concurrently drains `outbound_rx`
/// so world broadcasts (spectator notifications, reply fan-in) reach the
/// socket without waiting for the next inbound frame.
async fn run_playing_loop<W: GameWorld>(
    shared: SharedNetworkState<W>,
    mut io: PacketIo,
    mut session: Session,
    mut outbound_rx: crate::world::OutboundRx,
    shutdown: crate::world::ShutdownHandle,
) -> anyhow::Result<()> {
    let mut outbound_open = true;

    loop {
        tokio::select! {
            _ = shutdown.notified() => break,
            frame = io.recv_frame() => {
                let frame = match frame {
                    Ok(frame) => frame,
                    Err(_) => break,
                };

                if frame.is_empty() {
                    continue;
                }

                let op = frame[0];
                let mut body = &frame[1..];

                let liveness = session.liveness;
                match dispatch(session.state, liveness, session.extended_client, op) {
                    DispatchOutcome::Disconnect => break,
                    DispatchOutcome::Ignored => continue,
                    DispatchOutcome::RoutedToScript => {
                        let session_id = session.id;
                        shared.dispatcher().post(move |world| world.route_unhandled_opcode(session_id, op));
                    }
                    DispatchOutcome::Enqueued => {
                        let decoded = if session.state == SessionState::AccountManager {
                            decode_c2s_for_account_manager(op, &mut body)
                        } else {
                            decode_c2s(op, &mut body)
                        };
                        let msg = match decoded {
                            Ok(msg) => msg,
                            Err(_) => continue, // malformed payload: drop the opcode silently
                        };

                        let is_logout = op == c2s_opcode::LOGOUT || op == c2s_opcode::LOGOUT_ON_DEAD;

                        let session_id = session.id;
                        shared.dispatcher().post(move |world| world.handle_message(session_id, msg));

                        if is_logout {
                            break;
                        }
                    }
                }
            }
            outbound = outbound_rx.recv(), if outbound_open => {
                match outbound {
                    Some(payload) => {
                        if io.send_frame(&payload).await.is_err() {
                            break;
                        }
                    }
                    // World dropped its sender; stop polling this branch but
                    // keep driving the inbound side.
                    None => outbound_open = false,
                }
            }
        }
    }

    shared.dispatcher().post(move |world| world.remove_session(session.id));
    Ok(())
}

async fn call_world<W: GameWorld, T: Send + 'static>(
    dispatcher: &DispatcherHandle<W>,
    f: impl FnOnce(&mut W) -> T + Send + 'static,
) -> anyhow::Result<T> {
    let (tx, rx) = oneshot::channel();
    dispatcher.post(move |world| {
        let _ = tx.send(f(world));
    });
    rx.await.context("dispatcher dropped the reply channel")
}

async fn send_disconnect(io: &mut PacketIo, reason: &str) -> anyhow::Result<()> {
    let msg = TextDisconnect { reason: reason.into() };
    let mut buf = bytes::BytesMut::new();
    buf.extend_from_slice(&[s2c_opcode::TEXT_DISCONNECT]);
    msg.encode(&mut buf);
    io.send_frame(&buf).await
}

async fn send_queue_status(io: &mut PacketIo, slot: u32, retry_after_secs: u64) -> anyhow::Result<()> {
    let message = format!("You are place {slot} on the waiting list.");
    let msg = QueueStatus {
        message: message.as_str().into(),
        position: slot.min(u16::MAX as u32) as u16,
        retry_seconds: retry_after_secs.min(u8::MAX as u64) as u8,
    };
    let mut buf = bytes::BytesMut::new();
    buf.extend_from_slice(&[s2c_opcode::QUEUE_STATUS]);
    msg.encode(&mut buf);
    io.send_frame(&buf).await
}

async fn send_self_introduction(io: &mut PacketIo, character_id: u32) -> anyhow::Result<()> {
    let msg = SelfIntroduction { player_id: character_id, beat_ms: 50, can_report_bugs: false };
    let mut buf = bytes::BytesMut::new();
    buf.extend_from_slice(&[s2c_opcode::SELF_INTRODUCTION]);
    msg.encode(&mut buf);
    io.send_frame(&buf).await
}
