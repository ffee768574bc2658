//! TCP accept loop and login orchestration (C1 handshake, C2 admission,
//! C3 state transitions). Generic over the embedding application's world
//! type through [`GameWorld`]; the dispatcher itself lives in
//! `gameworld_dispatch` and is handed in already spawned.

pub mod config;
pub mod connect;
pub mod packet_io;
pub mod state;
pub mod world;

pub use config::GameworldConfig;
pub use connect::{bind_listener, run_accept_loop, serve};
pub use state::SharedNetworkState;
pub use world::{GameWorld, OutboundRx, OutboundTx, PlacementPosition, ShutdownHandle, WorldPhase};
