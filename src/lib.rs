//! Reference assembly of the gameworld session core: a concrete
//! [`World`] plus in-memory collaborators, wired to
//! `gameworld_network`'s accept loop and `gameworld_dispatch`'s
//! single-writer actor. Real deployments are expected to supply their
//! own [`gameworld_collab::LoginAuthority`]/[`gameworld_collab::BanAuthority`]/
//! [`gameworld_collab::ScriptHost`] and build their own `World` analogue
//! against `gameworld_network::GameWorld` directly; this crate is the
//! worked example, not a required dependency.

pub mod collab;
pub mod world;

pub use collab::{InMemoryLoginAuthority, NoBans};
pub use world::World;

use std::sync::Arc;

use anyhow::Context;
use gameworld_collab::ScriptHost;
use gameworld_network::{run_accept_loop, GameworldConfig, SharedNetworkState};

/// Builds the dispatcher, wraps it and the given collaborators in a
/// [`SharedNetworkState`], and runs the accept loop until the listener
/// fails. Returns only on error — a production `main` would race this
/// against a shutdown signal.
pub async fn run<S: ScriptHost>(
    config: GameworldConfig,
    login: Arc<InMemoryLoginAuthority>,
    ban: Arc<NoBans>,
    script: Arc<S>,
) -> anyhow::Result<()> {
    let max_players = config.max_players;
    let world = World::new(max_players, script);
    let dispatcher = gameworld_dispatch::spawn(world);

    let shared = SharedNetworkState::new(config, login, ban, dispatcher)
        .context("constructing shared network state")?;

    run_accept_loop(shared).await
}
