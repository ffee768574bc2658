use std::sync::Arc;

use tracing::Level;

use gameworld::{InMemoryLoginAuthority, NoBans};
use gameworld_network::GameworldConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameworldConfig::from_path(path)?,
        None => GameworldConfig::default(),
    };

    let login = Arc::new(InMemoryLoginAuthority::new());
    login.register("account1", "hunter2", "Tester");

    let ban = Arc::new(NoBans);
    let script = Arc::new(());

    gameworld::run(config, login, ban, script).await
}
