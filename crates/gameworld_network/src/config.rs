use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Config surface named in the external interfaces: capacity, login
/// policy toggles, and the supported protocol version window. Loaded
/// from a TOML file, the same way the teacher's `packet_inspector` tool
/// reads its own config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameworldConfig {
    pub bind_address: SocketAddr,
    /// `0` means unlimited, per the external-interfaces config surface.
    pub max_players: u32,
    pub allow_clones: bool,
    pub one_player_on_account: bool,
    pub account_manager: bool,
    pub replace_kick_on_login: bool,
    pub max_protocol_outfits: u16,
    pub protocol_version_min: u16,
    pub protocol_version_max: u16,
}

impl Default for GameworldConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 7171)),
            max_players: 0,
            allow_clones: false,
            one_player_on_account: true,
            account_manager: false,
            replace_kick_on_login: true,
            max_protocol_outfits: 175,
            protocol_version_min: 1000,
            protocol_version_max: 1100,
        }
    }
}

impl GameworldConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("parsing gameworld config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading config file {}", path.as_ref().display()))?;
        Self::from_toml_str(&contents)
    }

    pub fn protocol_version_window(&self) -> std::ops::RangeInclusive<u16> {
        self.protocol_version_min..=self.protocol_version_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sane_protocol_window() {
        let cfg = GameworldConfig::default();
        assert!(cfg.protocol_version_window().contains(&1050));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg = GameworldConfig::from_toml_str("max_players = 500\n").unwrap();
        assert_eq!(cfg.max_players, 500);
        assert!(cfg.replace_kick_on_login);
    }
}
