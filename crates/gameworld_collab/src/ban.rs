use std::net::IpAddr;

use async_trait::async_trait;

use crate::ids::{AccountId, CharacterId};

/// `expiry == 0` means permanent, matching the original ban table's
/// convention.
#[derive(Debug, Clone)]
pub struct BanInfo {
    pub expiry: u32,
    pub banned_by: String,
    pub reason: String,
}

#[async_trait]
pub trait BanAuthority: Send + Sync + 'static {
    async fn is_ip_banned(&self, ip: IpAddr) -> Option<BanInfo>;
    async fn is_account_banned(&self, account_id: AccountId) -> Option<BanInfo>;
    async fn is_player_namelocked(&self, character_id: CharacterId) -> bool;
}
