use async_trait::async_trait;

use crate::ids::{AccountId, CharacterId};

/// Lightweight fields needed before committing to a full player load —
/// the `preloadPlayer` step in `Loading`, cheap enough to run before the
/// one-character-per-account and name-lock checks.
#[derive(Debug, Clone)]
pub struct PlayerPreload {
    pub character_id: CharacterId,
    pub name: String,
    pub account_id: AccountId,
    pub deleted: bool,
}

/// Opaque full player record. The session core never interprets its
/// contents beyond passing it along; item definitions, inventory shape,
/// and combat stats are the script/persistence layer's concern.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub character_id: CharacterId,
    pub login_x: i32,
    pub login_y: i32,
    pub login_z: u8,
    pub blob: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginDenied {
    NameLocked,
    CharacterNotFound,
    AlreadyOnline,
}

/// Account-name/password/character-name authentication and player
/// persistence, matching the four operations named in the external
/// interfaces. Every method may block on a database round trip; callers
/// run these on a worker task and repost the result to the dispatcher,
/// never await them inline on the dispatcher.
#[async_trait]
pub trait LoginAuthority: Send + Sync + 'static {
    /// Returns `None` on bad credentials.
    async fn authenticate(
        &self,
        account_name: &str,
        password: &str,
        character_name: &str,
    ) -> Option<(AccountId, CharacterId)>;

    /// Alternate lookup path used by the in-game account-manager character,
    /// which authenticates by account name alone.
    async fn account_id_by_account_name(&self, account_name: &str) -> Option<AccountId>;

    async fn preload_player(&self, character_id: CharacterId) -> Result<PlayerPreload, LoginDenied>;

    async fn load_player_by_id(&self, character_id: CharacterId) -> Result<PlayerRecord, LoginDenied>;

    async fn save_player(&self, record: &PlayerRecord) -> anyhow::Result<()>;
}
