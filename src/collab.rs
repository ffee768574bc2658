//! In-memory reference collaborators. The session core treats
//! persistence, bans, and scripting as external interfaces (§6); these
//! implementations exist so the `demos/gameworld-server` binary can run
//! end to end without a real database or login server behind it.

use std::collections::HashMap;
use std::net::IpAddr;

use async_trait::async_trait;
use parking_lot::RwLock;

use gameworld_collab::{
    AccountId, BanAuthority, BanInfo, CharacterId, LoginAuthority, LoginDenied, PlayerPreload,
    PlayerRecord,
};

struct Account {
    account_id: AccountId,
    password: String,
    characters: HashMap<String, CharacterId>,
}

/// An in-memory account table seeded at startup. Looks nothing like the
/// original's SQL-backed login flow; it exists only to exercise the
/// handshake → admission → loading path without a database.
pub struct InMemoryLoginAuthority {
    accounts: RwLock<HashMap<String, Account>>,
    next_character_id: RwLock<CharacterId>,
}

impl InMemoryLoginAuthority {
    pub fn new() -> Self {
        InMemoryLoginAuthority {
            accounts: RwLock::new(HashMap::new()),
            next_character_id: RwLock::new(1),
        }
    }

    /// Registers an account/character pair, used by the demo binary to
    /// seed a couple of logins before accepting connections.
    pub fn register(&self, account_name: &str, password: &str, character_name: &str) -> CharacterId {
        let mut accounts = self.accounts.write();
        let mut next_id = self.next_character_id.write();

        let entry = accounts.entry(account_name.to_string()).or_insert_with(|| {
            let account_id = *next_id;
            *next_id += 1;
            Account {
                account_id,
                password: password.to_string(),
                characters: HashMap::new(),
            }
        });

        *entry.characters.entry(character_name.to_string()).or_insert_with(|| {
            let character_id = *next_id;
            *next_id += 1;
            character_id
        })
    }
}

impl Default for InMemoryLoginAuthority {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginAuthority for InMemoryLoginAuthority {
    async fn authenticate(
        &self,
        account_name: &str,
        password: &str,
        character_name: &str,
    ) -> Option<(AccountId, CharacterId)> {
        let accounts = self.accounts.read();
        let account = accounts.get(account_name)?;
        if account.password != password {
            return None;
        }
        let character_id = *account.characters.get(character_name)?;
        Some((account.account_id, character_id))
    }

    async fn account_id_by_account_name(&self, account_name: &str) -> Option<AccountId> {
        self.accounts.read().get(account_name).map(|a| a.account_id)
    }

    async fn preload_player(&self, character_id: CharacterId) -> Result<PlayerPreload, LoginDenied> {
        Ok(PlayerPreload {
            character_id,
            name: format!("player-{character_id}"),
            account_id: 0,
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

/// Bans nobody. A real deployment backs this with the persistent ban
/// table named in §6; this demo has none to query.
#[derive(Default)]
pub struct NoBans;

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
