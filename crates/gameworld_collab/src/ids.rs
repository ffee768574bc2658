/// Account identifier handed back by [`crate::LoginAuthority::authenticate`].
pub type AccountId = u32;

/// Character/player identifier used everywhere past login.
pub type CharacterId = u32;
