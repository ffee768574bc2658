//! Capability interfaces for collaborators outside the session core:
//! login/persistence, ban lookups, and the embedded scripting layer.
//! Modeled on the teacher's `NetworkCallbacks` trait — a type-erasable,
//! `Send + Sync` trait object the core calls out to rather than linking
//! against a concrete implementation.

pub mod ban;
pub mod ids;
pub mod login;
pub mod script;

pub use ban::{BanAuthority, BanInfo};
pub use ids::{AccountId, CharacterId};
pub use login::{LoginAuthority, LoginDenied, PlayerPreload, PlayerRecord};
pub use script::{ScriptHost, ScriptOutcome};
