//! Server-to-client opcode payloads.

pub mod channel;
pub mod container;
pub mod creature;
pub mod floor;
pub mod intro;
pub mod inventory;
pub mod map;
pub mod modal;
pub mod movement;
pub mod opcode;
pub mod stats;
pub mod speech;
pub mod tile;
pub mod trade;
pub mod vip;
pub mod world;

pub use channel::{
    ChannelClosePrivate, ChannelEntry, ChannelList, ChannelOpen, ChannelOpenPrivate,
    ChannelRuleViolation,
};
pub use container::{
    ContainerAdd, ContainerClose, ContainerItem, ContainerOpen, ContainerRemove, ContainerUpdate,
};
pub use creature::{CreatureHealth, CreatureOutfit, KnownCreature, NewCreature};
pub use floor::{FloorChangeDown, FloorChangeUp};
pub use intro::{Popup, QueueStatus, ReloginPrompt, SelfIntroduction, TextDisconnect};
pub use inventory::{InventoryClear, InventorySet};
pub use map::{Edge, EdgeStrip, FullMap};
pub use modal::{ModalButton, ModalChoice, ModalWindow};
pub use movement::MovementCancel;
pub use speech::Speech;
pub use stats::{SkillEntry, Skills, Stats};
pub use tile::{TileAdd, TileMove, TileRemove, TileUpdate};
pub use trade::{ShopClose, ShopItem, ShopOpen, ShopSale, TradeClose, TradeLook, TradeRequest};
pub use vip::{VipEntryAdd, VipOffline, VipOnline};
pub use world::WorldLight;
