//! Outbound opcode bytes, per the "Outbound highlights" table. This is a
//! distinct byte space from `c2s::opcode` — e.g. `0x6A` means "move
//! southeast" inbound but "tile add" outbound.

pub const SELF_INTRODUCTION: u8 = 0x0A;
pub const TEXT_DISCONNECT: u8 = 0x14;
pub const POPUP: u8 = 0x15;
pub const QUEUE_STATUS: u8 = 0x16;
pub const RELOGIN_PROMPT: u8 = 0x28;

pub const FULL_MAP: u8 = 0x64;
pub const EDGE_STRIP_NORTH: u8 = 0x65;
pub const EDGE_STRIP_EAST: u8 = 0x66;
pub const EDGE_STRIP_SOUTH: u8 = 0x67;
pub const EDGE_STRIP_WEST: u8 = 0x68;
pub const KNOWN_CREATURE: u8 = 0x61;
pub const NEW_CREATURE: u8 = 0x62;
pub const TILE_ADD: u8 = 0x6A;
pub const TILE_UPDATE: u8 = 0x6B;
pub const TILE_REMOVE: u8 = 0x6C;
pub const TILE_MOVE: u8 = 0x6D;

pub const CONTAINER_OPEN: u8 = 0x6E;
pub const CONTAINER_CLOSE: u8 = 0x6F;
pub const CONTAINER_ADD: u8 = 0x70;
pub const CONTAINER_UPDATE: u8 = 0x71;
pub const CONTAINER_REMOVE: u8 = 0x72;

pub const INVENTORY_SET: u8 = 0x78;
pub const INVENTORY_CLEAR: u8 = 0x79;

pub const SHOP_OPEN: u8 = 0x7A;
pub const SHOP_SALE: u8 = 0x7B;
pub const SHOP_CLOSE: u8 = 0x7C;
pub const TRADE_REQUEST: u8 = 0x7D;
pub const TRADE_LOOK: u8 = 0x7E;
pub const TRADE_CLOSE: u8 = 0x7F;

pub const WORLD_LIGHT: u8 = 0x82;
pub const CREATURE_HEALTH: u8 = 0x8C;
pub const CREATURE_OUTFIT: u8 = 0x8E;

pub const STATS: u8 = 0xA0;
pub const SKILLS: u8 = 0xA1;
pub const FIGHT_MODES: u8 = 0xA7;

pub const SPEECH: u8 = 0xAA;
pub const CHANNEL_LIST: u8 = 0xAB;
pub const CHANNEL_OPEN: u8 = 0xAC;
pub const CHANNEL_CLOSE_PRIVATE: u8 = 0xAD;
pub const CHANNEL_OPEN_PRIVATE: u8 = 0xB2;
pub const CHANNEL_RULE_VIOLATION: u8 = 0xB3;

pub const MOVEMENT_CANCEL: u8 = 0xB5;

pub const FLOOR_CHANGE_UP: u8 = 0xBE;
pub const FLOOR_CHANGE_DOWN: u8 = 0xBF;

pub const VIP_ADD: u8 = 0xD2;
pub const VIP_ONLINE: u8 = 0xD3;
pub const VIP_OFFLINE: u8 = 0xD4;

pub const MODAL_WINDOW: u8 = 0xFA;
