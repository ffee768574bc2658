//! Inbound opcode bytes named in the wire table. The full table is ~80
//! entries; the ones the session core parses a payload for are named here.
//! Everything else still gets a byte-for-byte `Opcode` match arm in the
//! dispatch table (see `gameworld_session`), routed to the silently-ignored
//! or script-handled buckets.

pub const LOGOUT_ON_DEAD: u8 = 0x0F;
pub const LOGOUT: u8 = 0x14;
pub const PING: u8 = 0x1E;
pub const EXTENDED_OPCODE: u8 = 0x32;
pub const AUTOWALK: u8 = 0x64;
pub const TURN_NORTH: u8 = 0x65;
pub const TURN_EAST: u8 = 0x66;
pub const TURN_SOUTH: u8 = 0x67;
pub const TURN_WEST: u8 = 0x68;
pub const MOVE_NORTHEAST: u8 = 0x69;
pub const MOVE_SOUTHEAST: u8 = 0x6A;
pub const MOVE_SOUTHWEST: u8 = 0x6B;
pub const MOVE_NORTHWEST: u8 = 0x6C;
pub const MOVE_CANCEL: u8 = 0x6D;
pub const THROW: u8 = 0x78;
pub const USE_ITEM: u8 = 0x82;
pub const USE_ITEM_EX: u8 = 0x83;
pub const USE_WITH_CREATURE: u8 = 0x84;
pub const ROTATE_ITEM: u8 = 0x85;
pub const TEXT_WINDOW: u8 = 0x89;
pub const HOUSE_WINDOW: u8 = 0x8A;
pub const LOOK_AT: u8 = 0x8C;
pub const SAY: u8 = 0x96;
pub const FIGHT_MODES: u8 = 0xA0;
pub const VIP_ADD: u8 = 0xD2;
pub const VIP_REMOVE: u8 = 0xD3;
pub const VIP_EDIT: u8 = 0xD4;
pub const MODAL_ANSWER: u8 = 0xF9;

/// The maximum byte length of a `say` message body (§4.3 failure policy).
pub const MAX_SAY_LEN: usize = 255;
