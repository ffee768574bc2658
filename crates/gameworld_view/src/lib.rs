//! Per-session visibility tracking: the known-creature cache, the
//! `canSee` predicate, and the pure tile/floor/map/movement diff encoders
//! that turn world deltas into outbound wire events.

pub mod floor;
pub mod known_set;
pub mod map;
pub mod movement;
pub mod tile;
pub mod viewport;

pub use floor::{encode_floor, FloorCell, FloorEvent};
pub use known_set::{KnownCreatureSet, KNOWN_SET_CAP};
pub use map::{describe_map, DescribedFloor};
pub use movement::{
    degrades_to_full_redescribe, floor_change_window, leading_edge_rect, other_creature_move_diff,
    player_move_diff, EdgeDirection, OtherCreatureMoveDiff, PlayerMoveDiff,
};
pub use tile::{describe_tile, StackThing, MAX_STACKPOS_THINGS, MAX_STACKPOS_THINGS_OWN_TILE_BASIC_CLIENT};
pub use viewport::Viewport;
