use std::ops::RangeInclusive;

use crate::viewport::Viewport;

/// Which edge of the viewport a one-step move exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    North,
    East,
    South,
    West,
}

/// The single row/column of tiles a one-step move in `direction` newly
/// exposes, from `viewport` already centered on the post-move position —
/// the geometry an `EdgeStrip` (`0x65..0x68`) packet is built from, rather
/// than redescribing the whole window.
pub fn leading_edge_rect(
    direction: EdgeDirection,
    viewport: &Viewport,
) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
    let x_lo = viewport.px - viewport.vx;
    let x_hi = viewport.px + viewport.vx + 1;
    let y_lo = viewport.py - viewport.vy;
    let y_hi = viewport.py + viewport.vy + 1;

    match direction {
        EdgeDirection::North => (x_lo..=x_hi, y_lo..=y_lo),
        EdgeDirection::South => (x_lo..=x_hi, y_hi..=y_hi),
        EdgeDirection::West => (x_lo..=x_lo, y_lo..=y_hi),
        EdgeDirection::East => (x_hi..=x_hi, y_lo..=y_hi),
    }
}

/// The full on-floor viewport window at the player's new floor after a
/// floor change (`0xBE`/`0xBF`) — unlike the leading-edge strip this
/// always covers the whole width and height, matching `Viewport::can_see`
/// at `dz = 0`.
pub fn floor_change_window(viewport: &Viewport) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
    let x_lo = viewport.px - viewport.vx;
    let x_hi = viewport.px + viewport.vx + 1;
    let y_lo = viewport.py - viewport.vy;
    let y_hi = viewport.py + viewport.vy + 1;
    (x_lo..=x_hi, y_lo..=y_hi)
}

/// What the player's own move implies for its session's outbound stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMoveDiff {
    /// No floor change: an on-floor move plus the leading-edge strip.
    OnFloorMove,
    FloorChangeUp { new_floor: u8 },
    FloorChangeDown { new_floor: u8 },
}

pub fn player_move_diff(old_z: u8, new_z: u8) -> PlayerMoveDiff {
    match new_z.cmp(&old_z) {
        std::cmp::Ordering::Less => PlayerMoveDiff::FloorChangeUp { new_floor: new_z },
        std::cmp::Ordering::Greater => PlayerMoveDiff::FloorChangeDown { new_floor: new_z },
        std::cmp::Ordering::Equal => PlayerMoveDiff::OnFloorMove,
    }
}

/// What a *spectating* session should be told when some other creature
/// moves, given whether the old/new tile were visible to that session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherCreatureMoveDiff {
    OnFloorMove,
    RemoveThing,
    AddCreature,
    NoOp,
}

pub fn other_creature_move_diff(old_visible: bool, new_visible: bool) -> OtherCreatureMoveDiff {
    match (old_visible, new_visible) {
        (true, true) => OtherCreatureMoveDiff::OnFloorMove,
        (true, false) => OtherCreatureMoveDiff::RemoveThing,
        (false, true) => OtherCreatureMoveDiff::AddCreature,
        (false, false) => OtherCreatureMoveDiff::NoOp,
    }
}

/// Teleports, and moves whose source stackpos exceeds the stack cap,
/// degrade to a plain remove-plus-redescribe rather than an optimized
/// move diff.
pub fn degrades_to_full_redescribe(is_teleport: bool, from_stackpos: usize, stack_cap: usize) -> bool {
    is_teleport || from_stackpos > stack_cap
}
