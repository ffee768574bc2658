/// Legacy stack cap: at most this many things are ever described for one
/// tile, regardless of how much is actually stacked there.
pub const MAX_STACKPOS_THINGS: usize = 10;

/// Tighter cap applied to a non-extended client's own standing tile.
pub const MAX_STACKPOS_THINGS_OWN_TILE_BASIC_CLIENT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackThing {
    Ground(u16),
    Item(u16),
    Creature(u32),
}

/// Builds the ordered, capped description of a tile's stack: ground item,
/// then top-stacked items, then creatures in reverse insertion order
/// (skipping any not visible to this session), then bottom-stacked items.
pub fn describe_tile(
    ground: Option<u16>,
    top_items: &[u16],
    creatures: &[u32],
    bottom_items: &[u16],
    is_own_tile: bool,
    extended_client: bool,
    mut creature_visible: impl FnMut(u32) -> bool,
) -> Vec<StackThing> {
    let cap = if is_own_tile && !extended_client {
        MAX_STACKPOS_THINGS_OWN_TILE_BASIC_CLIENT
    } else {
        MAX_STACKPOS_THINGS
    };

    let mut out = Vec::with_capacity(cap.min(4 + top_items.len() + creatures.len() + bottom_items.len()));

    if let Some(g) = ground {
        out.push(StackThing::Ground(g));
    }

    for &item in top_items {
        if out.len() >= cap {
            return out;
        }
        out.push(StackThing::Item(item));
    }

    for &id in creatures.iter().rev() {
        if out.len() >= cap {
            return out;
        }
        if !creature_visible(id) {
            continue;
        }
        out.push(StackThing::Creature(id));
    }

    for &item in bottom_items {
        if out.len() >= cap {
            return out;
        }
        out.push(StackThing::Item(item));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_ground_top_creatures_bottom() {
        let things = describe_tile(
            Some(100),
            &[200, 201],
            &[1, 2, 3],
            &[300],
            false,
            true,
            |_| true,
        );
        assert_eq!(
            things,
            vec![
                StackThing::Ground(100),
                StackThing::Item(200),
                StackThing::Item(201),
                StackThing::Creature(3),
                StackThing::Creature(2),
                StackThing::Creature(1),
                StackThing::Item(300),
            ]
        );
    }

    #[test]
    fn skips_invisible_creatures() {
        let things = describe_tile(None, &[], &[1, 2, 3], &[], false, true, |id| id != 2);
        assert_eq!(things, vec![StackThing::Creature(3), StackThing::Creature(1)]);
    }

    #[test]
    fn caps_at_own_tile_basic_client_limit() {
        let top_items: Vec<u16> = (0..20).collect();
        let things = describe_tile(Some(1), &top_items, &[], &[], true, false, |_| true);
        assert_eq!(things.len(), MAX_STACKPOS_THINGS_OWN_TILE_BASIC_CLIENT);
    }

    #[test]
    fn caps_at_default_limit_otherwise() {
        let top_items: Vec<u16> = (0..20).collect();
        let things = describe_tile(Some(1), &top_items, &[], &[], true, true, |_| true);
        assert_eq!(things.len(), MAX_STACKPOS_THINGS);
    }
}
