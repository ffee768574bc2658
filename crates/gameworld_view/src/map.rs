use crate::floor::{encode_floor, FloorCell, FloorEvent};
use crate::viewport::Viewport;

/// A floor's events paired with the floor index they belong to, in the
/// concatenation order a full map send uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedFloor {
    pub z: u8,
    pub events: Vec<FloorEvent>,
}

/// Concatenates floor descriptions across the player's vertical viewport,
/// in `Viewport::floor_order`'s top-down/bottom-up order. `cell_at` is
/// called with `(floor, x, y)` for every tile in the `width x height`
/// window.
pub fn describe_map(
    viewport: &Viewport,
    max_layer: u8,
    width: u16,
    height: u16,
    mut cell_at: impl FnMut(u8, u16, u16) -> FloorCell,
) -> Vec<DescribedFloor> {
    viewport
        .floor_order(max_layer)
        .into_iter()
        .map(|z| DescribedFloor {
            z,
            events: encode_floor(width, height, |x, y| cell_at(z, x, y)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::StackThing;

    #[test]
    fn concatenates_floors_in_viewport_order() {
        let vp = Viewport::new(0, 0, 7);
        let floors = describe_map(&vp, 15, 2, 1, |z, x, _y| {
            if z == 7 && x == 0 {
                FloorCell::Things(vec![StackThing::Ground(1)])
            } else {
                FloorCell::Empty
            }
        });
        assert_eq!(floors.first().unwrap().z, 7);
        assert_eq!(floors.last().unwrap().z, 0);
        assert_eq!(floors.len(), 8);
        assert_eq!(
            floors[0].events,
            vec![
                FloorEvent::Tile(vec![StackThing::Ground(1)]),
                FloorEvent::Skip(1),
            ]
        );
    }
}
