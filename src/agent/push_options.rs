use crate::core::{valid, Direction, Vec2, ALL_DIRECTIONS};

/// One way to push the box a single cell: stand on `approach`, move in
/// `direction`, and the box lands on `resulting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PushOption {
    pub direction: Direction,
    pub approach: Vec2,
    pub resulting: Vec2,
}

/// Pushes available for a box at `box_pos`, in [`ALL_DIRECTIONS`] order. Pushes
/// that would need an approach cell off the board, or would move the box off
/// the board, are left out.
pub fn push_options(box_pos: Vec2) -> Vec<PushOption> {
    ALL_DIRECTIONS
        .iter()
        .map(|&direction| PushOption {
            direction,
            approach: box_pos - direction,
            resulting: box_pos + direction,
        })
        .filter(|option| valid(option.approach) && valid(option.resulting))
        .collect()
}
