use crate::core::consts::GRID_SIZE;
use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

pub const BOARD_BOUNDS: BoundsOriginRoot = BoundsOriginRoot::new(GRID_SIZE, GRID_SIZE);

impl BoundsOriginRoot {
    pub const fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { x, y },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    pub fn iter_cells(self) -> impl Iterator<Item = Vec2> {
        let extent = self.extent;
        (0..extent.y).flat_map(move |y| (0..extent.x).map(move |x| Vec2 { x, y }))
    }
}

pub fn valid(cell: Vec2) -> bool {
    BOARD_BOUNDS.contains(&cell)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_accepts_every_board_cell() {
        assert_eq!(BOARD_BOUNDS.iter_cells().count() as i32, BOARD_BOUNDS.area());
        assert!(BOARD_BOUNDS.iter_cells().all(valid));
    }

    #[test]
    fn valid_rejects_cells_past_each_edge() {
        assert!(!valid(Vec2 { x: -1, y: 0 }));
        assert!(!valid(Vec2 { x: 0, y: -1 }));
        assert!(!valid(Vec2 { x: GRID_SIZE, y: 0 }));
        assert!(!valid(Vec2 { x: 0, y: GRID_SIZE }));
        assert!(valid(Vec2 { x: GRID_SIZE - 1, y: GRID_SIZE - 1 }));
    }
}
