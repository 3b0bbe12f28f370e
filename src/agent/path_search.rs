//! Breadth-first search over the open board.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{valid, Direction, Vec2, ALL_DIRECTIONS};

/// Shortest sequence of unit steps from `start` to `goal` that never enters a
/// cell in `blocked` or leaves the board.
///
/// Returns `Some(vec![])` when `start == goal` and `None` when `goal` cannot be
/// reached. Neighbours are expanded in [`ALL_DIRECTIONS`] order, so among equally
/// short paths the one preferring up, then down, then left, then right wins.
pub fn shortest_path(start: Vec2, goal: Vec2, blocked: &HashSet<Vec2>) -> Option<Vec<Direction>> {
    if start == goal {
        return Some(vec![]);
    }

    let mut came_from: HashMap<Vec2, (Vec2, Direction)> = HashMap::new();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for dir in ALL_DIRECTIONS {
            let next = current + dir;
            if !valid(next) || blocked.contains(&next) || !visited.insert(next) {
                continue;
            }
            came_from.insert(next, (current, dir));
            if next == goal {
                return Some(reconstruct_path(&came_from, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct_path(
    came_from: &HashMap<Vec2, (Vec2, Direction)>,
    start: Vec2,
    goal: Vec2,
) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&(previous, dir)) = came_from.get(&current) else {
            break;
        };
        path.push(dir);
        current = previous;
    }
    path.reverse();
    path
}

/// Cell reached by walking `path` from `start`.
pub fn follow_path(start: Vec2, path: &[Direction]) -> Vec2 {
    path.iter().fold(start, |pos, &dir| pos + dir)
}
