#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use petgraph::algo::dijkstra;
    use petgraph::graphmap::UnGraphMap;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use Direction::*;

    use crate::agent::{follow_path, shortest_path};
    use crate::core::*;

    fn grid_graph(blocked: &HashSet<Vec2>) -> UnGraphMap<Vec2, ()> {
        let mut graph = UnGraphMap::new();
        for cell in BOARD_BOUNDS.iter_cells().filter(|c| !blocked.contains(c)) {
            graph.add_node(cell);
            for dir in [Right, Down] {
                let neighbour = cell + dir;
                if valid(neighbour) && !blocked.contains(&neighbour) {
                    graph.add_edge(cell, neighbour, ());
                }
            }
        }
        graph
    }

    fn assert_path_walkable(start: Vec2, path: &[Direction], blocked: &HashSet<Vec2>) {
        let mut pos = start;
        for &dir in path {
            pos = pos + dir;
            assert!(valid(pos), "path leaves the board at {}", pos);
            assert!(!blocked.contains(&pos), "path enters blocked cell {}", pos);
        }
    }

    #[test]
    fn start_equal_to_goal_is_an_empty_path() {
        let blocked = HashSet::new();
        assert_eq!(shortest_path(Vec2::new(2, 2), Vec2::new(2, 2), &blocked), Some(vec![]));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let blocked = HashSet::from([Vec2::new(1, 0), Vec2::new(0, 1)]);
        assert_eq!(shortest_path(Vec2::new(4, 4), Vec2::new(0, 0), &blocked), None);
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let blocked = HashSet::from([Vec2::new(3, 3)]);
        assert_eq!(shortest_path(Vec2::new(0, 0), Vec2::new(3, 3), &blocked), None);
    }

    #[test]
    fn ties_prefer_up_then_down_then_left_then_right() {
        let blocked = HashSet::new();
        assert_eq!(shortest_path(Vec2::new(0, 0), Vec2::new(1, 1), &blocked), Some(vec![Down, Right]));
        assert_eq!(shortest_path(Vec2::new(4, 4), Vec2::new(3, 3), &blocked), Some(vec![Up, Left]));
        assert_eq!(shortest_path(Vec2::new(4, 4), Vec2::new(2, 1), &blocked), Some(vec![Up, Up, Up, Left, Left]));
    }

    #[test]
    fn detours_around_a_wall_of_blocked_cells() {
        let blocked: HashSet<Vec2> = (0..4).map(|y| Vec2::new(2, y)).collect();
        let path = shortest_path(Vec2::new(0, 0), Vec2::new(4, 0), &blocked).expect("gap at the bottom");
        assert_eq!(path.len(), 12);
        assert_path_walkable(Vec2::new(0, 0), &path, &blocked);
        assert_eq!(follow_path(Vec2::new(0, 0), &path), Vec2::new(4, 0));
    }

    #[test]
    fn repeated_searches_agree() {
        let blocked = HashSet::from([Vec2::new(2, 2), Vec2::new(1, 3)]);
        let first = shortest_path(Vec2::new(0, 4), Vec2::new(4, 0), &blocked);
        for _ in 0..5 {
            assert_eq!(shortest_path(Vec2::new(0, 4), Vec2::new(4, 0), &blocked), first);
        }
    }

    #[test]
    fn path_lengths_match_exhaustive_shortest_paths() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..60 {
            let blocked: HashSet<Vec2> = BOARD_BOUNDS
                .iter_cells()
                .filter(|_| rng.gen_bool(0.25))
                .collect();
            let graph = grid_graph(&blocked);

            for start in BOARD_BOUNDS.iter_cells().filter(|c| !blocked.contains(c)) {
                let distances = dijkstra(&graph, start, None, |_| 1usize);
                for goal in BOARD_BOUNDS.iter_cells() {
                    let path = shortest_path(start, goal, &blocked);
                    match (distances.get(&goal), path) {
                        (Some(&distance), Some(path)) => {
                            assert_eq!(path.len(), distance, "{} -> {} with {:?}", start, goal, blocked);
                            assert_path_walkable(start, &path, &blocked);
                            assert_eq!(follow_path(start, &path), goal);
                        }
                        (None, None) => {}
                        (expected, actual) => panic!(
                            "{} -> {}: expected distance {:?}, got path {:?}",
                            start, goal, expected, actual
                        ),
                    }
                }
            }
        }
    }
}
