use std::fmt;
use std::ops::{Add, Sub};

use crate::core::bounds::valid;
use crate::core::consts::{AGENT_START, BOX_START, PLAYER_START, TARGET};
use crate::core::{Direction, GameState, RoundOutcome, Vec2, Winner};

/// Enumeration order of the four directions. Path search and push selection
/// both break ties by this order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }

    pub fn manhattan(&self, other: &Vec2) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Add<Direction> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Direction) -> Vec2 {
        self + rhs.delta()
    }
}

impl Sub<Direction> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Direction) -> Vec2 {
        self - rhs.delta()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => write!(f, "Player"),
            Winner::Agent => write!(f, "Agent"),
        }
    }
}

impl RoundOutcome {
    pub fn is_in_progress(&self) -> bool {
        *self == RoundOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Winner> {
        match self {
            RoundOutcome::InProgress => None,
            RoundOutcome::Won(winner) => Some(*winner),
        }
    }
}

impl GameState {
    /// The fixed starting layout every round begins from.
    pub fn initial() -> GameState {
        GameState {
            player: PLAYER_START,
            agent: AGENT_START,
            box_pos: BOX_START,
            target: TARGET,
            outcome: RoundOutcome::InProgress,
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::initial();
    }

    pub fn is_won(&self) -> bool {
        self.box_pos == self.target
    }

    /// Records `winner` if this state has the box on the target and no winner yet.
    pub fn settle_outcome(&mut self, winner: Winner) {
        if self.outcome.is_in_progress() && self.is_won() {
            self.outcome = RoundOutcome::Won(winner);
        }
    }

    /// Panics if any entity left the board or two of them share a cell.
    pub fn assert_invariants(&self) {
        assert!(valid(self.player), "player out of bounds at {}", self.player);
        assert!(valid(self.agent), "agent out of bounds at {}", self.agent);
        assert!(valid(self.box_pos), "box out of bounds at {}", self.box_pos);
        assert!(valid(self.target), "target out of bounds at {}", self.target);
        assert_ne!(self.player, self.agent, "player and agent overlap");
        assert_ne!(self.player, self.box_pos, "player and box overlap");
        assert_ne!(self.agent, self.box_pos, "agent and box overlap");
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::initial()
    }
}
