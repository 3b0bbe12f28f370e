use serde::{Deserialize, Serialize};

/// A board coordinate. `x` is the column, `y` is the row, growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Agent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    #[default]
    InProgress,
    Won(Winner),
}

/// Every position on the board plus the round outcome. This is also the
/// snapshot handed to the presentation shell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub player: Vec2,
    pub agent: Vec2,
    #[serde(rename = "box")]
    pub box_pos: Vec2,
    pub target: Vec2,
    pub outcome: RoundOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Rejected(MoveRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
    AgentMove,
    AgentAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    RoundOver,
    OutOfBounds,
    BlockedByAgent,
    BoxBlocked,
}
