mod bounds;
mod consts;
mod model_helpers;
mod models;
mod update;

pub use bounds::{valid, BoundsOriginRoot, BOARD_BOUNDS};
pub use consts::*;
pub use model_helpers::ALL_DIRECTIONS;
pub use models::{
    Direction, GameChangeType, GameState, GameUpdate, MoveRejection, RoundOutcome, UserAction,
    Vec2, Winner,
};
pub use update::step;
pub(crate) use update::debug_assert_invariants;
