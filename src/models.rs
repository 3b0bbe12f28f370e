use crate::core::{GameState, MoveRejection};

pub struct GameRenderState {
    pub game: GameState,
    pub last_rejection: Option<MoveRejection>,
    pub tick_interval_ms: u128,
}
