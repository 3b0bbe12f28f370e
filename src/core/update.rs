use tracing::debug;

use crate::core::bounds::valid;
use crate::core::{Direction, GameChangeType, GameState, GameUpdate, MoveRejection, Winner};

/// Applies one player move to `game` without mutating it.
pub fn step(game: &GameState, dir: Direction) -> GameUpdate {
    if !game.outcome.is_in_progress() {
        return GameUpdate::Rejected(MoveRejection::RoundOver);
    }

    let new_player = game.player + dir;
    if !valid(new_player) {
        return GameUpdate::Rejected(MoveRejection::OutOfBounds);
    }

    let mut next = game.clone();
    let change_type = if new_player == game.box_pos {
        let new_box = game.box_pos + dir;
        if !valid(new_box) || new_box == game.agent {
            return GameUpdate::Rejected(MoveRejection::BoxBlocked);
        }
        next.box_pos = new_box;
        next.player = new_player;
        GameChangeType::PlayerAndBoxMove
    } else if new_player == game.agent {
        return GameUpdate::Rejected(MoveRejection::BlockedByAgent);
    } else {
        next.player = new_player;
        GameChangeType::PlayerMove
    };

    next.settle_outcome(Winner::Player);
    debug_assert_invariants(&next);
    GameUpdate::NextState(next, change_type)
}

impl GameState {
    /// Moves the player in place. Rejected moves leave the state untouched.
    pub fn apply_player_move(&mut self, dir: Direction) -> GameUpdate {
        let update = step(self, dir);
        match &update {
            GameUpdate::NextState(next, change_type) => {
                debug!(?dir, ?change_type, player = %next.player, box_pos = %next.box_pos, "player moved");
                *self = next.clone();
            }
            GameUpdate::Rejected(reason) => {
                debug!(?dir, ?reason, "player move rejected");
            }
        }
        update
    }
}

pub(crate) fn debug_assert_invariants(game: &GameState) {
    if cfg!(debug_assertions) {
        game.assert_invariants();
    }
}
