#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use crate::agent::AgentUpdate;
    use crate::core::*;

    #[derive(Debug, Clone, Copy)]
    enum Action {
        Player(Direction),
        AgentTick,
        Reset,
    }

    fn random_action(rng: &mut StdRng) -> Action {
        match rng.gen_range(0..100) {
            0 => Action::Reset,
            1..=49 => Action::AgentTick,
            _ => Action::Player(*ALL_DIRECTIONS.choose(rng).expect("four directions")),
        }
    }

    fn apply(game: &mut GameState, action: Action) {
        match action {
            Action::Player(dir) => {
                game.apply_player_move(dir);
            }
            Action::AgentTick => {
                game.apply_agent_tick();
            }
            Action::Reset => game.reset(),
        }
    }

    #[test]
    fn random_play_keeps_entities_on_board_and_apart() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut game = GameState::initial();
            for _ in 0..300 {
                let action = random_action(&mut rng);
                apply(&mut game, action);
                game.assert_invariants();
            }
        }
    }

    #[test]
    fn decided_rounds_stay_frozen_until_reset() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut decided_rounds = 0;

        for _ in 0..200 {
            let mut game = GameState::initial();
            for _ in 0..400 {
                if !game.outcome.is_in_progress() {
                    break;
                }
                let action = match random_action(&mut rng) {
                    Action::Reset => Action::AgentTick,
                    other => other,
                };
                apply(&mut game, action);
            }
            if game.outcome.is_in_progress() {
                continue;
            }
            decided_rounds += 1;
            assert!(game.is_won());

            let frozen = game.clone();
            for dir in ALL_DIRECTIONS {
                assert_eq!(game.apply_player_move(dir), GameUpdate::Rejected(MoveRejection::RoundOver));
            }
            assert_eq!(game.apply_agent_tick(), AgentUpdate::RoundOver);
            assert_eq!(game, frozen);

            game.reset();
            assert_eq!(game, GameState::initial());
        }

        assert!(decided_rounds > 0, "no random round was decided");
    }

    #[test]
    fn winner_matches_the_actor_that_landed_the_box() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let mut game = GameState::initial();
            for _ in 0..400 {
                let action = random_action(&mut rng);
                if matches!(action, Action::Reset) {
                    continue;
                }
                let before = game.outcome;
                apply(&mut game, action);
                if before.is_in_progress() && !game.outcome.is_in_progress() {
                    let expected = match action {
                        Action::Player(_) => Winner::Player,
                        _ => Winner::Agent,
                    };
                    assert_eq!(game.outcome, RoundOutcome::Won(expected));
                    break;
                }
            }
        }
    }
}
