//! Headless rounds against a random player. Deterministic for a given seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::agent::AgentUpdate;
use crate::core::{GameChangeType, GameState, GameUpdate, Winner, ALL_DIRECTIONS};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: u64,
    pub max_ticks: usize,
    pub player_moves_per_tick: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            rounds: 100,
            seed: 0,
            max_ticks: 200,
            player_moves_per_tick: 1,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RoundReport {
    pub round: usize,
    pub winner: Option<Winner>,
    pub agent_ticks: usize,
    pub player_moves: usize,
    pub rejected_moves: usize,
    pub agent_pushes: usize,
    pub final_state: GameState,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub player_wins: usize,
    pub agent_wins: usize,
    pub undecided: usize,
    pub rounds: Vec<RoundReport>,
}

pub fn run_simulation(config: SimulationConfig) -> SimulationReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let rounds: Vec<RoundReport> = (0..config.rounds)
        .map(|round| play_round(&mut rng, round, &config))
        .collect();

    let count = |winner: Option<Winner>| rounds.iter().filter(|r| r.winner == winner).count();
    let player_wins = count(Some(Winner::Player));
    let agent_wins = count(Some(Winner::Agent));
    let undecided = count(None);
    let report = SimulationReport {
        config,
        player_wins,
        agent_wins,
        undecided,
        rounds,
    };
    info!(
        player_wins = report.player_wins,
        agent_wins = report.agent_wins,
        undecided = report.undecided,
        "simulation finished"
    );
    report
}

pub fn play_round(rng: &mut StdRng, round: usize, config: &SimulationConfig) -> RoundReport {
    let mut game = GameState::initial();
    let mut report = RoundReport {
        round,
        winner: None,
        agent_ticks: 0,
        player_moves: 0,
        rejected_moves: 0,
        agent_pushes: 0,
        final_state: game.clone(),
    };

    while report.agent_ticks < config.max_ticks && game.outcome.is_in_progress() {
        for _ in 0..config.player_moves_per_tick {
            let Some(&dir) = ALL_DIRECTIONS.choose(rng) else {
                break;
            };
            match game.apply_player_move(dir) {
                GameUpdate::NextState(..) => report.player_moves += 1,
                GameUpdate::Rejected(_) => report.rejected_moves += 1,
            }
            if !game.outcome.is_in_progress() {
                break;
            }
        }
        if !game.outcome.is_in_progress() {
            break;
        }

        report.agent_ticks += 1;
        if let AgentUpdate::NextState(_, change_type) = game.apply_agent_tick() {
            if change_type == GameChangeType::AgentAndBoxMove {
                report.agent_pushes += 1;
            }
        }
    }

    report.winner = game.outcome.winner();
    report.final_state = game;
    debug!(round, winner = ?report.winner, ticks = report.agent_ticks, "round finished");
    report
}
