//! Shared game state for the two actors: the player, driven by input events,
//! and the agent, driven by its own ticker thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{select, Sender};
use tracing::{debug, info, warn};

use crate::agent::{apply_decision, decide, AgentDecision, AgentUpdate};
use crate::core::{Direction, GameChangeType, GameState, GameUpdate, DEFAULT_AGENT_TICK};

#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            tick_interval: DEFAULT_AGENT_TICK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Applied(GameChangeType),
    Waited,
    RoundOver,
    /// The state changed between planning and commit; the decision was dropped.
    Stale,
}

struct SessionState {
    game: GameState,
    /// Bumped on every accepted mutation, including reset.
    revision: u64,
}

/// The single lock guarding the board. Cloning shares the same state.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionState>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::from_state(GameState::initial())
    }

    pub fn from_state(game: GameState) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(SessionState { game, revision: 0 })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_snapshot(&self) -> GameState {
        self.lock().game.clone()
    }

    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    pub fn submit_player_intent(&self, dir: Direction) -> GameUpdate {
        let mut state = self.lock();
        let update = state.game.apply_player_move(dir);
        if let GameUpdate::NextState(..) = update {
            state.revision += 1;
            if let Some(winner) = state.game.outcome.winner() {
                info!(%winner, "round decided by player push");
            }
        }
        update
    }

    pub fn submit_reset(&self) {
        let mut state = self.lock();
        state.game.reset();
        state.revision += 1;
        info!(revision = state.revision, "round reset");
    }

    /// Plans against a snapshot taken under the lock, then commits only if
    /// nothing touched the state in between.
    pub fn agent_tick(&self) -> TickOutcome {
        let (game, planned_at) = {
            let state = self.lock();
            (state.game.clone(), state.revision)
        };
        let decision = decide(&game);
        self.commit_agent_decision(planned_at, &decision)
    }

    pub fn commit_agent_decision(&self, planned_at: u64, decision: &AgentDecision) -> TickOutcome {
        let mut state = self.lock();
        if state.revision != planned_at {
            debug!(planned_at, current = state.revision, "discarding stale agent decision");
            return TickOutcome::Stale;
        }
        match apply_decision(&state.game, decision) {
            AgentUpdate::NextState(next, change_type) => {
                state.game = next;
                state.revision += 1;
                if let Some(winner) = state.game.outcome.winner() {
                    info!(%winner, "round decided by agent push");
                }
                TickOutcome::Applied(change_type)
            }
            AgentUpdate::Wait => TickOutcome::Waited,
            AgentUpdate::RoundOver => TickOutcome::RoundOver,
        }
    }
}

impl Default for SharedSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Background thread running [`SharedSession::agent_tick`] on a fixed cadence.
/// Stopped and joined on drop.
pub struct AgentTicker {
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AgentTicker {
    pub fn spawn(session: SharedSession, interval: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded::<()>(1);
        let ticker = crossbeam_channel::tick(interval);

        let handle = std::thread::spawn(move || {
            info!(?interval, "agent ticker started");
            let mut running = true;
            while running {
                select! {
                    recv(shutdown_rx) -> _ => running = false,
                    recv(ticker) -> _ => {
                        let outcome = session.agent_tick();
                        if outcome == TickOutcome::Stale {
                            debug!("agent tick skipped");
                        }
                    }
                }
            }
            info!("agent ticker stopped");
        });

        AgentTicker {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        // Dropping the sender disconnects the channel and wakes the select.
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("agent ticker thread panicked");
            }
        }
    }
}

impl Drop for AgentTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The core's face toward the presentation shell.
pub struct GameSession {
    shared: SharedSession,
    ticker: AgentTicker,
}

impl GameSession {
    pub fn start(config: SessionConfig) -> Self {
        let shared = SharedSession::new();
        let ticker = AgentTicker::spawn(shared.clone(), config.tick_interval);
        GameSession { shared, ticker }
    }

    pub fn get_snapshot(&self) -> GameState {
        self.shared.get_snapshot()
    }

    pub fn submit_player_intent(&self, dir: Direction) -> GameUpdate {
        self.shared.submit_player_intent(dir)
    }

    pub fn submit_reset(&self) {
        self.shared.submit_reset()
    }

    pub fn shutdown(mut self) {
        self.ticker.stop();
    }
}
