//! Greedy one-ply push selection for the agent.
//!
//! Every tick the agent looks at each way the box could be pushed one cell,
//! keeps the pushes it can legally walk up to, and commits to the one leaving
//! the box closest to the target. Nothing is remembered between ticks.

use std::collections::HashSet;

use tracing::debug;

use crate::agent::path_search::shortest_path;
use crate::agent::push_options::{push_options, PushOption};
use crate::core::{debug_assert_invariants, valid, Direction, GameChangeType, GameState, Winner};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushPlan {
    pub option: PushOption,
    /// Steps from the agent to `option.approach`. Empty when already there.
    pub path: Vec<Direction>,
    /// Manhattan distance from `option.resulting` to the target.
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentDecision {
    Wait,
    Advance(PushPlan),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentUpdate {
    NextState(GameState, GameChangeType),
    Wait,
    RoundOver,
}

/// All pushes the agent could currently work toward, in direction order.
pub fn candidate_plans(game: &GameState) -> Vec<PushPlan> {
    let blocked = HashSet::from([game.player, game.box_pos]);

    push_options(game.box_pos)
        .into_iter()
        .filter(|option| {
            option.resulting != game.player
                && option.resulting != game.box_pos
                && option.approach != game.player
        })
        .filter_map(|option| {
            let path = shortest_path(game.agent, option.approach, &blocked)?;
            Some(PushPlan {
                option,
                path,
                score: option.resulting.manhattan(&game.target),
            })
        })
        .collect()
}

/// The candidate with the lowest score. The earliest candidate wins ties.
pub fn choose_push(game: &GameState) -> Option<PushPlan> {
    let mut best: Option<PushPlan> = None;
    for plan in candidate_plans(game) {
        if best.as_ref().is_none_or(|current| plan.score < current.score) {
            best = Some(plan);
        }
    }
    best
}

#[tracing::instrument(level = "debug", skip(game), fields(agent = %game.agent, box_pos = %game.box_pos))]
pub fn decide(game: &GameState) -> AgentDecision {
    if !game.outcome.is_in_progress() {
        return AgentDecision::Wait;
    }
    match choose_push(game) {
        Some(plan) => {
            debug!(
                direction = ?plan.option.direction,
                approach = %plan.option.approach,
                resulting = %plan.option.resulting,
                score = plan.score,
                steps = plan.path.len(),
                "agent chose push"
            );
            AgentDecision::Advance(plan)
        }
        None => {
            debug!("agent has no reachable push, waiting");
            AgentDecision::Wait
        }
    }
}

/// Carries out `decision` against `game`: one step along the plan's path, then
/// the push itself once the agent stands on the approach cell.
pub fn apply_decision(game: &GameState, decision: &AgentDecision) -> AgentUpdate {
    if !game.outcome.is_in_progress() {
        return AgentUpdate::RoundOver;
    }
    let AgentDecision::Advance(plan) = decision else {
        return AgentUpdate::Wait;
    };

    let option = plan.option;
    let mut next = game.clone();
    let mut change_type = GameChangeType::AgentMove;

    if let Some(&dir) = plan.path.first() {
        next.agent = game.agent + dir;
    }

    if next.agent == option.approach && valid(option.resulting) && option.resulting != next.player {
        next.box_pos = option.resulting;
        next.agent = option.resulting - option.direction;
        change_type = GameChangeType::AgentAndBoxMove;
    }

    if next == *game {
        return AgentUpdate::Wait;
    }

    next.settle_outcome(Winner::Agent);
    debug_assert_invariants(&next);
    AgentUpdate::NextState(next, change_type)
}

/// Decides and applies one agent tick against `game`.
pub fn agent_step(game: &GameState) -> AgentUpdate {
    apply_decision(game, &decide(game))
}

impl GameState {
    pub fn apply_agent_tick(&mut self) -> AgentUpdate {
        let update = agent_step(self);
        if let AgentUpdate::NextState(next, change_type) = &update {
            debug!(?change_type, agent = %next.agent, box_pos = %next.box_pos, "agent moved");
            *self = next.clone();
        }
        update
    }
}
