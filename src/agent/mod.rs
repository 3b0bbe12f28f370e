mod path_search;
mod policy;
mod push_options;

pub use path_search::{follow_path, shortest_path};
pub use policy::{
    agent_step, apply_decision, candidate_plans, choose_push, decide, AgentDecision, AgentUpdate,
    PushPlan,
};
pub use push_options::{push_options, PushOption};
