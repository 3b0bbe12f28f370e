use std::time::Duration;

use crate::core::models::Vec2;

pub const GRID_SIZE: i32 = 5;

pub const PLAYER_START: Vec2 = Vec2 { x: 0, y: 0 };
pub const AGENT_START: Vec2 = Vec2 { x: 4, y: 4 };
pub const BOX_START: Vec2 = Vec2 { x: 2, y: 2 };
pub const TARGET: Vec2 = Vec2 { x: 3, y: 3 };

pub const DEFAULT_AGENT_TICK: Duration = Duration::from_millis(500);
