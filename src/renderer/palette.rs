//! Colors for game elements (linear RGBA)

pub const BACKGROUND: [f32; 4] = [0.12, 0.12, 0.12, 1.0];
pub const START_BACKGROUND: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
pub const GAME_OVER_BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub const AGENT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const AGENT_HEALTH_BAR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const ALLY_BOUND: [f32; 4] = [0.59, 0.59, 0.59, 1.0];
pub const ALLY_FREE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const ALLY_HEALTH_BAR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
pub const ADVERSARY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const ADVERSARY_TRAIL: [f32; 4] = [1.0, 0.0, 0.0, 0.4];
pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
pub const PROJECTILE_TRAIL: [f32; 4] = [1.0, 1.0, 0.0, 0.4];
pub const HOSTILE_PROJECTILE: [f32; 4] = [1.0, 0.59, 0.0, 1.0];
pub const PICKUP_RAPID: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
pub const PICKUP_SCATTER: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

pub const WARNING_WAVE: [f32; 4] = [1.0, 0.0, 0.0, 0.59];
pub const WARNING_BARRAGE: [f32; 4] = [1.0, 0.39, 0.39, 0.59];

pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const TEXT_ALERT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const AIM_GUIDE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
