//! Battlefield Survival - A top-down arcade survival simulation
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (movement, weapons, collisions, spawning, game state)
//! - `renderer`: Read-only frame snapshots and overlay layout for a drawing backend
//! - `platform`: Raw input events to per-tick commands
//! - `settings`: Run configuration loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Reference game constants (one tick = one rendered frame)
pub mod consts {
    /// Nominal frame rate the tick timers are calibrated for
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Agent (player) defaults
    pub const AGENT_EXTENT: f32 = 30.0;
    pub const AGENT_SPEED: f32 = 3.0;
    pub const AGENT_MAX_HEALTH: i32 = 100;
    pub const STARTING_RAPID_AMMO: u32 = 100;
    pub const STARTING_SCATTER_AMMO: u32 = 100;

    /// Ally defaults
    pub const ALLY_EXTENT: f32 = 25.0;
    pub const ALLY_SPEED: f32 = 2.0;
    pub const ALLY_MAX_HEALTH: i32 = 50;
    pub const ALLY_ORBIT_RADIUS: f32 = 50.0;
    /// Ticks between orbit re-aims (about half a second)
    pub const ALLY_REAIM_TICKS: u32 = 30;
    /// Fraction of the remaining distance covered per tick
    pub const ALLY_FOLLOW_LERP: f32 = 0.05;

    /// Adversary defaults
    pub const ADVERSARY_EXTENT: f32 = 30.0;
    pub const ADVERSARY_SPEED: f32 = 1.5;
    pub const ENHANCED_ADVERSARY_SPEED: f32 = 3.0;
    pub const ENHANCED_TRAIL_LENGTH: usize = 15;
    pub const ENHANCED_CALLOUT_TICKS: u32 = 60;

    /// Projectiles
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;
    pub const PROJECTILE_TRAIL_LENGTH: usize = 10;
    pub const HOSTILE_RADIUS: f32 = 6.0;
    pub const HOSTILE_SPEED: f32 = 5.0;
    pub const HOSTILE_DAMAGE: i32 = 10;
    /// Hostile projectiles live this far past the playfield edge
    pub const HOSTILE_OFFSCREEN_MARGIN: f32 = 20.0;

    /// Weapons
    pub const SIDEARM_COOLDOWN: u32 = 30;
    pub const RAPID_COOLDOWN: u32 = 6;
    pub const SCATTER_COOLDOWN: u32 = 20;
    pub const SCATTER_PELLETS: u32 = 7;
    /// Half-width of the scatter fan in degrees
    pub const SCATTER_HALF_SPREAD_DEG: f32 = 15.0;
    pub const OUT_OF_AMMO_TICKS: u32 = 60;

    /// Pickups
    pub const PICKUP_EXTENT: f32 = 20.0;
    pub const PICKUP_AMMO: u32 = 30;
    pub const LOOT_CHANCE: f64 = 0.1;

    /// Warning scheduler
    pub const WARNING_INTERVAL_TICKS: u32 = 200;
    pub const WARNING_DURATION_TICKS: u32 = 60;
    pub const WAVE_WARNING_CHANCE: f64 = 0.7;
    pub const ENHANCED_CHANCE: f64 = 0.2;
    pub const ADVERSARY_SPAWN_MARGIN: f32 = 30.0;
    pub const BARRAGE_SPAWN_MARGIN: f32 = 10.0;
    pub const BARRAGE_SIZE: u32 = 5;
    pub const ALLY_ROUND_INTERVAL: u32 = 3;
    pub const ALLY_RESPAWN_CHANCE: f64 = 0.5;
}

/// Heading (radians) pointing from `from` toward `to`
#[inline]
pub fn heading_to(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Displacement of length `distance` along `heading`
#[inline]
pub fn step_along(heading: f32, distance: f32) -> Vec2 {
    Vec2::new(distance * heading.cos(), distance * heading.sin())
}
