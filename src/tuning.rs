//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here, grouped by the
//! entity or subsystem that owns it. Defaults reproduce the reference game.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Agent (player) tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTuning {
    /// Diameter used for clamping and contact tests
    pub extent: f32,
    /// Units moved per tick per held direction
    pub speed: f32,
    pub max_health: i32,
    pub starting_rapid_ammo: u32,
    pub starting_scatter_ammo: u32,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            extent: AGENT_EXTENT,
            speed: AGENT_SPEED,
            max_health: AGENT_MAX_HEALTH,
            starting_rapid_ammo: STARTING_RAPID_AMMO,
            starting_scatter_ammo: STARTING_SCATTER_AMMO,
        }
    }
}

/// Ally tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllyTuning {
    pub extent: f32,
    pub speed: f32,
    pub max_health: i32,
    /// Distance from the Agent the ally circles at
    pub orbit_radius: f32,
    /// Ticks between picking a new orbit angle
    pub reaim_ticks: u32,
    /// Fraction of the remaining distance covered per tick
    pub follow_lerp: f32,
}

impl Default for AllyTuning {
    fn default() -> Self {
        Self {
            extent: ALLY_EXTENT,
            speed: ALLY_SPEED,
            max_health: ALLY_MAX_HEALTH,
            orbit_radius: ALLY_ORBIT_RADIUS,
            reaim_ticks: ALLY_REAIM_TICKS,
            follow_lerp: ALLY_FOLLOW_LERP,
        }
    }
}

/// Adversary tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdversaryTuning {
    pub extent: f32,
    pub normal_speed: f32,
    pub enhanced_speed: f32,
    pub enhanced_trail_length: usize,
    /// Ticks the enhanced variant's callout stays visible
    pub callout_ticks: u32,
    /// Health drained per tick of contact
    pub contact_damage: i32,
}

impl Default for AdversaryTuning {
    fn default() -> Self {
        Self {
            extent: ADVERSARY_EXTENT,
            normal_speed: ADVERSARY_SPEED,
            enhanced_speed: ENHANCED_ADVERSARY_SPEED,
            enhanced_trail_length: ENHANCED_TRAIL_LENGTH,
            callout_ticks: ENHANCED_CALLOUT_TICKS,
            contact_damage: 1,
        }
    }
}

/// Projectile tuning, friendly and hostile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub radius: f32,
    pub speed: f32,
    pub trail_length: usize,
    pub hostile_radius: f32,
    pub hostile_speed: f32,
    pub hostile_damage: i32,
    /// Hostile shots survive this far outside the playfield
    pub hostile_offscreen_margin: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            radius: PROJECTILE_RADIUS,
            speed: PROJECTILE_SPEED,
            trail_length: PROJECTILE_TRAIL_LENGTH,
            hostile_radius: HOSTILE_RADIUS,
            hostile_speed: HOSTILE_SPEED,
            hostile_damage: HOSTILE_DAMAGE,
            hostile_offscreen_margin: HOSTILE_OFFSCREEN_MARGIN,
        }
    }
}

/// Weapon, ammo and loot tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub sidearm_cooldown: u32,
    pub rapid_cooldown: u32,
    pub scatter_cooldown: u32,
    /// Pellets per scatter shot; also the ammo cost
    pub scatter_pellets: u32,
    pub scatter_half_spread_deg: f32,
    pub out_of_ammo_ticks: u32,
    pub pickup_extent: f32,
    pub pickup_ammo: u32,
    /// Probability that a kill drops a pickup
    pub loot_chance: f64,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            sidearm_cooldown: SIDEARM_COOLDOWN,
            rapid_cooldown: RAPID_COOLDOWN,
            scatter_cooldown: SCATTER_COOLDOWN,
            scatter_pellets: SCATTER_PELLETS,
            scatter_half_spread_deg: SCATTER_HALF_SPREAD_DEG,
            out_of_ammo_ticks: OUT_OF_AMMO_TICKS,
            pickup_extent: PICKUP_EXTENT,
            pickup_ammo: PICKUP_AMMO,
            loot_chance: LOOT_CHANCE,
        }
    }
}

/// Warning/spawn scheduler tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerTuning {
    /// Idle ticks that must be exceeded before the next warning
    pub interval_ticks: u32,
    pub warning_ticks: u32,
    /// Probability a warning announces an adversary wave (else a barrage)
    pub wave_chance: f64,
    pub enhanced_chance: f64,
    pub adversary_spawn_margin: f32,
    pub barrage_spawn_margin: f32,
    pub barrage_size: u32,
    pub initial_spawn_count: u32,
    /// Allies may appear every this many rounds
    pub ally_round_interval: u32,
    /// Coin flip for allies after the first guaranteed one
    pub ally_respawn_chance: f64,
}

impl Default for SchedulerTuning {
    fn default() -> Self {
        Self {
            interval_ticks: WARNING_INTERVAL_TICKS,
            warning_ticks: WARNING_DURATION_TICKS,
            wave_chance: WAVE_WARNING_CHANCE,
            enhanced_chance: ENHANCED_CHANCE,
            adversary_spawn_margin: ADVERSARY_SPAWN_MARGIN,
            barrage_spawn_margin: BARRAGE_SPAWN_MARGIN,
            barrage_size: BARRAGE_SIZE,
            initial_spawn_count: 1,
            ally_round_interval: ALLY_ROUND_INTERVAL,
            ally_respawn_chance: ALLY_RESPAWN_CHANCE,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub agent: AgentTuning,
    pub ally: AllyTuning,
    pub adversary: AdversaryTuning,
    pub projectile: ProjectileTuning,
    pub weapon: WeaponTuning,
    pub scheduler: SchedulerTuning,
}
