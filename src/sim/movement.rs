//! Per-tick position updates
//!
//! Agent: input impulses, clamped to the playfield.
//! Adversaries: straight pursuit of the Agent, re-aimed every tick.
//! Allies: stationary while bound, then ease toward a point orbiting the Agent.
//! Projectiles: constant velocity along the heading chosen at creation.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{AdversaryKind, SimEvent, SimulationState};
use crate::{heading_to, step_along};

/// Held movement directions for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Sum of unit impulses scaled by `speed`.
    /// Diagonals are not normalized, so they cover √2 × speed.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.left {
            v.x -= speed;
        }
        if self.right {
            v.x += speed;
        }
        if self.up {
            v.y -= speed;
        }
        if self.down {
            v.y += speed;
        }
        v
    }
}

/// Move the Agent and tick its weapon cooldown
pub fn move_agent(state: &mut SimulationState, intent: MoveIntent) {
    let agent = &mut state.agent;
    let next = agent.pos + intent.velocity(agent.speed);
    agent.pos = state.playfield.clamp_body(next, agent.extent);
    agent.weapon.cooldown.advance();
}

/// Free allies the Agent touches; orbit-follow the free ones
pub fn move_allies(state: &mut SimulationState) {
    let agent_pos = state.agent.pos;
    let agent_half = state.agent.extent / 2.0;
    let reaim_ticks = state.tuning.ally.reaim_ticks;
    let lerp = state.tuning.ally.follow_lerp;

    for ally in state.allies.iter_mut() {
        if ally.bound {
            if ally.pos.distance(agent_pos) < ally.extent / 2.0 + agent_half {
                ally.bound = false;
                log::info!("Ally {} freed", ally.id);
                state.events.push(SimEvent::AllyFreed { id: ally.id });
            }
            continue;
        }

        ally.reaim.advance();
        if !ally.reaim.is_running() {
            ally.orbit_angle = state.rng.random_range(0.0..std::f32::consts::TAU);
            ally.reaim.start(reaim_ticks);
        }
        let target = agent_pos + step_along(ally.orbit_angle, ally.orbit_radius);
        ally.pos = ally.pos.lerp(target, lerp);
    }
}

/// Chase the Agent; enhanced adversaries also record trails and run callouts
pub fn move_adversaries(state: &mut SimulationState) {
    let agent_pos = state.agent.pos;

    for adversary in state.adversaries.iter_mut() {
        let heading = heading_to(adversary.pos, agent_pos);
        adversary.pos += step_along(heading, adversary.speed);

        if let AdversaryKind::Enhanced { trail, callout } = &mut adversary.kind {
            trail.record(adversary.pos);
            callout.advance();
        }
    }
}

/// Straight-line motion for friendly and hostile shots
pub fn move_projectiles(state: &mut SimulationState) {
    for shot in state.projectiles.iter_mut() {
        shot.trail.record(shot.pos);
        shot.pos += step_along(shot.heading, shot.speed);
    }
    for shot in state.hostile_projectiles.iter_mut() {
        shot.pos += step_along(shot.heading, shot.speed);
    }
}

/// Movement phase of a tick, in dependency order
pub fn advance_entities(state: &mut SimulationState, intent: MoveIntent) {
    move_agent(state, intent);
    move_allies(state);
    move_projectiles(state);
    move_adversaries(state);
}
