//! Demo/attract-mode driver
//!
//! Produces the input a reasonable player would give: shoot the nearest
//! adversary, back off when one gets close, otherwise go free captured
//! allies and collect ammo.

use glam::Vec2;

use super::movement::MoveIntent;
use super::state::SimulationState;
use super::tick::TickInput;
use super::weapon::{WeaponMode, nearest_adversary};

/// Back away from adversaries closer than this
const RETREAT_DISTANCE: f32 = 120.0;
/// Ignore axis offsets smaller than this when steering
const STEER_DEADZONE: f32 = 4.0;
/// Prefer the scatter gun when at least this many adversaries are alive
const SCATTER_CROWD: usize = 3;

/// Build this tick's input from the current state
pub fn autopilot_input(state: &SimulationState, base: &TickInput) -> TickInput {
    let agent = &state.agent;
    let mut input = TickInput {
        timestamp_ms: base.timestamp_ms,
        ..Default::default()
    };

    let target = nearest_adversary(agent.pos, &state.adversaries);

    if let Some(target) = target {
        input.pointer = Some(target.pos);
        input.fire = true;

        let weapon = &agent.weapon;
        let crowd = state.adversaries.len() >= SCATTER_CROWD;
        input.select_weapon = Some(
            if crowd && weapon.scatter_ammo >= state.tuning.weapon.scatter_pellets {
                WeaponMode::Scatter
            } else if weapon.rapid_ammo > 0 {
                WeaponMode::Rapid
            } else {
                WeaponMode::Sidearm
            },
        );

        if target.pos.distance(agent.pos) < RETREAT_DISTANCE {
            let away = agent.pos + (agent.pos - target.pos);
            input.movement = steer(agent.pos, away);
            return input;
        }
    }

    // Nothing close: free a captured ally first, then pick up ammo
    let goal = state
        .allies
        .iter()
        .find(|a| a.bound)
        .map(|a| a.pos)
        .or_else(|| nearest(agent.pos, state.pickups.iter().map(|p| p.pos)));
    if let Some(goal) = goal {
        input.movement = steer(agent.pos, goal);
    }

    input
}

fn nearest(from: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| {
        from.distance(*a)
            .partial_cmp(&from.distance(*b))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

fn steer(from: Vec2, to: Vec2) -> MoveIntent {
    let delta = to - from;
    MoveIntent {
        up: delta.y < -STEER_DEADZONE,
        down: delta.y > STEER_DEADZONE,
        left: delta.x < -STEER_DEADZONE,
        right: delta.x > STEER_DEADZONE,
    }
}
