//! Per-frame simulation tick
//!
//! Game-state controller plus the fixed order every running tick follows:
//! movement, weapon fire, collision resolution, the warning scheduler, and
//! finally the termination check.

use glam::Vec2;

use super::autopilot::autopilot_input;
use super::collision::resolve_collisions;
use super::movement::{MoveIntent, advance_entities};
use super::scheduler::advance_scheduler;
use super::state::{GamePhase, SimEvent, SimulationState};
use super::weapon::{WeaponMode, fire_agent, fire_allies};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement directions
    pub movement: MoveIntent,
    /// Fire this tick (held mouse button or a discrete key press)
    pub fire: bool,
    /// Weapon selected this tick
    pub select_weapon: Option<WeaponMode>,
    /// Latest pointer position, if it moved
    pub pointer: Option<Vec2>,
    /// Any key pressed this tick (starts the run)
    pub start: bool,
    /// Wall-clock milliseconds when the input was sampled
    pub timestamp_ms: f64,
    /// Idle/demo mode - the autopilot plays
    pub idle_mode: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimulationState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.phase = GamePhase::Running;
                state.clock.start(input.timestamp_ms);
                log::info!(
                    "Run started on a {}x{} playfield",
                    state.playfield.width,
                    state.playfield.height
                );
                state.emit(SimEvent::Started);
            }
            return;
        }
        GamePhase::Over => return,
        GamePhase::Running => {}
    }

    let autopiloted;
    let input = if input.idle_mode {
        autopiloted = autopilot_input(state, input);
        &autopiloted
    } else {
        input
    };

    state.clock.advance();
    // Ticked before firing so a timer started this tick stays full for the next frame
    state.out_of_ammo.advance();

    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }
    if let Some(mode) = input.select_weapon {
        state.agent.weapon.mode = mode;
    }

    advance_entities(state, input.movement);

    if input.fire {
        fire_agent(state);
    }
    fire_allies(state);

    resolve_collisions(state);

    advance_scheduler(state);

    if state.agent.is_dead() {
        state.phase = GamePhase::Over;
        log::info!(
            "Game over after {} ticks with {} kills",
            state.clock.frame,
            state.kills
        );
        state.emit(SimEvent::GameOver);
    }
}
