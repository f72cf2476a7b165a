//! Warning/spawn scheduler
//!
//! Loops `idle → warning → idle`. After enough idle ticks a warning is
//! announced; when its countdown expires the round counter advances and the
//! warning resolves into an adversary wave or a hostile barrage. Every
//! `ally_round_interval` rounds a bound ally may appear at the center.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::Countdown;
use super::state::{Adversary, HostileProjectile, SimEvent, SimulationState};
use crate::tuning::SchedulerTuning;

/// What an active warning will resolve into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    AdversaryWave,
    Barrage,
}

/// Scheduler phase. Idle and warning can never be active together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerPhase {
    /// Ticks since the last warning resolved
    Idle { elapsed: u32 },
    Warning {
        kind: WarningKind,
        remaining: Countdown,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningScheduler {
    pub phase: SchedulerPhase,
    /// Resolved warnings so far
    pub round: u32,
    /// Adversaries the next wave will contain; only ever grows
    pub spawn_count: u32,
}

impl WarningScheduler {
    pub fn new(tuning: &SchedulerTuning) -> Self {
        Self {
            phase: SchedulerPhase::Idle { elapsed: 0 },
            round: 0,
            spawn_count: tuning.initial_spawn_count,
        }
    }

    /// Kind of the warning currently being announced
    pub fn active_warning(&self) -> Option<WarningKind> {
        match self.phase {
            SchedulerPhase::Warning { kind, .. } => Some(kind),
            SchedulerPhase::Idle { .. } => None,
        }
    }
}

/// Advance the scheduler by one tick
pub fn advance_scheduler(state: &mut SimulationState) {
    let tuning = state.tuning.scheduler;

    let begin = match &mut state.scheduler.phase {
        SchedulerPhase::Idle { elapsed } => {
            *elapsed += 1;
            *elapsed > tuning.interval_ticks
        }
        SchedulerPhase::Warning { .. } => false,
    };
    if begin {
        begin_warning(state);
    }

    let expired = match &mut state.scheduler.phase {
        SchedulerPhase::Warning { kind, remaining } => {
            remaining.advance();
            (!remaining.is_running()).then_some(*kind)
        }
        SchedulerPhase::Idle { .. } => None,
    };
    if let Some(kind) = expired {
        resolve_warning(state, kind);
    }
}

fn begin_warning(state: &mut SimulationState) {
    let tuning = state.tuning.scheduler;
    let kind = if state.rng.random::<f64>() < tuning.wave_chance {
        WarningKind::AdversaryWave
    } else {
        WarningKind::Barrage
    };
    state.scheduler.phase = SchedulerPhase::Warning {
        kind,
        remaining: Countdown::with_ticks(tuning.warning_ticks),
    };
    log::info!("Warning: {:?} incoming", kind);
    state.emit(SimEvent::WarningStarted { kind });
}

/// Close the round: spawn what the warning announced, return to idle and
/// run the ally cadence.
pub fn resolve_warning(state: &mut SimulationState, kind: WarningKind) {
    state.scheduler.round += 1;
    let round = state.scheduler.round;

    match kind {
        WarningKind::AdversaryWave => {
            let count = state.scheduler.spawn_count;
            spawn_adversary_wave(state, count);
            state.scheduler.spawn_count += 1;
            log::info!("Round {}: wave of {} adversaries", round, count);
        }
        WarningKind::Barrage => {
            spawn_barrage(state);
            log::info!("Round {}: barrage", round);
        }
    }

    state.scheduler.phase = SchedulerPhase::Idle { elapsed: 0 };
    state.emit(SimEvent::WarningResolved { kind, round });

    maybe_spawn_ally(state, round);
}

/// `count` adversaries just outside random edges; each may be enhanced
pub fn spawn_adversary_wave(state: &mut SimulationState, count: u32) {
    let tuning = state.tuning;
    for _ in 0..count {
        let pos = state
            .playfield
            .random_edge_point(tuning.scheduler.adversary_spawn_margin, &mut state.rng);
        let enhanced = state.rng.random::<f64>() < tuning.scheduler.enhanced_chance;
        let id = state.next_entity_id();
        let adversary = if enhanced {
            Adversary::enhanced(id, pos, &tuning.adversary)
        } else {
            Adversary::normal(id, pos, &tuning.adversary)
        };
        state.adversaries.push(adversary);
    }
}

/// Hostile shots from random edges, each aimed where the Agent is now
pub fn spawn_barrage(state: &mut SimulationState) {
    let tuning = state.tuning;
    let target = state.agent.pos;
    for _ in 0..tuning.scheduler.barrage_size {
        let pos = state
            .playfield
            .random_edge_point(tuning.scheduler.barrage_spawn_margin, &mut state.rng);
        state
            .hostile_projectiles
            .push(HostileProjectile::aimed_at(pos, target, &tuning.projectile));
    }
}

/// The first ally round always spawns one; later ally rounds need no
/// bound ally present and a successful coin flip.
fn maybe_spawn_ally(state: &mut SimulationState, round: u32) {
    let tuning = state.tuning.scheduler;
    let interval = tuning.ally_round_interval;
    if interval == 0 || round == 0 || round % interval != 0 {
        return;
    }

    let spawn = round == interval
        || (!state.has_bound_ally() && state.rng.random::<f64>() < tuning.ally_respawn_chance);
    if spawn {
        let center = state.playfield.center();
        let id = state.spawn_ally(center);
        log::info!("Round {}: ally {} captured at center", round, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Playfield;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_with(f: impl FnOnce(&mut SchedulerTuning)) -> SimulationState {
        let mut tuning = Tuning::default();
        f(&mut tuning.scheduler);
        SimulationState::new(Playfield::new(800.0, 600.0), tuning, 77)
    }

    #[test]
    fn test_warning_starts_after_interval_exceeded() {
        let mut state = state_with(|_| {});
        for _ in 0..WARNING_INTERVAL_TICKS {
            advance_scheduler(&mut state);
        }
        assert_eq!(state.scheduler.active_warning(), None);

        advance_scheduler(&mut state);
        assert!(state.scheduler.active_warning().is_some());
        match state.scheduler.phase {
            SchedulerPhase::Warning { remaining, .. } => {
                assert_eq!(remaining.remaining(), WARNING_DURATION_TICKS - 1)
            }
            SchedulerPhase::Idle { .. } => panic!("expected warning"),
        }
    }

    #[test]
    fn test_warning_resolves_after_duration() {
        let mut state = state_with(|s| s.wave_chance = 1.0);
        for _ in 0..WARNING_INTERVAL_TICKS + 1 {
            advance_scheduler(&mut state);
        }
        assert_eq!(state.scheduler.active_warning(), Some(WarningKind::AdversaryWave));

        for _ in 0..WARNING_DURATION_TICKS - 2 {
            advance_scheduler(&mut state);
        }
        assert_eq!(state.scheduler.round, 0);

        advance_scheduler(&mut state);
        assert_eq!(state.scheduler.round, 1);
        assert_eq!(state.scheduler.phase, SchedulerPhase::Idle { elapsed: 0 });
        assert_eq!(state.adversaries.len(), 1);
        assert_eq!(state.scheduler.spawn_count, 2);
    }

    #[test]
    fn test_warning_kind_follows_roll() {
        let mut state = state_with(|s| s.wave_chance = 0.0);
        begin_warning(&mut state);
        assert_eq!(state.scheduler.active_warning(), Some(WarningKind::Barrage));
        assert_eq!(
            state.events,
            vec![SimEvent::WarningStarted {
                kind: WarningKind::Barrage
            }]
        );
    }

    #[test]
    fn test_wave_spawns_count_outside_bounds() {
        let mut state = state_with(|_| {});
        state.scheduler.spawn_count = 6;

        resolve_warning(&mut state, WarningKind::AdversaryWave);

        assert_eq!(state.adversaries.len(), 6);
        assert_eq!(state.scheduler.spawn_count, 7);
        for adversary in &state.adversaries {
            let p = adversary.pos;
            assert!(!state.playfield.contains(p));
            let margin = ADVERSARY_SPAWN_MARGIN;
            assert!(p.x == -margin || p.x == 800.0 + margin || p.y == -margin || p.y == 600.0 + margin);
            assert_eq!(adversary.health, 1);
        }
    }

    #[test]
    fn test_enhanced_share_follows_chance() {
        let mut state = state_with(|s| s.enhanced_chance = 1.0);
        spawn_adversary_wave(&mut state, 4);
        assert!(state.adversaries.iter().all(|a| a.is_enhanced()));

        let mut state = state_with(|s| s.enhanced_chance = 0.0);
        spawn_adversary_wave(&mut state, 4);
        assert!(state.adversaries.iter().all(|a| !a.is_enhanced()));
    }

    #[test]
    fn test_barrage_aims_at_agent_position() {
        let mut state = state_with(|_| {});
        state.agent.pos = Vec2::new(100.0, 500.0);

        resolve_warning(&mut state, WarningKind::Barrage);

        assert_eq!(state.hostile_projectiles.len(), BARRAGE_SIZE as usize);
        assert_eq!(state.scheduler.spawn_count, 1);
        for shot in &state.hostile_projectiles {
            assert!(!state.playfield.contains(shot.pos));
            let expected = crate::heading_to(shot.pos, state.agent.pos);
            assert!((shot.heading - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_third_round_always_spawns_bound_ally_at_center() {
        let mut state = state_with(|s| s.ally_respawn_chance = 0.0);
        state.scheduler.round = 2;

        resolve_warning(&mut state, WarningKind::Barrage);

        assert_eq!(state.scheduler.round, 3);
        assert_eq!(state.allies.len(), 1);
        assert_eq!(state.allies[0].pos, Vec2::new(400.0, 300.0));
        assert!(state.allies[0].bound);
    }

    #[test]
    fn test_non_multiple_rounds_never_spawn_allies() {
        let mut state = state_with(|s| s.ally_respawn_chance = 1.0);
        for _ in 0..2 {
            resolve_warning(&mut state, WarningKind::Barrage);
        }
        assert!(state.allies.is_empty());
    }

    #[test]
    fn test_later_rounds_skip_while_ally_still_bound() {
        let mut state = state_with(|s| s.ally_respawn_chance = 1.0);
        state.scheduler.round = 5;
        state.spawn_ally(Vec2::new(400.0, 300.0));

        resolve_warning(&mut state, WarningKind::Barrage);
        assert_eq!(state.allies.len(), 1);

        state.allies[0].bound = false;
        state.scheduler.round = 8;
        resolve_warning(&mut state, WarningKind::Barrage);
        assert_eq!(state.allies.len(), 2);
    }

    #[test]
    fn test_later_rounds_respect_coin_flip() {
        let mut state = state_with(|s| s.ally_respawn_chance = 0.0);
        state.scheduler.round = 5;
        resolve_warning(&mut state, WarningKind::Barrage);
        assert!(state.allies.is_empty());
    }
}
