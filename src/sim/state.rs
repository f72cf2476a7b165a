//! Simulation state and entity records
//!
//! `SimulationState` is the single aggregate every subsystem reads and
//! mutates; there is no other mutable state in the engine.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{Countdown, FrameClock};
use super::playfield::Playfield;
use super::scheduler::{WarningKind, WarningScheduler};
use super::weapon::{Weapon, WeaponMode};
use crate::heading_to;
use crate::settings::Settings;
use crate::tuning::{AdversaryTuning, AgentTuning, AllyTuning, ProjectileTuning, Tuning};

/// Top-level controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Instruction screen, waiting for any key
    NotStarted,
    /// Active gameplay
    Running,
    /// Agent died; terminal until the simulation is rebuilt
    Over,
}

/// Bounded position history, oldest sample evicted first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<Vec2>,
    cap: usize,
}

impl Trail {
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap + 1),
            cap,
        }
    }

    pub fn record(&mut self, pos: Vec2) {
        self.points.push_back(pos);
        while self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    /// Samples from oldest to newest
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

/// The user-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub pos: Vec2,
    pub extent: f32,
    pub speed: f32,
    /// May dip below zero on the tick the Agent dies
    pub health: i32,
    pub weapon: Weapon,
}

impl Agent {
    pub fn new(pos: Vec2, tuning: &AgentTuning) -> Self {
        Self {
            pos,
            extent: tuning.extent,
            speed: tuning.speed,
            health: tuning.max_health,
            weapon: Weapon::new(
                WeaponMode::Sidearm,
                tuning.starting_rapid_ammo,
                tuning.starting_scatter_ammo,
            ),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Rescuable companion: bound at spawn, freed on contact with the Agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ally {
    pub id: u32,
    pub pos: Vec2,
    pub extent: f32,
    pub speed: f32,
    pub health: i32,
    pub cooldown: Countdown,
    /// Captured (stationary, not firing) until the Agent touches it
    pub bound: bool,
    /// Radians around the Agent the ally is currently heading for
    pub orbit_angle: f32,
    pub orbit_radius: f32,
    /// Ticks until a new orbit angle is drawn
    pub reaim: Countdown,
}

impl Ally {
    pub fn new(id: u32, pos: Vec2, orbit_angle: f32, tuning: &AllyTuning) -> Self {
        Self {
            id,
            pos,
            extent: tuning.extent,
            speed: tuning.speed,
            health: tuning.max_health,
            cooldown: Countdown::idle(),
            bound: true,
            orbit_angle,
            orbit_radius: tuning.orbit_radius,
            reaim: Countdown::idle(),
        }
    }
}

/// Adversary variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdversaryKind {
    Normal,
    /// Faster variant that leaves a trail and shouts on arrival
    Enhanced { trail: Trail, callout: Countdown },
}

/// Hostile pursuing entity, killed by any single projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    pub id: u32,
    pub pos: Vec2,
    pub extent: f32,
    pub speed: f32,
    pub health: i32,
    pub kind: AdversaryKind,
}

impl Adversary {
    pub fn normal(id: u32, pos: Vec2, tuning: &AdversaryTuning) -> Self {
        Self {
            id,
            pos,
            extent: tuning.extent,
            speed: tuning.normal_speed,
            health: 1,
            kind: AdversaryKind::Normal,
        }
    }

    pub fn enhanced(id: u32, pos: Vec2, tuning: &AdversaryTuning) -> Self {
        Self {
            id,
            pos,
            extent: tuning.extent,
            speed: tuning.enhanced_speed,
            health: 1,
            kind: AdversaryKind::Enhanced {
                trail: Trail::new(tuning.enhanced_trail_length),
                callout: Countdown::with_ticks(tuning.callout_ticks),
            },
        }
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self.kind, AdversaryKind::Enhanced { .. })
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Shot fired by the Agent or an Ally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Fixed at creation (radians)
    pub heading: f32,
    pub trail: Trail,
}

impl Projectile {
    pub fn new(pos: Vec2, heading: f32, tuning: &ProjectileTuning) -> Self {
        Self {
            pos,
            radius: tuning.radius,
            speed: tuning.speed,
            heading,
            trail: Trail::new(tuning.trail_length),
        }
    }
}

/// Barrage shot aimed once, at spawn, at the Agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileProjectile {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub heading: f32,
}

impl HostileProjectile {
    pub fn aimed_at(pos: Vec2, target: Vec2, tuning: &ProjectileTuning) -> Self {
        Self {
            pos,
            radius: tuning.hostile_radius,
            speed: tuning.hostile_speed,
            heading: heading_to(pos, target),
        }
    }
}

/// Ammo pool a pickup refills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    RapidAmmo,
    ScatterAmmo,
}

/// Ammo crate dropped by a killed adversary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub extent: f32,
    pub kind: PickupKind,
}

/// Something that happened during the last tick, for presentation layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Started,
    ShotFired { pellets: u32, by_ally: bool },
    OutOfAmmo { mode: WeaponMode },
    AdversaryKilled { id: u32, pos: Vec2 },
    LootDropped { kind: PickupKind, pos: Vec2 },
    PickupCollected { kind: PickupKind, amount: u32 },
    AgentDamaged { amount: i32 },
    AllySpawned { id: u32 },
    AllyFreed { id: u32 },
    AllyLost { id: u32 },
    WarningStarted { kind: WarningKind },
    WarningResolved { kind: WarningKind, round: u32 },
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub clock: FrameClock,
    /// Every random draw comes from here
    pub rng: Pcg32,
    pub agent: Agent,
    pub allies: Vec<Ally>,
    pub adversaries: Vec<Adversary>,
    pub projectiles: Vec<Projectile>,
    pub hostile_projectiles: Vec<HostileProjectile>,
    pub pickups: Vec<Pickup>,
    pub scheduler: WarningScheduler,
    /// Adversaries killed this run
    pub kills: u32,
    /// "Out of ammo" display timer
    pub out_of_ammo: Countdown,
    /// Last known pointer position (aim target)
    pub pointer: Vec2,
    /// Events emitted during the last tick
    pub events: Vec<SimEvent>,
    next_id: u32,
}

impl SimulationState {
    /// Fresh, not-yet-started simulation
    pub fn new(playfield: Playfield, tuning: Tuning, seed: u64) -> Self {
        let center = playfield.center();
        Self {
            playfield,
            tuning,
            phase: GamePhase::NotStarted,
            clock: FrameClock::default(),
            rng: Pcg32::seed_from_u64(seed),
            agent: Agent::new(center, &tuning.agent),
            allies: Vec::new(),
            adversaries: Vec::new(),
            projectiles: Vec::new(),
            hostile_projectiles: Vec::new(),
            pickups: Vec::new(),
            scheduler: WarningScheduler::new(&tuning.scheduler),
            kills: 0,
            out_of_ammo: Countdown::idle(),
            pointer: center,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.playfield, settings.tuning, settings.seed)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    pub fn has_bound_ally(&self) -> bool {
        self.allies.iter().any(|a| a.bound)
    }

    /// Spawn a normal adversary (test and tooling helper)
    pub fn spawn_adversary(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.adversaries
            .push(Adversary::normal(id, pos, &self.tuning.adversary));
        id
    }

    /// Spawn a bound ally at `pos` with a random orbit angle
    pub fn spawn_ally(&mut self, pos: Vec2) -> u32 {
        use rand::Rng;

        let id = self.next_entity_id();
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        self.allies.push(Ally::new(id, pos, angle, &self.tuning.ally));
        self.emit(SimEvent::AllySpawned { id });
        id
    }

    /// Spawn a pickup (loot drop)
    pub fn spawn_pickup(&mut self, pos: Vec2, kind: PickupKind) {
        let id = self.next_entity_id();
        self.pickups.push(Pickup {
            id,
            pos,
            extent: self.tuning.weapon.pickup_extent,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn state() -> SimulationState {
        SimulationState::new(Playfield::new(800.0, 600.0), Tuning::default(), 1)
    }

    #[test]
    fn test_new_state_centers_agent() {
        let state = state();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.agent.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.agent.health, AGENT_MAX_HEALTH);
        assert_eq!(state.agent.weapon.mode, WeaponMode::Sidearm);
        assert_eq!(state.agent.weapon.rapid_ammo, STARTING_RAPID_AMMO);
        assert!(state.adversaries.is_empty());
    }

    #[test]
    fn test_trail_evicts_oldest() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.record(Vec2::splat(i as f32));
        }
        let points: Vec<Vec2> = trail.points().collect();
        assert_eq!(points, vec![Vec2::splat(2.0), Vec2::splat(3.0), Vec2::splat(4.0)]);
    }

    #[test]
    fn test_adversary_variants() {
        let tuning = AdversaryTuning::default();
        let normal = Adversary::normal(1, Vec2::ZERO, &tuning);
        let enhanced = Adversary::enhanced(2, Vec2::ZERO, &tuning);

        assert_eq!(normal.health, 1);
        assert_eq!(enhanced.health, 1);
        assert_eq!(normal.speed, ADVERSARY_SPEED);
        assert_eq!(enhanced.speed, ENHANCED_ADVERSARY_SPEED);
        assert!(!normal.is_enhanced());
        match enhanced.kind {
            AdversaryKind::Enhanced { trail, callout } => {
                assert!(trail.is_empty());
                assert_eq!(trail.cap(), ENHANCED_TRAIL_LENGTH);
                assert_eq!(callout.remaining(), ENHANCED_CALLOUT_TICKS);
            }
            AdversaryKind::Normal => panic!("expected enhanced variant"),
        }
    }

    #[test]
    fn test_hostile_projectile_aims_once() {
        let shot = HostileProjectile::aimed_at(
            Vec2::new(-10.0, 300.0),
            Vec2::new(400.0, 300.0),
            &ProjectileTuning::default(),
        );
        assert!(shot.heading.abs() < 1e-6);
        assert_eq!(shot.radius, HOSTILE_RADIUS);
    }

    #[test]
    fn test_spawned_ally_is_bound() {
        let mut state = state();
        let id = state.spawn_ally(state.playfield.center());
        let ally = &state.allies[0];
        assert_eq!(ally.id, id);
        assert!(ally.bound);
        assert_eq!(ally.health, ALLY_MAX_HEALTH);
        assert!((0.0..std::f32::consts::TAU).contains(&ally.orbit_angle));
        assert_eq!(state.events, vec![SimEvent::AllySpawned { id }]);
    }

    proptest! {
        #[test]
        fn prop_trail_never_exceeds_cap(cap in 1usize..40, samples in 0usize..200) {
            let mut trail = Trail::new(cap);
            for i in 0..samples {
                trail.record(Vec2::new(i as f32, 0.0));
            }
            prop_assert_eq!(trail.len(), samples.min(cap));
            if samples > 0 {
                prop_assert_eq!(trail.points().last(), Some(Vec2::new((samples - 1) as f32, 0.0)));
            }
        }
    }
}
