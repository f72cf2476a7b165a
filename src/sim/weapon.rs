//! Weapon state machine
//!
//! A weapon is `ready` when its cooldown has expired and `cooling` otherwise.
//! Firing while cooling is silently ignored. Ammo-gated modes that cannot pay
//! for a shot raise the out-of-ammo signal and leave the cooldown untouched.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::Countdown;
use super::state::{Adversary, Projectile, SimEvent, SimulationState};
use crate::heading_to;
use crate::tuning::{ProjectileTuning, WeaponTuning};

/// Firing mode selected by the Agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponMode {
    /// One shot, unlimited ammo
    #[default]
    Sidearm,
    /// Fast single shots, one rapid round each
    Rapid,
    /// Fan of pellets, paid for from the scatter pool
    Scatter,
}

impl WeaponMode {
    /// Map a number-key slot (1-3) to a mode
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(WeaponMode::Sidearm),
            2 => Some(WeaponMode::Rapid),
            3 => Some(WeaponMode::Scatter),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeaponMode::Sidearm => "Pistol",
            WeaponMode::Rapid => "Machine Gun",
            WeaponMode::Scatter => "Shotgun",
        }
    }
}

/// Result of a fire attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired { pellets: u32 },
    CoolingDown,
    OutOfAmmo,
}

/// Cooldown, mode and ammo pools of a shooter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub mode: WeaponMode,
    pub cooldown: Countdown,
    pub rapid_ammo: u32,
    pub scatter_ammo: u32,
}

impl Weapon {
    pub fn new(mode: WeaponMode, rapid_ammo: u32, scatter_ammo: u32) -> Self {
        Self {
            mode,
            cooldown: Countdown::idle(),
            rapid_ammo,
            scatter_ammo,
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.cooldown.is_running()
    }

    /// Remaining ammo for the active mode (`None` = unlimited)
    pub fn ammo(&self) -> Option<u32> {
        match self.mode {
            WeaponMode::Sidearm => None,
            WeaponMode::Rapid => Some(self.rapid_ammo),
            WeaponMode::Scatter => Some(self.scatter_ammo),
        }
    }

    /// Try to fire toward `heading`, pushing new projectiles into `out`
    pub fn try_fire(
        &mut self,
        origin: Vec2,
        heading: f32,
        weapons: &WeaponTuning,
        projectiles: &ProjectileTuning,
        out: &mut Vec<Projectile>,
    ) -> FireOutcome {
        if !self.is_ready() {
            return FireOutcome::CoolingDown;
        }

        match self.mode {
            WeaponMode::Sidearm => {
                out.push(Projectile::new(origin, heading, projectiles));
                self.cooldown.start(weapons.sidearm_cooldown);
                FireOutcome::Fired { pellets: 1 }
            }
            WeaponMode::Rapid => {
                if self.rapid_ammo == 0 {
                    return FireOutcome::OutOfAmmo;
                }
                out.push(Projectile::new(origin, heading, projectiles));
                self.cooldown.start(weapons.rapid_cooldown);
                self.rapid_ammo -= 1;
                FireOutcome::Fired { pellets: 1 }
            }
            WeaponMode::Scatter => {
                let pellets = weapons.scatter_pellets;
                if self.scatter_ammo < pellets {
                    return FireOutcome::OutOfAmmo;
                }
                out.extend(
                    scatter_headings(heading, pellets, weapons.scatter_half_spread_deg)
                        .map(|h| Projectile::new(origin, h, projectiles)),
                );
                self.cooldown.start(weapons.scatter_cooldown);
                self.scatter_ammo -= pellets;
                FireOutcome::Fired { pellets }
            }
        }
    }
}

/// Pellet headings spread linearly over `center ± half_spread_deg`
pub fn scatter_headings(
    center: f32,
    pellets: u32,
    half_spread_deg: f32,
) -> impl Iterator<Item = f32> {
    let half = half_spread_deg.to_radians();
    (0..pellets).map(move |i| {
        if pellets <= 1 {
            center
        } else {
            let t = i as f32 / (pellets - 1) as f32;
            center - half + 2.0 * half * t
        }
    })
}

/// Nearest live adversary by Euclidean distance; ties keep list order
pub fn nearest_adversary(from: Vec2, adversaries: &[Adversary]) -> Option<&Adversary> {
    let mut best: Option<(&Adversary, f32)> = None;
    for adversary in adversaries.iter().filter(|a| a.is_alive()) {
        let d = from.distance(adversary.pos);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((adversary, d)),
        }
    }
    best.map(|(a, _)| a)
}

/// Agent fire attempt aimed at the current pointer position
pub fn fire_agent(state: &mut SimulationState) {
    let origin = state.agent.pos;
    let heading = heading_to(origin, state.pointer);
    let mode = state.agent.weapon.mode;

    let outcome = state.agent.weapon.try_fire(
        origin,
        heading,
        &state.tuning.weapon,
        &state.tuning.projectile,
        &mut state.projectiles,
    );

    match outcome {
        FireOutcome::Fired { pellets } => state.emit(SimEvent::ShotFired {
            pellets,
            by_ally: false,
        }),
        FireOutcome::OutOfAmmo => {
            state.out_of_ammo.start(state.tuning.weapon.out_of_ammo_ticks);
            log::debug!("Out of ammo for {}", mode.display_name());
            state.emit(SimEvent::OutOfAmmo { mode });
        }
        FireOutcome::CoolingDown => {}
    }
}

/// Freed allies count down, then auto-fire at the nearest adversary.
/// With no target the shot is skipped and retried next tick.
pub fn fire_allies(state: &mut SimulationState) {
    let cooldown = state.tuning.weapon.sidearm_cooldown;

    for ally in state.allies.iter_mut().filter(|a| !a.bound) {
        if ally.cooldown.advance() {
            continue;
        }
        let Some(target) = nearest_adversary(ally.pos, &state.adversaries) else {
            continue;
        };
        let heading = heading_to(ally.pos, target.pos);
        state
            .projectiles
            .push(Projectile::new(ally.pos, heading, &state.tuning.projectile));
        ally.cooldown.start(cooldown);
        state.events.push(SimEvent::ShotFired {
            pellets: 1,
            by_ally: true,
        });
    }
}
