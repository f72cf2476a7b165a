//! Frame-synchronous simulation module
//!
//! All gameplay logic lives here. This module must stay presentation-free:
//! - One tick per rendered frame, integer tick timers only
//! - Seeded RNG only
//! - Removal by rebuilding lists, never by splicing mid-iteration
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod movement;
pub mod playfield;
pub mod scheduler;
pub mod state;
pub mod tick;
pub mod weapon;

pub use clock::{Countdown, FrameClock};
pub use collision::{circles_overlap, resolve_collisions};
pub use movement::MoveIntent;
pub use playfield::{Edge, Playfield};
pub use scheduler::{SchedulerPhase, WarningKind, WarningScheduler};
pub use state::{
    Adversary, AdversaryKind, Agent, Ally, GamePhase, HostileProjectile, Pickup, PickupKind,
    Projectile, SimEvent, SimulationState, Trail,
};
pub use tick::{TickInput, tick};
pub use weapon::{FireOutcome, Weapon, WeaponMode};
