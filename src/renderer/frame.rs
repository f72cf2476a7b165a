//! Read-only frame snapshot
//!
//! Everything a presentation layer needs to draw one frame, captured from
//! the simulation state without mutating it.

use glam::Vec2;
use serde::Serialize;

use super::overlay::{self, AimGuide, WarningOverlay};
use super::palette;
use crate::sim::{AdversaryKind, GamePhase, PickupKind, SchedulerPhase, SimulationState, Trail};

/// Opacity of the oldest trail sample; newer samples ramp up to full
const TRAIL_MIN_ALPHA: f32 = 0.15;

/// A circle or square body with its fill color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub pos: Vec2,
    /// Radius for circles, half side for squares
    pub extent: f32,
    pub color: [f32; 4],
}

/// Health bar above a body; `fraction` is clamped to 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthBar {
    pub fraction: f32,
    pub color: [f32; 4],
}

impl HealthBar {
    fn new(health: i32, max: i32, color: [f32; 4]) -> Self {
        let fraction = if max > 0 {
            (health as f32 / max as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { fraction, color }
    }
}

/// One faded trail sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailDot {
    pub pos: Vec2,
    pub color: [f32; 4],
}

/// Fade a trail from oldest (faint) to newest (base alpha)
fn fade_trail(trail: &Trail, color: [f32; 4]) -> Vec<TrailDot> {
    let len = trail.len().max(1) as f32;
    trail
        .points()
        .enumerate()
        .map(|(i, pos)| {
            let t = (i + 1) as f32 / len;
            let alpha = color[3] * (TRAIL_MIN_ALPHA + (1.0 - TRAIL_MIN_ALPHA) * t);
            TrailDot {
                pos,
                color: [color[0], color[1], color[2], alpha],
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllyView {
    pub body: BodyView,
    pub health: HealthBar,
    /// "Help Me!" while still bound
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdversaryView {
    pub body: BodyView,
    pub trail: Vec<TrailDot>,
    /// "Die!" while the arrival callout runs
    pub callout: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub body: BodyView,
    pub trail: Vec<TrailDot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickupView {
    pub body: BodyView,
    pub label: &'static str,
}

/// Heads-up display lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub survival_time: String,
    pub kills: String,
    pub weapon: String,
    pub health: String,
    /// Flashing "Out of Ammo!" notice
    pub out_of_ammo: Option<&'static str>,
}

impl Hud {
    fn new(state: &SimulationState, elapsed_secs: f64) -> Self {
        let weapon = &state.agent.weapon;
        let ammo = match weapon.ammo() {
            Some(count) => count.to_string(),
            None => "∞".to_string(),
        };
        Self {
            survival_time: overlay::survival_time_text(elapsed_secs),
            kills: format!("Kills: {}", state.kills),
            weapon: format!(
                "Weapon: {}  Ammo: {}",
                weapon.mode.display_name(),
                ammo
            ),
            health: format!("Health: {}", state.agent.health.max(0)),
            out_of_ammo: state.out_of_ammo.is_running().then_some("Out of Ammo!"),
        }
    }
}

/// Full-screen text shown outside a running game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenText {
    pub background: [f32; 4],
    pub lines: Vec<String>,
}

/// Snapshot of one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub frame: u64,
    pub elapsed_secs: f64,
    pub hud: Hud,
    pub agent: BodyView,
    pub agent_health: HealthBar,
    pub allies: Vec<AllyView>,
    pub adversaries: Vec<AdversaryView>,
    pub projectiles: Vec<ProjectileView>,
    pub hostile_projectiles: Vec<BodyView>,
    pub pickups: Vec<PickupView>,
    pub warning: Option<WarningOverlay>,
    pub aim: AimGuide,
    /// Start or game-over screen; `None` while running
    pub screen: Option<ScreenText>,
}

impl FrameSnapshot {
    /// Capture the state for drawing at wall-clock `now_ms`
    pub fn capture(state: &SimulationState, now_ms: f64) -> Self {
        let elapsed_secs = state.clock.elapsed_secs(now_ms);
        let tuning = &state.tuning;

        let allies = state
            .allies
            .iter()
            .map(|ally| AllyView {
                body: BodyView {
                    pos: ally.pos,
                    extent: ally.extent,
                    color: if ally.bound {
                        palette::ALLY_BOUND
                    } else {
                        palette::ALLY_FREE
                    },
                },
                health: HealthBar::new(
                    ally.health,
                    tuning.ally.max_health,
                    palette::ALLY_HEALTH_BAR,
                ),
                label: ally.bound.then_some("Help Me!"),
            })
            .collect();

        let adversaries = state
            .adversaries
            .iter()
            .map(|adversary| {
                let (trail, callout) = match &adversary.kind {
                    AdversaryKind::Normal => (Vec::new(), None),
                    AdversaryKind::Enhanced { trail, callout } => (
                        fade_trail(trail, palette::ADVERSARY_TRAIL),
                        callout.is_running().then_some("Die!"),
                    ),
                };
                AdversaryView {
                    body: BodyView {
                        pos: adversary.pos,
                        extent: adversary.extent,
                        color: palette::ADVERSARY,
                    },
                    trail,
                    callout,
                }
            })
            .collect();

        let projectiles = state
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                body: BodyView {
                    pos: p.pos,
                    extent: p.radius,
                    color: palette::PROJECTILE,
                },
                trail: fade_trail(&p.trail, palette::PROJECTILE_TRAIL),
            })
            .collect();

        let hostile_projectiles = state
            .hostile_projectiles
            .iter()
            .map(|h| BodyView {
                pos: h.pos,
                extent: h.radius,
                color: palette::HOSTILE_PROJECTILE,
            })
            .collect();

        let pickups = state
            .pickups
            .iter()
            .map(|pickup| {
                let (color, label) = match pickup.kind {
                    PickupKind::RapidAmmo => (palette::PICKUP_RAPID, "Machine Gun Ammo"),
                    PickupKind::ScatterAmmo => (palette::PICKUP_SCATTER, "Shotgun Ammo"),
                };
                PickupView {
                    body: BodyView {
                        pos: pickup.pos,
                        extent: pickup.extent,
                        color,
                    },
                    label,
                }
            })
            .collect();

        let warning = match state.scheduler.phase {
            SchedulerPhase::Warning { kind, remaining } => Some(
                WarningOverlay::new(kind, remaining.remaining(), &state.playfield),
            ),
            SchedulerPhase::Idle { .. } => None,
        };

        let screen = match state.phase {
            GamePhase::NotStarted => Some(ScreenText {
                background: palette::START_BACKGROUND,
                lines: std::iter::once(overlay::TITLE)
                    .chain(overlay::INSTRUCTIONS.lines())
                    .map(str::to_string)
                    .collect(),
            }),
            GamePhase::Over => Some(ScreenText {
                background: palette::GAME_OVER_BACKGROUND,
                lines: overlay::game_over_lines(elapsed_secs, state.kills).to_vec(),
            }),
            GamePhase::Running => None,
        };

        Self {
            phase: state.phase,
            frame: state.clock.frame,
            elapsed_secs,
            hud: Hud::new(state, elapsed_secs),
            agent: BodyView {
                pos: state.agent.pos,
                extent: state.agent.extent,
                color: palette::AGENT,
            },
            agent_health: HealthBar::new(
                state.agent.health,
                tuning.agent.max_health,
                palette::AGENT_HEALTH_BAR,
            ),
            allies,
            adversaries,
            projectiles,
            hostile_projectiles,
            pickups,
            warning,
            aim: AimGuide::new(state.agent.pos, state.pointer),
            screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Adversary, Playfield, WeaponMode};
    use crate::tuning::Tuning;

    fn state() -> SimulationState {
        SimulationState::new(Playfield::new(800.0, 600.0), Tuning::default(), 9)
    }

    #[test]
    fn test_start_screen_before_running() {
        let snapshot = FrameSnapshot::capture(&state(), 0.0);
        let screen = snapshot.screen.expect("start screen");
        assert_eq!(screen.lines[0], "Battlefield Survival Game");
        assert_eq!(snapshot.elapsed_secs, 0.0);
    }

    #[test]
    fn test_hud_shows_infinite_sidearm_ammo() {
        let mut state = state();
        state.phase = GamePhase::Running;
        state.clock.start(1_000.0);

        let snapshot = FrameSnapshot::capture(&state, 3_500.0);
        assert!(snapshot.screen.is_none());
        assert_eq!(snapshot.hud.survival_time, "Survival Time: 2.5 seconds");
        assert_eq!(snapshot.hud.weapon, "Weapon: Pistol  Ammo: ∞");

        state.agent.weapon.mode = WeaponMode::Scatter;
        state.out_of_ammo.start(10);
        let snapshot = FrameSnapshot::capture(&state, 3_500.0);
        assert_eq!(snapshot.hud.weapon, "Weapon: Shotgun  Ammo: 100");
        assert_eq!(snapshot.hud.out_of_ammo, Some("Out of Ammo!"));
    }

    #[test]
    fn test_bound_ally_asks_for_help() {
        let mut state = state();
        state.spawn_ally(Vec2::new(400.0, 300.0));
        let snapshot = FrameSnapshot::capture(&state, 0.0);
        assert_eq!(snapshot.allies[0].label, Some("Help Me!"));
        assert_eq!(snapshot.allies[0].body.color, palette::ALLY_BOUND);

        state.allies[0].bound = false;
        let snapshot = FrameSnapshot::capture(&state, 0.0);
        assert_eq!(snapshot.allies[0].label, None);
    }

    #[test]
    fn test_enhanced_adversary_calls_out() {
        let mut state = state();
        let id = state.next_entity_id();
        let adversary =
            Adversary::enhanced(id, Vec2::new(10.0, 10.0), &state.tuning.adversary);
        state.adversaries.push(adversary);

        let snapshot = FrameSnapshot::capture(&state, 0.0);
        assert_eq!(snapshot.adversaries[0].callout, Some("Die!"));
    }

    #[test]
    fn test_trail_fades_toward_oldest() {
        let mut trail = Trail::new(4);
        for x in 0..4 {
            trail.record(Vec2::new(x as f32, 0.0));
        }
        let dots = fade_trail(&trail, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(dots.len(), 4);
        assert!(dots[0].color[3] < dots[3].color[3]);
        assert_eq!(dots[3].color[3], 1.0);
    }

    #[test]
    fn test_health_bar_clamps() {
        assert_eq!(HealthBar::new(-5, 100, palette::TEXT).fraction, 0.0);
        assert_eq!(HealthBar::new(50, 100, palette::TEXT).fraction, 0.5);
    }
}
