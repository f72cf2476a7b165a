//! Overlay and screen layout
//!
//! Geometry and text for everything drawn on top of the playfield: warning
//! bands, the aiming reticle and guide line, and the start/game-over screens.

use glam::Vec2;
use serde::Serialize;

use super::palette;
use crate::sim::{Playfield, WarningKind};

/// Warning bands cover this fraction of the width on each side
const WARNING_SIDE_FRACTION: f32 = 0.2;
/// Height of the top and bottom warning strips (kept clear for HUD text)
const WARNING_STRIP_HEIGHT: f32 = 50.0;
/// Side of the square reticle drawn at the pointer
const RETICLE_SIZE: f32 = 20.0;
/// Dash and gap length of the guide line
const GUIDE_DASH: [f32; 2] = [5.0, 5.0];

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }
}

/// Full-screen overlay shown while a warning counts down
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarningOverlay {
    pub kind: WarningKind,
    pub banner: &'static str,
    pub color: [f32; 4],
    pub bands: [Rect; 4],
    pub remaining_ticks: u32,
}

impl WarningOverlay {
    pub fn new(kind: WarningKind, remaining_ticks: u32, field: &Playfield) -> Self {
        let side = field.width * WARNING_SIDE_FRACTION;
        let strip = WARNING_STRIP_HEIGHT.min(field.height / 2.0);
        let (banner, color) = match kind {
            WarningKind::AdversaryWave => ("Enemies are coming!", palette::WARNING_WAVE),
            WarningKind::Barrage => ("Attack Warning!", palette::WARNING_BARRAGE),
        };
        Self {
            kind,
            banner,
            color,
            bands: [
                Rect::new(0.0, 0.0, side, field.height),
                Rect::new(field.width - side, 0.0, side, field.height),
                Rect::new(0.0, 0.0, field.width, strip),
                Rect::new(0.0, field.height - strip, field.width, strip),
            ],
            remaining_ticks,
        }
    }
}

/// Reticle at the pointer plus a dashed line back to the Agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AimGuide {
    pub reticle: Rect,
    pub line_from: Vec2,
    pub line_to: Vec2,
    pub dash: [f32; 2],
    pub color: [f32; 4],
}

impl AimGuide {
    pub fn new(agent: Vec2, pointer: Vec2) -> Self {
        Self {
            reticle: Rect::centered(pointer, RETICLE_SIZE),
            line_from: agent,
            line_to: pointer,
            dash: GUIDE_DASH,
            color: palette::AIM_GUIDE,
        }
    }
}

pub const TITLE: &str = "Battlefield Survival Game";

/// Instruction screen body
pub const INSTRUCTIONS: &str = "Controls:
  Move: Arrow keys / WASD
  Shoot: Spacebar or Mouse Left Click (hold for continuous fire)
  Switch Weapons: Number keys 1 (Pistol), 2 (Machine Gun), 3 (Shotgun)

Weapon Descriptions:
  Pistol: 2 shots per second, unlimited ammo
  Machine Gun: starts with 100 rounds, approx. 10 shots per second
  Shotgun: fires 7 pellets per shot, consumes 7 rounds

Other:
  After warnings, enemies or attack bullets will appear; enemy count increases each time.
  Every 3 rounds, a bound partner may appear at the center, displaying 'Help Me!'.
  When an enemy is killed, there's a chance to drop a supply item (with a prompt) that increases ammo by 30 when picked up.
  The enhanced enemy moves faster, leaves a red trail, and shouts 'Die!' upon appearance.

New Aiming Assistance:
  A white aiming reticle appears at the mouse position, connected to the player with a dashed line.

Press any key to start the game";

/// Survival time rounded to one decimal, as shown on screen
pub fn survival_time_text(elapsed_secs: f64) -> String {
    format!("Survival Time: {:.1} seconds", elapsed_secs)
}

/// Game-over screen lines, top to bottom
pub fn game_over_lines(elapsed_secs: f64, kills: u32) -> [String; 4] {
    [
        "Game Over".to_string(),
        survival_time_text(elapsed_secs),
        format!("Kills: {}", kills),
        "Press F5 to Restart".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_bands_frame_the_playfield() {
        let field = Playfield::new(800.0, 600.0);
        let overlay = WarningOverlay::new(WarningKind::AdversaryWave, 30, &field);

        assert_eq!(overlay.banner, "Enemies are coming!");
        assert_eq!(overlay.bands[0], Rect::new(0.0, 0.0, 160.0, 600.0));
        assert_eq!(overlay.bands[1], Rect::new(640.0, 0.0, 160.0, 600.0));
        assert_eq!(overlay.bands[2], Rect::new(0.0, 0.0, 800.0, 50.0));
        assert_eq!(overlay.bands[3], Rect::new(0.0, 550.0, 800.0, 50.0));
    }

    #[test]
    fn test_barrage_overlay_uses_lighter_color() {
        let field = Playfield::new(800.0, 600.0);
        let overlay = WarningOverlay::new(WarningKind::Barrage, 1, &field);
        assert_eq!(overlay.banner, "Attack Warning!");
        assert_eq!(overlay.color, palette::WARNING_BARRAGE);
    }

    #[test]
    fn test_reticle_centered_on_pointer() {
        let guide = AimGuide::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 50.0));
        assert_eq!(guide.reticle, Rect::new(90.0, 40.0, 20.0, 20.0));
        assert_eq!(guide.line_to, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_instructions_end_with_start_prompt() {
        let lines: Vec<&str> = INSTRUCTIONS.lines().collect();
        assert_eq!(lines[0], "Controls:");
        assert!(lines.contains(&"New Aiming Assistance:"));
        assert_eq!(lines.last(), Some(&"Press any key to start the game"));
    }

    #[test]
    fn test_game_over_text() {
        let lines = game_over_lines(12.345, 7);
        assert_eq!(lines[1], "Survival Time: 12.3 seconds");
        assert_eq!(lines[2], "Kills: 7");
    }
}
