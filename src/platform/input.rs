//! Keyboard and pointer input
//!
//! Held inputs (movement keys, mouse button) persist across ticks; one-shot
//! inputs (Space, weapon keys, "any key") are consumed by the next
//! `take_tick_input` call.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::{MoveIntent, TickInput, WeaponMode};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
    Digit1,
    Digit2,
    Digit3,
    /// Anything else; still counts as "any key" for starting
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "KeyW" => Key::W,
            "KeyA" => Key::A,
            "KeyS" => Key::S,
            "KeyD" => Key::D,
            "Space" => Key::Space,
            "Digit1" | "Numpad1" => Key::Digit1,
            "Digit2" | "Numpad2" => Key::Digit2,
            "Digit3" | "Numpad3" => Key::Digit3,
            _ => Key::Other,
        }
    }

    fn weapon_slot(&self) -> Option<u8> {
        match self {
            Key::Digit1 => Some(1),
            Key::Digit2 => Some(2),
            Key::Digit3 => Some(3),
            _ => None,
        }
    }
}

/// Accumulated input between two ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    mouse_held: bool,
    pointer: Option<Vec2>,
    // One-shot inputs, cleared after each tick
    any_key_pressed: bool,
    fire_pressed: bool,
    selected: Option<WeaponMode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat arrives as repeated key_down: Space keeps firing, other keys count once
        if !self.held.insert(key) {
            if key == Key::Space {
                self.fire_pressed = true;
            }
            return;
        }
        self.any_key_pressed = true;
        if key == Key::Space {
            self.fire_pressed = true;
        }
        if let Some(mode) = key.weapon_slot().and_then(WeaponMode::from_slot) {
            self.selected = Some(mode);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Primary mouse button pressed or released
    pub fn mouse_button(&mut self, down: bool) {
        self.mouse_held = down;
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    fn is_held(&self, a: Key, b: Key) -> bool {
        self.held.contains(&a) || self.held.contains(&b)
    }

    /// Current movement bits (arrows or WASD)
    pub fn movement(&self) -> MoveIntent {
        MoveIntent {
            up: self.is_held(Key::ArrowUp, Key::W),
            down: self.is_held(Key::ArrowDown, Key::S),
            left: self.is_held(Key::ArrowLeft, Key::A),
            right: self.is_held(Key::ArrowRight, Key::D),
        }
    }

    /// Sample input for the next tick and clear one-shot inputs
    pub fn take_tick_input(&mut self, now_ms: f64) -> TickInput {
        let input = TickInput {
            movement: self.movement(),
            fire: self.mouse_held || self.fire_pressed,
            select_weapon: self.selected,
            pointer: self.pointer,
            start: self.any_key_pressed,
            timestamp_ms: now_ms,
            idle_mode: false,
        };

        self.any_key_pressed = false;
        self.fire_pressed = false;
        self.selected = None;

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_both_move() {
        let mut input = InputState::new();
        input.key_down(Key::W);
        input.key_down(Key::ArrowRight);
        let intent = input.movement();
        assert!(intent.up && intent.right);
        assert!(!intent.down && !intent.left);

        input.key_up(Key::W);
        assert!(!input.movement().up);
    }

    #[test]
    fn test_space_fires_once_mouse_fires_while_held() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        assert!(input.take_tick_input(0.0).fire);
        assert!(!input.take_tick_input(16.0).fire);

        input.mouse_button(true);
        assert!(input.take_tick_input(32.0).fire);
        assert!(input.take_tick_input(48.0).fire);
        input.mouse_button(false);
        assert!(!input.take_tick_input(64.0).fire);
    }

    #[test]
    fn test_digit_keys_select_weapon_once() {
        let mut input = InputState::new();
        input.key_down(Key::from_code("Digit3"));
        let first = input.take_tick_input(0.0);
        assert_eq!(first.select_weapon, Some(WeaponMode::Scatter));
        assert!(first.start);

        let second = input.take_tick_input(16.0);
        assert_eq!(second.select_weapon, None);
        assert!(!second.start);
    }

    #[test]
    fn test_key_repeat_is_not_a_new_press() {
        let mut input = InputState::new();
        input.key_down(Key::Other);
        input.take_tick_input(0.0);
        input.key_down(Key::Other);
        assert!(!input.take_tick_input(16.0).start);
    }

    #[test]
    fn test_held_space_repeat_keeps_firing() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        assert!(input.take_tick_input(0.0).fire);

        input.key_down(Key::Space);
        let repeat = input.take_tick_input(16.0);
        assert!(repeat.fire);
        assert!(!repeat.start);

        input.key_up(Key::Space);
        assert!(!input.take_tick_input(32.0).fire);
    }

    #[test]
    fn test_pointer_is_sticky() {
        let mut input = InputState::new();
        assert_eq!(input.take_tick_input(0.0).pointer, None);
        input.pointer_moved(Vec2::new(10.0, 20.0));
        assert_eq!(input.take_tick_input(16.0).pointer, Some(Vec2::new(10.0, 20.0)));
        assert_eq!(input.take_tick_input(32.0).pointer, Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_unknown_codes_map_to_other() {
        assert_eq!(Key::from_code("KeyQ"), Key::Other);
        assert_eq!(Key::from_code("Numpad2"), Key::Digit2);
    }
}
