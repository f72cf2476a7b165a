//! Platform abstraction layer
//!
//! Translates raw window/browser events into simulation commands:
//! - Keyboard and pointer events
//! - One-shot vs held inputs
//! - Per-tick input sampling

pub mod input;

pub use input::{InputState, Key};
