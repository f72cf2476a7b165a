//! Battlefield Survival entry point
//!
//! Native headless driver: loads settings, lets the autopilot play a demo run
//! and prints the final frame as JSON.

use battlefield_survival::Settings;
use battlefield_survival::consts::TICK_RATE;
use battlefield_survival::platform::{InputState, Key};
use battlefield_survival::renderer::FrameSnapshot;
use battlefield_survival::sim::{GamePhase, SimulationState, tick};

fn main() {
    env_logger::init();
    log::info!("Battlefield Survival (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from_path(&path).unwrap_or_else(|e| {
            log::warn!("Falling back to default settings: {}", e);
            Settings::default()
        }),
        None => Settings::default(),
    };
    log::info!("Game initialized with seed: {}", settings.seed);

    let mut state = SimulationState::from_settings(&settings);
    let mut input = InputState::new();
    let frame_ms = 1000.0 / TICK_RATE as f64;

    input.key_down(Key::Space);
    input.key_up(Key::Space);

    let mut now_ms = 0.0;
    for frame in 0..settings.demo_ticks {
        now_ms = frame as f64 * frame_ms;
        let mut tick_input = input.take_tick_input(now_ms);
        tick_input.idle_mode = true;
        tick(&mut state, &tick_input);

        if state.phase == GamePhase::Over {
            break;
        }
    }

    let snapshot = FrameSnapshot::capture(&state, now_ms);
    log::info!(
        "Demo finished after {} ticks: {} kills, health {}",
        state.clock.frame,
        state.kills,
        state.agent.health
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}
