//! Browser bindings
//!
//! The page owns the canvas and the animation frame loop; it forwards input
//! events and calls `frame()` once per `requestAnimationFrame`.

use wasm_bindgen::prelude::*;

use super::InputLatch;
use crate::config::{GameConfig, Preset};
use crate::sim::{GamePhase, RenderSnapshot, SimulationState, tick};

/// Game instance exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    state: SimulationState,
    input: InputLatch,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game for a named preset ("classic", "walls", "quota").
    /// Unknown names fall back to Classic.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str) -> WebGame {
        let preset = Preset::from_str(preset).unwrap_or_else(|| {
            log::warn!("Unknown preset {:?}, using Classic", preset);
            Preset::Classic
        });
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized ({}) with seed: {}", preset.as_str(), seed);
        WebGame {
            state: SimulationState::new(GameConfig::from_preset(preset), seed),
            input: InputLatch::new(),
        }
    }

    /// Keydown / touchstart handler
    pub fn flap(&mut self) {
        self.input.press_flap();
    }

    /// Restart button handler
    pub fn restart(&mut self) {
        self.input.press_restart();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.set_autopilot(enabled);
        log::info!("Autopilot: {}", enabled);
    }

    /// Run exactly one tick with the input latched since the last frame.
    /// Returns true when the run just ended (show the game-over popup).
    pub fn frame(&mut self) -> bool {
        let input = self.input.take();
        let outcome = tick(&mut self.state, &input);
        matches!(
            outcome.transition,
            Some(GamePhase::GameOver) | Some(GamePhase::Won)
        )
    }

    /// Current frame as JSON for the canvas renderer
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&RenderSnapshot::capture(&self.state))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }
}

/// Module start hook: install the panic hook and console logger
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Flappy Pipes starting...");
}
