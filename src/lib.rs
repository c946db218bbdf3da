//! Flappy Pipes - a side-scrolling flap-through-the-gap arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, pipes, collisions, game state)
//! - `config`: Data-driven game constants and variant presets
//! - `highscores`: In-memory session leaderboard
//! - `platform`: Host input latching and browser bindings

pub mod config;
pub mod highscores;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, GameConfig, Preset};
pub use highscores::{HighScores, RunOutcome, RunRecord};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units, renderers scale to fit)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Actor spawn point
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_START_Y: f32 = 300.0;

    /// Vertical clearance between top and bottom pipe segments
    pub const OBSTACLE_GAP: f32 = 150.0;
    /// Ticks between pipe spawns
    pub const SPAWN_INTERVAL: u64 = 100;

    /// Ticks the flap pose stays visible (~100ms at 60 fps)
    pub const FLAP_POSE_TICKS: u32 = 6;

    /// Number of wall textures available for top segments
    pub const TOP_SKIN_COUNT: u8 = 7;
    /// Number of cup textures available for bottom segments
    pub const BOTTOM_SKIN_COUNT: u8 = 8;
}
