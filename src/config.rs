//! Game constants and variant presets
//!
//! Every variant of the game is the same simulation with different numbers.
//! A `GameConfig` is fixed for the lifetime of a `SimulationState`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Named variants of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Small bird, wide height range, thin pipes
    #[default]
    Classic,
    /// Textured wall/cup pipes: big bird, nearly fixed gap position
    Walls,
    /// Classic physics with a win after clearing a fixed number of pipes
    Quota,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Walls, Preset::Quota];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Walls => "Walls",
            Preset::Quota => "Quota",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "walls" | "wall" => Some(Preset::Walls),
            "quota" | "gauntlet" => Some(Preset::Quota),
            _ => None,
        }
    }
}

/// Pipes a Quota run has to clear to win
pub const DEFAULT_WIN_QUOTA: u32 = 10;

/// Configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite value greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("gravity must be finite and non-negative (got {0})")]
    InvalidGravity(f32),
    #[error("impulse must be negative to lift the actor (got {0})")]
    InvalidImpulse(f32),
    #[error("obstacle height range {min}..={max} is empty or negative")]
    HeightRange { min: f32, max: f32 },
    #[error("max obstacle height {max} plus gap {gap} exceeds playfield height {height}")]
    GapTooLarge { max: f32, gap: f32, height: f32 },
    #[error("actor size {size} does not fit in playfield height {height}")]
    ActorTooLarge { size: f32, height: f32 },
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
    #[error("win quota must be at least one pipe")]
    ZeroQuota,
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON")]
    Parse(#[from] serde_json::Error),
}

/// Simulation constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Actor ===
    /// Fixed horizontal position of the actor's left edge
    pub actor_x: f32,
    /// Vertical position the actor starts (and restarts) at
    pub actor_start_y: f32,
    /// Edge length of the actor's square bounding box
    pub actor_size: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub impulse: f32,

    // === Obstacles ===
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,
    pub obstacle_gap: f32,
    pub obstacle_width: f32,
    /// Leftward movement per tick for pipes and background
    pub scroll_speed: f32,
    /// Ticks between pipe spawns
    pub spawn_interval: u64,

    // === Meta ===
    /// Pipes to clear for a win (None = endless)
    pub win_quota: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Classic)
    }
}

impl GameConfig {
    /// Create a config from a variant preset
    pub fn from_preset(preset: Preset) -> Self {
        let classic = Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            actor_x: ACTOR_X,
            actor_start_y: ACTOR_START_Y,
            actor_size: 45.0,
            gravity: 0.25,
            impulse: -5.0,

            obstacle_min_height: 50.0,
            obstacle_max_height: 350.0,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_width: 50.0,
            scroll_speed: 2.0,
            spawn_interval: SPAWN_INTERVAL,

            win_quota: None,
        };

        match preset {
            Preset::Classic => classic,
            Preset::Walls => Self {
                actor_size: 60.0,
                obstacle_min_height: 110.0,
                obstacle_max_height: 120.0,
                obstacle_width: 100.0,
                ..classic
            },
            Preset::Quota => Self {
                win_quota: Some(DEFAULT_WIN_QUOTA),
                ..classic
            },
        }
    }

    /// Highest valid actor position (actor resting on the floor)
    pub fn actor_max_y(&self) -> f32 {
        self.playfield_height - self.actor_size
    }

    /// Check that the constants describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("actor_size", self.actor_size),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.impulse.is_finite() && self.impulse < 0.0) {
            return Err(ConfigError::InvalidImpulse(self.impulse));
        }
        if self.actor_size >= self.playfield_height {
            return Err(ConfigError::ActorTooLarge {
                size: self.actor_size,
                height: self.playfield_height,
            });
        }
        let (min, max) = (self.obstacle_min_height, self.obstacle_max_height);
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(ConfigError::HeightRange { min, max });
        }
        if max + self.obstacle_gap > self.playfield_height {
            return Err(ConfigError::GapTooLarge {
                max,
                gap: self.obstacle_gap,
                height: self.playfield_height,
            });
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.win_quota == Some(0) {
            return Err(ConfigError::ZeroQuota);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields fall back to Classic.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json).inspect_err(|e| {
            log::warn!("Rejected config {}: {}", path.display(), e);
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            let config = GameConfig::from_preset(preset);
            assert!(config.validate().is_ok(), "{} should validate", preset.as_str());
            assert_eq!(config.obstacle_gap, 150.0);
            assert_eq!(config.spawn_interval, 100);
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(Preset::from_str("classic"), Some(Preset::Classic));
        assert_eq!(Preset::from_str("WALLS"), Some(Preset::Walls));
        assert_eq!(Preset::from_str("Quota"), Some(Preset::Quota));
        assert_eq!(Preset::from_str("hard"), None);
        for preset in Preset::ALL {
            assert_eq!(Preset::from_str(preset.as_str()), Some(preset));
        }
    }

    #[test]
    fn test_quota_preset_has_win_condition() {
        assert_eq!(GameConfig::from_preset(Preset::Classic).win_quota, None);
        assert_eq!(
            GameConfig::from_preset(Preset::Quota).win_quota,
            Some(DEFAULT_WIN_QUOTA)
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_impulse = GameConfig {
            impulse: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_impulse.validate(),
            Err(ConfigError::InvalidImpulse(_))
        ));

        let inverted = GameConfig {
            obstacle_min_height: 200.0,
            obstacle_max_height: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::HeightRange { .. })
        ));

        let no_room = GameConfig {
            obstacle_max_height: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            no_room.validate(),
            Err(ConfigError::GapTooLarge { .. })
        ));

        let zero_width = GameConfig {
            obstacle_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_width.validate(),
            Err(ConfigError::NonPositive {
                field: "obstacle_width",
                ..
            })
        ));

        let zero_quota = GameConfig {
            win_quota: Some(0),
            ..Default::default()
        };
        assert!(matches!(zero_quota.validate(), Err(ConfigError::ZeroQuota)));

        let giant = GameConfig {
            actor_size: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            giant.validate(),
            Err(ConfigError::ActorTooLarge { .. })
        ));
    }

    #[test]
    fn test_json_partial_config_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "gravity": 0.4, "win_quota": 3 }"#)
            .expect("partial config should parse");
        assert_eq!(config.gravity, 0.4);
        assert_eq!(config.win_quota, Some(3));
        assert_eq!(config.actor_size, 45.0);
        assert_eq!(config.playfield_height, PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "impulse": 1.0 }"#),
            Err(ConfigError::InvalidImpulse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::from_json_file("/nonexistent/flappy-pipes.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
