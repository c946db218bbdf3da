//! Pipes and the periodic pipe spawner

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::GameConfig;
use crate::consts::{BOTTOM_SKIN_COUNT, TOP_SKIN_COUNT};

/// RNG stream for gameplay-relevant pipe layout
const LAYOUT_STREAM: u64 = 0x70_69_70_65;
/// RNG stream for purely cosmetic texture picks
const SKIN_STREAM: u64 = 0x73_6b_69_6e;

/// Texture indices for a pipe. Rendering only, never read by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ObstacleSkin {
    /// Wall texture for the top segment (0..TOP_SKIN_COUNT)
    pub top: u8,
    /// Cup texture for the bottom segment (0..BOTTOM_SKIN_COUNT)
    pub bottom: u8,
}

/// A top/bottom barrier pair with a fixed gap between them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Length of the top segment, measured down from the ceiling
    pub top_length: f32,
    /// Length of the bottom segment, measured up from the floor
    pub bottom_length: f32,
    pub width: f32,
    /// Leftward movement per tick
    pub speed: f32,
    pub skin: ObstacleSkin,
}

impl Obstacle {
    /// Build a pipe with the given top length at the right edge of the field.
    /// The bottom length is whatever is left after the gap.
    pub fn with_top(config: &GameConfig, top_length: f32) -> Self {
        Self {
            x: config.playfield_width,
            top_length,
            bottom_length: config.playfield_height - config.obstacle_gap - top_length,
            width: config.obstacle_width,
            speed: config.scroll_speed,
            skin: ObstacleSkin::default(),
        }
    }

    /// Scroll one tick to the left
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// True once the trailing edge has left the playfield
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    /// Top of the bottom segment, in playfield coordinates
    pub fn bottom_top(&self, playfield_height: f32) -> f32 {
        playfield_height - self.bottom_length
    }

    /// Vertical center of the open gap
    pub fn gap_center(&self, playfield_height: f32) -> f32 {
        (self.top_length + self.bottom_top(playfield_height)) / 2.0
    }
}

/// Creates pipes from two seeded PCG streams.
///
/// Layout and skins use separate streams so texture picks never shift the
/// sequence of pipe heights.
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    layout_rng: Pcg32,
    skin_rng: Pcg32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            layout_rng: Pcg32::new(seed, LAYOUT_STREAM),
            skin_rng: Pcg32::new(seed, SKIN_STREAM),
        }
    }

    /// Spawn a pipe with a uniformly random top length in
    /// `[obstacle_min_height, obstacle_max_height]`
    pub fn spawn(&mut self, config: &GameConfig) -> Obstacle {
        let (min, max) = (config.obstacle_min_height, config.obstacle_max_height);
        let top_length = if max > min {
            self.layout_rng.random_range(min..=max)
        } else {
            min
        };

        let mut obstacle = Obstacle::with_top(config, top_length);
        obstacle.skin = ObstacleSkin {
            top: self.skin_rng.random_range(0..TOP_SKIN_COUNT),
            bottom: self.skin_rng.random_range(0..BOTTOM_SKIN_COUNT),
        };
        obstacle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use proptest::prelude::*;

    #[test]
    fn test_with_top_fills_playfield() {
        let config = GameConfig::default();
        let pipe = Obstacle::with_top(&config, 140.0);
        assert_eq!(pipe.x, 400.0);
        assert_eq!(pipe.bottom_length, 310.0);
        assert_eq!(pipe.bottom_top(600.0), 290.0);
        assert_eq!(pipe.gap_center(600.0), 215.0);
    }

    #[test]
    fn test_advance_and_offscreen() {
        let config = GameConfig::default();
        let mut pipe = Obstacle::with_top(&config, 100.0);
        pipe.x = -48.0;
        assert!(!pipe.is_offscreen());

        pipe.advance();
        // right edge exactly at 0 is still on screen
        assert_eq!(pipe.right(), 0.0);
        assert!(!pipe.is_offscreen());

        pipe.advance();
        assert!(pipe.is_offscreen());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GameConfig::default();
        let mut a = ObstacleSpawner::new(42);
        let mut b = ObstacleSpawner::new(42);
        for _ in 0..20 {
            assert_eq!(a.spawn(&config), b.spawn(&config));
        }
    }

    #[test]
    fn test_degenerate_height_range() {
        let config = GameConfig {
            obstacle_min_height: 200.0,
            obstacle_max_height: 200.0,
            ..Default::default()
        };
        let pipe = ObstacleSpawner::new(7).spawn(&config);
        assert_eq!(pipe.top_length, 200.0);
    }

    proptest! {
        #[test]
        fn prop_spawned_pipes_respect_gap(seed in any::<u64>(), preset_idx in 0usize..3) {
            let config = GameConfig::from_preset(Preset::ALL[preset_idx]);
            let mut spawner = ObstacleSpawner::new(seed);
            for _ in 0..16 {
                let pipe = spawner.spawn(&config);
                prop_assert!(pipe.top_length >= config.obstacle_min_height);
                prop_assert!(pipe.top_length <= config.obstacle_max_height);
                let total = pipe.top_length + config.obstacle_gap + pipe.bottom_length;
                prop_assert!((total - config.playfield_height).abs() < 1e-3);
                prop_assert!(pipe.skin.top < TOP_SKIN_COUNT);
                prop_assert!(pipe.skin.bottom < BOTTOM_SKIN_COUNT);
            }
        }
    }
}
