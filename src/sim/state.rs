//! Game state and core simulation types
//!
//! `SimulationState` exclusively owns the actor and every live pipe. The only
//! thing that mutates it is `tick`.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::{Obstacle, ObstacleSpawner};
use crate::config::GameConfig;
use crate::consts::FLAP_POSE_TICKS;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frozen, waiting for the first flap
    NotStarted,
    /// Active gameplay
    Running,
    /// Actor hit a pipe
    GameOver,
    /// Win quota cleared before any collision
    Won,
}

impl GamePhase {
    /// Terminal phases only accept a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Visual-only state. Advances with the simulation but never feeds back into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cosmetics {
    /// Horizontal offset of the tiled background, in `(-playfield_width, 0]`
    pub bg_offset: f32,
    /// Ticks left showing the wings-down sprite
    pub flap_pose_ticks: u32,
}

impl Cosmetics {
    pub fn trigger_flap_pose(&mut self) {
        self.flap_pose_ticks = FLAP_POSE_TICKS;
    }

    /// Scroll the background and count down the flap pose
    pub fn advance(&mut self, scroll_speed: f32, playfield_width: f32) {
        self.bg_offset -= scroll_speed;
        if self.bg_offset <= -playfield_width {
            self.bg_offset = 0.0;
        }
        self.flap_pose_ticks = self.flap_pose_ticks.saturating_sub(1);
    }

    pub fn flap_pose(&self) -> bool {
        self.flap_pose_ticks > 0
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Constants for this session (fixed, never mutated mid-game)
    config: GameConfig,
    /// Seed the pipe spawner was created with
    pub seed: u64,
    pub actor: Actor,
    /// Live pipes in spawn order (also left-to-right order)
    pub obstacles: Vec<Obstacle>,
    /// Pipes cleared this run
    pub score: u32,
    /// Best score of any finished run this session (survives restarts)
    pub best_score: u32,
    pub phase: GamePhase,
    /// Pipes still to clear for a win (quota variant only)
    pub remaining_to_win: Option<u32>,
    /// Running ticks since the last restart
    pub ticks: u64,
    pub cosmetics: Cosmetics,
    spawner: ObstacleSpawner,
}

impl SimulationState {
    /// Create a new session in the NotStarted phase.
    ///
    /// `config` must pass [`GameConfig::validate`]; presets and the JSON
    /// loaders always do.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "SimulationState::new given an invalid config: {:?}",
            config.validate()
        );
        let mut state = Self {
            actor: Actor::new(&config),
            obstacles: Vec::new(),
            score: 0,
            best_score: 0,
            phase: GamePhase::NotStarted,
            remaining_to_win: config.win_quota,
            ticks: 0,
            cosmetics: Cosmetics::default(),
            spawner: ObstacleSpawner::new(seed),
            seed,
            config,
        };
        state.reset();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reinitialise the run. `best_score` and the spawner's RNG position
    /// carry over so the next run sees a fresh layout.
    pub(crate) fn reset(&mut self) {
        self.actor = Actor::new(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::NotStarted;
        self.remaining_to_win = self.config.win_quota;
        self.ticks = 0;
        self.cosmetics = Cosmetics::default();
    }

    /// Append a pipe if this tick falls on a spawn boundary
    pub(crate) fn spawn_due(&mut self) -> bool {
        if !self.ticks.is_multiple_of(self.config.spawn_interval) {
            return false;
        }
        let obstacle = self.spawner.spawn(&self.config);
        log::debug!(
            "Spawned pipe at tick {} (top {:.1}, bottom {:.1})",
            self.ticks,
            obstacle.top_length,
            obstacle.bottom_length
        );
        self.obstacles.push(obstacle);
        true
    }

    /// Move every pipe, then drop the ones that left the field.
    /// Returns how many were cleared.
    pub(crate) fn advance_obstacles(&mut self) -> u32 {
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        (before - self.obstacles.len()) as u32
    }

    /// Enter a terminal phase and fold the score into the session best
    pub(crate) fn finish(&mut self, phase: GamePhase) {
        debug_assert!(phase.is_terminal());
        self.phase = phase;
        self.best_score = self.best_score.max(self.score);
    }

    /// Next pipe the actor still has to pass (first whose right edge is ahead of it)
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.right() > self.actor.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid config")]
    fn test_new_rejects_unvalidated_config() {
        let config = GameConfig {
            obstacle_max_height: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        SimulationState::new(config, 1);
    }

    #[test]
    fn test_new_state_not_started() {
        let state = SimulationState::new(GameConfig::default(), 1);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert_eq!(state.remaining_to_win, None);
        assert_eq!(state.actor.y, 300.0);
    }

    #[test]
    fn test_quota_preset_sets_remaining() {
        let state = SimulationState::new(GameConfig::from_preset(Preset::Quota), 1);
        assert_eq!(state.remaining_to_win, Some(10));
    }

    #[test]
    fn test_spawn_due_on_interval() {
        let mut state = SimulationState::new(GameConfig::default(), 1);
        assert!(state.spawn_due());
        state.ticks = 99;
        assert!(!state.spawn_due());
        state.ticks = 200;
        assert!(state.spawn_due());
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_advance_culls_offscreen() {
        let mut state = SimulationState::new(GameConfig::default(), 1);
        state.spawn_due();
        state.spawn_due();
        state.obstacles[0].x = -49.0;

        let cleared = state.advance_obstacles();
        assert_eq!(cleared, 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, 398.0);
    }

    #[test]
    fn test_finish_tracks_best() {
        let mut state = SimulationState::new(GameConfig::default(), 1);
        state.score = 4;
        state.finish(GamePhase::GameOver);
        assert_eq!(state.best_score, 4);

        state.reset();
        state.score = 2;
        state.finish(GamePhase::GameOver);
        assert_eq!(state.best_score, 4);
    }

    #[test]
    fn test_background_wraps() {
        let mut cosmetics = Cosmetics::default();
        for _ in 0..199 {
            cosmetics.advance(2.0, 400.0);
        }
        assert_eq!(cosmetics.bg_offset, -398.0);
        cosmetics.advance(2.0, 400.0);
        assert_eq!(cosmetics.bg_offset, 0.0);
    }

    #[test]
    fn test_flap_pose_counts_down() {
        let mut cosmetics = Cosmetics::default();
        assert!(!cosmetics.flap_pose());
        cosmetics.trigger_flap_pose();
        for _ in 0..FLAP_POSE_TICKS - 1 {
            cosmetics.advance(2.0, 400.0);
            assert!(cosmetics.flap_pose());
        }
        cosmetics.advance(2.0, 400.0);
        assert!(!cosmetics.flap_pose());
    }
}
