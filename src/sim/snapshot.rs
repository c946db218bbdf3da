//! Read-only view of the state for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::obstacle::ObstacleSkin;
use super::state::{GamePhase, SimulationState};

/// A pipe as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub width: f32,
    pub top_length: f32,
    pub bottom_length: f32,
    pub skin: ObstacleSkin,
}

/// Everything a frame needs to draw, copied out after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub playfield: Vec2,
    /// Actor top-left corner
    pub actor_pos: Vec2,
    pub actor_size: f32,
    /// Show the wings-down sprite
    pub flap_pose: bool,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub best_score: u32,
    pub remaining_to_win: Option<u32>,
    pub bg_offset: f32,
}

impl RenderSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let config = state.config();
        Self {
            phase: state.phase,
            playfield: Vec2::new(config.playfield_width, config.playfield_height),
            actor_pos: state.actor.pos(),
            actor_size: state.actor.size,
            flap_pose: state.cosmetics.flap_pose(),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width: o.width,
                    top_length: o.top_length,
                    bottom_length: o.bottom_length,
                    skin: o.skin,
                })
                .collect(),
            score: state.score,
            best_score: state.best_score,
            remaining_to_win: state.remaining_to_win,
            bg_offset: state.cosmetics.bg_offset,
        }
    }

    /// HUD line, e.g. "Score: 3" or "Left: 7" for quota runs
    pub fn hud_text(&self) -> String {
        match self.remaining_to_win {
            Some(left) => format!("Left: {}", left),
            None => format!("Score: {}", self.score),
        }
    }
}
