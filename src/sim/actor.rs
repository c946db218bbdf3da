//! The player-controlled actor (the bird)

use glam::Vec2;

use crate::config::GameConfig;

/// The flapping actor. Only moves vertically; pipes scroll past it.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Left edge (constant for the whole run)
    pub x: f32,
    /// Top edge, 0 = ceiling
    pub y: f32,
    /// Vertical velocity per tick (positive = falling)
    pub velocity_y: f32,
    /// Edge of the square bounding box
    pub size: f32,
    pub gravity: f32,
    pub impulse: f32,
    /// Largest valid `y` (actor resting on the floor)
    max_y: f32,
}

impl Actor {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.actor_x,
            y: config.actor_start_y.clamp(0.0, config.actor_max_y()),
            velocity_y: 0.0,
            size: config.actor_size,
            gravity: config.gravity,
            impulse: config.impulse,
            max_y: config.actor_max_y(),
        }
    }

    /// Integrate one tick of gravity, then clamp into the playfield.
    ///
    /// Hitting the floor or ceiling is an inelastic stop: velocity is zeroed.
    pub fn update(&mut self) {
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;

        if self.y > self.max_y {
            self.y = self.max_y;
            self.velocity_y = 0.0;
        }
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity_y = 0.0;
        }
    }

    /// Flap: overwrite velocity with the upward impulse
    pub fn apply_impulse(&mut self) {
        self.velocity_y = self.impulse;
    }

    /// Top-left corner
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }
}
