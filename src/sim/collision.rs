//! Actor-vs-pipe collision detection
//!
//! A pipe is solid everywhere except its gap, so the test is an AABB overlap
//! on the horizontal axis combined with "outside the gap" on the vertical axis.

use glam::Vec2;

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Axis-aligned rectangle (min = top-left, max = bottom-right)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Strict horizontal overlap: touching edges do not count
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.min.x < right && self.max.x > left
    }
}

impl From<&Actor> for Aabb {
    fn from(actor: &Actor) -> Self {
        Aabb::new(actor.pos(), Vec2::splat(actor.size))
    }
}

/// True when the actor's box is inside the pipe's column and outside its gap
pub fn collides(actor: &Actor, obstacle: &Obstacle, playfield_height: f32) -> bool {
    let bounds = Aabb::from(actor);
    if !bounds.overlaps_x(obstacle.x, obstacle.right()) {
        return false;
    }
    bounds.min.y < obstacle.top_length || bounds.max.y > obstacle.bottom_top(playfield_height)
}

/// Index of the first pipe the actor hits, in collection order
pub fn first_collision(
    actor: &Actor,
    obstacles: &[Obstacle],
    playfield_height: f32,
) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| collides(actor, obstacle, playfield_height))
}
