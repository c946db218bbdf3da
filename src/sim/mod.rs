//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{Aabb, collides, first_collision};
pub use obstacle::{Obstacle, ObstacleSkin, ObstacleSpawner};
pub use snapshot::{ObstacleView, RenderSnapshot};
pub use state::{Cosmetics, GamePhase, SimulationState};
pub use tick::{TickInput, TickOutcome, tick};
