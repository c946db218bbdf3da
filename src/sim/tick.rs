//! Per-frame simulation tick
//!
//! Core game loop: one call advances the run by exactly one frame.

use super::collision::first_collision;
use super::state::{GamePhase, SimulationState};

/// Input commands for a single tick, latched since the previous one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap (click/tap/key). Also starts a run that has not started yet.
    pub flap: bool,
    /// Restart after GameOver/Won
    pub restart: bool,
    /// Demo mode - flap automatically to steer through the next gap
    pub autopilot: bool,
}

/// What a tick did, for drivers that want to react (sounds, logs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A pipe was spawned
    pub spawned: bool,
    /// Pipes that left the field (and scored) this tick
    pub cleared: u32,
    /// The actor flapped this tick
    pub flapped: bool,
    /// Phase after the tick, if it changed
    pub transition: Option<GamePhase>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut SimulationState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    let phase_before = state.phase;

    // Restart is only honoured from a terminal phase
    if input.restart {
        if state.phase.is_terminal() {
            log::info!(
                "Restarting after {:?} (score {}, best {})",
                state.phase,
                state.score,
                state.best_score
            );
            state.reset();
            outcome.transition = Some(state.phase);
            return outcome;
        }
        log::debug!("Ignoring restart during {:?}", state.phase);
    }

    let wants_flap = input.flap || (input.autopilot && autopilot_wants_flap(state));

    match state.phase {
        GamePhase::NotStarted => {
            if !wants_flap {
                return outcome;
            }
            log::info!("Run started (seed {})", state.seed);
            state.phase = GamePhase::Running;
        }
        GamePhase::Running => {}
        GamePhase::GameOver | GamePhase::Won => {
            if wants_flap {
                log::debug!("Ignoring flap during {:?}", state.phase);
            }
            return outcome;
        }
    }

    if wants_flap {
        state.actor.apply_impulse();
        state.cosmetics.trigger_flap_pose();
        outcome.flapped = true;
    }

    // 1. Actor physics
    state.actor.update();

    // 2. Spawn on the interval boundary (tick 0 included)
    outcome.spawned = state.spawn_due();

    // 3. Move pipes, cull the ones fully past the left edge
    let cleared = state.advance_obstacles();
    outcome.cleared = cleared;
    if cleared > 0 {
        state.score += cleared;
        log::debug!("Cleared {} pipe(s), score {}", cleared, state.score);
    }

    // 4. Win quota resolves before collisions
    if let Some(remaining) = state.remaining_to_win.as_mut() {
        *remaining = remaining.saturating_sub(cleared);
        if *remaining == 0 {
            log::info!("Quota cleared after {} ticks", state.ticks + 1);
            state.finish(GamePhase::Won);
        }
    }

    // 5. First colliding pipe ends the run
    if state.phase == GamePhase::Running {
        let height = state.config().playfield_height;
        if let Some(index) = first_collision(&state.actor, &state.obstacles, height) {
            log::info!(
                "Collision with pipe {} at tick {} (score {})",
                index,
                state.ticks,
                state.score
            );
            state.finish(GamePhase::GameOver);
        }
    }

    // 6. Cosmetics
    let (speed, width) = (state.config().scroll_speed, state.config().playfield_width);
    state.cosmetics.advance(speed, width);

    state.ticks += 1;

    if state.phase != phase_before {
        outcome.transition = Some(state.phase);
    }
    outcome
}

/// Flap when falling and the actor's bottom sinks past the middle of the
/// next gap (or the middle of the field when no pipe is ahead).
fn autopilot_wants_flap(state: &SimulationState) -> bool {
    if state.phase.is_terminal() {
        return false;
    }
    if state.phase == GamePhase::NotStarted {
        return true;
    }
    let height = state.config().playfield_height;
    let target = state
        .next_obstacle()
        .map(|o| {
            // aim a little below the gap center; a flap lifts more than it falls
            let clearance = (height - o.bottom_length - o.top_length) / 4.0;
            o.gap_center(height) + clearance
        })
        .unwrap_or(height / 2.0);

    state.actor.velocity_y >= 0.0 && state.actor.bottom() > target
}
