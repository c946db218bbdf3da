//! Platform abstraction layer
//!
//! Host events (keys, touches, clicks) arrive whenever the host delivers them.
//! They are latched here and drained once per frame at the tick boundary.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::TickInput;

/// One-shot inputs collected between two ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    flap: bool,
    restart: bool,
    /// Sticky demo toggle, survives `take`
    autopilot: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any number of flaps before the next tick collapse into one
    pub fn press_flap(&mut self) {
        self.flap = true;
    }

    pub fn press_restart(&mut self) {
        self.restart = true;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Drain the latched one-shot inputs into a tick input
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            flap: self.flap,
            restart: self.restart,
            autopilot: self.autopilot,
        };
        self.flap = false;
        self.restart = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flaps_coalesce_and_clear() {
        let mut latch = InputLatch::new();
        latch.press_flap();
        latch.press_flap();
        latch.press_flap();

        let input = latch.take();
        assert!(input.flap);
        assert!(!input.restart);

        assert_eq!(latch.take(), TickInput::default());
    }

    #[test]
    fn test_autopilot_is_sticky() {
        let mut latch = InputLatch::new();
        latch.set_autopilot(true);
        latch.press_restart();

        let first = latch.take();
        assert!(first.restart && first.autopilot);

        let second = latch.take();
        assert!(!second.restart);
        assert!(second.autopilot);
    }
}
