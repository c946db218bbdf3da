//! Session leaderboard
//!
//! In-memory only: the best runs played by this process, highest score first.

use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;

/// Leaderboard slots
pub const MAX_HIGH_SCORES: usize = 10;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Crashed,
    Won,
    /// Stopped by the driver before reaching a terminal phase
    Abandoned,
}

impl RunOutcome {
    pub fn from_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::GameOver => RunOutcome::Crashed,
            GamePhase::Won => RunOutcome::Won,
            GamePhase::NotStarted | GamePhase::Running => RunOutcome::Abandoned,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunOutcome::Crashed => "crashed",
            RunOutcome::Won => "won",
            RunOutcome::Abandoned => "abandoned",
        }
    }
}

/// Summary of one run as the driver stopped it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Pipes cleared
    pub score: u32,
    /// Ticks survived
    pub ticks: u64,
    pub outcome: RunOutcome,
}

/// Top runs of the session, sorted by score descending
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// A run earns a slot when it cleared at least one pipe and the board
    /// has room or it strictly beats the current last place.
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|last| score > last.score))
    }

    /// Record a run and return its 1-based rank, or None when it missed
    /// the board. Equal scores rank behind the runs already listed.
    pub fn add_run(&mut self, record: RunRecord) -> Option<usize> {
        if !self.qualifies(record.score) {
            return None;
        }
        let slot = self
            .entries
            .partition_point(|entry| entry.score >= record.score);
        self.entries.insert(slot, record);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|entry| entry.score)
    }
}
