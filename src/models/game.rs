use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use super::PlayerId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Why the turn loop stopped. Both can hold at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub enum EndReason {
    TurnLimitReached,
    GridFull,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::TurnLimitReached => write!(f, "turn limit reached"),
            EndReason::GridFull => write!(f, "grid full"),
        }
    }
}

/// What happened during one completed turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub target: String,
    pub scrambled: String,
    pub answer: String,
    pub elapsed: Duration,
    pub correct: bool,
    /// Cell won by this answer; `None` when wrong or the board was already full
    pub claimed: Option<Position>,
}
