pub mod game;
pub mod player;

pub use game::{EndReason, Position, TurnOutcome};
pub use player::{Player, PlayerId};
