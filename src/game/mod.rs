// Game engine modules

pub mod difficulty;
pub mod grid;
pub mod scorer;
pub mod scrambler;
pub mod session;
pub mod turn;

pub use scorer::Verdict;
pub use session::GameSession;
pub use turn::TurnEngine;
