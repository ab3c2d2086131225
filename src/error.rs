use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The embedded corpus produced no word of an allowed length
    #[error("vocabulary bank is empty: no corpus word has {min}-{max} letters")]
    EmptyVocabulary { min: usize, max: usize },

    #[error("board is full, no cell left to fill")]
    BoardFull,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
