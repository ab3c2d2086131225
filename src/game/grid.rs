use crate::{
    error::GameError,
    models::{PlayerId, Position},
};

/// Cells per side
pub const BOARD_SIZE: usize = 3;
/// Total cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

const EMPTY_CELL: &str = "_";

/// 3x3 matrix of claimed cells.
///
/// Cells are filled strictly in row-major order, so where a win lands
/// depends only on how many cells are already taken, never on who won it.
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: [[Option<PlayerId>; BOARD_SIZE]; BOARD_SIZE],
    filled: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `owner`'s mark into the next free cell and return where it went
    pub fn fill_next(&mut self, owner: PlayerId) -> Result<Position, GameError> {
        if self.is_full() {
            return Err(GameError::BoardFull);
        }

        let pos = Position {
            row: self.filled / BOARD_SIZE,
            col: self.filled % BOARD_SIZE,
        };
        self.cells[pos.row][pos.col] = Some(owner);
        self.filled += 1;

        Ok(pos)
    }

    pub fn filled_count(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled >= BOARD_CELLS
    }

    #[cfg(test)]
    pub fn cell(&self, pos: Position) -> Option<PlayerId> {
        self.cells.get(pos.row)?.get(pos.col).copied().flatten()
    }

    /// Number of cells holding `owner`'s mark
    pub fn count_for(&self, owner: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(owner))
            .count()
    }

    /// Three-row snapshot framed for the status banner
    pub fn render(&self) -> String {
        let rule = "-".repeat(19);
        let mut out = String::with_capacity(4 * 20);
        out.push_str(&rule);
        out.push('\n');
        for row in &self.cells {
            let marks: Vec<String> = row
                .iter()
                .map(|cell| format!("{:^4}", cell.map_or(EMPTY_CELL, PlayerId::mark)))
                .collect();
            out.push_str(&format!("| {} |\n", marks.join(" | ")));
        }
        out.push_str(&rule);
        out
    }
}
