use serde::Serialize;
use std::cmp::Ordering;

use crate::models::{Player, PlayerId};

/// Points awarded per claimed cell
pub const POINTS_PER_CELL: f64 = 10.0;
/// Seconds of answer time that cost one point
pub const SECONDS_PER_PENALTY_POINT: f64 = 50.0;

/// Final score breakdown for one player
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreCard {
    pub player: PlayerId,
    pub name: String,
    pub cells_won: u32,
    pub total_time: f64,
    pub matrix_points: f64,
    pub time_penalty: f64,
    pub final_score: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Verdict {
    Winner { player: PlayerId, name: String },
    Draw,
}

pub struct Scorer;

impl Scorer {
    /// Score one player.
    ///
    /// - matrix points = cells won x 10
    /// - penalty = total seconds / 50
    /// - final = matrix points - penalty
    pub fn score(player: &Player) -> ScoreCard {
        let matrix_points = f64::from(player.cells_won) * POINTS_PER_CELL;
        let time_penalty = player.total_time / SECONDS_PER_PENALTY_POINT;

        ScoreCard {
            player: player.id,
            name: player.name.clone(),
            cells_won: player.cells_won,
            total_time: player.total_time,
            matrix_points,
            time_penalty,
            final_score: matrix_points - time_penalty,
        }
    }

    /// Higher final score wins; exactly equal scores are a draw.
    ///
    /// Only defined for the two-player game.
    pub fn verdict(cards: &[ScoreCard; 2]) -> Verdict {
        let [first, second] = cards;
        match first.final_score.partial_cmp(&second.final_score) {
            Some(Ordering::Greater) => Verdict::Winner {
                player: first.player,
                name: first.name.clone(),
            },
            Some(Ordering::Less) => Verdict::Winner {
                player: second.player,
                name: second.name.clone(),
            },
            _ => Verdict::Draw,
        }
    }

    /// Per-player breakdown followed by the winner line
    pub fn report(cards: &[ScoreCard; 2]) -> String {
        let mut out = String::new();
        for card in cards {
            out.push_str(&format!("--- {} ---\n", card.name));
            out.push_str(&format!(
                " > Cells Won: {} (Score: {})\n",
                card.cells_won, card.matrix_points
            ));
            out.push_str(&format!(" > Total Time: {:.2}s\n", card.total_time));
            out.push_str(&format!(
                " > Penalty calculation: {:.2} / {} = -{:.4}\n",
                card.total_time, SECONDS_PER_PENALTY_POINT, card.time_penalty
            ));
            out.push_str(&format!(" > FINAL SCORE: {:.4}\n", card.final_score));
            out.push_str(&"-".repeat(30));
            out.push('\n');
        }

        let winner = match Self::verdict(cards) {
            Verdict::Winner { name, .. } => name,
            Verdict::Draw => "DRAW".to_string(),
        };
        out.push_str(&format!("\nTHE WINNER IS: {}\n", winner));
        out
    }
}
