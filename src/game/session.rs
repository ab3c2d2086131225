use rand::Rng;
use std::{io::Write, time::Duration};

use crate::{
    error::Result,
    game::{
        grid::{Board, BOARD_CELLS},
        scorer::{ScoreCard, Scorer, Verdict},
        turn::TurnEngine,
    },
    input::AnswerSource,
    models::{EndReason, Player, PlayerId, Position},
};

/// Total turns, across both players, before the game stops
pub const MAX_TURNS: u32 = 27;

/// How a finished game ended and who won
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub reasons: Vec<EndReason>,
    pub turns_played: u32,
    pub cards: [ScoreCard; 2],
    pub verdict: Verdict,
}

/// Everything that changes while a game is played
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    turns_played: u32,
    current: PlayerId,
}

impl GameSession {
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(PlayerId::One, player_one),
                Player::new(PlayerId::Two, player_two),
            ],
            turns_played: 0,
            current: PlayerId::One,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn is_over(&self) -> bool {
        self.turns_played >= MAX_TURNS || self.board.is_full()
    }

    /// Every condition that currently ends the game
    pub fn end_reasons(&self) -> Vec<EndReason> {
        let mut reasons = Vec::new();
        if self.turns_played >= MAX_TURNS {
            reasons.push(EndReason::TurnLimitReached);
        }
        if self.board.is_full() {
            reasons.push(EndReason::GridFull);
        }
        reasons
    }

    /// Book one answer from the current player.
    ///
    /// Time and the turn counter always advance. A correct answer claims the
    /// next cell unless the board is already full, in which case nothing
    /// else changes.
    pub fn record_answer(
        &mut self,
        correct: bool,
        elapsed: Duration,
    ) -> Result<Option<Position>> {
        let current = self.current;
        self.players[current.index()].total_time += elapsed.as_secs_f64();
        self.turns_played += 1;

        if !correct || self.board.is_full() {
            return Ok(None);
        }

        let claimed = self.board.fill_next(current)?;
        let player = &mut self.players[current.index()];
        player.cells_won += 1;
        debug_assert_eq!(self.board.count_for(current), player.cells_won as usize);
        Ok(Some(claimed))
    }

    /// Hand the turn to the other player, win or lose
    pub fn switch_player(&mut self) {
        self.current = self.current.other();
    }

    pub fn status_banner(&self) -> String {
        format!(
            "\n=== MATRIX (Filled: {}/{}) ===\n=== TURNS PLAYED: {}/{} ===\n{}",
            self.board.filled_count(),
            BOARD_CELLS,
            self.turns_played,
            MAX_TURNS,
            self.board.render()
        )
    }

    pub fn score_cards(&self) -> [ScoreCard; 2] {
        let [one, two] = self.players();
        [Scorer::score(one), Scorer::score(two)]
    }

    /// Alternate turns until the turn limit is hit or the board fills,
    /// then print the score breakdown and verdict.
    pub fn run<R, S, W>(
        &mut self,
        engine: &mut TurnEngine<'_, R>,
        source: &mut S,
        out: &mut W,
    ) -> Result<GameSummary>
    where
        R: Rng,
        S: AnswerSource,
        W: Write,
    {
        writeln!(out, "Welcome to the Vocabulary Matrix Quiz!")?;
        writeln!(out, "Goal: Unscramble words (4-7 chars).")?;
        writeln!(
            out,
            "Game ends at {} total turns or when matrix fills.",
            MAX_TURNS
        )?;

        while !self.is_over() {
            writeln!(out, "{}", self.status_banner())?;
            let outcome = engine.play_turn(self, source, out)?;
            tracing::debug!(
                turn = self.turns_played,
                filled = self.board.filled_count(),
                claimed = outcome.claimed.is_some(),
                "Turn recorded"
            );
            self.switch_player();
        }

        let reasons = self.end_reasons();
        writeln!(out, "\nReason for ending:")?;
        for reason in &reasons {
            match reason {
                EndReason::TurnLimitReached => {
                    writeln!(out, "-> Turn limit ({}) reached.", MAX_TURNS)?
                }
                EndReason::GridFull => writeln!(out, "-> Matrix is full.")?,
            }
        }

        let cards = self.score_cards();
        let verdict = Scorer::verdict(&cards);

        writeln!(out, "\n\n{}", "#".repeat(43))?;
        writeln!(out, "{:^43}", "GAME OVER")?;
        writeln!(out, "{}", "#".repeat(43))?;
        writeln!(out, "{}", self.status_banner())?;
        write!(out, "{}", Scorer::report(&cards))?;
        out.flush()?;

        tracing::info!(
            turns = self.turns_played(),
            filled = self.board.filled_count(),
            ?reasons,
            ?verdict,
            "Game over"
        );

        Ok(GameSummary {
            reasons,
            turns_played: self.turns_played(),
            cards,
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::VocabularyBank;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io;

    /// One word per length, none of them anagrams of another
    const TEST_CORPUS: &str = "abcd abcde abcdef abcdefg";

    /// Always answers with an empty line
    struct AlwaysWrong;

    impl AnswerSource for AlwaysWrong {
        fn read_answer(&mut self, _scrambled: &str) -> io::Result<Option<String>> {
            Ok(Some("\n".to_string()))
        }
    }

    /// Unscrambles against the bank for the chosen seats, answers wrong otherwise
    struct Oracle {
        words: Vec<String>,
        solves: [bool; 2],
        calls: usize,
    }

    impl Oracle {
        fn new(bank: &VocabularyBank, solves: [bool; 2]) -> Self {
            Self {
                words: bank.words().map(str::to_string).collect(),
                solves,
                calls: 0,
            }
        }

        fn sorted(word: &str) -> Vec<char> {
            let mut chars: Vec<char> = word.chars().collect();
            chars.sort_unstable();
            chars
        }
    }

    impl AnswerSource for Oracle {
        fn read_answer(&mut self, scrambled: &str) -> io::Result<Option<String>> {
            let seat = self.calls % 2;
            self.calls += 1;
            if !self.solves[seat] {
                return Ok(Some("nope\n".to_string()));
            }

            let key = Self::sorted(scrambled);
            let answer = self
                .words
                .iter()
                .find(|w| Self::sorted(w) == key)
                .cloned()
                .unwrap_or_default();
            Ok(Some(format!("{}\n", answer)))
        }
    }

    fn play(solves: Option<[bool; 2]>) -> (GameSession, GameSummary, String) {
        let bank = VocabularyBank::from_corpus(TEST_CORPUS).unwrap();
        let mut engine = TurnEngine::new(&bank, StdRng::seed_from_u64(42), Duration::ZERO);
        let mut session = GameSession::new("Player 1", "Player 2");
        let mut out = Vec::new();

        let summary = match solves {
            Some(solves) => {
                let mut oracle = Oracle::new(&bank, solves);
                session.run(&mut engine, &mut oracle, &mut out).unwrap()
            }
            None => session.run(&mut engine, &mut AlwaysWrong, &mut out).unwrap(),
        };

        (session, summary, String::from_utf8(out).unwrap())
    }

    fn assert_board_matches_players(session: &GameSession) {
        let won: u32 = session.players().iter().map(|p| p.cells_won).sum();
        assert_eq!(session.board().filled_count(), won as usize);
        for player in session.players() {
            assert_eq!(
                session.board().count_for(player.id),
                player.cells_won as usize
            );
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new("Ann", "Bob");
        assert_eq!(session.current_player().id, PlayerId::One);
        assert_eq!(session.player(PlayerId::Two).name, "Bob");
        assert_eq!(session.turns_played(), 0);
        assert!(!session.is_over());
        assert!(session.end_reasons().is_empty());
    }

    #[test]
    fn test_turn_counter_counts_every_answer() {
        let mut session = GameSession::new("Ann", "Bob");
        let pattern = [true, false, false, true, false, true, true];

        for (i, correct) in pattern.into_iter().enumerate() {
            session.record_answer(correct, Duration::from_millis(250)).unwrap();
            session.switch_player();
            assert_eq!(session.turns_played(), i as u32 + 1);
        }

        assert_eq!(session.board().filled_count(), 4);
        assert_board_matches_players(&session);
    }

    #[test]
    fn test_player_alternates_regardless_of_outcome() {
        let mut session = GameSession::new("Ann", "Bob");
        session.record_answer(true, Duration::ZERO).unwrap();
        session.switch_player();
        assert_eq!(session.current_player().id, PlayerId::Two);
        session.record_answer(false, Duration::ZERO).unwrap();
        session.switch_player();
        assert_eq!(session.current_player().id, PlayerId::One);
    }

    #[test]
    fn test_time_accumulates_per_player() {
        let mut session = GameSession::new("Ann", "Bob");
        session.record_answer(false, Duration::from_secs(2)).unwrap();
        session.switch_player();
        session.record_answer(true, Duration::from_millis(500)).unwrap();
        session.switch_player();
        session.record_answer(true, Duration::from_secs(3)).unwrap();

        assert_eq!(session.player(PlayerId::One).total_time, 5.0);
        assert_eq!(session.player(PlayerId::Two).total_time, 0.5);
    }

    #[test]
    fn test_correct_answer_on_full_board_only_books_time() {
        let mut session = GameSession::new("Ann", "Bob");
        for _ in 0..BOARD_CELLS {
            assert!(session.record_answer(true, Duration::ZERO).unwrap().is_some());
        }
        assert!(session.board().is_full());

        let claimed = session.record_answer(true, Duration::from_secs(4)).unwrap();

        assert_eq!(claimed, None);
        assert_eq!(session.player(PlayerId::One).cells_won, 9);
        assert_eq!(session.player(PlayerId::One).total_time, 4.0);
        assert_eq!(session.turns_played(), 10);
        assert_board_matches_players(&session);
    }

    #[test]
    fn test_both_end_reasons_on_last_turn() {
        let mut session = GameSession::new("Ann", "Bob");
        for turn in 0..MAX_TURNS {
            session.record_answer(turn >= MAX_TURNS - 9, Duration::ZERO)
                .unwrap();
            session.switch_player();
        }

        assert!(session.is_over());
        assert_eq!(
            session.end_reasons(),
            vec![EndReason::TurnLimitReached, EndReason::GridFull]
        );
    }

    #[test]
    fn test_all_wrong_runs_to_turn_limit() {
        let (session, summary, printed) = play(None);

        assert_eq!(summary.turns_played, MAX_TURNS);
        assert_eq!(session.turns_played(), MAX_TURNS);
        assert_eq!(session.board().filled_count(), 0);
        assert_eq!(summary.reasons, vec![EndReason::TurnLimitReached]);
        assert!(summary.cards.iter().all(|card| card.final_score <= 0.0));
        assert!(printed.contains("-> Turn limit (27) reached."));
        assert!(!printed.contains("-> Matrix is full."));
        assert!(printed.contains("GAME OVER"));
        assert!(printed.contains("THE WINNER IS: "));
    }

    #[test]
    fn test_one_player_fills_board_early() {
        let (session, summary, printed) = play(Some([true, false]));

        assert!(summary.reasons.contains(&EndReason::GridFull));
        assert_eq!(session.board().filled_count(), BOARD_CELLS);
        // Player one's ninth turn is the 17th turn overall
        assert_eq!(summary.turns_played, 17);
        assert_eq!(session.player(PlayerId::One).cells_won, 9);
        assert_eq!(session.player(PlayerId::Two).cells_won, 0);
        assert_board_matches_players(&session);
        assert!(matches!(
            summary.verdict,
            Verdict::Winner {
                player: PlayerId::One,
                ..
            }
        ));
        assert!(printed.contains("-> Matrix is full."));
        assert!(printed.ends_with("THE WINNER IS: Player 1\n"));
    }

    #[test]
    fn test_both_players_share_board_in_fill_order() {
        let (session, summary, _) = play(Some([true, true]));

        assert_eq!(summary.turns_played, 9);
        assert_eq!(summary.reasons, vec![EndReason::GridFull]);
        assert_eq!(session.player(PlayerId::One).cells_won, 5);
        assert_eq!(session.player(PlayerId::Two).cells_won, 4);
        assert_eq!(
            session.board().cell(Position { row: 0, col: 1 }),
            Some(PlayerId::Two)
        );
        assert_eq!(
            session.board().cell(Position { row: 2, col: 2 }),
            Some(PlayerId::One)
        );
    }

    #[test]
    fn test_status_banner() {
        let mut session = GameSession::new("Ann", "Bob");
        session.record_answer(true, Duration::ZERO).unwrap();

        let banner = session.status_banner();
        assert!(banner.contains("=== MATRIX (Filled: 1/9) ==="));
        assert!(banner.contains("=== TURNS PLAYED: 1/27 ==="));
        assert!(banner.contains("|  P1  |  _   |  _   |"));
    }
}
