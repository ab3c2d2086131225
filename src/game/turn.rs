use rand::{seq::IndexedRandom, Rng};
use std::{
    io::Write,
    thread,
    time::{Duration, Instant},
};

use crate::{
    dictionary::{VocabularyBank, MAX_WORD_LEN, MIN_WORD_LEN},
    error::{GameError, Result},
    game::{difficulty::allowed_lengths, scrambler::Scrambler, session::GameSession},
    input::{normalize, AnswerSource},
    models::TurnOutcome,
};

/// A word to guess and the scramble shown in its place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub target: String,
    pub scrambled: String,
}

/// Runs single turns: picks a word, scrambles it, times the answer
pub struct TurnEngine<'a, R> {
    vocabulary: &'a VocabularyBank,
    rng: R,
    ready_pause: Duration,
}

impl<'a, R: Rng> TurnEngine<'a, R> {
    pub fn new(vocabulary: &'a VocabularyBank, rng: R, ready_pause: Duration) -> Self {
        Self {
            vocabulary,
            rng,
            ready_pause,
        }
    }

    /// Draw a word suited to the board's fill count.
    ///
    /// Falls back to the whole bank when no word has an allowed length.
    pub fn pick_word(&mut self, filled: usize) -> Result<&'a str> {
        let vocabulary = self.vocabulary;
        let lengths = allowed_lengths(filled);
        let candidates = vocabulary.words_of_length(lengths);

        if let Some(&word) = candidates.choose(&mut self.rng) {
            return Ok(word);
        }

        tracing::warn!(
            "No {:?}-letter words in vocabulary bank, picking from all {} words",
            lengths,
            vocabulary.len()
        );
        let all: Vec<&'a str> = vocabulary.words().collect();
        all.choose(&mut self.rng)
            .copied()
            .ok_or(GameError::EmptyVocabulary {
                min: MIN_WORD_LEN,
                max: MAX_WORD_LEN,
            })
    }

    pub fn challenge(&mut self, filled: usize) -> Result<Challenge> {
        let target = self.pick_word(filled)?;
        let scrambled = Scrambler::scramble(target, &mut self.rng);
        Ok(Challenge {
            target: target.to_string(),
            scrambled,
        })
    }

    /// Play one turn for the session's current player.
    ///
    /// Time and the turn counter are charged whatever the answer. Switching
    /// to the other player is left to the session.
    pub fn play_turn<S, W>(
        &mut self,
        session: &mut GameSession,
        source: &mut S,
        out: &mut W,
    ) -> Result<TurnOutcome>
    where
        S: AnswerSource,
        W: Write,
    {
        let player = session.current_player().id;
        let Challenge { target, scrambled } = self.challenge(session.board().filled_count())?;

        writeln!(out, "\n>>> {}'s Turn", session.current_player().name)?;
        writeln!(out, "WARNING: Timer starts immediately with the prompt below!")?;
        out.flush()?;
        if !self.ready_pause.is_zero() {
            thread::sleep(self.ready_pause);
        }

        write!(out, "Unscramble [ {} ] >> ", scrambled)?;
        out.flush()?;

        let started = Instant::now();
        let raw = source.read_answer(&scrambled)?;
        let elapsed = started.elapsed();

        let answer = match raw {
            Some(line) => normalize(&line),
            None => {
                tracing::warn!("Input closed, treating answer as empty");
                writeln!(out)?;
                String::new()
            }
        };
        let correct = answer == target;
        let claimed = session.record_answer(correct, elapsed)?;

        writeln!(out, "   Time Taken: {:.2}s", elapsed.as_secs_f64())?;
        match (correct, claimed) {
            (true, Some(_)) => {
                writeln!(out, "   CORRECT! '{}' -> You win a cell.", target)?
            }
            (true, None) => writeln!(
                out,
                "   CORRECT! '{}' -> (Matrix full, no cell added)",
                target
            )?,
            (false, _) => writeln!(
                out,
                "   WRONG! The word was '{}'. You lost the strike.",
                target
            )?,
        }

        tracing::debug!(
            player = %player,
            target = %target,
            correct,
            elapsed_ms = elapsed.as_millis() as u64,
            "Turn finished"
        );

        Ok(TurnOutcome {
            player,
            target,
            scrambled,
            answer,
            elapsed,
            correct,
            claimed,
        })
    }
}
