use std::io::{self, BufRead};

/// Where a player's answer comes from.
///
/// The turn engine starts its timer right before `read_answer` and stops it
/// when the call returns, so an implementation that gives up after a
/// deadline changes nothing else in the game.
pub trait AnswerSource {
    /// Block until one line of input is available.
    ///
    /// `scrambled` is the puzzle on screen; console input ignores it.
    /// `Ok(None)` means the input is exhausted.
    fn read_answer(&mut self, scrambled: &str) -> io::Result<Option<String>>;
}

/// Reads answers line by line with no timeout
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ConsoleInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> AnswerSource for ConsoleInput<R> {
    fn read_answer(&mut self, _scrambled: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Lowercased answer without surrounding whitespace
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}
