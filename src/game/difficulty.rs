/// Word lengths allowed for a given number of filled cells.
///
/// Difficulty ramps every three cells:
/// - 0-2 filled: 4-5 letters
/// - 3-5 filled: 5-6 letters
/// - 6-8 filled: 6-7 letters
///
/// A full board never asks for a word, but 9 or more keeps the hardest tier.
pub fn allowed_lengths(filled: usize) -> &'static [usize] {
    match filled {
        0..=2 => &[4, 5],
        3..=5 => &[5, 6],
        _ => &[6, 7],
    }
}
