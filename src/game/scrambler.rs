use rand::{seq::SliceRandom, Rng};

pub struct Scrambler;

impl Scrambler {
    /// Randomly permute the characters of `word`.
    ///
    /// When the word holds at least two different characters the result is
    /// guaranteed to differ from the input. A word made of one repeated
    /// character comes back unchanged.
    pub fn scramble(word: &str, rng: &mut impl Rng) -> String {
        let mut chars: Vec<char> = word.chars().collect();

        if !Self::can_differ(&chars) {
            return word.to_string();
        }

        loop {
            chars.shuffle(rng);
            let scrambled: String = chars.iter().collect();
            if scrambled != word {
                return scrambled;
            }
        }
    }

    fn can_differ(chars: &[char]) -> bool {
        chars.windows(2).any(|pair| pair[0] != pair[1])
    }
}
