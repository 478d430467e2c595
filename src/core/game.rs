//! Hangman round state and rules
//!
//! A `Game` owns one round: the target word, the revealed pattern and the
//! guess counters. It is mutated only through [`Game::guess_letter`].
//!
//! Termination is checked two ways that must stay independent:
//! - [`Game::has_ended`]: too many wrong guesses, or as many correct guesses
//!   as the target has letters
//! - [`Game::is_solved`]: the revealed pattern equals the target
//!
//! `correct_guesses` counts reveal events, not revealed positions, so a word
//! with repeated letters never reaches the `has_ended` win threshold. Such
//! rounds are won through `is_solved` alone.

use super::Word;

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: usize = 6;

/// Symbol shown for an unguessed position
pub const PLACEHOLDER: char = '-';

/// Letters that never count as a wrong guess
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// A single hangman round
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    revealed: Vec<char>,
    correct: usize,
    wrong: usize,
}

impl Game {
    /// Start a round for `target` with every position hidden
    #[must_use]
    pub fn new(target: Word) -> Self {
        let revealed = vec![PLACEHOLDER; target.len()];
        Self {
            target,
            revealed,
            correct: 0,
            wrong: 0,
        }
    }

    /// Guess a single letter
    ///
    /// Returns true when the letter is in the target and was not revealed
    /// yet; every occurrence is revealed and the correct counter goes up by
    /// one. A miss returns false and counts as wrong unless it is a vowel. A
    /// repeat of an already revealed letter, or any guess after the round
    /// has ended, returns false and changes nothing.
    ///
    /// Letters are compared case-insensitively. Input validation is left to
    /// the caller.
    ///
    /// # Examples
    /// ```
    /// use vocahangman::core::{Game, Word};
    ///
    /// let mut game = Game::new(Word::new("cat").unwrap());
    /// assert!(game.guess_letter('A'));
    /// assert_eq!(game.revealed(), "-A-");
    /// assert!(!game.guess_letter('Z'));
    /// assert_eq!(game.wrong_guesses(), 1);
    /// ```
    pub fn guess_letter(&mut self, letter: char) -> bool {
        if self.has_ended() {
            return false;
        }

        let letter = letter.to_ascii_uppercase();
        if self.is_revealed(letter) {
            return false;
        }

        let positions: &[usize] = if letter.is_ascii() {
            self.target.positions_of(letter as u8)
        } else {
            &[]
        };

        if positions.is_empty() {
            if !VOWELS.contains(&letter) {
                self.wrong += 1;
            }
            return false;
        }

        for &i in positions {
            self.revealed[i] = letter;
        }
        self.correct += 1;
        true
    }

    /// Whether `letter` already shows up in the revealed pattern
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.revealed.contains(&letter)
    }

    /// True once the wrong-guess limit is hit or the correct counter reaches
    /// the target length
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.wrong >= MAX_WRONG_GUESSES || self.correct >= self.total_correct_guesses()
    }

    /// True when the revealed pattern spells the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed() == self.target.text()
    }

    /// Partial credit in `0..=100`, rounded down
    #[must_use]
    pub fn score(&self) -> u32 {
        let score = self.correct * 100 / self.total_correct_guesses();
        u32::try_from(score.min(100)).unwrap_or(100)
    }

    /// Correct guesses needed for `has_ended`: the full target length
    #[must_use]
    pub fn total_correct_guesses(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// The revealed pattern, e.g. `"-A-"`
    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    #[must_use]
    pub const fn correct_guesses(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(target: &str) -> Game {
        Game::new(Word::new(target).unwrap())
    }

    #[test]
    fn new_game_is_fully_hidden() {
        let g = game("vocabulary");
        assert_eq!(g.revealed(), "----------");
        assert_eq!(g.correct_guesses(), 0);
        assert_eq!(g.wrong_guesses(), 0);
        assert_eq!(g.score(), 0);
        assert!(!g.has_ended());
        assert!(!g.is_solved());
    }

    #[test]
    fn cat_scenario() {
        let mut g = game("CAT");

        assert!(g.guess_letter('A'));
        assert_eq!(g.revealed(), "-A-");
        assert_eq!(g.correct_guesses(), 1);
        assert_eq!(g.score(), 33);

        assert!(!g.guess_letter('Z'));
        assert_eq!(g.wrong_guesses(), 1);
        assert_eq!(g.revealed(), "-A-");

        assert!(g.guess_letter('C'));
        assert_eq!(g.revealed(), "CA-");
        assert_eq!(g.correct_guesses(), 2);
        assert_eq!(g.score(), 66);

        assert!(g.guess_letter('T'));
        assert_eq!(g.revealed(), "CAT");
        assert_eq!(g.correct_guesses(), 3);
        assert_eq!(g.score(), 100);
        assert!(g.is_solved());
        assert!(g.wrong_guesses() < MAX_WRONG_GUESSES);
    }

    #[test]
    fn dog_six_wrong_guesses_ends_round() {
        let mut g = game("DOG");
        for _ in 0..MAX_WRONG_GUESSES {
            assert!(!g.has_ended());
            assert!(!g.guess_letter('X'));
        }
        assert!(g.has_ended());
        assert_eq!(g.wrong_guesses(), 6);
        assert_eq!(g.correct_guesses(), 0);
        assert_eq!(g.score(), 0);
        assert!(!g.is_solved());
    }

    #[test]
    fn wrong_counter_stops_at_limit() {
        let mut g = game("DOG");
        for letter in ['B', 'C', 'F', 'H', 'J', 'K', 'L', 'M'] {
            g.guess_letter(letter);
        }
        assert_eq!(g.wrong_guesses(), MAX_WRONG_GUESSES);
        assert!(!g.guess_letter('D'));
        assert_eq!(g.revealed(), "---");
    }

    #[test]
    fn ends_after_exactly_six_distinct_wrong_consonants() {
        let mut g = game("PUZZLE");
        for (i, letter) in ['B', 'C', 'D', 'F', 'G', 'H'].into_iter().enumerate() {
            assert!(!g.has_ended(), "ended early after {i} wrong guesses");
            g.guess_letter(letter);
        }
        assert!(g.has_ended());
    }

    #[test]
    fn wrong_vowels_are_free() {
        let mut g = game("SHY");
        for vowel in VOWELS {
            assert!(!g.guess_letter(vowel));
        }
        assert_eq!(g.wrong_guesses(), 0);
        assert_eq!(g.revealed(), "---");
    }

    #[test]
    fn correct_vowel_counts_as_correct() {
        let mut g = game("TEA");
        assert!(g.guess_letter('E'));
        assert_eq!(g.correct_guesses(), 1);
        assert_eq!(g.wrong_guesses(), 0);
    }

    #[test]
    fn guess_reveals_every_occurrence() {
        let mut g = game("BANANA");
        assert!(g.guess_letter('A'));
        assert_eq!(g.revealed(), "-A-A-A");
        assert_eq!(g.correct_guesses(), 1);
        assert!(g.guess_letter('N'));
        assert_eq!(g.revealed(), "-ANANA");
    }

    #[test]
    fn revealed_never_shows_foreign_letters() {
        let mut g = game("LEVEL");
        for letter in 'A'..='Z' {
            g.guess_letter(letter);
            for (shown, actual) in g.revealed().chars().zip(g.target().text().chars()) {
                assert!(shown == PLACEHOLDER || shown == actual);
            }
        }
    }

    #[test]
    fn repeated_guess_is_a_noop() {
        let mut g = game("CAT");
        assert!(g.guess_letter('C'));
        let before = (g.revealed(), g.correct_guesses(), g.wrong_guesses());

        assert!(!g.guess_letter('C'));
        assert!(!g.guess_letter('c'));
        assert_eq!(
            (g.revealed(), g.correct_guesses(), g.wrong_guesses()),
            before
        );
    }

    #[test]
    fn repeated_wrong_guess_counts_again() {
        // Misses are never recorded in the pattern, so they are not repeats
        let mut g = game("CAT");
        g.guess_letter('Z');
        g.guess_letter('Z');
        assert_eq!(g.wrong_guesses(), 2);
    }

    #[test]
    fn lowercase_guess_is_normalized() {
        let mut g = game("CAT");
        assert!(g.guess_letter('t'));
        assert_eq!(g.revealed(), "--T");
    }

    #[test]
    fn non_ascii_guess_counts_as_wrong() {
        let mut g = game("CAT");
        assert!(!g.guess_letter('é'));
        assert_eq!(g.wrong_guesses(), 1);
    }

    #[test]
    fn repeated_letters_solve_without_ending() {
        let mut g = game("BANANA");
        g.guess_letter('B');
        g.guess_letter('A');
        g.guess_letter('N');
        assert!(g.is_solved());
        assert_eq!(g.correct_guesses(), 3);
        assert!(!g.has_ended());
        assert_eq!(g.score(), 50);
    }

    #[test]
    fn distinct_letters_solve_and_end_together() {
        let mut g = game("DOG");
        for letter in ['D', 'O', 'G'] {
            g.guess_letter(letter);
        }
        assert!(g.is_solved());
        assert!(g.has_ended());
    }

    #[test]
    fn score_is_monotonic_and_floored() {
        let mut g = game("ABCDEFG");
        let mut last = g.score();
        for letter in ['A', 'B', 'Z', 'C', 'D', 'E', 'F', 'G'] {
            g.guess_letter(letter);
            let score = g.score();
            assert!(score >= last);
            assert_eq!(score as usize, 100 * g.correct_guesses() / 7);
            last = score;
        }
        assert_eq!(last, 100);
    }
}
