//! Formatting utilities for terminal output

use crate::core::MAX_WRONG_GUESSES;

/// Hangman drawings, one per wrong-guess count from 0 to 6
pub const GALLOWS: [&str; MAX_WRONG_GUESSES + 1] = [
    r"
   --------
   |      |
   |
   |
   |
   |
   -",
    r"
   --------
   |      |
   |      O
   |
   |
   |
   -",
    r"
   --------
   |      |
   |      O
   |      |
   |      |
   |
   -",
    r"
   --------
   |      |
   |      O
   |     \|
   |      |
   |
   -",
    r"
   --------
   |      |
   |      O
   |     \|/
   |      |
   |
   -",
    r"
   --------
   |      |
   |      O
   |     \|/
   |      |
   |     /
   -",
    r"
   --------
   |      |
   |      O
   |     \|/
   |      |
   |     / \
   -",
];

/// Drawing for `wrong` wrong guesses, clamped to the last stage
#[must_use]
pub fn gallows(wrong: usize) -> &'static str {
    GALLOWS[wrong.min(MAX_WRONG_GUESSES)]
}

/// Spread a revealed pattern out for readability: `"-A-"` → `"- A -"`
#[must_use]
pub fn spaced(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, ch) in pattern.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) as usize * width) / max as usize
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
