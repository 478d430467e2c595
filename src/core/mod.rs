//! Core domain types for Vocahangman
//!
//! This module holds the round engine and the validated word type. Nothing
//! here does I/O; every rule of a round lives in [`Game`].

mod game;
mod word;

pub use game::{Game, MAX_WRONG_GUESSES, PLACEHOLDER, VOWELS};
pub use word::{Word, WordError, is_alphabetic};
