//! Vocahangman
//!
//! A terminal vocabulary game: educators build a word → synonym dictionary,
//! students are shown a synonym and guess the word one letter at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use vocahangman::core::{Game, Word};
//!
//! let mut game = Game::new(Word::new("cat").unwrap());
//! game.guess_letter('A');
//! game.guess_letter('C');
//! assert_eq!(game.revealed(), "CA-");
//! assert_eq!(game.score(), 66);
//! ```

// Round engine and word type
pub mod core;

// Vocabulary and score ledger
pub mod records;

// Named persistence stores
pub mod store;

// Session implementations
pub mod commands;

// Line-based text I/O
pub mod interactive;

// Terminal output formatting
pub mod output;

// Command-line settings
pub mod config;

// Diagnostic logging
pub mod logging;
