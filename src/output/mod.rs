//! Terminal output formatting
//!
//! Builds the banners, drawings and listings the sessions print.

pub mod display;
pub mod formatters;

pub use display::{
    ledger_table, loss_message, round_status, rules_banner, score_history, vocabulary_listing,
    welcome_banner, win_message,
};
