//! Session implementations

pub mod educator;
pub mod listing;
pub mod menu;
pub mod student;

pub use educator::run_educator;
pub use listing::{list_scores, list_words};
pub use menu::run_menu;
pub use student::{QUIT, RoundOutcome, play_round, run_student};
