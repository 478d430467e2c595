//! Text I/O surface shared by every session
//!
//! Sessions never touch stdin/stdout directly; they talk to a [`TextIo`].

mod terminal;

pub use terminal::Terminal;

use std::io;

/// Prompt/print collaborator used by the sessions
pub trait TextIo {
    /// Show `text` and read one line, trimmed and uppercased
    ///
    /// # Errors
    /// Returns an error if writing fails, or `UnexpectedEof` once input is
    /// closed.
    fn prompt(&mut self, text: &str) -> io::Result<String>;

    /// Print `text` followed by a newline
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Cosmetic pause between game steps
    fn pause(&mut self);
}
