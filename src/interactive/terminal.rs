//! Line-based terminal over any reader/writer pair

use super::TextIo;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Prompts on `writer`, reads answers from `reader`
///
/// Tests drive it with a `Cursor` and a `Vec<u8>`; the binary uses
/// [`Terminal::stdio`].
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
    pace: Duration,
    spinner: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// A terminal with no pacing
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pace: Duration::ZERO,
            spinner: false,
        }
    }

    /// Pause for `pace` at each [`TextIo::pause`]
    #[must_use]
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Everything written so far
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal on the process's stdin/stdout
    ///
    /// Pauses show a spinner when stdout is a terminal and sleep silently
    /// otherwise.
    #[must_use]
    pub fn stdio(pace: Duration) -> Self {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let spinner = stdout.is_terminal();
        Self {
            reader: stdin.lock(),
            writer: stdout,
            pace,
            spinner,
        }
    }
}

impl<R: BufRead, W: Write> TextIo for Terminal<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        Ok(input.trim().to_uppercase())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn pause(&mut self) {
        if self.pace.is_zero() {
            return;
        }

        if self.spinner {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan}") {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            thread::sleep(self.pace);
            spinner.finish_and_clear();
        } else {
            thread::sleep(self.pace);
        }
    }
}
