//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with the game's stdout.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a `-v` count: 0 → warn, 1 → info, 2 → debug, 3+ → trace
#[must_use]
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "vocahangman=warn",
        1 => "vocahangman=info",
        2 => "vocahangman=debug",
        _ => "vocahangman=trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides `verbosity`
pub fn init_tracing(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "vocahangman=warn");
        assert_eq!(level_for(1), "vocahangman=info");
        assert_eq!(level_for(2), "vocahangman=debug");
        assert_eq!(level_for(7), "vocahangman=trace");
    }

    #[test]
    fn directives_parse() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(level_for(verbosity)).is_ok());
        }
    }
}
