//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! takes precedence over the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fintrack=warn",
        1 => "fintrack=info",
        2 => "fintrack=debug",
        _ => "fintrack=trace",
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "fintrack=warn");
        assert_eq!(default_directive(2), "fintrack=debug");
        assert_eq!(default_directive(9), "fintrack=trace");
    }
}
