//! Shared components for CLI commands

use crate::{Error, Result};
use std::path::Path;

/// Set up structured logging for a command.
///
/// Logs go to stderr so that report output on stdout stays clean. The
/// `POSTI_PROCESSOR_LOG`-style `RUST_LOG` environment variable overrides the
/// CLI verbosity flags.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("posti_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Write rendered output to the given file, or to stdout when none is set
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => std::fs::write(path, content)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e)),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
