use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for command-line use.
///
/// Logs go to stderr so that stdout stays clean for argument output.
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. "warn"
/// or "debug") sets the level.
pub fn init(default_directive: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init() {
        // We can only init once per process, so the result is ignored
        let _ = init("debug");

        debug!("This is a debug message");
        warn!("This is a warning message");
    }
}
