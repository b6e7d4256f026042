use anyhow::{Context, Result};

/// Initialize tracing on stderr, keeping stdout free for progress and results.
/// RUST_LOG (if set) takes precedence. Otherwise, -v/-vv map to "debug"/"trace".
///
/// # Errors
/// Returns an error if the filter directive is invalid.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| base_level(verbosity).to_string());

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(filter).context("invalid RUST_LOG / filter")?;

    // Allow re-init to be a no-op in tests
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    Ok(())
}

const fn base_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(base_level(0), "info");
        assert_eq!(base_level(1), "debug");
        assert_eq!(base_level(3), "trace");
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing(0).unwrap();
        init_tracing(2).unwrap();
    }
}
