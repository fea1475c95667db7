use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber that writes to stderr.
///
/// The level comes from `RUST_LOG`, defaulting to "warn". `verbose` forces
/// "debug" regardless of the environment. Stdout is left alone so piped
/// output stays clean.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Logging initialized");
    Ok(())
}
