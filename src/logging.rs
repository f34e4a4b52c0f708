use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// Log lines go to stderr so stdout stays usable in scripts. The level comes
/// from `RUST_LOG`, defaulting to "info". Keep the returned guard alive until
/// the process exits, dropping it flushes pending output.
pub fn init(color: bool) -> Result<WorkerGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(guard)
}
