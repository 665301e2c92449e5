use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr.
///
/// Logging is off unless `BETTERFLAG_LOG` is set; its value is used as the
/// filter directive (e.g. `debug`, `betterflag=trace`). An empty value means `warn`.
pub fn init_tracing() {
    let Ok(directive) = std::env::var("BETTERFLAG_LOG") else {
        return;
    };

    let filter = if directive.trim().is_empty() {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // a host program may have installed its own subscriber already
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
