//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter directive when none is configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber.
///
/// Sets up a registry that:
/// 1. Filters events with an `EnvFilter` built from `config.trace_level`
/// 2. Formats them as single lines
/// 3. Writes to stderr natively, or to the developer console in the browser
///
/// An unparsable `trace_level` falls back to `info`.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use directory_listing::observability::init_tracing;
/// use directory_listing::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(output_layer());

    let _ = subscriber.try_init();
}

#[cfg(not(target_arch = "wasm32"))]
fn output_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
}

/// The browser has no usable clock for the formatter, so timestamps are left to
/// the console.
#[cfg(target_arch = "wasm32")]
fn output_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(super::console_writer::ConsoleWriter)
}
