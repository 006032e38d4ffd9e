use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset. Security events are `warn` and pass it.
const DEFAULT_FILTER: &str = "info,bookshelf=info,actix_web=info,actix_server=warn";

/// JSON logs to stdout.
///
/// Each line carries the enclosing `request` span (trace id, method, path)
/// flattened into a `span` object, so handler and security events can be
/// joined with the `request_completed` line without a span list.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
