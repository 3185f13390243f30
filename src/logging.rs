//! Tracing setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output when `verbose` is set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "dompet=debug" } else { "dompet=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
