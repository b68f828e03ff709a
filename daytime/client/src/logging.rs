use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "daytime_core=debug,daytimetcpcli=debug";

/// Diagnostics go to stderr only, so stdout carries nothing but what the server sent.
/// `RUST_LOG` wins over `--verbose`; without either, logging is off.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { "off" };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
