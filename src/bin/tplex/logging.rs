//! Logging setup for the command line tool
//!
//! Diagnostics go to stderr so token output on stdout stays clean. `RUST_LOG` wins when set;
//! otherwise the level comes from the number of `-v` flags.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,tplex=debug",
        _ => "debug,tplex=trace",
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .without_time()
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
