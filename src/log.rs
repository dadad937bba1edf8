// src/log.rs
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILTER, LOG_FILTER_VERBOSE};

/// Install the stdout subscriber. `RUST_LOG` wins over `verbose` when set.
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let fallback = if verbose { LOG_FILTER_VERBOSE } else { LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
