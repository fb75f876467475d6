//! Diagnostic logging.
//!
//! Events go to standard error so they never mix with the greeting. The
//! filter is fixed at `warn` and nothing on the normal path logs at that
//! level, so a successful run leaves standard error empty.

use std::io;

use anyhow::Result;
use tracing_subscriber::filter::LevelFilter;

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(LevelFilter::WARN)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(anyhow::Error::msg)
}
