//! Entrypoint for the hey-world application binary.

use std::io;

use anyhow::{Context, Result};
use hey_world::{logging, write_greeting};

/// Prints the greeting. Arguments and standard input are never consulted.
fn main() -> Result<()> {
    logging::init()?;
    let mut out = io::stdout().lock();
    write_greeting(&mut out).context("failed to write greeting to stdout")?;
    Ok(())
}
