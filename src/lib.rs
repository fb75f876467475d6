//! Greeting output for the `hey-world` binary.
//!
//! The greeting is two fixed lines. The first carries its own trailing
//! newline, so once a line terminator is appended it is followed by a blank
//! line:
//!
//! ```text
//! The classic Hello World!
//!
//! This is a text is separated from the upper one
//! ```

pub mod logging;

use std::io::{self, Write};

use tracing::debug;

/// Opening line of the greeting, including its embedded newline.
pub const CLASSIC_GREETING: &str = "The classic Hello World!\n";

/// Line written after the blank line left by [`CLASSIC_GREETING`].
pub const SEPARATED_LINE: &str = "This is a text is separated from the upper one";

/// Writes both greeting lines to `out`, in order, each followed by a line
/// terminator, then flushes it.
///
/// # Errors
///
/// Returns the first I/O error raised while writing to or flushing `out`.
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{CLASSIC_GREETING}")?;
    writeln!(out, "{SEPARATED_LINE}")?;
    out.flush()?;
    debug!("greeting written");
    Ok(())
}
