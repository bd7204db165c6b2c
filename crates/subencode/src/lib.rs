//! Subtraction encoder front end: instruction template, renderers and
//! logging setup for the `subencode` binary.

#[cfg(test)]
use tempfile as _;
use tracing as _;

/// Logging initialisation.
pub mod logging;
/// Output renderers.
pub mod render;
/// Fixed x86 instruction template.
pub mod template;
