//! Output renderers for encoded words.
//!
//! All three renderers consume words in push order and emit the same
//! program: the [`crate::template`] prologue followed by one block per word.

use std::fmt::Write as _;

use clap::ValueEnum;
use subencode_core::{encode_hex, EncodedWord};

use crate::template::{assemble, program};

/// Bytes per line in the python renderer.
pub const PYTHON_BYTES_PER_LINE: usize = 16;

/// Selectable output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// NASM-style instruction listing.
    Asm,
    /// Python byte-string assignment, 16 bytes per line.
    #[default]
    Python,
    /// Contiguous lowercase hex bytes.
    Raw,
}

/// Renders `words` in the requested format.
///
/// `variable_name` is only used by [`OutputFormat::Python`].
#[must_use]
pub fn render(format: OutputFormat, words: &[EncodedWord], variable_name: &str) -> String {
    match format {
        OutputFormat::Asm => render_asm(words),
        OutputFormat::Python => render_python(words, variable_name),
        OutputFormat::Raw => render_raw(words),
    }
}

/// Readable instruction listing.
#[must_use]
pub fn render_asm(words: &[EncodedWord]) -> String {
    let mut out = String::from("[SECTION .text]\nglobal _start\n_start:\n");
    for instruction in program(words) {
        let _ = writeln!(out, "  {instruction}");
    }
    out
}

/// Python byte-string statements.
#[must_use]
pub fn render_python(words: &[EncodedWord], variable_name: &str) -> String {
    let bytes = assemble(&program(words));
    let mut out = format!("{variable_name} = b\"\"\n");
    for chunk in bytes.chunks(PYTHON_BYTES_PER_LINE) {
        let escaped: String = chunk.iter().map(|b| format!("\\x{b:02x}")).collect();
        let _ = writeln!(out, "{variable_name} += b\"{escaped}\"");
    }
    out
}

/// Contiguous hex byte stream with a trailing newline.
#[must_use]
pub fn render_raw(words: &[EncodedWord]) -> String {
    let mut out = encode_hex(&assemble(&program(words)));
    out.push('\n');
    out
}
