//! CLI entry point for the `subencode` binary.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};
use subencode::logging::init_logging;
use subencode::render::{render, OutputFormat};
use subencode::template::template_bytes_outside;
use subencode_core::{encode_hex, encode_payload, AlphabetSource, EncodeError};
#[cfg(test)]
use tempfile as _;
use tracing::{debug, warn};
use tracing_subscriber as _;

/// Encode a payload as allowed-byte x86 SUB sequences.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "subencode", version)]
#[command(group(ArgGroup::new("payload").required(true).args(["input", "input_file"])))]
#[command(group(ArgGroup::new("alphabet").required(true).args(["goodbytes", "badbytes"])))]
struct Args {
    /// Payload bytes as hex text
    #[arg(long)]
    input: Option<String>,

    /// Read payload hex text from a file
    #[arg(long = "input-file", value_name = "PATH")]
    input_file: Option<PathBuf>,

    /// Bytes allowed in the output, as hex
    #[arg(long)]
    goodbytes: Option<String>,

    /// Bytes forbidden in the output, as hex
    #[arg(long)]
    badbytes: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Python)]
    format: OutputFormat,

    /// Variable name for the python format
    #[arg(long = "variable-name", visible_alias = "variablename", default_value = "var")]
    variable_name: String,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn alphabet_source(&self) -> AlphabetSource {
        match (&self.goodbytes, &self.badbytes) {
            (Some(allowed), _) => AlphabetSource::Allowed(allowed.clone()),
            (None, Some(forbidden)) => AlphabetSource::Forbidden(forbidden.clone()),
            (None, None) => AlphabetSource::Forbidden(String::new()),
        }
    }

    fn payload(&self) -> Result<String, String> {
        match (&self.input, &self.input_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display())),
            (None, None) => Err("missing payload".to_string()),
        }
    }
}

fn encode(args: &Args, payload: &str) -> Result<String, EncodeError> {
    let alphabet = args.alphabet_source().resolve()?;
    debug!(size = alphabet.len(), "alphabet resolved");

    let outside = template_bytes_outside(&alphabet);
    if !outside.is_empty() {
        warn!(
            bytes = %encode_hex(&outside),
            "instruction template contains bytes outside the alphabet"
        );
    }

    let words = encode_payload(payload, &alphabet)?;
    Ok(render(args.format, &words, &args.variable_name))
}

fn run(args: &Args) -> Result<(), String> {
    let payload = args.payload()?;
    let rendered = encode(args, &payload).map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            debug!(path = %path.display(), bytes = rendered.len(), "wrote output");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}
