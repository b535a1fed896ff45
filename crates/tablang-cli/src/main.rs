//! `tablang` CLI: convert tablang configuration files to JSON and back.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a tablang file and print indented JSON
//! tablang parse -i config.tl
//!
//! # Parse from stdin, compact JSON to a file
//! cat config.tl | tablang parse --compact -o config.json
//!
//! # Write a JSON document back out as tablang
//! tablang emit -i config.json
//!
//! # Log what is read and written (or use RUST_LOG=debug)
//! tablang -v parse -i config.tl
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tablang", version, about = "tablang configuration language CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress to stderr at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a tablang file and print it as JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },
    /// Convert a JSON document to tablang text
    Emit {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Parse {
            input,
            output,
            compact,
        } => {
            let source = read_input(input.as_deref())?;
            let doc = tablang_core::parse_str(&source).context("Failed to parse tablang")?;
            info!(entries = doc.len(), "parsed document");

            let json = if compact {
                doc.to_json()
            } else {
                doc.to_json_pretty()
            }
            .context("Failed to render JSON")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Emit { input, output } => {
            let json = read_input(input.as_deref())?;
            let text = tablang_core::emit_json(&json).context("Failed to convert JSON to tablang")?;
            info!(lines = text.lines().count(), "emitted tablang");
            // emitter output already ends in a newline
            write_raw(output.as_deref(), &text)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    let content = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    debug!(source = path.unwrap_or("<stdin>"), bytes = content.len(), "read input");
    Ok(content)
}

/// Write `content` followed by a newline.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    write_raw(path, &format!("{content}\n"))
}

fn write_raw(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            debug!(path, bytes = content.len(), "wrote output");
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
