//! `minijson` CLI — parse, format, and query JSON documents from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat to compact JSON with sorted object keys (stdin → stdout)
//! echo '{ "b": 1, "a": 2 }' | minijson fmt
//!
//! # Format from file to file
//! minijson fmt -i data.json -o compact.json
//!
//! # Extract a value by dot-separated path (object keys, array indices)
//! echo '{"user":{"name":"Alice"}}' | minijson get user.name
//!
//! # Validate a document (exit 0 on success)
//! minijson check -i data.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use minijson_core::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "minijson", version, about = "Minimal JSON parser and formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and re-emit it compactly with sorted object keys
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Extract the value at a dot-separated path and print it
    Get {
        /// Path of object keys and array indices, e.g. `users.0.name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse a document and report whether it is accepted
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = minijson_core::parse(&text).context("Failed to parse JSON")?;
            write_output(output.as_deref(), &minijson_core::serialize(&value))?;
        }
        Commands::Get { path, input } => {
            let text = read_input(input.as_deref())?;
            let value = minijson_core::parse(&text).context("Failed to parse JSON")?;
            let found = lookup_path(&value, &path)?;
            println!("{}", minijson_core::serialize(found));
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            minijson_core::parse(&text).context("Document rejected")?;
            println!("ok");
        }
    }

    Ok(())
}

/// Walk a dot-separated path through the tree. Each segment is an object
/// key, or an array index when the current value is an array and the
/// segment is numeric.
fn lookup_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match (current, segment.parse::<usize>()) {
            (Value::Array(items), Ok(index)) => items
                .get(index)
                .with_context(|| format!("Index `{segment}` out of range in path `{path}`"))?,
            (Value::Object(map), _) => map
                .get(segment)
                .with_context(|| format!("Key `{segment}` not found in path `{path}`"))?,
            (other, _) => bail!(
                "Cannot descend into {} with segment `{segment}` in path `{path}`",
                other.kind()
            ),
        };
    }
    Ok(current)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
