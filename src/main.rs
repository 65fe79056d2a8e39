//! `jtree` CLI - parse, validate, and pretty-print JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print JSON (stdin -> stdout)
//! echo '{"name":"Ada","age":36}' | jtree fmt
//!
//! # Pretty-print from file to file
//! jtree fmt -i data.json -o data.pretty.json
//!
//! # Validate only; prints "ok" or fails with the parse error
//! jtree check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jtree", version, about = "JSON parser and pretty-printer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and pretty-print it with two-space indentation
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse JSON and report whether it is well-formed
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
            let value = json_tree::parse(&text).context("failed to parse JSON")?;
            let mut rendered = json_tree::render(&value);
            rendered.push('\n');
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            json_tree::parse(&text).context("invalid JSON")?;
            println!("ok");
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
