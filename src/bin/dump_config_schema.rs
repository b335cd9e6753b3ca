use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Print the JSON schema for the artboard config file
#[derive(Parser, Debug)]
struct Args {
    /// Write the schema to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let schema = serde_json::to_string_pretty(&artboard::Config::json_schema())?;

    match args.output {
        Some(path) => fs::write(&path, schema + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.display()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
