//! depbot - dependency-update agent extraction CLI
//!
//! Extracts dependency records from a manifest file and prints them as
//! JSON. A manifest with nothing to track prints an empty list and exits
//! successfully; it is not a fatal condition.

use clap::Parser;
use depbot::cli::CliArgs;
use depbot::extract::extract_file;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = args.extract_config();
    let result = extract_file(&args.manifest, &config)?;
    let deps = result.map(|file| file.deps).unwrap_or_default();

    if deps.is_empty() && !args.quiet {
        eprintln!(
            "no trackable dependencies in {}",
            args.manifest.display()
        );
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&deps)?
    } else {
        serde_json::to_string(&deps)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
