//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::output::write_records_csv;
use chatlens::core::{analyze, participants};
use chatlens::format::{OutputFormat, render_text, write_to_format};
use chatlens::parser::TranscriptParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.verbose);

    let parser = TranscriptParser::with_config(args.parser_config()?);
    let config = args.analysis_config()?;

    let transcript = parser.parse_file(&args.input)?;
    info!(
        messages = transcript.len(),
        folded = transcript.lines_folded,
        date_order = %transcript.date_order,
        "parsed {}",
        args.input.display()
    );
    if !transcript.preamble.is_empty() {
        debug!(lines = transcript.preamble.len(), "skipped preamble");
    }

    if let Some(path) = &args.records {
        write_records_csv(&transcript.messages, path)?;
        eprintln!("💾 Records saved to {}", path.display());
    }

    if args.list_users {
        println!("Overall");
        for name in participants(&transcript.messages) {
            println!("{name}");
        }
        return Ok(());
    }

    let scope = args.scope();
    let report = analyze(&scope, &transcript.messages, &config);
    let format: OutputFormat = args.format.into();

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, format)?;
            eprintln!("✅ Report saved to {}", path.display());
        }
        None => match format {
            OutputFormat::Json => println!("{}", chatlens::core::output::report_to_json(&report)?),
            _ => print!("{}", render_text(&report)),
        },
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}
