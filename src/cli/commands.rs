use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::CleaningPipeline;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    println!("Cleaning tracking data...");
    println!("Input file: {}", cli.input.display());
    println!("Output file: {}", cli.output.display());

    let pipeline = CleaningPipeline::new()
        .with_preview_rows(cli.preview_rows)
        .with_silent(cli.quiet);
    let summary = pipeline.run(&cli.input, &cli.output)?;

    println!("\n{}", summary.generate_summary());

    if let Some(report) = &cli.report {
        summary.write_json(report)?;
        println!("Report written to {}", report.display());
    }

    println!("Cleaning complete!");
    Ok(())
}

/// Install the global subscriber: stderr by default, plain text when a log file is given
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default_level);

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| ProcessingError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // Already installed when run() is called more than once in a process
    if installed.is_err() {
        tracing::debug!("Global subscriber already set, keeping it");
    }

    Ok(())
}
