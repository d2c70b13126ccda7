use crate::utils::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_PREVIEW_ROWS};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "birdtrack-cleaner")]
#[command(about = "Clean a bird-tracking CSV export into a fixed column layout")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input tracking export (CSV)")]
    pub input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE, help = "Output CSV file path")]
    pub output: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_PREVIEW_ROWS,
        help = "Rows shown in each preview (0 disables previews)"
    )]
    pub preview_rows: usize,

    #[arg(long, help = "Also write the cleaning report as JSON")]
    pub report: Option<PathBuf>,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}
