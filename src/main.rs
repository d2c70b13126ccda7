use birdtrack_cleaner::cli::{run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).map_err(|e| {
        let stage = e.stage();
        anyhow::Error::new(e).context(format!("{} stage failed", stage))
    })
}
