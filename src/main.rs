use anyhow::Result;
use clap::Parser;
use theme_tasks::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    theme_tasks::run(cli)?;
    Ok(())
}
