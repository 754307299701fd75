pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod logging;
pub mod replace;
pub mod stylesheet;
pub mod tasks;
pub mod theme;
pub mod variables;
pub use error::{AppError, AppResult};

use crate::compiler::GrassCompiler;
use crate::tasks::TaskOutcome;

/// Entrypoint used by the CLI binary.
pub fn run(cli: cli::Cli) -> AppResult<TaskOutcome> {
    logging::init(cli.verbose);

    let settings = config::load_settings(cli.config.as_deref());
    let layout = settings.merged_with(&cli.layout.to_settings()).into_layout();

    let task = cli.command.task();
    tracing::info!(?task, theme = ?cli.command.theme(), "starting theme task");
    let outcome = tasks::run_task(task, cli.command.theme(), &layout, &GrassCompiler)?;

    tracing::info!(?outcome, "theme task finished");
    Ok(outcome)
}
