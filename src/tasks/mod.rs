use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::compiler::StylesheetCompiler;
use crate::config::ProjectLayout;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeId;

mod compile_theme;
mod replace_reds;

pub use compile_theme::compile_default_theme;
pub use replace_reds::replace_reds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ReplaceReds,
    CompileDefaultTheme,
}

/// Why a task finished without writing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTheme,
    InvalidReplacements,
    InvalidHex,
    IncompletePreset,
    MissingStylesheet,
    CompilerFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Written(PathBuf),
    Skipped(SkipReason),
}

pub fn run_task<C: StylesheetCompiler>(
    task: Task,
    theme: Option<&str>,
    layout: &ProjectLayout,
    compiler: &C,
) -> AppResult<TaskOutcome> {
    let Some(theme) = theme.and_then(ThemeId::parse) else {
        tracing::warn!(?task, "Missing theme argument");
        return Ok(TaskOutcome::Skipped(SkipReason::MissingTheme));
    };

    tracing::debug!(?task, theme = %theme, ?layout, "running task");
    match task {
        Task::ReplaceReds => replace_reds(layout, &theme),
        Task::CompileDefaultTheme => compile_default_theme(layout, &theme, compiler),
    }
}

/// Reads a source stylesheet; `None` when the file does not exist.
fn read_stylesheet(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AppError::ReadStylesheet {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_output(dir: &Path, file_name: &str, contents: &str) -> AppResult<PathBuf> {
    let path = dir.join(file_name);
    fs::create_dir_all(dir).map_err(|source| AppError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, contents).map_err(|source| AppError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    tracing::info!(?path, "wrote output");
    Ok(path)
}
