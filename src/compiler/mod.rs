use std::path::Path;

use thiserror::Error;

pub type CompileResult<T> = std::result::Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("stylesheet compilation failed: {message}")]
    Failed { message: String },
}

/// Turns SCSS source into CSS.
pub trait StylesheetCompiler {
    /// `load_path` is where relative `@import`/`@use` targets are resolved.
    fn compile(&self, source: &str, load_path: &Path) -> CompileResult<String>;
}

/// In-process compiler producing compressed CSS.
#[derive(Debug, Default, Clone, Copy)]
pub struct GrassCompiler;

impl StylesheetCompiler for GrassCompiler {
    fn compile(&self, source: &str, load_path: &Path) -> CompileResult<String> {
        let options = grass::Options::default()
            .style(grass::OutputStyle::Compressed)
            .load_path(load_path);

        grass::from_string(source.to_owned(), &options).map_err(|err| CompileError::Failed {
            message: err.to_string(),
        })
    }
}
