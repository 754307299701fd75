use std::path::Path;

use crate::compiler::StylesheetCompiler;
use crate::config::{read_config_file, ProjectLayout};
use crate::error::AppResult;
use crate::theme::{PresetDocument, PresetError, ThemeId};
use crate::variables::create_variables_file;

use super::{read_stylesheet, write_output, SkipReason, TaskOutcome};

const CSS_EXTENSION: &str = "css";

/// Compiles a theme's stylesheet with its default preset variables prepended.
pub fn compile_default_theme<C: StylesheetCompiler>(
    layout: &ProjectLayout,
    theme: &ThemeId,
    compiler: &C,
) -> AppResult<TaskOutcome> {
    let document_path = layout.presets_path(theme);
    let document: PresetDocument = read_config_file(&document_path)?.unwrap_or_default();
    let preset = match document.into_theme_preset() {
        Ok(preset) => preset,
        Err(PresetError::MissingSections) => {
            tracing::warn!(path = ?document_path, "Missing colors or fonts from the SCSS config file");
            return Ok(TaskOutcome::Skipped(SkipReason::IncompletePreset));
        }
        Err(err) => {
            tracing::warn!(path = ?document_path, %err, "invalid preset document");
            return Ok(TaskOutcome::Skipped(SkipReason::IncompletePreset));
        }
    };

    let declarations = create_variables_file(&preset.colors, &preset.fonts);
    tracing::debug!(
        colors = preset.colors.len(),
        fonts = preset.fonts.len(),
        "generated variable declarations"
    );

    let source_path = layout.compile_source_path(theme);
    let Some(source) = read_stylesheet(&source_path)? else {
        tracing::warn!(path = ?source_path, "source stylesheet not found");
        return Ok(TaskOutcome::Skipped(SkipReason::MissingStylesheet));
    };

    let load_path = source_path.parent().unwrap_or_else(|| Path::new("."));
    let css = match compiler.compile(&format!("{declarations}{source}"), load_path) {
        Ok(css) => css,
        Err(err) => {
            tracing::error!(path = ?source_path, %err, "failed to compile theme stylesheet");
            return Ok(TaskOutcome::Skipped(SkipReason::CompilerFailed));
        }
    };

    let file_name = Path::new(&layout.stylesheet).with_extension(CSS_EXTENSION);
    let path = write_output(
        &layout.css_output_dir(theme),
        &file_name.to_string_lossy(),
        &css,
    )?;
    Ok(TaskOutcome::Written(path))
}
