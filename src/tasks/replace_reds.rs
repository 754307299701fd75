use crate::config::{read_config_file, ConfigError, ProjectLayout};
use crate::error::AppResult;
use crate::replace::{apply_replacements, build_replacement_list, ReplaceError};
use crate::stylesheet::strip_comments;
use crate::theme::{ReplacementsDocument, ThemeId};

use super::{read_stylesheet, write_output, SkipReason, TaskOutcome};

/// Rewrites a theme's stylesheet with color literals swapped for variables.
pub fn replace_reds(layout: &ProjectLayout, theme: &ThemeId) -> AppResult<TaskOutcome> {
    let document_path = layout.replacements_path(theme);
    let document: Option<ReplacementsDocument> = read_config_file(&document_path)?;
    let colors = document
        .map(|document| document.color_variables(theme))
        .transpose()
        .map_err(|source| ConfigError::ParseConfig {
            path: document_path.clone(),
            source,
        })?
        .flatten();
    let Some(colors) = colors else {
        tracing::warn!(path = ?document_path, theme = %theme, "Invalid replacements json");
        return Ok(TaskOutcome::Skipped(SkipReason::InvalidReplacements));
    };

    let replacements = match build_replacement_list(theme, &colors) {
        Ok(replacements) => replacements,
        Err(ReplaceError::InvalidHex { name, hex }) => {
            tracing::warn!(%name, %hex, "invalid hex color in replacements json");
            return Ok(TaskOutcome::Skipped(SkipReason::InvalidHex));
        }
        Err(err) => return Err(err.into()),
    };

    let source_path = layout.replace_source_path(theme);
    let Some(source) = read_stylesheet(&source_path)? else {
        tracing::warn!(path = ?source_path, "source stylesheet not found");
        return Ok(TaskOutcome::Skipped(SkipReason::MissingStylesheet));
    };

    let rewritten = strip_comments(&apply_replacements(&source, &replacements));
    let path = write_output(
        &layout.scss_output_dir(theme),
        &layout.stylesheet,
        &rewritten,
    )?;
    Ok(TaskOutcome::Written(path))
}
