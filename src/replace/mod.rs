//! Literal color to variable name substitution for theme stylesheets.

use regex::Regex;
use thiserror::Error;

use crate::theme::{ColorVariable, ThemeId};

mod color;

pub use color::{hex_to_rgb, rgb_text};

const FONT_FIXUP: (&str, &str) = ("$paragraph-font", "$paragraphs-font");
const CUSTOM_MARKER_PATTERN: &str = r#"wbz-custom:\s?['"]?"#;

pub type ReplaceResult<T> = std::result::Result<T, ReplaceError>;

#[derive(Debug, Error)]
pub enum ReplaceError {
    #[error("invalid hex color {hex:?} for {name}")]
    InvalidHex { name: String, hex: String },
    #[error("invalid replacement pattern")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(text) => text,
            Pattern::Regex(regex) => regex.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replacement {
    pub pattern: Pattern,
    pub replacement: String,
}

impl Replacement {
    pub fn literal(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Pattern::Literal(pattern.into()),
            replacement: replacement.into(),
        }
    }
}

/// Builds the ordered substitution list for one theme.
///
/// The list starts with the paragraph font fixup, then holds three pairs per
/// color (hex, `r, g, b` and `r,g,b`), and always ends with the pattern that
/// strips `wbz-custom:` markers.
pub fn build_replacement_list(
    theme: &ThemeId,
    colors: &[ColorVariable],
) -> ReplaceResult<Vec<Replacement>> {
    let mut replacements = Vec::with_capacity(colors.len() * 3 + 2);
    replacements.push(Replacement::literal(FONT_FIXUP.0, FONT_FIXUP.1));

    for color in colors {
        let rgb = hex_to_rgb(&color.hex).ok_or_else(|| ReplaceError::InvalidHex {
            name: color.name.clone(),
            hex: color.hex.clone(),
        })?;
        replacements.push(Replacement::literal(color.hex.as_str(), color.name.as_str()));
        replacements.push(Replacement::literal(rgb_text(rgb, ", "), color.name.as_str()));
        replacements.push(Replacement::literal(rgb_text(rgb, ","), color.name.as_str()));
    }

    replacements.push(Replacement {
        pattern: Pattern::Regex(Regex::new(CUSTOM_MARKER_PATTERN)?),
        replacement: String::new(),
    });

    tracing::debug!(
        theme = %theme,
        colors = colors.len(),
        pairs = replacements.len(),
        "built replacement list"
    );
    for item in &replacements {
        tracing::trace!(
            pattern = item.pattern.as_str(),
            replacement = %item.replacement,
            "replacement pair"
        );
    }
    Ok(replacements)
}

/// Applies `replacements` in one left to right pass.
///
/// At every position the pairs are tried in order and the first match wins.
/// Substituted text is never scanned again.
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> String {
    // Next known regex match per pair, refreshed once the scan moves past it.
    let mut next_regex_match: Vec<Option<(usize, usize)>> = replacements
        .iter()
        .map(|item| match &item.pattern {
            Pattern::Regex(regex) => regex.find(text).map(|m| (m.start(), m.end())),
            Pattern::Literal(_) => None,
        })
        .collect();

    let mut output = String::with_capacity(text.len());
    let mut copied_until = 0;
    let mut pos = 0;

    while pos < text.len() {
        let mut matched = None;
        for (index, item) in replacements.iter().enumerate() {
            let length = match &item.pattern {
                Pattern::Literal(literal) => (!literal.is_empty()
                    && text[pos..].starts_with(literal.as_str()))
                .then_some(literal.len()),
                Pattern::Regex(regex) => {
                    let cached = &mut next_regex_match[index];
                    if matches!(cached, Some((start, _)) if *start < pos) {
                        *cached = regex.find_at(text, pos).map(|m| (m.start(), m.end()));
                    }
                    match *cached {
                        Some((start, end)) if start == pos && end > start => Some(end - start),
                        _ => None,
                    }
                }
            };
            if let Some(length) = length {
                matched = Some((length, item.replacement.as_str()));
                break;
            }
        }

        match matched {
            Some((length, replacement)) => {
                output.push_str(&text[copied_until..pos]);
                output.push_str(replacement);
                pos += length;
                copied_until = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    output.push_str(&text[copied_until..]);
    output
}
