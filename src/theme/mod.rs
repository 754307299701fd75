use std::fmt;

mod preset;
mod replacements;
mod table;

pub use preset::{PresetDocument, PresetError, PresetResult, ThemePreset, DEFAULT_PRESET_SLOT};
pub use replacements::{ColorVariable, ReplacementsDocument};
pub use table::VariableTable;

const THEME_KEY_PREFIX: &str = "app";

/// Identifies one theme variant: its `app<id>` directory and document key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeId(String);

impl ThemeId {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> String {
        format!("{THEME_KEY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text form of a JSON scalar as it ends up in a stylesheet.
pub(crate) fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn theme_id_rejects_blank_input() {
        assert!(ThemeId::parse("").is_none());
        assert!(ThemeId::parse("   ").is_none());
    }

    #[test]
    fn theme_id_key_prefixes_app() {
        let theme = ThemeId::parse(" 3 ").unwrap();
        assert_eq!(theme.as_str(), "3");
        assert_eq!(theme.key(), "app3");
    }

    #[test]
    fn scalar_text_keeps_strings_verbatim() {
        assert_eq!(scalar_text(&json!("#fff")), "#fff");
        assert_eq!(scalar_text(&json!(12)), "12");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&json!(null)), "null");
    }
}
