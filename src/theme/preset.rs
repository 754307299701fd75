use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{scalar_text, VariableTable};

/// The only preset slot that gets compiled.
pub const DEFAULT_PRESET_SLOT: &str = "1";

pub type PresetResult<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("missing colors or fonts from the SCSS config file")]
    MissingSections,
    #[error("preset slot {slot:?} not found")]
    MissingPresetSlot { slot: String },
    #[error("preset slot {slot:?} is not a list of values")]
    InvalidPresetSlot { slot: String },
    #[error("preset slot {slot:?} has {values} values for {vars} variables")]
    LengthMismatch {
        slot: String,
        vars: usize,
        values: usize,
    },
}

/// `presets.json` as found on disk. Every section may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetDocument {
    #[serde(default)]
    pub vars: Option<Vec<String>>,
    #[serde(default)]
    pub presets: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    pub fonts: Option<serde_json::Map<String, Value>>,
}

/// Validated color and font tables for one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePreset {
    pub colors: VariableTable,
    pub fonts: VariableTable,
}

impl PresetDocument {
    /// Zips `vars` with the default preset slot and collects the fonts.
    pub fn into_theme_preset(self) -> PresetResult<ThemePreset> {
        let (Some(vars), Some(mut presets), Some(fonts)) = (self.vars, self.presets, self.fonts)
        else {
            return Err(PresetError::MissingSections);
        };

        // Other slots are never read, whatever their shape.
        let values = match presets.remove(DEFAULT_PRESET_SLOT) {
            Some(Value::Array(values)) => values,
            None | Some(Value::Null) => {
                return Err(PresetError::MissingPresetSlot {
                    slot: DEFAULT_PRESET_SLOT.to_string(),
                })
            }
            Some(_) => {
                return Err(PresetError::InvalidPresetSlot {
                    slot: DEFAULT_PRESET_SLOT.to_string(),
                })
            }
        };
        if values.len() != vars.len() {
            return Err(PresetError::LengthMismatch {
                slot: DEFAULT_PRESET_SLOT.to_string(),
                vars: vars.len(),
                values: values.len(),
            });
        }

        let colors = vars
            .into_iter()
            .zip(values.iter().map(scalar_text))
            .collect();
        let fonts = fonts
            .iter()
            .map(|(name, value)| (name.clone(), scalar_text(value)))
            .collect();

        Ok(ThemePreset { colors, fonts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(json: &str) -> PresetResult<ThemePreset> {
        serde_json::from_str::<PresetDocument>(json)
            .unwrap()
            .into_theme_preset()
    }

    #[test]
    fn merges_vars_with_first_preset_slot() {
        let preset = preset(
            r##"{
                "vars": ["primary", "secondary"],
                "presets": {"1": ["#fff", "#000"], "2": ["#111", "#222"]},
                "fonts": {}
            }"##,
        )
        .unwrap();

        assert_eq!(
            preset.colors.iter().collect::<Vec<_>>(),
            [("primary", "#fff"), ("secondary", "#000")]
        );
        assert!(preset.fonts.is_empty());
    }

    #[test]
    fn fonts_keep_declaration_order() {
        let preset = preset(
            r#"{
                "vars": [],
                "presets": {"1": []},
                "fonts": {"title-font": "Roboto", "base-size": "1rem", "body-font": "Arial"}
            }"#,
        )
        .unwrap();

        let names: Vec<_> = preset.fonts.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["title-font", "base-size", "body-font"]);
    }

    #[test]
    fn missing_or_null_sections_are_reported() {
        let missing_fonts = preset(r#"{"vars": [], "presets": {"1": []}}"#);
        assert_eq!(missing_fonts, Err(PresetError::MissingSections));

        let null_vars = preset(r#"{"vars": null, "presets": {"1": []}, "fonts": {}}"#);
        assert_eq!(null_vars, Err(PresetError::MissingSections));
    }

    #[test]
    fn missing_default_slot_is_reported() {
        let result = preset(r##"{"vars": ["a"], "presets": {"2": ["#fff"]}, "fonts": {}}"##);
        assert_eq!(
            result,
            Err(PresetError::MissingPresetSlot {
                slot: "1".to_string()
            })
        );
    }

    #[test]
    fn slot_length_must_match_vars() {
        let result = preset(r##"{"vars": ["a", "b"], "presets": {"1": ["#fff"]}, "fonts": {}}"##);
        assert_eq!(
            result,
            Err(PresetError::LengthMismatch {
                slot: "1".to_string(),
                vars: 2,
                values: 1,
            })
        );
    }

    #[test]
    fn non_string_values_use_json_text() {
        let preset = preset(
            r#"{"vars": ["opacity"], "presets": {"1": [0.5]}, "fonts": {"weight": 700}}"#,
        )
        .unwrap();
        assert_eq!(preset.colors.get("opacity"), Some("0.5"));
        assert_eq!(preset.fonts.get("weight"), Some("700"));
    }

    #[test]
    fn malformed_unused_slots_are_ignored() {
        let preset = preset(
            r##"{"vars": ["a"], "presets": {"1": ["#fff"], "2": null, "3": {"x": 1}}, "fonts": {}}"##,
        )
        .unwrap();
        assert_eq!(preset.colors.iter().collect::<Vec<_>>(), [("a", "#fff")]);
    }

    #[test]
    fn non_list_default_slot_is_reported() {
        let result = preset(r#"{"vars": ["a"], "presets": {"1": "oops"}, "fonts": {}}"#);
        assert_eq!(
            result,
            Err(PresetError::InvalidPresetSlot {
                slot: "1".to_string()
            })
        );
    }
}
