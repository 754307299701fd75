use serde::Deserialize;
use serde_json::Value;

use super::ThemeId;

/// A semantic variable name and the literal color it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorVariable {
    pub name: String,
    pub hex: String,
}

/// `replacements.json`: one color list per `app<id>` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ReplacementsDocument {
    themes: serde_json::Map<String, Value>,
}

impl ReplacementsDocument {
    /// Color list for `theme`, or `None` when the key is absent or `null`.
    pub fn color_variables(
        &self,
        theme: &ThemeId,
    ) -> Result<Option<Vec<ColorVariable>>, serde_json::Error> {
        match self.themes.get(&theme.key()) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => serde_json::from_value(raw.clone()).map(Some),
        }
    }
}
