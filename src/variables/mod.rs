use crate::theme::VariableTable;

/// Font values containing this unit are lengths and stay unquoted.
const LENGTH_UNIT: &str = "rem";

/// Renders SCSS variable declarations, colors first and then fonts.
///
/// Font family names are wrapped in double quotes; quotes inside a value are
/// not escaped.
pub fn create_variables_file(colors: &VariableTable, fonts: &VariableTable) -> String {
    let mut contents = String::new();

    for (name, value) in colors.iter() {
        contents.push_str(&format!("${name}:{value};\n"));
    }

    for (name, value) in fonts.iter() {
        if value.contains(LENGTH_UNIT) {
            contents.push_str(&format!("${name}:{value};\n"));
        } else {
            contents.push_str(&format!("${name}:\"{value}\";\n"));
        }
    }

    contents
}
