/// Parses `#rrggbb` or `#rgb` (the `#` is optional) into channel values.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut rgb = [0_u8; 3];
            for (channel, digit) in rgb.iter_mut().zip(digits.chars()) {
                let value = u8::try_from(digit.to_digit(16)?).ok()?;
                *channel = value * 17;
            }
            Some(rgb)
        }
        6 => {
            let channel = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        _ => None,
    }
}

/// Joins the channels the way stylesheets spell them, e.g. `"r, g, b"`.
pub fn rgb_text(rgb: [u8; 3], separator: &str) -> String {
    rgb.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
