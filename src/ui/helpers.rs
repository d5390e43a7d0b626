use ratatui::style::Color;

pub fn hex_to_color(value: &str) -> Option<Color> {
    let (r, g, b) = crate::color::parse_hex(value.trim())?;
    Some(Color::Rgb(r, g, b))
}

/// Terminal color for text drawn over the given swatch color.
pub fn contrast_for(value: &str) -> Color {
    hex_to_color(crate::color::contrast_color(value)).unwrap_or(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_color_parses_rgb() {
        assert_eq!(hex_to_color("#aabbcc"), Some(Color::Rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_to_color(" #aabbcc "), Some(Color::Rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_to_color("#abc"), None);
    }
}
