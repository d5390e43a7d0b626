/// Color utilities: random generation and luminance-based contrast.
use rand::RngExt;

/// Dark foreground used on light swatches.
pub const CONTRAST_DARK: &str = "#111827";
/// Light foreground used on dark swatches.
pub const CONTRAST_LIGHT: &str = "#f9fafb";

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Generate a uniformly random 24-bit color, formatted `#rrggbb` lowercase.
pub fn random_color() -> String {
    let mut rng = rand::rng();
    let value: u32 = rng.random_range(0..0x100_0000);
    format!("#{value:06x}")
}

/// Split a `#rrggbb` string into its channel values.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Perceptual luminance in 0.0..=1.0. Malformed input reads as black.
pub fn luminance(hex: &str) -> f64 {
    let (r, g, b) = parse_hex(hex).unwrap_or((0, 0, 0));
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Pick a readable foreground for text drawn over `hex`.
pub fn contrast_color(hex: &str) -> &'static str {
    if luminance(hex) > 0.55 {
        CONTRAST_DARK
    } else {
        CONTRAST_LIGHT
    }
}
