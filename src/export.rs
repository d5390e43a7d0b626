/// Palette export: JSON documents and PNG stripe images.
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use image::{ImageFormat, Rgb, RgbImage};
use serde::Serialize;

use crate::color;

pub const PNG_WIDTH: u32 = 1000;
pub const PNG_HEIGHT: u32 = 260;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 3;

#[derive(Serialize)]
struct PaletteDocument<'a> {
    palette: &'a [String],
    #[serde(rename = "createdAt")]
    created_at: String,
}

/// Writes `palette.json` into `dir`: the colors plus a creation timestamp,
/// pretty-printed with 2-space indent.
pub fn write_json(colors: &[String], dir: &Path) -> Result<PathBuf> {
    let document = PaletteDocument {
        palette: colors,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    let raw = serde_json::to_string_pretty(&document)?;
    let path = dir.join("palette.json");
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Writes `palette.png` into `dir`: one vertical stripe per color with its
/// uppercase hex value drawn centered in the contrast foreground.
pub fn write_png(colors: &[String], dir: &Path) -> Result<PathBuf> {
    let image = render_stripes(colors);
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .context("encode png")?;
    let path = dir.join("palette.png");
    fs::write(&path, buffer).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

fn render_stripes(colors: &[String]) -> RgbImage {
    let mut image = RgbImage::new(PNG_WIDTH, PNG_HEIGHT);
    if colors.is_empty() {
        return image;
    }
    let stripe_width = PNG_WIDTH / colors.len() as u32;
    for (index, hex) in colors.iter().enumerate() {
        let x0 = index as u32 * stripe_width;
        fill_rect(&mut image, x0, 0, stripe_width, PNG_HEIGHT, rgb(hex));

        let label = hex.to_ascii_uppercase();
        let foreground = rgb(color::contrast_color(hex));
        draw_label(&mut image, &label, x0 + stripe_width / 2, foreground);
    }
    image
}

fn rgb(hex: &str) -> Rgb<u8> {
    let (r, g, b) = color::parse_hex(hex).unwrap_or((0, 0, 0));
    Rgb([r, g, b])
}

fn fill_rect(image: &mut RgbImage, x0: u32, y0: u32, width: u32, height: u32, color: Rgb<u8>) {
    for y in y0..(y0 + height).min(PNG_HEIGHT) {
        for x in x0..(x0 + width).min(PNG_WIDTH) {
            image.put_pixel(x, y, color);
        }
    }
}

/// Draws `label` horizontally centered on `center_x`, vertically centered in
/// the image, using the built-in 5x7 glyph set.
fn draw_label(image: &mut RgbImage, label: &str, center_x: u32, color: Rgb<u8>) {
    let advance = (GLYPH_WIDTH + 1) * GLYPH_SCALE;
    let text_width = label.chars().count() as u32 * advance - GLYPH_SCALE;
    let mut x = center_x.saturating_sub(text_width / 2);
    let y = (PNG_HEIGHT - GLYPH_HEIGHT * GLYPH_SCALE) / 2;
    for ch in label.chars() {
        let rows = glyph_rows(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    fill_rect(
                        image,
                        x + col * GLYPH_SCALE,
                        y + row as u32 * GLYPH_SCALE,
                        GLYPH_SCALE,
                        GLYPH_SCALE,
                        color,
                    );
                }
            }
        }
        x += advance;
    }
}

/// 5x7 bitmaps for the characters a hex label can contain. Bit 4 is the
/// leftmost column; unknown characters render blank.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch {
        '#' => [0x0a, 0x0a, 0x1f, 0x0a, 0x1f, 0x0a, 0x0a],
        '0' => [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e],
        '1' => [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e],
        '2' => [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f],
        '3' => [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e],
        '4' => [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02],
        '5' => [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e],
        '6' => [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e],
        '7' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e],
        '9' => [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c],
        'A' => [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'B' => [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e],
        'C' => [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e],
        'D' => [0x1c, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1c],
        'E' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f],
        'F' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10],
        _ => [0; 7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn colors() -> Vec<String> {
        ["#111111", "#222222", "#333333", "#444444", "#555555"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn json_export_has_expected_shape() {
        let dir = tempdir().unwrap();
        let path = write_json(&colors(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "palette.json");

        let raw = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed with 2-space indent.
        assert!(raw.contains("\n  \"palette\""));

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let palette = value["palette"].as_array().unwrap();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette[0], "#111111");
        let created_at = value["createdAt"].as_str().unwrap();
        assert!(created_at.ends_with('Z'), "not UTC ISO-8601: {created_at}");
    }

    #[test]
    fn png_export_decodes_with_stripe_colors() {
        let dir = tempdir().unwrap();
        let path = write_png(&colors(), dir.path()).unwrap();

        let decoded = image::open(&path).unwrap().into_rgb8();
        assert_eq!(decoded.dimensions(), (PNG_WIDTH, PNG_HEIGHT));
        // Sample each stripe away from the centered label.
        for (index, hex) in colors().iter().enumerate() {
            let x = index as u32 * 200 + 100;
            let (r, g, b) = crate::color::parse_hex(hex).unwrap();
            assert_eq!(decoded.get_pixel(x, 10), &Rgb([r, g, b]));
        }
    }

    #[test]
    fn label_stays_inside_its_stripe() {
        let advance = (GLYPH_WIDTH + 1) * GLYPH_SCALE;
        let text_width = 7 * advance - GLYPH_SCALE;
        assert!(text_width < PNG_WIDTH / 5);
    }
}
