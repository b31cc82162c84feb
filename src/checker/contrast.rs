//! WCAG color math and color-variable resolution.
//!
//! Contrast follows WCAG 2.x: relative luminance of linearised sRGB channels, ratio
//! `(lighter + 0.05) / (darker + 0.05)`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::StyleSheet;

use super::lexical::{named_color, strip_important, var_references};

pub type Rgb = (u8, u8, u8);

/// Longest `var()` chain followed before giving up.
const MAX_RESOLVE_DEPTH: usize = 8;

static COLOR_FN_ARGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(rgba?|hsla?)\(\s*([^)]*)\)$").expect("valid regex")
});

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (alpha ignored).
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 | 4 => Some((
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 | 8 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Parse `rgb()/rgba()/hsl()/hsla()` in comma or space syntax (alpha ignored).
#[must_use]
pub fn parse_color_function(value: &str) -> Option<Rgb> {
    let caps = COLOR_FN_ARGS_RE.captures(value.trim())?;
    let name = caps[1].to_ascii_lowercase();
    let args: Vec<&str> = caps[2]
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if args.len() < 3 {
        return None;
    }

    if name.starts_with("rgb") {
        Some((
            rgb_channel(args[0])?,
            rgb_channel(args[1])?,
            rgb_channel(args[2])?,
        ))
    } else {
        let hue = args[0].trim_end_matches("deg").parse::<f64>().ok()?;
        let saturation = percent(args[1])?;
        let lightness = percent(args[2])?;
        Some(hsl_to_rgb(hue, saturation, lightness))
    }
}

fn rgb_channel(arg: &str) -> Option<u8> {
    let value = if let Some(pct) = arg.strip_suffix('%') {
        pct.parse::<f64>().ok()? * 2.55
    } else {
        arg.parse::<f64>().ok()?
    };
    Some(to_channel(value))
}

fn percent(arg: &str) -> Option<f64> {
    Some(arg.trim_end_matches('%').parse::<f64>().ok()? / 100.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        to_channel((r + m) * 255.0),
        to_channel((g + m) * 255.0),
        to_channel((b + m) * 255.0),
    )
}

/// Parse any single literal color. Returns `None` for gradients, keywords and references.
#[must_use]
pub fn parse_color(value: &str) -> Option<Rgb> {
    let trimmed = strip_important(value).trim().to_ascii_lowercase();
    if trimmed.starts_with('#') {
        parse_hex_color(&trimmed)
    } else if trimmed.starts_with("rgb") || trimmed.starts_with("hsl") {
        parse_color_function(&trimmed)
    } else {
        named_color(&trimmed)
    }
}

/// Relative luminance per WCAG 2.x.
#[must_use]
pub fn relative_luminance((r, g, b): Rgb) -> f64 {
    let srgb = [r, g, b].map(|c| {
        let v = f64::from(c) / 255.0;
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.0722f64.mul_add(srgb[2], 0.2126f64.mul_add(srgb[0], 0.7152 * srgb[1]))
}

/// Contrast ratio between two colors, always `>= 1.0` and symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Resolves color values through the sheet's custom properties.
///
/// Declarations outside dark-mode scopes win; a dark-mode declaration is only used when
/// no light one exists.
#[derive(Debug, Default)]
pub struct ColorResolver {
    values: HashMap<String, String>,
}

impl ColorResolver {
    #[must_use]
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        let mut values = HashMap::new();
        for variable in sheet.variables.iter().filter(|v| v.is_dark_mode_override()) {
            values.insert(variable.name.clone(), variable.value.clone());
        }
        for variable in sheet.variables.iter().filter(|v| !v.is_dark_mode_override()) {
            values.insert(variable.name.clone(), variable.value.clone());
        }
        Self { values }
    }

    /// Resolve a value to a color, following `var()` chains and fallbacks.
    #[must_use]
    pub fn resolve(&self, value: &str) -> Option<Rgb> {
        self.resolve_depth(strip_important(value).trim(), 0)
    }

    fn resolve_depth(&self, value: &str, depth: usize) -> Option<Rgb> {
        if depth > MAX_RESOLVE_DEPTH {
            return None;
        }
        if !value.to_ascii_lowercase().starts_with("var(") {
            return parse_color(value);
        }

        let name = var_references(value).into_iter().next()?;
        if let Some(found) = self.values.get(&name) {
            return self.resolve_depth(found.trim(), depth + 1);
        }
        fallback(value).and_then(|fb| self.resolve_depth(fb, depth + 1))
    }
}

/// Text after the first top-level comma of `var(--x, fallback)`.
fn fallback(value: &str) -> Option<&str> {
    let inner = value.trim().strip_prefix("var(")?.strip_suffix(')')?;
    let mut depth = 0usize;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(inner[idx + 1..].trim()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "contrast_tests.rs"]
mod tests;
