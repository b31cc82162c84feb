//! Lexical matchers over property values and names.
//!
//! Every "hardcoded value" rule runs the value through [`strip_var_refs`] first, so a
//! value made only of `var(...)` references never matches, whatever surrounds them.

use std::sync::LazyLock;

use regex::Regex;

use super::tables::{
    ALLOWED_COLOR_KEYWORDS, EASING_FUNCTIONS, EASING_KEYWORDS, NAMED_COLORS,
};

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s,(/*+])(-?(?:\d+\.?\d*|\.\d+))([a-z%]*)").expect("valid regex")
});

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").expect("valid regex"));

static COLOR_FN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:rgba?|hsla?)\s*\(").expect("valid regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)url\([^)]*\)").expect("valid regex"));

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[a-zA-Z_][a-zA-Z0-9_-]*(\()?").expect("valid regex"));

static CANONICAL_IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

static CANONICAL_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:__[a-z0-9]+(?:-[a-z0-9]+)*)?(?:--[a-z0-9]+(?:-[a-z0-9]+)*)?$",
    )
    .expect("valid regex")
});

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex", "pt", "pc", "cm", "mm",
    "in", "svh", "lvh", "dvh", "svw", "lvw", "dvw", "cqw", "cqh", "lh", "rlh",
];

const TIME_UNITS: &[&str] = &["s", "ms"];

/// A number found in a value, with its unit (empty for unitless numbers).
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken {
    pub number: f64,
    pub unit: String,
    pub text: String,
}

impl NumericToken {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.number == 0.0
    }

    #[must_use]
    pub fn is_length(&self) -> bool {
        LENGTH_UNITS.contains(&self.unit.as_str())
    }

    #[must_use]
    pub fn is_time(&self) -> bool {
        TIME_UNITS.contains(&self.unit.as_str())
    }
}

/// Remove a trailing `!important` flag.
#[must_use]
pub fn strip_important(value: &str) -> &str {
    let lower = value.to_ascii_lowercase();
    lower
        .find("!important")
        .map_or(value, |idx| value[..idx].trim_end())
}

/// Replace every `var(...)` reference (fallbacks included) with a single space.
#[must_use]
pub fn strip_var_refs(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let lower = value.to_ascii_lowercase();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find("var(") {
        let start = pos + found;
        out.push_str(&value[pos..start]);
        out.push(' ');
        pos = closing_paren(value, start + 3).map_or(value.len(), |end| end + 1);
    }
    out.push_str(&value[pos.min(value.len())..]);
    out
}

/// Names referenced through `var(--name[, fallback])`, in order of appearance.
#[must_use]
pub fn var_references(value: &str) -> Vec<String> {
    let lower = value.to_ascii_lowercase();
    let mut names = Vec::new();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find("var(") {
        let args_start = pos + found + 4;
        let end = closing_paren(value, args_start - 1).unwrap_or(value.len());
        let args = &value[args_start..end];
        let name = args.split(',').next().unwrap_or_default().trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
        pos = (end + 1).min(value.len());
    }
    names
}

/// Whether the value (ignoring `!important`) consists of `var(...)` references only.
#[must_use]
pub fn is_pure_var_ref(value: &str) -> bool {
    let value = strip_important(value).trim();
    value.to_ascii_lowercase().starts_with("var(") && strip_var_refs(value).trim().is_empty()
}

/// Index of the parenthesis closing the one at `open`.
fn closing_paren(value: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in value.char_indices().skip_while(|(i, _)| *i < open) {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// All numbers in the value outside `var(...)` references.
#[must_use]
pub fn numeric_tokens(value: &str) -> Vec<NumericToken> {
    let without_vars = strip_var_refs(strip_important(value));
    let without_hex = HEX_RE.replace_all(&without_vars, " ");
    NUMBER_RE
        .captures_iter(&without_hex)
        .filter_map(|caps| {
            let number_text = caps.get(1)?.as_str();
            let unit = caps.get(2).map_or("", |m| m.as_str()).to_ascii_lowercase();
            let number = number_text.parse::<f64>().ok()?;
            Some(NumericToken {
                number,
                text: format!("{number_text}{unit}"),
                unit,
            })
        })
        .collect()
}

/// Non-zero lengths (`16px`, `1.5rem`, `10%`) written literally in the value.
#[must_use]
pub fn hardcoded_lengths(value: &str) -> Vec<String> {
    numeric_tokens(value)
        .into_iter()
        .filter(|t| t.is_length() && !t.is_zero())
        .map(|t| t.text)
        .collect()
}

/// Non-zero numbers of any unit, unitless included.
#[must_use]
pub fn hardcoded_numbers(value: &str) -> Vec<String> {
    numeric_tokens(value)
        .into_iter()
        .filter(|t| !t.is_zero() && (t.unit.is_empty() || t.is_length()))
        .map(|t| t.text)
        .collect()
}

/// Non-zero time literals (`200ms`, `.3s`).
#[must_use]
pub fn hardcoded_times(value: &str) -> Vec<String> {
    numeric_tokens(value)
        .into_iter()
        .filter(|t| t.is_time() && !t.is_zero())
        .map(|t| t.text)
        .collect()
}

/// Easing keywords and functions written literally in the value.
#[must_use]
pub fn hardcoded_easings(value: &str) -> Vec<String> {
    let stripped = strip_var_refs(strip_important(value));
    IDENT_RE
        .captures_iter(&stripped)
        .filter_map(|caps| {
            let whole = caps.get(0)?.as_str();
            let is_fn = caps.get(1).is_some();
            let ident = whole.trim_end_matches('(').to_ascii_lowercase();
            let matched = if is_fn {
                EASING_FUNCTIONS.contains(&ident.as_str())
            } else {
                EASING_KEYWORDS.contains(&ident.as_str())
            };
            matched.then_some(ident)
        })
        .collect()
}

/// Literal colors (hex, color functions, named colors) outside `var(...)` references.
#[must_use]
pub fn color_literals(value: &str) -> Vec<String> {
    let without_vars = strip_var_refs(strip_important(value));
    let stripped = URL_RE.replace_all(&without_vars, " ");
    let mut found: Vec<String> = HEX_RE
        .find_iter(&stripped)
        .map(|m| m.as_str().to_string())
        .collect();

    found.extend(
        COLOR_FN_RE
            .find_iter(&stripped)
            .map(|m| m.as_str().trim_end_matches('(').trim().to_ascii_lowercase()),
    );

    let without_hex = HEX_RE.replace_all(&stripped, " ");
    found.extend(IDENT_RE.captures_iter(&without_hex).filter_map(|caps| {
        if caps.get(1).is_some() {
            return None;
        }
        let ident = caps.get(0)?.as_str().to_ascii_lowercase();
        (!ALLOWED_COLOR_KEYWORDS.contains(&ident.as_str()) && named_color(&ident).is_some())
            .then_some(ident)
    }));

    found
}

/// Whether the whole value is a single color literal (used to classify variables).
#[must_use]
pub fn is_color_value(value: &str) -> bool {
    let value = strip_important(value).trim().to_ascii_lowercase();
    if value.is_empty() || value.starts_with("var(") {
        return false;
    }
    if HEX_RE.find(&value).is_some_and(|m| m.start() == 0 && m.end() == value.len()) {
        return true;
    }
    if COLOR_FN_RE.find(&value).is_some_and(|m| m.start() == 0) && value.ends_with(')') {
        return true;
    }
    named_color(&value).is_some()
}

#[must_use]
pub fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, rgb)| *rgb)
}

/// Lowercase words separated by single hyphens.
#[must_use]
pub fn is_canonical_ident(name: &str) -> bool {
    CANONICAL_IDENT_RE.is_match(name)
}

/// Canonical class name; BEM `__element` and `--modifier` parts are accepted.
#[must_use]
pub fn is_canonical_class(name: &str) -> bool {
    CANONICAL_CLASS_RE.is_match(name)
}

/// Canonical custom property name: `--` followed by a canonical identifier.
#[must_use]
pub fn is_canonical_variable(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(is_canonical_ident)
}

/// Convert an arbitrary name into its lowercase-hyphenated form.
#[must_use]
pub fn to_canonical(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out.trim_matches('-').to_string()
}

/// Case-insensitive lookup of a property name in a table.
#[must_use]
pub fn property_in(name: &str, table: &[&str]) -> bool {
    let lower = name.to_ascii_lowercase();
    table.contains(&lower.as_str())
}

#[cfg(test)]
#[path = "lexical_tests.rs"]
mod tests;
