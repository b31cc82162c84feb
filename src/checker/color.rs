use std::collections::HashSet;

use crate::config::ColorConfig;
use crate::issue::{Category, Issue, Severity};
use crate::model::{CssClass, Location, StyleSheet, is_dark_mode_context};

use super::contrast::{ColorResolver, contrast_ratio};
use super::lexical::{color_literals, property_in};
use super::tables::COLOR_PROPERTIES;
use super::{Checker, declarations};

/// Theming: literal colors, text contrast and dark-mode coverage.
pub struct ColorChecker {
    min_contrast: f64,
}

impl ColorChecker {
    #[must_use]
    pub const fn new(config: &ColorConfig) -> Self {
        Self {
            min_contrast: config.min_contrast,
        }
    }

    fn hardcoded_colors(sheet: &StyleSheet) -> Vec<Issue> {
        declarations(sheet)
            .into_iter()
            .filter(|(_, p)| property_in(&p.name, COLOR_PROPERTIES))
            .filter_map(|(selector, p)| {
                let literals = color_literals(&p.value);
                let first = literals.first()?;
                Some(
                    Issue::new(
                        "color/hardcoded-color",
                        Severity::Moderate,
                        Category::BestPractice,
                        format!(
                            "Hardcoded color {} in '{}' of '{}'",
                            literals.join(", "),
                            p.name,
                            selector.text
                        ),
                        p.location.clone(),
                    )
                    .with_suggestion("Reference a theme variable so the color follows the theme")
                    .with_example(
                        format!("{}: {};", p.name, p.value),
                        format!(
                            "{}: {};",
                            p.name,
                            p.value.replacen(first.as_str(), "var(--text-primary)", 1)
                        ),
                    ),
                )
            })
            .collect()
    }

    fn low_contrast(&self, sheet: &StyleSheet) -> Vec<Issue> {
        let resolver = ColorResolver::from_sheet(sheet);
        sheet
            .classes
            .iter()
            .filter_map(|class| {
                let ratio = class_contrast(class, &resolver)?;
                (ratio < self.min_contrast).then(|| {
                    Issue::new(
                        "color/low-contrast",
                        Severity::Critical,
                        Category::Accessibility,
                        format!(
                            "Contrast ratio {ratio:.2}:1 between text and background of '{}' is below {:.1}:1",
                            class.selector, self.min_contrast
                        ),
                        class.location.clone(),
                    )
                    .with_suggestion(format!(
                        "Darken the text or lighten the background until the ratio reaches at least {:.1}:1",
                        self.min_contrast
                    ))
                })
            })
            .collect()
    }

    fn dark_mode(sheet: &StyleSheet) -> Vec<Issue> {
        let light: Vec<_> = sheet
            .color_variables()
            .filter(|v| !v.is_dark_mode_override())
            .collect();
        if light.is_empty() {
            return Vec::new();
        }

        if !has_dark_mode_facility(sheet) {
            return vec![
                Issue::new(
                    "color/missing-dark-mode",
                    Severity::Moderate,
                    Category::Accessibility,
                    format!(
                        "{} color variables are defined but there is no dark-mode variant",
                        light.len()
                    ),
                    Location::file_start(&sheet.path),
                )
                .with_suggestion(
                    "Override the color variables under @media (prefers-color-scheme: dark) or a [data-theme=\"dark\"] scope",
                )
                .with_example(
                    ":root { --bg-page: #fff; }",
                    ":root { --bg-page: #fff; }\n@media (prefers-color-scheme: dark) {\n  :root { --bg-page: #111; }\n}",
                ),
            ];
        }

        let overridden: HashSet<&str> = sheet
            .variables
            .iter()
            .filter(|v| v.is_dark_mode_override())
            .map(|v| v.name.as_str())
            .collect();
        let mut reported = HashSet::new();
        light
            .into_iter()
            .filter(|v| !overridden.contains(v.name.as_str()) && reported.insert(v.name.as_str()))
            .map(|v| {
                Issue::new(
                    "color/missing-dark-override",
                    Severity::Minor,
                    Category::BestPractice,
                    format!("Color variable '{}' has no dark-mode override", v.name),
                    v.location.clone(),
                )
                .with_suggestion(format!(
                    "Declare '{}' again in the dark-mode scope, or confirm it works on both themes",
                    v.name
                ))
            })
            .collect()
    }
}

impl Checker for ColorChecker {
    fn name(&self) -> &'static str {
        "color"
    }

    fn check(&self, sheet: &StyleSheet, _raw: Option<&str>) -> Vec<Issue> {
        let mut issues = Self::hardcoded_colors(sheet);
        issues.extend(self.low_contrast(sheet));
        issues.extend(Self::dark_mode(sheet));
        issues
    }
}

/// Contrast between a class's resolved `color` and background, if both resolve.
fn class_contrast(class: &CssClass, resolver: &ColorResolver) -> Option<f64> {
    let foreground = resolver.resolve(&class.property("color")?.value)?;
    let background = class
        .properties
        .iter()
        .rev()
        .find(|p| p.name == "background-color" || p.name == "background")?;
    let background = resolver.resolve(&background.value)?;
    Some(contrast_ratio(foreground, background))
}

/// Whether the sheet has any dark-mode mechanism at all.
#[must_use]
pub fn has_dark_mode_facility(sheet: &StyleSheet) -> bool {
    sheet.media_queries.iter().any(|m| m.is_dark_mode())
        || sheet.selectors.iter().any(|s| is_dark_mode_context(&s.text))
        || sheet.variables.iter().any(|v| v.is_dark_mode_override())
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
