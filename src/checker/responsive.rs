use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ResponsiveConfig;
use crate::issue::{Category, Issue, Severity};
use crate::model::{CssClass, Location, MediaQuery, StyleSheet};

use super::lexical::{numeric_tokens, property_in, strip_var_refs};
use super::organization;
use super::tables::{SIZE_PROPERTIES, TOUCH_TARGET_HINTS};
use super::Checker;

static WIDTH_FEATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(min|max)-width\s*:\s*(\d+(?:\.\d+)?|\.\d+)\s*(px|em|rem)\b")
        .expect("valid regex")
});

/// Pixels per `em`/`rem` when converting breakpoints.
const ROOT_FONT_SIZE: f64 = 16.0;

/// Widest `max-width` query that still counts as targeting phones.
const MOBILE_MAX_WIDTH: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Min,
    Max,
}

/// A `min-width`/`max-width` feature of a media query, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WidthFeature {
    bound: Bound,
    px: f64,
}

fn width_features(query: &str) -> Vec<WidthFeature> {
    WIDTH_FEATURE_RE
        .captures_iter(query)
        .filter_map(|caps| {
            let number: f64 = caps[2].parse().ok()?;
            let px = if caps[3].eq_ignore_ascii_case("px") {
                number
            } else {
                number * ROOT_FONT_SIZE
            };
            let bound = if caps[1].eq_ignore_ascii_case("min") {
                Bound::Min
            } else {
                Bound::Max
            };
            Some(WidthFeature { bound, px })
        })
        .collect()
}

fn looks_interactive(class: &CssClass) -> bool {
    let name = class.name.to_ascii_lowercase();
    TOUCH_TARGET_HINTS.iter().any(|hint| name.contains(hint))
}

fn format_px(px: f64) -> String {
    if px.fract() == 0.0 {
        format!("{px:.0}px")
    } else {
        format!("{px}px")
    }
}

/// Breakpoints, touch targets, mobile coverage and file layout.
pub struct ResponsiveChecker {
    breakpoints: Vec<f64>,
    tolerance: f64,
    near_duplicate_range: f64,
    min_touch_target: f64,
}

impl ResponsiveChecker {
    #[must_use]
    pub fn new(config: &ResponsiveConfig) -> Self {
        Self {
            breakpoints: config.breakpoints.clone(),
            tolerance: config.tolerance,
            near_duplicate_range: config.near_duplicate_range,
            min_touch_target: config.min_touch_target,
        }
    }

    fn nearest_breakpoint(&self, px: f64) -> Option<f64> {
        self.breakpoints
            .iter()
            .copied()
            .min_by(|a, b| (a - px).abs().total_cmp(&(b - px).abs()))
    }

    fn breakpoints(&self, sheet: &StyleSheet) -> Vec<Issue> {
        let mut issues = Vec::new();
        for query in &sheet.media_queries {
            for feature in width_features(&query.query) {
                let Some(nearest) = self.nearest_breakpoint(feature.px) else {
                    continue;
                };
                if (nearest - feature.px).abs() <= self.tolerance {
                    continue;
                }
                issues.push(
                    Issue::new(
                        "responsive/non-standard-breakpoint",
                        Severity::Minor,
                        Category::Organization,
                        format!(
                            "Breakpoint {} in '{}' is not on the standard scale",
                            format_px(feature.px),
                            query.query
                        ),
                        query.location.clone(),
                    )
                    .with_suggestion(format!("Use the nearest standard breakpoint, {}", format_px(nearest))),
                );
            }
        }
        issues
    }

    fn near_duplicates(&self, sheet: &StyleSheet) -> Vec<Issue> {
        // Each distinct value with the first query that uses it.
        let mut seen: Vec<(f64, &MediaQuery)> = Vec::new();
        for query in &sheet.media_queries {
            for feature in width_features(&query.query) {
                if !seen.iter().any(|(px, _)| *px == feature.px) {
                    seen.push((feature.px, query));
                }
            }
        }

        let mut issues = Vec::new();
        for (idx, (later, query)) in seen.iter().enumerate() {
            for (earlier, _) in &seen[..idx] {
                let gap = (later - earlier).abs();
                if gap <= self.tolerance || gap > self.near_duplicate_range {
                    continue;
                }
                issues.push(
                    Issue::new(
                        "responsive/near-duplicate-breakpoint",
                        Severity::Minor,
                        Category::Organization,
                        format!(
                            "Breakpoints {} and {} are only {} apart",
                            format_px(*earlier),
                            format_px(*later),
                            format_px(gap)
                        ),
                        query.location.clone(),
                    )
                    .with_suggestion("Merge them into a single breakpoint"),
                );
            }
        }
        issues
    }

    fn touch_targets(&self, sheet: &StyleSheet) -> Vec<Issue> {
        let mut reported = HashSet::new();
        let mut issues = Vec::new();
        for class in sheet.classes.iter().filter(|c| looks_interactive(c)) {
            for p in &class.properties {
                if !property_in(&p.name, SIZE_PROPERTIES) {
                    continue;
                }
                let Some(px) = first_size_px(&p.value) else {
                    continue;
                };
                if px >= self.min_touch_target
                    || !reported.insert((p.location.line, p.location.column))
                {
                    continue;
                }
                issues.push(
                    Issue::new(
                        "responsive/small-touch-target",
                        Severity::Moderate,
                        Category::Accessibility,
                        format!(
                            "'.{}' sets {} to {}, below the {} touch target minimum",
                            class.name,
                            p.name,
                            format_px(px),
                            format_px(self.min_touch_target)
                        ),
                        p.location.clone(),
                    )
                    .with_suggestion(format!(
                        "Make interactive elements at least {0} by {0}",
                        format_px(self.min_touch_target)
                    ))
                    .with_example(
                        format!("{}: {};", p.name, p.value),
                        format!("{}: {};", p.name, format_px(self.min_touch_target)),
                    ),
                );
            }
        }
        issues
    }

    fn mobile_query(sheet: &StyleSheet) -> Option<Issue> {
        if !sheet.classes.iter().any(looks_interactive) {
            return None;
        }
        let covered = sheet
            .media_queries
            .iter()
            .flat_map(|m| width_features(&m.query))
            .any(|f| f.bound == Bound::Min || f.px <= MOBILE_MAX_WIDTH);
        if covered {
            return None;
        }
        Some(
            Issue::new(
                "responsive/missing-mobile-query",
                Severity::Moderate,
                Category::BestPractice,
                "Interactive components have no media query for small screens",
                Location::file_start(&sheet.path),
            )
            .with_suggestion("Add a mobile layout with @media (max-width: 768px) or build mobile-first with min-width queries"),
        )
    }
}

/// The first non-zero `px`/`em`/`rem` length in a size value, in px.
fn first_size_px(value: &str) -> Option<f64> {
    numeric_tokens(&strip_var_refs(value))
        .into_iter()
        .filter(|t| !t.is_zero())
        .find_map(|t| match t.unit.to_ascii_lowercase().as_str() {
            "px" => Some(t.number),
            "em" | "rem" => Some(t.number * ROOT_FONT_SIZE),
            _ => None,
        })
}

impl Checker for ResponsiveChecker {
    fn name(&self) -> &'static str {
        "responsive"
    }

    fn check(&self, sheet: &StyleSheet, raw: Option<&str>) -> Vec<Issue> {
        let mut issues = self.breakpoints(sheet);
        issues.extend(self.near_duplicates(sheet));
        issues.extend(self.touch_targets(sheet));
        issues.extend(Self::mobile_query(sheet));
        issues.extend(organization::check(sheet, raw));
        issues
    }
}

#[cfg(test)]
#[path = "responsive_tests.rs"]
mod tests;
