use std::collections::HashMap;

use crate::issue::{Category, Issue, Severity};
use crate::model::{CssProperty, StyleSheet, VariableCategory};

use super::lexical::{hardcoded_lengths, hardcoded_numbers, property_in};
use super::tables::{RADIUS_PROPERTIES, RADIUS_SHAPE_VALUES, SPACING_PROPERTIES};
use super::{Checker, declarations};

/// Literal spacing, type-scale and radius values that should come from tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacingChecker;

impl SpacingChecker {
    fn spacing_issue(p: &CssProperty, literals: &[String], tokens: &HashMap<&str, &str>) -> Issue {
        let token = literals
            .iter()
            .find_map(|l| tokens.get(l.as_str()).map(|name| (l.as_str(), *name)));
        let (suggestion, after) = match token {
            Some((literal, name)) => (
                format!("Use var({name}), which already holds {literal}"),
                format!(
                    "{}: {};",
                    p.name,
                    p.value.replacen(literal, &format!("var({name})"), 1)
                ),
            ),
            None => (
                "Use a variable from the spacing scale (e.g. var(--space-md))".to_string(),
                format!("{}: var(--space-md);", p.name),
            ),
        };

        Issue::new(
            "spacing/hardcoded-spacing",
            Severity::Moderate,
            Category::BestPractice,
            format!("Hardcoded spacing {} in '{}'", literals.join(" "), p.name),
            p.location.clone(),
        )
        .with_suggestion(suggestion)
        .with_example(format!("{}: {};", p.name, p.value), after)
    }
}

impl Checker for SpacingChecker {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn check(&self, sheet: &StyleSheet, _raw: Option<&str>) -> Vec<Issue> {
        let tokens: HashMap<&str, &str> = sheet
            .variables
            .iter()
            .filter(|v| v.category == VariableCategory::Spacing)
            .map(|v| (v.value.trim(), v.name.as_str()))
            .collect();

        let mut issues = Vec::new();
        for (_, p) in declarations(sheet) {
            if property_in(&p.name, SPACING_PROPERTIES) {
                let literals = hardcoded_lengths(&p.value);
                if !literals.is_empty() {
                    issues.push(Self::spacing_issue(p, &literals, &tokens));
                }
            } else if p.name == "font-size" || p.name == "line-height" {
                let literals = if p.name == "font-size" {
                    hardcoded_lengths(&p.value)
                } else {
                    hardcoded_numbers(&p.value)
                };
                if !literals.is_empty() {
                    issues.push(
                        Issue::new(
                            "spacing/hardcoded-font-size",
                            Severity::Minor,
                            Category::BestPractice,
                            format!("Hardcoded {} {}", p.name, literals.join(" ")),
                            p.location.clone(),
                        )
                        .with_suggestion(
                            "Take type sizes from the type scale \
                             (e.g. var(--font-size-md), var(--line-height-body))",
                        ),
                    );
                }
            } else if property_in(&p.name, RADIUS_PROPERTIES) {
                let literals: Vec<String> = hardcoded_lengths(&p.value)
                    .into_iter()
                    .filter(|l| !RADIUS_SHAPE_VALUES.contains(&l.as_str()))
                    .collect();
                if !literals.is_empty() {
                    issues.push(
                        Issue::new(
                            "spacing/hardcoded-radius",
                            Severity::Minor,
                            Category::BestPractice,
                            format!("Hardcoded radius {} in '{}'", literals.join(" "), p.name),
                            p.location.clone(),
                        )
                        .with_suggestion("Use a radius variable (e.g. var(--radius-md))"),
                    );
                }
            }
        }
        issues
    }
}

#[cfg(test)]
#[path = "spacing_tests.rs"]
mod tests;
