use std::collections::{HashMap, HashSet};

use crate::issue::{Category, Issue, Severity};
use crate::model::{CssProperty, CssSelector, Location, StyleSheet};
use crate::parser::{strip_pseudo, subject_compound};

use super::lexical::{hardcoded_easings, hardcoded_times, is_canonical_ident, property_in, to_canonical};
use super::tables::{
    BUTTON_CLASS_HINTS, DURATION_PROPERTIES, EASING_PROPERTIES, FOCUS_PSEUDO_CLASSES,
    INTERACTIVE_ATTRIBUTES, INTERACTIVE_ELEMENTS, MOTION_PROPERTIES, VISIBLE_FOCUS_PROPERTIES,
};
use super::{Checker, declarations};

/// Motion tokens, reduced-motion support and keyboard focus visibility.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationChecker;

impl AnimationChecker {
    fn motion_tokens(sheet: &StyleSheet) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (_, p) in declarations(sheet) {
            if is_duration_property(&p.name) {
                let times = hardcoded_times(&p.value);
                if !times.is_empty() {
                    issues.push(
                        Issue::new(
                            "animation/hardcoded-duration",
                            Severity::Minor,
                            Category::BestPractice,
                            format!("Hardcoded duration {} in '{}'", times.join(" "), p.name),
                            p.location.clone(),
                        )
                        .with_suggestion("Use a duration variable (e.g. var(--duration-fast))"),
                    );
                }
            }
            if is_easing_property(&p.name) {
                let easings = hardcoded_easings(&p.value);
                if !easings.is_empty() {
                    issues.push(
                        Issue::new(
                            "animation/hardcoded-easing",
                            Severity::Minor,
                            Category::BestPractice,
                            format!("Hardcoded easing {} in '{}'", easings.join(" "), p.name),
                            p.location.clone(),
                        )
                        .with_suggestion("Use an easing variable (e.g. var(--ease-standard))"),
                    );
                }
            }
        }
        issues
    }

    fn keyframe_names(sheet: &StyleSheet) -> Vec<Issue> {
        sheet
            .animations
            .iter()
            .filter(|a| !is_canonical_ident(&a.name))
            .map(|a| {
                let canonical = to_canonical(&a.name);
                Issue::new(
                    "animation/non-canonical-keyframes",
                    Severity::Minor,
                    Category::Naming,
                    format!("Keyframes '{}' is not lowercase-hyphenated", a.name),
                    a.location.clone(),
                )
                .with_suggestion(format!("Rename to '{canonical}' and update every reference"))
            })
            .collect()
    }

    fn reduced_motion(sheet: &StyleSheet) -> Vec<Issue> {
        let animated: Vec<_> = sheet
            .classes
            .iter()
            .filter(|c| c.properties.iter().any(|p| is_motion_property(&p.name)))
            .collect();
        if sheet.animations.is_empty() && animated.is_empty() {
            return Vec::new();
        }

        let queries: Vec<_> = sheet
            .media_queries
            .iter()
            .filter(|m| m.is_reduced_motion())
            .collect();
        if queries.is_empty() {
            return vec![
                Issue::new(
                    "animation/missing-reduced-motion",
                    Severity::Critical,
                    Category::Accessibility,
                    "Animations and transitions have no prefers-reduced-motion alternative",
                    Location::file_start(&sheet.path),
                )
                .with_suggestion("Add a @media (prefers-reduced-motion: reduce) block that disables or shortens motion")
                .with_example(
                    ".spinner { animation: spin 1s linear infinite; }",
                    "@media (prefers-reduced-motion: reduce) {\n  *, *::before, *::after {\n    animation-duration: 0.01ms !important;\n    transition-duration: 0.01ms !important;\n  }\n}",
                ),
            ];
        }

        let wildcard = sheet
            .selectors
            .iter()
            .any(|s| s.media.as_deref().is_some_and(is_reduced_motion_prelude) && s.text.starts_with('*'));
        if wildcard {
            return Vec::new();
        }

        let nested_overrides: HashSet<&str> = sheet
            .classes
            .iter()
            .filter(|c| c.media.as_deref().is_some_and(is_reduced_motion_prelude))
            .map(|c| c.name.as_str())
            .collect();

        let mut reported = HashSet::new();
        animated
            .into_iter()
            .filter(|c| c.media.as_deref().is_none_or(|m| !is_reduced_motion_prelude(m)))
            .filter(|c| !nested_overrides.contains(c.name.as_str()))
            .filter(|c| {
                let needle = format!(".{}", c.name);
                !queries.iter().any(|q| mentions_class(&q.content, &needle))
            })
            .filter(|c| reported.insert(c.name.as_str()))
            .map(|c| {
                Issue::new(
                    "animation/reduced-motion-gap",
                    Severity::Moderate,
                    Category::Accessibility,
                    format!("Animated class '.{}' is not covered by the reduced-motion rule", c.name),
                    c.location.clone(),
                )
                .with_suggestion(format!(
                    "Disable the motion of '.{}' inside @media (prefers-reduced-motion: reduce)",
                    c.name
                ))
            })
            .collect()
    }

    fn focus_styles(sheet: &StyleSheet) -> Vec<Issue> {
        let focus_rules: Vec<&CssSelector> =
            sheet.selectors.iter().filter(|s| has_focus_pseudo(&s.text)).collect();
        let focused_bases: HashSet<String> =
            focus_rules.iter().map(|s| strip_pseudo(&s.text)).collect();

        let mut issues = Vec::new();
        let mut reported = HashSet::new();
        for selector in &sheet.selectors {
            let base = strip_pseudo(&selector.text);
            if !is_interactive(&base) || focused_bases.contains(&base) || !reported.insert(base.clone()) {
                continue;
            }
            issues.push(
                Issue::new(
                    "animation/missing-focus-style",
                    Severity::Moderate,
                    Category::Accessibility,
                    format!("Interactive selector '{base}' has no :focus or :focus-visible style"),
                    selector.location.clone(),
                )
                .with_suggestion(format!("Add a visible '{base}:focus-visible' style for keyboard users"))
                .with_example(
                    format!("{base}:hover {{ background: var(--bg-hover); }}"),
                    format!("{base}:focus-visible {{ outline: 2px solid var(--focus-ring); }}"),
                ),
            );
        }

        let mut visible_by_base: HashMap<String, bool> = HashMap::new();
        for rule in &focus_rules {
            let visible = rule.properties.iter().any(provides_visible_focus);
            *visible_by_base.entry(strip_pseudo(&rule.text)).or_default() |= visible;
        }
        for rule in focus_rules {
            let Some(outline) = rule.properties.iter().find(|p| removes_outline(p)) else {
                continue;
            };
            if visible_by_base
                .get(&strip_pseudo(&rule.text))
                .copied()
                .unwrap_or(false)
            {
                continue;
            }
            issues.push(
                Issue::new(
                    "animation/focus-indicator-removed",
                    Severity::Critical,
                    Category::Accessibility,
                    format!("'{}' removes the focus outline without a visible replacement", rule.text),
                    outline.location.clone(),
                )
                .with_suggestion("Keep the outline or replace it with a visible indicator such as box-shadow")
                .with_example(
                    format!("{} {{ outline: none; }}", rule.text),
                    format!("{} {{ outline: 2px solid var(--focus-ring); outline-offset: 2px; }}", rule.text),
                ),
            );
        }
        issues
    }
}

impl Checker for AnimationChecker {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn check(&self, sheet: &StyleSheet, _raw: Option<&str>) -> Vec<Issue> {
        let mut issues = Self::motion_tokens(sheet);
        issues.extend(Self::keyframe_names(sheet));
        issues.extend(Self::reduced_motion(sheet));
        issues.extend(Self::focus_styles(sheet));
        issues
    }
}

fn is_duration_property(name: &str) -> bool {
    property_in(name, DURATION_PROPERTIES) || name.ends_with("-duration") || name.ends_with("-delay")
}

fn is_easing_property(name: &str) -> bool {
    property_in(name, EASING_PROPERTIES) || name.ends_with("-timing-function")
}

fn is_motion_property(name: &str) -> bool {
    property_in(name, MOTION_PROPERTIES)
        || name.starts_with("animation")
        || name.starts_with("transition")
}

fn is_reduced_motion_prelude(prelude: &str) -> bool {
    crate::model::normalize_query(prelude).contains("prefers-reduced-motion:reduce")
}

/// Whether `.name` appears in the text as a whole class token.
fn mentions_class(content: &str, needle: &str) -> bool {
    content.match_indices(needle).any(|(idx, _)| {
        content[idx + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '-' || c == '_'))
    })
}

fn has_focus_pseudo(selector: &str) -> bool {
    FOCUS_PSEUDO_CLASSES.iter().any(|f| selector.contains(f))
}

/// Whether the (pseudo-stripped) selector targets something keyboard-focusable.
fn is_interactive(base: &str) -> bool {
    let Some(subject) = subject_compound(base) else {
        return false;
    };
    let element: String = subject
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase();
    if INTERACTIVE_ELEMENTS.contains(&element.as_str()) {
        return true;
    }
    let normalized = subject.replace('\'', "\"");
    if INTERACTIVE_ATTRIBUTES.iter().any(|a| normalized.contains(a)) {
        return true;
    }
    subject.split('.').skip(1).any(|class| {
        let class = class.to_ascii_lowercase();
        BUTTON_CLASS_HINTS.iter().any(|hint| class.contains(hint))
    })
}

fn removes_outline(p: &CssProperty) -> bool {
    let value = p.value.trim().to_ascii_lowercase();
    let value = value.trim_end_matches("!important").trim();
    (p.name == "outline" || p.name == "outline-style" || p.name == "outline-width")
        && matches!(value, "none" | "0" | "0px")
}

fn provides_visible_focus(p: &CssProperty) -> bool {
    if !property_in(&p.name, VISIBLE_FOCUS_PROPERTIES) || removes_outline(p) {
        return false;
    }
    let value = p.value.trim().to_ascii_lowercase();
    !matches!(value.as_str(), "none" | "0" | "0px" | "transparent" | "inherit" | "unset")
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod tests;
