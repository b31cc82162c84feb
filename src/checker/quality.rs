use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::config::QualityConfig;
use crate::issue::{Category, Issue, Severity};
use crate::model::{ClassKind, CssClass, StyleSheet};
use crate::parser::{compounds, split_selector_list};

use super::lexical::property_in;
use super::tables::UNNECESSARY_VENDOR_PROPERTIES;
use super::{Checker, declarations};

/// Pseudo-elements that may be written with a single colon.
const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

/// Pseudo-classes whose specificity is that of their most specific argument.
const FORWARDING_PSEUDO_CLASSES: &[&str] = &["not", "is", "has", "matches"];

/// Specificity as `(ids, classes, elements)`.
type Weight = (u32, u32, u32);

/// Selector specificity: IDs x 100 + classes, attributes and pseudo-classes x 10 +
/// elements and pseudo-elements x 1.
///
/// `:not()`, `:is()` and `:has()` count their most specific argument; `:where()` counts
/// nothing.
#[must_use]
pub fn specificity(selector: &str) -> u32 {
    let (ids, classes, elements) = weight(selector);
    ids * 100 + classes * 10 + elements
}

fn weight(selector: &str) -> Weight {
    let chars: Vec<char> = selector.chars().collect();
    let mut total = (0, 0, 0);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '#' => {
                total.0 += 1;
                i = skip_ident(&chars, i + 1);
            }
            '.' => {
                total.1 += 1;
                i = skip_ident(&chars, i + 1);
            }
            '[' => {
                total.1 += 1;
                i = skip_group(&chars, i, '[', ']');
            }
            ':' => {
                let element = chars.get(i + 1) == Some(&':');
                let start = if element { i + 2 } else { i + 1 };
                let end = skip_ident(&chars, start);
                let name = chars[start..end].iter().collect::<String>().to_ascii_lowercase();
                let (args, next) = if chars.get(end) == Some(&'(') {
                    let close = skip_group(&chars, end, '(', ')');
                    let inner: String = chars[end + 1..close.saturating_sub(1).max(end + 1)]
                        .iter()
                        .collect();
                    (Some(inner), close)
                } else {
                    (None, end)
                };
                i = next;

                if element || LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()) {
                    total.2 += 1;
                } else if FORWARDING_PSEUDO_CLASSES.contains(&name.as_str())
                    && let Some(args) = &args
                {
                    let inner = most_specific(args);
                    total = (total.0 + inner.0, total.1 + inner.1, total.2 + inner.2);
                } else if name != "where" {
                    total.1 += 1;
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                total.2 += 1;
                i = skip_ident(&chars, i);
            }
            _ => i += 1,
        }
    }
    total
}

fn most_specific(list: &str) -> Weight {
    split_selector_list(list)
        .iter()
        .map(|(_, selector)| weight(selector))
        .max()
        .unwrap_or_default()
}

fn skip_ident(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c.is_alphanumeric() || c == '-' || c == '_' => i += 1,
            _ => break,
        }
    }
    i.min(chars.len())
}

/// Index just past the bracket closing the one at `open`.
fn skip_group(chars: &[char], open: usize, left: char, right: char) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (idx, &ch) in chars.iter().enumerate().skip(open) {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, c) if c == left => depth += 1,
            (None, c) if c == right => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return idx + 1;
                }
            }
            _ => {}
        }
    }
    chars.len()
}

/// The unprefixed form of a vendor-prefixed property.
fn unprefixed(name: &str) -> &str {
    name.strip_prefix('-')
        .and_then(|rest| rest.split_once('-'))
        .map_or(name, |(_, property)| property)
}

/// Order-insensitive fingerprint of a class's declarations.
fn signature(class: &CssClass) -> String {
    let mut pairs: Vec<String> = class
        .properties
        .iter()
        .map(|p| format!("{}:{}", p.name.to_ascii_lowercase(), p.value.trim()))
        .collect();
    pairs.sort();
    pairs.join(";")
}

/// Specificity, nesting, `!important`, vendor prefixes and repeated declaration blocks.
pub struct QualityChecker {
    max_utility_specificity: u32,
    max_nesting_depth: usize,
}

impl QualityChecker {
    #[must_use]
    pub const fn new(config: &QualityConfig) -> Self {
        Self {
            max_utility_specificity: config.max_utility_specificity,
            max_nesting_depth: config.max_nesting_depth,
        }
    }

    fn utility_specificity(&self, sheet: &StyleSheet) -> Vec<Issue> {
        sheet
            .classes
            .iter()
            .filter(|c| c.kind == ClassKind::Utility)
            .filter_map(|c| {
                let score = specificity(&c.selector);
                (score > self.max_utility_specificity).then(|| {
                    Issue::new(
                        "quality/utility-specificity",
                        Severity::Minor,
                        Category::BestPractice,
                        format!(
                            "Utility selector '{}' has specificity {score} (limit {})",
                            c.selector, self.max_utility_specificity
                        ),
                        c.location.clone(),
                    )
                    .with_suggestion(format!("Keep utilities to a single class, e.g. '.{}'", c.name))
                })
            })
            .collect()
    }

    fn selectors(&self, sheet: &StyleSheet) -> Vec<Issue> {
        let mut issues = Vec::new();
        for selector in &sheet.selectors {
            let depth = compounds(&selector.text).len();
            if depth > self.max_nesting_depth {
                issues.push(
                    Issue::new(
                        "quality/deep-nesting",
                        Severity::Minor,
                        Category::BestPractice,
                        format!(
                            "Selector '{}' nests {depth} levels deep (limit {})",
                            selector.text, self.max_nesting_depth
                        ),
                        selector.location.clone(),
                    )
                    .with_suggestion("Give the element its own class instead of qualifying it through its ancestors"),
                );
            }
            if weight(&selector.text).0 > 0 {
                issues.push(
                    Issue::new(
                        "quality/id-selector",
                        Severity::Moderate,
                        Category::BestPractice,
                        format!("Selector '{}' uses an ID", selector.text),
                        selector.location.clone(),
                    )
                    .with_suggestion("Style through classes; IDs are hard to override")
                    .with_example("#header { ... }", ".site-header { ... }"),
                );
            }
        }
        issues
    }

    fn declaration_flags(sheet: &StyleSheet) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (_, p) in declarations(sheet) {
            if p.is_important() {
                issues.push(
                    Issue::new(
                        "quality/important",
                        Severity::Moderate,
                        Category::BestPractice,
                        format!("'{}' is declared !important", p.name),
                        p.location.clone(),
                    )
                    .with_suggestion("Resolve the conflict through selector order or specificity instead"),
                );
            }
            if property_in(&p.name, UNNECESSARY_VENDOR_PROPERTIES) {
                let standard = unprefixed(&p.name);
                issues.push(
                    Issue::new(
                        "quality/vendor-prefix",
                        Severity::Minor,
                        Category::Performance,
                        format!("Vendor prefix '{}' is no longer needed", p.name),
                        p.location.clone(),
                    )
                    .with_suggestion(format!("Use '{standard}' only"))
                    .with_example(
                        format!("{}: {};", p.name, p.value),
                        format!("{standard}: {};", p.value),
                    ),
                );
            }
        }
        issues
    }

    fn duplicate_patterns(sheet: &StyleSheet) -> Vec<Issue> {
        let mut first_by_signature: HashMap<String, &CssClass> = HashMap::new();
        let mut issues = Vec::new();
        for class in sheet
            .classes
            .iter()
            .filter(|c| c.media.is_none() && !c.properties.is_empty())
        {
            let first = match first_by_signature.entry(signature(class)) {
                Entry::Vacant(slot) => {
                    slot.insert(class);
                    continue;
                }
                Entry::Occupied(slot) => *slot.get(),
            };
            // Selectors of one rule share the same declarations.
            if first.properties[0].location == class.properties[0].location {
                continue;
            }
            issues.push(
                Issue::new(
                    "quality/duplicate-pattern",
                    Severity::Minor,
                    Category::Duplication,
                    format!(
                        "'{}' repeats the declarations of '{}' (line {})",
                        class.selector, first.selector, first.location.line
                    ),
                    class.location.clone(),
                )
                .with_suggestion(format!(
                    "Reuse '.{}' or extract the shared declarations into one class",
                    first.name
                )),
            );
        }
        issues
    }
}

impl Checker for QualityChecker {
    fn name(&self) -> &'static str {
        "quality"
    }

    fn check(&self, sheet: &StyleSheet, _raw: Option<&str>) -> Vec<Issue> {
        let mut issues = self.utility_specificity(sheet);
        issues.extend(self.selectors(sheet));
        issues.extend(Self::declaration_flags(sheet));
        issues.extend(Self::duplicate_patterns(sheet));
        issues
    }
}

#[cfg(test)]
#[path = "quality_tests.rs"]
mod tests;
