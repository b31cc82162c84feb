use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::NamingConfig;
use crate::issue::{Category, Issue, Severity};
use crate::model::{ClassKind, CssClass, CssVariable, StyleSheet, VariableCategory};

use super::Checker;
use super::lexical::{is_canonical_class, is_canonical_variable, property_in, to_canonical};
use super::tables::{COLOR_WORDS, SPACING_PROPERTIES};

static SPACING_UTILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:m|p|gap)[trblxy]?-[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex")
});

/// Expected name prefixes per variable category. Color and other are not listed.
const CATEGORY_PREFIXES: &[(VariableCategory, &[&str])] = &[
    (VariableCategory::Spacing, &["--space-", "--spacing-"]),
    (
        VariableCategory::Font,
        &["--font-", "--text-size-", "--line-height-", "--leading-"],
    ),
    (VariableCategory::Radius, &["--radius-"]),
    (
        VariableCategory::Duration,
        &["--duration-", "--transition-", "--ease-", "--easing-"],
    ),
];

/// Variable and class naming conventions.
pub struct NamingChecker {
    role_prefixes: Vec<String>,
    shared_tokens: Vec<String>,
}

impl NamingChecker {
    #[must_use]
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            role_prefixes: config.role_prefixes.clone(),
            shared_tokens: config.shared_tokens.clone(),
        }
    }

    fn check_variable_name(variable: &CssVariable) -> Option<Issue> {
        if is_canonical_variable(&variable.name) {
            return None;
        }
        let canonical = format!("--{}", to_canonical(&variable.name));
        Some(
            Issue::new(
                "naming/non-canonical-variable",
                Severity::Minor,
                Category::Naming,
                format!("Variable '{}' is not lowercase-hyphenated", variable.name),
                variable.location.clone(),
            )
            .with_suggestion(format!("Rename to '{canonical}'"))
            .with_example(
                format!("{}: {};", variable.name, variable.value),
                format!("{canonical}: {};", variable.value),
            ),
        )
    }

    fn check_literal_color_name(&self, variable: &CssVariable) -> Option<Issue> {
        if variable.category != VariableCategory::Color
            || self.shared_tokens.iter().any(|t| *t == variable.name)
            || self
                .role_prefixes
                .iter()
                .any(|p| variable.name.starts_with(p.as_str()))
        {
            return None;
        }
        let word = color_word(&variable.name)?;
        let prefixes = self.role_prefixes.join("`, `");
        Some(
            Issue::new(
                "naming/literal-color-name",
                Severity::Moderate,
                Category::Naming,
                format!(
                    "Color variable '{}' describes its color ('{word}') instead of its role",
                    variable.name
                ),
                variable.location.clone(),
            )
            .with_suggestion(format!(
                "Name color variables after what they color, using a role prefix such as `{prefixes}`"
            ))
            .with_example(
                format!("color: var({});", variable.name),
                "color: var(--text-muted);",
            ),
        )
    }

    fn check_category_prefix(variable: &CssVariable) -> Option<Issue> {
        let (category, prefixes) = CATEGORY_PREFIXES
            .iter()
            .find(|(category, _)| *category == variable.category)?;
        if prefixes.iter().any(|p| variable.name.starts_with(p)) {
            return None;
        }
        Some(
            Issue::new(
                "naming/category-prefix",
                Severity::Minor,
                Category::Naming,
                format!(
                    "{} variable '{}' does not use a {} prefix",
                    category_label(*category),
                    variable.name,
                    category_label(*category).to_lowercase()
                ),
                variable.location.clone(),
            )
            .with_suggestion(format!("Use one of: {}", prefixes.join(", "))),
        )
    }

    fn check_duplicates(sheet: &StyleSheet) -> Vec<Issue> {
        let mut first_seen: HashMap<(&str, &str), usize> = HashMap::new();
        let mut issues = Vec::new();
        for variable in &sheet.variables {
            let key = (variable.scope.as_str(), variable.name.as_str());
            if let Some(first_line) = first_seen.get(&key) {
                issues.push(
                    Issue::new(
                        "naming/duplicate-variable",
                        Severity::Moderate,
                        Category::Duplication,
                        format!(
                            "Variable '{}' is declared again in '{}' (first on line {first_line}); the last declaration silently wins",
                            variable.name, variable.scope
                        ),
                        variable.location.clone(),
                    )
                    .with_suggestion("Keep a single declaration per scope and remove the others"),
                );
            } else {
                first_seen.insert(key, variable.location.line);
            }
        }
        issues
    }

    fn check_utility_class(class: &CssClass) -> Option<Issue> {
        if class.kind != ClassKind::Utility {
            return None;
        }
        let name = class.name.as_str();
        let (expected, hint) = if !class.properties.is_empty()
            && class
                .properties
                .iter()
                .all(|p| property_in(&p.name, SPACING_PROPERTIES))
            && !SPACING_UTILITY_RE.is_match(name)
        {
            ("{m|p|gap}{t|r|b|l|x|y}-{size}", "spacing utilities")
        } else if name.contains("button") && !name.starts_with("btn-") {
            ("btn-", "button utilities")
        } else if has_segment(name, "tag") && !name.starts_with("tag-") {
            ("tag-", "tag utilities")
        } else if has_segment(name, "badge") && !name.starts_with("badge-") {
            ("badge-", "badge utilities")
        } else {
            return None;
        };

        Some(
            Issue::new(
                "naming/utility-prefix",
                Severity::Minor,
                Category::Naming,
                format!("Utility class '.{name}' does not follow the `{expected}` pattern for {hint}"),
                class.location.clone(),
            )
            .with_suggestion(format!("Rename the class to the `{expected}` form")),
        )
    }
}

impl Checker for NamingChecker {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn check(&self, sheet: &StyleSheet, _raw: Option<&str>) -> Vec<Issue> {
        let mut issues = Vec::new();

        let mut seen_names = HashSet::new();
        for variable in &sheet.variables {
            if !seen_names.insert(variable.name.as_str()) {
                continue;
            }
            issues.extend(Self::check_variable_name(variable));
            issues.extend(self.check_literal_color_name(variable));
            issues.extend(Self::check_category_prefix(variable));
        }

        issues.extend(Self::check_duplicates(sheet));

        let mut seen_classes = HashSet::new();
        for class in &sheet.classes {
            if !seen_classes.insert(class.name.as_str()) {
                continue;
            }
            if !is_canonical_class(&class.name) {
                let canonical = to_canonical(&class.name);
                issues.push(
                    Issue::new(
                        "naming/non-canonical-class",
                        Severity::Minor,
                        Category::Naming,
                        format!("Class '.{}' is not lowercase-hyphenated", class.name),
                        class.location.clone(),
                    )
                    .with_suggestion(format!("Rename to '.{canonical}'"))
                    .with_example(format!(".{} {{ }}", class.name), format!(".{canonical} {{ }}")),
                );
            }
            issues.extend(Self::check_utility_class(class));
        }

        issues
    }
}

/// The first color word used as a name segment (`--gray-500`, `--blue2`).
fn color_word(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    lower
        .trim_start_matches('-')
        .split(['-', '_'])
        .find_map(|segment| {
            COLOR_WORDS.iter().copied().find(|word| {
                segment
                    .strip_prefix(word)
                    .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
            })
        })
}

fn has_segment(name: &str, word: &str) -> bool {
    name.split(['-', '_']).any(|s| s == word || s == format!("{word}s"))
}

const fn category_label(category: VariableCategory) -> &'static str {
    match category {
        VariableCategory::Color => "Color",
        VariableCategory::Spacing => "Spacing",
        VariableCategory::Font => "Font",
        VariableCategory::Radius => "Radius",
        VariableCategory::Duration => "Duration",
        VariableCategory::Other => "Other",
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
