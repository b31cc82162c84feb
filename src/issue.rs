use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Location;

/// How urgently an issue needs attention. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Critical, Self::Moderate, Self::Minor];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Moderate => "moderate",
            Self::Minor => "minor",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Moderate => "Moderate",
            Self::Minor => "Minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "moderate" => Ok(Self::Moderate),
            "minor" => Ok(Self::Minor),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Naming,
    Organization,
    Accessibility,
    Performance,
    Duplication,
    Unused,
    BestPractice,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Naming,
        Self::Organization,
        Self::Accessibility,
        Self::Performance,
        Self::Duplication,
        Self::Unused,
        Self::BestPractice,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Naming => "naming",
            Self::Organization => "organization",
            Self::Accessibility => "accessibility",
            Self::Performance => "performance",
            Self::Duplication => "duplication",
            Self::Unused => "unused",
            Self::BestPractice => "best-practice",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Naming => "Naming",
            Self::Organization => "Organization",
            Self::Accessibility => "Accessibility",
            Self::Performance => "Performance",
            Self::Duplication => "Duplication",
            Self::Unused => "Unused code",
            Self::BestPractice => "Best practice",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Before/after snippet illustrating a fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub before: String,
    pub after: String,
}

impl CodeExample {
    #[must_use]
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// One finding produced by a checker.
///
/// Issues are values: checkers build them once and nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule: String,
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub location: Location,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<CodeExample>,
}

impl Issue {
    #[must_use]
    pub fn new(
        rule: &str,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            category,
            message: message.into(),
            location,
            suggestion: String::new(),
            code_example: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    #[must_use]
    pub fn with_example(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.code_example = Some(CodeExample::new(before, after));
        self
    }

    /// Display form of the file this issue points at.
    #[must_use]
    pub fn file_key(&self) -> String {
        self.location.file.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
