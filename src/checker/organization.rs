//! File-layout hygiene, reported by [`super::ResponsiveChecker`].

use crate::issue::{Category, Issue, Severity};
use crate::model::{Location, StyleSheet, is_dark_mode_context};
use crate::parser::extract_comments;

use super::comments::{distinct_styles, separator_char, starts_with_block_comment};

/// Files longer than this should be divided into sections.
const SECTION_MIN_LINES: usize = 100;

/// Consecutive media queries further apart than this are scattered.
const MEDIA_SCATTER_LINES: usize = 150;

fn organization_issue(rule: &str, message: String, location: Location, suggestion: &str) -> Issue {
    Issue::new(rule, Severity::Minor, Category::Organization, message, location)
        .with_suggestion(suggestion)
}

pub(super) fn check(sheet: &StyleSheet, raw: Option<&str>) -> Vec<Issue> {
    let mut issues = Vec::new();
    if let Some(raw) = raw {
        issues.extend(layout_comments(sheet, raw));
    }
    issues.extend(variables_grouped(sheet));
    issues.extend(media_scatter(sheet));
    issues.extend(dark_mode_grouped(sheet));
    issues
}

fn layout_comments(sheet: &StyleSheet, raw: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if !starts_with_block_comment(raw) {
        issues.push(organization_issue(
            "organization/missing-file-header",
            "File has no header comment describing its contents".to_string(),
            Location::file_start(&sheet.path),
            "Start the file with a block comment naming the component or layer it holds",
        ));
    }

    let styles: Vec<(char, usize)> = extract_comments(raw)
        .iter()
        .filter_map(|c| separator_char(&c.text).map(|ch| (ch, c.line)))
        .collect();
    let lines = raw.lines().count();
    if styles.is_empty() && lines > SECTION_MIN_LINES {
        issues.push(organization_issue(
            "organization/missing-section-separators",
            format!("File has {lines} lines but no section separator comments"),
            Location::file_start(&sheet.path),
            "Group related rules into sections headed by separator comments",
        ));
    }
    if let Some(&(first, _)) = styles.first()
        && let Some(&(_, line)) = styles.iter().find(|(ch, _)| *ch != first)
    {
        issues.push(organization_issue(
            "organization/inconsistent-separators",
            format!("Section separators use different patterns ({})", distinct_styles(&styles)),
            Location::new(&sheet.path, line, 1),
            "Use a single separator pattern for every section",
        ));
    }
    issues
}

fn variables_grouped(sheet: &StyleSheet) -> Option<Issue> {
    let first_rule = sheet
        .selectors
        .iter()
        .filter(|s| s.media.is_none() && s.text != ":root")
        .map(|s| s.location.line)
        .min()?;
    let late = sheet
        .variables
        .iter()
        .find(|v| v.scope == ":root" && v.location.line > first_rule)?;
    Some(organization_issue(
        "organization/variables-not-grouped",
        format!(
            "Root variable '{}' is declared after the first rule (line {first_rule})",
            late.name
        ),
        late.location.clone(),
        "Keep all :root variables together at the top of the file",
    ))
}

fn media_scatter(sheet: &StyleSheet) -> Vec<Issue> {
    let mut queries: Vec<_> = sheet.media_queries.iter().collect();
    queries.sort_by_key(|m| m.location.line);
    queries
        .windows(2)
        .filter(|pair| pair[1].location.line - pair[0].location.line > MEDIA_SCATTER_LINES)
        .map(|pair| {
            organization_issue(
                "organization/scattered-media-queries",
                format!(
                    "Media query '{}' is {} lines after the previous one",
                    pair[1].query,
                    pair[1].location.line - pair[0].location.line
                ),
                pair[1].location.clone(),
                "Keep media queries next to the rules they adjust, or collect them in one section",
            )
        })
        .collect()
}

fn dark_mode_grouped(sheet: &StyleSheet) -> Option<Issue> {
    let mut dark_blocks: Vec<&Location> = sheet
        .media_queries
        .iter()
        .filter(|m| m.is_dark_mode())
        .map(|m| &m.location)
        .chain(
            sheet
                .selectors
                .iter()
                .filter(|s| s.media.is_none() && is_dark_mode_context(&s.text))
                .map(|s| &s.location),
        )
        .collect();
    dark_blocks.sort_by_key(|l| l.line);

    let ordinary: Vec<usize> = sheet
        .selectors
        .iter()
        .filter(|s| s.media.is_none() && !is_dark_mode_context(&s.text) && s.text != ":root")
        .map(|s| s.location.line)
        .collect();

    let split = dark_blocks.windows(2).find(|pair| {
        ordinary
            .iter()
            .any(|line| *line > pair[0].line && *line < pair[1].line)
    })?;
    Some(organization_issue(
        "organization/dark-mode-not-grouped",
        format!(
            "Dark-mode styles are split; ordinary rules sit between line {} and line {}",
            split[0].line, split[1].line
        ),
        split[1].clone(),
        "Collect dark-mode overrides into a single block or section",
    ))
}

#[cfg(test)]
#[path = "organization_tests.rs"]
mod tests;
