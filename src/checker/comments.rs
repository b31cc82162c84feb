use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::CommentsConfig;
use crate::issue::{Category, Issue, Severity};
use crate::model::{Location, StyleSheet};
use crate::parser::{Comment, extract_comments, strip_comments, top_level_blocks};

use super::Checker;

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\breq(?:uirement)?s?[\s_#:.\-]*\d+").expect("valid regex")
});

static CANONICAL_REQUIREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^REQ-\d{3,}$").expect("valid regex"));

const SEPARATOR_CHARS: &[char] = &['=', '-', '#', '*', '~', '_', '+'];

/// Minority comment style must reach this share of the majority to count as mixed.
const MIXED_STYLE_RATIO: f64 = 0.3;

/// Comments needed before the dominant script is meaningful.
const MIN_CLASSIFIED_COMMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Script {
    Latin,
    Cjk,
    Hangul,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
}

impl Script {
    fn of(ch: char) -> Option<Self> {
        match ch {
            c if c.is_ascii_alphabetic() => Some(Self::Latin),
            '\u{00C0}'..='\u{024F}' => Some(Self::Latin),
            '\u{0370}'..='\u{03FF}' => Some(Self::Greek),
            '\u{0400}'..='\u{04FF}' => Some(Self::Cyrillic),
            '\u{0590}'..='\u{05FF}' => Some(Self::Hebrew),
            '\u{0600}'..='\u{06FF}' => Some(Self::Arabic),
            '\u{3040}'..='\u{30FF}' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' => {
                Some(Self::Cjk)
            }
            '\u{AC00}'..='\u{D7AF}' => Some(Self::Hangul),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Latin => "Latin",
            Self::Cjk => "CJK",
            Self::Hangul => "Hangul",
            Self::Cyrillic => "Cyrillic",
            Self::Greek => "Greek",
            Self::Arabic => "Arabic",
            Self::Hebrew => "Hebrew",
        }
    }
}

/// Documentation quality: headers, section separators, references and consistency.
pub struct CommentsChecker {
    min_header_length: usize,
    separator_min_lines: usize,
    separator_min_blocks: usize,
}

impl CommentsChecker {
    #[must_use]
    pub const fn new(config: &CommentsConfig) -> Self {
        Self {
            min_header_length: config.min_header_length,
            separator_min_lines: config.separator_min_lines,
            separator_min_blocks: config.separator_min_blocks,
        }
    }

    fn header(&self, sheet: &StyleSheet, raw: &str, comments: &[Comment]) -> Option<Issue> {
        let start = Location::file_start(&sheet.path);
        if !starts_with_block_comment(raw) {
            return Some(
                Issue::new(
                    "comments/missing-header",
                    Severity::Minor,
                    Category::BestPractice,
                    "File does not start with a header comment",
                    start,
                )
                .with_suggestion("Open the file with a block comment describing what it styles")
                .with_example(
                    ".card { ... }",
                    "/*\n * Card component: layout, states and themes.\n */\n.card { ... }",
                ),
            );
        }

        let header = comments.first()?;
        let length = header_text(&header.text).chars().count();
        (length < self.min_header_length).then(|| {
            Issue::new(
                "comments/short-header",
                Severity::Minor,
                Category::BestPractice,
                format!(
                    "Header comment is {length} characters; at least {} are expected",
                    self.min_header_length
                ),
                start,
            )
            .with_suggestion("Describe the file's purpose and scope in the header")
        })
    }

    fn separators(&self, sheet: &StyleSheet, raw: &str, comments: &[Comment]) -> Option<Issue> {
        let lines = raw.lines().count();
        let blocks = strip_comments(raw).map_or(0, |s| top_level_blocks(&s));
        if lines <= self.separator_min_lines && blocks < self.separator_min_blocks {
            return None;
        }

        let styles: Vec<(char, usize)> = comments
            .iter()
            .filter_map(|c| separator_char(&c.text).map(|ch| (ch, c.line)))
            .collect();
        let Some(&(first_style, _)) = styles.first() else {
            return Some(
                Issue::new(
                    "comments/missing-separators",
                    Severity::Minor,
                    Category::BestPractice,
                    format!("File has {lines} lines and {blocks} top-level blocks but no section separators"),
                    Location::file_start(&sheet.path),
                )
                .with_suggestion("Split the file into sections with separator comments")
                .with_example("", "/* ========== Layout ========== */"),
            );
        };

        let (_, line) = styles.iter().find(|(ch, _)| *ch != first_style)?;
        Some(
            Issue::new(
                "comments/inconsistent-separators",
                Severity::Minor,
                Category::BestPractice,
                format!(
                    "Section separators mix styles ({})",
                    distinct_styles(&styles)
                ),
                Location::new(&sheet.path, *line, 1),
            )
            .with_suggestion(format!("Use one separator style throughout, e.g. '{}'", first_style.to_string().repeat(10))),
        )
    }

    fn requirement_refs(sheet: &StyleSheet, comments: &[Comment]) -> Vec<Issue> {
        let mut issues = Vec::new();
        for comment in comments {
            for found in REQUIREMENT_RE.find_iter(&comment.text) {
                let reference = found.as_str();
                if CANONICAL_REQUIREMENT_RE.is_match(reference) {
                    continue;
                }
                let canonical = canonical_requirement(reference);
                issues.push(
                    Issue::new(
                        "comments/malformed-requirement-ref",
                        Severity::Minor,
                        Category::BestPractice,
                        format!("Requirement reference '{reference}' is not in REQ-NNN form"),
                        Location::new(&sheet.path, comment.line, 1),
                    )
                    .with_suggestion(format!("Write it as '{canonical}'")),
                );
            }
        }
        issues
    }

    fn mixed_language(sheet: &StyleSheet, comments: &[Comment]) -> Vec<Issue> {
        let classified: Vec<(Script, &Comment)> = comments
            .iter()
            .filter_map(|c| dominant_script(&c.text).map(|s| (s, c)))
            .collect();
        if classified.len() < MIN_CLASSIFIED_COMMENTS {
            return Vec::new();
        }

        let mut counts: HashMap<Script, usize> = HashMap::new();
        for (script, _) in &classified {
            *counts.entry(*script).or_default() += 1;
        }
        // First-seen script wins ties so results do not depend on hash order.
        let dominant = classified
            .iter()
            .map(|(s, _)| *s)
            .max_by_key(|s| (counts[s], std::cmp::Reverse(first_index(&classified, *s))))
            .unwrap_or(Script::Latin);

        classified
            .into_iter()
            .filter(|(script, _)| *script != dominant)
            .map(|(script, comment)| {
                Issue::new(
                    "comments/mixed-language",
                    Severity::Minor,
                    Category::BestPractice,
                    format!(
                        "Comment is written in {} while most comments use {}",
                        script.label(),
                        dominant.label()
                    ),
                    Location::new(&sheet.path, comment.line, 1),
                )
                .with_suggestion(format!("Write comments in one language ({})", dominant.label()))
            })
            .collect()
    }

    fn mixed_styles(sheet: &StyleSheet, comments: &[Comment]) -> Option<Issue> {
        let block = comments.iter().filter(|c| c.block).count();
        let line = comments.len() - block;
        let (minority, majority, minority_is_block) = if block < line {
            (block, line, true)
        } else {
            (line, block, false)
        };
        if minority == 0 || ratio(minority, majority) < MIXED_STYLE_RATIO {
            return None;
        }
        let first_minority = comments.iter().find(|c| c.block == minority_is_block)?;
        Some(
            Issue::new(
                "comments/mixed-styles",
                Severity::Minor,
                Category::BestPractice,
                format!("File mixes {block} block comments and {line} line comments"),
                Location::new(&sheet.path, first_minority.line, 1),
            )
            .with_suggestion("Pick one comment style for the file"),
        )
    }
}

impl Checker for CommentsChecker {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn check(&self, sheet: &StyleSheet, raw: Option<&str>) -> Vec<Issue> {
        let Some(raw) = raw else {
            return Vec::new();
        };
        let comments = extract_comments(raw);

        let mut issues = Vec::new();
        issues.extend(self.header(sheet, raw, &comments));
        issues.extend(self.separators(sheet, raw, &comments));
        issues.extend(Self::requirement_refs(sheet, &comments));
        issues.extend(Self::mixed_language(sheet, &comments));
        issues.extend(Self::mixed_styles(sheet, &comments));
        issues
    }
}

pub(super) fn starts_with_block_comment(raw: &str) -> bool {
    raw.trim_start_matches('\u{feff}').trim_start().starts_with("/*")
}

/// The repeated character of a separator comment (`/* ===== Layout ===== */`).
pub(super) fn separator_char(text: &str) -> Option<char> {
    let first = text.chars().next().filter(|c| SEPARATOR_CHARS.contains(c))?;
    let run = text.chars().take_while(|c| *c == first).count();
    (run >= 3).then_some(first)
}

pub(super) fn distinct_styles(styles: &[(char, usize)]) -> String {
    let mut seen: Vec<char> = Vec::new();
    for (ch, _) in styles {
        if !seen.contains(ch) {
            seen.push(*ch);
        }
    }
    seen.iter()
        .map(|c| format!("'{}'", c.to_string().repeat(3)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header text without decorative leading `*` on each line.
fn header_text(text: &str) -> String {
    text.lines()
        .map(|l| l.trim().trim_start_matches('*').trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn canonical_requirement(reference: &str) -> String {
    let digits: String = reference.chars().filter(char::is_ascii_digit).collect();
    let number = digits.trim_start_matches('0');
    let number = if number.is_empty() { "0" } else { number };
    format!("REQ-{number:0>3}")
}

fn dominant_script(text: &str) -> Option<Script> {
    if separator_char(text).is_some() {
        return None;
    }
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for script in text.chars().filter_map(Script::of) {
        match counts.iter_mut().find(|(s, _)| *s == script) {
            Some((_, n)) => *n += 1,
            None => counts.push((script, 1)),
        }
    }
    counts
        .iter()
        .enumerate()
        .max_by_key(|(idx, (_, n))| (*n, std::cmp::Reverse(*idx)))
        .map(|(_, (s, _))| *s)
}

fn first_index(classified: &[(Script, &Comment)], script: Script) -> usize {
    classified
        .iter()
        .position(|(s, _)| *s == script)
        .unwrap_or(usize::MAX)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(a: usize, b: usize) -> f64 {
    a as f64 / b as f64
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
