use std::fmt::Write as _;
use std::path::Path;

use super::*;
use crate::parser::{CssParser, StyleSheetParser};

fn check(content: &str) -> Vec<Issue> {
    let sheet = CssParser::new()
        .parse(Path::new("docs.scss"), content)
        .unwrap();
    CommentsChecker::new(&CommentsConfig::default()).check(&sheet, Some(content))
}

fn with_rule<'a>(issues: &'a [Issue], rule: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.rule == rule).collect()
}

const HEADER: &str = "/*\n * Buttons: variants, sizes and interaction states.\n */\n";

#[test]
fn documented_small_file_is_clean() {
    let issues = check(&format!("{HEADER}.btn {{ color: var(--text-primary); }}\n"));
    assert!(issues.is_empty(), "unexpected: {issues:?}");
}

#[test]
fn missing_and_short_headers() {
    let missing = check(".a { color: red; }\n/* trailing */\n");
    assert_eq!(with_rule(&missing, "comments/missing-header").len(), 1);

    let short = check("/* btn */\n.a { color: red; }\n");
    let issues = with_rule(&short, "comments/short-header");
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("3 characters"));
}

#[test]
fn large_files_need_consistent_separators() {
    let mut body = String::from(HEADER);
    for i in 0..6 {
        let _ = writeln!(body, ".block-{i} {{ display: block; }}");
    }
    let issues = check(&body);
    assert_eq!(with_rule(&issues, "comments/missing-separators").len(), 1);

    let mixed = format!(
        "{HEADER}/* ===== Layout ===== */\n.a {{ display: block; }}\n.b {{ display: block; }}\n.c {{ display: block; }}\n/* ----- Theme ----- */\n.d {{ display: block; }}\n.e {{ display: block; }}\n"
    );
    let issues = check(&mixed);
    assert!(with_rule(&issues, "comments/missing-separators").is_empty());
    let inconsistent = with_rule(&issues, "comments/inconsistent-separators");
    assert_eq!(inconsistent.len(), 1);
    assert_eq!(inconsistent[0].location.line, 8);
}

#[test]
fn requirement_references_must_be_canonical() {
    let issues = check(&format!(
        "{HEADER}/* Implements req 12 and REQ-004 */\n.a {{ color: red; }}\n/* see Requirement #4, req_007 */\n"
    ));
    let refs = with_rule(&issues, "comments/malformed-requirement-ref");
    let suggestions: Vec<_> = refs.iter().map(|i| i.suggestion.as_str()).collect();
    assert_eq!(
        suggestions,
        vec!["Write it as 'REQ-012'", "Write it as 'REQ-004'", "Write it as 'REQ-007'"]
    );
    assert_eq!(refs[0].location.line, 4);
}

#[test]
fn mixed_language_flags_minority_script() {
    let issues = check(&format!(
        "{HEADER}/* Layout grid */\n.a {{ display: grid; }}\n/* Header area */\n.b {{ display: flex; }}\n/* 按钮样式 */\n.c {{ color: red; }}\n"
    ));
    let mixed = with_rule(&issues, "comments/mixed-language");
    assert_eq!(mixed.len(), 1);
    assert!(mixed[0].message.contains("CJK"));
    assert_eq!(mixed[0].location.line, 8);
}

#[test]
fn mixed_comment_styles() {
    let issues = check(&format!(
        "{HEADER}// layout\n.a {{ display: grid; }}\n/* theme */\n// states\n.b {{ color: red; }}\n"
    ));
    let mixed = with_rule(&issues, "comments/mixed-styles");
    assert_eq!(mixed.len(), 1);
    assert_eq!(mixed[0].location.line, 4);
}

#[test]
fn separator_detection() {
    assert_eq!(separator_char("===== Layout ====="), Some('='));
    assert_eq!(separator_char("---"), Some('-'));
    assert_eq!(separator_char("== short"), None);
    assert_eq!(separator_char("Layout"), None);
}

#[test]
fn without_raw_text_nothing_is_reported() {
    let sheet = StyleSheet::new("x.css");
    let checker = CommentsChecker::new(&CommentsConfig::default());
    assert!(checker.check(&sheet, None).is_empty());
}
