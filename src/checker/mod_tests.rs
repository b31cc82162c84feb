use std::path::Path;

use super::*;
use crate::issue::{Category, Severity};
use crate::parser::{CssParser, StyleSheetParser};

const MESSY: &str = r#"
:root { --primaryBlue: #0066cc; --gap: 12px; --white: #fff; }
.Card { color: #333; margin: 16px; border-radius: 6px; transition: all 200ms ease; }
#sidebar .nav .item a:focus { outline: none; }
.btn-small { width: 30px; color: #ffffff; background-color: #ffffff !important; }
@keyframes fadeIn { to { opacity: 1; } }
@media (max-width: 900px) { .Card { -webkit-transition: none; } }
"#;

struct Fixed(&'static str);

impl Checker for Fixed {
    fn name(&self) -> &'static str {
        self.0
    }

    fn check(&self, sheet: &StyleSheet, _raw: Option<&str>) -> Vec<Issue> {
        vec![Issue::new(
            self.0,
            Severity::Minor,
            Category::Naming,
            "fixed",
            crate::model::Location::file_start(&sheet.path),
        )]
    }
}

fn parse(content: &str) -> StyleSheet {
    CssParser::new()
        .parse(Path::new("messy.css"), content)
        .unwrap()
}

#[test]
fn standard_set_has_seven_checkers() {
    let set = CheckerSet::standard(&AuditConfig::default());
    assert_eq!(set.len(), 7);
    assert!(!set.is_empty());

    let names: Vec<_> = set.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["naming", "color", "spacing", "animation", "responsive", "quality", "comments"]
    );
}

#[test]
fn running_twice_gives_identical_issues() {
    let sheet = parse(MESSY);
    let set = CheckerSet::standard(&AuditConfig::default());
    let first = set.run(&sheet, Some(MESSY));
    let second = set.run(&sheet, Some(MESSY));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn checker_order_does_not_change_the_issue_set() {
    let sheet = parse(MESSY);
    let config = AuditConfig::default();
    let forward = CheckerSet::standard(&config).run(&sheet, Some(MESSY));

    let reversed: Vec<Box<dyn Checker>> = vec![
        Box::new(CommentsChecker::new(&config.comments)),
        Box::new(QualityChecker::new(&config.quality)),
        Box::new(ResponsiveChecker::new(&config.responsive)),
        Box::new(AnimationChecker),
        Box::new(SpacingChecker),
        Box::new(ColorChecker::new(&config.color)),
        Box::new(NamingChecker::new(&config.naming)),
    ];
    let backward = CheckerSet::from_checkers(reversed).run(&sheet, Some(MESSY));

    let key = |i: &Issue| (i.rule.clone(), i.location.line, i.location.column, i.message.clone());
    let mut a: Vec<_> = forward.iter().map(key).collect();
    let mut b: Vec<_> = backward.iter().map(key).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[test]
fn every_issue_is_well_formed() {
    let sheet = parse(MESSY);
    let issues = CheckerSet::standard(&AuditConfig::default()).run(&sheet, Some(MESSY));
    for issue in &issues {
        assert!(Severity::ALL.contains(&issue.severity));
        assert!(Category::ALL.contains(&issue.category));
        assert!(issue.location.line >= 1, "{issue:?}");
        assert!(issue.location.column >= 1, "{issue:?}");
        assert!(!issue.rule.is_empty());
        assert!(!issue.message.is_empty());
        assert_eq!(issue.location.file, Path::new("messy.css"));
    }
}

#[test]
fn run_concatenates_in_checker_order() {
    let set = CheckerSet::from_checkers(vec![Box::new(Fixed("b")), Box::new(Fixed("a"))]);
    let issues = set.run(&StyleSheet::new("x.css"), None);
    let rules: Vec<_> = issues.iter().map(|i| i.rule.as_str()).collect();
    assert_eq!(rules, vec!["b", "a"]);
}

#[test]
fn declarations_yield_shared_rules_once() {
    let sheet = parse(".a, .b { color: var(--text-primary); margin: 0; }\n.c { order: 1; }\n");
    let names: Vec<_> = declarations(&sheet).iter().map(|(_, p)| p.name.as_str()).collect();
    assert_eq!(names, vec!["color", "margin", "order"]);
}
