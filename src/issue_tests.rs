use super::*;

#[test]
fn severity_rank_follows_declaration_order() {
    assert!(Severity::Critical < Severity::Moderate);
    assert!(Severity::Moderate < Severity::Minor);
}

#[test]
fn severity_parses_case_insensitively() {
    assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
    assert_eq!("minor".parse::<Severity>(), Ok(Severity::Minor));
    assert!("fatal".parse::<Severity>().is_err());
}

#[test]
fn category_labels_are_kebab_case() {
    assert_eq!(Category::BestPractice.label(), "best-practice");
    assert_eq!(
        serde_json::to_string(&Category::BestPractice).unwrap(),
        "\"best-practice\""
    );
    assert_eq!(Category::ALL.len(), 7);
}

#[test]
fn builder_sets_suggestion_and_example() {
    let issue = Issue::new(
        "spacing/hardcoded-spacing",
        Severity::Moderate,
        Category::BestPractice,
        "Hardcoded spacing",
        Location::new("a.css", 3, 5),
    )
    .with_suggestion("Use a spacing variable")
    .with_example("margin: 16px;", "margin: var(--space-md);");

    assert_eq!(issue.suggestion, "Use a spacing variable");
    let example = issue.code_example.unwrap();
    assert_eq!(example.after, "margin: var(--space-md);");
}

#[test]
fn serialization_skips_missing_example() {
    let issue = Issue::new(
        "quality/id-selector",
        Severity::Moderate,
        Category::BestPractice,
        "ID selector",
        Location::new("a.css", 1, 1),
    );
    let json = serde_json::to_string(&issue).unwrap();
    assert!(!json.contains("code_example"));
    assert!(json.contains("\"severity\":\"moderate\""));
}

#[test]
fn file_key_normalizes_separators() {
    let issue = Issue::new(
        "r",
        Severity::Minor,
        Category::Naming,
        "m",
        Location::new("styles\\base.css", 1, 1),
    );
    assert_eq!(issue.file_key(), "styles/base.css");
}
