use super::*;

#[test]
fn strip_var_refs_removes_nested_fallbacks() {
    let stripped = strip_var_refs("1px solid var(--border, var(--fallback, #ccc))");
    assert_eq!(stripped.trim(), "1px solid");
}

#[test]
fn var_references_lists_names_in_order() {
    let refs = var_references("var(--space-sm) var( --space-md , 8px)");
    assert_eq!(refs, vec!["--space-sm".to_string(), "--space-md".to_string()]);
}

#[test]
fn pure_var_ref_ignores_important_and_whitespace() {
    assert!(is_pure_var_ref("var(--space-md)"));
    assert!(is_pure_var_ref("  var(--a) var(--b) !important"));
    assert!(!is_pure_var_ref("var(--a) 4px"));
    assert!(!is_pure_var_ref("16px"));
}

#[test]
fn hardcoded_lengths_skip_zero_and_var_refs() {
    assert_eq!(hardcoded_lengths("16px"), vec!["16px".to_string()]);
    assert!(hardcoded_lengths("0").is_empty());
    assert!(hardcoded_lengths("0px 0.0rem").is_empty());
    assert!(hardcoded_lengths("var(--space-md)").is_empty());
    assert!(hardcoded_lengths("calc(var(--space-md) * 2)").is_empty());
    assert_eq!(
        hardcoded_lengths("0 auto 1.5rem -8px"),
        vec!["1.5rem".to_string(), "-8px".to_string()]
    );
}

#[test]
fn hardcoded_lengths_ignore_hex_digits() {
    assert_eq!(
        hardcoded_lengths("1px solid #112233"),
        vec!["1px".to_string()]
    );
}

#[test]
fn hardcoded_numbers_include_unitless() {
    assert_eq!(hardcoded_numbers("1.5"), vec!["1.5".to_string()]);
    assert!(hardcoded_numbers("normal").is_empty());
}

#[test]
fn hardcoded_times_detects_ms_and_seconds() {
    assert_eq!(
        hardcoded_times("opacity 200ms ease, transform .3s"),
        vec!["200ms".to_string(), ".3s".to_string()]
    );
    assert!(hardcoded_times("opacity var(--duration-fast)").is_empty());
    assert!(hardcoded_times("none 0s").is_empty());
}

#[test]
fn hardcoded_easings_detects_keywords_and_functions() {
    assert_eq!(
        hardcoded_easings("all 0.2s ease-in-out"),
        vec!["ease-in-out".to_string()]
    );
    assert_eq!(
        hardcoded_easings("transform 1s cubic-bezier(0.4, 0, 0.2, 1)"),
        vec!["cubic-bezier".to_string()]
    );
    assert!(hardcoded_easings("all var(--duration) var(--ease-standard)").is_empty());
}

#[test]
fn color_literals_finds_hex_functions_and_names() {
    assert_eq!(color_literals("#fff"), vec!["#fff".to_string()]);
    assert_eq!(color_literals("rgba(0, 0, 0, 0.5)"), vec!["rgba".to_string()]);
    assert_eq!(color_literals("1px solid red"), vec!["red".to_string()]);
}

#[test]
fn color_literals_allows_keywords_and_references() {
    assert!(color_literals("transparent").is_empty());
    assert!(color_literals("currentColor").is_empty());
    assert!(color_literals("inherit").is_empty());
    assert!(color_literals("var(--text-primary, #000)").is_empty());
    assert!(color_literals("url(images/red.png) no-repeat").is_empty());
}

#[test]
fn is_color_value_requires_whole_value() {
    assert!(is_color_value("#1e293b"));
    assert!(is_color_value("rgb(10, 20, 30)"));
    assert!(is_color_value("White"));
    assert!(!is_color_value("1px solid #ccc"));
    assert!(!is_color_value("var(--bg-primary)"));
}

#[test]
fn canonical_names() {
    assert!(is_canonical_ident("card-header"));
    assert!(!is_canonical_ident("cardHeader"));
    assert!(!is_canonical_ident("card--header"));
    assert!(is_canonical_class("card__title--active"));
    assert!(!is_canonical_class("Card_title"));
    assert!(is_canonical_variable("--text-primary"));
    assert!(!is_canonical_variable("--textPrimary"));
    assert!(!is_canonical_variable("text-primary"));
}

#[test]
fn to_canonical_converts_camel_and_snake_case() {
    assert_eq!(to_canonical("primaryBlue"), "primary-blue");
    assert_eq!(to_canonical("Btn_Primary"), "btn-primary");
    assert_eq!(to_canonical("--mainColor"), "main-color");
}

#[test]
fn property_lookup_is_case_insensitive() {
    assert!(property_in("MARGIN-top", &["margin-top"]));
    assert!(!property_in("margin", &["padding"]));
}
