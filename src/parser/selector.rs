//! Selector text utilities shared by the parser and the checkers.

/// Split a selector list on top-level commas.
///
/// Returns each selector with the byte offset of its first character inside `prelude`;
/// internal whitespace is collapsed to single spaces.
#[must_use]
pub fn split_selector_list(prelude: &str) -> Vec<(usize, String)> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in prelude.char_indices() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_part(prelude, start, idx, &mut parts);
                start = idx + 1;
            }
            _ => {}
        }
    }
    push_part(prelude, start, prelude.len(), &mut parts);
    parts
}

fn push_part(prelude: &str, start: usize, end: usize, parts: &mut Vec<(usize, String)>) {
    let raw = &prelude[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let text = collapse_whitespace(raw);
    if !text.is_empty() {
        parts.push((start + leading, text));
    }
}

#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve a nested selector against its parents (`&` substitution or descendant join).
#[must_use]
pub fn resolve_nested(parents: &[String], child: &str) -> Vec<String> {
    if parents.is_empty() {
        return vec![child.to_string()];
    }
    parents
        .iter()
        .map(|parent| {
            if child.contains('&') {
                child.replace('&', parent)
            } else {
                format!("{parent} {child}")
            }
        })
        .collect()
}

/// Split a selector into compound selectors at combinators (descendant, `>`, `+`, `~`).
#[must_use]
pub fn compounds(selector: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in selector.chars() {
        match ch {
            '(' | '[' => {
                depth += 1;
                current.push(ch);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if depth == 0 && (c.is_whitespace() || matches!(c, '>' | '+' | '~')) => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// The compound selector that is actually styled (the last one).
#[must_use]
pub fn subject_compound(selector: &str) -> Option<String> {
    compounds(selector).pop()
}

/// Name of the first class in the subject compound, outside functional pseudo-classes.
#[must_use]
pub fn subject_class(selector: &str) -> Option<String> {
    let subject = subject_compound(selector)?;
    let mut depth = 0usize;
    for (idx, ch) in subject.char_indices() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                let name: String = subject[idx + 1..]
                    .chars()
                    .take_while(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '\\'))
                    .collect();
                if !name.is_empty() {
                    return Some(name);
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove pseudo-classes and pseudo-elements (`:hover`, `::before`, `:not(.x)`).
#[must_use]
pub fn strip_pseudo(selector: &str) -> String {
    let mut out = String::with_capacity(selector.len());
    let mut chars = selector.chars().peekable();
    let mut bracket = 0usize;

    while let Some(ch) = chars.next() {
        match ch {
            '[' => {
                bracket += 1;
                out.push(ch);
            }
            ']' => {
                bracket = bracket.saturating_sub(1);
                out.push(ch);
            }
            ':' if bracket == 0 => skip_pseudo(&mut chars),
            c => out.push(c),
        }
    }
    collapse_whitespace(&out)
}

fn skip_pseudo(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    if chars.peek() == Some(&':') {
        chars.next();
    }
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            chars.next();
        } else {
            break;
        }
    }
    if chars.peek() == Some(&'(') {
        let mut depth = 0usize;
        for c in chars.by_ref() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
