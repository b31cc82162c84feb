//! Style-sheet parsing into the intermediate model.
//!
//! The audit engine only depends on [`StyleSheetParser`]. [`CssParser`] is a
//! lightweight structural parser: it recovers rules, declarations, custom properties,
//! `@media` blocks and `@keyframes` names with their positions, and leaves grammar-level
//! validation to dedicated tools.

mod selector;
mod source;

pub use selector::{
    collapse_whitespace, compounds, resolve_nested, split_selector_list, strip_pseudo,
    subject_class, subject_compound,
};
pub use source::{Comment, LineIndex, extract_comments, strip_comments, top_level_blocks};

use std::path::{Path, PathBuf};

use crate::checker::lexical;
use crate::checker::tables::{UTILITY_NAMES, UTILITY_PREFIXES};
use crate::error::{Result, StyleAuditError};
use crate::model::{
    ClassKind, CssAnimation, CssClass, CssProperty, CssSelector, CssVariable, Location,
    MediaQuery, StyleSheet, VariableCategory,
};

use source::{Delimiter, find_delimiter, matching_brace, skip_whitespace};

/// Turns raw style-sheet text into a [`StyleSheet`].
pub trait StyleSheetParser: Send + Sync {
    /// Parse one file.
    ///
    /// # Errors
    /// Returns [`StyleAuditError::Parse`] when the text is structurally broken
    /// (unbalanced braces, unterminated comments).
    fn parse(&self, path: &Path, content: &str) -> Result<StyleSheet>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CssParser;

impl CssParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StyleSheetParser for CssParser {
    fn parse(&self, path: &Path, content: &str) -> Result<StyleSheet> {
        let stripped = strip_comments(content).map_err(|line| StyleAuditError::Parse {
            path: path.to_path_buf(),
            line,
            message: "unterminated comment".to_string(),
        })?;

        let mut builder = SheetBuilder {
            path: path.to_path_buf(),
            text: &stripped,
            lines: LineIndex::new(content),
            sheet: StyleSheet::new(path),
        };
        builder.parse_body(0, stripped.len(), &Context::default())?;

        let mut sheet = builder.sheet;
        sheet.classes.sort_by_key(|c| (c.location.line, c.location.column));
        sheet.selectors.sort_by_key(|s| (s.location.line, s.location.column));
        sheet.variables.sort_by_key(|v| (v.location.line, v.location.column));
        Ok(sheet)
    }
}

/// Enclosing rule state while walking nested blocks.
#[derive(Debug, Clone, Default)]
struct Context {
    media: Option<String>,
    selectors: Vec<String>,
}

impl Context {
    fn scope(&self) -> String {
        let selectors = self.selectors.join(", ");
        match &self.media {
            Some(media) => format!("@media {media} {selectors}"),
            None => selectors,
        }
    }
}

struct SheetBuilder<'a> {
    path: PathBuf,
    text: &'a str,
    lines: LineIndex<'a>,
    sheet: StyleSheet,
}

impl SheetBuilder<'_> {
    fn location(&self, offset: usize) -> Location {
        let (line, column) = self.lines.position(offset);
        Location::new(&self.path, line, column)
    }

    fn parse_error(&self, offset: usize, message: &str) -> StyleAuditError {
        StyleAuditError::Parse {
            path: self.path.clone(),
            line: self.lines.position(offset).0,
            message: message.to_string(),
        }
    }

    /// Walk `[start, end)` and return the declarations found directly in it.
    fn parse_body(
        &mut self,
        start: usize,
        end: usize,
        ctx: &Context,
    ) -> Result<Vec<CssProperty>> {
        let bytes = self.text.as_bytes();
        let mut declarations = Vec::new();
        let mut pos = start;

        while pos < end {
            let (stop, delimiter) = find_delimiter(bytes, pos, end);
            match delimiter {
                Delimiter::OpenBrace => {
                    let close = matching_brace(bytes, stop, end)
                        .ok_or_else(|| self.parse_error(stop, "unclosed '{'"))?;
                    let prelude_start = skip_whitespace(bytes, pos, stop);
                    self.parse_block(prelude_start, stop, close, ctx)?;
                    pos = close + 1;
                }
                Delimiter::CloseBrace => return Err(self.parse_error(stop, "unexpected '}'")),
                Delimiter::Semicolon | Delimiter::End => {
                    if !ctx.selectors.is_empty()
                        && let Some(decl) = self.parse_declaration(pos, stop, ctx)
                    {
                        declarations.push(decl);
                    }
                    pos = stop + 1;
                }
            }
        }
        Ok(declarations)
    }

    fn parse_block(
        &mut self,
        prelude_start: usize,
        open: usize,
        close: usize,
        ctx: &Context,
    ) -> Result<()> {
        let text = self.text;
        let prelude = text[prelude_start..open].trim_end();
        if prelude.starts_with('@') {
            return self.parse_at_rule(prelude_start, open, close, ctx);
        }

        let selectors: Vec<(usize, String)> = split_selector_list(prelude)
            .into_iter()
            .flat_map(|(offset, text)| {
                resolve_nested(&ctx.selectors, &text)
                    .into_iter()
                    .map(move |resolved| (prelude_start + offset, resolved))
            })
            .collect();

        let child = Context {
            media: ctx.media.clone(),
            selectors: selectors.iter().map(|(_, s)| s.clone()).collect(),
        };
        let declarations = self.parse_body(open + 1, close, &child)?;
        self.record_rule(&selectors, &declarations, ctx);
        Ok(())
    }

    fn parse_at_rule(
        &mut self,
        prelude_start: usize,
        open: usize,
        close: usize,
        ctx: &Context,
    ) -> Result<()> {
        let text = self.text;
        let prelude = text[prelude_start..open].trim();
        let keyword_end = prelude
            .find(|c: char| c.is_whitespace() || c == '(')
            .unwrap_or(prelude.len());
        let keyword = prelude[..keyword_end].to_ascii_lowercase();
        let rest = collapse_whitespace(&prelude[keyword_end..]);

        match keyword.as_str() {
            "@media" => {
                self.sheet.media_queries.push(MediaQuery {
                    query: rest.clone(),
                    content: text[open + 1..close].trim().to_string(),
                    location: self.location(prelude_start),
                });
                let media = match &ctx.media {
                    Some(outer) => format!("{outer} and {rest}"),
                    None => rest,
                };
                let child = Context {
                    media: Some(media),
                    selectors: ctx.selectors.clone(),
                };
                let declarations = self.parse_body(open + 1, close, &child)?;
                self.record_nested(prelude_start, &declarations, &child);
            }
            k if k.ends_with("keyframes") => {
                self.sheet.animations.push(CssAnimation {
                    name: rest.trim_matches(|c| c == '"' || c == '\'').to_string(),
                    location: self.location(prelude_start),
                });
            }
            "@font-face" | "@page" | "@counter-style" | "@property" | "@font-feature-values" => {}
            _ => {
                let declarations = self.parse_body(open + 1, close, ctx)?;
                self.record_nested(prelude_start, &declarations, ctx);
            }
        }
        Ok(())
    }

    /// Declarations of an at-rule nested in a rule (`.card { @media ... { } }`) belong
    /// to the enclosing selectors, located at the at-rule.
    fn record_nested(&mut self, at_rule: usize, declarations: &[CssProperty], ctx: &Context) {
        if ctx.selectors.is_empty() {
            return;
        }
        let selectors: Vec<(usize, String)> = ctx
            .selectors
            .iter()
            .map(|selector| (at_rule, selector.clone()))
            .collect();
        self.record_rule(&selectors, declarations, ctx);
    }

    fn parse_declaration(
        &mut self,
        start: usize,
        stop: usize,
        ctx: &Context,
    ) -> Option<CssProperty> {
        let text = self.text;
        let raw = &text[start..stop];
        let colon = raw.find(':')?;
        let name = raw[..colon].trim();
        let value = raw[colon + 1..].trim();
        if name.is_empty() || name.contains(char::is_whitespace) || value.is_empty() {
            return None;
        }

        let name_offset = start + (raw.len() - raw.trim_start().len());
        let location = self.location(name_offset);

        if name.starts_with("--") {
            self.sheet.variables.push(CssVariable {
                name: name.to_string(),
                value: value.to_string(),
                category: infer_category(name, value),
                scope: ctx.scope(),
                location,
            });
            return None;
        }

        Some(CssProperty {
            name: name.to_ascii_lowercase(),
            value: value.to_string(),
            location,
        })
    }

    fn record_rule(
        &mut self,
        selectors: &[(usize, String)],
        declarations: &[CssProperty],
        ctx: &Context,
    ) {
        if declarations.is_empty() {
            return;
        }
        for (offset, text) in selectors {
            let location = self.location(*offset);
            self.sheet.selectors.push(CssSelector {
                text: text.clone(),
                properties: declarations.to_vec(),
                media: ctx.media.clone(),
                location: location.clone(),
            });

            if let Some(name) = subject_class(text) {
                self.sheet.classes.push(CssClass {
                    kind: classify_class(&name, text, declarations.len()),
                    name,
                    selector: text.clone(),
                    properties: declarations.to_vec(),
                    media: ctx.media.clone(),
                    location,
                });
            }
        }
    }
}

/// Infer a custom property's semantic category from its value, then its name.
#[must_use]
pub fn infer_category(name: &str, value: &str) -> VariableCategory {
    let lower = name.to_ascii_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if lexical::is_color_value(value) {
        VariableCategory::Color
    } else if has(&["radius", "rounded"]) {
        VariableCategory::Radius
    } else if lower.starts_with("--ease")
        || has(&["duration", "transition", "easing", "delay", "speed"])
        || !lexical::hardcoded_times(value).is_empty()
    {
        VariableCategory::Duration
    } else if has(&[
        "font",
        "line-height",
        "leading",
        "text-size",
        "letter-spacing",
        "tracking",
    ]) {
        VariableCategory::Font
    } else if has(&["space", "spacing", "gap", "gutter", "margin", "padding"]) {
        VariableCategory::Spacing
    } else if has(&["color", "colour"]) {
        VariableCategory::Color
    } else {
        VariableCategory::Other
    }
}

/// Decide whether a class is a single-purpose utility or a component.
#[must_use]
pub fn classify_class(name: &str, selector: &str, declaration_count: usize) -> ClassKind {
    let lower = name.to_ascii_lowercase();
    let by_name = UTILITY_NAMES.contains(&lower.as_str())
        || UTILITY_PREFIXES.iter().any(|p| lower.starts_with(p));
    let bare = selector.trim() == format!(".{name}");

    if by_name || (bare && declaration_count <= 3) {
        ClassKind::Utility
    } else {
        ClassKind::Component
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
