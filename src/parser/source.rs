//! Byte-level helpers over style-sheet source text.

/// A comment found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Text between the delimiters, trimmed.
    pub text: String,
    /// 1-based line of the opening delimiter.
    pub line: usize,
    /// `/* */` rather than `//`.
    pub block: bool,
}

/// Byte ranges of every comment, with whether it is a block comment.
///
/// Block comments (`/* */`) are always comments. `//` starts a line comment only when
/// it is the first thing on the line, so `url(http://...)` survives.
fn comment_ranges(content: &str) -> Result<Vec<(usize, usize, bool)>, usize> {
    let bytes = content.as_bytes();
    let mut ranges = Vec::new();
    let mut i = 0;
    let mut quote: Option<u8> = None;
    let mut line_has_code = false;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q || b == b'\n' {
                quote = None;
            }
            i += 1;
            continue;
        }

        match b {
            b'"' | b'\'' => {
                quote = Some(b);
                line_has_code = true;
                i += 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let Some(end) = find_from(bytes, i + 2, b"*/") else {
                    return Err(line_of(bytes, i));
                };
                ranges.push((i, end + 2, true));
                i = end + 2;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') && !line_has_code => {
                let end = find_from(bytes, i, b"\n").unwrap_or(bytes.len());
                ranges.push((i, end, false));
                i = end;
            }
            b'\n' => {
                line_has_code = false;
                i += 1;
            }
            _ => {
                if !b.is_ascii_whitespace() {
                    line_has_code = true;
                }
                i += 1;
            }
        }
    }
    Ok(ranges)
}

/// Replace comments with spaces, keeping every byte offset and newline in place.
///
/// # Errors
/// Returns the 1-based line of an unterminated block comment.
pub fn strip_comments(content: &str) -> Result<String, usize> {
    let mut out = content.as_bytes().to_vec();
    for (start, end, _) in comment_ranges(content)? {
        blank(&mut out, start, end);
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Every comment in the text, in source order. Unterminated text yields no comments.
#[must_use]
pub fn extract_comments(content: &str) -> Vec<Comment> {
    let bytes = content.as_bytes();
    comment_ranges(content)
        .unwrap_or_default()
        .into_iter()
        .map(|(start, end, block)| {
            let inner = if block {
                &content[start + 2..end - 2]
            } else {
                &content[start + 2..end]
            };
            Comment {
                text: inner.trim().to_string(),
                line: line_of(bytes, start),
                block,
            }
        })
        .collect()
}

fn blank(out: &mut [u8], start: usize, end: usize) {
    let len = out.len();
    for byte in &mut out[start..end.min(len)] {
        if *byte != b'\n' {
            *byte = b' ';
        }
    }
}

fn find_from(bytes: &[u8], start: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(start..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + start)
}

fn line_of(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset.min(bytes.len())]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}

/// Maps byte offsets to 1-based line/column pairs.
pub struct LineIndex<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, starts }
    }

    /// Line and column (in characters) of a byte offset.
    #[must_use]
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line_idx = self.starts.partition_point(|s| *s <= offset).saturating_sub(1);
        let line_start = self.starts[line_idx];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(offset - line_start, |s| s.chars().count());
        (line_idx + 1, column + 1)
    }
}

/// What stopped a scan for the end of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    OpenBrace,
    CloseBrace,
    Semicolon,
    End,
}

/// Find the next `{`, `}` or `;` outside strings and parentheses in `bytes[start..end]`.
#[must_use]
pub fn find_delimiter(bytes: &[u8], start: usize, end: usize) -> (usize, Delimiter) {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = start;

    while i < end {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' | b'\'' => quote = Some(b),
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'{' if depth == 0 => return (i, Delimiter::OpenBrace),
            b'}' if depth == 0 => return (i, Delimiter::CloseBrace),
            b';' if depth == 0 => return (i, Delimiter::Semicolon),
            _ => {}
        }
        i += 1;
    }
    (end, Delimiter::End)
}

/// Offset of the `}` matching the `{` at `open`, searching no further than `end`.
#[must_use]
pub fn matching_brace(bytes: &[u8], open: usize, end: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;

    while i < end {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' | b'\'' => quote = Some(b),
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Number of `{` blocks at nesting depth zero in comment-free text.
#[must_use]
pub fn top_level_blocks(stripped: &str) -> usize {
    let bytes = stripped.as_bytes();
    let mut count = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        let (stop, delimiter) = find_delimiter(bytes, pos, bytes.len());
        match delimiter {
            Delimiter::OpenBrace => {
                count += 1;
                pos = matching_brace(bytes, stop, bytes.len()).map_or(bytes.len(), |c| c + 1);
            }
            Delimiter::End => break,
            Delimiter::CloseBrace | Delimiter::Semicolon => pos = stop + 1,
        }
    }
    count
}

/// Advance past ASCII whitespace.
#[must_use]
pub fn skip_whitespace(bytes: &[u8], mut pos: usize, end: usize) -> usize {
    while pos < end && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
