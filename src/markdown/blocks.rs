//! Block scanner for the restricted post dialect.
//!
//! Splits a markdown document into headings, fenced code blocks, and
//! paragraphs. Inline rendering happens later; this module only decides
//! block boundaries and carries the verbatim source lines.

use super::renderer::PROFILE;

/// A block-level element in document order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    /// Setext (`=` underline) or ATX (`#`) heading text, level normalized
    /// by the rendering profile.
    Heading(&'a str),
    /// Fenced code block with optional language tag and verbatim content
    /// lines, inline rules suppressed.
    Code {
        lang: Option<&'a str>,
        lines: Vec<&'a str>,
    },
    /// Consecutive non-blank lines rendered inside a single `<p>`.
    Paragraph(Vec<&'a str>),
}

impl Block<'_> {
    /// Whether a blank line separates this block from the one after it.
    ///
    /// Headings are followed by a blank line; paragraphs and code blocks
    /// are not. The spacing is an explicit per-block-type attribute so
    /// the output stays byte-exact.
    pub(crate) fn blank_line_after(&self) -> bool {
        matches!(self, Block::Heading(_))
    }
}

/// Scans a markdown document into block-level elements.
///
/// Lines are split on `\n` only; carriage-return normalization is the
/// caller's concern. An unterminated code fence consumes the remainder
/// of the document as fence content.
pub(crate) fn scan(content: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_blank(line) {
            i += 1;
            continue;
        }

        if PROFILE.fenced_code && let Some(lang) = fence_open(line) {
            let mut body = Vec::new();
            i += 1;
            while i < lines.len() && !is_fence_close(lines[i]) {
                body.push(lines[i]);
                i += 1;
            }
            // Skip the closing fence when present; an unterminated
            // fence runs to end of document.
            if i < lines.len() {
                i += 1;
            }
            blocks.push(Block::Code { lang, lines: body });
            continue;
        }

        if let Some(text) = atx_heading(line) {
            blocks.push(Block::Heading(text));
            i += 1;
            continue;
        }

        if i + 1 < lines.len() && is_setext_underline(lines[i + 1]) {
            blocks.push(Block::Heading(line));
            i += 2;
            continue;
        }

        let mut para = vec![line];
        i += 1;
        while i < lines.len() {
            let next = lines[i];
            if is_blank(next) || fence_open(next).is_some() || atx_heading(next).is_some() {
                break;
            }
            // The next line starts a setext heading; close the paragraph
            // before its text line.
            if i + 1 < lines.len() && is_setext_underline(lines[i + 1]) {
                break;
            }
            para.push(next);
            i += 1;
        }
        blocks.push(Block::Paragraph(para));
    }

    blocks
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Matches a fence opener and extracts its language tag.
///
/// Returns `Some(Some(tag))` for a tagged fence, `Some(None)` for a bare
/// fence, and `None` when the line does not open a fence. A tag
/// containing backticks is not a valid fence opener.
fn fence_open(line: &str) -> Option<Option<&str>> {
    let rest = line.strip_prefix("```")?;
    let tag = rest.trim();

    if tag.contains('`') {
        return None;
    }

    if tag.is_empty() {
        Some(None)
    } else {
        Some(Some(tag))
    }
}

fn is_fence_close(line: &str) -> bool {
    line.trim() == "```"
}

/// Matches an ATX heading line and extracts its text.
///
/// Accepts one to six `#` characters followed by a space. The heading
/// level is discarded; the rendering profile normalizes every heading
/// to one output level.
fn atx_heading(line: &str) -> Option<&str> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let rest = &line[hashes..];
    rest.strip_prefix(' ').map(str::trim)
}

/// Whether a line is a setext heading underline (one or more `=`).
fn is_setext_underline(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b'=')
}
