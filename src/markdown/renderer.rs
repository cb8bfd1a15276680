//! Markdown rendering with a fixed security-conscious profile.

use anyhow::{Context, Result};
use std::path::Path;

use super::blocks::{self, Block};
use super::inline;

/// Rendering profile for the restricted dialect.
///
/// Models the configuration surface of the renderer. There is exactly one
/// profile, [`PROFILE`], baked in at compile time; callers cannot vary it,
/// which rules out configuration drift between call sites.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Pass literal HTML through instead of entity-escaping it.
    pub raw_html: bool,
    /// Turn bare `http(s)://` URLs into anchor elements.
    pub autolink: bool,
    /// Recognize triple-backtick code fences.
    pub fenced_code: bool,
    /// Output level every recognized heading is normalized to.
    pub heading_level: u8,
}

/// The fixed profile: raw HTML suppressed, autolinking and code fences
/// enabled, all headings rendered at level 2.
pub const PROFILE: Profile = Profile {
    raw_html: false,
    autolink: true,
    fenced_code: true,
    heading_level: 2,
};

/// Renders post markdown to HTML with the fixed [`PROFILE`].
///
/// The dialect is deliberately small: setext (`=`) and ATX (`#`) headings
/// normalized to `<h2>`, `**bold**`, bare-URL autolinks, and fenced code
/// blocks with an optional `language-<tag>` class. Everything else is
/// entity-escaped paragraph text, so untrusted input can never inject
/// live markup.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a renderer with the fixed profile.
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to an HTML string.
    ///
    /// Total over all text input: malformed markdown degrades to escaped
    /// literal paragraphs rather than failing. Each block's HTML ends
    /// with a newline; headings are additionally followed by a blank
    /// line when another block follows.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render(&self, content: &str) -> String {
        let blocks = blocks::scan(content);
        let mut html = String::with_capacity(content.len() + content.len() / 4);
        let last = blocks.len().saturating_sub(1);

        for (idx, block) in blocks.iter().enumerate() {
            self.render_block(block, &mut html);
            if block.blank_line_after() && idx < last {
                html.push('\n');
            }
        }

        html
    }

    fn render_block(&self, block: &Block<'_>, out: &mut String) {
        match block {
            Block::Heading(text) => {
                out.push_str(&format!("<h{}>", PROFILE.heading_level));
                inline::render_into(text, out);
                out.push_str(&format!("</h{}>\n", PROFILE.heading_level));
            }
            Block::Code { lang, lines } => {
                out.push_str("<pre><code");
                if let Some(tag) = lang {
                    out.push_str(" class=\"language-");
                    inline::escape_into(tag, out);
                    out.push('"');
                }
                out.push('>');
                // Fence content is opaque text: escaped exactly once
                // relative to its literal form, never inline-rendered.
                for line in lines {
                    inline::escape_into(line, out);
                    out.push('\n');
                }
                out.push_str("</code></pre>\n");
            }
            Block::Paragraph(lines) => {
                out.push_str("<p>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    inline::render_into(line, out);
                }
                out.push_str("</p>\n");
            }
        }
    }

    /// Renders the markdown file at the given path.
    ///
    /// Convenience method that reads the file and renders its content.
    /// Only the read can fail; rendering itself has no error channel.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read markdown file")?;
        Ok(self.render(&content))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders markdown to HTML with the fixed profile.
///
/// Free-function convenience over [`MarkdownRenderer`].
pub fn markdown_to_html(content: &str) -> String {
    MarkdownRenderer::new().render(content)
}
