//! Markdown rendering for the restricted post dialect.
//!
//! This module implements the conversion contract directly rather than
//! delegating to a general-purpose markdown crate: the dialect is small
//! (headings normalized to level 2, bold, autolinks, fenced code) and
//! its security posture (all raw HTML entity-escaped) and byte-exact
//! spacing rules are easier to guarantee in a purpose-built renderer.

mod blocks;
mod inline;
mod renderer;

pub use inline::escape_html;
pub use renderer::{MarkdownRenderer, PROFILE, Profile, markdown_to_html};
