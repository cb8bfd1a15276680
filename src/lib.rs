//! Restricted Markdown-to-HTML rendering for discussion posts.

mod config;
mod markdown;

pub use config::Config;
pub use markdown::{MarkdownRenderer, PROFILE, Profile, escape_html, markdown_to_html};
