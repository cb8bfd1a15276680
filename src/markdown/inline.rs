//! Inline rendering: entity escaping, bold emphasis, and autolinks.

use super::renderer::PROFILE;

/// Renders the inline content of a heading or paragraph line.
///
/// Applies bold emphasis (`**text**` becomes `<strong>`), autolinking of
/// bare URLs, and HTML entity escaping of everything else. An opening
/// `**` without a matching closer stays literal text.
///
/// # Arguments
///
/// * `text`: Raw markdown text of a single line
/// * `out`: Output buffer the rendered HTML is appended to
pub(crate) fn render_into(text: &str, out: &mut String) {
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        render_text(&rest[..open], out);
        out.push_str("<strong>");
        render_text(&after_open[..close], out);
        out.push_str("</strong>");

        rest = &after_open[close + 2..];
    }

    render_text(rest, out);
}

/// Renders a text run with autolinking and escaping, no emphasis.
fn render_text(text: &str, out: &mut String) {
    if !PROFILE.autolink {
        push_text(text, out);
        return;
    }

    let mut rest = text;

    while let Some((start, end)) = find_url(rest) {
        push_text(&rest[..start], out);

        let url = &rest[start..end];
        out.push_str("<a href=\"");
        escape_into(url, out);
        out.push_str("\">");
        escape_into(url, out);
        out.push_str("</a>");

        rest = &rest[end..];
    }

    push_text(rest, out);
}

/// Finds the byte range of the first bare URL in a text run.
///
/// A URL is an `http://` or `https://` scheme followed by at least one
/// character, extending until whitespace or an angle bracket.
fn find_url(text: &str) -> Option<(usize, usize)> {
    let mut search = 0;

    while let Some(pos) = text[search..].find("http") {
        let start = search + pos;
        let candidate = &text[start..];

        let scheme_len = if candidate.starts_with("https://") {
            8
        } else if candidate.starts_with("http://") {
            7
        } else {
            search = start + 4;
            continue;
        };

        let len = candidate
            .find(|c: char| c.is_whitespace() || c == '<' || c == '>')
            .unwrap_or(candidate.len());

        if len > scheme_len {
            return Some((start, start + len));
        }

        search = start + 4;
    }

    None
}

/// Appends plain text, escaped unless the profile allows raw HTML.
fn push_text(text: &str, out: &mut String) {
    if PROFILE.raw_html {
        out.push_str(text);
    } else {
        escape_into(text, out);
    }
}

/// Appends `text` with HTML special characters replaced by entities.
///
/// Escapes `&`, `<`, `>`, and `"`. Apostrophes pass through unchanged.
/// Each application adds exactly one layer of escaping, so text that is
/// already entity-escaped in the source comes out double-escaped.
pub(crate) fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Escapes HTML special characters in `text`.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string with `&`, `<`, `>`, and `"` entity-escaped
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let mut out = String::new();
        render_into(text, &mut out);
        out
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render("hello world"), "hello world");
    }

    #[test]
    fn test_bold_emphasis() {
        assert_eq!(render("**bold**"), "<strong>bold</strong>");
        assert_eq!(render("a **b** c"), "a <strong>b</strong> c");
    }

    #[test]
    fn test_unmatched_bold_marker_stays_literal() {
        assert_eq!(render("**not closed"), "**not closed");
        assert_eq!(render("stray ** marker"), "stray ** marker");
    }

    #[test]
    fn test_html_tags_are_escaped() {
        assert_eq!(
            render("<script>alert('x')</script>"),
            "&lt;script&gt;alert('x')&lt;/script&gt;"
        );
    }

    #[test]
    fn test_quotes_are_escaped_apostrophes_are_not() {
        assert_eq!(render("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(render("it's fine"), "it's fine");
    }

    #[test]
    fn test_autolink_http() {
        assert_eq!(
            render("see http://abcd.com now"),
            "see <a href=\"http://abcd.com\">http://abcd.com</a> now"
        );
    }

    #[test]
    fn test_autolink_https_at_end_of_line() {
        assert_eq!(
            render("https://example.com/path?q=1"),
            "<a href=\"https://example.com/path?q=1\">https://example.com/path?q=1</a>"
        );
    }

    #[test]
    fn test_autolink_stops_at_angle_bracket() {
        assert_eq!(
            render("http://a.com<b>"),
            "<a href=\"http://a.com\">http://a.com</a>&lt;b&gt;"
        );
    }

    #[test]
    fn test_bare_scheme_is_not_a_link() {
        assert_eq!(render("http:// is a scheme"), "http:// is a scheme");
        assert_eq!(render("an http server"), "an http server");
    }

    #[test]
    fn test_autolink_inside_bold() {
        assert_eq!(
            render("**http://a.com**"),
            "<strong><a href=\"http://a.com\">http://a.com</a></strong>"
        );
    }

    #[test]
    fn test_url_with_ampersand_is_escaped_in_href_and_text() {
        assert_eq!(
            render("http://a.com?x=1&y=2"),
            "<a href=\"http://a.com?x=1&amp;y=2\">http://a.com?x=1&amp;y=2</a>"
        );
    }

    #[test]
    fn test_escape_html_adds_one_layer_per_application() {
        // Arrange
        let once = escape_html("<div>");

        // Act
        let twice = escape_html(&once);

        // Assert
        assert_eq!(once, "&lt;div&gt;");
        assert_eq!(twice, "&amp;lt;div&amp;gt;");
    }
}
