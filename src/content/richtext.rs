//! Rich text rendering helpers
//!
//! Section content is either HTML from the rich-text editor or legacy plain
//! text using a leading bullet marker convention. The latter is converted to
//! an HTML unordered list at render time; HTML passes through untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::BULLET_MARKERS;

/// Empty editor paragraphs left at the end of a payload
static TRAILING_EMPTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<p><br></p>|<p></p>)+$").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// Convert stored section content to display HTML.
///
/// HTML content passes through as-is. Plain text is split into lines:
/// bullet-marked lines are grouped into `<ul>` lists, other non-empty lines
/// become paragraphs.
pub fn content_to_html(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    if content.contains('<') {
        return content.to_string();
    }

    let mut html = String::new();
    let mut in_list = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(item) = strip_bullet(trimmed) {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str(&format!("<li>{item}</li>"));
        } else {
            if in_list {
                html.push_str("</ul>");
                in_list = false;
            }
            html.push_str(&format!("<p>{trimmed}</p>"));
        }
    }
    if in_list {
        html.push_str("</ul>");
    }
    html
}

fn strip_bullet(line: &str) -> Option<&str> {
    let marker = line.chars().next()?;
    if BULLET_MARKERS.contains(&marker) {
        Some(line[marker.len_utf8()..].trim_start())
    } else {
        None
    }
}

/// Strip empty editor paragraphs trailing an HTML payload
pub fn clean_html(html: &str) -> String {
    let trimmed = html.trim();
    if trimmed.is_empty() || trimmed == "<p><br></p>" {
        return String::new();
    }
    TRAILING_EMPTY.replace(trimmed, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_lines_become_list() {
        assert_eq!(
            content_to_html("\u{2022} a\n\u{2022} b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_dash_and_star_markers() {
        assert_eq!(content_to_html("- one\n* two"), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_mixed_text_and_bullets() {
        assert_eq!(
            content_to_html("After this lesson you can:\n\u{2022} explain\n\u{2022} compare\ndone"),
            "<p>After this lesson you can:</p><ul><li>explain</li><li>compare</li></ul><p>done</p>"
        );
    }

    #[test]
    fn test_html_passes_through() {
        assert_eq!(content_to_html("<p>already html</p>"), "<p>already html</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(content_to_html(""), "");
    }

    #[test]
    fn test_clean_html_strips_trailing_empties() {
        assert_eq!(clean_html("<p>x</p><p><br></p><p></p>"), "<p>x</p>");
        assert_eq!(clean_html("<p><br></p>"), "");
        assert_eq!(clean_html(""), "");
    }
}
