//! HTML escaping for text leaves and attribute values.

/// Escape HTML special characters.
///
/// Safe for both element content and double- or single-quoted attribute
/// values. `&` is handled per character, so already-escaped input is
/// escaped again rather than passed through.
///
/// # Examples
///
/// ```
/// use chatmark_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    push_escaped(&mut result, s);
    result
}

/// Append `s` to `out` with HTML special characters escaped.
pub(crate) fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_reserved_characters() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn test_escape_html_no_double_escape_of_replacements() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("héllo 😀"), "héllo 😀");
    }

    #[test]
    fn test_push_escaped_appends() {
        let mut out = String::from("<p>");
        push_escaped(&mut out, "1 > 0");
        assert_eq!(out, "<p>1 &gt; 0");
    }
}
