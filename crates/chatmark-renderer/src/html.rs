//! Element writers for rendered chat markup.
//!
//! Every function appends to an output buffer. Arguments named `*_html`
//! are already-rendered markup; every other string is escaped here.

use crate::escape::push_escaped;

/// Inline styling elements that wrap rendered children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InlineStyle {
    Emphasis,
    Strong,
    Underline,
    Strikethrough,
}

impl InlineStyle {
    fn tag(self) -> &'static str {
        match self {
            Self::Emphasis => "em",
            Self::Strong => "strong",
            Self::Underline => "u",
            Self::Strikethrough => "s",
        }
    }
}

pub(crate) fn inline_start(style: InlineStyle, out: &mut String) {
    out.push('<');
    out.push_str(style.tag());
    out.push('>');
}

pub(crate) fn inline_end(style: InlineStyle, out: &mut String) {
    out.push_str("</");
    out.push_str(style.tag());
    out.push('>');
}

/// Open a link. `new_tab` adds `target="_blank" rel="noreferrer"`.
pub(crate) fn link_start(href: &str, new_tab: bool, out: &mut String) {
    out.push_str(r#"<a href=""#);
    push_escaped(out, href);
    if new_tab {
        out.push_str(r#"" target="_blank" rel="noreferrer">"#);
    } else {
        out.push_str(r#"">"#);
    }
}

pub(crate) fn link_end(out: &mut String) {
    out.push_str("</a>");
}

pub(crate) fn blockquote_start(out: &mut String) {
    out.push_str("<blockquote><span></span><div>");
}

pub(crate) fn blockquote_end(out: &mut String) {
    out.push_str("</div></blockquote>");
}

pub(crate) fn line_break(out: &mut String) {
    out.push_str("<br/>");
}

/// Mention pill around plain `text`.
pub(crate) fn mention(text: &str, out: &mut String) {
    out.push_str("<span mention>");
    push_escaped(out, text);
    out.push_str("</span>");
}

/// Highlighted code block. `language` must be a supported name or
/// `plaintext`.
pub(crate) fn code_block(language: &str, highlighted_html: &str, out: &mut String) {
    out.push_str(r#"<pre code><code class="hljs language-"#);
    push_escaped(out, language);
    out.push_str(r#"">"#);
    out.push_str(highlighted_html);
    out.push_str("</code></pre>");
}

pub(crate) fn inline_code(code: &str, out: &mut String) {
    out.push_str("<code inline>");
    push_escaped(out, code);
    out.push_str("</code>");
}

pub(crate) fn spoiler_start(out: &mut String) {
    out.push_str(r#"<span spoiler onclick="this.classList.add('revealed')">"#);
}

pub(crate) fn spoiler_end(out: &mut String) {
    out.push_str("</span>");
}

pub(crate) fn emoji(src: &str, alt: &str, out: &mut String) {
    out.push_str(r#"<img emoji src=""#);
    push_escaped(out, src);
    out.push_str(r#"" alt=""#);
    push_escaped(out, alt);
    out.push_str(r#"" draggable="false">"#);
}

/// Formatted timestamp, styled like an already-revealed spoiler.
pub(crate) fn timestamp(text: &str, out: &mut String) {
    out.push_str(r#"<span spoiler class="revealed">"#);
    push_escaped(out, text);
    out.push_str("</span>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut String)) -> String {
        let mut out = String::new();
        f(&mut out);
        out
    }

    #[test]
    fn test_inline_styles() {
        let out = written(|out| {
            inline_start(InlineStyle::Strikethrough, out);
            out.push('x');
            inline_end(InlineStyle::Strikethrough, out);
        });
        assert_eq!(out, "<s>x</s>");
        assert_eq!(InlineStyle::Underline.tag(), "u");
    }

    #[test]
    fn test_link_escapes_href() {
        let out = written(|out| link_start(r#"https://x.y/?a=1&b="2""#, false, out));
        assert_eq!(out, r#"<a href="https://x.y/?a=1&amp;b=&quot;2&quot;">"#);
    }

    #[test]
    fn test_link_new_tab() {
        let out = written(|out| link_start("https://x.y", true, out));
        assert_eq!(
            out,
            r#"<a href="https://x.y" target="_blank" rel="noreferrer">"#
        );
    }

    #[test]
    fn test_mention_escapes_name() {
        let out = written(|out| mention("@<b>ada</b>", out));
        assert_eq!(out, "<span mention>@&lt;b&gt;ada&lt;/b&gt;</span>");
    }

    #[test]
    fn test_code_block() {
        let out = written(|out| code_block("rust", "<span>fn</span>", out));
        assert_eq!(
            out,
            r#"<pre code><code class="hljs language-rust"><span>fn</span></code></pre>"#
        );
    }

    #[test]
    fn test_emoji_escapes_attributes() {
        let out = written(|out| emoji("https://cdn/1.png", r#":a"b:"#, out));
        assert_eq!(
            out,
            r#"<img emoji src="https://cdn/1.png" alt=":a&quot;b:" draggable="false">"#
        );
    }

    #[test]
    fn test_timestamp() {
        let out = written(|out| timestamp("1/1/1970, 12:00:00 AM", out));
        assert_eq!(
            out,
            r#"<span spoiler class="revealed">1/1/1970, 12:00:00 AM</span>"#
        );
    }
}
