//! Code highlighting service used for code blocks.
//!
//! The renderer only decides *which* language to request: a hint the
//! highlighter does not support becomes [`PLAINTEXT`]. Implementations
//! must return safe, escaped markup for any input, including unknown
//! languages.
//!
//! # Example
//!
//! ```
//! use chatmark_renderer::{Highlighter, escape_html};
//!
//! struct Upper;
//!
//! impl Highlighter for Upper {
//!     fn supports(&self, language: &str) -> bool {
//!         language == "shout"
//!     }
//!
//!     fn highlight(&self, code: &str, language: &str) -> String {
//!         if language == "shout" {
//!             escape_html(&code.to_uppercase())
//!         } else {
//!             escape_html(code)
//!         }
//!     }
//! }
//! ```

use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::escape::escape_html;

/// Language name used when no supported hint is available.
pub const PLAINTEXT: &str = "plaintext";

/// Default syntax definitions, loaded on first use.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Syntax highlighting service.
pub trait Highlighter: Send + Sync {
    /// Whether `language` (a name, alias, or file extension) is supported.
    fn supports(&self, language: &str) -> bool;

    /// Highlight `code` and return escaped markup.
    ///
    /// Must accept [`PLAINTEXT`] and unsupported languages by returning the
    /// escaped source.
    fn highlight(&self, code: &str, language: &str) -> String;
}

/// Highlighter backed by syntect's bundled syntax definitions.
///
/// Emits `<span>` elements whose classes are the scope names prefixed
/// with `hljs-`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
    fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
        if language.is_empty() || language.eq_ignore_ascii_case(PLAINTEXT) {
            return None;
        }
        SYNTAX_SET.find_syntax_by_token(language)
    }

    fn try_highlight(code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &SYNTAX_SET,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}

impl Highlighter for SyntectHighlighter {
    fn supports(&self, language: &str) -> bool {
        language.eq_ignore_ascii_case(PLAINTEXT) || Self::find_syntax(language).is_some()
    }

    fn highlight(&self, code: &str, language: &str) -> String {
        let Some(syntax) = Self::find_syntax(language) else {
            return escape_html(code);
        };
        match Self::try_highlight(code, syntax) {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!(language, error = %e, "Highlighting failed, using plain text");
                escape_html(code)
            }
        }
    }
}

/// Highlighter that never highlights: every language renders as escaped
/// plain text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn supports(&self, _language: &str) -> bool {
        false
    }

    fn highlight(&self, code: &str, _language: &str) -> String {
        escape_html(code)
    }
}

/// Pick the language to request from `highlighter` for a code block hint.
pub(crate) fn resolve_language<'a>(highlighter: &dyn Highlighter, hint: Option<&'a str>) -> &'a str {
    match hint {
        Some(lang) if !lang.is_empty() && highlighter.supports(lang) => lang,
        _ => PLAINTEXT,
    }
}
