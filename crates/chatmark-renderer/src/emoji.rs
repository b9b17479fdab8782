//! Emoji image URL derivation.
//!
//! Custom emoji are served from the chat CDN by id; unicode emoji map to
//! Twemoji SVG assets named after their code points.

use std::fmt::Write;

/// Default base URL for custom (id-addressed) emoji.
pub const DEFAULT_CUSTOM_EMOJI_BASE: &str = "https://cdn.discordapp.com/emojis/";

/// Default base URL for unicode emoji SVGs.
pub const DEFAULT_UNICODE_EMOJI_BASE: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/";

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// An emoji reference taken from an emoji node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Emoji {
    /// Custom emoji id. `None` or empty for unicode emoji.
    pub id: Option<String>,
    /// Emoji name: the custom emoji's name, or the unicode sequence itself.
    pub name: String,
    /// Whether a custom emoji is animated.
    pub animated: bool,
}

impl Emoji {
    /// Create a custom emoji reference.
    #[must_use]
    pub fn custom(id: impl Into<String>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            animated,
        }
    }

    /// Create a unicode emoji reference.
    #[must_use]
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            animated: false,
        }
    }

    /// Alt text for the emoji image: `:name:` for custom emoji, the
    /// sequence itself for unicode emoji.
    #[must_use]
    pub fn alt_text(&self) -> String {
        if self.custom_id().is_some() {
            format!(":{}:", self.name)
        } else {
            self.name.clone()
        }
    }

    /// The custom emoji id, if this is a custom emoji.
    fn custom_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Base URLs used to build emoji image URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiUrls {
    custom_base: String,
    unicode_base: String,
}

impl Default for EmojiUrls {
    fn default() -> Self {
        Self {
            custom_base: DEFAULT_CUSTOM_EMOJI_BASE.to_owned(),
            unicode_base: DEFAULT_UNICODE_EMOJI_BASE.to_owned(),
        }
    }
}

impl EmojiUrls {
    /// Create URL settings with custom base URLs.
    ///
    /// Both bases are used as plain prefixes and should end with `/`.
    #[must_use]
    pub fn new(custom_base: impl Into<String>, unicode_base: impl Into<String>) -> Self {
        Self {
            custom_base: custom_base.into(),
            unicode_base: unicode_base.into(),
        }
    }

    /// Derive the image URL for an emoji.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatmark_renderer::{Emoji, EmojiUrls};
    ///
    /// let urls = EmojiUrls::default();
    /// assert!(urls.url(&Emoji::custom("123", "party", true)).ends_with("/emojis/123.gif"));
    /// assert!(urls.url(&Emoji::unicode("😀")).ends_with("/svg/1f600.svg"));
    /// ```
    #[must_use]
    pub fn url(&self, emoji: &Emoji) -> String {
        match emoji.custom_id() {
            Some(id) => {
                let ext = if emoji.animated { "gif" } else { "png" };
                format!("{}{id}.{ext}", self.custom_base)
            }
            None => format!("{}{}.svg", self.unicode_base, code_points(&emoji.name)),
        }
    }
}

/// Derive an emoji URL using the default CDN base URLs.
#[must_use]
pub fn emoji_url(emoji: &Emoji) -> String {
    EmojiUrls::default().url(emoji)
}

/// Lowercase hex code points joined with `-`.
///
/// Variation selector 16 is dropped unless the sequence contains a
/// zero-width joiner, matching Twemoji asset names.
fn code_points(sequence: &str) -> String {
    let keep_selectors = sequence.contains(ZERO_WIDTH_JOINER);
    let mut result = String::with_capacity(sequence.len() * 6);
    for c in sequence
        .chars()
        .filter(|&c| keep_selectors || c != VARIATION_SELECTOR_16)
    {
        if !result.is_empty() {
            result.push('-');
        }
        // Writing to a String cannot fail.
        let _ = write!(result, "{:x}", u32::from(c));
    }
    result
}
