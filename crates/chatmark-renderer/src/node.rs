//! Chat markup AST.
//!
//! Nodes are produced by an upstream markup parser and are never modified
//! by the renderer. Each node's `content` is either raw text or an ordered
//! list of child nodes ([`Content`]).

use crate::emoji::Emoji;
use crate::timestamp::TimestampStyle;

/// Node content: raw text or child nodes, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Raw text, escaped on output.
    Text(String),
    /// Child nodes, rendered in order.
    Nodes(Vec<Node>),
}

impl Default for Content {
    fn default() -> Self {
        Self::Nodes(Vec::new())
    }
}

impl Content {
    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Nodes(nodes) => nodes.is_empty(),
        }
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Nodes(nodes)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Which broadcast mention a node carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BroadcastKind {
    /// `@here`
    Here,
    /// `@everyone`
    Everyone,
}

impl BroadcastKind {
    /// Mention keyword without the `@`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Here => "here",
            Self::Everyone => "everyone",
        }
    }
}

/// A parsed chat markup node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "crate::wire::RawNode"))]
pub enum Node {
    /// Plain text.
    Text(String),
    /// Link with an explicit label.
    Link {
        /// Link destination.
        target: String,
        /// Label.
        content: Content,
    },
    /// Bare or angle-bracketed URL, opened in a new tab.
    Url {
        /// Link destination.
        target: String,
        /// Label, usually the URL itself.
        content: Content,
    },
    /// Quoted block.
    BlockQuote(Content),
    /// Line break.
    LineBreak,
    /// Channel mention (`<#id>`).
    Channel {
        /// Channel id.
        id: String,
        /// Raw mention text, shown in headers.
        content: Content,
    },
    /// Role mention (`<@&id>`).
    Role {
        /// Role id.
        id: String,
        /// Raw mention text, shown in headers.
        content: Content,
    },
    /// User mention (`<@id>`).
    User {
        /// User id.
        id: String,
        /// Raw mention text, shown in headers.
        content: Content,
    },
    /// `@here` or `@everyone`.
    Broadcast {
        /// Which broadcast.
        kind: BroadcastKind,
        /// Raw mention text, shown in headers.
        content: Content,
    },
    /// Fenced code block.
    CodeBlock {
        /// Language hint from the fence.
        lang: Option<String>,
        /// Source code.
        content: String,
    },
    /// Inline code span.
    InlineCode(String),
    /// Italic text.
    Emphasis(Content),
    /// Bold text.
    Strong(Content),
    /// Underlined text.
    Underline(Content),
    /// Struck-through text.
    Strikethrough(Content),
    /// Text emoticon such as `¯\_(ツ)_/¯`.
    Emoticon(Content),
    /// Hidden until clicked.
    Spoiler(Content),
    /// Custom or unicode emoji.
    Emoji {
        /// Emoji reference.
        emoji: Emoji,
        /// Fallback text, shown in headers.
        content: Content,
    },
    /// Unix timestamp.
    Timestamp {
        /// Seconds since the unix epoch.
        seconds: i64,
        /// Display style, if the markup named one.
        style: Option<TimestampStyle>,
        /// Raw timestamp markup, shown in headers.
        content: Content,
    },
    /// A node type this renderer does not model, or a malformed node.
    Unknown {
        /// Type tag as produced by the parser.
        kind: String,
        /// Whatever content the node carried.
        content: Content,
    },
}

impl Node {
    /// Plain text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Labelled link.
    #[must_use]
    pub fn link(target: impl Into<String>, label: Vec<Node>) -> Self {
        Self::Link {
            target: target.into(),
            content: label.into(),
        }
    }

    /// Autolinked URL whose label is the URL itself.
    #[must_use]
    pub fn url(target: impl Into<String>) -> Self {
        let target = target.into();
        Self::Url {
            content: vec![Self::text(target.clone())].into(),
            target,
        }
    }

    /// Block quote.
    #[must_use]
    pub fn block_quote(children: Vec<Node>) -> Self {
        Self::BlockQuote(children.into())
    }

    /// Channel mention with its raw markup as content.
    #[must_use]
    pub fn channel(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::Channel {
            content: vec![Self::text(format!("<#{id}>"))].into(),
            id,
        }
    }

    /// Role mention with its raw markup as content.
    #[must_use]
    pub fn role(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::Role {
            content: vec![Self::text(format!("<@&{id}>"))].into(),
            id,
        }
    }

    /// User mention with its raw markup as content.
    #[must_use]
    pub fn user(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::User {
            content: vec![Self::text(format!("<@{id}>"))].into(),
            id,
        }
    }

    /// `@here` or `@everyone` mention.
    #[must_use]
    pub fn broadcast(kind: BroadcastKind) -> Self {
        Self::Broadcast {
            kind,
            content: vec![Self::text(format!("@{}", kind.as_str()))].into(),
        }
    }

    /// Fenced code block.
    #[must_use]
    pub fn code_block(lang: Option<&str>, code: impl Into<String>) -> Self {
        Self::CodeBlock {
            lang: lang.map(str::to_owned),
            content: code.into(),
        }
    }

    /// Inline code span.
    #[must_use]
    pub fn inline_code(code: impl Into<String>) -> Self {
        Self::InlineCode(code.into())
    }

    /// Italic text.
    #[must_use]
    pub fn emphasis(children: Vec<Node>) -> Self {
        Self::Emphasis(children.into())
    }

    /// Bold text.
    #[must_use]
    pub fn strong(children: Vec<Node>) -> Self {
        Self::Strong(children.into())
    }

    /// Underlined text.
    #[must_use]
    pub fn underline(children: Vec<Node>) -> Self {
        Self::Underline(children.into())
    }

    /// Struck-through text.
    #[must_use]
    pub fn strikethrough(children: Vec<Node>) -> Self {
        Self::Strikethrough(children.into())
    }

    /// Spoiler.
    #[must_use]
    pub fn spoiler(children: Vec<Node>) -> Self {
        Self::Spoiler(children.into())
    }

    /// Emoji with its conventional markup as fallback content.
    #[must_use]
    pub fn emoji(emoji: Emoji) -> Self {
        let fallback = match &emoji.id {
            Some(id) if emoji.animated => format!("<a:{}:{id}>", emoji.name),
            Some(id) => format!("<:{}:{id}>", emoji.name),
            None => emoji.name.clone(),
        };
        Self::Emoji {
            emoji,
            content: vec![Self::text(fallback)].into(),
        }
    }

    /// Timestamp with its raw markup as fallback content.
    #[must_use]
    pub fn timestamp(seconds: i64, style: Option<TimestampStyle>) -> Self {
        Self::Timestamp {
            seconds,
            style,
            content: vec![Self::text(format!("<t:{seconds}>"))].into(),
        }
    }

    /// Type tag of this node, as the parser names it.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::Link { .. } => "link",
            Self::Url { .. } => "url",
            Self::BlockQuote(_) => "blockQuote",
            Self::LineBreak => "br",
            Self::Channel { .. } => "channel",
            Self::Role { .. } => "role",
            Self::User { .. } => "user",
            Self::Broadcast { kind, .. } => kind.as_str(),
            Self::CodeBlock { .. } => "codeBlock",
            Self::InlineCode(_) => "inlineCode",
            Self::Emphasis(_) => "em",
            Self::Strong(_) => "strong",
            Self::Underline(_) => "underline",
            Self::Strikethrough(_) => "strikethrough",
            Self::Emoticon(_) => "emoticon",
            Self::Spoiler(_) => "spoiler",
            Self::Emoji { .. } => "emoji",
            Self::Timestamp { .. } => "timestamp",
            Self::Unknown { kind, .. } => kind.as_str(),
        }
    }
}

/// Whether `kind` names a node type the parser produces and the renderer
/// models, including aliases like `autolink` and `twemoji`.
pub(crate) fn is_known_kind(kind: &str) -> bool {
    matches!(
        kind,
        "text"
            | "link"
            | "url"
            | "autolink"
            | "blockQuote"
            | "br"
            | "newline"
            | "channel"
            | "role"
            | "user"
            | "here"
            | "everyone"
            | "codeBlock"
            | "inlineCode"
            | "em"
            | "strong"
            | "underline"
            | "strikethrough"
            | "emoticon"
            | "spoiler"
            | "emoji"
            | "twemoji"
            | "timestamp"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_known_kind() {
        assert!(is_known_kind("user"));
        assert!(is_known_kind("twemoji"));
        assert!(!is_known_kind("heading"));
        assert!(!is_known_kind(""));
    }

    #[test]
    fn test_mention_constructors_carry_raw_markup() {
        assert_eq!(
            Node::user("42"),
            Node::User {
                id: "42".to_owned(),
                content: Content::from(vec![Node::text("<@42>")]),
            }
        );
        assert_eq!(Node::role("7").kind(), "role");
        assert_eq!(Node::broadcast(BroadcastKind::Everyone).kind(), "everyone");
    }

    #[test]
    fn test_emoji_fallback_content() {
        let Node::Emoji { content, .. } = Node::emoji(Emoji::custom("1", "blob", true)) else {
            panic!("expected emoji node");
        };
        assert_eq!(content, Content::Nodes(vec![Node::text("<a:blob:1>")]));
    }

    #[test]
    fn test_content_is_empty() {
        assert!(Content::default().is_empty());
        assert!(Content::from("").is_empty());
        assert!(!Content::from(vec![Node::LineBreak]).is_empty());
    }

    #[test]
    fn test_url_label_is_target() {
        let Node::Url { target, content } = Node::url("https://example.com") else {
            panic!("expected url node");
        };
        assert_eq!(target, "https://example.com");
        assert_eq!(content, Content::from(vec![Node::text("https://example.com")]));
    }
}
