//! JSON shape of parser output.
//!
//! Nodes arrive as objects tagged by `type`. A field whose value has the
//! wrong shape is treated as absent, and known types missing a field they
//! need become [`Node::Unknown`], so one bad node never rejects the
//! document.

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::emoji::Emoji;
use crate::node::{BroadcastKind, Content, Node};
use crate::timestamp::TimestampStyle;

/// A node as it appears on the wire.
#[derive(Deserialize)]
pub(crate) struct RawNode {
    #[serde(rename = "type")]
    kind: Option<Lenient<String>>,
    content: Option<Lenient<RawContent>>,
    target: Option<Lenient<String>>,
    id: Option<Lenient<RawScalar>>,
    lang: Option<Lenient<String>>,
    timestamp: Option<Lenient<RawScalar>>,
    format: Option<Lenient<String>>,
    name: Option<Lenient<String>>,
    animated: Option<Lenient<bool>>,
}

/// A field value, or whatever else was there.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Unwrap a field, treating a wrongly-shaped value as absent.
fn valid<T>(field: Option<Lenient<T>>) -> Option<T> {
    match field? {
        Lenient::Valid(value) => Some(value),
        Lenient::Invalid(_) => None,
    }
}

/// `content` may be text, a node list, or a single node.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    Text(String),
    Nodes(Vec<Node>),
    Node(Box<Node>),
}

impl From<RawContent> for Content {
    fn from(raw: RawContent) -> Self {
        match raw {
            RawContent::Text(text) => Self::Text(text),
            RawContent::Nodes(nodes) => Self::Nodes(nodes),
            RawContent::Node(node) => Self::Nodes(vec![*node]),
        }
    }
}

/// Ids and timestamps show up both as strings and as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Integer(i64),
}

impl RawScalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
        }
    }

    fn to_seconds(&self) -> Option<i64> {
        match self {
            Self::Text(text) => text.trim().parse().ok(),
            Self::Integer(n) => Some(*n),
        }
    }
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let kind = valid(raw.kind).unwrap_or_default();
        let content = valid(raw.content).map(Content::from).unwrap_or_default();
        let fields = Fields {
            target: valid(raw.target),
            id: valid(raw.id).map(RawScalar::into_string),
            lang: valid(raw.lang),
            timestamp: valid(raw.timestamp),
            format: valid(raw.format),
            name: valid(raw.name),
            animated: valid(raw.animated).unwrap_or(false),
        };

        match build(&kind, content, fields) {
            Ok(node) => node,
            Err(content) => Node::Unknown { kind, content },
        }
    }
}

/// Type-specific fields of a raw node.
struct Fields {
    target: Option<String>,
    id: Option<String>,
    lang: Option<String>,
    timestamp: Option<RawScalar>,
    format: Option<String>,
    name: Option<String>,
    animated: bool,
}

/// Build a typed node, or hand the content back if the node cannot be
/// modelled.
fn build(kind: &str, content: Content, fields: Fields) -> Result<Node, Content> {
    let node = match kind {
        "text" => match content {
            Content::Text(text) => Node::Text(text),
            nodes @ Content::Nodes(_) => return Err(nodes),
        },
        "link" => match fields.target {
            Some(target) => Node::Link { target, content },
            None => return Err(content),
        },
        "url" | "autolink" => match fields.target {
            Some(target) => Node::Url { target, content },
            None => return Err(content),
        },
        "blockQuote" => Node::BlockQuote(content),
        "br" | "newline" => Node::LineBreak,
        "channel" | "role" | "user" => {
            let Some(id) = fields.id else {
                return Err(content);
            };
            match kind {
                "channel" => Node::Channel { id, content },
                "role" => Node::Role { id, content },
                _ => Node::User { id, content },
            }
        }
        "here" => Node::Broadcast {
            kind: BroadcastKind::Here,
            content,
        },
        "everyone" => Node::Broadcast {
            kind: BroadcastKind::Everyone,
            content,
        },
        "codeBlock" => match content {
            Content::Text(code) => Node::CodeBlock {
                lang: fields.lang.filter(|lang| !lang.is_empty()),
                content: code,
            },
            nodes @ Content::Nodes(_) => return Err(nodes),
        },
        "inlineCode" => match content {
            Content::Text(code) => Node::InlineCode(code),
            nodes @ Content::Nodes(_) => return Err(nodes),
        },
        "em" => Node::Emphasis(content),
        "strong" => Node::Strong(content),
        "underline" => Node::Underline(content),
        "strikethrough" => Node::Strikethrough(content),
        "emoticon" => Node::Emoticon(content),
        "spoiler" => Node::Spoiler(content),
        "emoji" | "twemoji" => match fields.name {
            Some(name) => Node::Emoji {
                emoji: Emoji {
                    id: fields.id.filter(|id| !id.is_empty()),
                    name,
                    animated: fields.animated,
                },
                content,
            },
            None => return Err(content),
        },
        "timestamp" => match fields.timestamp.as_ref().and_then(RawScalar::to_seconds) {
            Some(seconds) => Node::Timestamp {
                seconds,
                style: fields.format.as_deref().and_then(TimestampStyle::from_code),
                content,
            },
            None => return Err(content),
        },
        _ => return Err(content),
    };
    Ok(node)
}
