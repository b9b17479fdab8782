//! AST-to-markup renderer.

use crate::context::RenderContext;
use crate::emoji::EmojiUrls;
use crate::escape::push_escaped;
use crate::highlight::{Highlighter, SyntectHighlighter, resolve_language};
use crate::html::{self, InlineStyle};
use crate::node::{Content, Node, is_known_kind};
use crate::resolver::EntityResolver;
use crate::timestamp::TimestampFormatter;

/// Renders chat markup ASTs to HTML.
///
/// The renderer only holds configuration; every call to
/// [`render`](Self::render) is independent, and the same inputs always
/// produce the same output.
///
/// # Example
///
/// ```
/// use chatmark_renderer::{MapResolver, MessageRenderer, Node, RenderContext};
///
/// let resolver = MapResolver::new().with_user("42", "ada");
/// let renderer = MessageRenderer::new().with_resolver(&resolver);
///
/// let nodes = vec![Node::text("hi "), Node::user("42")];
/// assert_eq!(
///     renderer.render(&nodes, RenderContext::Content),
///     "hi <span mention>@ada</span>"
/// );
/// ```
pub struct MessageRenderer<'a> {
    resolver: Option<&'a dyn EntityResolver>,
    highlighter: Box<dyn Highlighter>,
    emoji_urls: EmojiUrls,
    timestamps: TimestampFormatter,
}

impl Default for MessageRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MessageRenderer<'a> {
    /// Create a renderer with no resolver, syntect highlighting, the default
    /// emoji CDNs, and UTC timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolver: None,
            highlighter: Box::new(SyntectHighlighter),
            emoji_urls: EmojiUrls::default(),
            timestamps: TimestampFormatter::default(),
        }
    }

    /// Resolve mentions through `resolver`.
    #[must_use]
    pub fn with_resolver(mut self, resolver: &'a dyn EntityResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Replace the code block highlighter.
    #[must_use]
    pub fn with_highlighter<H: Highlighter + 'static>(mut self, highlighter: H) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    /// Set the base URLs for emoji images.
    #[must_use]
    pub fn with_emoji_urls(mut self, urls: EmojiUrls) -> Self {
        self.emoji_urls = urls;
        self
    }

    /// Set how timestamps are formatted.
    #[must_use]
    pub fn with_timestamp_formatter(mut self, formatter: TimestampFormatter) -> Self {
        self.timestamps = formatter;
        self
    }

    /// Render `nodes` in order for the given context.
    pub fn render(&self, nodes: &[Node], context: RenderContext) -> String {
        let mut out = String::with_capacity(256);
        self.render_nodes(nodes, context, &mut out);
        out
    }

    fn render_nodes(&self, nodes: &[Node], context: RenderContext, out: &mut String) {
        for node in nodes {
            self.render_node(node, context, out);
        }
    }

    fn render_content(&self, content: &Content, context: RenderContext, out: &mut String) {
        match content {
            Content::Text(text) => push_escaped(out, text),
            Content::Nodes(nodes) => self.render_nodes(nodes, context, out),
        }
    }

    /// Header rendering of an entity node: its own label, or the raw
    /// markup form when the node carries none.
    fn render_label(&self, content: &Content, raw: impl FnOnce() -> String, out: &mut String) {
        if content.is_empty() {
            push_escaped(out, &raw());
        } else {
            self.render_content(content, RenderContext::Header, out);
        }
    }

    #[allow(clippy::too_many_lines)]
    fn render_node(&self, node: &Node, context: RenderContext, out: &mut String) {
        let header = context == RenderContext::Header;

        match node {
            Node::Text(text) => push_escaped(out, text),
            Node::Link { target, content } => {
                html::link_start(target, false, out);
                self.render_content(content, context, out);
                html::link_end(out);
            }
            Node::Url { target, content } => {
                html::link_start(target, true, out);
                self.render_content(content, context, out);
                html::link_end(out);
            }
            Node::BlockQuote(content) => {
                if context == RenderContext::Reply {
                    self.render_content(content, context, out);
                } else {
                    html::blockquote_start(out);
                    self.render_content(content, context, out);
                    html::blockquote_end(out);
                }
            }
            Node::LineBreak => match context {
                RenderContext::Content => html::line_break(out),
                RenderContext::Reply => out.push(' '),
                RenderContext::Header => {}
            },
            Node::Channel { id, content } => {
                if header {
                    self.render_label(content, || format!("<#{id}>"), out);
                } else {
                    let text = self
                        .resolver
                        .and_then(|r| r.channel(id))
                        .map_or_else(|| format!("<#{id}>"), |c| format!("#{}", c.name));
                    html::mention(&text, out);
                }
            }
            Node::Role { id, content } => {
                if header {
                    self.render_label(content, || format!("<@&{id}>"), out);
                } else {
                    let text = self
                        .resolver
                        .and_then(|r| r.role(id))
                        .map_or_else(|| format!("<@&{id}>"), |r| format!("@{}", r.name));
                    html::mention(&text, out);
                }
            }
            Node::User { id, content } => {
                if header {
                    self.render_label(content, || format!("<@{id}>"), out);
                } else {
                    let text = self
                        .resolver
                        .and_then(|r| r.user(id))
                        .map_or_else(|| format!("<@{id}>"), |u| format!("@{}", u.username));
                    html::mention(&text, out);
                }
            }
            Node::Broadcast { kind, content } => {
                let text = format!("@{}", kind.as_str());
                if header {
                    self.render_label(content, || text, out);
                } else {
                    html::mention(&text, out);
                }
            }
            Node::CodeBlock { lang, content } => {
                if context == RenderContext::Reply {
                    html::inline_code(content, out);
                } else {
                    let language = resolve_language(self.highlighter.as_ref(), lang.as_deref());
                    let highlighted = self.highlighter.highlight(content, language);
                    html::code_block(language, &highlighted, out);
                }
            }
            Node::InlineCode(code) => html::inline_code(code, out),
            Node::Emphasis(content) => self.render_styled(InlineStyle::Emphasis, content, context, out),
            Node::Strong(content) => self.render_styled(InlineStyle::Strong, content, context, out),
            Node::Underline(content) => {
                self.render_styled(InlineStyle::Underline, content, context, out);
            }
            Node::Strikethrough(content) => {
                self.render_styled(InlineStyle::Strikethrough, content, context, out);
            }
            Node::Emoticon(content) => self.render_content(content, context, out),
            Node::Spoiler(content) => {
                html::spoiler_start(out);
                self.render_content(content, context, out);
                html::spoiler_end(out);
            }
            Node::Emoji { emoji, content } => {
                if header {
                    self.render_label(content, || emoji.alt_text(), out);
                } else {
                    html::emoji(&self.emoji_urls.url(emoji), &emoji.alt_text(), out);
                }
            }
            Node::Timestamp {
                seconds,
                style,
                content,
            } => {
                let raw = || format!("<t:{seconds}>");
                if header {
                    self.render_label(content, raw, out);
                } else if let Some(text) = self.timestamps.format(*seconds, *style) {
                    html::timestamp(&text, out);
                } else {
                    tracing::debug!(seconds, "Timestamp out of range, using fallback");
                    self.render_label(content, raw, out);
                }
            }
            Node::Unknown { kind, content } => {
                if is_known_kind(kind) {
                    tracing::debug!(kind = %kind, "Malformed node, rendering its content");
                } else {
                    tracing::warn!(kind = %kind, "Unknown node type");
                }
                self.render_content(content, context, out);
            }
        }
    }

    fn render_styled(
        &self,
        style: InlineStyle,
        content: &Content,
        context: RenderContext,
        out: &mut String,
    ) {
        html::inline_start(style, out);
        self.render_content(content, context, out);
        html::inline_end(style, out);
    }
}

/// Render `nodes` with the default services.
///
/// Without a resolver, mentions render in their raw `<@id>` form.
///
/// ```
/// use chatmark_renderer::{Node, RenderContext, render};
///
/// let nodes = vec![Node::strong(vec![Node::text("a & b")])];
/// assert_eq!(render(&nodes, None, RenderContext::Content), "<strong>a &amp; b</strong>");
/// assert_eq!(render(&[], None, RenderContext::Content), "");
/// ```
pub fn render(
    nodes: &[Node],
    resolver: Option<&dyn EntityResolver>,
    context: RenderContext,
) -> String {
    let renderer = MessageRenderer::new();
    match resolver {
        Some(resolver) => renderer.with_resolver(resolver).render(nodes, context),
        None => renderer.render(nodes, context),
    }
}
