//! Context-aware renderer from chat markup ASTs to HTML.
//!
//! This crate turns the node tree produced by a chat markup parser into an
//! HTML string. The same tree renders differently depending on where it is
//! shown:
//! - [`RenderContext::Content`]: full message body
//! - [`RenderContext::Reply`]: compact quoted preview (block formatting
//!   collapses to inline)
//! - [`RenderContext::Header`]: minimal text, mentions are never resolved
//!
//! # Architecture
//!
//! [`MessageRenderer`] walks the tree and dispatches on [`Node`] variants.
//! It talks to three services, all pure lookups:
//! - [`EntityResolver`]: mention ids to display names (optional)
//! - [`Highlighter`]: code block highlighting ([`SyntectHighlighter`] by default)
//! - [`EmojiUrls`]: emoji image URLs
//!
//! Text leaves and interpolated names go through [`escape_html`]. Link
//! targets are attribute-escaped as well.
//!
//! # Example
//!
//! ```
//! use chatmark_renderer::{Node, RenderContext, render};
//!
//! let nodes = vec![
//!     Node::strong(vec![Node::text("hello")]),
//!     Node::LineBreak,
//!     Node::user("42"),
//! ];
//!
//! assert_eq!(
//!     render(&nodes, None, RenderContext::Content),
//!     "<strong>hello</strong><br/><span mention>&lt;@42&gt;</span>"
//! );
//! assert_eq!(
//!     render(&nodes, None, RenderContext::Reply),
//!     "<strong>hello</strong> <span mention>&lt;@42&gt;</span>"
//! );
//! ```

mod context;
mod emoji;
mod escape;
mod highlight;
mod html;
mod node;
mod renderer;
mod resolver;
mod theme;
mod timestamp;
#[cfg(feature = "serde")]
mod wire;

pub use context::{ParseContextError, RenderContext};
pub use emoji::{DEFAULT_CUSTOM_EMOJI_BASE, DEFAULT_UNICODE_EMOJI_BASE, Emoji, EmojiUrls, emoji_url};
pub use escape::escape_html;
pub use highlight::{Highlighter, PLAINTEXT, PlainHighlighter, SyntectHighlighter};
pub use node::{BroadcastKind, Content, Node};
pub use renderer::{MessageRenderer, render};
pub use resolver::{Channel, EntityResolver, MapResolver, Role, User};
pub use theme::Theme;
pub use timestamp::{TimestampFormatter, TimestampStyle};
