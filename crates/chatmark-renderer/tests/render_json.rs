//! End-to-end rendering of parser JSON output.

use chatmark_renderer::{MapResolver, MessageRenderer, Node, RenderContext};
use pretty_assertions::assert_eq;

const MESSAGE: &str = r#"[
    {"type": "text", "content": "Hey "},
    {"type": "user", "id": "42", "content": [{"type": "text", "content": "<@42>"}]},
    {"type": "text", "content": ", see "},
    {"type": "channel", "id": "7"},
    {"type": "br"},
    {"type": "blockQuote", "content": [
        {"type": "strong", "content": [{"type": "text", "content": "quoted & bold"}]}
    ]},
    {"type": "codeBlock", "lang": "nonexistent-lang", "content": "x < y"},
    {"type": "twemoji", "name": "😀"},
    {"type": "heading", "content": "unmodelled"}
]"#;

fn parse(json: &str) -> Vec<Node> {
    serde_json::from_str(json).unwrap()
}

fn resolver() -> MapResolver {
    serde_json::from_str(
        r#"{
            "channels": {"7": {"name": "general"}},
            "users": {"42": {"username": "ada"}}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_render_message_content() {
    let nodes = parse(MESSAGE);
    let resolver = resolver();
    let html = MessageRenderer::new()
        .with_resolver(&resolver)
        .render(&nodes, RenderContext::Content);
    assert_eq!(
        html,
        concat!(
            "Hey <span mention>@ada</span>, see <span mention>#general</span><br/>",
            "<blockquote><span></span><div><strong>quoted &amp; bold</strong></div></blockquote>",
            r#"<pre code><code class="hljs language-plaintext">x &lt; y</code></pre>"#,
            r#"<img emoji src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f600.svg" alt="😀" draggable="false">"#,
            "unmodelled",
        )
    );
}

#[test]
fn test_render_message_reply() {
    let nodes = parse(MESSAGE);
    let html = MessageRenderer::new().render(&nodes, RenderContext::Reply);
    assert_eq!(
        html,
        concat!(
            "Hey <span mention>&lt;@42&gt;</span>, see <span mention>&lt;#7&gt;</span> ",
            "<strong>quoted &amp; bold</strong>",
            "<code inline>x &lt; y</code>",
            r#"<img emoji src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f600.svg" alt="😀" draggable="false">"#,
            "unmodelled",
        )
    );
}

#[test]
fn test_render_message_header() {
    let nodes = parse(MESSAGE);
    let resolver = resolver();
    let html = MessageRenderer::new()
        .with_resolver(&resolver)
        .render(&nodes[..5], RenderContext::Header);
    assert_eq!(html, "Hey &lt;@42&gt;, see &lt;#7&gt;");
}

#[test]
fn test_render_custom_emoji_json() {
    let nodes = parse(r#"[{"type": "emoji", "id": "123", "name": "party", "animated": true}]"#);
    let html = MessageRenderer::new().render(&nodes, RenderContext::Content);
    assert!(html.contains(r#"src="https://cdn.discordapp.com/emojis/123.gif""#));
}

#[test]
fn test_render_timestamp_json() {
    let nodes = parse(r#"[{"type": "timestamp", "timestamp": "1704207845", "format": "D"}]"#);
    let html = MessageRenderer::new().render(&nodes, RenderContext::Content);
    assert_eq!(html, r#"<span spoiler class="revealed">January 2, 2024</span>"#);
}

#[test]
fn test_render_message_with_malformed_nodes() {
    let nodes = parse(
        r#"[
            {"type": "text", "content": "a "},
            {"type": "timestamp", "timestamp": 1704207845.5, "content": "<t:?>"},
            {"type": "emoticon", "content": 42},
            {"type": "emoji", "id": "", "name": "😀"},
            {"type": "text", "content": " b"}
        ]"#,
    );
    let html = MessageRenderer::new().render(&nodes, RenderContext::Content);
    assert_eq!(
        html,
        concat!(
            "a &lt;t:?&gt;",
            r#"<img emoji src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f600.svg" alt="😀" draggable="false">"#,
            " b",
        )
    );
}
