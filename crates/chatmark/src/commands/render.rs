//! Render command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use chatmark_config::{CliSettings, Config};
use chatmark_renderer::{MapResolver, MessageRenderer, Node, PlainHighlighter, RenderContext};
use clap::Args;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// JSON file holding the parsed node array. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Rendering context: content, reply, or header.
    #[arg(short = 'C', long)]
    context: Option<RenderContext>,

    /// JSON file mapping channel, role, and user ids to names.
    #[arg(short, long)]
    entities: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, env = "CHATMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Timestamp offset from UTC in minutes.
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,

    /// Render code blocks without syntax highlighting.
    #[arg(long)]
    no_highlight: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            context: self.context,
            utc_offset_minutes: self.utc_offset,
            highlight: self.no_highlight.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let nodes: Vec<Node> = read_json(self.input.as_deref())?;
        let resolver: Option<MapResolver> = self
            .entities
            .as_deref()
            .map(|path| read_json(Some(path)))
            .transpose()?;

        let html = render_document(&config, &nodes, resolver.as_ref());

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{html}")?;
        Ok(())
    }
}

/// Render `nodes` with the services described by `config`.
fn render_document(config: &Config, nodes: &[Node], resolver: Option<&MapResolver>) -> String {
    let context: RenderContext = config.render.context;
    let mut renderer = MessageRenderer::new()
        .with_emoji_urls(config.emoji_urls())
        .with_timestamp_formatter(config.timestamp_formatter());
    if !config.highlight.enabled {
        renderer = renderer.with_highlighter(PlainHighlighter);
    }
    if let Some(resolver) = resolver {
        renderer = renderer.with_resolver(resolver);
    }

    tracing::debug!(nodes = nodes.len(), %context, "Rendering document");
    renderer.render(nodes, context)
}

/// Read and parse JSON from `path`, or from stdin for `None` and `-`.
fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, CliError> {
    let (source_name, text) = match path {
        Some(path) if path != Path::new("-") => (
            path.display().to_string(),
            std::fs::read_to_string(path)?,
        ),
        _ => (
            "<stdin>".to_owned(),
            std::io::read_to_string(std::io::stdin())?,
        ),
    };
    serde_json::from_str(&text).map_err(|error| CliError::Json { source_name, error })
}
