//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod theme;

pub(crate) use render::RenderArgs;
pub(crate) use theme::ThemeArgs;
