//! Theme command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use chatmark_config::Config;
use clap::Args;

use crate::error::CliError;

/// Arguments for the theme command.
#[derive(Args)]
pub(crate) struct ThemeArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "CHATMARK_CONFIG")]
    config: Option<PathBuf>,
}

impl ThemeArgs {
    /// Execute the theme command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let css = theme_css(self.config.as_deref())?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{css}")?;
        Ok(())
    }
}

/// CSS custom properties for the configured theme.
fn theme_css(config_path: Option<&Path>) -> Result<String, CliError> {
    let config = Config::load(config_path, None)?;
    Ok(config.theme().css_variables())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_theme_css_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[theme]\nlink = \"#fff\"\ntextMuted = \"#123456\"\n")
            .unwrap();

        assert_eq!(
            theme_css(Some(file.path())).unwrap(),
            "--background:#313338;--backgroundSecondary:#2b2d31;--backgroundTertiary:#1e1f22;\
             --interactiveMuted:#4e5058;--link:#fff;--mentionBackground:#3c4270;\
             --mentionForeground:#c9cdfb;--text:#dbdee1;--textMuted:#123456;"
        );
    }

    #[test]
    fn test_theme_css_rejects_unknown_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[theme]\naccent = \"#fff\"\n").unwrap();

        let result = theme_css(Some(file.path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_theme_css_missing_config() {
        let result = theme_css(Some(Path::new("/nonexistent/chatmark.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
