//! Colour palette exposed to stylesheets as CSS custom properties.

/// Named colour roles used by the rendered markup's stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background.
    pub background: String,
    /// Secondary background.
    pub background_secondary: String,
    /// Tertiary background, the darkest shade.
    pub background_tertiary: String,
    /// Muted colour for interactive elements.
    pub interactive_muted: String,
    /// Link text.
    pub link: String,
    /// Mention highlight background.
    pub mention_background: String,
    /// Mention text.
    pub mention_foreground: String,
    /// Body text.
    pub text: String,
    /// Muted text.
    pub text_muted: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: "#313338".to_owned(),
            background_secondary: "#2b2d31".to_owned(),
            background_tertiary: "#1e1f22".to_owned(),
            interactive_muted: "#4e5058".to_owned(),
            link: "#00a8fc".to_owned(),
            mention_background: "#3c4270".to_owned(),
            mention_foreground: "#c9cdfb".to_owned(),
            text: "#dbdee1".to_owned(),
            text_muted: "#949ba4".to_owned(),
        }
    }

    /// `(property name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("background", self.background.as_str()),
            ("backgroundSecondary", self.background_secondary.as_str()),
            ("backgroundTertiary", self.background_tertiary.as_str()),
            ("interactiveMuted", self.interactive_muted.as_str()),
            ("link", self.link.as_str()),
            ("mentionBackground", self.mention_background.as_str()),
            ("mentionForeground", self.mention_foreground.as_str()),
            ("text", self.text.as_str()),
            ("textMuted", self.text_muted.as_str()),
        ]
    }

    /// Mutable access to a colour by its property name.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "background" => Some(&mut self.background),
            "backgroundSecondary" => Some(&mut self.background_secondary),
            "backgroundTertiary" => Some(&mut self.background_tertiary),
            "interactiveMuted" => Some(&mut self.interactive_muted),
            "link" => Some(&mut self.link),
            "mentionBackground" => Some(&mut self.mention_background),
            "mentionForeground" => Some(&mut self.mention_foreground),
            "text" => Some(&mut self.text),
            "textMuted" => Some(&mut self.text_muted),
            _ => None,
        }
    }

    /// Serialize as CSS custom property declarations: `--key:value;` for
    /// each role, concatenated without separators.
    ///
    /// ```
    /// use chatmark_renderer::Theme;
    ///
    /// assert!(Theme::dark().css_variables().starts_with("--background:#313338;--backgroundSecondary:"));
    /// ```
    pub fn css_variables(&self) -> String {
        self.entries()
            .iter()
            .map(|(key, value)| format!("--{key}:{value};"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_css_variables() {
        assert_eq!(
            Theme::dark().css_variables(),
            "--background:#313338;--backgroundSecondary:#2b2d31;--backgroundTertiary:#1e1f22;\
             --interactiveMuted:#4e5058;--link:#00a8fc;--mentionBackground:#3c4270;\
             --mentionForeground:#c9cdfb;--text:#dbdee1;--textMuted:#949ba4;"
        );
    }

    #[test]
    fn test_get_mut_overrides() {
        let mut theme = Theme::default();
        *theme.get_mut("textMuted").unwrap() = "#000".to_owned();
        assert_eq!(theme.text_muted, "#000");
        assert!(theme.get_mut("missing").is_none());
    }

    #[test]
    fn test_entries_cover_every_key() {
        let mut theme = Theme::dark();
        let keys: Vec<&str> = Theme::dark().entries().iter().map(|(k, _)| *k).collect();
        for key in keys {
            assert!(theme.get_mut(key).is_some(), "missing accessor for {key}");
        }
    }
}
