use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings as written in theme files.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub muted: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub vocab: String,
    pub difficult: String,
    pub cursor_bg: String,
    pub cursor_fg: String,
    pub notice_bg: String,
    pub notice_fg: String,
    pub error: String,
    pub success: String,
}

impl Theme {
    /// Look up `name` in the user theme directory first, then the bundled set.
    pub fn load(name: &str) -> Option<Self> {
        let filename = format!("{name}.toml");

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("urdu-reader").join("themes").join(&filename);
            if let Ok(content) = fs::read_to_string(&user_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(e) => log::warn!("ignoring theme {}: {e}", user_path.display()),
                }
            }
        }

        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("paper").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#fbf8f1".to_string(),
            fg: "#2b2622".to_string(),
            muted: "#8a8176".to_string(),
            accent: "#1f6f5c".to_string(),
            border: "#d8d0c2".to_string(),
            border_focused: "#1f6f5c".to_string(),
            header_bg: "#efe8da".to_string(),
            header_fg: "#2b2622".to_string(),
            vocab: "#1f5fa8".to_string(),
            difficult: "#b5461f".to_string(),
            cursor_bg: "#1f6f5c".to_string(),
            cursor_fg: "#fbf8f1".to_string(),
            notice_bg: "#f6e7b8".to_string(),
            notice_fg: "#5a4710".to_string(),
            error: "#b3261e".to_string(),
            success: "#2e7d32".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::Reset
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn vocab(&self) -> Color { Self::parse_color(&self.vocab) }
    pub fn difficult(&self) -> Color { Self::parse_color(&self.difficult) }
    pub fn cursor_bg(&self) -> Color { Self::parse_color(&self.cursor_bg) }
    pub fn cursor_fg(&self) -> Color { Self::parse_color(&self.cursor_fg) }
    pub fn notice_bg(&self) -> Color { Self::parse_color(&self.notice_bg) }
    pub fn notice_fg(&self) -> Color { Self::parse_color(&self.notice_fg) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_themes_load() {
        assert_eq!(Theme::load("paper").unwrap().name, "paper");
        assert_eq!(Theme::load("midnight").unwrap().name, "midnight");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(ThemeColors::parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(ThemeColors::parse_color("nope"), Color::Reset);
    }

    #[test]
    fn test_partial_theme_file_uses_defaults() {
        let theme: Theme = toml::from_str("name = \"x\"\n[colors]\nfg = \"#000000\"\n").unwrap();
        assert_eq!(theme.colors.fg, "#000000");
        assert_eq!(theme.colors.bg, ThemeColors::default().bg);
    }

    #[test]
    fn test_unknown_theme() {
        assert!(Theme::load("no-such-theme-anywhere").is_none());
    }
}
