use serde::{Deserialize, Serialize};

use ledgehop_core::color::Rgb;

/// Client visual theme, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Rgb,
    pub platform: Rgb,
    pub player: Rgb,
    /// Image drawn in place of the player's rectangle. Loading it is required
    /// once named: a missing file stops the client.
    pub player_sprite: Option<SpriteConfig>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            platform: Rgb::GREEN,
            player: Rgb::BLUE,
            player_sprite: None,
        }
    }
}

/// A sprite file under the assets directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub file: String,
    #[serde(default)]
    pub colorkey: Option<ColorKey>,
}

/// Which pixel color becomes transparent when a sprite is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    /// Use whatever color sits at pixel (0, 0).
    TopLeft,
    Rgb(Rgb),
}

impl Theme {
    /// Load the theme from `override_path` if given, else the embedded JSON.
    /// Falls back to defaults on any failure.
    pub fn load(override_path: Option<&str>) -> Self {
        if let Some(path) = override_path {
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str(&json) {
                    Ok(theme) => {
                        tracing::info!("Loaded theme from {path}");
                        return theme;
                    },
                    Err(e) => tracing::warn!("Failed to parse {path}: {e}, using embedded theme"),
                },
                Err(e) => tracing::warn!("Failed to read {path}: {e}, using embedded theme"),
            }
        }
        let json = include_str!("../../../config/theme.json");
        serde_json::from_str(json).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_theme_matches_defaults() {
        assert_eq!(Theme::load(None), Theme::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{"player": {"r": 255, "g": 0, "b": 0}}"#;
        let theme: Theme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.player, Rgb::RED);
        assert_eq!(theme.platform, Rgb::GREEN);
        assert_eq!(theme.background, Rgb::BLACK);
    }

    #[test]
    fn sprite_colorkey_forms() {
        let json = r#"{"player_sprite": {"file": "hero.png", "colorkey": "top_left"}}"#;
        let theme: Theme = serde_json::from_str(json).unwrap();
        let sprite = theme.player_sprite.unwrap();
        assert_eq!(sprite.file, "hero.png");
        assert_eq!(sprite.colorkey, Some(ColorKey::TopLeft));

        let json = r#"{"file": "hero.png", "colorkey": {"rgb": {"r": 255, "g": 255, "b": 255}}}"#;
        let sprite: SpriteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(sprite.colorkey, Some(ColorKey::Rgb(Rgb::WHITE)));
    }

    #[test]
    fn missing_override_falls_back_to_embedded() {
        assert_eq!(
            Theme::load(Some("no/such/theme.json")),
            Theme::default()
        );
    }
}
