use serde::Deserialize;

/// Client configuration, loaded from `ledgehop.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Directory sprites are loaded from. Created at startup if absent.
    pub assets_dir: String,
    /// Optional JSON theme replacing the embedded one.
    pub theme_path: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            theme_path: None,
        }
    }
}

impl ClientConfig {
    /// Load config from `ledgehop.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let config = match std::fs::read_to_string("ledgehop.toml") {
            Ok(content) => match toml::from_str::<ClientConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from ledgehop.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse ledgehop.toml: {e}, using defaults");
                    ClientConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No ledgehop.toml found, using defaults");
                ClientConfig::default()
            },
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = var("LEDGEHOP_ASSETS_DIR")
            && !dir.is_empty()
        {
            self.assets_dir = dir;
        }
        if let Some(path) = var("LEDGEHOP_THEME")
            && !path.is_empty()
        {
            self.theme_path = Some(path);
        }
        self
    }
}
