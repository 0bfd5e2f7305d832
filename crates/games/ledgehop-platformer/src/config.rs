use std::path::Path;

use serde::{Deserialize, Serialize};

use ledgehop_core::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE_HZ};

use crate::physics::PhysicsConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/platformer.toml";
/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "LEDGEHOP_PLATFORMER_CONFIG";

/// Player spawn X (top-left corner).
pub const SPAWN_X: f32 = 100.0;
/// Player spawn Y (top-left corner).
pub const SPAWN_Y: f32 = 300.0;
/// Slowest accepted tick rate.
pub const MIN_TICK_RATE_HZ: f32 = 1.0;

/// Top-level platformer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub physics: PhysicsConfig,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub tick_rate_hz: f32,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "failed to read {path}: {source}"),
            Self::Parse { path, source } => write!(f, "failed to parse {path}: {source}"),
            Self::Invalid(m) => write!(f, "invalid platformer config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl PlatformerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing, unparseable, or fails validation.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            tracing::info!("No {path} found, using default platformer config");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(cfg) => {
                tracing::info!("Loaded platformer config from {path}");
                cfg
            },
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            },
        }
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let cfg = toml::from_str::<PlatformerConfig>(&content).map_err(|source| {
            ConfigError::Parse {
                path: path.display().to_string(),
                source,
            }
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the physics step cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        let positive = [
            ("physics.gravity", p.gravity),
            ("physics.max_fall_speed", p.max_fall_speed),
            ("physics.jump_impulse", p.jump_impulse),
            ("physics.move_step", p.move_step),
            ("physics.player_width", p.player_width),
            ("physics.player_height", p.player_height),
            ("tick_rate_hz", self.tick_rate_hz),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")));
            }
        }
        if self.tick_rate_hz < MIN_TICK_RATE_HZ {
            return Err(ConfigError::Invalid(format!(
                "tick_rate_hz must be >= {MIN_TICK_RATE_HZ}, got {}",
                self.tick_rate_hz
            )));
        }
        if p.player_width > SCREEN_WIDTH || p.player_height > SCREEN_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "player {}x{} does not fit a {SCREEN_WIDTH}x{SCREEN_HEIGHT} screen",
                p.player_width, p.player_height
            )));
        }
        if !(self.spawn_x.is_finite() && self.spawn_y.is_finite()) {
            return Err(ConfigError::Invalid("spawn position must be finite".to_string()));
        }
        let max_x = SCREEN_WIDTH - p.player_width;
        if !(0.0..=max_x).contains(&self.spawn_x) {
            return Err(ConfigError::Invalid(format!(
                "spawn_x must be within 0..={max_x}, got {}",
                self.spawn_x
            )));
        }
        Ok(())
    }
}
