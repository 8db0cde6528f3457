use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ui: UiConfig::default(),
        }
    }
}

/// Settings for the terminal interface.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// List history steps oldest first when true.
    pub ascending_moves: bool,
    /// Character drawn for X's squares.
    pub x_glyph: char,
    /// Character drawn for O's squares.
    pub o_glyph: char,
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            ascending_moves: true,
            x_glyph: 'X',
            o_glyph: 'O',
            tick_rate_ms: 100,
        }
    }
}

impl UiConfig {
    /// Glyph used to draw the given player's squares.
    pub fn glyph(&self, player: Player) -> char {
        match player {
            Player::X => self.x_glyph,
            Player::O => self.o_glyph,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.x_glyph == self.ui.o_glyph {
            return Err(ConfigError::Validation(
                "ui.x_glyph and ui.o_glyph must differ".into(),
            ));
        }
        if self.ui.x_glyph.is_control() {
            return Err(ConfigError::Validation(
                "ui.x_glyph must be a printable character".into(),
            ));
        }
        if self.ui.o_glyph.is_control() {
            return Err(ConfigError::Validation(
                "ui.o_glyph must be a printable character".into(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.tick_rate_ms > 1000 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be <= 1000".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// sample config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
