//! Board configuration.

use crate::games::chess::{Orientation, PromotionPiece};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a board instance.
///
/// Every field has a default, so an empty TOML document is a valid config.
/// Deserialization validates the width range, so no deserialized config can
/// have `min_width > max_width`.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Side drawn at the bottom when the board is created.
    orientation: Orientation,

    /// Largest width the board is rendered at.
    max_width: u32,

    /// Smallest width the board is rendered at.
    min_width: u32,

    /// Space kept free around the board, subtracted from the viewport.
    margin: u32,

    /// Piece pawns promote to on click and drop moves.
    auto_promotion: PromotionPiece,

    /// Restore the last-move highlight while browsing history.
    highlight_on_navigation: bool,
}

/// Wire shape of [`BoardConfig`] before validation.
#[derive(Debug, Deserialize)]
struct RawBoardConfig {
    #[serde(default)]
    orientation: Orientation,
    #[serde(default = "default_max_width")]
    max_width: u32,
    #[serde(default = "default_min_width")]
    min_width: u32,
    #[serde(default = "default_margin")]
    margin: u32,
    #[serde(default)]
    auto_promotion: PromotionPiece,
    #[serde(default)]
    highlight_on_navigation: bool,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        let config = Self {
            orientation: raw.orientation,
            max_width: raw.max_width,
            min_width: raw.min_width,
            margin: raw.margin,
            auto_promotion: raw.auto_promotion,
            highlight_on_navigation: raw.highlight_on_navigation,
        };
        config.validate()?;
        Ok(config)
    }
}

#[instrument]
fn default_max_width() -> u32 {
    500
}

#[instrument]
fn default_min_width() -> u32 {
    160
}

#[instrument]
fn default_margin() -> u32 {
    40
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            max_width: default_max_width(),
            min_width: default_min_width(),
            margin: default_margin(),
            auto_promotion: PromotionPiece::default(),
            highlight_on_navigation: false,
        }
    }
}

impl BoardConfig {
    /// Creates the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(orientation = ?config.orientation, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width > self.max_width {
            return Err(ConfigError::new(format!(
                "min_width ({}) exceeds max_width ({})",
                self.min_width, self.max_width
            )));
        }
        Ok(())
    }

    /// Returns a copy with a different starting orientation.
    #[instrument(skip(self))]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns a copy with a different auto-promotion piece.
    #[instrument(skip(self))]
    pub fn with_auto_promotion(mut self, piece: PromotionPiece) -> Self {
        self.auto_promotion = piece;
        self
    }

    /// Returns a copy with history highlight restoration switched on or off.
    #[instrument(skip(self))]
    pub fn with_highlight_on_navigation(mut self, enabled: bool) -> Self {
        self.highlight_on_navigation = enabled;
        self
    }

    /// Board width for a viewport of `viewport` units.
    ///
    /// The margin is removed first, then the result is clamped to
    /// `[min_width, max_width]`.
    #[instrument(skip(self))]
    pub fn responsive_width(&self, viewport: u32) -> u32 {
        viewport
            .saturating_sub(self.margin)
            .clamp(self.min_width, self.max_width)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(*config.max_width(), 500);
        assert_eq!(*config.auto_promotion(), PromotionPiece::Queen);
    }

    #[test]
    fn test_responsive_width_clamps() {
        let config = BoardConfig::default();
        assert_eq!(config.responsive_width(1920), 500);
        assert_eq!(config.responsive_width(400), 360);
        assert_eq!(config.responsive_width(100), 160);
        assert_eq!(config.responsive_width(0), 160);
    }

    #[test]
    fn test_min_above_max_rejected() {
        let err = BoardConfig::from_toml_str("min_width = 600\nmax_width = 300").unwrap_err();
        assert!(err.message.contains("min_width"));
    }

    #[test]
    fn test_inverted_widths_rejected_by_any_deserializer() {
        assert!(serde_json::from_str::<BoardConfig>(r#"{"min_width":600,"max_width":300}"#).is_err());
        assert!(toml::from_str::<BoardConfig>("min_width = 600\nmax_width = 300").is_err());

        let config: BoardConfig = serde_json::from_str(r#"{"min_width":200,"max_width":300}"#).unwrap();
        assert_eq!(config.responsive_width(1000), 300);
        assert_eq!(config.responsive_width(0), 200);
    }
}
