//! Toolbar dimensions and their TOML representation.
//!
//! A [`ToolbarConfig`] carries every fixed dimension the toolbar layout
//! depends on. Defaults follow the car theme; hosts can override any subset
//! from a TOML table:
//!
//! ```
//! use cabin_ui::config::ToolbarConfig;
//!
//! let config = ToolbarConfig::from_toml_str(r#"
//! toolbar_height = 80
//! edge_container_width = 96
//!
//! [padding]
//! left = 8
//! right = 8
//! "#).unwrap();
//!
//! assert_eq!(config.toolbar_height, 80);
//! assert_eq!(config.edge_icon_size, 44);
//! assert_eq!(config.padding.left, 8);
//! ```

use std::path::{Path, PathBuf};

use cabin_ui_core::logging::targets;
use cabin_ui_core::CabinError;
use serde::{Deserialize, Serialize};

use crate::widget::geometry::Insets;

/// Errors from loading or validating a [`ToolbarConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a config.
    #[error("Invalid toolbar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Failed to serialize toolbar config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config file could not be read.
    #[error("Failed to read toolbar config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field holds a value the layout cannot use.
    #[error("Invalid value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl From<ConfigError> for CabinError {
    fn from(err: ConfigError) -> Self {
        CabinError::config(err.to_string())
    }
}

/// Largest value any single dimension may hold.
///
/// Keeps every sum the measure pass forms well inside `i32`.
pub const MAX_DIMENSION: i32 = 1 << 16;

/// Fixed dimensions of a car toolbar, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Height of the toolbar content area. The toolbar never grows with content.
    pub toolbar_height: i32,
    /// Side of the square navigation and overflow icons.
    pub edge_icon_size: i32,
    /// Side of the square title icon.
    pub title_icon_size: i32,
    /// Width of the invisible container the edge icons are centered in.
    pub edge_container_width: i32,
    /// Vertical gap between a stacked title and subtitle.
    pub text_vertical_padding: i32,
    /// Minimum touch target of the navigation button.
    pub touch_target_size: i32,
    /// Padding around the toolbar content.
    pub padding: Insets,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            toolbar_height: 96,
            edge_icon_size: 44,
            title_icon_size: 64,
            edge_container_width: 112,
            text_vertical_padding: 4,
            touch_target_size: 76,
            padding: Insets::ZERO,
        }
    }
}

impl ToolbarConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded toolbar config");
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize the config as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Reject values the layout cannot use: negatives and anything above
    /// [`MAX_DIMENSION`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("toolbar_height", self.toolbar_height),
            ("edge_icon_size", self.edge_icon_size),
            ("title_icon_size", self.title_icon_size),
            ("edge_container_width", self.edge_container_width),
            ("text_vertical_padding", self.text_vertical_padding),
            ("touch_target_size", self.touch_target_size),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must not be negative, got {value}"),
                });
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must be at most {MAX_DIMENSION}, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Desired height of the toolbar: padding plus the fixed content height.
    #[inline]
    pub fn desired_height(&self) -> i32 {
        self.toolbar_height.saturating_add(self.padding.vertical())
    }

    /// Set the toolbar height using builder pattern.
    pub fn with_toolbar_height(mut self, height: i32) -> Self {
        self.toolbar_height = height;
        self
    }

    /// Set the edge icon size using builder pattern.
    pub fn with_edge_icon_size(mut self, size: i32) -> Self {
        self.edge_icon_size = size;
        self
    }

    /// Set the title icon size using builder pattern.
    pub fn with_title_icon_size(mut self, size: i32) -> Self {
        self.title_icon_size = size;
        self
    }

    /// Set the edge container width using builder pattern.
    pub fn with_edge_container_width(mut self, width: i32) -> Self {
        self.edge_container_width = width;
        self
    }

    /// Set the title/subtitle gap using builder pattern.
    pub fn with_text_vertical_padding(mut self, padding: i32) -> Self {
        self.text_vertical_padding = padding;
        self
    }

    /// Set the padding using builder pattern.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }
}
