//! Popover settings
//!
//! Loaded from TOML. Every field is optional; missing values fall back to the
//! defaults in [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::style::DEFAULT_BACKGROUND;
use crate::error::ConfigError;
use crate::paths;
use crate::placement::PlacementConfig;

/// User-facing popover settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub placement: PlacementConfig,
    /// Panel background colour token, also used for the arrow tint
    pub background: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        let settings: Settings = toml::from_str(source)?;
        Ok(settings.sanitized())
    }

    /// Load settings from an explicit file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded popover settings");
        Ok(settings)
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = paths::config_file();
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Floor negative geometry at zero
    pub fn sanitized(mut self) -> Self {
        if self.placement.margin.has_negative() {
            warn!(margin = ?self.placement.margin, "Negative margin floored at 0");
            self.placement.margin = self.placement.margin.sanitized();
        }
        if self.placement.arrow_thickness < 0.0 {
            warn!(
                arrow_thickness = self.placement.arrow_thickness,
                "Negative arrow thickness floored at 0"
            );
            self.placement.arrow_thickness = 0.0;
        }
        self
    }
}
