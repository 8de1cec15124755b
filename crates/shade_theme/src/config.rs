//! Theme configuration file handling (`shade.toml`)

use crate::appearance::{InterfaceStyle, PreferredAppearance};
use crate::error::{Result, ThemeError};
use crate::platform::{FixedStyle, StyleSource, SystemStyle};
use crate::provider::ThemeDefaults;
use crate::theme::ThemeId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE: &str = "shade.toml";

/// Theme configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme used when none is persisted
    #[serde(default = "default_theme")]
    pub default_theme: ThemeId,
    /// Preferred appearance used when none is persisted
    #[serde(default)]
    pub default_appearance: PreferredAppearance,
    /// Directory holding persisted theme state
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Pin the system style instead of querying the OS
    #[serde(default)]
    pub system_style: Option<InterfaceStyle>,
}

fn default_theme() -> ThemeId {
    ThemeId::main()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".shade")
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            default_appearance: PreferredAppearance::System,
            storage_dir: default_storage_dir(),
            system_style: None,
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(src) => Self::from_toml_str(&src),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("ThemeConfig::load - {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(ThemeError::Storage(err.into())),
        }
    }

    pub fn defaults(&self) -> ThemeDefaults {
        ThemeDefaults {
            theme: self.default_theme.clone(),
            preferred_appearance: self.default_appearance,
        }
    }

    /// Fixed style when pinned, otherwise the live system style
    pub fn style_source(&self) -> Box<dyn StyleSource> {
        match self.system_style {
            Some(style) => Box::new(FixedStyle(style)),
            None => Box::new(SystemStyle),
        }
    }
}
