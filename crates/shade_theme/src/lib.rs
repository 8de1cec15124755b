//! Shade Theme System
//!
//! Resolves semantic design tokens to concrete colors, fonts, images and
//! gradients, taking light/dark mode and a persisted user preference into
//! account.
//!
//! # Overview
//!
//! - **Tokens**: closed enums naming roles ([`ColorToken`], [`FontToken`],
//!   [`ImageToken`], [`GradientToken`])
//! - **Appearances**: per-token light/dark strategy ([`Appearance`])
//! - **Asset tables**: one complete token mapping per theme ([`AssetTable`])
//! - **Provider**: current theme + preferred appearance, persisted through a
//!   key-value store ([`ThemeProvider`])
//!
//! # Quick Start
//!
//! ```rust
//! use shade_theme::{
//!     ColorToken, FixedStyle, InterfaceStyle, MemoryStore, PreferredAppearance,
//!     ThemeDefaults, ThemeId, ThemeProvider, ThemeRegistry,
//! };
//!
//! let mut provider = ThemeProvider::new(
//!     ThemeRegistry::builtin(),
//!     MemoryStore::new(),
//!     FixedStyle(InterfaceStyle::Light),
//!     ThemeDefaults::default(),
//! )
//! .unwrap();
//!
//! provider.set_theme(ThemeId::new("contrastTheme")).unwrap();
//! let bg = provider.color(ColorToken::BackgroundPrimary, Some(PreferredAppearance::Dark), None);
//! assert_eq!(bg.to_hex_string(), "#000000");
//! ```
//!
//! # Persistence
//!
//! The provider stores two JSON values: `theming.theme.key` (the theme id
//! string) and `theming.preferredAppearance.key` (`"system"`, `"light"` or
//! `"dark"`). Missing or undecodable values fall back to [`ThemeDefaults`];
//! failed writes are logged at debug level and otherwise ignored.

pub mod appearance;
pub mod config;
pub mod error;
pub mod platform;
pub mod provider;
pub mod storage;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use appearance::{Appearance, InterfaceStyle, PreferredAppearance, TraitEnvironment};
pub use config::{ThemeConfig, CONFIG_FILE};
pub use error::{Result, StorageError, ThemeError};
pub use platform::{detect_system_style, FixedStyle, StyleSource, SystemStyle};
pub use provider::{ThemeDefaults, ThemeProvider};
pub use storage::{keys, FileStore, KeyValueStore, MemoryStore, ThemeStorage};
pub use theme::{AssetTable, ThemeId, ThemeRegistry};
pub use themes::{ContrastTheme, MainTheme};
pub use tokens::*;
pub use typography::{
    Font, FontFamily, FontMetrics, FontSet, FontWeight, LetterSpacing, ResolvedFont,
};

pub use shade_core::{Color, Gradient, GradientStop, ImageRef};
