//! Theme identifiers, asset tables and the theme registry

use crate::appearance::Appearance;
use crate::themes::{ContrastTheme, MainTheme};
use crate::tokens::{ColorToken, FontToken, GradientToken, ImageToken};
use crate::typography::FontSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use shade_core::{Color, Gradient, ImageRef};
use std::borrow::Borrow;
use std::fmt;

/// Identifier selecting a theme's asset table
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The built-in default theme
    pub fn main() -> Self {
        Self::new(MainTheme::ID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl Borrow<str> for ThemeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A complete mapping from every semantic token to its appearance.
///
/// Implementations match exhaustively over each token enum, so every
/// theme answers every token of every kind.
pub trait AssetTable: Send + Sync {
    /// Theme this table belongs to
    fn id(&self) -> ThemeId;

    fn color(&self, token: ColorToken) -> Appearance<Color>;

    fn font(&self, token: FontToken) -> FontSet;

    fn image(&self, token: ImageToken) -> Appearance<ImageRef>;

    fn gradient(&self, token: GradientToken) -> Appearance<Gradient>;
}

/// Registered themes by id
pub struct ThemeRegistry {
    tables: FxHashMap<ThemeId, Box<dyn AssetTable>>,
}

impl ThemeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            tables: FxHashMap::default(),
        }
    }

    /// Registry holding every built-in theme
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(MainTheme);
        registry.register(ContrastTheme);
        registry
    }

    /// Register a table under its own id, replacing any previous table
    pub fn register(&mut self, table: impl AssetTable + 'static) {
        let id = table.id();
        if self.tables.insert(id.clone(), Box::new(table)).is_some() {
            tracing::debug!("ThemeRegistry::register - replaced theme {}", id);
        }
    }

    pub fn get(&self, id: &ThemeId) -> Option<&dyn AssetTable> {
        self.tables.get(id).map(|t| t.as_ref())
    }

    /// Table for `id`.
    ///
    /// # Panics
    ///
    /// Panics when `id` is not registered; resolving against an undefined
    /// theme is a programming error.
    pub fn table(&self, id: &ThemeId) -> &dyn AssetTable {
        match self.get(id) {
            Some(table) => table,
            None => panic!("accessing undefined theme `{id}`"),
        }
    }

    pub fn contains(&self, id: &ThemeId) -> bool {
        self.tables.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<ThemeId> {
        let mut ids: Vec<ThemeId> = self.tables.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.ids())
            .finish()
    }
}
