//! Theme provider
//!
//! [`ThemeProvider`] is the context object consumers resolve tokens
//! through. It holds the current theme and preferred appearance, loads both
//! from storage once at construction, and writes them back on change.
//!
//! The provider does no internal locking. Resolution only needs `&self`;
//! mutation needs `&mut self`, so callers that share a provider across
//! threads serialize writes themselves.

use crate::appearance::{InterfaceStyle, PreferredAppearance};
use crate::error::{Result, ThemeError};
use crate::platform::StyleSource;
use crate::storage::{keys, KeyValueStore, ThemeStorage};
use crate::theme::{AssetTable, ThemeId, ThemeRegistry};
use crate::tokens::{ColorToken, FontToken, GradientToken, ImageToken};
use crate::typography::ResolvedFont;
use shade_core::{Color, Gradient, ImageRef};

/// Fallback values used when nothing valid is persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDefaults {
    pub theme: ThemeId,
    pub preferred_appearance: PreferredAppearance,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            theme: ThemeId::main(),
            preferred_appearance: PreferredAppearance::System,
        }
    }
}

/// Resolves semantic tokens against the current theme and appearance
pub struct ThemeProvider {
    registry: ThemeRegistry,
    storage: ThemeStorage,
    style_source: Box<dyn StyleSource>,
    theme: ThemeId,
    preferred_appearance: PreferredAppearance,
}

impl ThemeProvider {
    /// Build a provider, restoring persisted state or falling back to
    /// `defaults`.
    ///
    /// Fails with [`ThemeError::UnknownTheme`] when `defaults.theme` is not
    /// in `registry`.
    pub fn new(
        registry: ThemeRegistry,
        store: impl KeyValueStore + 'static,
        style_source: impl StyleSource + 'static,
        defaults: ThemeDefaults,
    ) -> Result<Self> {
        if !registry.contains(&defaults.theme) {
            return Err(ThemeError::UnknownTheme(defaults.theme));
        }

        let storage = ThemeStorage::new(store);

        let theme = match storage.get::<ThemeId>(keys::THEME) {
            Some(id) if registry.contains(&id) => id,
            Some(id) => {
                tracing::warn!(
                    "ThemeProvider::new - persisted theme {} is not registered, using {}",
                    id,
                    defaults.theme
                );
                defaults.theme
            }
            None => {
                tracing::debug!("ThemeProvider::new - no persisted theme, using {}", defaults.theme);
                defaults.theme
            }
        };

        let preferred_appearance = storage
            .get::<PreferredAppearance>(keys::PREFERRED_APPEARANCE)
            .unwrap_or_else(|| {
                tracing::debug!(
                    "ThemeProvider::new - no persisted appearance, using {}",
                    defaults.preferred_appearance
                );
                defaults.preferred_appearance
            });

        Ok(Self {
            registry,
            storage,
            style_source: Box::new(style_source),
            theme,
            preferred_appearance,
        })
    }

    /// Current theme
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    /// Current preferred appearance
    pub fn preferred_appearance(&self) -> PreferredAppearance {
        self.preferred_appearance
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Style the system reports right now
    pub fn system_style(&self) -> InterfaceStyle {
        self.style_source.current_style()
    }

    // ========== Resolution ==========

    fn table(&self, theme: Option<&ThemeId>) -> &dyn AssetTable {
        self.registry.table(theme.unwrap_or(&self.theme))
    }

    fn preference(&self, preferred: Option<PreferredAppearance>) -> PreferredAppearance {
        preferred.unwrap_or(self.preferred_appearance)
    }

    /// Resolve a color token.
    ///
    /// `preferred` and `theme` override the current state for this lookup
    /// only.
    ///
    /// # Panics
    ///
    /// Panics if `theme` names a theme missing from the registry.
    pub fn color(
        &self,
        token: ColorToken,
        preferred: Option<PreferredAppearance>,
        theme: Option<&ThemeId>,
    ) -> Color {
        let color = self
            .table(theme)
            .color(token)
            .resolve_with(self.preference(preferred), || self.system_style());
        tracing::trace!("ThemeProvider::color - {} -> {}", token, color);
        color
    }

    /// Resolve a font token together with its metrics
    pub fn font(
        &self,
        token: FontToken,
        preferred: Option<PreferredAppearance>,
        theme: Option<&ThemeId>,
    ) -> ResolvedFont {
        let set = self.table(theme).font(token);
        let font = set
            .appearance
            .resolve_with(self.preference(preferred), || self.system_style());
        ResolvedFont {
            font,
            metrics: set.metrics,
            text_style: set.text_style,
        }
    }

    pub fn image(
        &self,
        token: ImageToken,
        preferred: Option<PreferredAppearance>,
        theme: Option<&ThemeId>,
    ) -> ImageRef {
        self.table(theme)
            .image(token)
            .resolve_with(self.preference(preferred), || self.system_style())
    }

    pub fn gradient(
        &self,
        token: GradientToken,
        preferred: Option<PreferredAppearance>,
        theme: Option<&ThemeId>,
    ) -> Gradient {
        self.table(theme)
            .gradient(token)
            .resolve_with(self.preference(preferred), || self.system_style())
    }

    // ========== Mutation ==========

    /// Switch the current theme and persist it.
    ///
    /// Setting the current theme again does nothing. An unregistered id is
    /// rejected and leaves the state untouched.
    pub fn set_theme(&mut self, theme: ThemeId) -> Result<()> {
        if self.theme == theme {
            return Ok(());
        }
        if !self.registry.contains(&theme) {
            return Err(ThemeError::UnknownTheme(theme));
        }

        tracing::debug!("ThemeProvider::set_theme - {} -> {}", self.theme, theme);
        self.theme = theme;
        self.storage.set(&self.theme, keys::THEME);
        Ok(())
    }

    /// Change the preferred appearance and persist it; no-op when unchanged
    pub fn set_preferred_appearance(&mut self, preferred: PreferredAppearance) {
        if self.preferred_appearance == preferred {
            return;
        }

        tracing::debug!(
            "ThemeProvider::set_preferred_appearance - {} -> {}",
            self.preferred_appearance,
            preferred
        );
        self.preferred_appearance = preferred;
        self.storage
            .set(&self.preferred_appearance, keys::PREFERRED_APPEARANCE);
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("theme", &self.theme)
            .field("preferred_appearance", &self.preferred_appearance)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
