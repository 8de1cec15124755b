//! Light/dark appearance resolution
//!
//! An [`Appearance`] describes how one token's value depends on the
//! interface style. Resolution combines it with the app's
//! [`PreferredAppearance`] and the style currently reported by the system.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Interface style reported by the host environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceStyle {
    #[default]
    Unspecified,
    Light,
    Dark,
}

impl fmt::Display for InterfaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unspecified => "unspecified",
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Environment handed to [`Appearance::Dynamic`] providers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraitEnvironment {
    pub style: InterfaceStyle,
}

impl TraitEnvironment {
    pub fn new(style: InterfaceStyle) -> Self {
        Self { style }
    }

    /// True only for an explicitly dark environment
    pub fn is_dark(&self) -> bool {
        self.style == InterfaceStyle::Dark
    }
}

/// A preferred appearance overriding the system appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredAppearance {
    /// Follow the current system appearance
    #[default]
    System,
    Light,
    Dark,
}

impl PreferredAppearance {
    pub fn all() -> &'static [PreferredAppearance] {
        const ALL: [PreferredAppearance; 3] = [
            PreferredAppearance::System,
            PreferredAppearance::Light,
            PreferredAppearance::Dark,
        ];
        &ALL
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Environment seen by dynamic providers under this preference
    pub fn environment(self, system: InterfaceStyle) -> TraitEnvironment {
        match self {
            Self::System => TraitEnvironment::new(system),
            Self::Light => TraitEnvironment::new(InterfaceStyle::Light),
            Self::Dark => TraitEnvironment::new(InterfaceStyle::Dark),
        }
    }
}

impl fmt::Display for PreferredAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredAppearance {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::InvalidAppearance(s.to_string())),
        }
    }
}

/// Value provider for [`Appearance::Dynamic`]
pub type DynamicProvider<T> = Arc<dyn Fn(&TraitEnvironment) -> T + Send + Sync>;

/// How a token's value varies with the interface style
pub enum Appearance<T> {
    /// One value for every style
    Static(T),
    /// Computed from the environment at resolution time
    Dynamic(DynamicProvider<T>),
    /// A fixed light and dark pair
    Auto { light: T, dark: T },
}

impl<T> Appearance<T> {
    pub fn dynamic(provider: impl Fn(&TraitEnvironment) -> T + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(provider))
    }

    pub fn auto(light: T, dark: T) -> Self {
        Self::Auto { light, dark }
    }

    /// Transform the payload, keeping the case
    pub fn map<U, F>(self, f: F) -> Appearance<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        match self {
            Self::Static(v) => Appearance::Static(f(v)),
            Self::Dynamic(provider) => {
                Appearance::Dynamic(Arc::new(move |env: &TraitEnvironment| f(provider(env))))
            }
            Self::Auto { light, dark } => Appearance::Auto {
                light: f(light),
                dark: f(dark),
            },
        }
    }
}

impl<T: Clone> Appearance<T> {
    /// Resolve to a concrete value.
    ///
    /// `system` is only consulted when `preferred` is
    /// [`PreferredAppearance::System`]; an unspecified system style
    /// resolves `Auto` pairs to their light value.
    pub fn resolve(&self, preferred: PreferredAppearance, system: InterfaceStyle) -> T {
        self.resolve_with(preferred, || system)
    }

    /// Like [`resolve`](Self::resolve), but asks `system` for the style
    /// only for a non-static value under [`PreferredAppearance::System`].
    pub fn resolve_with(
        &self,
        preferred: PreferredAppearance,
        system: impl FnOnce() -> InterfaceStyle,
    ) -> T {
        if let Self::Static(v) = self {
            return v.clone();
        }

        let style = match preferred {
            PreferredAppearance::Light => InterfaceStyle::Light,
            PreferredAppearance::Dark => InterfaceStyle::Dark,
            PreferredAppearance::System => system(),
        };

        match self {
            Self::Static(v) => v.clone(),
            Self::Dynamic(provider) => provider(&TraitEnvironment::new(style)),
            Self::Auto { light, dark } => match style {
                InterfaceStyle::Dark => dark.clone(),
                InterfaceStyle::Light | InterfaceStyle::Unspecified => light.clone(),
            },
        }
    }
}

impl<T: Clone> Clone for Appearance<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(v) => Self::Static(v.clone()),
            Self::Dynamic(provider) => Self::Dynamic(Arc::clone(provider)),
            Self::Auto { light, dark } => Self::Auto {
                light: light.clone(),
                dark: dark.clone(),
            },
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Appearance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(v) => f.debug_tuple("Static").field(v).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
            Self::Auto { light, dark } => f
                .debug_struct("Auto")
                .field("light", light)
                .field("dark", dark)
                .finish(),
        }
    }
}
