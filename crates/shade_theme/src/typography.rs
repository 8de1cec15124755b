//! Font values and metrics

use crate::appearance::Appearance;
use crate::tokens::TextStyle;
use std::fmt;

/// Font family
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A bundled or installed family, by PostScript/family name
    Named(String),
    /// The platform UI font
    System,
}

impl FontFamily {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::System => f.write_str("system-ui"),
        }
    }
}

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight
    pub fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

/// Concrete font a font token resolves to
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
}

impl Font {
    pub fn new(family: FontFamily, weight: FontWeight, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }

    pub fn system(weight: FontWeight, size: f32) -> Self {
        Self::new(FontFamily::System, weight, size)
    }
}

/// Letter spacing, absolute or relative to the point size
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LetterSpacing {
    Points(f32),
    Percent(f32),
}

impl LetterSpacing {
    /// Kerning in points for a font of `point_size`
    pub fn to_points(self, point_size: f32) -> f32 {
        match self {
            Self::Points(kern) => kern,
            Self::Percent(pct) => point_size * pct / 100.0,
        }
    }
}

impl Default for LetterSpacing {
    fn default() -> Self {
        Self::Percent(0.0)
    }
}

/// Layout metrics carried alongside a resolved font
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub point_size: f32,
    pub line_height: Option<f32>,
    pub letter_spacing: LetterSpacing,
}

impl FontMetrics {
    pub fn new(point_size: f32, line_height: Option<f32>, letter_spacing: LetterSpacing) -> Self {
        Self {
            point_size,
            line_height,
            letter_spacing,
        }
    }

    pub fn ignoring_line_height(self) -> Self {
        Self {
            line_height: None,
            ..self
        }
    }
}

/// Table entry for a font token
#[derive(Clone, Debug)]
pub struct FontSet {
    pub appearance: Appearance<Font>,
    pub metrics: FontMetrics,
    pub text_style: TextStyle,
}

impl FontSet {
    pub fn new(appearance: Appearance<Font>, metrics: FontMetrics, text_style: TextStyle) -> Self {
        Self {
            appearance,
            metrics,
            text_style,
        }
    }
}

/// A font token resolved by the provider
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFont {
    pub font: Font,
    pub metrics: FontMetrics,
    pub text_style: TextStyle,
}

impl ResolvedFont {
    /// Letter spacing in points
    pub fn kerning(&self) -> f32 {
        self.metrics.letter_spacing.to_points(self.metrics.point_size)
    }

    /// Extra spacing between lines so that a font whose natural line height
    /// is `measured_line_height` renders at the designed line height.
    pub fn line_spacing(&self, measured_line_height: f32) -> f32 {
        self.metrics
            .line_height
            .map(|h| h - measured_line_height)
            .unwrap_or(0.0)
    }

    pub fn ignoring_line_height(self) -> Self {
        Self {
            metrics: self.metrics.ignoring_line_height(),
            ..self
        }
    }
}
