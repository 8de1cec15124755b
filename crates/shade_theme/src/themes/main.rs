//! Default app theme
//!
//! A warm, light-only palette: every color is static. Display headings use
//! the bundled Outfit face, everything else the system UI font.

use crate::appearance::Appearance;
use crate::theme::{AssetTable, ThemeId};
use crate::tokens::*;
use crate::typography::{Font, FontFamily, FontMetrics, FontSet, FontWeight, LetterSpacing};
use shade_core::{Color, Gradient, ImageRef};

/// Main theme palette
pub mod palette {
    use shade_core::Color;

    pub const SAND: Color = Color::rgb(252.0 / 255.0, 238.0 / 255.0, 202.0 / 255.0);
    pub const BRONZE: Color = Color::rgb(101.0 / 255.0, 78.0 / 255.0, 19.0 / 255.0);

    pub const IVORY: Color = Color::rgb(255.0 / 255.0, 250.0 / 255.0, 240.0 / 255.0);
    pub const CREAM: Color = Color::rgb(255.0 / 255.0, 244.0 / 255.0, 225.0 / 255.0);
    pub const MIST: Color = Color::rgb(244.0 / 255.0, 246.0 / 255.0, 247.0 / 255.0);

    pub const INK: Color = Color::rgb(56.0 / 255.0, 56.0 / 255.0, 66.0 / 255.0);
    pub const SLATE: Color = Color::rgba(71.0 / 255.0, 71.0 / 255.0, 91.0 / 255.0, 0.65);
}

/// Point size / line height pairs of the type scale
pub(crate) mod scale {
    pub const S50: (f32, f32) = (11.0, 13.0);
    pub const S100: (f32, f32) = (12.0, 16.0);
    pub const S200: (f32, f32) = (13.0, 18.0);
    pub const S300: (f32, f32) = (15.0, 20.0);
    pub const S400: (f32, f32) = (16.0, 21.0);
    pub const S500: (f32, f32) = (17.0, 22.0);
    pub const S600: (f32, f32) = (20.0, 25.0);
    pub const S700: (f32, f32) = (22.0, 28.0);
    pub const S800: (f32, f32) = (28.0, 34.0);
    pub const S900: (f32, f32) = (34.0, 41.0);
}

/// PostScript name of the bundled display face
pub const DISPLAY_FACE: &str = "Outfit-SemiBold";

/// Family, weight and (size, line height) of a font token in the main scale
pub(crate) fn font_spec(token: FontToken) -> (FontFamily, FontWeight, (f32, f32)) {
    use FontWeight::*;

    let display = || FontFamily::named(DISPLAY_FACE);
    let system = || FontFamily::System;

    match token {
        FontToken::LargeTitle => (display(), Semibold, scale::S900),

        FontToken::Title1 => (display(), Semibold, scale::S800),
        FontToken::Title2 => (display(), Semibold, scale::S700),
        FontToken::Title3 => (display(), Semibold, scale::S600),

        FontToken::Headline => (system(), Semibold, scale::S500),

        FontToken::BodyRegular => (system(), Regular, scale::S500),
        FontToken::BodyMedium => (system(), Medium, scale::S500),
        FontToken::BodyEmphasized => (system(), Semibold, scale::S500),

        FontToken::CalloutRegular => (system(), Regular, scale::S400),
        FontToken::CalloutEmphasized => (system(), Semibold, scale::S400),

        FontToken::SubheadRegular => (system(), Regular, scale::S300),
        FontToken::SubheadMedium => (system(), Medium, scale::S300),
        FontToken::SubheadEmphasized => (system(), Semibold, scale::S300),

        FontToken::FootnoteRegular => (system(), Regular, scale::S200),
        FontToken::FootnoteMedium => (system(), Medium, scale::S200),
        FontToken::FootnoteEmphasized => (system(), Semibold, scale::S200),

        FontToken::Caption1Regular => (system(), Regular, scale::S100),
        FontToken::Caption1Emphasized => (system(), Semibold, scale::S100),

        FontToken::Caption2Regular => (system(), Regular, scale::S50),
        FontToken::Caption2Emphasized => (system(), Semibold, scale::S50),
    }
}

/// Metrics of a font token in the main scale
pub(crate) fn font_metrics(token: FontToken) -> FontMetrics {
    let (_, _, (size, line_height)) = font_spec(token);
    FontMetrics::new(size, Some(line_height), LetterSpacing::Percent(0.0))
}

/// The default theme
#[derive(Clone, Copy, Debug, Default)]
pub struct MainTheme;

impl MainTheme {
    pub const ID: &'static str = "mainTheme";
}

impl AssetTable for MainTheme {
    fn id(&self) -> ThemeId {
        ThemeId::new(Self::ID)
    }

    fn color(&self, token: ColorToken) -> Appearance<Color> {
        let color = match token {
            ColorToken::AccentPrimary => palette::SAND,
            ColorToken::AccentSecondary => palette::BRONZE,

            ColorToken::BackgroundPrimary => palette::IVORY,
            ColorToken::BackgroundSecondary => palette::MIST,

            ColorToken::TextPrimary => palette::INK,
            ColorToken::TextSecondary => palette::SLATE,
        };
        Appearance::Static(color)
    }

    fn font(&self, token: FontToken) -> FontSet {
        let (family, weight, (size, _)) = font_spec(token);
        FontSet::new(
            Appearance::Static(Font::new(family, weight, size)),
            font_metrics(token),
            token.text_style(),
        )
    }

    fn image(&self, token: ImageToken) -> Appearance<ImageRef> {
        match token {
            ImageToken::SplashLogo => Appearance::Static(ImageRef::named("splash_logo")),
            ImageToken::AppIcon => Appearance::Static(ImageRef::named("app_icon")),
        }
    }

    fn gradient(&self, token: GradientToken) -> Appearance<Gradient> {
        match token {
            GradientToken::MainColorBg => {
                Appearance::Static(Gradient::from_colors([palette::IVORY, palette::CREAM]))
            }
        }
    }
}
