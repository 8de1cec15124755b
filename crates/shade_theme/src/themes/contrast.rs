//! High-contrast light/dark theme
//!
//! Surfaces flip between white and black with the interface style, and
//! body text gains weight on dark backgrounds.

use super::main::{font_metrics, font_spec};
use crate::appearance::{Appearance, TraitEnvironment};
use crate::theme::{AssetTable, ThemeId};
use crate::tokens::*;
use crate::typography::{Font, FontSet, FontWeight};
use shade_core::{Color, Gradient, ImageRef};

pub mod palette {
    use shade_core::Color;

    pub const GOLD: Color = Color::rgb(255.0 / 255.0, 204.0 / 255.0, 0.0);
    pub const AMBER: Color = Color::rgb(178.0 / 255.0, 120.0 / 255.0, 0.0);
    pub const GRAPHITE: Color = Color::rgb(28.0 / 255.0, 28.0 / 255.0, 30.0 / 255.0);
    pub const SMOKE: Color = Color::rgb(242.0 / 255.0, 242.0 / 255.0, 247.0 / 255.0);
}

/// Black-and-white theme that follows the interface style
#[derive(Clone, Copy, Debug, Default)]
pub struct ContrastTheme;

impl ContrastTheme {
    pub const ID: &'static str = "contrastTheme";
}

fn heavier(weight: FontWeight) -> FontWeight {
    match weight {
        FontWeight::Regular => FontWeight::Medium,
        FontWeight::Medium => FontWeight::Semibold,
        FontWeight::Semibold | FontWeight::Bold => FontWeight::Bold,
    }
}

impl AssetTable for ContrastTheme {
    fn id(&self) -> ThemeId {
        ThemeId::new(Self::ID)
    }

    fn color(&self, token: ColorToken) -> Appearance<Color> {
        match token {
            ColorToken::AccentPrimary => Appearance::auto(palette::AMBER, palette::GOLD),
            ColorToken::AccentSecondary => Appearance::Static(palette::AMBER),

            ColorToken::BackgroundPrimary => Appearance::auto(Color::WHITE, Color::BLACK),
            ColorToken::BackgroundSecondary => Appearance::auto(palette::SMOKE, palette::GRAPHITE),

            ColorToken::TextPrimary => Appearance::auto(Color::BLACK, Color::WHITE),
            ColorToken::TextSecondary => Appearance::dynamic(|env: &TraitEnvironment| {
                if env.is_dark() {
                    Color::WHITE.with_alpha(0.7)
                } else {
                    Color::BLACK.with_alpha(0.6)
                }
            }),
        }
    }

    fn font(&self, token: FontToken) -> FontSet {
        let (family, weight, (size, _)) = font_spec(token);
        let appearance = Appearance::dynamic(move |env: &TraitEnvironment| {
            let weight = if env.is_dark() { heavier(weight) } else { weight };
            Font::new(family.clone(), weight, size)
        });
        FontSet::new(appearance, font_metrics(token), token.text_style())
    }

    fn image(&self, token: ImageToken) -> Appearance<ImageRef> {
        match token {
            ImageToken::SplashLogo => Appearance::auto(
                ImageRef::named("splash_logo"),
                ImageRef::named("splash_logo_dark"),
            ),
            ImageToken::AppIcon => Appearance::Static(ImageRef::named("app_icon")),
        }
    }

    fn gradient(&self, token: GradientToken) -> Appearance<Gradient> {
        match token {
            GradientToken::MainColorBg => Appearance::auto(
                Gradient::from_colors([Color::WHITE, palette::SMOKE]),
                Gradient::from_colors([Color::BLACK, palette::GRAPHITE]),
            ),
        }
    }
}
