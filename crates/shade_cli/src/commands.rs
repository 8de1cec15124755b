//! Subcommand handlers; each returns the text to print

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use shade_core::Gradient;
use shade_theme::{
    ColorToken, FontFamily, FontToken, GradientToken, ImageToken, LetterSpacing,
    PreferredAppearance, ResolvedFont, ThemeId, ThemeProvider, TokenKind,
};
use std::fmt::Write;

/// Arguments shared by the token lookup subcommands
#[derive(Args, Debug, Clone)]
pub struct Lookup {
    /// Token key, e.g. `backgroundPrimary`
    pub token: String,

    /// Override the preferred appearance (`system`, `light`, `dark`)
    #[arg(short, long)]
    pub appearance: Option<String>,

    /// Resolve against this theme instead of the current one
    #[arg(short, long)]
    pub theme: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKindArg {
    Color,
    Font,
    Image,
    Gradient,
}

impl From<TokenKindArg> for TokenKind {
    fn from(kind: TokenKindArg) -> Self {
        match kind {
            TokenKindArg::Color => TokenKind::Color,
            TokenKindArg::Font => TokenKind::Font,
            TokenKindArg::Image => TokenKind::Image,
            TokenKindArg::Gradient => TokenKind::Gradient,
        }
    }
}

/// Parsed lookup overrides
struct Overrides {
    appearance: Option<PreferredAppearance>,
    theme: Option<ThemeId>,
}

impl Lookup {
    fn overrides(&self, provider: &ThemeProvider) -> Result<Overrides> {
        let appearance = self
            .appearance
            .as_deref()
            .map(str::parse::<PreferredAppearance>)
            .transpose()?;

        let theme = match self.theme.as_deref() {
            Some(id) => Some(registered(provider, id)?),
            None => None,
        };

        Ok(Overrides { appearance, theme })
    }
}

fn registered(provider: &ThemeProvider, id: &str) -> Result<ThemeId> {
    let id = ThemeId::new(id);
    if !provider.registry().contains(&id) {
        let known: Vec<String> = provider
            .registry()
            .ids()
            .iter()
            .map(ToString::to_string)
            .collect();
        bail!("unknown theme `{id}`; registered themes: {}", known.join(", "));
    }
    Ok(id)
}

pub fn status(provider: &ThemeProvider) -> String {
    format!(
        "theme: {}\npreferred appearance: {}\nsystem style: {}",
        provider.theme(),
        provider.preferred_appearance(),
        provider.system_style()
    )
}

pub fn themes(provider: &ThemeProvider) -> String {
    provider
        .registry()
        .ids()
        .iter()
        .map(|id| {
            let marker = if id == provider.theme() { "*" } else { " " };
            format!("{marker} {id}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tokens(kind: Option<TokenKindArg>) -> String {
    let kinds: Vec<TokenKind> = match kind {
        Some(kind) => vec![kind.into()],
        None => TokenKind::all().to_vec(),
    };

    let mut out = String::new();
    for kind in kinds {
        for key in kind.keys() {
            let _ = writeln!(out, "{kind}\t{key}");
        }
    }
    out.trim_end().to_string()
}

pub fn color(provider: &ThemeProvider, lookup: &Lookup) -> Result<String> {
    let token: ColorToken = lookup.token.parse()?;
    let o = lookup.overrides(provider)?;
    let color = provider.color(token, o.appearance, o.theme.as_ref());
    Ok(color.to_hex_string())
}

pub fn font(provider: &ThemeProvider, lookup: &Lookup) -> Result<String> {
    let token: FontToken = lookup.token.parse()?;
    let o = lookup.overrides(provider)?;
    Ok(describe_font(&provider.font(token, o.appearance, o.theme.as_ref())))
}

pub fn image(provider: &ThemeProvider, lookup: &Lookup) -> Result<String> {
    let token: ImageToken = lookup.token.parse()?;
    let o = lookup.overrides(provider)?;
    Ok(provider
        .image(token, o.appearance, o.theme.as_ref())
        .to_string())
}

pub fn gradient(provider: &ThemeProvider, lookup: &Lookup) -> Result<String> {
    let token: GradientToken = lookup.token.parse()?;
    let o = lookup.overrides(provider)?;
    Ok(describe_gradient(&provider.gradient(
        token,
        o.appearance,
        o.theme.as_ref(),
    )))
}

pub fn set_theme(provider: &mut ThemeProvider, id: &str) -> Result<String> {
    let id = registered(provider, id)?;
    provider.set_theme(id)?;
    Ok(format!("theme: {}", provider.theme()))
}

pub fn set_appearance(provider: &mut ThemeProvider, appearance: &str) -> Result<String> {
    provider.set_preferred_appearance(appearance.parse()?);
    Ok(format!(
        "preferred appearance: {}",
        provider.preferred_appearance()
    ))
}

fn describe_font(font: &ResolvedFont) -> String {
    let family = match &font.font.family {
        FontFamily::Named(name) => name.clone(),
        FontFamily::System => "system".to_string(),
    };
    let line_height = font
        .metrics
        .line_height
        .map(|h| format!("{h}pt"))
        .unwrap_or_else(|| "auto".to_string());
    let spacing = match font.metrics.letter_spacing {
        LetterSpacing::Points(pt) => format!("{pt}pt"),
        LetterSpacing::Percent(pct) => format!("{pct}%"),
    };
    format!(
        "{family} {weight} {size}pt (line height {line_height}, letter spacing {spacing}, style {style:?})",
        weight = font.font.weight.value(),
        size = font.font.size,
        style = font.text_style,
    )
}

fn describe_gradient(gradient: &Gradient) -> String {
    gradient
        .stops
        .iter()
        .map(|stop| format!("{:.2} {}", stop.offset, stop.color))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_theme::{
        FixedStyle, InterfaceStyle, MemoryStore, ThemeDefaults, ThemeRegistry,
    };

    fn provider() -> ThemeProvider {
        ThemeProvider::new(
            ThemeRegistry::builtin(),
            MemoryStore::new(),
            FixedStyle(InterfaceStyle::Dark),
            ThemeDefaults::default(),
        )
        .unwrap()
    }

    fn lookup(token: &str, appearance: Option<&str>, theme: Option<&str>) -> Lookup {
        Lookup {
            token: token.to_string(),
            appearance: appearance.map(str::to_string),
            theme: theme.map(str::to_string),
        }
    }

    #[test]
    fn color_lookup_prints_hex() {
        let p = provider();
        assert_eq!(
            color(&p, &lookup("backgroundPrimary", None, None)).unwrap(),
            "#fffaf0"
        );
        assert_eq!(
            color(&p, &lookup("backgroundPrimary", Some("light"), Some("contrastTheme"))).unwrap(),
            "#ffffff"
        );
    }

    #[test]
    fn bad_inputs_are_errors_not_panics() {
        let p = provider();
        assert!(color(&p, &lookup("labelPrimary", None, None)).is_err());
        assert!(color(&p, &lookup("textPrimary", Some("sepia"), None)).is_err());
        assert!(color(&p, &lookup("textPrimary", None, Some("retroTheme"))).is_err());
    }

    #[test]
    fn font_description() {
        let p = provider();
        assert_eq!(
            font(&p, &lookup("title1", None, None)).unwrap(),
            "Outfit-SemiBold 600 28pt (line height 34pt, letter spacing 0%, style Title1)"
        );
    }

    #[test]
    fn gradient_lists_stops() {
        let p = provider();
        assert_eq!(
            gradient(&p, &lookup("mainColorBg", None, None)).unwrap(),
            "0.00 #fffaf0\n1.00 #fff4e1"
        );
    }

    #[test]
    fn themes_marks_current() {
        let mut p = provider();
        assert_eq!(themes(&p), "  contrastTheme\n* mainTheme");
        set_theme(&mut p, "contrastTheme").unwrap();
        assert_eq!(themes(&p), "* contrastTheme\n  mainTheme");
    }

    #[test]
    fn set_appearance_parses_words() {
        let mut p = provider();
        assert_eq!(
            set_appearance(&mut p, "dark").unwrap(),
            "preferred appearance: dark"
        );
        assert!(set_appearance(&mut p, "dim").is_err());
    }

    #[test]
    fn tokens_filtered_by_kind() {
        assert_eq!(tokens(Some(TokenKindArg::Gradient)), "gradient\tmainColorBg");
        assert!(tokens(None).lines().count() > 20);
    }
}
