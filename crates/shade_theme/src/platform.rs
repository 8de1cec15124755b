//! System interface style detection

use crate::appearance::InterfaceStyle;

/// Environment variable that pins the detected system style
pub const STYLE_ENV_VAR: &str = "SHADE_COLOR_SCHEME";

/// Answers "what is the current system light/dark style"
pub trait StyleSource: Send + Sync {
    fn current_style(&self) -> InterfaceStyle;
}

impl<S: StyleSource + ?Sized> StyleSource for Box<S> {
    fn current_style(&self) -> InterfaceStyle {
        (**self).current_style()
    }
}

/// A style source that always reports the same style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedStyle(pub InterfaceStyle);

impl StyleSource for FixedStyle {
    fn current_style(&self) -> InterfaceStyle {
        self.0
    }
}

/// Queries the operating system on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemStyle;

impl StyleSource for SystemStyle {
    fn current_style(&self) -> InterfaceStyle {
        detect_system_style()
    }
}

/// Parse `light`/`dark` (case-insensitive); anything else is unspecified
pub fn parse_style(value: &str) -> InterfaceStyle {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => InterfaceStyle::Light,
        "dark" => InterfaceStyle::Dark,
        _ => InterfaceStyle::Unspecified,
    }
}

/// Detect the current system style.
///
/// [`STYLE_ENV_VAR`] wins when set to `light` or `dark`; otherwise the
/// desktop setting is read through `dark-light`. Returns
/// [`InterfaceStyle::Unspecified`] when nothing can be determined.
pub fn detect_system_style() -> InterfaceStyle {
    if let Ok(value) = std::env::var(STYLE_ENV_VAR) {
        let style = parse_style(&value);
        if style != InterfaceStyle::Unspecified {
            return style;
        }
    }

    let style = match dark_light::detect() {
        Ok(mode) => mode_style(mode),
        Err(err) => {
            tracing::debug!("detect_system_style - detection failed: {}", err);
            InterfaceStyle::Unspecified
        }
    };
    tracing::trace!("detect_system_style - desktop reports {}", style);
    style
}

fn mode_style(mode: dark_light::Mode) -> InterfaceStyle {
    match mode {
        dark_light::Mode::Light => InterfaceStyle::Light,
        dark_light::Mode::Dark => InterfaceStyle::Dark,
        dark_light::Mode::Unspecified => InterfaceStyle::Unspecified,
    }
}
