//! Color tokens

use super::TokenKind;

semantic_tokens! {
    /// Semantic color token keys
    ColorToken: TokenKind::Color => {
        // Accents
        AccentPrimary => "accentPrimary",
        AccentSecondary => "accentSecondary",

        // Surfaces
        BackgroundPrimary => "backgroundPrimary",
        BackgroundSecondary => "backgroundSecondary",

        // Text
        TextPrimary => "textPrimary",
        TextSecondary => "textSecondary",
    }
}
