//! Gradient tokens

use super::TokenKind;

semantic_tokens! {
    /// Semantic gradient token keys
    GradientToken: TokenKind::Gradient => {
        /// Full-screen background wash
        MainColorBg => "mainColorBg",
    }
}
