//! Image tokens

use super::TokenKind;

semantic_tokens! {
    /// Semantic image token keys
    ImageToken: TokenKind::Image => {
        /// Logo shown on the splash screen
        SplashLogo => "splashLogo",
        AppIcon => "appIcon",
    }
}
