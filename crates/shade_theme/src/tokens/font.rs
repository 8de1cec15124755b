//! Font tokens
//!
//! The typography scale. Pick a token by hierarchy and context, not by
//! raw size.

use super::TokenKind;

semantic_tokens! {
    /// Semantic font token keys
    FontToken: TokenKind::Font => {
        /// Top-level screen title; collapses into an inline title on scroll
        LargeTitle => "largeTitle",

        /// Main content heading below the navigation bar
        Title1 => "title1",
        /// Subsection heading
        Title2 => "title2",
        /// Compact heading for cards, tiles and list groups
        Title3 => "title3",

        /// Inline title for collapsed navigation bars and key values
        Headline => "headline",

        /// Default reading text
        BodyRegular => "bodyRegular",
        BodyMedium => "bodyMedium",
        /// Short critical inline messages at body size
        BodyEmphasized => "bodyEmphasized",

        CalloutRegular => "calloutRegular",
        CalloutEmphasized => "calloutEmphasized",

        /// Supporting text one step below body
        SubheadRegular => "subheadRegular",
        SubheadMedium => "subheadMedium",
        SubheadEmphasized => "subheadEmphasized",

        /// Metadata and timestamps
        FootnoteRegular => "footnoteRegular",
        FootnoteMedium => "footnoteMedium",
        FootnoteEmphasized => "footnoteEmphasized",

        Caption1Regular => "caption1Regular",
        Caption1Emphasized => "caption1Emphasized",

        /// Fine print for ultra-dense layouts
        Caption2Regular => "caption2Regular",
        Caption2Emphasized => "caption2Emphasized",
    }
}

/// Dynamic-type category a font scales with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption1,
    Caption2,
}

impl FontToken {
    /// Dynamic-type category of this token
    pub fn text_style(self) -> TextStyle {
        match self {
            FontToken::LargeTitle => TextStyle::LargeTitle,
            FontToken::Title1 => TextStyle::Title1,
            FontToken::Title2 => TextStyle::Title2,
            FontToken::Title3 => TextStyle::Title3,
            FontToken::Headline => TextStyle::Headline,
            FontToken::BodyRegular | FontToken::BodyMedium | FontToken::BodyEmphasized => {
                TextStyle::Body
            }
            FontToken::CalloutRegular | FontToken::CalloutEmphasized => TextStyle::Callout,
            FontToken::SubheadRegular
            | FontToken::SubheadMedium
            | FontToken::SubheadEmphasized => TextStyle::Subheadline,
            FontToken::FootnoteRegular
            | FontToken::FootnoteMedium
            | FontToken::FootnoteEmphasized => TextStyle::Footnote,
            FontToken::Caption1Regular | FontToken::Caption1Emphasized => TextStyle::Caption1,
            FontToken::Caption2Regular | FontToken::Caption2Emphasized => TextStyle::Caption2,
        }
    }
}
