//! Semantic tokens
//!
//! One closed enumeration per asset kind. A token names a role (e.g.
//! "primary text") rather than a value; every theme maps every token.
//! Variants are only ever appended, never reordered.

/// Declares a token enum with `ALL`, `key()`, `FromStr` and `Display`.
macro_rules! semantic_tokens {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:expr => {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every token of this kind, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Stable identifier used in config, storage and the CLI
            pub fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ThemeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $key => Ok($name::$variant), )+
                    _ => Err($crate::error::ThemeError::UnknownToken {
                        kind: $kind,
                        key: s.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

mod color;
mod font;
mod gradient;
mod image;

pub use color::*;
pub use font::*;
pub use gradient::*;
pub use image::*;

use std::fmt;

/// Asset kind a token belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Color,
    Font,
    Image,
    Gradient,
}

impl TokenKind {
    pub fn all() -> &'static [TokenKind] {
        const ALL: [TokenKind; 4] = [
            TokenKind::Color,
            TokenKind::Font,
            TokenKind::Image,
            TokenKind::Gradient,
        ];
        &ALL
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Font => "font",
            Self::Image => "image",
            Self::Gradient => "gradient",
        }
    }

    /// Keys of every token of this kind
    pub fn keys(self) -> Vec<&'static str> {
        match self {
            Self::Color => ColorToken::ALL.iter().map(|t| t.key()).collect(),
            Self::Font => FontToken::ALL.iter().map(|t| t.key()).collect(),
            Self::Image => ImageToken::ALL.iter().map(|t| t.key()).collect(),
            Self::Gradient => GradientToken::ALL.iter().map(|t| t.key()).collect(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(keys: Vec<&'static str>) {
        let set: HashSet<_> = keys.iter().collect();
        assert_eq!(set.len(), keys.len(), "duplicate token key in {keys:?}");
    }

    #[test]
    fn keys_are_unique_per_kind() {
        for kind in TokenKind::all() {
            assert_unique(kind.keys());
        }
    }

    #[test]
    fn keys_parse_back() {
        for &t in ColorToken::ALL {
            assert_eq!(t.key().parse::<ColorToken>().unwrap(), t);
        }
        for &t in FontToken::ALL {
            assert_eq!(t.key().parse::<FontToken>().unwrap(), t);
        }
        for &t in ImageToken::ALL {
            assert_eq!(t.key().parse::<ImageToken>().unwrap(), t);
        }
        for &t in GradientToken::ALL {
            assert_eq!(t.key().parse::<GradientToken>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_key_reports_kind() {
        let err = "labelPrimary".parse::<ColorToken>().unwrap_err();
        assert_eq!(err.to_string(), "unknown color token: \"labelPrimary\"");
    }
}
