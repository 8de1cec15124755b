//! Theme error types

use crate::theme::ThemeId;
use crate::tokens::TokenKind;
use thiserror::Error;

/// Errors raised by a key-value store backing theme persistence
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded or decoded
    #[error("storage value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Key cannot be used by this store
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Theming errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme id is not registered
    #[error("theme not registered: {0}")]
    UnknownTheme(ThemeId),

    /// Token key does not name a token of the given kind
    #[error("unknown {kind} token: {key:?}")]
    UnknownToken { kind: TokenKind, key: String },

    /// Preferred appearance string is not `system`, `light` or `dark`
    #[error("invalid appearance: {0:?}")]
    InvalidAppearance(String),

    /// Config file could not be parsed
    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
