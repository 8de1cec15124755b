//! Shade core value types
//!
//! The concrete values that semantic theme tokens resolve to:
//!
//! - [`Color`]: RGBA color with components in `0.0..=1.0`
//! - [`Gradient`]: ordered color stops
//! - [`ImageRef`]: the name of an image resource
//!
//! These types carry no theming logic; see `shade_theme` for token
//! resolution.

mod color;
mod gradient;
mod image;

pub use color::Color;
pub use gradient::{Gradient, GradientStop};
pub use image::ImageRef;
