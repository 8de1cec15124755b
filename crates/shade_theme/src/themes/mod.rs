//! Built-in themes

mod contrast;
mod main;

pub use contrast::{palette as contrast_palette, ContrastTheme};
pub use main::{palette as main_palette, MainTheme, DISPLAY_FACE};
