//! UI module for Hex Palette

pub mod colors;
pub mod spectrum;
pub mod widgets;

pub use colors::{code_color, dim_toward_bg, palette, rgb_to_hsv};
pub use widgets::{hex_key_button, nav_button, swatch_button, title_bar_button};
