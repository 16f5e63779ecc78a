//! Configuration module for Hex Palette

mod state;
mod types;

pub use state::AppState;
pub use types::{Config, PaletteSettings, WindowSettings};
