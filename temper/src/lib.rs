pub mod cli;
pub mod color;
pub mod config;
pub mod css;
pub mod error;
pub mod palette;
pub mod scheme;
pub mod theme;

pub use color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex, normalize_hex};
pub use error::{Result, ThemeError};
pub use palette::{ColorRamp, Shade, generate_palette};
pub use scheme::{ColorScheme, Composer, ThemeColors, UiSlot, compose_scheme};
pub use theme::Theme;
