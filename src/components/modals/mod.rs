pub mod error;
pub mod helpers;
pub mod palette;

pub use error::ErrorModal;
pub use palette::{palette_layout, PaletteLayout, PaletteModal};
