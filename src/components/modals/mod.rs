pub mod command_palette;
pub mod helpers;

pub use command_palette::{palette_layout, CommandPaletteModal, PaletteLayout};
