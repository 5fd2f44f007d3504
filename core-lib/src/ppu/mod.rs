/// core-lib/src/ppu/mod.rs
pub mod ppu;
pub use ppu::Ppu;

pub mod color;
pub use color::Color;

pub mod frame;
pub use frame::{framebuffer_to_ppm, framebuffer_to_rgba32};

// Hardware constants
pub const SCREEN_WIDTH: usize = 256;
pub const SCREEN_HEIGHT: usize = 224; // Visible lines
pub const LINES_PER_FRAME: u16 = 262; // NTSC
pub const BYTES_PER_PIXEL: usize = 3;
pub const FRAMEBUFFER_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL;

pub const MAX_BRIGHTNESS: u8 = 0x0F;
pub const BG_MODE_MASK: u8 = 0x07;

#[cfg(test)]
mod tests;
