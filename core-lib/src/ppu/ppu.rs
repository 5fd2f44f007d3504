/// core-lib/src/ppu/ppu.rs
use tracing::trace;

use super::color::Color;
use super::{
    BG_MODE_MASK, BYTES_PER_PIXEL, FRAMEBUFFER_SIZE, LINES_PER_FRAME, MAX_BRIGHTNESS,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::mmu::Memory;

/// Picture Processing Unit: a scanline counter driving an RGB framebuffer.
///
/// The framebuffer is not double buffered. A frame is complete when
/// [`Ppu::step`] returns `true` (the 261 -> 0 transition); read it then,
/// before the next step starts overwriting line 0.
#[derive(Debug, Clone)]
pub struct Ppu {
    scanline: u16,   // 0..=261
    bg_mode: u8,     // Background mode (0-7)
    brightness: u8,  // Master brightness (0-15)
    frame_count: u64,

    frame_buffer: Box<[u8]>,
}

impl Default for Ppu {
    fn default() -> Self {
        Self {
            scanline: 0,
            bg_mode: 0,
            brightness: MAX_BRIGHTNESS,
            frame_count: 0,
            frame_buffer: vec![0; FRAMEBUFFER_SIZE].into_boxed_slice(),
        }
    }
}

impl Ppu {
    /// Create a new PPU instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current line if visible, then advance the line counter.
    ///
    /// Returns `true` when this step wrapped the counter back to line 0.
    pub fn step(&mut self, mem: &Memory) -> bool {
        self.render_scanline(mem);
        self.scanline = (self.scanline + 1) % LINES_PER_FRAME;
        if self.scanline == 0 {
            self.frame_count += 1;
            trace!(frame = self.frame_count, "frame complete");
            true
        } else {
            false
        }
    }

    /// Write 256 pixels for the current line.
    ///
    /// Tile, palette and sprite decode from VRAM/CGRAM/OAM is not implemented;
    /// the line is filled with [`Color::test_pattern`].
    /// The pattern ignores `bg_mode` and `brightness`.
    fn render_scanline(&mut self, _mem: &Memory) {
        let line = usize::from(self.scanline);
        if line >= SCREEN_HEIGHT {
            return;
        }
        let row = line * SCREEN_WIDTH * BYTES_PER_PIXEL;
        let pixels = self.frame_buffer[row..row + SCREEN_WIDTH * BYTES_PER_PIXEL]
            .chunks_exact_mut(BYTES_PER_PIXEL);
        for (x, pixel) in pixels.enumerate() {
            pixel.copy_from_slice(&Color::test_pattern(x, line).to_bytes());
        }
    }

    /// Colour of CGRAM entry `index` (0-255)
    pub fn palette_color(mem: &Memory, index: u8) -> Color {
        let base = usize::from(index) * 2;
        let cgram = mem.cgram();
        Color::from_bgr555(u16::from_le_bytes([cgram[base], cgram[base + 1]]))
    }

    /// Return the line counter to 0 without touching the framebuffer
    pub fn reset(&mut self) {
        self.scanline = 0;
    }

    pub const fn scanline(&self) -> u16 {
        self.scanline
    }

    pub const fn is_visible_line(&self) -> bool {
        (self.scanline as usize) < SCREEN_HEIGHT
    }

    pub const fn bg_mode(&self) -> u8 {
        self.bg_mode
    }

    pub fn set_bg_mode(&mut self, mode: u8) {
        self.bg_mode = mode & BG_MODE_MASK;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
    }

    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// RGB bytes, row-major, 256x224
    pub fn frame_buffer(&self) -> &[u8] {
        &self.frame_buffer
    }

    /// RGB value of one visible pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        let i = (y * SCREEN_WIDTH + x) * BYTES_PER_PIXEL;
        Some(Color::new(
            self.frame_buffer[i],
            self.frame_buffer[i + 1],
            self.frame_buffer[i + 2],
        ))
    }
}
