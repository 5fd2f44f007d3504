/// core-lib/src/ppu/color.rs
use crate::helpers::bgr555_to_rgb;

/// An 8-bit-per-channel RGB colour as stored in the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };

    /// Create a new color with the given RGB values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a CGRAM entry (15-bit BGR, little endian in memory)
    pub const fn from_bgr555(word: u16) -> Self {
        let (r, g, b) = bgr555_to_rgb(word);
        Self { r, g, b }
    }

    /// Diagnostic pattern drawn in place of background/sprite decode.
    ///
    /// Pure in (x, line): R = x + line, G = 2x, B = 2 * line, all mod 256.
    pub const fn test_pattern(x: usize, line: usize) -> Self {
        Self {
            r: ((x + line) % 256) as u8,
            g: ((x * 2) % 256) as u8,
            b: ((line * 2) % 256) as u8,
        }
    }

    /// Convert the Color to a 32-bit value (0xAARRGGBB, opaque)
    pub const fn to_rgba32(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
