//! Framebuffer conversion for presentation layers.
//!
//! The core never calls these; a frontend converts the RGB buffer it read at
//! the frame edge into whatever pixel format it displays.

use super::{Color, BYTES_PER_PIXEL, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Encode an RGB framebuffer as a binary PPM (P6) image
pub fn framebuffer_to_ppm(frame: &[u8]) -> Vec<u8> {
    let header = format!("P6\n{SCREEN_WIDTH} {SCREEN_HEIGHT}\n255\n");
    let mut out = Vec::with_capacity(header.len() + frame.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(frame);
    out
}

/// Pack an RGB framebuffer into 0xAARRGGBB words, one per pixel
pub fn framebuffer_to_rgba32(frame: &[u8]) -> Vec<u32> {
    frame
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|px| Color::new(px[0], px[1], px[2]).to_rgba32())
        .collect()
}
