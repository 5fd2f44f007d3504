use thiserror::Error;

/// Errors that can occur when working with cartridge images
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("ROM image is empty")]
    Empty,
    #[error("ROM image too small for an internal header: {0} bytes")]
    TooSmallForHeader(usize),
    #[error("Invalid map mode byte: {0:#04X}")]
    InvalidMapMode(u8),
    #[error("Invalid size exponent: {0:#04X}")]
    InvalidSize(u8),
}
