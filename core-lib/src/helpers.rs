/// Mask applied to every address presented on the 24-bit bus
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Split a 24-bit address into (`bank`, `offset`)
///
/// - `bank`: bits 16-23
/// - `offset`: bits 0-15
#[inline]
pub const fn split_address(addr: u32) -> (u8, u16) {
    (((addr >> 16) & 0xFF) as u8, (addr & 0xFFFF) as u16)
}

/// Join a bank byte and a 16-bit offset into a 24-bit address
#[inline]
pub const fn join_address(bank: u8, offset: u16) -> u32 {
    ((bank as u32) << 16) | offset as u32
}

/// Decode a BGR555 colour word into 8-bit (r, g, b) channels
///
/// - Bits 0-4: red
/// - Bits 5-9: green
/// - Bits 10-14: blue
/// - Bit 15: unused
#[inline]
pub(crate) const fn bgr555_to_rgb(word: u16) -> (u8, u8, u8) {
    const fn expand(channel: u16) -> u8 {
        let c = (channel & 0x1F) as u8;
        (c << 3) | (c >> 2)
    }
    (expand(word), expand(word >> 5), expand(word >> 10))
}
