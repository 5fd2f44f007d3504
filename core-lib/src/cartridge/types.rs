use super::error::CartridgeError;

/// Memory map layout declared by the cartridge header (0xFFD5 in bank 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    /// ROM at 0x8000-0xFFFF of every low bank
    LoRom,
    /// ROM at 0x0000-0xFFFF of banks 0xC0-0xFF
    HiRom,
    /// `LoROM` with the S-DD1 coprocessor map
    Sdd1LoRom,
    /// `LoROM` with the SA-1 coprocessor map
    Sa1,
    /// Extended `HiROM` (up to 8 MiB)
    ExHiRom,
}

impl TryFrom<u8> for MapMode {
    type Error = CartridgeError;

    /// Bit 4 selects fast ROM and is ignored here.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value & !0x10 {
            0x20 => Ok(Self::LoRom),
            0x21 => Ok(Self::HiRom),
            0x22 => Ok(Self::Sdd1LoRom),
            0x23 => Ok(Self::Sa1),
            0x25 => Ok(Self::ExHiRom),
            _ => Err(CartridgeError::InvalidMapMode(value)),
        }
    }
}

/// Destination region byte (0xFFD9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Japan,
    NorthAmerica,
    Europe,
    Other(u8),
}

impl From<u8> for Region {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::Japan,
            0x01 => Self::NorthAmerica,
            0x02 => Self::Europe,
            other => Self::Other(other),
        }
    }
}

/// Decode a header size exponent into KiB: `0` means absent, otherwise `1 << n`.
pub(crate) fn size_kib(exponent: u8) -> Result<u32, CartridgeError> {
    match exponent {
        0 => Ok(0),
        1..=0x0F => Ok(1 << exponent),
        _ => Err(CartridgeError::InvalidSize(exponent)),
    }
}
