/// core-lib/src/cartridge/mod.rs
use tracing::{debug, instrument};

pub mod error;
pub mod types;

pub use error::CartridgeError;
pub use types::{MapMode, Region};

/// Size of the header some copier devices prepend to dumps
pub const COPIER_HEADER_SIZE: usize = 512;
/// ROM is split into banks of this size, each mapped at offset 0x8000
pub const ROM_BANK_SIZE: usize = 0x8000;
/// Offset of the internal `LoROM` header inside the stored image
pub const LOROM_HEADER_OFFSET: usize = 0x7FC0;
const TITLE_LEN: usize = 21;

/// Returns true when `len` indicates a 512-byte copier header
pub const fn has_copier_header(len: usize) -> bool {
    len % 1024 == COPIER_HEADER_SIZE
}

/// A cartridge image split into fixed 32 KiB banks
#[derive(Debug, Clone, Default)]
pub struct RomImage {
    banks: Vec<Vec<u8>>,
    len: usize,
    copier_header: bool,
}

impl RomImage {
    /// Build an image from a raw dump, stripping a copier header when present.
    ///
    /// # Errors
    /// Returns [`CartridgeError::Empty`] if no bytes remain after stripping.
    #[instrument(level = "debug", skip(data), fields(len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let copier_header = has_copier_header(data.len());
        let stored = if copier_header {
            &data[COPIER_HEADER_SIZE..]
        } else {
            data
        };
        if stored.is_empty() {
            return Err(CartridgeError::Empty);
        }
        let banks: Vec<Vec<u8>> = stored.chunks(ROM_BANK_SIZE).map(<[u8]>::to_vec).collect();
        debug!(
            stored = stored.len(),
            banks = banks.len(),
            copier_header,
            "ROM image partitioned"
        );
        Ok(Self {
            banks,
            len: stored.len(),
            copier_header,
        })
    }

    /// Number of 32 KiB banks (the last one may be short)
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    pub fn bank(&self, index: usize) -> Option<&[u8]> {
        self.banks.get(index).map(Vec::as_slice)
    }

    /// Stored length, after any copier header was removed
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a copier header was stripped on load
    pub const fn had_copier_header(&self) -> bool {
        self.copier_header
    }

    /// Byte at a linear offset of the stored image
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.banks
            .get(offset / ROM_BANK_SIZE)
            .and_then(|bank| bank.get(offset % ROM_BANK_SIZE))
            .copied()
    }

    fn word(&self, offset: usize) -> Option<u16> {
        Some(u16::from_le_bytes([self.byte(offset)?, self.byte(offset + 1)?]))
    }

    /// Parse the internal `LoROM` header
    ///
    /// # Errors
    /// Fails if the image is shorter than one bank or a header field is malformed.
    pub fn header(&self) -> Result<RomHeader, CartridgeError> {
        RomHeader::parse(self)
    }
}

/// Internal cartridge header found at the end of the first `LoROM` bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomHeader {
    pub title: String,
    pub map_mode: MapMode,
    pub fast_rom: bool,
    pub cartridge_type: u8,
    pub rom_size_kib: u32,
    pub sram_size_kib: u32,
    pub region: Region,
    pub version: u8,
    pub checksum_complement: u16,
    pub checksum: u16,
}

impl RomHeader {
    fn parse(rom: &RomImage) -> Result<Self, CartridgeError> {
        if rom.len() < ROM_BANK_SIZE {
            return Err(CartridgeError::TooSmallForHeader(rom.len()));
        }
        let base = LOROM_HEADER_OFFSET;
        let field = |off: usize| rom.byte(base + off).unwrap_or(0);

        let title_bytes: Vec<u8> = (0..TITLE_LEN).map(field).collect();
        let title = String::from_utf8_lossy(&title_bytes)
            .trim_end_matches(['\0', ' '])
            .to_owned();
        let mode_byte = field(0x15);

        Ok(Self {
            title,
            map_mode: MapMode::try_from(mode_byte)?,
            fast_rom: mode_byte & 0x10 != 0,
            cartridge_type: field(0x16),
            rom_size_kib: types::size_kib(field(0x17))?,
            sram_size_kib: types::size_kib(field(0x18))?,
            region: Region::from(field(0x19)),
            version: field(0x1B),
            checksum_complement: rom.word(base + 0x1C).unwrap_or(0),
            checksum: rom.word(base + 0x1E).unwrap_or(0),
        })
    }

    /// A well-formed header stores the checksum alongside its bitwise complement
    pub const fn checksum_pair_valid(&self) -> bool {
        self.checksum ^ self.checksum_complement == 0xFFFF
    }
}
