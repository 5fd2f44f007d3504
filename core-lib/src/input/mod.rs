/// core-lib/src/input/mod.rs
use tracing::trace;

pub mod button;
pub use button::{Button, ParseButtonError};

/// Bits in one serial frame; the last four are always zero
pub const SERIAL_FRAME_BITS: u8 = 16;

/// Value read from an exhausted shift register
const EXHAUSTED_BIT: u8 = 1;

/// Joypad state: a pressed-button bitset plus the serial shift register
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    buttons: u16,
    shift: u16,
    bits_read: u8,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.buttons |= button.mask();
    }

    pub fn release(&mut self, button: Button) {
        self.buttons &= !button.mask();
    }

    pub const fn is_pressed(&self, button: Button) -> bool {
        self.buttons & button.mask() != 0
    }

    /// Press by name (case-insensitive). Unknown names are ignored.
    pub fn press_named(&mut self, name: &str) {
        match name.parse::<Button>() {
            Ok(button) => self.press(button),
            Err(err) => trace!(%err, "press ignored"),
        }
    }

    /// Release by name (case-insensitive). Unknown names are ignored.
    pub fn release_named(&mut self, name: &str) {
        match name.parse::<Button>() {
            Ok(button) => self.release(button),
            Err(err) => trace!(%err, "release ignored"),
        }
    }

    pub fn release_all(&mut self) {
        self.buttons = 0;
    }

    /// Current state as a serial frame: bit i is the i-th bit shifted out
    pub const fn serialize(&self) -> u16 {
        self.buttons
    }

    pub fn pressed_buttons(&self) -> Vec<Button> {
        Button::ALL
            .into_iter()
            .filter(|&button| self.is_pressed(button))
            .collect()
    }

    /// Snapshot the button state into the shift register
    pub fn latch(&mut self) {
        self.shift = self.serialize();
        self.bits_read = 0;
    }

    /// Shift out the next bit of the latched frame (B first)
    pub fn read_bit(&mut self) -> u8 {
        if self.bits_read >= SERIAL_FRAME_BITS {
            return EXHAUSTED_BIT;
        }
        let bit = (self.shift & 1) as u8;
        self.shift >>= 1;
        self.bits_read += 1;
        bit
    }
}

#[cfg(test)]
mod tests;
