// HT16K33 Alphanumerik-Anzeige (4 × 14 Segmente) über I2C
//
// Die Segment-Glyphen berechnet weather-core::segment,
// der Treiber schreibt nur das Display-RAM.

use embedded_hal::i2c::I2c;
use weather_core::segment::{DIGITS, GLYPH_BLANK, render_value};
use weather_core::{DeviceError, DisplayWriter};

/// System Setup: Oszillator an/aus
const CMD_SYSTEM_SETUP: u8 = 0x20;
const OSCILLATOR_ON: u8 = 0x01;
/// Display Setup: Bit 0 = Display an, Blinken aus
const CMD_DISPLAY_SETUP: u8 = 0x80;
const DISPLAY_ON: u8 = 0x01;
/// Dimming: 16 Stufen (0-15)
const CMD_DIMMING: u8 = 0xE0;
const MAX_DIMMING: u8 = 0x0F;
/// Startadresse des Display-RAM
const DISPLAY_RAM: u8 = 0x00;

/// Alphanumerik-Anzeige (Rainbow HAT)
pub struct AlphanumericDisplay<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> AlphanumericDisplay<I> {
    /// Startet den Oszillator und setzt die Helligkeit
    ///
    /// Die Anzeige bleibt aus bis `set_enabled(true)` aufgerufen wird.
    pub fn new(i2c: I, address: u8, brightness: u8) -> Result<Self, DeviceError> {
        let mut display = Self { i2c, address };
        display.command(CMD_SYSTEM_SETUP | OSCILLATOR_ON)?;
        display.set_brightness(brightness)?;
        Ok(display)
    }

    /// Setzt die Helligkeit (0-15)
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DeviceError> {
        self.command(CMD_DIMMING | level.min(MAX_DIMMING))
    }

    fn command(&mut self, command: u8) -> Result<(), DeviceError> {
        self.i2c
            .write(self.address, &[command])
            .map_err(|_| DeviceError::WriteFailed)
    }

    /// Schreibt alle 4 Stellen (je 2 Byte, Low-Byte zuerst)
    fn write_glyphs(&mut self, glyphs: &[u16; DIGITS]) -> Result<(), DeviceError> {
        let mut buffer = [0u8; 1 + DIGITS * 2];
        buffer[0] = DISPLAY_RAM;
        for (slot, glyph) in buffer[1..].chunks_exact_mut(2).zip(glyphs) {
            slot.copy_from_slice(&glyph.to_le_bytes());
        }
        self.i2c
            .write(self.address, &buffer)
            .map_err(|_| DeviceError::WriteFailed)
    }
}

impl<I: I2c + Send> DisplayWriter for AlphanumericDisplay<I> {
    fn write_value(&mut self, value: f32) -> Result<(), DeviceError> {
        self.write_glyphs(&render_value(value))
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        self.write_glyphs(&[GLYPH_BLANK; DIGITS])
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), DeviceError> {
        let on = if enabled { DISPLAY_ON } else { 0 };
        self.command(CMD_DISPLAY_SETUP | on)
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        // Oszillator aus → Standby
        self.command(CMD_SYSTEM_SETUP)
            .map_err(|_| DeviceError::CloseFailed)
    }
}
