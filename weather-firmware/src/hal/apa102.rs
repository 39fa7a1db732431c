// APA102 LED-Strip über SPI
//
// Das Protokoll-Encoding liegt in weather-core (host-testbar),
// hier passiert nur der SPI-Transfer.

use embedded_hal::spi::SpiBus;
use weather_core::apa102::{MAX_BRIGHTNESS, encode_frame};
use weather_core::{DeviceError, LedStripWriter, StripFrame};

/// APA102 LED-Strip (Rainbow HAT: 7 LEDs, BGR)
///
/// Die Helligkeit wird mit jedem Frame übertragen, `set_brightness()`
/// wirkt daher erst beim nächsten `write_frame()`.
pub struct Apa102Strip<SPI> {
    spi: SPI,
    brightness: u8,
}

impl<SPI: SpiBus> Apa102Strip<SPI> {
    /// Erstellt einen neuen Apa102Strip mit maximaler Helligkeit
    ///
    /// # Parameter
    /// - `spi`: konfigurierter SPI-Bus (Mode 0, SCK + MOSI)
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            brightness: MAX_BRIGHTNESS,
        }
    }
}

impl<SPI: SpiBus + Send> LedStripWriter for Apa102Strip<SPI> {
    fn write_frame(&mut self, frame: &StripFrame) -> Result<(), DeviceError> {
        let bytes = encode_frame(frame, self.brightness);
        self.spi
            .write(&bytes)
            .and_then(|_| self.spi.flush())
            .map_err(|_| DeviceError::WriteFailed)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), DeviceError> {
        self.brightness = level.min(MAX_BRIGHTNESS);
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.spi.flush().map_err(|_| DeviceError::CloseFailed)
    }
}
