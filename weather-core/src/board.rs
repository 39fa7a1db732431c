//! Board-Zuordnung: Board-Name → Bus-Bezeichner
//!
//! Sensor und Display hängen am I2C-Bus, der LED-Strip am SPI-Bus.
//! Unbekannte Boards sind ein fataler Startfehler.

use core::fmt;

/// Fehler: Board-Name ist nicht bekannt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedBoard;

impl fmt::Display for UnsupportedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported board")
    }
}

/// Unterstützte Boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Board {
    /// Raspberry Pi 3
    Rpi3,
    /// NXP i.MX7D Pico
    Imx7dPico,
    /// Espressif ESP32-C6-DevKitC-1
    Esp32c6DevKit,
}

impl Board {
    /// Sucht das Board anhand seines Gerätenamens
    pub fn from_name(name: &str) -> Result<Self, UnsupportedBoard> {
        match name {
            "rpi3" => Ok(Self::Rpi3),
            "imx7d_pico" => Ok(Self::Imx7dPico),
            "esp32c6_devkit" => Ok(Self::Esp32c6DevKit),
            _ => Err(UnsupportedBoard),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rpi3 => "rpi3",
            Self::Imx7dPico => "imx7d_pico",
            Self::Esp32c6DevKit => "esp32c6_devkit",
        }
    }

    /// I2C-Bus für Sensor und Display
    pub fn i2c_bus(&self) -> &'static str {
        match self {
            Self::Rpi3 | Self::Imx7dPico => "I2C1",
            Self::Esp32c6DevKit => "I2C0",
        }
    }

    /// SPI-Bus für den LED-Strip
    pub fn spi_bus(&self) -> &'static str {
        match self {
            Self::Rpi3 => "SPI0.0",
            Self::Imx7dPico => "SPI3.1",
            Self::Esp32c6DevKit => "SPI2",
        }
    }

    /// Akzeptiert das Board nur, wenn es dem Ziel-Board der Firmware entspricht
    ///
    /// Die Bus-Zuordnung kennt alle Boards, eine Firmware-Binary treibt aber
    /// nur die Peripherie ihres eigenen Chips.
    pub fn require(self, target: Board) -> Result<Self, UnsupportedBoard> {
        if self == target {
            Ok(self)
        } else {
            Err(UnsupportedBoard)
        }
    }
}

impl core::convert::TryFrom<&str> for Board {
    type Error = UnsupportedBoard;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

/// I2C-Bus für ein Board per Name
pub fn i2c_bus(board_name: &str) -> Result<&'static str, UnsupportedBoard> {
    Board::from_name(board_name).map(|board| board.i2c_bus())
}

/// SPI-Bus für ein Board per Name
pub fn spi_bus(board_name: &str) -> Result<&'static str, UnsupportedBoard> {
    Board::from_name(board_name).map(|board| board.spi_bus())
}
