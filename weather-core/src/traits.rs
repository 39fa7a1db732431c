//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Sensor, Display und LED-Strip
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `Bmp280`, `AlphanumericDisplay`, `Apa102Strip` (weather-firmware)
//! - **Testing:** Mocks in weather-tests

use core::fmt;

use crate::types::StripFrame;

/// Fehler-Typ für Geräte-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    WriteFailed,
    ReadFailed,
    CloseFailed,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed => write!(f, "device write failed"),
            Self::ReadFailed => write!(f, "device read failed"),
            Self::CloseFailed => write!(f, "device close failed"),
        }
    }
}

/// Trait für die numerische Anzeige (Temperatur)
pub trait DisplayWriter: Send {
    /// Zeigt einen Zahlenwert unverändert an
    fn write_value(&mut self, value: f32) -> Result<(), DeviceError>;

    /// Löscht alle Segmente
    fn clear(&mut self) -> Result<(), DeviceError>;

    /// Schaltet die Anzeige ein oder aus
    fn set_enabled(&mut self, enabled: bool) -> Result<(), DeviceError>;

    /// Gibt die Hardware frei
    fn close(&mut self) -> Result<(), DeviceError>;
}

/// Trait für den LED-Strip (Luftdruck-Balken)
pub trait LedStripWriter: Send {
    /// Schreibt einen kompletten Frame (eine Farbe pro LED)
    ///
    /// # Fehlerbehandlung
    /// Gibt `DeviceError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_frame(&mut self, frame: &StripFrame) -> Result<(), DeviceError>;

    /// Setzt die globale Helligkeit (wirkt ab dem nächsten Frame)
    fn set_brightness(&mut self, level: u8) -> Result<(), DeviceError>;

    /// Gibt die Hardware frei
    fn close(&mut self) -> Result<(), DeviceError>;
}

/// Trait für den Umweltsensor (Temperatur + Luftdruck)
pub trait EnvironmentSensor {
    /// Temperatur in °C
    fn read_temperature(&mut self) -> Result<f32, DeviceError>;

    /// Luftdruck in hPa
    fn read_pressure(&mut self) -> Result<f32, DeviceError>;

    /// Temperatur und Luftdruck eines Abfragezyklus
    ///
    /// Standard: zwei Einzelzugriffe. Sensoren, die beide Werte in einer
    /// Messung liefern, überschreiben das mit einem einzigen Lesezugriff.
    fn read_sample(&mut self) -> (Result<f32, DeviceError>, Result<f32, DeviceError>) {
        (self.read_temperature(), self.read_pressure())
    }

    /// Versetzt den Sensor in den Sleep-Modus
    fn sleep(&mut self) -> Result<(), DeviceError>;
}
