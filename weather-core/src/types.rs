//! Core Types für die Wetterstation
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Farbe einer einzelnen LED
pub type Color = RGB8;

/// Ausgeschaltete LED (Schwarz)
pub const OFF: Color = RGB8 { r: 0, g: 0, b: 0 };

/// Anzahl der LEDs im Strip (Rainbow HAT: 7 APA102 LEDs)
pub const STRIP_LEN: usize = 7;

/// Ein kompletter Strip-Frame: eine Farbe pro physischer LED
///
/// Index 0..6 entspricht 1:1 der LED-Position auf dem Strip.
/// Wird bei jedem Update atomar an den Treiber geschrieben.
pub type StripFrame = [Color; STRIP_LEN];

/// Ein Messwert vom Umweltsensor
///
/// Der Dispatcher matcht direkt auf die Variante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading {
    /// Umgebungstemperatur in °C
    Temperature(f32),
    /// Luftdruck in hPa
    Pressure(f32),
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReading {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorReading::Temperature(v) => defmt::write!(fmt, "Temperature({} C)", v),
            SensorReading::Pressure(v) => defmt::write!(fmt, "Pressure({} hPa)", v),
        }
    }
}
