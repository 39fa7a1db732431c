//! Pure Business Logic Functions
//!
//! Luftdruck → LED-Balken. Keine Hardware-Dependencies (testbar!)

use crate::palette::RAINBOW_PALETTE;
use crate::types::{OFF, STRIP_LEN, StripFrame};

/// Luftdruck-Bereich in hPa, über den der Balken skaliert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureRange {
    pub low: f32,
    pub high: f32,
}

/// Barometer-Bereich: 965 hPa (Tief) bis 1035 hPa (Hoch)
pub const PRESSURE_RANGE: PressureRange = PressureRange {
    low: 965.0,
    high: 1035.0,
};

impl PressureRange {
    /// Relative Position im Bereich, unbegrenzt (kann < 0 oder > 1 sein)
    pub fn normalize(&self, pressure: f32) -> f32 {
        (pressure - self.low) / (self.high - self.low)
    }

    /// Anzahl der leuchtenden LEDs: ceil(7 * t), begrenzt auf [0, 7]
    ///
    /// NaN ergibt 0 (alle LEDs aus).
    pub fn lit_count(&self, pressure: f32) -> usize {
        let scaled = STRIP_LEN as f32 * self.normalize(pressure);

        if scaled.is_nan() || scaled <= 0.0 {
            return 0;
        }
        if scaled >= STRIP_LEN as f32 {
            return STRIP_LEN;
        }

        // ceil() für 0 < scaled < 7
        let whole = scaled as usize;
        if (whole as f32) < scaled {
            whole + 1
        } else {
            whole
        }
    }
}

/// Berechnet den Strip-Frame für einen Luftdruck-Wert
///
/// Füllt von der höchsten LED-Position abwärts: je höher der Druck,
/// desto mehr LEDs leuchten (Balkenanzeige). Jede leuchtende LED bekommt
/// die Palettenfarbe ihrer Position.
///
/// # Beispiele
///
/// ```
/// # use weather_core::{map_pressure_to_frame, OFF};
/// let frame = map_pressure_to_frame(1000.0); // t = 0.5 → 4 LEDs
/// assert!(frame[..3].iter().all(|c| *c == OFF));
/// assert!(frame[3..].iter().all(|c| *c != OFF));
/// ```
pub fn map_pressure_to_frame(pressure: f32) -> StripFrame {
    let lit = PRESSURE_RANGE.lit_count(pressure);

    let mut frame = [OFF; STRIP_LEN];
    for i in 0..lit {
        let ri = STRIP_LEN - 1 - i;
        frame[ri] = RAINBOW_PALETTE[ri];
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_positions(frame: &StripFrame) -> usize {
        frame.iter().filter(|c| **c != OFF).count()
    }

    #[test]
    fn test_low_bound_is_all_off() {
        assert_eq!(map_pressure_to_frame(965.0), [OFF; STRIP_LEN]);
    }

    #[test]
    fn test_high_bound_is_full_palette() {
        assert_eq!(map_pressure_to_frame(1035.0), RAINBOW_PALETTE);
    }

    #[test]
    fn test_midpoint_lights_upper_four() {
        let frame = map_pressure_to_frame(1000.0);
        assert_eq!(&frame[..3], &[OFF; 3]);
        assert_eq!(&frame[3..], &RAINBOW_PALETTE[3..]);
    }

    #[test]
    fn test_lit_count_steps() {
        assert_eq!(PRESSURE_RANGE.lit_count(966.0), 1);
        assert_eq!(PRESSURE_RANGE.lit_count(980.0), 2);
        assert_eq!(PRESSURE_RANGE.lit_count(990.0), 3);
        assert_eq!(PRESSURE_RANGE.lit_count(1010.0), 5);
        assert_eq!(PRESSURE_RANGE.lit_count(1020.0), 6);
        assert_eq!(PRESSURE_RANGE.lit_count(1034.0), 7);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(lit_positions(&map_pressure_to_frame(900.0)), 0);
        assert_eq!(lit_positions(&map_pressure_to_frame(1100.0)), STRIP_LEN);
        assert_eq!(lit_positions(&map_pressure_to_frame(f32::NEG_INFINITY)), 0);
        assert_eq!(map_pressure_to_frame(f32::INFINITY), RAINBOW_PALETTE);
    }

    #[test]
    fn test_nan_is_all_off() {
        assert_eq!(map_pressure_to_frame(f32::NAN), [OFF; STRIP_LEN]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(PRESSURE_RANGE.normalize(965.0), 0.0);
        assert_eq!(PRESSURE_RANGE.normalize(1000.0), 0.5);
        assert_eq!(PRESSURE_RANGE.normalize(1035.0), 1.0);
        assert!(PRESSURE_RANGE.normalize(930.0) < 0.0);
    }
}
