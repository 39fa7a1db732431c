//! Regenbogen-Palette für den LED-Strip
//!
//! Die Palette tastet das Farbrad in gleichen Winkelschritten ab
//! (Hue = i * 360° / 7, volle Sättigung, voller Hellwert).
//! Alles ist `const fn`: die Palette wird zur Compile-Zeit berechnet.

use rgb::RGB8;

use crate::types::{Color, OFF, STRIP_LEN, StripFrame};

/// Die 7 Regenbogenfarben, Index 0 = Rot (Hue 0°)
pub const RAINBOW_PALETTE: StripFrame = rainbow_palette();

/// Erzeugt die Regenbogen-Palette neu
///
/// Deterministisch: liefert bei jedem Aufruf dieselben 7 Farben wie
/// [`RAINBOW_PALETTE`].
pub const fn rainbow_palette() -> StripFrame {
    let mut colors = [OFF; STRIP_LEN];
    let mut i = 0;
    while i < STRIP_LEN {
        let hue = i as f32 * 360.0 / STRIP_LEN as f32;
        colors[i] = hsv_to_rgb(hue, 1.0, 1.0);
        i += 1;
    }
    colors
}

/// Konvertiert HSV nach RGB
///
/// - `hue`: Grad, Werte außerhalb von [0, 360) werden als 0° behandelt
/// - `saturation`, `value`: werden auf [0, 1] begrenzt
///
/// Kanäle werden mit floor(x + 0.5) gerundet.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use weather_core::hsv_to_rgb;
/// assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB8 { r: 0, g: 255, b: 0 });
/// ```
pub const fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color {
    let s = clamp_unit(saturation);
    let v = clamp_unit(value) * 255.0;
    let v_byte = round_channel(v);

    // Keine Sättigung → Grauwert
    if s <= 0.0 {
        return RGB8 {
            r: v_byte,
            g: v_byte,
            b: v_byte,
        };
    }

    let hx = if hue < 0.0 || hue >= 360.0 {
        0.0
    } else {
        hue / 60.0
    };
    // hx liegt in [0, 6): Cast entspricht floor()
    let sector = hx as u8;
    let fraction = hx - sector as f32;

    let p = round_channel((1.0 - s) * v);
    let q = round_channel((1.0 - s * fraction) * v);
    let t = round_channel((1.0 - s * (1.0 - fraction)) * v);

    let (r, g, b) = match sector {
        0 => (v_byte, t, p),
        1 => (q, v_byte, p),
        2 => (p, v_byte, t),
        3 => (p, q, v_byte),
        4 => (t, p, v_byte),
        _ => (v_byte, p, q),
    };
    RGB8 { r, g, b }
}

const fn clamp_unit(x: f32) -> f32 {
    if x > 1.0 {
        1.0
    } else if x >= 0.0 {
        x
    } else {
        // auch NaN
        0.0
    }
}

// x liegt in [0, 255]
const fn round_channel(x: f32) -> u8 {
    (x + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_expected_colors() {
        let expected = [
            RGB8 { r: 255, g: 0, b: 0 },
            RGB8 { r: 255, g: 219, b: 0 },
            RGB8 { r: 73, g: 255, b: 0 },
            RGB8 { r: 0, g: 255, b: 146 },
            RGB8 { r: 0, g: 146, b: 255 },
            RGB8 { r: 73, g: 0, b: 255 },
            RGB8 { r: 255, g: 0, b: 219 },
        ];
        assert_eq!(RAINBOW_PALETTE, expected);
    }

    #[test]
    fn test_palette_regeneration_is_identical() {
        assert_eq!(rainbow_palette(), RAINBOW_PALETTE);
        assert_eq!(rainbow_palette(), rainbow_palette());
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for i in 0..STRIP_LEN {
            for j in (i + 1)..STRIP_LEN {
                assert_ne!(RAINBOW_PALETTE[i], RAINBOW_PALETTE[j]);
            }
        }
    }

    #[test]
    fn test_hsv_primary_colors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), RGB8 { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), RGB8 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hsv_without_saturation_is_gray() {
        assert_eq!(
            hsv_to_rgb(200.0, 0.0, 0.5),
            RGB8 {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_hsv_out_of_range_hue_wraps_to_red() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(-10.0, 1.0, 1.0), RGB8 { r: 255, g: 0, b: 0 });
    }
}
