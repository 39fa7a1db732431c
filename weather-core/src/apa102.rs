//! APA102 Protokoll-Encoding
//!
//! Ein SPI-Transfer pro Frame:
//! - Start-Frame: 4 × 0x00
//! - Pro LED: `0b111` + 5 Bit Helligkeit, dann Blau, Grün, Rot (BGR)
//! - End-Frame: 4 × 0xFF (reicht für bis zu 64 LEDs)

use crate::types::{STRIP_LEN, StripFrame};

/// Maximale globale Helligkeit (5 Bit)
pub const MAX_BRIGHTNESS: u8 = 31;

const START_FRAME_LEN: usize = 4;
const END_FRAME_LEN: usize = 4;
const LED_FRAME_LEN: usize = 4;

/// Gesamtlänge eines SPI-Transfers für den Strip
pub const APA102_FRAME_BYTES: usize = START_FRAME_LEN + STRIP_LEN * LED_FRAME_LEN + END_FRAME_LEN;

/// Kodiert einen Strip-Frame in den SPI-Bytestrom
///
/// Helligkeiten über [`MAX_BRIGHTNESS`] werden begrenzt.
pub fn encode_frame(frame: &StripFrame, brightness: u8) -> [u8; APA102_FRAME_BYTES] {
    let mut out = [0u8; APA102_FRAME_BYTES];
    let header = 0xE0 | brightness.min(MAX_BRIGHTNESS);

    for (led, color) in out[START_FRAME_LEN..START_FRAME_LEN + STRIP_LEN * LED_FRAME_LEN]
        .chunks_exact_mut(LED_FRAME_LEN)
        .zip(frame.iter())
    {
        led.copy_from_slice(&[header, color.b, color.g, color.r]);
    }

    out[APA102_FRAME_BYTES - END_FRAME_LEN..].fill(0xFF);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OFF;
    use rgb::RGB8;

    #[test]
    fn test_encode_start_and_end_frames() {
        let bytes = encode_frame(&[OFF; STRIP_LEN], 1);
        assert_eq!(&bytes[..4], &[0x00; 4]);
        assert_eq!(&bytes[APA102_FRAME_BYTES - 4..], &[0xFF; 4]);
    }

    #[test]
    fn test_encode_uses_bgr_order() {
        let mut frame = [OFF; STRIP_LEN];
        frame[0] = RGB8 { r: 1, g: 2, b: 3 };
        let bytes = encode_frame(&frame, 31);
        assert_eq!(&bytes[4..8], &[0xFF, 3, 2, 1]);
        assert_eq!(&bytes[8..12], &[0xFF, 0, 0, 0]);
    }

    #[test]
    fn test_encode_clamps_brightness() {
        let bytes = encode_frame(&[OFF; STRIP_LEN], 200);
        assert_eq!(bytes[4], 0xE0 | MAX_BRIGHTNESS);
        let bytes = encode_frame(&[OFF; STRIP_LEN], 0);
        assert_eq!(bytes[4], 0xE0);
    }
}
