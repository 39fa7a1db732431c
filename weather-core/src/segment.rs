//! 14-Segment Darstellung für die 4-stellige Alphanumerik-Anzeige (HT16K33)
//!
//! Bit-Layout pro Stelle (u16): Segmente A..N in Bit 0..13, Dezimalpunkt in Bit 14.

/// Anzahl der Stellen
pub const DIGITS: usize = 4;

/// Dezimalpunkt einer Stelle
pub const DECIMAL_POINT: u16 = 0x4000;

pub const GLYPH_BLANK: u16 = 0x0000;
pub const GLYPH_MINUS: u16 = 0x00C0;

/// Glyphen für '0'..'9'
pub const DIGIT_GLYPHS: [u16; 10] = [
    0x0C3F, // 0
    0x0006, // 1
    0x00DB, // 2
    0x008F, // 3
    0x00E6, // 4
    0x2069, // 5
    0x00FD, // 6
    0x0007, // 7
    0x00FF, // 8
    0x00EF, // 9
];

/// Anzeige für Werte die nicht darstellbar sind: "----"
pub const OVERFLOW: [u16; DIGITS] = [GLYPH_MINUS; DIGITS];

/// Rendert einen Zahlenwert rechtsbündig
///
/// - Eine Nachkommastelle wenn sie passt (`21.5`, `-3.2`)
/// - Sonst ganzzahlig gerundet (`1013`)
/// - Zu groß, zu klein oder NaN: `----`
pub fn render_value(value: f32) -> [u16; DIGITS] {
    if !value.is_finite() {
        return OVERFLOW;
    }

    let magnitude = if value < 0.0 { -value } else { value };

    if magnitude < 1000.0 {
        let tenths = round_to_u32(magnitude * 10.0);
        let negative = value < 0.0 && tenths != 0;
        if digit_count(tenths).max(2) + usize::from(negative) <= DIGITS {
            return render_number(tenths, 1, negative);
        }
    }

    if magnitude < 10000.0 {
        let whole = round_to_u32(magnitude);
        let negative = value < 0.0 && whole != 0;
        if digit_count(whole) + usize::from(negative) <= DIGITS {
            return render_number(whole, 0, negative);
        }
    }

    OVERFLOW
}

// x ist endlich und >= 0
fn round_to_u32(x: f32) -> u32 {
    (x + 0.5) as u32
}

fn digit_count(mut number: u32) -> usize {
    let mut count = 1;
    while number >= 10 {
        number /= 10;
        count += 1;
    }
    count
}

fn render_number(mut number: u32, decimals: usize, negative: bool) -> [u16; DIGITS] {
    let mut glyphs = [GLYPH_BLANK; DIGITS];
    let mut pos = DIGITS;
    let mut emitted = 0;

    // Von rechts nach links, mindestens eine Stelle vor dem Komma
    while pos > 0 && (number > 0 || emitted <= decimals) {
        pos -= 1;
        let mut glyph = DIGIT_GLYPHS[(number % 10) as usize];
        if decimals > 0 && emitted == decimals {
            glyph |= DECIMAL_POINT;
        }
        glyphs[pos] = glyph;
        number /= 10;
        emitted += 1;
    }

    if negative && pos > 0 {
        glyphs[pos - 1] = GLYPH_MINUS;
    }
    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn d(n: usize) -> u16 {
        DIGIT_GLYPHS[n]
    }

    #[test]
    fn test_render_one_decimal() {
        assert_eq!(
            render_value(21.5),
            [GLYPH_BLANK, d(2), d(1) | DECIMAL_POINT, d(5)]
        );
    }

    #[test]
    fn test_render_negative() {
        assert_eq!(
            render_value(-3.2),
            [GLYPH_BLANK, GLYPH_MINUS, d(3) | DECIMAL_POINT, d(2)]
        );
    }

    #[test]
    fn test_render_leading_zero() {
        assert_eq!(
            render_value(0.5),
            [GLYPH_BLANK, GLYPH_BLANK, d(0) | DECIMAL_POINT, d(5)]
        );
    }

    #[test]
    fn test_render_integer_when_decimal_does_not_fit() {
        assert_eq!(render_value(1013.0), [d(1), d(0), d(1), d(3)]);
        assert_eq!(render_value(-123.4), [GLYPH_MINUS, d(1), d(2), d(3)]);
    }

    #[test]
    fn test_render_overflow() {
        assert_eq!(render_value(12345.0), OVERFLOW);
        assert_eq!(render_value(-1000.0), OVERFLOW);
        assert_eq!(render_value(f32::NAN), OVERFLOW);
        assert_eq!(render_value(f32::INFINITY), OVERFLOW);
    }

    #[test]
    fn test_render_negative_zero_has_no_sign() {
        assert_eq!(
            render_value(-0.01),
            [GLYPH_BLANK, GLYPH_BLANK, d(0) | DECIMAL_POINT, d(0)]
        );
    }
}
