//! BMP280 Register und Kompensation
//!
//! Reine Rechenlogik ohne Bus-Zugriff. Der I2C-Treiber in der Firmware
//! liest die Rohbytes und ruft diese Funktionen auf.
//! Formeln: Bosch BMP280 Datasheet, Kapitel 8.1 (Floating Point).

/// I2C-Adresse bei SDO = High (Rainbow HAT)
pub const ADDRESS_PRIMARY: u8 = 0x77;
/// I2C-Adresse bei SDO = Low
pub const ADDRESS_SECONDARY: u8 = 0x76;

pub const REG_CHIP_ID: u8 = 0xD0;
pub const REG_RESET: u8 = 0xE0;
pub const REG_CTRL_MEAS: u8 = 0xF4;
pub const REG_CONFIG: u8 = 0xF5;
pub const REG_CALIB_00: u8 = 0x88;
pub const REG_DATA: u8 = 0xF7;

pub const CHIP_ID: u8 = 0x58;
pub const RESET_COMMAND: u8 = 0xB6;

pub const CALIB_LEN: usize = 24;
pub const DATA_LEN: usize = 6;

/// Betriebsmodus (Bits 0..1 in ctrl_meas)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Sleep = 0b00,
    Forced = 0b01,
    Normal = 0b11,
}

/// Wert für das ctrl_meas Register
///
/// `osrs_t` / `osrs_p`: Oversampling-Code (1 = ×1 ... 5 = ×16)
pub const fn ctrl_meas(osrs_t: u8, osrs_p: u8, mode: Mode) -> u8 {
    ((osrs_t & 0x07) << 5) | ((osrs_p & 0x07) << 2) | mode as u8
}

/// Wert für das config Register
///
/// `t_sb`: Standby-Code, `filter`: IIR-Filter-Code
pub const fn config(t_sb: u8, filter: u8) -> u8 {
    ((t_sb & 0x07) << 5) | ((filter & 0x07) << 2)
}

/// Werkskalibrierung aus den Registern 0x88..0x9F
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

/// Rohwerte des ADC (je 20 Bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample {
    pub pressure: u32,
    pub temperature: u32,
}

/// Kompensierter Messwert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// °C
    pub temperature_c: f32,
    /// hPa
    pub pressure_hpa: f32,
}

impl RawSample {
    /// Dekodiert die Register 0xF7..0xFC (press_msb .. temp_xlsb)
    pub fn from_bytes(data: &[u8; DATA_LEN]) -> Self {
        let unpack = |msb: u8, lsb: u8, xlsb: u8| {
            (u32::from(msb) << 12) | (u32::from(lsb) << 4) | (u32::from(xlsb) >> 4)
        };
        Self {
            pressure: unpack(data[0], data[1], data[2]),
            temperature: unpack(data[3], data[4], data[5]),
        }
    }
}

impl Calibration {
    /// Dekodiert die 24 Kalibrier-Bytes (Little Endian)
    pub fn from_bytes(data: &[u8; CALIB_LEN]) -> Self {
        let u = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
        let s = |i: usize| i16::from_le_bytes([data[i], data[i + 1]]);
        Self {
            dig_t1: u(0),
            dig_t2: s(2),
            dig_t3: s(4),
            dig_p1: u(6),
            dig_p2: s(8),
            dig_p3: s(10),
            dig_p4: s(12),
            dig_p5: s(14),
            dig_p6: s(16),
            dig_p7: s(18),
            dig_p8: s(20),
            dig_p9: s(22),
        }
    }

    /// Feinauflösende Temperatur (t_fine), Basis für beide Kompensationen
    fn t_fine(&self, raw_temperature: u32) -> f64 {
        let adc_t = f64::from(raw_temperature);
        let t1 = f64::from(self.dig_t1);
        let v1 = (adc_t / 16384.0 - t1 / 1024.0) * f64::from(self.dig_t2);
        let d = adc_t / 131072.0 - t1 / 8192.0;
        let v2 = d * d * f64::from(self.dig_t3);
        v1 + v2
    }

    /// Rechnet Rohwerte in °C und hPa um
    ///
    /// Liefert 0 hPa wenn die Kalibrierung ungültig ist (Division durch 0).
    pub fn compensate(&self, raw: RawSample) -> Measurement {
        let t_fine = self.t_fine(raw.temperature);
        let temperature_c = t_fine / 5120.0;

        let mut v1 = t_fine / 2.0 - 64000.0;
        let mut v2 = v1 * v1 * f64::from(self.dig_p6) / 32768.0;
        v2 += v1 * f64::from(self.dig_p5) * 2.0;
        v2 = v2 / 4.0 + f64::from(self.dig_p4) * 65536.0;
        v1 = (f64::from(self.dig_p3) * v1 * v1 / 524288.0 + f64::from(self.dig_p2) * v1) / 524288.0;
        v1 = (1.0 + v1 / 32768.0) * f64::from(self.dig_p1);

        let pressure_pa = if v1 == 0.0 {
            0.0
        } else {
            let mut p = 1048576.0 - f64::from(raw.pressure);
            p = (p - v2 / 4096.0) * 6250.0 / v1;
            let v1 = f64::from(self.dig_p9) * p * p / 2147483648.0;
            let v2 = p * f64::from(self.dig_p8) / 32768.0;
            p + (v1 + v2 + f64::from(self.dig_p7)) / 16.0
        };

        Measurement {
            temperature_c: temperature_c as f32,
            pressure_hpa: (pressure_pa / 100.0) as f32,
        }
    }
}
