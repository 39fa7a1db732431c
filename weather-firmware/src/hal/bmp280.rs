// BMP280 Temperatur- und Luftdrucksensor über I2C
//
// Register-Layout und Kompensation kommen aus weather-core::bmp280.

use defmt::{error, info};
use embedded_hal::i2c::I2c;
use weather_core::bmp280::{
    CALIB_LEN, CHIP_ID, Calibration, DATA_LEN, Measurement, Mode, REG_CALIB_00, REG_CHIP_ID,
    REG_CONFIG, REG_CTRL_MEAS, REG_DATA, RawSample, config, ctrl_meas,
};
use weather_core::{DeviceError, EnvironmentSensor};

/// Oversampling ×1 für Temperatur und Druck
const OVERSAMPLING_X1: u8 = 1;
/// Standby 125 ms zwischen zwei Messungen im Normal-Modus
const STANDBY_125_MS: u8 = 0b010;
/// IIR-Filter aus
const FILTER_OFF: u8 = 0;

/// BMP280 Treiber
///
/// Läuft im Normal-Modus: der Sensor misst selbstständig,
/// jeder Lesezugriff holt die zuletzt gemessenen Rohwerte.
pub struct Bmp280<I> {
    i2c: I,
    address: u8,
    calibration: Calibration,
}

impl<I: I2c> Bmp280<I> {
    /// Initialisiert den Sensor
    ///
    /// Prüft die Chip-ID, liest die Kalibrierung und startet den Normal-Modus.
    pub fn new(mut i2c: I, address: u8) -> Result<Self, DeviceError> {
        let mut chip_id = [0u8; 1];
        i2c.write_read(address, &[REG_CHIP_ID], &mut chip_id)
            .map_err(|_| DeviceError::ReadFailed)?;
        if chip_id[0] != CHIP_ID {
            error!("BMP280: unexpected chip id {=u8:#x}", chip_id[0]);
            return Err(DeviceError::ReadFailed);
        }

        let mut calib = [0u8; CALIB_LEN];
        i2c.write_read(address, &[REG_CALIB_00], &mut calib)
            .map_err(|_| DeviceError::ReadFailed)?;
        let calibration = Calibration::from_bytes(&calib);

        i2c.write(address, &[REG_CONFIG, config(STANDBY_125_MS, FILTER_OFF)])
            .map_err(|_| DeviceError::WriteFailed)?;
        i2c.write(
            address,
            &[
                REG_CTRL_MEAS,
                ctrl_meas(OVERSAMPLING_X1, OVERSAMPLING_X1, Mode::Normal),
            ],
        )
        .map_err(|_| DeviceError::WriteFailed)?;

        info!("BMP280: ready at {=u8:#x}", address);
        Ok(Self {
            i2c,
            address,
            calibration,
        })
    }

    /// Liest Temperatur und Druck in einem Burst-Read
    pub fn measure(&mut self) -> Result<Measurement, DeviceError> {
        let mut data = [0u8; DATA_LEN];
        self.i2c
            .write_read(self.address, &[REG_DATA], &mut data)
            .map_err(|_| DeviceError::ReadFailed)?;
        Ok(self.calibration.compensate(RawSample::from_bytes(&data)))
    }
}

impl<I: I2c> EnvironmentSensor for Bmp280<I> {
    fn read_temperature(&mut self) -> Result<f32, DeviceError> {
        self.measure().map(|m| m.temperature_c)
    }

    fn read_pressure(&mut self) -> Result<f32, DeviceError> {
        self.measure().map(|m| m.pressure_hpa)
    }

    // Ein Burst-Read: beide Werte aus derselben Wandlung
    fn read_sample(&mut self) -> (Result<f32, DeviceError>, Result<f32, DeviceError>) {
        match self.measure() {
            Ok(m) => (Ok(m.temperature_c), Ok(m.pressure_hpa)),
            Err(e) => (Err(e), Err(e)),
        }
    }

    fn sleep(&mut self) -> Result<(), DeviceError> {
        self.i2c
            .write(
                self.address,
                &[
                    REG_CTRL_MEAS,
                    ctrl_meas(OVERSAMPLING_X1, OVERSAMPLING_X1, Mode::Sleep),
                ],
            )
            .map_err(|_| DeviceError::CloseFailed)
    }
}
