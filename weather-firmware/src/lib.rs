// Library-Root: Treiber, Tasks und Konfiguration der Wetterstation
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von weather-core
pub use weather_core::{
    Board, DisplayWriter, EnvironmentSensor, LedStripWriter, SensorReading, UpdateDispatcher,
    prime_strip,
};

use core::cell::RefCell;

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;
use embedded_hal_bus::i2c::CriticalSectionDevice;
use esp_hal::Blocking;

use crate::config::SENSOR_CHANNEL_CAPACITY;

// ============================================================================
// Type-Aliase für Bus- und Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, SensorReading, 4>
// Nutze:  SensorSender

/// I2C-Treiber des ESP32-C6 (blocking)
pub type I2cBus = esp_hal::i2c::master::I2c<'static, Blocking>;

/// Geteilter I2C-Bus: BMP280 und HT16K33 hängen am selben Bus
pub type SharedI2cBus = critical_section::Mutex<RefCell<I2cBus>>;

/// Handle auf den geteilten I2C-Bus (ein Handle pro Gerät)
pub type SharedI2c = CriticalSectionDevice<'static, I2cBus>;

/// SPI-Treiber für den LED-Strip (blocking)
pub type StripSpi = esp_hal::spi::master::Spi<'static, Blocking>;

/// Channel für Messwerte (Sensor Task → Dispatch Task)
/// - 4: Nachrichten-Kapazität (2 Abfragezyklen)
pub type SensorChannel = Channel<NoopRawMutex, SensorReading, SENSOR_CHANNEL_CAPACITY>;

/// Sender für Messwerte (Sensor Task)
pub type SensorSender = Sender<'static, NoopRawMutex, SensorReading, SENSOR_CHANNEL_CAPACITY>;

/// Receiver für Messwerte (Dispatch Task)
pub type SensorReceiver = Receiver<'static, NoopRawMutex, SensorReading, SENSOR_CHANNEL_CAPACITY>;

/// Einmaliges Stop-Signal
/// - Button Task → Dispatch Task (Shutdown starten)
/// - Dispatch Task → Sensor Task (Sensor als letztes freigeben)
pub type StopSignal = Signal<NoopRawMutex, ()>;
