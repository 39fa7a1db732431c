// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use weather_core::Board;

// ============================================================================
// Board Konfiguration
// ============================================================================

/// Board-Name für die Bus-Zuordnung
/// Wird zur Build-Zeit aus der Environment Variable WEATHER_BOARD geladen
/// (siehe .env.example), Standard ist das ESP32-C6 DevKit
pub const BOARD_NAME: &str = match option_env!("WEATHER_BOARD") {
    Some(name) => name,
    None => "esp32c6_devkit",
};

/// Board, für das diese Firmware gebaut ist
/// main() nutzt fest I2C0 und SPI2, jedes andere `WEATHER_BOARD` bricht den Start ab
pub const TARGET_BOARD: Board = Board::Esp32c6DevKit;

// ============================================================================
// I2C Konfiguration (BMP280 + HT16K33)
// ============================================================================
//
// Die Pin-Nummern werden nur geloggt. main() bindet die Peripherie fest
// (GPIO6/7 für I2C, GPIO19/18 für SPI, GPIO9 für den Button): bei einer
// Änderung hier muss main() mitgezogen werden.

/// GPIO-Pin für I2C SDA
pub const I2C_SDA_PIN: u8 = 6;

/// GPIO-Pin für I2C SCL
pub const I2C_SCL_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz
pub const I2C_FREQUENCY_KHZ: u32 = 400;

/// I2C-Adresse der Alphanumerik-Anzeige (HT16K33)
pub const DISPLAY_I2C_ADDRESS: u8 = 0x70;

/// Helligkeit der Anzeige (0-15)
pub const DISPLAY_BRIGHTNESS: u8 = 15;

// ============================================================================
// SPI Konfiguration (APA102 LED-Strip)
// ============================================================================

/// GPIO-Pin für SPI SCK (APA102 CI)
pub const SPI_SCK_PIN: u8 = 19;

/// GPIO-Pin für SPI MOSI (APA102 DI)
pub const SPI_MOSI_PIN: u8 = 18;

/// SPI Taktfrequenz in MHz
pub const SPI_FREQUENCY_MHZ: u32 = 1;

/// Helligkeits-Level für den LED-Strip (0-31)
/// Minimal, die APA102 LEDs sind sehr hell
pub const LEDSTRIP_BRIGHTNESS: u8 = 1;

// ============================================================================
// Sensor Konfiguration
// ============================================================================

/// Abfrage-Intervall des BMP280 in Millisekunden
pub const SENSOR_POLL_INTERVAL_MS: u64 = 200;

/// Kapazität des Messwert-Channels (Sensor → Dispatcher)
pub const SENSOR_CHANNEL_CAPACITY: usize = 4;

// ============================================================================
// Shutdown Konfiguration
// ============================================================================

/// GPIO-Pin des BOOT-Buttons (active low), löst den Shutdown aus
pub const SHUTDOWN_BUTTON_PIN: u8 = 9;

/// Entprellzeit für den Button in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
