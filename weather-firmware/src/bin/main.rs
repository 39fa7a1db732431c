// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use core::cell::RefCell;

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use embedded_hal_bus::i2c::CriticalSectionDevice;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::spi::Mode as SpiMode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use weather_core::bmp280::ADDRESS_PRIMARY;
use weather_station::config::{
    BOARD_NAME, DISPLAY_BRIGHTNESS, DISPLAY_I2C_ADDRESS, I2C_FREQUENCY_KHZ, I2C_SCL_PIN,
    I2C_SDA_PIN, LEDSTRIP_BRIGHTNESS, SPI_FREQUENCY_MHZ, SPI_MOSI_PIN, SPI_SCK_PIN,
    SHUTDOWN_BUTTON_PIN, TARGET_BOARD,
};
use weather_station::hal::{AlphanumericDisplay, Apa102Strip, Bmp280};
use weather_station::tasks::{dispatch_task, sensor_task, shutdown_button_task};
use weather_station::{
    Board, DisplayWriter, SensorChannel, SharedI2cBus, StopSignal, prime_strip,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Sensor, Display und LED-Strip, startet Embassy Runtime
/// und spawnt Tasks. Initialisierungsfehler sind fatal (Panic → Backtrace).
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Weather Station Started");

    // Board-Zuordnung: unbekanntes oder fremdes Board ist ein fataler Startfehler
    let board = Board::from_name(BOARD_NAME)
        .and_then(|board| board.require(TARGET_BOARD))
        .expect("Unsupported board");
    info!(
        "Board {}: I2C {} (SDA GPIO{}, SCL GPIO{}), SPI {} (SCK GPIO{}, MOSI GPIO{})",
        board.name(),
        board.i2c_bus(),
        I2C_SDA_PIN,
        I2C_SCL_PIN,
        board.spi_bus(),
        SPI_SCK_PIN,
        SPI_MOSI_PIN
    );

    // I2C-Bus (BMP280 + HT16K33 teilen sich den Bus)
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);

    static I2C_BUS: static_cell::StaticCell<SharedI2cBus> = static_cell::StaticCell::new();
    let i2c_bus = &*I2C_BUS.init(critical_section::Mutex::new(RefCell::new(i2c)));

    // Temperatur-/Drucksensor initialisieren
    let sensor = Bmp280::new(CriticalSectionDevice::new(i2c_bus), ADDRESS_PRIMARY)
        .expect("Error initializing BMP280");
    info!("Initialized I2C BMP280");

    // 14-Segment Anzeige initialisieren
    let mut display = AlphanumericDisplay::new(
        CriticalSectionDevice::new(i2c_bus),
        DISPLAY_I2C_ADDRESS,
        DISPLAY_BRIGHTNESS,
    )
    .expect("Error initializing display");
    display
        .set_enabled(true)
        .expect("Error initializing display");
    info!("Initialized I2C Display");

    // LED-Strip initialisieren (SPI Mode 0)
    let spi = Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ))
            .with_mode(SpiMode::_0),
    )
    .expect("Failed to initialize SPI")
    .with_sck(peripherals.GPIO19)
    .with_mosi(peripherals.GPIO18);

    let mut strip = Apa102Strip::new(spi);
    prime_strip(&mut strip, LEDSTRIP_BRIGHTNESS).expect("Error initializing LED strip");
    info!("Initialized SPI LED strip");

    // Sensor-Channel erstellen (Sensor Task → Dispatch Task)
    static SENSOR_CHANNEL: static_cell::StaticCell<SensorChannel> = static_cell::StaticCell::new();
    let sensor_channel = &*SENSOR_CHANNEL.init(SensorChannel::new());

    // Stop-Signale für den geordneten Shutdown
    static SHUTDOWN: static_cell::StaticCell<StopSignal> = static_cell::StaticCell::new();
    let shutdown = &*SHUTDOWN.init(StopSignal::new());
    static SENSOR_STOP: static_cell::StaticCell<StopSignal> = static_cell::StaticCell::new();
    let sensor_stop = &*SENSOR_STOP.init(StopSignal::new());

    // BOOT-Button (GPIO9, active low)
    let button = Input::new(peripherals.GPIO9, InputConfig::default().with_pull(Pull::Up));
    info!("Shutdown button on GPIO{}", SHUTDOWN_BUTTON_PIN);

    // Spawn Dispatch Task (besitzt Display + LED-Strip)
    spawner
        .spawn(dispatch_task(
            display,
            strip,
            sensor_channel.receiver(),
            shutdown,
            sensor_stop,
        ))
        .unwrap();

    // Spawn Sensor Task (besitzt den BMP280)
    spawner
        .spawn(sensor_task(sensor, sensor_channel.sender(), sensor_stop))
        .unwrap();

    // Spawn Shutdown Button Task
    spawner
        .spawn(shutdown_button_task(button, shutdown))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
