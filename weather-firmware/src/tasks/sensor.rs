// Sensor Task - Fragt den BMP280 zyklisch ab
use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};

use crate::config::SENSOR_POLL_INTERVAL_MS;
use crate::hal::Bmp280;
use crate::{EnvironmentSensor, SensorSender, SharedI2c, StopSignal};
use weather_core::{poll_sensor, release_sensor};

/// Sensor Poll Logic - Zyklus und Stop, der Rest steckt in `poll_sensor()`
///
/// - Liest alle `SENSOR_POLL_INTERVAL_MS` Temperatur und Druck
/// - Schickt beide Werte als getrennte Events an den Dispatch Task
/// - Bei `stop` wird der Sensor schlafen gelegt und die Schleife beendet
pub async fn sensor_poll_logic<S: EnvironmentSensor>(
    mut sensor: S,
    sender: SensorSender,
    stop: &'static StopSignal,
) {
    loop {
        let tick = Timer::after(Duration::from_millis(SENSOR_POLL_INTERVAL_MS));
        if let Either::Second(()) = select(tick, stop.wait()).await {
            break;
        }

        poll_sensor(&mut sensor, &sender);
    }

    release_sensor(&mut sensor);
}

/// Sensor Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `sensor`: initialisierter BMP280 am geteilten I2C-Bus
/// - `sender`: Channel Sender zum Dispatch Task
/// - `stop`: wird vom Dispatch Task nach dem Shutdown der Ausgabegeräte gesetzt
#[embassy_executor::task]
pub async fn sensor_task(
    sensor: Bmp280<SharedI2c>,
    sender: SensorSender,
    stop: &'static StopSignal,
) {
    sensor_poll_logic(sensor, sender, stop).await;
    info!("Sensor task finished");
}
