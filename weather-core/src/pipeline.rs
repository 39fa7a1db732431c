//! Messwert-Pipeline: Sensor → Channel → Dispatcher
//!
//! Die Embassy Tasks der Firmware sind nur dünne Hüllen um diese Funktionen.
//! Generisch über den `RawMutex`, damit sie auch auf dem Host laufen.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::dispatcher::UpdateDispatcher;
use crate::traits::{DisplayWriter, EnvironmentSensor, LedStripWriter};
use crate::types::SensorReading;

/// Ein Abfragezyklus: Temperatur, dann Luftdruck in den Channel
///
/// Lesefehler werden geloggt und übersprungen. Ist die Queue voll, wird der
/// Messwert verworfen statt zu warten.
///
/// Gibt die Anzahl verworfener Messwerte zurück.
pub fn poll_sensor<S, M, const N: usize>(
    sensor: &mut S,
    sender: &Sender<'_, M, SensorReading, N>,
) -> usize
where
    S: EnvironmentSensor,
    M: RawMutex,
{
    let (temperature, pressure) = sensor.read_sample();
    let mut dropped = 0;

    match temperature {
        Ok(value) => dropped += publish(sender, SensorReading::Temperature(value)),
        Err(e) => warn!("Failed to read temperature: {}", e),
    }
    match pressure {
        Ok(value) => dropped += publish(sender, SensorReading::Pressure(value)),
        Err(e) => warn!("Failed to read pressure: {}", e),
    }

    dropped
}

fn publish<M: RawMutex, const N: usize>(
    sender: &Sender<'_, M, SensorReading, N>,
    reading: SensorReading,
) -> usize {
    if sender.try_send(reading).is_err() {
        warn!("Sensor queue full, dropping {:?}", reading);
        1
    } else {
        0
    }
}

/// Legt den Sensor schlafen (letzter Schritt des Shutdowns)
pub fn release_sensor<S: EnvironmentSensor>(sensor: &mut S) {
    match sensor.sleep() {
        Ok(()) => info!("Sensor released"),
        Err(e) => error!("Error closing sensors: {}", e),
    }
}

/// Verteilt Messwerte bis zum Shutdown-Signal
///
/// Wartet gleichzeitig auf den nächsten Messwert und auf `shutdown`.
/// Bereits wartende Messwerte werden vor dem Shutdown zugestellt.
///
/// Beim Shutdown: erst `dispatcher.shutdown()` (Strip, dann Display),
/// danach `sensor_stop` setzen, damit der Sensor als letztes freigegeben wird.
pub async fn dispatch_until_shutdown<D, S, M, const N: usize>(
    dispatcher: &mut UpdateDispatcher<D, S>,
    receiver: &Receiver<'_, M, SensorReading, N>,
    shutdown: &Signal<M, ()>,
    sensor_stop: &Signal<M, ()>,
) where
    D: DisplayWriter,
    S: LedStripWriter,
    M: RawMutex,
{
    loop {
        match select(receiver.receive(), shutdown.wait()).await {
            Either::First(reading) => {
                debug!("Reading received: {:?}", reading);
                dispatcher.on_reading(reading);
            }
            Either::Second(()) => {
                info!("Shutdown requested, releasing peripherals");
                dispatcher.shutdown();
                sensor_stop.signal(());
                return;
            }
        }
    }
}
