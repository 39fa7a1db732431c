// Dispatch Task - Verteilt Messwerte an Display und LED-Strip
use defmt::debug;

use crate::hal::{AlphanumericDisplay, Apa102Strip};
use crate::{
    DisplayWriter, LedStripWriter, SensorReceiver, SharedI2c, StopSignal, StripSpi,
    UpdateDispatcher,
};
use weather_core::dispatch_until_shutdown;

/// Dispatch Logic - einziger Konsument des Sensor-Channels
///
/// Bis zum Shutdown übernimmt `dispatch_until_shutdown()` (Strip und Display
/// freigeben, danach `sensor_stop` setzen). Danach läuft die Schleife weiter
/// und leert den Channel, der Dispatcher verwirft die Events (Geräte detached).
pub async fn dispatch_logic<D: DisplayWriter, S: LedStripWriter>(
    mut dispatcher: UpdateDispatcher<D, S>,
    receiver: SensorReceiver,
    shutdown: &'static StopSignal,
    sensor_stop: &'static StopSignal,
) {
    dispatch_until_shutdown(&mut dispatcher, &receiver, shutdown, sensor_stop).await;

    loop {
        let reading = receiver.receive().await;
        debug!("Reading after shutdown: {}", reading);
        dispatcher.on_reading(reading);
    }
}

/// Dispatch Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `display`: initialisierte Alphanumerik-Anzeige (Temperatur)
/// - `strip`: initialisierter APA102 LED-Strip (Luftdruck)
/// - `receiver`: Channel Receiver für Messwerte
/// - `shutdown`: Signal vom Shutdown-Button
/// - `sensor_stop`: Signal an den Sensor Task
#[embassy_executor::task]
pub async fn dispatch_task(
    display: AlphanumericDisplay<SharedI2c>,
    strip: Apa102Strip<StripSpi>,
    receiver: SensorReceiver,
    shutdown: &'static StopSignal,
    sensor_stop: &'static StopSignal,
) {
    let dispatcher = UpdateDispatcher::new(display, strip);
    dispatch_logic(dispatcher, receiver, shutdown, sensor_stop).await;
}
