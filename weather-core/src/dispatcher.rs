//! Update Dispatcher
//!
//! Verteilt Sensor-Messwerte an die Ausgabegeräte:
//! - Temperatur → Display (unverändert)
//! - Luftdruck → ColorMapper → LED-Strip
//!
//! Gerätefehler werden geloggt und verworfen, damit ein fehlgeschlagener
//! Schreibzugriff nie die folgenden Updates blockiert.

use rgb::RGB8;

use crate::logic::map_pressure_to_frame;
use crate::traits::{DeviceError, DisplayWriter, LedStripWriter};
use crate::types::{OFF, STRIP_LEN, SensorReading, StripFrame};

/// Frame beim Hochfahren: alle LEDs rot
pub const STARTUP_FRAME: StripFrame = [RGB8 { r: 255, g: 0, b: 0 }; STRIP_LEN];

/// Bereitet den LED-Strip vor: Helligkeit setzen, Startframe zeigen
///
/// Der Startframe wird zweimal geschrieben: APA102-Strips übernehmen den
/// ersten Frame nach dem Einschalten nicht zuverlässig.
pub fn prime_strip<S: LedStripWriter>(strip: &mut S, brightness: u8) -> Result<(), DeviceError> {
    strip.set_brightness(brightness)?;
    strip.write_frame(&STARTUP_FRAME)?;
    strip.write_frame(&STARTUP_FRAME)?;
    Ok(())
}

/// Dispatcher für Sensor-Events
///
/// Besitzt Display und LED-Strip exklusiv. Pro Gerät zwei Zustände:
/// - **attached** (`Some`): Schreibzugriffe werden versucht
/// - **detached** (`None`): Events für dieses Gerät werden verworfen
///
/// `&mut self` serialisiert die Schreibzugriffe pro Gerät.
/// Beim Drop werden beide Geräte über [`shutdown`](Self::shutdown) freigegeben.
pub struct UpdateDispatcher<D, S>
where
    D: DisplayWriter,
    S: LedStripWriter,
{
    display: Option<D>,
    strip: Option<S>,
}

impl<D, S> UpdateDispatcher<D, S>
where
    D: DisplayWriter,
    S: LedStripWriter,
{
    /// Erstellt einen Dispatcher mit beiden Geräten im Zustand attached
    pub fn new(display: D, strip: S) -> Self {
        Self {
            display: Some(display),
            strip: Some(strip),
        }
    }

    /// Einstiegspunkt für jeden neuen Messwert
    ///
    /// Gibt nie einen Fehler zurück.
    pub fn on_reading(&mut self, reading: SensorReading) {
        match reading {
            SensorReading::Temperature(value) => self.update_temperature_display(value),
            SensorReading::Pressure(value) => self.update_barometer_strip(value),
        }
    }

    fn update_temperature_display(&mut self, temperature: f32) {
        let Some(display) = self.display.as_mut() else {
            debug!("Display detached, dropping temperature {}", temperature);
            return;
        };

        debug!("Updating display: {}", temperature);
        if let Err(e) = display.write_value(temperature) {
            error!("Error updating display: {}", e);
        }
    }

    fn update_barometer_strip(&mut self, pressure: f32) {
        let Some(strip) = self.strip.as_mut() else {
            debug!("LED strip detached, dropping pressure {}", pressure);
            return;
        };

        let frame = map_pressure_to_frame(pressure);
        if let Err(e) = strip.write_frame(&frame) {
            error!("Error updating LED strip: {}", e);
        }
    }

    /// Trennt das Display ab und gibt es an den Aufrufer zurück
    pub fn detach_display(&mut self) -> Option<D> {
        self.display.take()
    }

    /// Trennt den LED-Strip ab und gibt ihn an den Aufrufer zurück
    pub fn detach_strip(&mut self) -> Option<S> {
        self.strip.take()
    }

    pub fn is_display_attached(&self) -> bool {
        self.display.is_some()
    }

    pub fn is_strip_attached(&self) -> bool {
        self.strip.is_some()
    }

    /// Gibt beide Geräte frei (best-effort)
    ///
    /// Reihenfolge umgekehrt zur Initialisierung: erst LED-Strip, dann Display.
    /// Jeder Schritt wird versucht, Fehler werden nur geloggt. Danach sind
    /// beide Geräte detached. Mehrfacher Aufruf ist harmlos.
    pub fn shutdown(&mut self) {
        if let Some(mut strip) = self.strip.take() {
            if let Err(e) = strip.write_frame(&[OFF; STRIP_LEN]) {
                error!("Error clearing LED strip: {}", e);
            }
            if let Err(e) = strip.set_brightness(0) {
                error!("Error dimming LED strip: {}", e);
            }
            match strip.close() {
                Ok(()) => info!("LED strip released"),
                Err(e) => error!("Error closing LED strip: {}", e),
            }
        }

        if let Some(mut display) = self.display.take() {
            if let Err(e) = display.clear() {
                error!("Error clearing display: {}", e);
            }
            if let Err(e) = display.set_enabled(false) {
                error!("Error disabling display: {}", e);
            }
            match display.close() {
                Ok(()) => info!("Display released"),
                Err(e) => error!("Error closing display: {}", e),
            }
        }
    }
}

impl<D, S> Drop for UpdateDispatcher<D, S>
where
    D: DisplayWriter,
    S: LedStripWriter,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}
