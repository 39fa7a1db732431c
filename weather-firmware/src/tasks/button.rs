// Shutdown Button Task - BOOT-Button löst den geordneten Shutdown aus
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::StopSignal;
use crate::config::BUTTON_DEBOUNCE_MS;

/// Wartet auf einen Tastendruck (active low, entprellt) und setzt `shutdown`
///
/// Der Shutdown ist einmalig, danach endet der Task.
#[embassy_executor::task]
pub async fn shutdown_button_task(mut button: Input<'static>, shutdown: &'static StopSignal) {
    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if button.is_low() {
            info!("Shutdown button pressed");
            shutdown.signal(());
            return;
        }
    }
}
