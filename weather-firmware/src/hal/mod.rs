// Hardware Abstraction Layer (HAL) Module
//
// Treiber für die drei Geräte der Wetterstation. Jeder Treiber
// implementiert einen Trait aus weather-core, die Logik bleibt testbar.

pub mod apa102;
pub mod bmp280;
pub mod ht16k33;

pub use apa102::Apa102Strip;
pub use bmp280::Bmp280;
pub use ht16k33::AlphanumericDisplay;
