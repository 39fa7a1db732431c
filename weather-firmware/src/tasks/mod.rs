// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels und Signals
// (Sensor → Dispatch, Button → Dispatch → Sensor).

pub mod button;
pub mod dispatch;
pub mod sensor;

// Re-export Tasks für einfachen Import
pub use button::shutdown_button_task;
pub use dispatch::dispatch_task;
pub use sensor::sensor_task;
