//! System orchestration, startup, and shutdown logic.

pub mod menu_system;
pub mod telemetry;

pub use menu_system::*;
pub use telemetry::*;
