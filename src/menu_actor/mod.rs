//! Menu-specific wiring of the resource actor: entity impl and error type.

pub mod entity;
pub mod error;

pub use error::*;
