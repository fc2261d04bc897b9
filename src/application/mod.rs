//! Application layer - Use cases and port interfaces
//!
//! Contains the core operations and trait definitions
//! for external system interactions.

pub mod alert;
pub mod generate;
pub mod ports;

// Re-export use cases
pub use alert::{AlertOutcome, AlertSettings, AlertUseCase};
pub use generate::{GenerateError, GenerateOutput, GenerateSoundUseCase};
