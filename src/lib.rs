//! Terminal Sound - hear it when a terminal command fails
//!
//! This crate synthesizes a short alert tone, stores it as a WAV file, and
//! plays a sound whenever a wrapped command, shell hook, or watched event
//! stream reports a failure.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Tone synthesis, WAV serialization, trigger rules, debouncing, and config values
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (audio players, notifications, filesystem)
//! - **CLI**: Command-line interface, argument parsing, logging, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
