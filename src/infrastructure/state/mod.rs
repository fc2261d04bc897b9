//! Trigger state infrastructure module

mod file;

pub use file::FileTriggerStateStore;
