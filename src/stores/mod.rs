//! Settings store implementations.

pub mod memory;

pub use memory::MemorySettingsStore;
