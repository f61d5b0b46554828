//! Storage layer
//!
//! Records live only in process memory and are discarded on exit.

pub mod memory;

pub use memory::MemoryRepositoryStore;
