//! # Storage Module
//!
//! Session-scoped storage for availability slots. Nothing is written to disk;
//! the in-memory repository is the only implementation.

pub mod memory;
pub mod traits;

pub use memory::InMemorySlotRepository;
pub use traits::SlotStorage;
