// Storage layer for the events service
// Decision: In-memory only; the collection lives and dies with the process

pub mod memory;

pub use memory::EventStore;
