//! Store backend implementations.
//!
//! Two backends:
//! - Memory
//! - File

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
