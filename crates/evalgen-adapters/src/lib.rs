//! Infrastructure adapters for evalgen.
//!
//! This crate implements the ports defined in `evalgen_core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod writer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use writer::{MemorySheetWriter, TextSheetWriter};
