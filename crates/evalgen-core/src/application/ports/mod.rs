//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `evalgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence probe and plain file IO
//!   - `SheetWriter`: turns a [`Sheet`](crate::domain::Sheet) into a document
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, SheetWriter};

#[cfg(test)]
pub use output::{MockFilesystem, MockSheetWriter};
