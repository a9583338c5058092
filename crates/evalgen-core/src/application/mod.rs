//! Application layer for evalgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService, GenerationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Validation rules and naming live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactKind, GenerationOptions, GenerationPlan, GenerationReport, GenerationService,
    PlannedArtifact, SheetPaths, ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SheetWriter};

pub use error::ApplicationError;
