//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "check this course" or "generate its sheets".

pub mod generation_service;
pub mod validation_service;

pub use generation_service::{
    ArtifactKind, GenerationOptions, GenerationPlan, GenerationReport, GenerationService,
    PlannedArtifact, SheetPaths,
};
pub use validation_service::ValidationService;
