//! evalgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for evalgen, the
//! course-evaluation paperwork generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           evalgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ValidationService, GenerationService)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, SheetWriter)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    evalgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, TextSheetWriter, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (CourseRecord, validate, canonical name)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use evalgen_core::domain::{CourseForm, CourseRecord, GenerationRequest, Semester, validate};
//!
//! let record = CourseRecord::from_form(
//!     CourseForm::new(Semester::Fall)
//!         .instructor("John", "Smith")
//!         .course("cst", "123", "wn123")
//!         .year("2014"),
//! );
//!
//! let result = validate(&record, &GenerationRequest::default(), |_| false);
//! assert!(result.is_valid());
//! assert_eq!(record.canonical_file_name(), "Smith_John CST 123-WN123 Fall 2014.docx");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactKind, GenerationOptions, GenerationPlan, GenerationReport, GenerationService,
        PlannedArtifact, SheetPaths, ValidationService,
        ports::{Filesystem, SheetWriter},
    };
    pub use crate::domain::{
        CourseForm, CourseRecord, Field, GenerationRequest, GenerationRequestBuilder,
        ProblemKind, Semester, Sheet, SheetKind, SpreadsheetMode, SpreadsheetRow,
        ValidationProblem, ValidationResult, canonical_file_name, validate,
    };
    pub use crate::error::{EvalError, EvalResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
