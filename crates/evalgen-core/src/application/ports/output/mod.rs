//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `evalgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Sheet;
use crate::error::EvalResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `evalgen_adapters::filesystem::LocalFilesystem` (production)
/// - `evalgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `exists` is the only call validation makes; everything else happens
/// during generation.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EvalResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> EvalResult<()>;

    /// Append content to an existing file.
    fn append_file(&self, path: &Path, content: &str) -> EvalResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> EvalResult<String>;
}

/// Port for rendering sheets to disk.
///
/// Implemented by:
/// - `evalgen_adapters::writer::TextSheetWriter` (plain-text rendition)
/// - `evalgen_adapters::writer::MemorySheetWriter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SheetWriter: Send + Sync {
    /// Where a sheet requested at `requested` actually lands.
    ///
    /// Writers that produce a different format than the canonical `.docx`
    /// adjust the extension here, so overwrite checks look at the right file.
    fn output_path(&self, requested: &Path) -> PathBuf;

    /// Write `sheet`, returning the path written.
    fn write(&self, sheet: &Sheet, requested: &Path) -> EvalResult<PathBuf>;
}
