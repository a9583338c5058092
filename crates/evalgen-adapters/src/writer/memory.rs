//! In-memory sheet writer for testing.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use evalgen_core::{
    application::{ApplicationError, ports::SheetWriter},
    domain::{Sheet, SheetKind},
    error::EvalResult,
};

/// Keeps every sheet instead of writing it.
#[derive(Debug, Clone, Default)]
pub struct MemorySheetWriter {
    written: Arc<RwLock<Vec<(PathBuf, Sheet)>>>,
}

impl MemorySheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in order.
    pub fn written(&self) -> Vec<(PathBuf, Sheet)> {
        self.written
            .read()
            .map(|w| w.clone())
            .unwrap_or_default()
    }

    /// The last sheet of `kind` written.
    pub fn last_of(&self, kind: SheetKind) -> Option<(PathBuf, Sheet)> {
        self.written().into_iter().rev().find(|(_, s)| s.kind == kind)
    }
}

impl SheetWriter for MemorySheetWriter {
    fn output_path(&self, requested: &Path) -> PathBuf {
        requested.to_path_buf()
    }

    fn write(&self, sheet: &Sheet, requested: &Path) -> EvalResult<PathBuf> {
        let mut written = self
            .written
            .write()
            .map_err(|_| ApplicationError::LockError)?;
        written.push((requested.to_path_buf(), sheet.clone()));
        Ok(requested.to_path_buf())
    }
}
