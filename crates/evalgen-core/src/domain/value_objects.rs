//! Domain value objects: Semester, SpreadsheetMode.
//!
//! # Design
//!
//! Plain `Copy` values compared by value.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Semester ─────────────────────────────────────────────────────────────────

/// The academic term a course ran in.
///
/// The display form is the capitalised variant name; it appears verbatim in
/// canonical file names and sheet headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    Fall,
    Winter,
    Spring,
    Summer,
}

impl Semester {
    /// All variants, in the order an operator picks from.
    pub const ALL: [Semester; 4] = [Self::Fall, Self::Winter, Self::Spring, Self::Summer];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fall" | "fa" => Ok(Self::Fall),
            "winter" | "wi" | "wn" => Ok(Self::Winter),
            "spring" | "sp" => Ok(Self::Spring),
            "summer" | "su" => Ok(Self::Summer),
            other => Err(DomainError::UnknownSemester(other.to_string())),
        }
    }
}

// ── SpreadsheetMode ──────────────────────────────────────────────────────────

/// How the spreadsheet artifact should be produced.
///
/// Only meaningful when a spreadsheet update was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadsheetMode {
    /// No choice made yet.
    #[default]
    None,
    /// Append to a previously generated spreadsheet.
    UseExisting,
    /// Create a new spreadsheet file.
    CreateNew,
}

impl SpreadsheetMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UseExisting => "use-existing",
            Self::CreateNew => "create-new",
        }
    }
}

impl fmt::Display for SpreadsheetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpreadsheetMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "use-existing" | "existing" => Ok(Self::UseExisting),
            "create-new" | "new" => Ok(Self::CreateNew),
            other => Err(DomainError::UnknownSpreadsheetMode(other.to_string())),
        }
    }
}
