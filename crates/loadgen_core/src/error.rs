//! Engine error taxonomy.
//!
//! This module provides:
//! - `ConfigError`: fatal, surfaced before any SKU is expanded
//! - `SkuError`: per-SKU, recoverable; recorded in the batch report
//! - `IntegrityError`: fatal, indicates an engine defect, never bad input
//! - `EngineError`: top-level union returned by the batch runner
//! - `ParseTagError`: failed parse of a logic or kind tag

use std::fmt;
use thiserror::Error;

use crate::sku::SkuId;

/// Fatal configuration errors that abort the whole batch.
///
/// Raised before any SKU is expanded; per-row problems are never
/// configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required pricing columns are structurally absent from the sheet.
    #[error("pricing sheet is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Names of the absent columns.
        columns: Vec<String>,
    },
}

/// Why a required numeric attribute was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeIssue {
    /// The cell is absent or blank.
    Missing,

    /// The cell is present but does not parse as a decimal number.
    NotNumeric,
}

impl fmt::Display for AttributeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeIssue::Missing => write!(f, "missing"),
            AttributeIssue::NotNumeric => write!(f, "not numeric"),
        }
    }
}

/// Per-SKU recoverable errors.
///
/// These are caught at the per-SKU boundary, recorded in the batch report,
/// and never abort processing of subsequent SKUs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkuError {
    /// No pricing row matches the requested SKU identifier.
    #[error("SKU {sku} has no matching pricing row")]
    NotFound {
        /// The unmatched SKU.
        sku: SkuId,
    },

    /// A required numeric attribute is missing or non-numeric.
    #[error("SKU {sku}: required attribute '{field}' is {issue}")]
    InvalidAttribute {
        /// The SKU whose calculation failed.
        sku: SkuId,
        /// Column name of the offending attribute.
        field: &'static str,
        /// What was wrong with the cell.
        issue: AttributeIssue,
    },
}

impl SkuError {
    /// Returns the SKU the error belongs to.
    pub fn sku(&self) -> &SkuId {
        match self {
            SkuError::NotFound { sku } => sku,
            SkuError::InvalidAttribute { sku, .. } => sku,
        }
    }
}

/// Duplicate composite sort key detected during canonicalization.
///
/// Valid inputs can never produce this; it signals an engine bug and is
/// surfaced as fatal rather than recorded per SKU.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate canonical sort key: {key}")]
pub struct IntegrityError {
    /// Rendered composite key that occurred twice.
    pub key: String,
}

/// Top-level engine error returned by the batch runner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Fatal configuration problem; nothing was expanded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Engine defect detected during canonicalization.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Failed parse of a logic or record-kind tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} tag: '{value}'")]
pub struct ParseTagError {
    /// What was being parsed ("logic", "record kind").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseTagError {
    /// Creates a new parse error.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
