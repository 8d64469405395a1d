//! Business logic tags and record kinds.
//!
//! Every successfully resolved SKU expands under both business logics, so
//! `Logic` carries a fixed iteration order (HORN before AMT). `RecordKind`
//! distinguishes primary ("N") rows from sub-component ("SC") rows and sorts
//! N before SC.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseTagError;

/// Business calculation logic applied to a SKU.
///
/// The two logics share formula structure but apply distinct rates; both are
/// always computed from one attribute bundle. The derived ordering (HORN
/// before AMT) is the canonical sort order.
///
/// # Examples
///
/// ```
/// use loadgen_core::Logic;
///
/// assert_eq!(Logic::Horn.tag(), "HORN");
/// assert_eq!(Logic::ALL, [Logic::Horn, Logic::Amt]);
/// assert!(Logic::Horn < Logic::Amt);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Logic {
    /// HORN logic.
    Horn,

    /// AMT logic.
    Amt,
}

impl Logic {
    /// Both logics in canonical expansion order.
    pub const ALL: [Logic; 2] = [Logic::Horn, Logic::Amt];

    /// Returns the logic tag as it appears on generated records.
    pub fn tag(&self) -> &'static str {
        match self {
            Logic::Horn => "HORN",
            Logic::Amt => "AMT",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Logic {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, ParseTagError> {
        match s.trim().to_uppercase().as_str() {
            "HORN" => Ok(Logic::Horn),
            "AMT" => Ok(Logic::Amt),
            _ => Err(ParseTagError::new("logic", s)),
        }
    }
}

/// Kind of generated record.
///
/// The derived ordering (N before SC) is the canonical sort order within one
/// SKU/logic family.
///
/// # Examples
///
/// ```
/// use loadgen_core::RecordKind;
///
/// assert_eq!(RecordKind::Primary.code(), "N");
/// assert_eq!(RecordKind::SubComponent.code(), "SC");
/// assert!(RecordKind::Primary < RecordKind::SubComponent);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    /// Primary ("N") record: one per SKU per logic.
    Primary,

    /// Sub-component ("SC") record derived from a primary record.
    SubComponent,
}

impl RecordKind {
    /// Returns the record kind code as it appears on generated records.
    pub fn code(&self) -> &'static str {
        match self {
            RecordKind::Primary => "N",
            RecordKind::SubComponent => "SC",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
