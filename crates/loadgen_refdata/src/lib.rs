//! # Loadgen Refdata (L2: Reference Data)
//!
//! Immutable reference tables and calculation parameters for the SKU load
//! generation engine.
//!
//! This crate provides:
//! - Asset name → sub-component list mapping
//! - SKU-prefix → limit-of-liability table (longest-prefix match)
//! - The inherited-field list copied from N rows onto SC rows
//! - Calculation parameters: per-logic rates and the expected-frequency
//!   business constant
//!
//! Production values ship as `Default` implementations; every table also
//! deserializes from TOML so tests and callers can inject alternates. Tables
//! are plain data; no business logic lives here.

pub mod error;
pub mod inherited;
pub mod liability;
pub mod params;
pub mod subcomponents;
pub mod tables;

pub use error::RefdataError;
pub use inherited::InheritedFields;
pub use liability::LiabilityTable;
pub use params::{CalcParams, LogicRates};
pub use subcomponents::SubcomponentTable;
pub use tables::ReferenceTables;
