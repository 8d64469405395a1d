//! # Loadgen Core (L1: Foundation)
//!
//! Core types shared by the SKU load generation engine.
//!
//! This crate provides:
//! - Normalized SKU identifiers and the requested-SKU input type
//! - The business logic tag (HORN / AMT) and record kind (N / SC) enums
//! - Currency rounding and display-typing helpers over exact decimals
//! - The output column (`Field`) enum used by inheritance and visibility rules
//! - The engine error taxonomy
//!
//! ## Design Principles
//!
//! - **Exact decimal arithmetic** for every monetary value; binary floating
//!   point never touches currency fields
//! - **Normalize at the boundary**: SKU keys are trimmed and case-folded on
//!   construction, so joins never re-normalize
//! - **Enums over strings** for logic tags, record kinds and column names

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod field;
pub mod logic;
pub mod money;
pub mod sku;

pub use error::{AttributeIssue, ConfigError, EngineError, IntegrityError, SkuError};
pub use field::Field;
pub use logic::{Logic, RecordKind};
pub use sku::{RequestedSku, SkuId};
