//! # Loadgen Engine (L3: The Kernel)
//!
//! Record expansion and financial calculation for the SKU load generator.
//!
//! Given a list of requested SKUs and a pricing sheet, the engine
//! deterministically expands each SKU into one primary ("N") record per
//! business logic (HORN, then AMT) plus one sub-component ("SC") record per
//! mapped sub-component of the primary's asset, computes the chained
//! monetary fields with exact decimal semantics, and emits a canonically
//! ordered record set together with a per-SKU batch report.
//!
//! The engine performs no I/O: file parsing happens in the layer before it,
//! serialization in the layer after. Per-SKU failures (unknown SKU, bad
//! numeric attribute) are recorded and skipped; the batch always runs to
//! completion.
//!
//! ```
//! use chrono::NaiveDate;
//! use loadgen_core::RequestedSku;
//! use loadgen_engine::{Engine, PricingRow, PricingSheet};
//! use loadgen_refdata::ReferenceTables;
//!
//! let sheet = PricingSheet::with_standard_columns(vec![PricingRow {
//!     sku: "HSYS1001".into(),
//!     plan: Some("Platinum".into()),
//!     term: Some("12".into()),
//!     loss_cost: Some("120.00".into()),
//!     reserve: Some("30.00".into()),
//!     uw_fee: Some("15.00".into()),
//!     hic_cost: Some("10.00".into()),
//!     labor_rate: Some("50.00".into()),
//!     trip_charge: Some("25.00".into()),
//!     asset_name: Some("Split System AC".into()),
//!     ..PricingRow::default()
//! }]);
//!
//! let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
//! let engine = Engine::new(sheet, ReferenceTables::default(), start).unwrap();
//! let output = engine
//!     .run(&[RequestedSku::new("HSYS1001", "1001", "DG-07")])
//!     .unwrap();
//!
//! // 2 N rows plus 2 SC rows under each logic.
//! assert_eq!(output.records.len(), 6);
//! assert_eq!(output.report.succeeded(), 1);
//! ```

pub mod batch;
pub mod calc;
pub mod canonical;
pub mod expand;
pub mod pricing;
pub mod record;

pub use batch::{BatchOutput, BatchReport, Engine, SkuOutcome};
pub use calc::MonetaryFields;
pub use canonical::{canonicalize, is_visible, render_cell, CanonicalRecordSet, SortKey};
pub use expand::{Expander, Expansion};
pub use pricing::{PricingAttributes, PricingRow, PricingSheet, PricingTable, REQUIRED_COLUMNS};
pub use record::LoadRecord;
