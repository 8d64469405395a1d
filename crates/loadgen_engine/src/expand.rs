//! Per-SKU record expansion.
//!
//! One requested SKU expands into one primary ("N") record per business
//! logic, HORN then AMT, each followed by one sub-component ("SC") record
//! per mapped sub-component of the primary's asset. Both logics share the
//! same validated attribute bundle; only the rates differ.

use chrono::NaiveDate;
use loadgen_core::{Logic, RequestedSku, SkuError};
use loadgen_refdata::ReferenceTables;

use crate::calc::MonetaryFields;
use crate::pricing::{PricingAttributes, PricingTable};
use crate::record::LoadRecord;

/// The records and advisory warnings produced by expanding one SKU.
#[derive(Clone, Debug)]
pub struct Expansion {
    /// Generated records in expansion order: HORN N, HORN SCs, AMT N,
    /// AMT SCs.
    pub records: Vec<LoadRecord>,

    /// Advisory conditions that did not stop expansion, for the batch
    /// report.
    pub warnings: Vec<String>,
}

/// Expands requested SKUs against a validated pricing table and reference
/// data.
///
/// Borrows its inputs; the batch runner owns them and constructs one
/// expander per run.
#[derive(Clone, Copy, Debug)]
pub struct Expander<'a> {
    pricing: &'a PricingTable,
    tables: &'a ReferenceTables,
    start_date: NaiveDate,
}

impl<'a> Expander<'a> {
    /// Creates an expander over a validated pricing table.
    pub fn new(
        pricing: &'a PricingTable,
        tables: &'a ReferenceTables,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            pricing,
            tables,
            start_date,
        }
    }

    /// Expands one requested SKU into its full record fan-out.
    ///
    /// # Errors
    ///
    /// `SkuError::NotFound` when no pricing row matches, or
    /// `SkuError::InvalidAttribute` when a required numeric cell fails
    /// validation. Either way no records are produced for the SKU.
    pub fn expand(&self, requested: &RequestedSku) -> Result<Expansion, SkuError> {
        let row = self.pricing.resolve(&requested.sku)?;
        let attrs = PricingAttributes::from_row(&requested.sku, row)?;

        let mut warnings = Vec::new();
        let limit = self.tables.liability.limit_for(&requested.sku);
        if limit.is_none() {
            tracing::warn!(sku = %requested.sku, "no liability prefix matched; flagged for review");
            warnings.push(format!(
                "SKU {}: no liability prefix matched; limit of liability left blank for review",
                requested.sku
            ));
        }

        let subcomponents = self.tables.subcomponents.subcomponents(&attrs.asset_name);

        let mut records = Vec::with_capacity(Logic::ALL.len() * (1 + subcomponents.len()));
        for logic in Logic::ALL {
            let money = MonetaryFields::compute(&attrs, logic, &self.tables.params);
            let primary =
                LoadRecord::primary(requested, &attrs, logic, money, limit, self.start_date);
            let children: Vec<LoadRecord> = subcomponents
                .iter()
                .enumerate()
                .map(|(offset, name)| {
                    LoadRecord::subcomponent(
                        &primary,
                        &self.tables.inherited,
                        name,
                        offset as u32 + 1,
                    )
                })
                .collect();
            records.push(primary);
            records.extend(children);
        }

        Ok(Expansion { records, warnings })
    }
}
