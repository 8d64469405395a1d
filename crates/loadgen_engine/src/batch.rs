//! Batch runner and per-SKU outcome reporting.
//!
//! The engine owns the validated pricing table and reference data for one
//! batch. Per-SKU failures are recorded and skipped; the run always
//! completes and ends with one canonicalization pass over everything the
//! successful SKUs produced.

use chrono::NaiveDate;
use loadgen_core::{ConfigError, EngineError, RequestedSku, SkuError, SkuId};
use loadgen_refdata::ReferenceTables;

use crate::canonical::{canonicalize, CanonicalRecordSet};
use crate::expand::Expander;
use crate::pricing::{PricingSheet, PricingTable};

/// Outcome of processing one requested SKU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkuOutcome {
    /// The SKU expanded in full.
    Success {
        /// The requested SKU.
        sku: SkuId,
        /// Number of records the SKU contributed.
        records: usize,
        /// Advisory conditions recorded during expansion.
        warnings: Vec<String>,
    },

    /// The SKU contributed zero records.
    Failure {
        /// The requested SKU.
        sku: SkuId,
        /// Why expansion failed.
        error: SkuError,
    },
}

impl SkuOutcome {
    /// The SKU the outcome belongs to.
    pub fn sku(&self) -> &SkuId {
        match self {
            SkuOutcome::Success { sku, .. } => sku,
            SkuOutcome::Failure { sku, .. } => sku,
        }
    }

    /// Returns true for successful outcomes.
    pub fn is_success(&self) -> bool {
        matches!(self, SkuOutcome::Success { .. })
    }
}

/// Per-SKU outcome log with aggregate counts for caller-side summaries.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<SkuOutcome>,
}

impl BatchReport {
    /// All outcomes in request order.
    #[inline]
    pub fn outcomes(&self) -> &[SkuOutcome] {
        &self.outcomes
    }

    /// Outcomes of SKUs that contributed zero records.
    pub fn failures(&self) -> impl Iterator<Item = (&SkuId, &SkuError)> {
        self.outcomes.iter().filter_map(|o| match o {
            SkuOutcome::Failure { sku, error } => Some((sku, error)),
            SkuOutcome::Success { .. } => None,
        })
    }

    /// Advisory warnings collected across all successful SKUs.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                SkuOutcome::Success { warnings, .. } => Some(warnings),
                SkuOutcome::Failure { .. } => None,
            })
            .flatten()
            .map(String::as_str)
    }

    /// Total SKUs processed.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// SKUs that expanded in full.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// SKUs that contributed zero records.
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// SKUs skipped because no pricing row matched.
    pub fn not_found(&self) -> usize {
        self.failures()
            .filter(|(_, e)| matches!(e, SkuError::NotFound { .. }))
            .count()
    }

    /// SKUs skipped because a required attribute failed validation.
    pub fn invalid_attributes(&self) -> usize {
        self.failures()
            .filter(|(_, e)| matches!(e, SkuError::InvalidAttribute { .. }))
            .count()
    }

    /// Total records emitted by successful SKUs.
    pub fn records_emitted(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                SkuOutcome::Success { records, .. } => *records,
                SkuOutcome::Failure { .. } => 0,
            })
            .sum()
    }

    /// One-line summary for logs and operator-facing status output.
    pub fn summary(&self) -> String {
        format!(
            "{} SKUs: {} succeeded, {} failed, {} records emitted",
            self.total(),
            self.succeeded(),
            self.failed(),
            self.records_emitted()
        )
    }
}

/// Everything one batch run produces.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    /// Canonically ordered records from all successful SKUs.
    pub records: CanonicalRecordSet,

    /// Per-SKU outcome log.
    pub report: BatchReport,
}

/// Batch engine: validated pricing plus reference data for one run.
///
/// Construction performs all fatal validation; `run` itself can only fail
/// on an internal integrity defect.
#[derive(Clone, Debug)]
pub struct Engine {
    pricing: PricingTable,
    tables: ReferenceTables,
    start_date: NaiveDate,
}

impl Engine {
    /// Validates the pricing sheet and builds an engine.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingColumns` when the sheet lacks required columns;
    /// nothing is expanded in that case.
    pub fn new(
        sheet: PricingSheet,
        tables: ReferenceTables,
        start_date: NaiveDate,
    ) -> Result<Self, ConfigError> {
        let pricing = PricingTable::from_sheet(sheet)?;
        Ok(Self {
            pricing,
            tables,
            start_date,
        })
    }

    /// The validated pricing table backing this engine.
    #[inline]
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Runs the batch over the requested SKUs.
    ///
    /// Equivalent to [`Engine::run_with_progress`] with a no-op callback.
    pub fn run(&self, requested: &[RequestedSku]) -> Result<BatchOutput, EngineError> {
        self.run_with_progress(requested, |_| {})
    }

    /// Runs the batch, invoking the callback after each SKU resolves.
    ///
    /// The callback drives operator-facing progress display; it observes
    /// outcomes in request order.
    ///
    /// # Errors
    ///
    /// `EngineError::Integrity` if canonicalization detects a duplicate
    /// composite key. Per-SKU failures are reported, never returned.
    pub fn run_with_progress(
        &self,
        requested: &[RequestedSku],
        mut progress: impl FnMut(&SkuOutcome),
    ) -> Result<BatchOutput, EngineError> {
        let span = tracing::info_span!("batch", skus = requested.len());
        let _guard = span.enter();

        let expander = Expander::new(&self.pricing, &self.tables, self.start_date);
        let mut records = Vec::new();
        let mut report = BatchReport::default();

        for request in requested {
            let outcome = match expander.expand(request) {
                Ok(expansion) => {
                    let outcome = SkuOutcome::Success {
                        sku: request.sku.clone(),
                        records: expansion.records.len(),
                        warnings: expansion.warnings,
                    };
                    records.extend(expansion.records);
                    outcome
                }
                Err(error) => {
                    tracing::warn!(sku = %request.sku, %error, "SKU skipped");
                    SkuOutcome::Failure {
                        sku: request.sku.clone(),
                        error,
                    }
                }
            };
            progress(&outcome);
            report.outcomes.push(outcome);
        }

        let records = canonicalize(records)?;
        tracing::info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            records = records.len(),
            "batch complete"
        );
        Ok(BatchOutput { records, report })
    }
}
