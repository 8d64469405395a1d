//! Canonical ordering and cell rendering.
//!
//! Expansion emits records grouped per SKU; the canonicalizer imposes the
//! one output order the downstream loader accepts, enforces key uniqueness,
//! and owns the display rules: which columns are blank on which record kind
//! and how each typed value renders as text.

use std::fmt;

use loadgen_core::money::{format_currency, format_integer};
use loadgen_core::{Field, IntegrityError, Logic, RecordKind, SkuId};

use crate::record::LoadRecord;

/// Date format used for the start-date column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Composite sort key ordering the final record set.
///
/// Lexicographic over (agent number, SKU, logic, kind, sequence); the
/// derived orderings on `Logic` (HORN before AMT) and `RecordKind` (N before
/// SC) supply the inner levels. Each key is unique in a valid batch.
///
/// # Examples
///
/// ```
/// use loadgen_engine::SortKey;
/// use loadgen_core::{Logic, RecordKind, SkuId};
///
/// let key = SortKey {
///     agent_number: "1001".to_string(),
///     sku: SkuId::new("HSYS1001"),
///     logic: Logic::Horn,
///     kind: RecordKind::Primary,
///     sequence: 0,
/// };
/// assert_eq!(key.to_string(), "1001/HSYS1001/HORN/N/0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    /// Agent number (outermost level).
    pub agent_number: String,
    /// Normalized SKU identifier.
    pub sku: SkuId,
    /// Business logic; HORN sorts before AMT.
    pub logic: Logic,
    /// Record kind; N sorts before SC.
    pub kind: RecordKind,
    /// Sub-component sequence; 0 for N rows.
    pub sequence: u32,
}

impl SortKey {
    /// Extracts the sort key of a record.
    pub fn of(record: &LoadRecord) -> Self {
        Self {
            agent_number: record.agent_number.clone(),
            sku: record.sku.clone(),
            logic: record.logic,
            kind: record.kind,
            sequence: record.sequence,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.agent_number,
            self.sku,
            self.logic.tag(),
            self.kind.code(),
            self.sequence
        )
    }
}

/// A record set in canonical order with verified key uniqueness.
#[derive(Clone, Debug)]
pub struct CanonicalRecordSet {
    records: Vec<LoadRecord>,
}

impl CanonicalRecordSet {
    /// Records in canonical order.
    #[inline]
    pub fn records(&self) -> &[LoadRecord] {
        &self.records
    }

    /// Consumes the set, yielding the ordered records.
    #[inline]
    pub fn into_records(self) -> Vec<LoadRecord> {
        self.records
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the set holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names in output order.
    pub fn header() -> Vec<&'static str> {
        Field::ALL.iter().map(Field::name).collect()
    }

    /// Renders one record as display cells in output column order.
    pub fn render_row(&self, index: usize) -> Vec<String> {
        let record = &self.records[index];
        Field::ALL
            .iter()
            .map(|field| render_cell(record, *field))
            .collect()
    }
}

/// Sorts records into canonical order and verifies key uniqueness.
///
/// The sort is stable, so equal keys would retain input order; since equal
/// keys are an engine defect, they are rejected instead.
///
/// # Errors
///
/// `IntegrityError` naming the first duplicated composite key. Valid input
/// can never trigger this.
pub fn canonicalize(mut records: Vec<LoadRecord>) -> Result<CanonicalRecordSet, IntegrityError> {
    records.sort_by_cached_key(SortKey::of);
    for pair in records.windows(2) {
        let (a, b) = (SortKey::of(&pair[0]), SortKey::of(&pair[1]));
        if a == b {
            return Err(IntegrityError { key: a.to_string() });
        }
    }
    Ok(CanonicalRecordSet { records })
}

/// Returns true if the column is populated on this record's kind.
///
/// SC rows never show monetary columns or the limit of liability; the
/// sub-component column only exists on SC rows.
pub fn is_visible(record: &LoadRecord, field: Field) -> bool {
    if field.is_monetary() || field == Field::LimitOfLiability {
        return record.kind == RecordKind::Primary;
    }
    if field == Field::Subcomponent {
        return record.kind == RecordKind::SubComponent;
    }
    true
}

/// Renders one typed cell as display text.
///
/// Invisible columns render empty. Monetary columns use fixed 2-digit
/// currency form; the term and whole limit amounts render as plain
/// integers; the start date uses ISO `YYYY-MM-DD`.
pub fn render_cell(record: &LoadRecord, field: Field) -> String {
    if !is_visible(record, field) {
        return String::new();
    }
    let money = |extract: fn(&crate::calc::MonetaryFields) -> rust_decimal::Decimal| {
        record
            .money
            .as_ref()
            .map(|m| format_currency(extract(m)))
            .unwrap_or_default()
    };
    match field {
        Field::RecordKind => record.kind.code().to_string(),
        Field::Logic => record.logic.tag().to_string(),
        Field::AgentNumber => record.agent_number.clone(),
        Field::DealerGroup => record.dealer_group.clone(),
        Field::Sku => record.sku.as_str().to_string(),
        Field::CoverageCode => record.coverage_code.clone(),
        Field::CoverageDescription => record.coverage_description.clone(),
        Field::Plan => record.plan.clone(),
        Field::Term => record.term.map(|t| t.to_string()).unwrap_or_default(),
        Field::StartDate => record
            .start_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        Field::CoverageType => record.coverage_type.clone(),
        Field::Region => record.region.clone(),
        Field::Trade => record.trade.clone(),
        Field::PerformanceLevel => record.performance_level.clone(),
        Field::AssetName => record.asset_name.clone(),
        Field::Subcomponent => record.subcomponent.clone().unwrap_or_default(),
        Field::LimitOfLiability => record
            .limit_of_liability
            .map(format_integer)
            .unwrap_or_default(),
        Field::Premium => money(|m| m.premium),
        Field::LossCost => money(|m| m.loss_cost),
        Field::Reserve => money(|m| m.reserve),
        Field::UwFee => money(|m| m.uw_fee),
        Field::HicContractFee => money(|m| m.hic_contract_fee),
        Field::IwwMarkup => money(|m| m.iww_markup),
        Field::CedingCommission => money(|m| m.ceding_commission),
    }
}
