//! Pricing lookup: sheet validation, keyed resolution, attribute validation.
//!
//! The surrounding loader hands the engine an already-parsed sheet with raw
//! cell text; fuzzy column-name matching is the loader's concern. The engine
//! owns two checks: required columns must be structurally present (fatal
//! `ConfigError` for the whole batch), and required numeric attributes must
//! parse as decimals (per-SKU `SkuError`, recoverable).

use std::collections::HashMap;
use std::str::FromStr;

use loadgen_core::{AttributeIssue, ConfigError, SkuError, SkuId};
use rust_decimal::Decimal;

/// Columns the pricing sheet must carry for the batch to run at all.
///
/// Absence of any of these is a configuration error, not a per-row failure.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "sku",
    "plan",
    "term",
    "loss_cost",
    "reserve",
    "uw_fee",
    "hic_cost",
    "labor_rate",
    "trip_charge",
    "coverage_type",
    "region",
    "trade",
    "performance_level",
    "asset_name",
];

/// One raw pricing row as parsed by the loader.
///
/// Cells are optional raw text; numeric validation happens when the row is
/// turned into [`PricingAttributes`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingRow {
    /// Raw SKU identifier cell (join key, normalized on lookup).
    pub sku: String,
    /// Plan name.
    pub plan: Option<String>,
    /// Term in months.
    pub term: Option<String>,
    /// Loss cost.
    pub loss_cost: Option<String>,
    /// Reserve.
    pub reserve: Option<String>,
    /// Underwriting fee.
    pub uw_fee: Option<String>,
    /// HIC cost.
    pub hic_cost: Option<String>,
    /// Labor rate per hour.
    pub labor_rate: Option<String>,
    /// Trip charge.
    pub trip_charge: Option<String>,
    /// Coverage type.
    pub coverage_type: Option<String>,
    /// Region.
    pub region: Option<String>,
    /// Trade.
    pub trade: Option<String>,
    /// Performance level.
    pub performance_level: Option<String>,
    /// Asset name (key into the sub-component mapping).
    pub asset_name: Option<String>,
}

/// Raw pricing sheet: the column header row plus data rows, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingSheet {
    /// Column names as they appeared in the input, pre-normalized by the
    /// loader to snake_case.
    pub columns: Vec<String>,
    /// Data rows in input order.
    pub rows: Vec<PricingRow>,
}

impl PricingSheet {
    /// Builds a sheet that declares every required column.
    ///
    /// Convenience for callers (and tests) whose loader always produces the
    /// full standard column set.
    pub fn with_standard_columns(rows: Vec<PricingRow>) -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

/// Validated pricing lookup table keyed by normalized SKU.
///
/// When several rows share a normalized key, the first occurrence by input
/// order wins; shadowed rows are counted and logged rather than silently
/// dropped. This determinism is a documented limitation, not a guaranteed
/// business rule.
#[derive(Clone, Debug)]
pub struct PricingTable {
    rows: Vec<PricingRow>,
    index: HashMap<SkuId, usize>,
    shadowed: usize,
}

impl PricingTable {
    /// Validates sheet structure and builds the lookup index.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingColumns` if any required column is structurally
    /// absent. This aborts the whole batch before any SKU is expanded.
    pub fn from_sheet(sheet: PricingSheet) -> Result<Self, ConfigError> {
        let present: Vec<String> = sheet
            .columns
            .iter()
            .map(|c| c.trim().to_lowercase())
            .collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !present.iter().any(|c| c == *required))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingColumns { columns: missing });
        }

        let mut index = HashMap::with_capacity(sheet.rows.len());
        let mut shadowed = 0;
        for (position, row) in sheet.rows.iter().enumerate() {
            let key = SkuId::new(&row.sku);
            if key.is_empty() {
                continue;
            }
            if index.contains_key(&key) {
                shadowed += 1;
                tracing::warn!(sku = %key, position, "duplicate pricing key; first occurrence wins");
            } else {
                index.insert(key, position);
            }
        }

        Ok(Self {
            rows: sheet.rows,
            index,
            shadowed,
        })
    }

    /// Resolves the pricing row for a requested SKU.
    ///
    /// Matching is exact on the normalized key; no fuzzy matching.
    pub fn resolve(&self, sku: &SkuId) -> Result<&PricingRow, SkuError> {
        self.index
            .get(sku)
            .map(|&position| &self.rows[position])
            .ok_or_else(|| SkuError::NotFound { sku: sku.clone() })
    }

    /// Number of duplicate rows shadowed by an earlier occurrence.
    #[inline]
    pub fn shadowed_rows(&self) -> usize {
        self.shadowed
    }

    /// Number of distinct resolvable SKUs.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no SKUs are resolvable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Validated attribute bundle for one SKU.
///
/// All monetary inputs are exact decimals; the bundle is produced once per
/// requested SKU and shared by both logic calculations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingAttributes {
    /// Plan name.
    pub plan: String,
    /// Term in months.
    pub term: u32,
    /// Loss cost.
    pub loss_cost: Decimal,
    /// Reserve before severity adjustment.
    pub reserve: Decimal,
    /// Sheet underwriting fee.
    pub uw_fee: Decimal,
    /// Sheet HIC cost.
    pub hic_cost: Decimal,
    /// Labor rate per hour.
    pub labor_rate: Decimal,
    /// Trip charge.
    pub trip_charge: Decimal,
    /// Coverage type.
    pub coverage_type: String,
    /// Region.
    pub region: String,
    /// Trade.
    pub trade: String,
    /// Performance level.
    pub performance_level: String,
    /// Asset name (sub-component mapping key).
    pub asset_name: String,
}

impl PricingAttributes {
    /// Validates a raw pricing row into a typed bundle.
    ///
    /// # Errors
    ///
    /// `SkuError::InvalidAttribute` naming the first offending column if a
    /// required numeric cell is missing, blank, or non-numeric. String cells
    /// may be absent and default to empty.
    pub fn from_row(sku: &SkuId, row: &PricingRow) -> Result<Self, SkuError> {
        Ok(Self {
            plan: text(&row.plan),
            term: required_u32(sku, "term", &row.term)?,
            loss_cost: required_decimal(sku, "loss_cost", &row.loss_cost)?,
            reserve: required_decimal(sku, "reserve", &row.reserve)?,
            uw_fee: required_decimal(sku, "uw_fee", &row.uw_fee)?,
            hic_cost: required_decimal(sku, "hic_cost", &row.hic_cost)?,
            labor_rate: required_decimal(sku, "labor_rate", &row.labor_rate)?,
            trip_charge: required_decimal(sku, "trip_charge", &row.trip_charge)?,
            coverage_type: text(&row.coverage_type),
            region: text(&row.region),
            trade: text(&row.trade),
            performance_level: text(&row.performance_level),
            asset_name: text(&row.asset_name),
        })
    }
}

fn text(cell: &Option<String>) -> String {
    cell.as_deref().unwrap_or("").trim().to_string()
}

fn required_cell<'a>(
    sku: &SkuId,
    field: &'static str,
    cell: &'a Option<String>,
) -> Result<&'a str, SkuError> {
    match cell.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(raw),
        _ => Err(SkuError::InvalidAttribute {
            sku: sku.clone(),
            field,
            issue: AttributeIssue::Missing,
        }),
    }
}

fn required_decimal(
    sku: &SkuId,
    field: &'static str,
    cell: &Option<String>,
) -> Result<Decimal, SkuError> {
    let raw = required_cell(sku, field, cell)?;
    Decimal::from_str(raw).map_err(|_| SkuError::InvalidAttribute {
        sku: sku.clone(),
        field,
        issue: AttributeIssue::NotNumeric,
    })
}

fn required_u32(sku: &SkuId, field: &'static str, cell: &Option<String>) -> Result<u32, SkuError> {
    let raw = required_cell(sku, field, cell)?;
    raw.parse::<u32>().map_err(|_| SkuError::InvalidAttribute {
        sku: sku.clone(),
        field,
        issue: AttributeIssue::NotNumeric,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_row(sku: &str) -> PricingRow {
        PricingRow {
            sku: sku.to_string(),
            plan: Some("Platinum".to_string()),
            term: Some("12".to_string()),
            loss_cost: Some("120.00".to_string()),
            reserve: Some("30.00".to_string()),
            uw_fee: Some("15.00".to_string()),
            hic_cost: Some("10.00".to_string()),
            labor_rate: Some("50.00".to_string()),
            trip_charge: Some("25.00".to_string()),
            coverage_type: Some("Full".to_string()),
            region: Some("SE".to_string()),
            trade: Some("HVAC".to_string()),
            performance_level: Some("Standard".to_string()),
            asset_name: Some("Split System AC".to_string()),
        }
    }

    #[test]
    fn test_missing_columns_is_fatal() {
        let sheet = PricingSheet {
            columns: vec!["sku".to_string(), "plan".to_string()],
            rows: vec![],
        };
        let err = PricingTable::from_sheet(sheet).unwrap_err();
        match err {
            ConfigError::MissingColumns { columns } => {
                assert!(columns.contains(&"loss_cost".to_string()));
                assert!(columns.contains(&"asset_name".to_string()));
                assert!(!columns.contains(&"sku".to_string()));
            }
        }
    }

    #[test]
    fn test_column_check_is_case_insensitive() {
        let columns = REQUIRED_COLUMNS
            .iter()
            .map(|c| format!(" {} ", c.to_uppercase()))
            .collect();
        let sheet = PricingSheet {
            columns,
            rows: vec![],
        };
        assert!(PricingTable::from_sheet(sheet).is_ok());
    }

    #[test]
    fn test_resolve_normalized_match() {
        let sheet = PricingSheet::with_standard_columns(vec![full_row(" hsys1001 ")]);
        let table = PricingTable::from_sheet(sheet).unwrap();
        assert!(table.resolve(&SkuId::new("HSYS1001")).is_ok());
    }

    #[test]
    fn test_resolve_not_found() {
        let sheet = PricingSheet::with_standard_columns(vec![full_row("HSYS1001")]);
        let table = PricingTable::from_sheet(sheet).unwrap();
        let err = table.resolve(&SkuId::new("WH50")).unwrap_err();
        assert_eq!(
            err,
            SkuError::NotFound {
                sku: SkuId::new("WH50")
            }
        );
    }

    #[test]
    fn test_duplicate_key_first_occurrence_wins() {
        let mut first = full_row("HSYS1001");
        first.plan = Some("First".to_string());
        let mut second = full_row("hsys1001");
        second.plan = Some("Second".to_string());
        let table =
            PricingTable::from_sheet(PricingSheet::with_standard_columns(vec![first, second]))
                .unwrap();
        assert_eq!(table.shadowed_rows(), 1);
        assert_eq!(table.len(), 1);
        let row = table.resolve(&SkuId::new("HSYS1001")).unwrap();
        assert_eq!(row.plan.as_deref(), Some("First"));
    }

    #[test]
    fn test_blank_sku_rows_are_skipped() {
        let table = PricingTable::from_sheet(PricingSheet::with_standard_columns(vec![
            full_row("  "),
            full_row("WH50"),
        ]))
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.shadowed_rows(), 0);
    }

    #[test]
    fn test_attributes_from_valid_row() {
        let sku = SkuId::new("HSYS1001");
        let attrs = PricingAttributes::from_row(&sku, &full_row("HSYS1001")).unwrap();
        assert_eq!(attrs.term, 12);
        assert_eq!(attrs.loss_cost, dec!(120.00));
        assert_eq!(attrs.trip_charge, dec!(25.00));
        assert_eq!(attrs.asset_name, "Split System AC");
    }

    #[test]
    fn test_missing_numeric_attribute() {
        let sku = SkuId::new("HSYS1001");
        let mut row = full_row("HSYS1001");
        row.reserve = None;
        let err = PricingAttributes::from_row(&sku, &row).unwrap_err();
        assert_eq!(
            err,
            SkuError::InvalidAttribute {
                sku: sku.clone(),
                field: "reserve",
                issue: AttributeIssue::Missing,
            }
        );
    }

    #[test]
    fn test_blank_numeric_attribute_counts_as_missing() {
        let sku = SkuId::new("HSYS1001");
        let mut row = full_row("HSYS1001");
        row.loss_cost = Some("   ".to_string());
        let err = PricingAttributes::from_row(&sku, &row).unwrap_err();
        assert!(matches!(
            err,
            SkuError::InvalidAttribute {
                field: "loss_cost",
                issue: AttributeIssue::Missing,
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_attribute() {
        let sku = SkuId::new("HSYS1001");
        let mut row = full_row("HSYS1001");
        row.labor_rate = Some("fifty".to_string());
        let err = PricingAttributes::from_row(&sku, &row).unwrap_err();
        assert!(matches!(
            err,
            SkuError::InvalidAttribute {
                field: "labor_rate",
                issue: AttributeIssue::NotNumeric,
                ..
            }
        ));
    }

    #[test]
    fn test_non_integer_term_rejected() {
        let sku = SkuId::new("HSYS1001");
        let mut row = full_row("HSYS1001");
        row.term = Some("12.5".to_string());
        let err = PricingAttributes::from_row(&sku, &row).unwrap_err();
        assert!(matches!(
            err,
            SkuError::InvalidAttribute {
                field: "term",
                issue: AttributeIssue::NotNumeric,
                ..
            }
        ));
    }

    #[test]
    fn test_string_cells_default_to_empty() {
        let sku = SkuId::new("HSYS1001");
        let mut row = full_row("HSYS1001");
        row.region = None;
        row.asset_name = Some("  ".to_string());
        let attrs = PricingAttributes::from_row(&sku, &row).unwrap();
        assert_eq!(attrs.region, "");
        assert_eq!(attrs.asset_name, "");
    }
}
