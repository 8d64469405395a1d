//! Aggregate reference-table bundle.

use crate::error::RefdataError;
use crate::inherited::InheritedFields;
use crate::liability::LiabilityTable;
use crate::params::CalcParams;
use crate::subcomponents::SubcomponentTable;

/// The full set of reference tables injected into the engine at startup.
///
/// Immutable once built. `Default` carries production data; any subset can
/// be overridden from a TOML document.
///
/// # Examples
///
/// ```
/// use loadgen_refdata::ReferenceTables;
///
/// let tables = ReferenceTables::from_toml_str(r#"
///     [liability]
///     HSYS = 12000
/// "#).unwrap();
/// // Overridden table replaces the default wholesale; the rest stay stock.
/// assert_eq!(tables.liability.len(), 1);
/// assert!(!tables.subcomponents.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Asset name → sub-component list.
    pub subcomponents: SubcomponentTable,

    /// SKU prefix → limit of liability.
    pub liability: LiabilityTable,

    /// Columns copied from N rows onto SC rows.
    pub inherited: InheritedFields,

    /// Per-logic rates and shared business constants.
    pub params: CalcParams,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            subcomponents: SubcomponentTable::default(),
            liability: LiabilityTable::default(),
            inherited: InheritedFields::default(),
            params: CalcParams::default(),
        }
    }
}

impl ReferenceTables {
    /// Loads reference tables from a TOML document, validating parameters.
    ///
    /// Absent sections fall back to production defaults.
    pub fn from_toml_str(doc: &str) -> Result<Self, RefdataError> {
        let tables: ReferenceTables = toml::from_str(doc)?;
        tables.params.validate()?;
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadgen_core::SkuId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_bundle() {
        let tables = ReferenceTables::default();
        assert!(!tables.subcomponents.is_empty());
        assert!(!tables.liability.is_empty());
        assert!(!tables.inherited.fields().is_empty());
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let tables = ReferenceTables::from_toml_str("").unwrap();
        assert_eq!(tables, ReferenceTables::default());
    }

    #[test]
    fn test_partial_override() {
        let tables = ReferenceTables::from_toml_str(
            r#"
            [liability]
            HSYS = 12000

            [subcomponents]
            "Split System AC" = ["Condenser"]
            "#,
        )
        .unwrap();
        assert_eq!(
            tables.liability.limit_for(&SkuId::new("HSYS1001")),
            Some(dec!(12000))
        );
        assert_eq!(tables.subcomponents.subcomponents("Split System AC").len(), 1);
        // Sections not mentioned keep production defaults.
        assert_eq!(tables.params, CalcParams::default());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = ReferenceTables::from_toml_str(
            r#"
            [params]
            expected_frequency = -1.0
            "#,
        );
        assert!(matches!(result, Err(RefdataError::InvalidParams { .. })));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            ReferenceTables::from_toml_str("liability = 3"),
            Err(RefdataError::Parse(_))
        ));
    }
}
