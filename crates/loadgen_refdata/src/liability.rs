//! SKU-prefix → limit-of-liability table.

use std::collections::BTreeMap;

use loadgen_core::SkuId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed prefix → amount table resolved by longest-prefix match.
///
/// A SKU whose identifier starts with several listed prefixes takes the
/// longest one, so a specific family ("HSYS") wins over a broad one ("H").
/// An unmatched SKU yields `None`; the caller flags it for review instead of
/// failing the batch.
///
/// # Examples
///
/// ```
/// use loadgen_refdata::LiabilityTable;
/// use loadgen_core::SkuId;
/// use rust_decimal_macros::dec;
///
/// let table = LiabilityTable::default();
/// assert_eq!(table.limit_for(&SkuId::new("HSYS1001")), Some(dec!(10000)));
/// assert_eq!(table.limit_for(&SkuId::new("ZZZ9")), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct LiabilityTable {
    entries: BTreeMap<String, Decimal>,
}

impl LiabilityTable {
    /// Builds a table from (prefix, amount) pairs.
    ///
    /// Prefixes are normalized (trimmed, upper-cased); later duplicates
    /// replace earlier entries.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Decimal)>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_uppercase(), v))
            .collect();
        Self { entries }
    }

    /// Resolves the limit of liability for a SKU by longest-prefix match.
    pub fn limit_for(&self, sku: &SkuId) -> Option<Decimal> {
        self.entries
            .iter()
            .filter(|(prefix, _)| sku.as_str().starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, amount)| *amount)
    }

    /// Number of prefixes in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no prefixes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LiabilityTable {
    /// Production prefix table, whole currency units.
    fn default() -> Self {
        Self::new([
            ("HSYS", dec!(10000)),
            ("HVAC", dec!(7500)),
            ("HP", dec!(6000)),
            ("H", dec!(5000)),
            ("APPL", dec!(3000)),
            ("PLMB", dec!(2500)),
            ("ELEC", dec!(2000)),
            ("WH", dec!(1500)),
        ])
    }
}

impl<'de> serde::Deserialize<'de> for LiabilityTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: BTreeMap<String, Decimal> = BTreeMap::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
