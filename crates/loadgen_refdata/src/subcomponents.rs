//! Asset name → sub-component list mapping.

use std::collections::BTreeMap;

/// Maps an asset name to its ordered list of physical sub-components.
///
/// Keys are normalized (trimmed, upper-cased) on construction so lookups
/// match the same way SKU keys do. An unmapped asset name is a valid case
/// and yields an empty list, never an error.
///
/// # Examples
///
/// ```
/// use loadgen_refdata::SubcomponentTable;
///
/// let table = SubcomponentTable::default();
/// assert_eq!(
///     table.subcomponents("Split System AC"),
///     ["Condenser", "Evaporator Coil"]
/// );
/// assert!(table.subcomponents("Unmapped Asset").is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct SubcomponentTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl SubcomponentTable {
    /// Builds a table from (asset name, sub-component list) pairs.
    ///
    /// Asset keys are normalized; later duplicates replace earlier entries.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Vec<String>)>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (normalize(k.as_ref()), v))
            .collect();
        Self { entries }
    }

    /// Returns the ordered sub-component list for an asset name.
    ///
    /// Unmapped names return an empty slice.
    pub fn subcomponents(&self, asset_name: &str) -> &[String] {
        self.entries
            .get(&normalize(asset_name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the asset name has a mapping.
    pub fn is_mapped(&self, asset_name: &str) -> bool {
        self.entries.contains_key(&normalize(asset_name))
    }

    /// Number of mapped asset names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no asset names are mapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl Default for SubcomponentTable {
    /// Production sub-component mapping.
    fn default() -> Self {
        let list = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self::new([
            ("Split System AC", list(&["Condenser", "Evaporator Coil"])),
            (
                "Package Unit",
                list(&["Compressor", "Air Handler", "Heat Exchanger"]),
            ),
            (
                "Gas Furnace",
                list(&["Heat Exchanger", "Blower Motor", "Ignition Control"]),
            ),
            ("Heat Pump", list(&["Compressor", "Reversing Valve"])),
            ("Water Heater", list(&["Tank", "Burner Assembly"])),
            (
                "Ductless Mini Split",
                list(&["Outdoor Unit", "Indoor Head"]),
            ),
        ])
    }
}

impl<'de> serde::Deserialize<'de> for SubcomponentTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: BTreeMap<String, Vec<String>> = BTreeMap::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
