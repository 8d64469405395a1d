//! SKU identifier and requested-SKU input types.
//!
//! This module provides strongly-typed identifiers for requested SKUs. Using
//! a newtype for the SKU key ensures every join against the pricing sheet
//! runs on the same normalized form.

use std::fmt;

/// Normalized SKU identifier used as the join key against the pricing sheet.
///
/// Construction trims surrounding whitespace and upper-cases the raw
/// identifier, so two keys that differ only in case or padding compare equal.
///
/// # Examples
///
/// ```
/// use loadgen_core::SkuId;
///
/// let a = SkuId::new("  hsys1001 ");
/// let b = SkuId::new("HSYS1001");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "HSYS1001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SkuId(String);

impl SkuId {
    /// Creates a normalized SKU identifier from raw input.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    /// Returns the normalized identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the normalized identifier is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SkuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SkuId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SkuId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SkuId {
    // Deserialization goes through the constructor so stored keys stay
    // normalized.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SkuId::new(raw))
    }
}

/// One requested SKU, as parsed by the surrounding loader.
///
/// Immutable once read; the engine never mutates its inputs.
///
/// # Examples
///
/// ```
/// use loadgen_core::RequestedSku;
///
/// let req = RequestedSku::new("hsys1001", "1001", "DG-07");
/// assert_eq!(req.sku.as_str(), "HSYS1001");
/// assert_eq!(req.agent_number, "1001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestedSku {
    /// Normalized SKU identifier (join key).
    pub sku: SkuId,

    /// Agent number the load is generated for.
    pub agent_number: String,

    /// Dealer group number.
    pub dealer_group: String,
}

impl RequestedSku {
    /// Creates a requested SKU from raw loader output.
    pub fn new(
        sku: impl AsRef<str>,
        agent_number: impl Into<String>,
        dealer_group: impl Into<String>,
    ) -> Self {
        Self {
            sku: SkuId::new(sku),
            agent_number: agent_number.into(),
            dealer_group: dealer_group.into(),
        }
    }
}
