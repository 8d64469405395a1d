//! Inherited-field list for sub-component rows.

use loadgen_core::Field;

/// The set of columns an SC row copies verbatim from its parent N row.
///
/// Modeled as data rather than code so alternate lists can be injected for
/// testing. Monetary columns are deliberately absent from the production
/// list: SC rows never carry their own pricing.
///
/// # Examples
///
/// ```
/// use loadgen_refdata::InheritedFields;
/// use loadgen_core::Field;
///
/// let inherited = InheritedFields::default();
/// assert!(inherited.contains(Field::CoverageDescription));
/// assert!(!inherited.contains(Field::Premium));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct InheritedFields(Vec<Field>);

impl InheritedFields {
    /// Builds an inherited-field list from an explicit set of columns.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self(fields.into_iter().collect())
    }

    /// Returns the inherited columns in declaration order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    /// Returns true if the column is inherited by SC rows.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }
}

impl Default for InheritedFields {
    /// Production inherited-field list.
    fn default() -> Self {
        Self(vec![
            Field::AgentNumber,
            Field::DealerGroup,
            Field::Sku,
            Field::CoverageCode,
            Field::CoverageDescription,
            Field::Plan,
            Field::Term,
            Field::StartDate,
            Field::CoverageType,
            Field::Region,
            Field::Trade,
            Field::PerformanceLevel,
            Field::AssetName,
        ])
    }
}
