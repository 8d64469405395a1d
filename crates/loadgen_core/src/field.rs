//! Output column identifiers.
//!
//! One enum names every column a generated record can carry. The inherited-
//! field list (reference data) and the canonicalizer's visibility rules both
//! key on this enum, so the two stay in sync by construction.

use std::fmt;

/// Identifier for one output column of a generated record.
///
/// # Examples
///
/// ```
/// use loadgen_core::Field;
///
/// assert_eq!(Field::CoverageCode.name(), "coverage_code");
/// assert!(Field::Premium.is_monetary());
/// assert!(!Field::Plan.is_monetary());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Record kind code ("N" / "SC").
    RecordKind,
    /// Business logic tag ("HORN" / "AMT").
    Logic,
    /// Agent number.
    AgentNumber,
    /// Dealer group number.
    DealerGroup,
    /// SKU identifier.
    Sku,
    /// Coverage code (synthesized from SKU and term).
    CoverageCode,
    /// Coverage description (synthesized from SKU, plan and term).
    CoverageDescription,
    /// Plan name.
    Plan,
    /// Term in months.
    Term,
    /// Uniform batch start date.
    StartDate,
    /// Coverage type.
    CoverageType,
    /// Region.
    Region,
    /// Trade.
    Trade,
    /// Performance level.
    PerformanceLevel,
    /// Asset name (key into the subcomponent mapping).
    AssetName,
    /// Sub-component name (SC rows only).
    Subcomponent,
    /// Limit of liability (prefix-derived).
    LimitOfLiability,
    /// Final premium.
    Premium,
    /// Loss cost.
    LossCost,
    /// Severity-adjusted reserve.
    Reserve,
    /// Underwriting fee.
    UwFee,
    /// HIC contract fee.
    HicContractFee,
    /// IWW markup.
    IwwMarkup,
    /// Ceding commission.
    CedingCommission,
}

impl Field {
    /// Every output column in canonical column order.
    pub const ALL: [Field; 24] = [
        Field::RecordKind,
        Field::Logic,
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
        Field::Subcomponent,
        Field::LimitOfLiability,
        Field::Premium,
        Field::LossCost,
        Field::Reserve,
        Field::UwFee,
        Field::HicContractFee,
        Field::IwwMarkup,
        Field::CedingCommission,
    ];

    /// Returns the snake_case column name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::RecordKind => "record_kind",
            Field::Logic => "logic",
            Field::AgentNumber => "agent_number",
            Field::DealerGroup => "dealer_group",
            Field::Sku => "sku",
            Field::CoverageCode => "coverage_code",
            Field::CoverageDescription => "coverage_description",
            Field::Plan => "plan",
            Field::Term => "term",
            Field::StartDate => "start_date",
            Field::CoverageType => "coverage_type",
            Field::Region => "region",
            Field::Trade => "trade",
            Field::PerformanceLevel => "performance_level",
            Field::AssetName => "asset_name",
            Field::Subcomponent => "subcomponent",
            Field::LimitOfLiability => "limit_of_liability",
            Field::Premium => "premium",
            Field::LossCost => "loss_cost",
            Field::Reserve => "reserve",
            Field::UwFee => "uw_fee",
            Field::HicContractFee => "hic_contract_fee",
            Field::IwwMarkup => "iww_markup",
            Field::CedingCommission => "ceding_commission",
        }
    }

    /// Returns true for computed monetary columns.
    ///
    /// Monetary columns are forced blank on SC rows regardless of any stray
    /// computed value. The limit of liability is prefix-derived rather than
    /// computed and is classified separately.
    pub fn is_monetary(&self) -> bool {
        matches!(
            self,
            Field::Premium
                | Field::LossCost
                | Field::Reserve
                | Field::UwFee
                | Field::HicContractFee
                | Field::IwwMarkup
                | Field::CedingCommission
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
