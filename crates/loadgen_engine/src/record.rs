//! Generated record types.
//!
//! A `LoadRecord` is one output row. Identity fields (kind, logic, SKU,
//! agent, sequence) are always set structurally; display fields on SC rows
//! are copied from the parent N row according to the inherited-field list,
//! and fields not on the list stay blank.

use chrono::NaiveDate;
use loadgen_core::{Field, Logic, RecordKind, RequestedSku, SkuId};
use loadgen_refdata::InheritedFields;
use rust_decimal::Decimal;

use crate::calc::MonetaryFields;
use crate::pricing::PricingAttributes;

/// One generated output record ("N" or "SC").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRecord {
    /// Record kind.
    pub kind: RecordKind,
    /// Business logic the record belongs to.
    pub logic: Logic,
    /// Sub-component sequence index; 0 for N rows, 1-based for SC rows.
    pub sequence: u32,
    /// Agent number.
    pub agent_number: String,
    /// Dealer group number.
    pub dealer_group: String,
    /// SKU identifier.
    pub sku: SkuId,
    /// Coverage code, synthesized as `{SKU}-{term}`.
    pub coverage_code: String,
    /// Coverage description, synthesized as `{SKU} {plan} {term}MO`.
    pub coverage_description: String,
    /// Plan name.
    pub plan: String,
    /// Term in months; `None` when not inherited.
    pub term: Option<u32>,
    /// Uniform batch start date; `None` when not inherited.
    pub start_date: Option<NaiveDate>,
    /// Coverage type.
    pub coverage_type: String,
    /// Region.
    pub region: String,
    /// Trade.
    pub trade: String,
    /// Performance level.
    pub performance_level: String,
    /// Asset name.
    pub asset_name: String,
    /// Sub-component name; SC rows only.
    pub subcomponent: Option<String>,
    /// Prefix-derived limit of liability; `None` when no prefix matched.
    pub limit_of_liability: Option<Decimal>,
    /// Computed monetary fields; always `None` on SC rows.
    pub money: Option<MonetaryFields>,
}

impl LoadRecord {
    /// Builds the primary ("N") record for one SKU under one logic.
    pub fn primary(
        requested: &RequestedSku,
        attrs: &PricingAttributes,
        logic: Logic,
        money: MonetaryFields,
        limit_of_liability: Option<Decimal>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            kind: RecordKind::Primary,
            logic,
            sequence: 0,
            agent_number: requested.agent_number.clone(),
            dealer_group: requested.dealer_group.clone(),
            sku: requested.sku.clone(),
            coverage_code: format!("{}-{}", requested.sku, attrs.term),
            coverage_description: format!("{} {} {}MO", requested.sku, attrs.plan, attrs.term),
            plan: attrs.plan.clone(),
            term: Some(attrs.term),
            start_date: Some(start_date),
            coverage_type: attrs.coverage_type.clone(),
            region: attrs.region.clone(),
            trade: attrs.trade.clone(),
            performance_level: attrs.performance_level.clone(),
            asset_name: attrs.asset_name.clone(),
            subcomponent: None,
            limit_of_liability,
            money: Some(money),
        }
    }

    /// Derives one sub-component ("SC") record from a parent N row.
    ///
    /// Fields named in the inherited list are copied verbatim; everything
    /// else stays blank. Monetary columns on the list are ignored: SC rows
    /// never carry their own pricing.
    pub fn subcomponent(
        parent: &LoadRecord,
        inherited: &InheritedFields,
        name: &str,
        sequence: u32,
    ) -> Self {
        let mut record = Self {
            kind: RecordKind::SubComponent,
            logic: parent.logic,
            sequence,
            // Identity fields are structural, not display inheritance; the
            // canonical sort key depends on them.
            agent_number: parent.agent_number.clone(),
            dealer_group: parent.dealer_group.clone(),
            sku: parent.sku.clone(),
            coverage_code: String::new(),
            coverage_description: String::new(),
            plan: String::new(),
            term: None,
            start_date: None,
            coverage_type: String::new(),
            region: String::new(),
            trade: String::new(),
            performance_level: String::new(),
            asset_name: String::new(),
            subcomponent: Some(name.to_string()),
            limit_of_liability: None,
            money: None,
        };
        for field in inherited.fields() {
            match field {
                Field::AgentNumber | Field::DealerGroup | Field::Sku => {}
                Field::CoverageCode => record.coverage_code = parent.coverage_code.clone(),
                Field::CoverageDescription => {
                    record.coverage_description = parent.coverage_description.clone()
                }
                Field::Plan => record.plan = parent.plan.clone(),
                Field::Term => record.term = parent.term,
                Field::StartDate => record.start_date = parent.start_date,
                Field::CoverageType => record.coverage_type = parent.coverage_type.clone(),
                Field::Region => record.region = parent.region.clone(),
                Field::Trade => record.trade = parent.trade.clone(),
                Field::PerformanceLevel => {
                    record.performance_level = parent.performance_level.clone()
                }
                Field::AssetName => record.asset_name = parent.asset_name.clone(),
                Field::LimitOfLiability => record.limit_of_liability = parent.limit_of_liability,
                _ => {}
            }
        }
        record
    }
}
