//! Property tests for the calculation and canonicalization invariants.

use chrono::NaiveDate;
use loadgen_core::money::round_currency;
use loadgen_core::{Logic, RecordKind, RequestedSku};
use loadgen_engine::{
    Engine, MonetaryFields, PricingAttributes, PricingRow, PricingSheet, SortKey,
};
use loadgen_refdata::{CalcParams, ReferenceTables};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn money() -> impl Strategy<Value = Decimal> {
    // Cent-denominated amounts up to 100,000.00.
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn asset() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Split System AC".to_string()),
        Just("Package Unit".to_string()),
        Just("Water Heater".to_string()),
        Just("Something Unmapped".to_string()),
    ]
}

fn attributes(
    term: u32,
    loss_cost: Decimal,
    reserve: Decimal,
    uw_fee: Decimal,
    hic_cost: Decimal,
    labor_rate: Decimal,
    trip_charge: Decimal,
) -> PricingAttributes {
    PricingAttributes {
        plan: "Platinum".to_string(),
        term,
        loss_cost,
        reserve,
        uw_fee,
        hic_cost,
        labor_rate,
        trip_charge,
        coverage_type: "Full".to_string(),
        region: "SE".to_string(),
        trade: "HVAC".to_string(),
        performance_level: "Standard".to_string(),
        asset_name: "Split System AC".to_string(),
    }
}

fn pricing_row(sku: &str, asset: &str) -> PricingRow {
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
        asset_name: Some(asset.to_string()),
    }
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

proptest! {
    #[test]
    fn premium_is_exact_sum_of_finalized_constituents(
        term in 1u32..=120,
        loss_cost in money(),
        reserve in money(),
        uw_fee in money(),
        hic_cost in money(),
        labor_rate in money(),
        trip_charge in money(),
    ) {
        let attrs = attributes(term, loss_cost, reserve, uw_fee, hic_cost, labor_rate, trip_charge);
        for logic in Logic::ALL {
            let fields = MonetaryFields::compute(&attrs, logic, &CalcParams::default());
            prop_assert_eq!(fields.premium, fields.constituent_sum());
            // Every constituent is already at currency precision.
            prop_assert_eq!(fields.reserve, round_currency(fields.reserve));
            prop_assert_eq!(fields.uw_fee, round_currency(fields.uw_fee));
            prop_assert_eq!(fields.iww_markup, round_currency(fields.iww_markup));
            prop_assert_eq!(fields.ceding_commission, round_currency(fields.ceding_commission));
        }
    }

    #[test]
    fn every_resolved_sku_yields_one_primary_per_logic(
        ids in prop::collection::hash_set(0u16..500, 1..12),
        asset in asset(),
    ) {
        let skus: Vec<String> = ids.iter().map(|n| format!("HSYS{n}")).collect();
        let rows = skus.iter().map(|s| pricing_row(s, &asset)).collect();
        let engine = Engine::new(
            PricingSheet::with_standard_columns(rows),
            ReferenceTables::default(),
            start(),
        ).unwrap();
        let requested: Vec<RequestedSku> = skus
            .iter()
            .map(|s| RequestedSku::new(s, "1001", "DG-07"))
            .collect();

        let output = engine.run(&requested).unwrap();
        prop_assert_eq!(output.report.succeeded(), skus.len());

        for sku in &skus {
            let primaries: Vec<Logic> = output
                .records
                .records()
                .iter()
                .filter(|r| r.kind == RecordKind::Primary && r.sku.as_str() == sku.to_uppercase())
                .map(|r| r.logic)
                .collect();
            prop_assert_eq!(primaries, vec![Logic::Horn, Logic::Amt]);
        }
    }

    #[test]
    fn canonical_order_is_strictly_increasing(
        ids in prop::collection::hash_set(0u16..500, 1..12),
        asset in asset(),
    ) {
        let rows = ids.iter().map(|n| pricing_row(&format!("HSYS{n}"), &asset)).collect();
        let engine = Engine::new(
            PricingSheet::with_standard_columns(rows),
            ReferenceTables::default(),
            start(),
        ).unwrap();
        let requested: Vec<RequestedSku> = ids
            .iter()
            .map(|n| RequestedSku::new(format!("HSYS{n}"), "1001", "DG-07"))
            .collect();

        let output = engine.run(&requested).unwrap();
        for pair in output.records.records().windows(2) {
            prop_assert!(SortKey::of(&pair[0]) < SortKey::of(&pair[1]));
        }
    }

    #[test]
    fn subcomponents_inherit_parent_fields_exactly(
        ids in prop::collection::hash_set(0u16..100, 1..6),
    ) {
        let rows = ids.iter().map(|n| pricing_row(&format!("WH{n}"), "Water Heater")).collect();
        let engine = Engine::new(
            PricingSheet::with_standard_columns(rows),
            ReferenceTables::default(),
            start(),
        ).unwrap();
        let requested: Vec<RequestedSku> = ids
            .iter()
            .map(|n| RequestedSku::new(format!("WH{n}"), "1001", "DG-07"))
            .collect();

        let output = engine.run(&requested).unwrap();
        for sub in output
            .records
            .records()
            .iter()
            .filter(|r| r.kind == RecordKind::SubComponent)
        {
            let parent = output
                .records
                .records()
                .iter()
                .find(|r| {
                    r.kind == RecordKind::Primary && r.sku == sub.sku && r.logic == sub.logic
                })
                .unwrap();
            prop_assert_eq!(&sub.coverage_code, &parent.coverage_code);
            prop_assert_eq!(&sub.coverage_description, &parent.coverage_description);
            prop_assert_eq!(&sub.plan, &parent.plan);
            prop_assert_eq!(sub.term, parent.term);
            prop_assert_eq!(sub.start_date, parent.start_date);
            prop_assert_eq!(&sub.coverage_type, &parent.coverage_type);
            prop_assert_eq!(&sub.region, &parent.region);
            prop_assert_eq!(&sub.trade, &parent.trade);
            prop_assert_eq!(&sub.performance_level, &parent.performance_level);
            prop_assert_eq!(&sub.asset_name, &parent.asset_name);
            prop_assert!(sub.money.is_none());
        }
    }
}
