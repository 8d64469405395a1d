//! Financial calculator.
//!
//! One parameterized calculation serves both business logics; only the rates
//! differ (see `loadgen_refdata::CalcParams`). Intermediate sums stay
//! unrounded; each output field is rounded half-up to currency precision
//! exactly once, when it is finalized. The premium is then the plain sum of
//! the finalized constituents, which keeps the premium-equals-sum property
//! exact instead of merely "within one cent".

use loadgen_core::money::round_currency;
use loadgen_core::Logic;
use loadgen_refdata::CalcParams;
use rust_decimal::Decimal;

use crate::pricing::PricingAttributes;

/// Computed monetary fields for one SKU under one logic.
///
/// Every value is already finalized to currency precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonetaryFields {
    /// Final aggregate premium: sum of the six constituent fields below.
    pub premium: Decimal,
    /// Loss cost.
    pub loss_cost: Decimal,
    /// Severity-adjusted reserve.
    pub reserve: Decimal,
    /// Underwriting fee after the logic's loading.
    pub uw_fee: Decimal,
    /// HIC contract fee after the logic's factor.
    pub hic_contract_fee: Decimal,
    /// IWW markup.
    pub iww_markup: Decimal,
    /// Ceding commission.
    pub ceding_commission: Decimal,
}

impl MonetaryFields {
    /// Computes all monetary fields for one logic from a shared attribute
    /// bundle.
    ///
    /// The chain, unrounded until each field finalizes:
    ///
    /// ```text
    /// reserve_adjustment = expected_frequency * term * (labor_rate + trip_charge)
    /// adjusted_reserve   = reserve + reserve_adjustment
    /// uw_fee             = sheet_uw_fee * uw_fee_loading
    /// iww_markup         = iww_markup_rate * (loss_cost + adjusted_reserve)
    /// ceding_commission  = ceding_rate * (loss_cost + adjusted_reserve + uw_fee)
    /// hic_contract_fee   = hic_cost * hic_factor
    /// premium            = sum of the finalized constituents
    /// ```
    pub fn compute(attrs: &PricingAttributes, logic: Logic, params: &CalcParams) -> Self {
        let rates = params.rates(logic);
        let term = Decimal::from(attrs.term);

        let reserve_adjustment =
            params.expected_frequency * term * (attrs.labor_rate + attrs.trip_charge);
        let adjusted_reserve = attrs.reserve + reserve_adjustment;
        let uw_fee = attrs.uw_fee * rates.uw_fee_loading;
        let iww_markup = rates.iww_markup_rate * (attrs.loss_cost + adjusted_reserve);
        let ceding_commission = rates.ceding_rate * (attrs.loss_cost + adjusted_reserve + uw_fee);
        let hic_contract_fee = attrs.hic_cost * rates.hic_factor;

        let loss_cost = round_currency(attrs.loss_cost);
        let reserve = round_currency(adjusted_reserve);
        let uw_fee = round_currency(uw_fee);
        let hic_contract_fee = round_currency(hic_contract_fee);
        let iww_markup = round_currency(iww_markup);
        let ceding_commission = round_currency(ceding_commission);
        let premium =
            loss_cost + reserve + uw_fee + hic_contract_fee + iww_markup + ceding_commission;

        Self {
            premium,
            loss_cost,
            reserve,
            uw_fee,
            hic_contract_fee,
            iww_markup,
            ceding_commission,
        }
    }

    /// Sum of the six constituent fields the premium is documented to equal.
    pub fn constituent_sum(&self) -> Decimal {
        self.loss_cost
            + self.reserve
            + self.uw_fee
            + self.hic_contract_fee
            + self.iww_markup
            + self.ceding_commission
    }
}
