//! Calculation parameters.
//!
//! The financial formulas themselves are fixed; the rates they apply are
//! configuration-level data with production defaults, so nothing monetary
//! is a magic literal buried in calculation code.

use loadgen_core::Logic;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::RefdataError;

/// Per-logic rates applied by the financial calculator.
///
/// HORN and AMT share formula structure; only these rates differ.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogicRates {
    /// Multiplier applied to the sheet underwriting fee.
    pub uw_fee_loading: Decimal,

    /// Markup rate applied to loss cost plus adjusted reserve.
    pub iww_markup_rate: Decimal,

    /// Ceding commission rate applied to loss cost, adjusted reserve and
    /// underwriting fee.
    pub ceding_rate: Decimal,

    /// Multiplier applied to the sheet HIC cost.
    pub hic_factor: Decimal,
}

impl Default for LogicRates {
    fn default() -> Self {
        // HORN rates; AMT overrides in CalcParams::default.
        Self {
            uw_fee_loading: dec!(1.00),
            iww_markup_rate: dec!(0.35),
            ceding_rate: dec!(0.08),
            hic_factor: dec!(1.00),
        }
    }
}

/// Calculation parameters for both logics plus shared business constants.
///
/// # Examples
///
/// ```
/// use loadgen_refdata::CalcParams;
/// use loadgen_core::Logic;
/// use rust_decimal_macros::dec;
///
/// let params = CalcParams::default();
/// assert_eq!(params.expected_frequency, dec!(0.005));
/// assert_ne!(
///     params.rates(Logic::Horn).iww_markup_rate,
///     params.rates(Logic::Amt).iww_markup_rate
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CalcParams {
    /// Expected claim frequency per month of term (business parameter, not
    /// derived).
    pub expected_frequency: Decimal,

    /// Rates applied under HORN logic.
    pub horn: LogicRates,

    /// Rates applied under AMT logic.
    pub amt: LogicRates,
}

impl CalcParams {
    /// Returns the rates for one logic.
    pub fn rates(&self, logic: Logic) -> &LogicRates {
        match logic {
            Logic::Horn => &self.horn,
            Logic::Amt => &self.amt,
        }
    }

    /// Validates parameter ranges.
    ///
    /// Frequency and rates must be non-negative; loadings and factors must
    /// be positive.
    pub fn validate(&self) -> Result<(), RefdataError> {
        if self.expected_frequency.is_sign_negative() {
            return Err(RefdataError::InvalidParams {
                reason: "expected_frequency must be non-negative".to_string(),
            });
        }
        for (tag, rates) in [("horn", &self.horn), ("amt", &self.amt)] {
            if rates.iww_markup_rate.is_sign_negative() || rates.ceding_rate.is_sign_negative() {
                return Err(RefdataError::InvalidParams {
                    reason: format!("{tag}: rates must be non-negative"),
                });
            }
            if rates.uw_fee_loading <= Decimal::ZERO || rates.hic_factor <= Decimal::ZERO {
                return Err(RefdataError::InvalidParams {
                    reason: format!("{tag}: loadings and factors must be positive"),
                });
            }
        }
        Ok(())
    }
}

impl Default for CalcParams {
    /// Production parameters.
    fn default() -> Self {
        Self {
            expected_frequency: dec!(0.005),
            horn: LogicRates::default(),
            amt: LogicRates {
                uw_fee_loading: dec!(1.05),
                iww_markup_rate: dec!(0.25),
                ceding_rate: dec!(0.12),
                hic_factor: dec!(1.10),
            },
        }
    }
}
