//! Threshold data attached to sub-asset classes.
//!
//! These are the rules and numbers that determine whether a classified
//! sub-class is liquid and which pre/post-trade SSTI and LIS thresholds
//! apply. They take no part in matching; a downstream liquidity calculation
//! consumes them after a successful classification.

use rts2_core::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A percentile from the threshold tables: either a single number or one
/// number per liquidity segment (the tables' S1..S4 columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Percentile {
    /// One percentile for all segments.
    Single(u32),
    /// A percentile per segment name.
    BySegment(BTreeMap<String, u32>),
}

impl Percentile {
    /// A per-segment percentile from `(segment, value)` pairs.
    #[must_use]
    pub fn by_segment<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        Percentile::BySegment(
            pairs
                .into_iter()
                .map(|(segment, value)| (segment.to_string(), value))
                .collect(),
        )
    }
}

/// Pre-trade SSTI or LIS threshold parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PreTrade {
    /// Trade percentile, absent for non-liquid tables.
    pub trade_percentile: Option<Percentile>,
    /// The threshold floor.
    pub threshold_floor: Option<Money>,
}

/// Post-trade SSTI or LIS threshold parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PostTrade {
    /// Trade percentile, absent for non-liquid tables.
    pub trade_percentile: Option<Percentile>,
    /// Volume percentile, absent for non-liquid tables.
    pub volume_percentile: Option<u32>,
    /// The threshold floor.
    pub threshold_floor: Option<Money>,
}

/// One row of pre/post-trade SSTI and LIS thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThresholdTable {
    /// ADNA floor selecting this row, where the tables split by ADNA band.
    pub adna_floor: Option<Money>,
    /// Pre-trade size specific to the instrument.
    pub ssti_pre_trade: PreTrade,
    /// Pre-trade large in scale.
    pub lis_pre_trade: PreTrade,
    /// Post-trade size specific to the instrument.
    pub ssti_post_trade: PostTrade,
    /// Post-trade large in scale.
    pub lis_post_trade: PostTrade,
}

/// The quantitative and qualitative liquidity criteria for a sub-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LiquidityCriteria {
    /// Average daily notional amount threshold.
    pub average_daily_notional_amount: Option<Money>,
    /// Average daily number of trades threshold.
    pub average_daily_number_of_trades: Option<u32>,
    /// Qualitative criterion applied to sub-classes deemed liquid.
    pub qualitative_liquidity_criterion: Option<String>,
}

/// The full threshold specification of a sub-asset class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThresholdSpecification {
    /// Liquidity determination criteria, where the tables define them.
    pub liquidity_criteria: Option<LiquidityCriteria>,
    /// Threshold rows for sub-classes with a liquid market.
    pub liquid_thresholds: Vec<ThresholdTable>,
    /// Thresholds for sub-classes without a liquid market.
    pub non_liquid_thresholds: Option<ThresholdTable>,
}
