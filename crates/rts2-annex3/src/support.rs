//! Shared builders for the threshold tables.
//!
//! Most tables repeat the same shape: one liquid row with the S1-S4 SSTI
//! pre-trade percentiles, 70/80-60/90-70 for the other cells, and a
//! non-liquid row carrying the same four floors without percentiles. Only
//! the floors and the liquidity criteria vary between sub-asset classes.

use rts2_core::Money;
use rts2_taxonomy::thresholds::{
    LiquidityCriteria, Percentile, PostTrade, PreTrade, ThresholdSpecification, ThresholdTable,
};

pub(crate) const SWAP_MATURITY: &str = "time to maturity bucket of the swap defined as follows:";
pub(crate) const OPTION_MATURITY: &str =
    "time to maturity bucket of the option defined as follows:";
pub(crate) const FUTURE_FORWARD_MATURITY: &str =
    "time to maturity bucket of the future/forward defined as follows:";

fn segment_percentiles() -> Percentile {
    Percentile::by_segment([("S1", 30), ("S2", 40), ("S3", 50), ("S4", 60)])
}

/// A liquid-market row with the standard percentile columns.
pub(crate) fn liquid_row(
    ssti_pre: i64,
    lis_pre: i64,
    ssti_post: i64,
    lis_post: i64,
) -> ThresholdTable {
    ThresholdTable {
        adna_floor: None,
        ssti_pre_trade: PreTrade {
            trade_percentile: Some(segment_percentiles()),
            threshold_floor: Some(Money::eur(ssti_pre)),
        },
        lis_pre_trade: PreTrade {
            trade_percentile: Some(Percentile::Single(70)),
            threshold_floor: Some(Money::eur(lis_pre)),
        },
        ssti_post_trade: PostTrade {
            trade_percentile: Some(Percentile::Single(80)),
            volume_percentile: Some(60),
            threshold_floor: Some(Money::eur(ssti_post)),
        },
        lis_post_trade: PostTrade {
            trade_percentile: Some(Percentile::Single(90)),
            volume_percentile: Some(70),
            threshold_floor: Some(Money::eur(lis_post)),
        },
    }
}

/// A floors-only row, used for non-liquid sub-classes and for the
/// ADNA-banded equity tables.
pub(crate) fn floor_row(
    ssti_pre: i64,
    lis_pre: i64,
    ssti_post: i64,
    lis_post: i64,
) -> ThresholdTable {
    ThresholdTable {
        adna_floor: None,
        ssti_pre_trade: PreTrade {
            trade_percentile: None,
            threshold_floor: Some(Money::eur(ssti_pre)),
        },
        lis_pre_trade: PreTrade {
            trade_percentile: None,
            threshold_floor: Some(Money::eur(lis_pre)),
        },
        ssti_post_trade: PostTrade {
            trade_percentile: None,
            volume_percentile: None,
            threshold_floor: Some(Money::eur(ssti_post)),
        },
        lis_post_trade: PostTrade {
            trade_percentile: None,
            volume_percentile: None,
            threshold_floor: Some(Money::eur(lis_post)),
        },
    }
}

/// A floors-only row selected by an ADNA band.
pub(crate) fn banded_row(
    adna_floor: i64,
    ssti_pre: i64,
    lis_pre: i64,
    ssti_post: i64,
    lis_post: i64,
) -> ThresholdTable {
    ThresholdTable {
        adna_floor: Some(Money::eur(adna_floor)),
        ..floor_row(ssti_pre, lis_pre, ssti_post, lis_post)
    }
}

/// Liquidity criteria from an ADNA floor and a trade count.
pub(crate) fn liquidity(adna: i64, trades: u32) -> LiquidityCriteria {
    LiquidityCriteria {
        average_daily_notional_amount: Some(Money::eur(adna)),
        average_daily_number_of_trades: Some(trades),
        qualitative_liquidity_criterion: None,
    }
}

/// The common one-liquid-row specification: liquid and non-liquid share the
/// same four floors.
pub(crate) fn standard_specification(
    criteria: LiquidityCriteria,
    ssti_pre: i64,
    lis_pre: i64,
    ssti_post: i64,
    lis_post: i64,
) -> ThresholdSpecification {
    ThresholdSpecification {
        liquidity_criteria: Some(criteria),
        liquid_thresholds: vec![liquid_row(ssti_pre, lis_pre, ssti_post, lis_post)],
        non_liquid_thresholds: Some(floor_row(ssti_pre, lis_pre, ssti_post, lis_post)),
    }
}
