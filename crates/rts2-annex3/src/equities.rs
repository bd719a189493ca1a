//! Equity Derivatives (Table 6.1, 6.2 and 6.3).
//!
//! The swaps entry dispatches its maturity bucketing on the equity
//! parameter. The tables' parameter domain is {price, dividend, variance}
//! while the bucket regimes are keyed {price, volatility, dividend}; a
//! subject declaring `variance` therefore passes the parameter criterion but
//! has no bucket regime. That mismatch is in the source tables and is
//! carried as-is.

use rts2_core::BucketCeiling;
use rts2_taxonomy::thresholds::ThresholdSpecification;
use rts2_taxonomy::{
    AssetClass, BucketChain, Criterion, DateKind, DispatchArm, SubAssetClass, SubjectAttr,
    TaxonomyResult,
};

use crate::support::{self, SWAP_MATURITY};

const UNDERLYING_TYPE: &str = "underlying type: single name, index, basket";
const UNDERLYING_EQUITY: &str = "underlying single name, index, basket";
const PARAMETER: &str = "parameter: price return basic performance parameter, parameter \
     return dividend, parameter return variance, parameter return volatility";
const PRICE_RETURN: &str = "Price return basic performance parameter";

fn price_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::months(1),
        BucketCeiling::months(3),
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

fn volatility_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::months(3),
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

fn dividend_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

/// ADNA-banded swap thresholds (Table 6.2): the row is picked by the
/// sub-class's ADNA band, no percentile columns.
fn swap_thresholds() -> ThresholdSpecification {
    ThresholdSpecification {
        liquidity_criteria: Some(support::liquidity(50_000_000, 15)),
        liquid_thresholds: vec![
            support::banded_row(50_000_000, 250_000, 300_000, 1_250_000, 1_500_000),
            support::banded_row(100_000_000, 500_000, 550_000, 2_500_000, 3_000_000),
            support::banded_row(200_000_000, 1_000_000, 1_500_000, 5_000_000, 5_500_000),
        ],
        non_liquid_thresholds: Some(support::floor_row(20_000, 25_000, 100_000, 150_000)),
    }
}

fn swaps() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Swaps")
        .with_criterion(Criterion::discrete(
            SubjectAttr::UnderlyingType,
            UNDERLYING_TYPE,
            ["single name", "index", "basket"],
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingEquity,
            UNDERLYING_EQUITY,
        ))
        .with_criterion(Criterion::discrete(
            SubjectAttr::EquityParameter,
            PARAMETER,
            ["price", "dividend", "variance"],
        ))
        .with_criterion(Criterion::dispatch(
            SubjectAttr::EquityParameter,
            SWAP_MATURITY,
            vec![
                DispatchArm::new(
                    ["price"],
                    Criterion::bucketed(DateKind::Lifetime, PRICE_RETURN, price_chain()?),
                ),
                DispatchArm::new(
                    ["volatility"],
                    Criterion::bucketed(
                        DateKind::Lifetime,
                        "Parameter return variance/volatility",
                        volatility_chain()?,
                    ),
                ),
                DispatchArm::new(
                    ["dividend"],
                    Criterion::bucketed(
                        DateKind::Lifetime,
                        "Parameter return dividend",
                        dividend_chain()?,
                    ),
                ),
            ],
        ))
        .with_thresholds(swap_thresholds()))
}

fn portfolio_swaps() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Portfolio Swaps")
        .with_criterion(Criterion::discrete(
            SubjectAttr::UnderlyingType,
            UNDERLYING_TYPE,
            ["single name", "index", "basket"],
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingEquity,
            UNDERLYING_EQUITY,
        ))
        .with_criterion(Criterion::discrete(
            SubjectAttr::EquityParameter,
            PARAMETER,
            ["price", "dividend", "variance"],
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            PRICE_RETURN,
            price_chain()?,
        ))
        .with_thresholds(swap_thresholds()))
}

pub(crate) fn asset_class() -> TaxonomyResult<AssetClass> {
    Ok(AssetClass::new("Equity Derivatives")
        .with_reference("Table 6.1, 6.2 and 6.3")
        .with_sub_asset_class(swaps()?)
        .with_sub_asset_class(portfolio_swaps()?))
}
