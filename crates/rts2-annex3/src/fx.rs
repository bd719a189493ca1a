//! Foreign Exchange Derivatives (Table 8.1 and 8.2).
//!
//! Every FX sub-asset class segments the same way: the underlying currency
//! pair, then the [1 week, 3 months, 1 year, 2 years, 3 years] maturity
//! chain. The tables define no liquid-market rows for FX; only the
//! non-liquid floors apply.

use rts2_core::BucketCeiling;
use rts2_taxonomy::thresholds::ThresholdSpecification;
use rts2_taxonomy::{
    AssetClass, BucketChain, Criterion, DateKind, SubAssetClass, SubjectAttr, TaxonomyResult,
};

use crate::support::{self, SWAP_MATURITY};

const CURRENCY_PAIR: &str = "underlying currency pair defined as combination of the two \
     currencies underlying the derivative contract";

fn maturity_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::weeks(1),
        BucketCeiling::months(3),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

fn common_thresholds() -> ThresholdSpecification {
    ThresholdSpecification {
        liquidity_criteria: None,
        liquid_thresholds: vec![],
        non_liquid_thresholds: Some(support::floor_row(
            4_000_000, 5_000_000, 20_000_000, 25_000_000,
        )),
    }
}

fn currency_pair_sub_class(name: &str, pair: &str) -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new(name)
        .with_criterion(Criterion::arbitrary(SubjectAttr::UnderlyingCurrencyPair, pair))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            maturity_chain()?,
        ))
        .with_thresholds(common_thresholds()))
}

pub(crate) fn asset_class() -> TaxonomyResult<AssetClass> {
    Ok(AssetClass::new("Foreign Exchange Derivatives")
        .with_reference("Table 8.1 and 8.2")
        .with_sub_asset_class(currency_pair_sub_class(
            "Non-deliverable forward (NDF)",
            CURRENCY_PAIR,
        )?)
        .with_sub_asset_class(currency_pair_sub_class(
            "Deliverable forward (DF)",
            CURRENCY_PAIR,
        )?)
        .with_sub_asset_class(currency_pair_sub_class(
            "Non-Deliverable FX options (NDO)",
            CURRENCY_PAIR,
        )?)
        .with_sub_asset_class(currency_pair_sub_class(
            "Deliverable FX options (DO)",
            CURRENCY_PAIR,
        )?)
        .with_sub_asset_class(currency_pair_sub_class(
            "Non-Deliverable FX swaps (NDS)",
            CURRENCY_PAIR,
        )?)
        .with_sub_asset_class(currency_pair_sub_class(
            "Deliverable FX swaps (DS)",
            CURRENCY_PAIR,
        )?)
        .with_sub_asset_class(currency_pair_sub_class(
            "FX futures",
            "underlying currency pair defined as combination of the two currencies \
             underlying the derivative",
        )?)
        .with_sub_asset_class(
            SubAssetClass::new("Other Foreign Exchange Derivatives")
                .with_description(
                    "an FX derivative that does not belong to any of the above sub-asset classes",
                )
                .with_thresholds(common_thresholds()),
        ))
}
