//! Interest Rate Derivatives (Table 5.1, 5.2 and 5.3).

use rts2_core::BucketCeiling;
use rts2_taxonomy::thresholds::LiquidityCriteria;
use rts2_taxonomy::{
    AssetClass, BucketChain, Criterion, DateKind, SubAssetClass, SubjectAttr, TaxonomyResult,
};

use crate::support::{self, OPTION_MATURITY, SWAP_MATURITY};

/// Back-month liquidity carry-over applied to the futures-style entries.
const BACK_MONTH: &str = "whenever a sub-class is determined to have a liquid market with \
     respect to a specific time to maturity bucket and the sub-class defined by the next time \
     to maturity bucket is determined not to have a liquid market, the first back month \
     contract is determined to have a liquid market 2 weeks before expiration of the front \
     month";

const SWAPTION_UNDERLYING_SWAP_TYPE: &str = "underlying swap type defined as follows: \
     fixed-to-fixed single currency swap, futures/forwards on fixed-to-fixed single currency \
     swap, fixed-to-float single currency swap, futures/forwards on fixed-to-float single \
     currency swap, float-to-float single currency swap, futures/forwards on float-to-float \
     single currency swap, inflation single currency swap, futures/forwards on inflation \
     single currency swap, OIS single currency swap, futures/forwards on OIS single currency \
     swap, fixed-to-fixed multi-currency swap, futures/forwards on fixed-to-fixed \
     multi-currency swap, fixed-to-float multi-currency swap, futures/forwards on \
     fixed-to-float multi-currency swap, float-to-float multi-currency swap, futures/forwards \
     on float-to-float multi-currency swap, inflation multi-currency swap, futures/forwards \
     on inflation multi-currency swap, OIS multi-currency swap, futures/forwards on OIS \
     multi-currency swap";

/// The [3m, 6m, 1y, 2y, 3y] chain shared by most entries of the tables.
fn standard_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::months(3),
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

/// The [1m, 3m, 6m, 1y, 2y, 3y] chain of the swap entries.
fn swap_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::months(1),
        BucketCeiling::months(3),
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

fn bond_futures() -> TaxonomyResult<SubAssetClass> {
    let term_chain = BucketChain::new(vec![
        BucketCeiling::years(4),
        BucketCeiling::years(8),
        BucketCeiling::years(15),
        BucketCeiling::unbounded(),
    ])?;
    Ok(SubAssetClass::new("Bond futures/forwards")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingIssuer,
            "issuer of the underlying",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::UnderlyingTerm,
            "term of the underlying deliverable bond defined as follows:",
            term_chain,
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            standard_chain()?,
        ))
        .with_thresholds(support::standard_specification(
            LiquidityCriteria {
                qualitative_liquidity_criterion: Some(BACK_MONTH.to_string()),
                ..support::liquidity(5_000_000, 10)
            },
            4_000_000,
            5_000_000,
            20_000_000,
            25_000_000,
        )))
}

fn bond_options() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Bond options")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingInstrument,
            "underlying bond or underlying bond future/forward",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            standard_chain()?,
        ))
        .with_thresholds(support::standard_specification(
            support::liquidity(5_000_000, 10),
            4_000_000,
            5_000_000,
            20_000_000,
            25_000_000,
        )))
}

fn ir_futures_and_fra() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("IR futures and FRA")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingInterestRate,
            "underlying interest rate",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::InterestRateTerm,
            "term of the underlying interest rate",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            standard_chain()?,
        ))
        .with_thresholds(support::standard_specification(
            LiquidityCriteria {
                qualitative_liquidity_criterion: Some(BACK_MONTH.to_string()),
                ..support::liquidity(500_000_000, 10)
            },
            5_000_000,
            10_000_000,
            20_000_000,
            25_000_000,
        )))
}

fn ir_options() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("IR options")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingInterestRate,
            "underlying interest rate or underlying interest rate future or FRA",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::InterestRateTerm,
            "term of the underlying interest rate",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            standard_chain()?,
        ))
        .with_thresholds(support::standard_specification(
            support::liquidity(500_000_000, 10),
            5_000_000,
            10_000_000,
            20_000_000,
            25_000_000,
        )))
}

fn swaptions() -> TaxonomyResult<SubAssetClass> {
    let option_chain = BucketChain::new(vec![
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(5),
        BucketCeiling::years(10),
        BucketCeiling::unbounded(),
    ])?;
    Ok(SubAssetClass::new("Swaptions")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingSwapType,
            SWAPTION_UNDERLYING_SWAP_TYPE,
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::NotionalCurrency,
            "notional currency defined as the currency in which the notional amount of the \
             option is denominated",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::InflationIndex,
            "inflation index if the underlying swap type is either an inflation single \
             currency swap or an inflation multi-currency swap",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Swap,
            SWAP_MATURITY,
            swap_chain()?,
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Option,
            OPTION_MATURITY,
            option_chain,
        ))
        .with_thresholds(support::standard_specification(
            support::liquidity(500_000_000, 10),
            4_000_000,
            5_000_000,
            9_000_000,
            10_000_000,
        )))
}

fn multi_currency_swap(name: &str, description: &str) -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new(name)
        .with_description(description)
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::NotionalCurrencyPair,
            "notional currency pair defined as combination of the two currencies in which the \
             two legs of the swap are denominated",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            swap_chain()?,
        ))
        .with_thresholds(support::standard_specification(
            support::liquidity(50_000_000, 10),
            4_000_000,
            5_000_000,
            9_000_000,
            10_000_000,
        )))
}

fn single_currency_swap(name: &str, description: &str) -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new(name)
        .with_description(description)
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::NotionalCurrency,
            "notional currency in which the two legs of the swap are denominated",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            SWAP_MATURITY,
            swap_chain()?,
        ))
        .with_thresholds(support::standard_specification(
            support::liquidity(50_000_000, 10),
            4_000_000,
            5_000_000,
            9_000_000,
            10_000_000,
        )))
}

pub(crate) fn asset_class() -> TaxonomyResult<AssetClass> {
    Ok(AssetClass::new("Interest Rate Derivatives")
        .with_reference("Table 5.1, 5.2 and 5.3")
        .with_sub_asset_class(bond_futures()?)
        .with_sub_asset_class(bond_options()?)
        .with_sub_asset_class(ir_futures_and_fra()?)
        .with_sub_asset_class(ir_options()?)
        .with_sub_asset_class(swaptions()?)
        .with_sub_asset_class(multi_currency_swap(
            "Fixed-to-Float 'multi-currency swaps' or 'cross-currency swaps' and \
             futures/forwards on Fixed-to-Float 'multi-currency swaps' or 'cross-currency \
             swaps'",
            "a swap or a future/forward on a swap where two parties exchange cash flows \
             denominated in different currencies and the cash flows of one leg are determined \
             by a fixed interest rate while those of the other leg are determined by a \
             floating interest rate",
        )?)
        .with_sub_asset_class(single_currency_swap(
            "Fixed-to-Float 'single currency swaps' and futures/forwards on Fixed-to-Float \
             'single currency swaps'",
            "a swap or a future/forward on a swap where two parties exchange cash flows \
             denominated in the same currency and the cash flows of one leg are determined by \
             a fixed interest rate while those of the other leg are determined by a floating \
             interest rate",
        )?)
        .with_sub_asset_class(single_currency_swap(
            "Overnight Index Swap (OIS) 'single currency swaps' and futures/forwards on \
             Overnight Index Swap (OIS) 'single currency swaps'",
            "a swap or a future/forward on a swap where two parties exchange cash flows \
             denominated in the same currency and where the cash flows of at least one leg \
             are determined by an Overnight Index Swap (OIS) rate",
        )?))
}
