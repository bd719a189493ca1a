//! Commodity Derivatives (Table 7.1, 7.2 and 7.3).
//!
//! Metals dispatch their maturity bucketing on the metal type (precious
//! metals get an extra 3-month bucket); energy dispatches on the energy
//! product code into the oil, coal, and gas/electricity regimes.

use rts2_core::BucketCeiling;
use rts2_taxonomy::thresholds::ThresholdSpecification;
use rts2_taxonomy::{
    AssetClass, BucketChain, Criterion, DateKind, DispatchArm, SubAssetClass, SubjectAttr,
    TaxonomyResult,
};

use crate::rts23;
use crate::support::{self, FUTURE_FORWARD_MATURITY, OPTION_MATURITY, SWAP_MATURITY};

const METAL_TYPE: &str = "metal type: precious metal, non-precious metal";
const ENERGY_TYPE: &str = "energy type: oil, oil distillates, coal, oil light ends, natural \
     gas, electricity, inter-energy";
const LOAD_TYPE: &str = "load type defined as baseload, peakload, off-peak or others, \
     applicable to energy type: electricity";
const DELIVERY: &str = "delivery/ cash settlement location applicable to energy types: oil, \
     oil distillates, oil light ends, electricity, inter-energy";

fn common_thresholds() -> ThresholdSpecification {
    support::standard_specification(
        support::liquidity(10_000_000, 10),
        250_000,
        500_000,
        750_000,
        1_000_000,
    )
}

fn metal_dispatch(description: &str) -> TaxonomyResult<Criterion> {
    let precious = BucketChain::new(vec![
        BucketCeiling::months(3),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])?;
    let non_precious = BucketChain::new(vec![
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])?;
    Ok(Criterion::dispatch(
        SubjectAttr::MetalType,
        description,
        vec![
            DispatchArm::new(
                ["PRME"],
                Criterion::bucketed(DateKind::Lifetime, "precious metal", precious),
            ),
            DispatchArm::new(
                ["NPRM"],
                Criterion::bucketed(DateKind::Lifetime, "non-precious metal", non_precious),
            ),
        ],
    ))
}

fn energy_dispatch(description: &str) -> TaxonomyResult<Criterion> {
    let oil = BucketChain::new(vec![
        BucketCeiling::months(4),
        BucketCeiling::months(8),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
    ])?;
    let coal = BucketChain::new(vec![
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
    ])?;
    let gas_electricity = BucketChain::new(vec![
        BucketCeiling::months(1),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
    ])?;
    Ok(Criterion::dispatch(
        SubjectAttr::EnergyType,
        description,
        vec![
            DispatchArm::new(
                rts23::OIL_PRODUCTS,
                Criterion::bucketed(DateKind::Lifetime, "Oil/ Oil Distillates/ Oil Light ends", oil),
            ),
            DispatchArm::new(
                rts23::COAL_PRODUCTS,
                Criterion::bucketed(DateKind::Lifetime, "Coal", coal),
            ),
            DispatchArm::new(
                rts23::GAS_ELECTRICITY_PRODUCTS,
                Criterion::bucketed(
                    DateKind::Lifetime,
                    "Natural Gas/ Electricity/ Inter-energy",
                    gas_electricity,
                ),
            ),
        ],
    ))
}

fn metal_sub_class(
    name: &str,
    notional_currency: &str,
    maturity: &str,
) -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new(name)
        .with_criterion(Criterion::discrete(
            SubjectAttr::MetalType,
            METAL_TYPE,
            rts23::METAL_PRODUCTS,
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingMetal,
            "underlying metal",
        ))
        .with_criterion(Criterion::arbitrary(SubjectAttr::NotionalCurrency, notional_currency))
        .with_criterion(metal_dispatch(maturity)?)
        .with_thresholds(common_thresholds()))
}

fn energy_futures() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Energy commodity futures/forwards")
        .with_criterion(Criterion::discrete(
            SubjectAttr::EnergyType,
            ENERGY_TYPE,
            rts23::ENERGY_PRODUCTS,
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingEnergy,
            "underlying energy",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::NotionalCurrency,
            "notional currency defined as the currency in which the notional amount of the \
             future/forward is denominated",
        ))
        .with_criterion(Criterion::arbitrary(SubjectAttr::LoadType, LOAD_TYPE))
        .with_criterion(Criterion::arbitrary(SubjectAttr::DeliveryLocation, DELIVERY))
        .with_criterion(energy_dispatch(FUTURE_FORWARD_MATURITY)?)
        .with_thresholds(common_thresholds()))
}

fn energy_swaps() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Energy commodity swaps")
        .with_criterion(Criterion::discrete(
            SubjectAttr::EnergyType,
            ENERGY_TYPE,
            rts23::ENERGY_PRODUCTS,
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingEnergy,
            "underlying energy",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::NotionalCurrency,
            "notional currency defined as the currency in which the notional amount of the \
             swap is denominated",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::SettlementType,
            "settlement type defined as cash, physical or other",
        ))
        .with_criterion(Criterion::arbitrary(SubjectAttr::LoadType, LOAD_TYPE))
        .with_criterion(Criterion::arbitrary(SubjectAttr::DeliveryLocation, DELIVERY))
        .with_criterion(energy_dispatch(SWAP_MATURITY)?)
        .with_thresholds(common_thresholds()))
}

fn agricultural_futures() -> TaxonomyResult<SubAssetClass> {
    let chain = BucketChain::new(vec![
        BucketCeiling::months(3),
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
    ])?;
    Ok(SubAssetClass::new("Agricultural commodity futures/forwards")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingAgricultural,
            "underlying agricultural commodity",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::NotionalCurrency,
            "notional currency defined as the currency in which the notional amount of the \
             future/forward is denominated",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            FUTURE_FORWARD_MATURITY,
            chain,
        ))
        .with_thresholds(common_thresholds()))
}

pub(crate) fn asset_class() -> TaxonomyResult<AssetClass> {
    Ok(AssetClass::new("Commodity Derivatives")
        .with_reference("Table 7.1, 7.2 and 7.3")
        .with_sub_asset_class(metal_sub_class(
            "Metal commodity futures/forwards",
            "notional currency defined as the currency in which the notional amount of the \
             future/forward is denominated",
            FUTURE_FORWARD_MATURITY,
        )?)
        .with_sub_asset_class(metal_sub_class(
            "Metal commodity options",
            "notional currency defined as the currency in which the notional amount of the \
             option is denominated",
            OPTION_MATURITY,
        )?)
        .with_sub_asset_class(energy_futures()?)
        .with_sub_asset_class(energy_swaps()?)
        .with_sub_asset_class(agricultural_futures()?))
}
