//! Credit Derivatives (Table 9.1, 9.2 and 9.3).

use rts2_core::BucketCeiling;
use rts2_taxonomy::thresholds::{LiquidityCriteria, ThresholdSpecification, ThresholdTable};
use rts2_taxonomy::{
    AssetClass, BucketChain, Criterion, DateKind, SubAssetClass, SubjectAttr, TaxonomyResult,
};

use crate::support;

const CDS_MATURITY: &str = "time maturity bucket of the CDS defined as follows:";
const CDS_OPTION_MATURITY: &str = "time maturity bucket of the option defined as follows:";

const NOTIONAL_CURRENCY: &str = "notional currency defined as the currency in which the \
     notional amount of the derivative is denominated";

const REFERENCE_ENTITY_TYPE: &str = "underlying reference entity type defined as follows: \
     \"Issuer of sovereign and public type\" means an issuer entity which is either: (a) the \
     Union; (b) a Member State including a government department, an agency or a special \
     purpose vehicle of a Member State; (c) a sovereign entity which is not listed under \
     points (a) and (b); (d) in the case of a federal Member State, a member of that \
     federation; (e) a special purpose vehicle for several Member States; (f) an \
     international financial institution established by two or more Member States which have \
     the purpose of mobilising funding and providing financial assistance to the benefit of \
     its members that are experiencing or are threatened by severe financial problems; (g) \
     the European Investment Bank; (h) a public entity which is not a sovereign issuer as \
     specified in the points (a) to (c). \"Issuer of corporate type\" means an issuer entity \
     which is not an issuer of sovereign and public type.";

const INDEX_ON_THE_RUN: &str = "The underlying index is considered to have a liquid market: \
     (1) during the whole period of its 'on-the-run status' (2) for the first 30 working days \
     of its '1x off-the-run status' 'on-the-run' index means the rolling most recent version \
     (series) of the index created on the date on which the composition of the index is \
     effective and ending one day prior to the date on which the composition of the next \
     version (series) of the index is effective. '1x off-the-run status' means the version \
     (series) of the index which is immediately prior to the current 'on-the-run' version \
     (series) at a certain point in time. A version (series) ceases being 'on-the-run' and \
     acquires its '1x off-the-run' status when the latest version (series) of the index is \
     created.";

const INDEX_OPTION_LIQUIDITY: &str = "a CDS index option whose underlying CDS index is a \
     sub-class determined to have a liquid market and whose time to maturity bucket is 0-6 \
     months is considered to have a liquid market a CDS index option whose underlying CDS \
     index is a sub-class determined to have a liquid market and whose time to maturity \
     bucket is not 0-6 months is not considered to have a liquid market a CDS index option \
     whose underlying CDS index is a sub-class determined not to have a liquid market is not \
     considered to have a liquid market for any given time to maturity bucket";

const SINGLE_NAME_OPTION_LIQUIDITY: &str = "a single name CDS option whose underlying single \
     name CDS is a sub-class determined to have a liquid market and whose time to maturity \
     bucket is 0-6 months is considered to have a liquid market a single name CDS option \
     whose underlying single name CDS is a sub-class determined to have a liquid market and \
     whose time to maturity bucket is not 0-6 months is not considered to have a liquid \
     market a single name CDS option whose underlying single name CDS is a sub-class \
     determined not to have a liquid market is not considered to have a liquid market for \
     any given time to maturity bucket";

fn liquid_rows() -> Vec<ThresholdTable> {
    vec![support::liquid_row(2_500_000, 5_000_000, 7_500_000, 10_000_000)]
}

fn non_liquid_row() -> ThresholdTable {
    support::floor_row(2_500_000, 5_000_000, 7_500_000, 10_000_000)
}

fn cds_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

fn option_chain() -> TaxonomyResult<BucketChain> {
    BucketChain::new(vec![
        BucketCeiling::months(6),
        BucketCeiling::years(1),
        BucketCeiling::years(2),
        BucketCeiling::years(3),
    ])
}

fn index_cds() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Index credit default swap (CDS)")
        .with_description(
            "a swap whose exchange of cash flows is linked to the creditworthiness of \
             several issuers of financial instruments composing an index and the occurrence \
             of credit events",
        )
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingIndex,
            "underlying index",
        ))
        .with_criterion(Criterion::arbitrary(SubjectAttr::NotionalCurrency, NOTIONAL_CURRENCY))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            CDS_MATURITY,
            cds_chain()?,
        ))
        .with_thresholds(ThresholdSpecification {
            liquidity_criteria: Some(LiquidityCriteria {
                qualitative_liquidity_criterion: Some(INDEX_ON_THE_RUN.to_string()),
                ..support::liquidity(200_000_000, 10)
            }),
            liquid_thresholds: liquid_rows(),
            non_liquid_thresholds: Some(non_liquid_row()),
        }))
}

fn single_name_cds() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Single name credit default swap (CDS)")
        .with_description(
            "a swap whose exchange of cash flows is linked to the creditworthiness of one \
             issuer of financial instruments and the occurrence of credit events",
        )
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::UnderlyingReferenceEntity,
            "underlying reference entity",
        ))
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::ReferenceEntityType,
            REFERENCE_ENTITY_TYPE,
        ))
        .with_criterion(Criterion::arbitrary(SubjectAttr::NotionalCurrency, NOTIONAL_CURRENCY))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            CDS_MATURITY,
            cds_chain()?,
        ))
        .with_thresholds(ThresholdSpecification {
            liquidity_criteria: Some(support::liquidity(10_000_000, 10)),
            liquid_thresholds: liquid_rows(),
            non_liquid_thresholds: Some(non_liquid_row()),
        }))
}

fn cds_index_options() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("CDS index options")
        .with_description("an option whose underlying is a CDS index")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::CdsIndexSubClass,
            "CDS index sub-class as specified for the sub-asset class of index credit \
             default swap (CDS)",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            CDS_OPTION_MATURITY,
            option_chain()?,
        ))
        .with_thresholds(ThresholdSpecification {
            liquidity_criteria: Some(LiquidityCriteria {
                qualitative_liquidity_criterion: Some(INDEX_OPTION_LIQUIDITY.to_string()),
                ..LiquidityCriteria::default()
            }),
            liquid_thresholds: liquid_rows(),
            non_liquid_thresholds: Some(non_liquid_row()),
        }))
}

fn single_name_cds_options() -> TaxonomyResult<SubAssetClass> {
    Ok(SubAssetClass::new("Single name CDS options")
        .with_description("an option whose underlying is a single name CDS")
        .with_criterion(Criterion::arbitrary(
            SubjectAttr::CdsSubClass,
            "single name CDS sub-class as specified for the sub-asset class of single name \
             CDS",
        ))
        .with_criterion(Criterion::bucketed(
            DateKind::Lifetime,
            CDS_OPTION_MATURITY,
            option_chain()?,
        ))
        .with_thresholds(ThresholdSpecification {
            liquidity_criteria: Some(LiquidityCriteria {
                qualitative_liquidity_criterion: Some(SINGLE_NAME_OPTION_LIQUIDITY.to_string()),
                ..LiquidityCriteria::default()
            }),
            liquid_thresholds: liquid_rows(),
            non_liquid_thresholds: Some(non_liquid_row()),
        }))
}

pub(crate) fn asset_class() -> TaxonomyResult<AssetClass> {
    Ok(AssetClass::new("Credit Derivatives")
        .with_reference("Table 9.1, 9.2 and 9.3")
        .with_sub_asset_class(index_cds()?)
        .with_sub_asset_class(single_name_cds()?)
        .with_sub_asset_class(cds_index_options()?)
        .with_sub_asset_class(single_name_cds_options()?))
}
