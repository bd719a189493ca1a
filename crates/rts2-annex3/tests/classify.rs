//! End-to-end classification against the reference taxonomy.

use std::sync::Arc;

use rts2_annex3::{reference_taxonomy, VERSION_ID};
use rts2_core::{Date, Money};
use rts2_taxonomy::{ClassificationError, DateKind, Subject, SubjectAttr, Taxonomy};

fn taxonomy() -> Taxonomy {
    reference_taxonomy().unwrap()
}

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

#[test]
fn test_every_declared_pair_resolves_to_its_node() {
    let taxonomy = taxonomy();
    for asset_class in taxonomy.asset_classes() {
        let found = taxonomy.asset_class_by_name(asset_class.name()).unwrap();
        assert_eq!(found.name(), asset_class.name());
        for sub in asset_class.sub_asset_classes() {
            let found = found.sub_asset_class_by_name(sub.name()).unwrap();
            assert_eq!(found.name(), sub.name());
        }
    }
}

#[test]
fn test_unknown_asset_class_is_one_error_and_nothing_resolved() {
    let taxonomy = taxonomy();
    let subject = Subject::new("Weather Derivatives", "Snowfall futures");
    let classification = taxonomy.classify(&subject);
    assert!(classification.asset_class().is_none());
    assert!(classification.sub_asset_class().is_none());
    assert_eq!(classification.errors().len(), 1);
    assert!(matches!(
        &classification.errors()[0],
        ClassificationError::UnknownAssetClass { name } if name == "Weather Derivatives"
    ));
}

#[test]
fn test_unknown_sub_asset_class_names_both_levels() {
    let taxonomy = taxonomy();
    let subject = Subject::new("Foreign Exchange Derivatives", "Quanto swap");
    let classification = taxonomy.classify(&subject);
    assert!(classification.asset_class().is_some());
    assert!(classification.sub_asset_class().is_none());
    assert_eq!(classification.errors().len(), 1);
    let text = classification.errors()[0].to_string();
    assert!(text.contains("Foreign Exchange Derivatives"));
    assert!(text.contains("Quanto swap"));
}

#[test]
fn test_deliverable_forward_sixty_day_window() {
    let taxonomy = taxonomy();
    let from = date(2025, 2, 3);
    let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
        .with(SubjectAttr::UnderlyingCurrencyPair, "EUR~USD")
        .with_dates(DateKind::Lifetime, from, from.add_days(60));
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    let key = classification.key();
    assert_eq!(key.get("RTS 2 version").unwrap(), VERSION_ID);
    assert_eq!(key.get("Asset class").unwrap(), "Foreign Exchange Derivatives");
    assert_eq!(key.get("Segmentation criterion 1").unwrap(), "EUR~USD");
    assert_eq!(
        key.get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 2: 1 week to 3 months"
    );
}

#[test]
fn test_deliverable_forward_one_day_window_is_first_bucket() {
    let taxonomy = taxonomy();
    let from = date(2025, 2, 3);
    let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
        .with(SubjectAttr::UnderlyingCurrencyPair, "EUR~USD")
        .with_dates(DateKind::Lifetime, from, from.add_days(1));
    let classification = taxonomy.classify(&subject);
    assert_eq!(
        classification.key().get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 1: Zero to 1 week"
    );
}

#[test]
fn test_fx_chain_extends_beyond_declared_ceilings() {
    let taxonomy = taxonomy();
    let from = date(2025, 2, 3);
    // Declared ceilings stop at 3 years; a 5-year window lands in a
    // synthesized bucket continuing the 1-year step.
    let subject = Subject::new("Foreign Exchange Derivatives", "FX futures")
        .with(SubjectAttr::UnderlyingCurrencyPair, "GBP~USD")
        .with_dates(DateKind::Lifetime, from, from.add_years(5).unwrap());
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    assert_eq!(
        classification.key().get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 7: 4 years to 5 years"
    );
}

#[test]
fn test_bond_futures_term_and_lifetime_buckets() {
    let taxonomy = taxonomy();
    let from = date(2025, 1, 15);
    let subject = Subject::new("Interest Rate Derivatives", "Bond futures/forwards")
        .with(SubjectAttr::UnderlyingIssuer, "Bundesrepublik Deutschland")
        .with_dates(DateKind::UnderlyingTerm, from, from.add_years(10).unwrap())
        .with_dates(DateKind::Lifetime, from, from.add_days(30));
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    let key = classification.key();
    assert_eq!(
        key.get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 3: 8 years to 15 years"
    );
    assert_eq!(
        key.get("Segmentation criterion 3").unwrap(),
        "Maturity bucket 1: Zero to 3 months"
    );
}

#[test]
fn test_bond_futures_ultra_long_term_is_unbounded_bucket() {
    let taxonomy = taxonomy();
    let from = date(2025, 1, 15);
    let subject = Subject::new("Interest Rate Derivatives", "Bond futures/forwards")
        .with(SubjectAttr::UnderlyingIssuer, "Bundesrepublik Deutschland")
        .with_dates(DateKind::UnderlyingTerm, from, from.add_years(20).unwrap())
        .with_dates(DateKind::Lifetime, from, from.add_days(30));
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    assert_eq!(
        classification.key().get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 4: 15 years to unbounded"
    );
}

fn swaption_subject() -> Subject {
    let from = date(2025, 3, 10);
    Subject::new("Interest Rate Derivatives", "Swaptions")
        .with(SubjectAttr::UnderlyingSwapType, "fixed-to-float single currency swap")
        .with(SubjectAttr::NotionalCurrency, "EUR")
        .with(SubjectAttr::InflationIndex, "none")
        .with_dates(DateKind::Swap, from, from.add_days(45))
        .with_dates(DateKind::Option, from, from.add_years(7).unwrap())
}

#[test]
fn test_swaptions_read_swap_and_option_windows_separately() {
    let taxonomy = taxonomy();
    let classification = taxonomy.classify(&swaption_subject());
    assert!(classification.is_complete());
    assert_eq!(classification.options().len(), 5);
    let key = classification.key();
    assert_eq!(
        key.get("Segmentation criterion 4").unwrap(),
        "Maturity bucket 2: 1 month to 3 months"
    );
    assert_eq!(
        key.get("Segmentation criterion 5").unwrap(),
        "Maturity bucket 5: 5 years to 10 years"
    );
}

#[test]
fn test_swaption_option_chain_has_unbounded_tail() {
    let taxonomy = taxonomy();
    let from = date(2025, 3, 10);
    let mut subject = swaption_subject();
    subject = subject.with_dates(DateKind::Option, from, from.add_years(30).unwrap());
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    assert_eq!(
        classification.key().get("Segmentation criterion 5").unwrap(),
        "Maturity bucket 6: 10 years to unbounded"
    );
}

#[test]
fn test_same_subject_twice_yields_equal_keys() {
    let taxonomy = taxonomy();
    let first = taxonomy.classify(&swaption_subject());
    let second = taxonomy.classify(&swaption_subject());
    assert_eq!(first.key(), second.key());
}

fn equity_swap_subject(parameter: &str, days: i64) -> Subject {
    let from = date(2025, 3, 10);
    Subject::new("Equity Derivatives", "Swaps")
        .with(SubjectAttr::UnderlyingType, "single name")
        .with(SubjectAttr::UnderlyingEquity, "ACME AG")
        .with(SubjectAttr::EquityParameter, parameter)
        .with_dates(DateKind::Lifetime, from, from.add_days(days))
}

#[test]
fn test_equity_dividend_parameter_uses_the_dividend_chain() {
    let taxonomy = taxonomy();
    let classification = taxonomy.classify(&equity_swap_subject("dividend", 400));
    assert!(classification.is_complete());
    // The dividend chain starts at 1 year, so a 400-day swap is in bucket 2.
    assert_eq!(
        classification.key().get("Segmentation criterion 4").unwrap(),
        "Maturity bucket 2: 1 year to 2 years"
    );
}

#[test]
fn test_equity_variance_parameter_has_no_bucket_regime() {
    let taxonomy = taxonomy();
    // `variance` is in the parameter domain but the bucket dispatch only
    // knows price, volatility and dividend.
    let classification = taxonomy.classify(&equity_swap_subject("variance", 400));
    assert!(!classification.is_complete());
    assert_eq!(classification.options().len(), 3);
    assert_eq!(classification.errors().len(), 1);
    assert!(matches!(
        &classification.errors()[0],
        ClassificationError::UnresolvableDispatch { criterion: 4, value, .. } if value == "variance"
    ));
}

#[test]
fn test_discrete_options_are_shared_across_classifications() {
    let taxonomy = taxonomy();
    let first = taxonomy.classify(&equity_swap_subject("price", 20));
    let second = taxonomy.classify(&equity_swap_subject("price", 500));
    assert!(Arc::ptr_eq(
        first.options()[0].option(),
        second.options()[0].option()
    ));
}

fn metal_subject(metal_type: &str) -> Subject {
    let from = date(2025, 1, 15);
    Subject::new("Commodity Derivatives", "Metal commodity futures/forwards")
        .with(SubjectAttr::MetalType, metal_type)
        .with(SubjectAttr::UnderlyingMetal, "GOLD")
        .with(SubjectAttr::NotionalCurrency, "USD")
        .with_dates(DateKind::Lifetime, from, from.add_days(120))
}

#[test]
fn test_metal_dispatch_gives_precious_metals_the_short_bucket() {
    let taxonomy = taxonomy();
    let precious = taxonomy.classify(&metal_subject("PRME"));
    let non_precious = taxonomy.classify(&metal_subject("NPRM"));
    assert!(precious.is_complete());
    assert!(non_precious.is_complete());
    assert_eq!(
        precious.key().get("Segmentation criterion 4").unwrap(),
        "Maturity bucket 2: 3 months to 1 year"
    );
    assert_eq!(
        non_precious.key().get("Segmentation criterion 4").unwrap(),
        "Maturity bucket 1: Zero to 1 year"
    );
}

fn energy_subject(energy_type: &str) -> Subject {
    let from = date(2025, 1, 15);
    Subject::new("Commodity Derivatives", "Energy commodity futures/forwards")
        .with(SubjectAttr::EnergyType, energy_type)
        .with(SubjectAttr::UnderlyingEnergy, "Brent")
        .with(SubjectAttr::NotionalCurrency, "USD")
        .with(SubjectAttr::LoadType, "baseload")
        .with(SubjectAttr::DeliveryLocation, "Rotterdam")
        .with_dates(DateKind::Lifetime, from, from.add_days(30))
}

#[test]
fn test_energy_dispatch_routes_by_product_code() {
    let taxonomy = taxonomy();
    let oil = taxonomy.classify(&energy_subject("OILP"));
    let coal = taxonomy.classify(&energy_subject("COAL"));
    let gas = taxonomy.classify(&energy_subject("NGAS"));
    assert!(oil.is_complete());
    assert_eq!(
        oil.key().get("Segmentation criterion 6").unwrap(),
        "Maturity bucket 1: Zero to 4 months"
    );
    assert_eq!(
        coal.key().get("Segmentation criterion 6").unwrap(),
        "Maturity bucket 1: Zero to 6 months"
    );
    assert_eq!(
        gas.key().get("Segmentation criterion 6").unwrap(),
        "Maturity bucket 1: Zero to 1 month"
    );
}

#[test]
fn test_energy_unknown_code_fails_domain_and_dispatch() {
    let taxonomy = taxonomy();
    let classification = taxonomy.classify(&energy_subject("WIND"));
    assert!(!classification.is_complete());
    // Criterion 1 (discrete domain) and criterion 6 (dispatch) both reject.
    assert_eq!(classification.errors().len(), 2);
    assert_eq!(classification.options().len(), 4);
}

#[test]
fn test_energy_swaps_number_settlement_before_the_buckets() {
    let taxonomy = taxonomy();
    let from = date(2025, 1, 15);
    let subject = Subject::new("Commodity Derivatives", "Energy commodity swaps")
        .with(SubjectAttr::EnergyType, "ELEC")
        .with(SubjectAttr::UnderlyingEnergy, "DE baseload")
        .with(SubjectAttr::NotionalCurrency, "EUR")
        .with(SubjectAttr::SettlementType, "cash")
        .with(SubjectAttr::LoadType, "baseload")
        .with(SubjectAttr::DeliveryLocation, "Germany")
        .with_dates(DateKind::Lifetime, from, from.add_days(10));
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    assert_eq!(classification.options().len(), 7);
    assert_eq!(
        classification.key().get("Segmentation criterion 4").unwrap(),
        "cash"
    );
    assert_eq!(
        classification.key().get("Segmentation criterion 7").unwrap(),
        "Maturity bucket 1: Zero to 1 month"
    );
}

#[test]
fn test_multi_currency_swap_segments_by_currency_pair() {
    let taxonomy = taxonomy();
    let from = date(2025, 3, 10);
    let subject = Subject::new(
        "Interest Rate Derivatives",
        "Fixed-to-Float 'multi-currency swaps' or 'cross-currency swaps' and \
         futures/forwards on Fixed-to-Float 'multi-currency swaps' or 'cross-currency \
         swaps'",
    )
    .with(SubjectAttr::NotionalCurrencyPair, "EUR~USD")
    .with_dates(DateKind::Lifetime, from, from.add_days(45));
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    let key = classification.key();
    assert_eq!(key.get("Segmentation criterion 1").unwrap(), "EUR~USD");
    assert_eq!(
        key.get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 2: 1 month to 3 months"
    );
}

#[test]
fn test_cds_option_window_beyond_six_months() {
    let taxonomy = taxonomy();
    let from = date(2025, 1, 15);
    let subject = Subject::new("Credit Derivatives", "Single name CDS options")
        .with(SubjectAttr::CdsSubClass, "ACME AG senior EUR 1-2 years")
        .with_dates(DateKind::Lifetime, from, from.add_days(200));
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    assert_eq!(
        classification.key().get("Segmentation criterion 2").unwrap(),
        "Maturity bucket 2: 6 months to 1 year"
    );
}

#[test]
fn test_missing_attributes_accumulate_across_criteria() {
    let taxonomy = taxonomy();
    let subject = Subject::new("Credit Derivatives", "Single name credit default swap (CDS)");
    let classification = taxonomy.classify(&subject);
    assert!(classification.sub_asset_class().is_some());
    assert!(classification.options().is_empty());
    // Three missing attributes plus the missing date window.
    assert_eq!(classification.errors().len(), 4);
    assert!(classification
        .errors()
        .iter()
        .any(|e| matches!(e, ClassificationError::BadDateRange { .. })));
}

#[test]
fn test_criteria_less_bond_classifies_on_names_alone() {
    let taxonomy = taxonomy();
    let subject = Subject::new("Bonds (all bond types except ETCs and ETNs)", "Sovereign Bond");
    let classification = taxonomy.classify(&subject);
    assert!(classification.is_complete());
    assert!(classification.options().is_empty());
    assert_eq!(
        classification.key().get("Sub-asset class").unwrap(),
        "Sovereign Bond"
    );
}

#[test]
fn test_fx_thresholds_carry_only_non_liquid_floors() {
    let taxonomy = taxonomy();
    let sub = taxonomy.sub_asset_class_by_name("Deliverable forward (DF)").unwrap();
    let thresholds = sub.thresholds().unwrap();
    assert!(thresholds.liquid_thresholds.is_empty());
    let non_liquid = thresholds.non_liquid_thresholds.as_ref().unwrap();
    assert_eq!(
        non_liquid.ssti_pre_trade.threshold_floor,
        Some(Money::eur(4_000_000))
    );
    assert_eq!(
        non_liquid.lis_post_trade.threshold_floor,
        Some(Money::eur(25_000_000))
    );
}

#[test]
fn test_swaption_thresholds_round_trip_through_serde() {
    let taxonomy = taxonomy();
    let sub = taxonomy.sub_asset_class_by_name("Swaptions").unwrap();
    let thresholds = sub.thresholds().unwrap();
    let json = serde_json::to_string(thresholds).unwrap();
    let parsed: rts2_taxonomy::ThresholdSpecification = serde_json::from_str(&json).unwrap();
    assert_eq!(*thresholds, parsed);
    assert_eq!(
        parsed.liquid_thresholds[0].ssti_post_trade.threshold_floor,
        Some(Money::eur(9_000_000))
    );
}
