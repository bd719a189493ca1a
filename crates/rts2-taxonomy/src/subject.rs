//! The subject of a classification: a structured trade attribute bag.
//!
//! The criteria read named attributes from the trade being classified. Rather
//! than duck-typing, the attributes a criterion may read form the closed
//! [`SubjectAttr`] enum, and the four date pairs the bucketed criteria use
//! form [`DateKind`]. A missing attribute is an ordinary runtime condition
//! (reported per criterion), not a type error.

use rts2_core::Date;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An attribute a segmentation criterion can read from a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SubjectAttr {
    /// Currency the notional amount is denominated in.
    NotionalCurrency,
    /// Pair of currencies the two legs of a swap are denominated in.
    NotionalCurrencyPair,
    /// Underlying currency pair of an FX derivative.
    UnderlyingCurrencyPair,
    /// Issuer of the underlying deliverable bond.
    UnderlyingIssuer,
    /// Underlying bond or bond future/forward of a bond option.
    UnderlyingInstrument,
    /// Underlying interest rate.
    UnderlyingInterestRate,
    /// Term of the underlying interest rate.
    InterestRateTerm,
    /// Underlying swap type of a swaption.
    UnderlyingSwapType,
    /// Inflation index, for inflation swap underlyings.
    InflationIndex,
    /// Underlying type: single name, index, or basket.
    UnderlyingType,
    /// Underlying single name, index, or basket of an equity derivative.
    UnderlyingEquity,
    /// Equity parameter of a swap: price, dividend, variance.
    EquityParameter,
    /// Metal type: precious or non-precious (RTS 23 sub-product code).
    MetalType,
    /// Underlying metal.
    UnderlyingMetal,
    /// Energy type (RTS 23 sub-product code under NRGY).
    EnergyType,
    /// Underlying energy.
    UnderlyingEnergy,
    /// Underlying agricultural commodity.
    UnderlyingAgricultural,
    /// Settlement type: cash, physical or other.
    SettlementType,
    /// Load type: baseload, peakload, off-peak or others.
    LoadType,
    /// Delivery or cash settlement location.
    DeliveryLocation,
    /// Underlying index of an index CDS.
    UnderlyingIndex,
    /// Underlying reference entity of a single name CDS.
    UnderlyingReferenceEntity,
    /// Type of the underlying reference entity.
    ReferenceEntityType,
    /// The CDS index sub-class underlying an index option.
    CdsIndexSubClass,
    /// The single name CDS sub-class underlying a CDS option.
    CdsSubClass,
}

impl SubjectAttr {
    /// The attribute's field name, as used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SubjectAttr::NotionalCurrency => "notional_currency",
            SubjectAttr::NotionalCurrencyPair => "notional_currency_pair",
            SubjectAttr::UnderlyingCurrencyPair => "underlying_currency_pair",
            SubjectAttr::UnderlyingIssuer => "underlying_issuer",
            SubjectAttr::UnderlyingInstrument => "underlying_instrument",
            SubjectAttr::UnderlyingInterestRate => "underlying_interest_rate",
            SubjectAttr::InterestRateTerm => "term_of_underlying_interest_rate",
            SubjectAttr::UnderlyingSwapType => "underlying_swap_type",
            SubjectAttr::InflationIndex => "inflation_index",
            SubjectAttr::UnderlyingType => "underlying_type",
            SubjectAttr::UnderlyingEquity => "underlying_equity",
            SubjectAttr::EquityParameter => "equity_parameter",
            SubjectAttr::MetalType => "metal_type",
            SubjectAttr::UnderlyingMetal => "underlying_metal",
            SubjectAttr::EnergyType => "energy_type",
            SubjectAttr::UnderlyingEnergy => "underlying_energy",
            SubjectAttr::UnderlyingAgricultural => "underlying_agricultural",
            SubjectAttr::SettlementType => "settlement_type",
            SubjectAttr::LoadType => "load_type",
            SubjectAttr::DeliveryLocation => "delivery",
            SubjectAttr::UnderlyingIndex => "underlying_index",
            SubjectAttr::UnderlyingReferenceEntity => "underlying_ref_entity",
            SubjectAttr::ReferenceEntityType => "ref_entity_type",
            SubjectAttr::CdsIndexSubClass => "cds_index_sub_class",
            SubjectAttr::CdsSubClass => "cds_sub_class",
        }
    }
}

impl fmt::Display for SubjectAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which of the subject's date pairs a bucketed criterion reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateKind {
    /// The generic trade lifetime window (`from_date`/`to_date`).
    Lifetime,
    /// The swap maturity window of a swaption.
    Swap,
    /// The option maturity window of a swaption.
    Option,
    /// The term window of an underlying deliverable bond.
    UnderlyingTerm,
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateKind::Lifetime => "maturity",
            DateKind::Swap => "swap maturity",
            DateKind::Option => "option maturity",
            DateKind::UnderlyingTerm => "underlying term",
        };
        write!(f, "{name}")
    }
}

/// A from/to date pair on a subject.
///
/// An inverted pair is representable here; it is rejected during
/// classification, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The anchor date of the window.
    pub from: Date,
    /// The (inclusive) end date of the window.
    pub to: Date,
}

/// A trade to be classified.
///
/// Built with the fluent API and read-only afterwards:
///
/// ```rust
/// use rts2_core::Date;
/// use rts2_taxonomy::subject::{DateKind, Subject, SubjectAttr};
///
/// let subject = Subject::new("Foreign Exchange Derivatives", "FX futures")
///     .with(SubjectAttr::UnderlyingCurrencyPair, "GBP~USD")
///     .with_dates(
///         DateKind::Lifetime,
///         Date::from_ymd(2025, 3, 1).unwrap(),
///         Date::from_ymd(2025, 9, 1).unwrap(),
///     );
/// assert_eq!(subject.attr(SubjectAttr::UnderlyingCurrencyPair), Some("GBP~USD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    asset_class_name: String,
    sub_asset_class_name: String,
    attrs: HashMap<SubjectAttr, String>,
    dates: HashMap<DateKind, DateRange>,
}

impl Subject {
    /// Creates a subject targeting the named asset class and sub-asset class.
    #[must_use]
    pub fn new(
        asset_class_name: impl Into<String>,
        sub_asset_class_name: impl Into<String>,
    ) -> Self {
        Self {
            asset_class_name: asset_class_name.into(),
            sub_asset_class_name: sub_asset_class_name.into(),
            attrs: HashMap::new(),
            dates: HashMap::new(),
        }
    }

    /// Sets an attribute value.
    #[must_use]
    pub fn with(mut self, attr: SubjectAttr, value: impl Into<String>) -> Self {
        self.attrs.insert(attr, value.into());
        self
    }

    /// Sets one of the date pairs.
    #[must_use]
    pub fn with_dates(mut self, kind: DateKind, from: Date, to: Date) -> Self {
        self.dates.insert(kind, DateRange { from, to });
        self
    }

    /// The asset class name the subject claims.
    #[must_use]
    pub fn asset_class_name(&self) -> &str {
        &self.asset_class_name
    }

    /// The sub-asset class name the subject claims.
    #[must_use]
    pub fn sub_asset_class_name(&self) -> &str {
        &self.sub_asset_class_name
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attr(&self, attr: SubjectAttr) -> Option<&str> {
        self.attrs.get(&attr).map(String::as_str)
    }

    /// Looks up a date pair.
    #[must_use]
    pub fn dates(&self, kind: DateKind) -> Option<DateRange> {
        self.dates.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_roundtrip() {
        let from = Date::from_ymd(2025, 1, 1).unwrap();
        let to = Date::from_ymd(2025, 7, 1).unwrap();
        let subject = Subject::new("Credit Derivatives", "Index credit default swap (CDS)")
            .with(SubjectAttr::UnderlyingIndex, "iTraxx Europe")
            .with(SubjectAttr::NotionalCurrency, "EUR")
            .with_dates(DateKind::Lifetime, from, to);

        assert_eq!(subject.asset_class_name(), "Credit Derivatives");
        assert_eq!(subject.attr(SubjectAttr::UnderlyingIndex), Some("iTraxx Europe"));
        assert_eq!(subject.attr(SubjectAttr::UnderlyingMetal), None);
        assert_eq!(subject.dates(DateKind::Lifetime), Some(DateRange { from, to }));
        assert_eq!(subject.dates(DateKind::Swap), None);
    }

    #[test]
    fn test_attr_names() {
        assert_eq!(SubjectAttr::NotionalCurrency.name(), "notional_currency");
        assert_eq!(SubjectAttr::EnergyType.to_string(), "energy_type");
    }

    #[test]
    fn test_date_kind_display() {
        assert_eq!(DateKind::Swap.to_string(), "swap maturity");
        assert_eq!(DateKind::Lifetime.to_string(), "maturity");
    }
}
