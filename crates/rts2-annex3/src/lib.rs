//! # RTS 2 Annex III reference tables
//!
//! A transcription of the Annex III segmentation tables of Commission
//! Delegated Regulation (EU) 2017/583 onto the `rts2-taxonomy` engine: asset
//! classes, sub-asset classes, segmentation criteria, maturity bucket chains,
//! and the liquidity/SSTI/LIS threshold data attached to each sub-asset
//! class.
//!
//! One module per asset class, each reading like its source table;
//! [`reference_taxonomy`] assembles them.
//!
//! ```rust
//! use rts2_annex3::reference_taxonomy;
//! use rts2_core::Date;
//! use rts2_taxonomy::{DateKind, Subject, SubjectAttr};
//!
//! let taxonomy = reference_taxonomy()?;
//! let from = Date::from_ymd(2025, 2, 3).unwrap();
//! let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
//!     .with(SubjectAttr::UnderlyingCurrencyPair, "EUR~USD")
//!     .with_dates(DateKind::Lifetime, from, from.add_days(60));
//! let classification = taxonomy.classify(&subject);
//! assert!(classification.is_complete());
//! # Ok::<(), rts2_taxonomy::TaxonomyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod bonds;
mod commodities;
mod credit;
mod equities;
mod fx;
mod interest_rate;
pub mod rts23;
mod support;

use rts2_taxonomy::{Taxonomy, TaxonomyResult};

/// The version identifier of the regulation these tables transcribe.
pub const VERSION_ID: &str = "EU 2017/583 of 14 July 2016";

/// Builds the reference taxonomy.
///
/// Construction validates every bucket chain; an `Err` here means the tables
/// themselves are malformed, not that any subject data is bad.
pub fn reference_taxonomy() -> TaxonomyResult<Taxonomy> {
    Ok(Taxonomy::new(VERSION_ID)
        .with_asset_class(bonds::asset_class())
        .with_asset_class(interest_rate::asset_class()?)
        .with_asset_class(equities::asset_class()?)
        .with_asset_class(commodities::asset_class()?)
        .with_asset_class(fx::asset_class()?)
        .with_asset_class(credit::asset_class()?))
}
