//! # RTS 2 Taxonomy
//!
//! The classification engine for MiFID II / MiFIR RTS 2 Annex III: given a
//! derivative trade (a [`Subject`]), walk the asset class → sub-asset class →
//! segmentation criteria taxonomy and derive the regulatory sub-class
//! identity.
//!
//! The building blocks:
//!
//! - **[`Taxonomy`]**: the immutable tree of [`AssetClass`] and
//!   [`SubAssetClass`] nodes, built once by a loader such as `rts2-annex3`
//! - **[`Criterion`]**: one segmentation dimension of a sub-asset class —
//!   discrete-domain, arbitrary-value, date-bucketed, or dispatching
//! - **[`BucketChain`]**: the lazily-extending chain of maturity buckets
//! - **[`Classification`]**: the per-subject accumulator of matched options
//!   and diagnostics, and the derived sub-class key
//!
//! Bad subject data never escapes as an `Err` or a panic: it accumulates as
//! [`ClassificationError`] values on the [`Classification`]. Only malformed
//! taxonomy configuration (e.g. a bucket chain that cannot be extrapolated)
//! is a [`TaxonomyError`], surfaced when the tree is built.
//!
//! ## Example
//!
//! ```rust
//! use rts2_core::{BucketCeiling, Date};
//! use rts2_taxonomy::prelude::*;
//!
//! let chain = BucketChain::new(vec![
//!     BucketCeiling::months(3),
//!     BucketCeiling::months(6),
//!     BucketCeiling::years(1),
//! ])?;
//! let taxonomy = Taxonomy::new("example").with_asset_class(
//!     AssetClass::new("Foreign Exchange Derivatives").with_sub_asset_class(
//!         SubAssetClass::new("Deliverable forward (DF)")
//!             .with_criterion(Criterion::arbitrary(
//!                 SubjectAttr::UnderlyingCurrencyPair,
//!                 "underlying currency pair",
//!             ))
//!             .with_criterion(Criterion::bucketed(
//!                 DateKind::Lifetime,
//!                 "time to maturity bucket of the swap",
//!                 chain,
//!             )),
//!     ),
//! );
//!
//! let from = Date::from_ymd(2025, 1, 15).unwrap();
//! let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
//!     .with(SubjectAttr::UnderlyingCurrencyPair, "EUR~GBP")
//!     .with_dates(DateKind::Lifetime, from, from.add_days(60));
//!
//! let classification = taxonomy.classify(&subject);
//! assert!(classification.is_complete());
//! # Ok::<(), rts2_taxonomy::TaxonomyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod chain;
pub mod classification;
pub mod criterion;
pub mod error;
pub mod subject;
pub mod taxonomy;
pub mod thresholds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chain::{BucketChain, BucketOption};
    pub use crate::classification::{Classification, MatchedOption};
    pub use crate::criterion::{Criterion, CriterionOption, DispatchArm};
    pub use crate::error::{ClassificationError, TaxonomyError, TaxonomyResult};
    pub use crate::subject::{DateKind, DateRange, Subject, SubjectAttr};
    pub use crate::taxonomy::{AssetClass, SubAssetClass, Taxonomy};
    pub use crate::thresholds::{
        LiquidityCriteria, Percentile, PostTrade, PreTrade, ThresholdSpecification,
        ThresholdTable,
    };
}

pub use chain::{BucketChain, BucketOption};
pub use classification::{Classification, MatchedOption};
pub use criterion::{Criterion, CriterionOption, DispatchArm};
pub use error::{ClassificationError, TaxonomyError, TaxonomyResult};
pub use subject::{DateKind, DateRange, Subject, SubjectAttr};
pub use taxonomy::{AssetClass, SubAssetClass, Taxonomy};
pub use thresholds::ThresholdSpecification;
