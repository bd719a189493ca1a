//! Error types for taxonomy construction and classification.
//!
//! Two distinct failure families live here. [`TaxonomyError`] covers
//! configuration defects found while building a taxonomy (a malformed bucket
//! chain, for instance) and is returned from constructors. A
//! [`ClassificationError`] describes a problem with the *subject* being
//! classified; these never abort a classification — they accumulate on the
//! [`Classification`](crate::classification::Classification) instead.

use rts2_core::{CoreError, Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::subject::{DateKind, SubjectAttr};

/// A specialized Result type for taxonomy construction.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// A defect in the taxonomy configuration itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A bucket chain was declared with no ceilings at all.
    #[error("Bucket chain has no ceilings")]
    EmptyBucketChain,

    /// An unbounded ceiling appeared before the end of a chain.
    #[error("Unbounded ceiling must be the last ceiling of a bucket chain")]
    MisplacedUnboundedCeiling,

    /// A chain ending in a bounded ceiling cannot extrapolate from a single
    /// ceiling: there is no step to repeat.
    #[error("A bounded bucket chain needs at least two ceilings to extrapolate, got {count}")]
    UnextendableBucketChain {
        /// Number of declared ceilings.
        count: usize,
    },

    /// Date arithmetic or ceiling-step error bubbled up from the core types.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A diagnostic recorded against a classification.
///
/// The fatal kinds (`UnknownAssetClass`, `UnknownSubAssetClass`) stop the
/// walk at their level; the per-criterion kinds never prevent sibling
/// criteria from being evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationError {
    /// The subject names an asset class the taxonomy does not have.
    #[error("RTS 2 has no asset class named '{name}'")]
    UnknownAssetClass {
        /// The unmatched asset class name.
        name: String,
    },

    /// The subject names a sub-asset class its asset class does not have.
    #[error("Asset class '{asset_class}' has no sub-asset class named '{name}'")]
    UnknownSubAssetClass {
        /// The resolved asset class.
        asset_class: String,
        /// The unmatched sub-asset class name.
        name: String,
    },

    /// The subject carries no value for the attribute a criterion reads.
    #[error("Segmentation criterion {criterion}: subject has no value for {attribute}{}", allowed_suffix(allowed))]
    MissingAttribute {
        /// 1-based criterion number within the sub-asset class.
        criterion: usize,
        /// The attribute the criterion wanted.
        attribute: SubjectAttr,
        /// The allowed values, when the criterion has a closed domain.
        allowed: Vec<String>,
    },

    /// A discrete criterion received a value outside its declared domain.
    #[error("Segmentation criterion {criterion}: bad value '{value}'. Should be one of [{}]", allowed.join(", "))]
    ValueOutsideDomain {
        /// 1-based criterion number within the sub-asset class.
        criterion: usize,
        /// The out-of-domain value.
        value: String,
        /// The declared domain.
        allowed: Vec<String>,
    },

    /// A bucketed criterion received missing or inverted dates.
    #[error("Segmentation criterion {criterion}: bad {kind} dates: from_date={}, to_date={}", date_or_none(from), date_or_none(to))]
    BadDateRange {
        /// 1-based criterion number within the sub-asset class.
        criterion: usize,
        /// Which date pair was read.
        kind: DateKind,
        /// The from-date, if the subject had one.
        from: Option<Date>,
        /// The to-date, if the subject had one.
        to: Option<Date>,
    },

    /// A dispatching criterion's selector matched no configured delegate.
    #[error("Segmentation criterion {criterion}: no delegate for {selector} value '{value}'. Should be one of [{}]", allowed.join(", "))]
    UnresolvableDispatch {
        /// 1-based criterion number within the sub-asset class.
        criterion: usize,
        /// The selector attribute.
        selector: SubjectAttr,
        /// The selector value that matched no delegate.
        value: String,
        /// The keys the dispatcher knows.
        allowed: Vec<String>,
    },
}

fn allowed_suffix(allowed: &[String]) -> String {
    if allowed.is_empty() {
        String::new()
    } else {
        format!(". Should be one of [{}]", allowed.join(", "))
    }
}

fn date_or_none(date: &Option<Date>) -> String {
    date.map_or_else(|| "None".to_string(), |d| d.to_string())
}
