//! The lazily-extending chain of maturity buckets.
//!
//! A [`BucketChain`] partitions the timeline forward from a trade's anchor
//! date into contiguous ceiling-bounded windows. The regulatory tables
//! declare a finite ceiling prefix (say `[3 months, 6 months, 1 year,
//! 2 years, 3 years]`); windows reaching beyond the prefix fall into
//! synthesized buckets that repeat the step between the final two declared
//! ceilings, indefinitely. Synthesized buckets are appended to the chain and
//! reused by later lookups.
//!
//! Every candidate bucket's end date is measured from the *same* anchor (the
//! subject's from-date), never chained off the previous bucket's boundary.

use parking_lot::Mutex;
use rts2_core::{BucketCeiling, CoreResult, Date};
use std::fmt;
use std::sync::Arc;

use crate::criterion::CriterionOption;
use crate::error::{TaxonomyError, TaxonomyResult};

/// One maturity bucket: a position in a chain, its floor, and its ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketOption {
    number: usize,
    floor: Option<BucketCeiling>,
    ceiling: BucketCeiling,
}

impl BucketOption {
    /// The 1-based position of this bucket in its chain.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// The ceiling of the preceding bucket, or `None` for the first bucket.
    #[must_use]
    pub fn floor(&self) -> Option<BucketCeiling> {
        self.floor
    }

    /// This bucket's ceiling.
    #[must_use]
    pub fn ceiling(&self) -> BucketCeiling {
        self.ceiling
    }

    /// The bucket's display name, e.g. "Maturity bucket 2: 1 week to 3 months".
    #[must_use]
    pub fn name(&self) -> String {
        let floor = self
            .floor
            .map_or_else(|| "Zero".to_string(), |c| c.label());
        format!(
            "Maturity bucket {}: {} to {}",
            self.number, floor, self.ceiling
        )
    }
}

impl fmt::Display for BucketOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

struct ChainState {
    ceilings: Vec<BucketCeiling>,
    options: Vec<Arc<CriterionOption>>,
}

impl ChainState {
    fn push_ceiling(&mut self, ceiling: BucketCeiling) {
        let number = self.options.len() + 1;
        let floor = self.ceilings.last().copied();
        self.ceilings.push(ceiling);
        self.options.push(Arc::new(CriterionOption::Bucket(BucketOption {
            number,
            floor,
            ceiling,
        })));
    }
}

/// An ordered, append-only chain of maturity buckets.
///
/// Construction validates that extrapolation beyond the declared prefix is
/// always well defined; after that, [`resolve`](BucketChain::resolve) is the
/// only way the chain grows, and it only ever appends.
pub struct BucketChain {
    declared: usize,
    state: Mutex<ChainState>,
}

impl BucketChain {
    /// Builds a chain from the declared ceiling prefix.
    ///
    /// # Errors
    ///
    /// - [`TaxonomyError::EmptyBucketChain`] for an empty prefix
    /// - [`TaxonomyError::MisplacedUnboundedCeiling`] if an unbounded ceiling
    ///   is not last
    /// - [`TaxonomyError::UnextendableBucketChain`] if a bounded-tail chain
    ///   has a single ceiling (no step to repeat)
    /// - [`TaxonomyError::Core`] if the final two ceilings of a bounded-tail
    ///   chain mix duration units or do not increase
    pub fn new(ceilings: Vec<BucketCeiling>) -> TaxonomyResult<Self> {
        let (last, head) = match ceilings.split_last() {
            Some(split) => split,
            None => return Err(TaxonomyError::EmptyBucketChain),
        };
        if head.iter().any(BucketCeiling::is_unbounded) {
            return Err(TaxonomyError::MisplacedUnboundedCeiling);
        }
        if !last.is_unbounded() {
            match head.last() {
                None => {
                    return Err(TaxonomyError::UnextendableBucketChain {
                        count: ceilings.len(),
                    })
                }
                // Rejects mixed units and non-positive steps up front, so
                // runtime extrapolation cannot fail on configuration.
                Some(previous) => {
                    last.stepped_from(previous)?;
                }
            }
        }

        let mut state = ChainState {
            ceilings: Vec::with_capacity(ceilings.len()),
            options: Vec::with_capacity(ceilings.len()),
        };
        for ceiling in ceilings {
            state.push_ceiling(ceiling);
        }
        Ok(Self {
            declared: state.ceilings.len(),
            state: Mutex::new(state),
        })
    }

    /// Number of ceilings in the declared prefix.
    #[must_use]
    pub fn declared_len(&self) -> usize {
        self.declared
    }

    /// The declared ceiling prefix.
    #[must_use]
    pub fn declared_ceilings(&self) -> Vec<BucketCeiling> {
        self.state.lock().ceilings[..self.declared].to_vec()
    }

    /// Finds the single bucket containing the window `[from, to]`.
    ///
    /// The caller guarantees `from <= to`; inverted and missing windows are
    /// rejected before the chain is consulted. End dates are always computed
    /// from `from`, so a zero-length window lands in the first bucket whose
    /// end date is on or after the anchor.
    ///
    /// # Errors
    ///
    /// Only date-arithmetic overflow surfaces here; chain-extension defects
    /// are ruled out at construction.
    pub(crate) fn resolve(&self, from: Date, to: Date) -> CoreResult<Arc<CriterionOption>> {
        debug_assert!(from <= to);
        let mut index = 0;
        loop {
            let (ceiling, option) = self.bucket_at(index)?;
            match ceiling.end_date_from(from)? {
                None => return Ok(option),
                Some(end) if to <= end => return Ok(option),
                Some(_) => index += 1,
            }
        }
    }

    /// Returns the bucket at `index`, synthesizing and caching any missing
    /// tail buckets by repeating the chain's final step.
    fn bucket_at(&self, index: usize) -> CoreResult<(BucketCeiling, Arc<CriterionOption>)> {
        let mut state = self.state.lock();
        while state.options.len() <= index {
            let len = state.ceilings.len();
            // A chain whose last ceiling is unbounded never runs past it,
            // and construction guarantees bounded chains have two ceilings.
            let next = state.ceilings[len - 1].stepped_from(&state.ceilings[len - 2])?;
            log::debug!("extending bucket chain with synthesized ceiling {next}");
            state.push_ceiling(next);
        }
        Ok((state.ceilings[index], state.options[index].clone()))
    }

    /// Renders the declared buckets, one per line with the given prefix.
    #[must_use]
    pub fn display(&self, prefix: &str) -> String {
        let state = self.state.lock();
        state.options[..self.declared]
            .iter()
            .map(|option| format!("{prefix}{option}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Debug for BucketChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketChain")
            .field("declared", &self.declared)
            .field("ceilings", &self.state.lock().ceilings)
            .finish()
    }
}
