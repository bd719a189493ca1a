//! Segmentation criteria: the matching units of a sub-asset class.
//!
//! Each sub-asset class carries an ordered list of criteria; the list
//! position fixes the "Segmentation criterion N" numbering. The variants:
//!
//! - [`Criterion::Discrete`] — a closed, statically declared domain
//!   (e.g. equity parameter: price, dividend, variance)
//! - [`Criterion::Arbitrary`] — an open domain discovered on demand
//!   (e.g. notional currency, underlying issuer)
//! - [`Criterion::Bucketed`] — a maturity window matched against a
//!   [`BucketChain`]
//! - [`Criterion::Dispatch`] — selects a delegate criterion by a discrete
//!   key (metal type, energy sub-product, equity parameter) and inherits
//!   the dispatcher's criterion number, since both are one logical
//!   segmentation dimension
//!
//! A criterion failure records a diagnostic and lets the remaining criteria
//! of the sub-asset class run; nothing here ever panics on subject data.

use dashmap::DashMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::chain::{BucketChain, BucketOption};
use crate::classification::Classification;
use crate::error::ClassificationError;
use crate::subject::{DateKind, Subject, SubjectAttr};

/// A concrete matched value produced by a criterion.
///
/// Options are shared via `Arc`: a discrete criterion builds each option
/// once, an arbitrary criterion memoizes by value, and a bucket chain caches
/// its buckets, so repeat classifications see the identical instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionOption {
    /// A plain matched value.
    Value(String),
    /// A maturity bucket.
    Bucket(BucketOption),
}

impl CriterionOption {
    /// The display form used in the sub-class key.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CriterionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionOption::Value(value) => write!(f, "{value}"),
            CriterionOption::Bucket(bucket) => write!(f, "{bucket}"),
        }
    }
}

/// One arm of a dispatching criterion: the selector keys it accepts and the
/// criterion it delegates to.
#[derive(Debug)]
pub struct DispatchArm {
    keys: Vec<String>,
    criterion: Criterion,
}

impl DispatchArm {
    /// Creates an arm accepting any of `keys`.
    #[must_use]
    pub fn new<I, S>(keys: I, criterion: Criterion) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            criterion,
        }
    }

    fn accepts(&self, value: &str) -> bool {
        self.keys.iter().any(|k| k == value)
    }
}

/// A segmentation criterion.
#[derive(Debug)]
pub enum Criterion {
    /// Closed domain of allowed values.
    Discrete(DiscreteCriterion),
    /// Open domain, memoized by value.
    Arbitrary(ArbitraryCriterion),
    /// Maturity window bucketing.
    Bucketed(BucketedCriterion),
    /// Delegate selection by discrete key.
    Dispatch(DispatchCriterion),
}

impl Criterion {
    /// A discrete criterion over a fixed set of allowed values.
    #[must_use]
    pub fn discrete<I, S>(attr: SubjectAttr, description: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Criterion::Discrete(DiscreteCriterion {
            attr,
            description: description.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
            options: OnceLock::new(),
        })
    }

    /// An arbitrary-value criterion over an open domain.
    #[must_use]
    pub fn arbitrary(attr: SubjectAttr, description: impl Into<String>) -> Self {
        Criterion::Arbitrary(ArbitraryCriterion {
            attr,
            description: description.into(),
            memo: DashMap::new(),
        })
    }

    /// A bucketed criterion reading the given date pair.
    #[must_use]
    pub fn bucketed(kind: DateKind, description: impl Into<String>, chain: BucketChain) -> Self {
        Criterion::Bucketed(BucketedCriterion {
            kind,
            description: description.into(),
            chain,
        })
    }

    /// A dispatching criterion selecting a delegate by the given attribute.
    #[must_use]
    pub fn dispatch(
        selector: SubjectAttr,
        description: impl Into<String>,
        arms: Vec<DispatchArm>,
    ) -> Self {
        Criterion::Dispatch(DispatchCriterion {
            selector,
            description: description.into(),
            arms,
        })
    }

    /// The criterion's description from the regulatory table.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Criterion::Discrete(c) => &c.description,
            Criterion::Arbitrary(c) => &c.description,
            Criterion::Bucketed(c) => &c.description,
            Criterion::Dispatch(c) => &c.description,
        }
    }

    /// Evaluates this criterion against `subject`, extending `classification`
    /// with either a matched option or a diagnostic. `number` is the 1-based
    /// criterion number; a dispatch delegate inherits its dispatcher's.
    pub(crate) fn extend_classification<'t>(
        &'t self,
        number: usize,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        match self {
            Criterion::Discrete(c) => c.extend(number, subject, classification),
            Criterion::Arbitrary(c) => c.extend(number, subject, classification),
            Criterion::Bucketed(c) => c.extend(number, subject, classification),
            Criterion::Dispatch(c) => c.extend(number, subject, classification),
        }
    }

    /// Renders the criterion (and any nested structure) for tree display.
    #[must_use]
    pub fn display(&self, number: usize, prefix: &str) -> String {
        let mut target = format!("{prefix}Segmentation criterion {number} - {}", self.description());
        match self {
            Criterion::Bucketed(c) => {
                target.push('\n');
                target.push_str(&c.chain.display(&format!("{prefix}- ")));
            }
            Criterion::Dispatch(c) => {
                for arm in &c.arms {
                    target.push_str(&format!("\n{prefix}- for [{}]:\n", arm.keys.join(", ")));
                    target.push_str(&arm.criterion.display(number, &format!("{prefix}- - ")));
                }
            }
            Criterion::Discrete(_) | Criterion::Arbitrary(_) => {}
        }
        target
    }
}

/// A criterion whose domain is a fixed enumeration.
#[derive(Debug)]
pub struct DiscreteCriterion {
    attr: SubjectAttr,
    description: String,
    allowed: Vec<String>,
    options: OnceLock<HashMap<String, Arc<CriterionOption>>>,
}

impl DiscreteCriterion {
    /// The declared domain.
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    fn options(&self) -> &HashMap<String, Arc<CriterionOption>> {
        self.options.get_or_init(|| {
            self.allowed
                .iter()
                .map(|value| {
                    (
                        value.clone(),
                        Arc::new(CriterionOption::Value(value.clone())),
                    )
                })
                .collect()
        })
    }

    fn extend<'t>(
        &'t self,
        number: usize,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        match subject.attr(self.attr) {
            None => classification.push_error(ClassificationError::MissingAttribute {
                criterion: number,
                attribute: self.attr,
                allowed: self.allowed.clone(),
            }),
            Some(value) => match self.options().get(value) {
                Some(option) => {
                    classification.push_option(number, &self.description, option.clone());
                }
                None => classification.push_error(ClassificationError::ValueOutsideDomain {
                    criterion: number,
                    value: value.to_string(),
                    allowed: self.allowed.clone(),
                }),
            },
        }
    }
}

/// A criterion whose domain is open; values are memoized on first sight so
/// equal values share one option instance.
#[derive(Debug)]
pub struct ArbitraryCriterion {
    attr: SubjectAttr,
    description: String,
    memo: DashMap<String, Arc<CriterionOption>>,
}

impl ArbitraryCriterion {
    fn extend<'t>(
        &'t self,
        number: usize,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        match subject.attr(self.attr) {
            None => classification.push_error(ClassificationError::MissingAttribute {
                criterion: number,
                attribute: self.attr,
                allowed: vec![],
            }),
            Some(value) => {
                // entry() makes the get-or-create idempotent under races;
                // losers drop their candidate and reuse the stored Arc.
                let option = self
                    .memo
                    .entry(value.to_string())
                    .or_insert_with(|| Arc::new(CriterionOption::Value(value.to_string())))
                    .clone();
                classification.push_option(number, &self.description, option);
            }
        }
    }
}

/// A criterion matching a date window against a bucket chain.
#[derive(Debug)]
pub struct BucketedCriterion {
    kind: DateKind,
    description: String,
    chain: BucketChain,
}

impl BucketedCriterion {
    fn extend<'t>(
        &'t self,
        number: usize,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        let range = match subject.dates(self.kind) {
            None => {
                classification.push_error(ClassificationError::BadDateRange {
                    criterion: number,
                    kind: self.kind,
                    from: None,
                    to: None,
                });
                return;
            }
            Some(range) => range,
        };
        if range.to < range.from {
            classification.push_error(ClassificationError::BadDateRange {
                criterion: number,
                kind: self.kind,
                from: Some(range.from),
                to: Some(range.to),
            });
            return;
        }
        match self.chain.resolve(range.from, range.to) {
            Ok(option) => classification.push_option(number, &self.description, option),
            // Date arithmetic left the supported range; report, don't raise.
            Err(err) => {
                log::debug!("bucket resolution failed for {}: {err}", self.kind);
                classification.push_error(ClassificationError::BadDateRange {
                    criterion: number,
                    kind: self.kind,
                    from: Some(range.from),
                    to: Some(range.to),
                });
            }
        }
    }
}

/// A criterion that selects a delegate by a discrete key and hands the whole
/// evaluation over to it.
#[derive(Debug)]
pub struct DispatchCriterion {
    selector: SubjectAttr,
    description: String,
    arms: Vec<DispatchArm>,
}

impl DispatchCriterion {
    fn known_keys(&self) -> Vec<String> {
        self.arms.iter().flat_map(|arm| arm.keys.clone()).collect()
    }

    fn extend<'t>(
        &'t self,
        number: usize,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        match subject.attr(self.selector) {
            None => classification.push_error(ClassificationError::MissingAttribute {
                criterion: number,
                attribute: self.selector,
                allowed: self.known_keys(),
            }),
            Some(value) => match self.arms.iter().find(|arm| arm.accepts(value)) {
                Some(arm) => arm
                    .criterion
                    .extend_classification(number, subject, classification),
                None => classification.push_error(ClassificationError::UnresolvableDispatch {
                    criterion: number,
                    selector: self.selector,
                    value: value.to_string(),
                    allowed: self.known_keys(),
                }),
            },
        }
    }
}
