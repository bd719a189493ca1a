//! The taxonomy tree: asset classes, sub-asset classes, and the walk.
//!
//! The tree is built once by a loader (see the `rts2-annex3` crate for the
//! reference tables) and is read-only afterwards. Ownership flows downward —
//! the taxonomy owns its asset classes, each asset class its sub-asset
//! classes, each of those its criteria — so no parent back-pointers exist.
//! Name resolution is an exact, case-sensitive linear scan; the taxonomy is
//! small and built-in maps would buy nothing.

use crate::classification::Classification;
use crate::criterion::Criterion;
use crate::error::ClassificationError;
use crate::subject::Subject;
use crate::thresholds::ThresholdSpecification;

/// The root of the taxonomy: the set of all asset classes for one version of
/// the regulation.
#[derive(Debug)]
pub struct Taxonomy {
    version: String,
    asset_classes: Vec<AssetClass>,
}

impl Taxonomy {
    /// Creates an empty taxonomy for the given version identifier.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            asset_classes: Vec::new(),
        }
    }

    /// Appends an asset class.
    #[must_use]
    pub fn with_asset_class(mut self, asset_class: AssetClass) -> Self {
        self.asset_classes.push(asset_class);
        self
    }

    /// The version identifier, e.g. "EU 2017/583 of 14 July 2016".
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The asset classes, in declaration order.
    #[must_use]
    pub fn asset_classes(&self) -> &[AssetClass] {
        &self.asset_classes
    }

    /// Finds an asset class by exact name.
    #[must_use]
    pub fn asset_class_by_name(&self, name: &str) -> Option<&AssetClass> {
        self.asset_classes.iter().find(|ac| ac.name() == name)
    }

    /// Finds a sub-asset class by exact name across all asset classes.
    #[must_use]
    pub fn sub_asset_class_by_name(&self, name: &str) -> Option<&SubAssetClass> {
        self.asset_classes
            .iter()
            .flat_map(|ac| ac.sub_asset_classes())
            .find(|sub| sub.name() == name)
    }

    /// Classifies a subject.
    ///
    /// This never fails: anything wrong with the subject is recorded on the
    /// returned [`Classification`], which callers must check via
    /// [`Classification::is_complete`].
    #[must_use]
    pub fn classify<'t>(&'t self, subject: &Subject) -> Classification<'t> {
        let mut classification = Classification::new(&self.version);
        match self.asset_class_by_name(subject.asset_class_name()) {
            Some(asset_class) => {
                asset_class.extend_classification(subject, &mut classification);
            }
            None => {
                log::debug!(
                    "no asset class named '{}'",
                    subject.asset_class_name()
                );
                classification.push_error(ClassificationError::UnknownAssetClass {
                    name: subject.asset_class_name().to_string(),
                });
            }
        }
        classification
    }

    /// Renders the whole tree, one node per line.
    #[must_use]
    pub fn display(&self) -> String {
        let mut target = String::from("The set of all Asset Classes:");
        for asset_class in &self.asset_classes {
            target.push('\n');
            target.push_str(&asset_class.display("- "));
        }
        target
    }
}

/// An asset class: a named group of sub-asset classes.
#[derive(Debug)]
pub struct AssetClass {
    name: String,
    reference: Option<String>,
    description: Option<String>,
    sub_asset_classes: Vec<SubAssetClass>,
}

impl AssetClass {
    /// Creates an asset class with no sub-asset classes yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: None,
            description: None,
            sub_asset_classes: Vec::new(),
        }
    }

    /// Sets the reference to the source tables (e.g. "Table 5.1, 5.2 and 5.3").
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the descriptive text from the regulation.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a sub-asset class.
    #[must_use]
    pub fn with_sub_asset_class(mut self, sub_asset_class: SubAssetClass) -> Self {
        self.sub_asset_classes.push(sub_asset_class);
        self
    }

    /// The asset class name, unique within the taxonomy.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source-table reference, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// The sub-asset classes, in declaration order.
    #[must_use]
    pub fn sub_asset_classes(&self) -> &[SubAssetClass] {
        &self.sub_asset_classes
    }

    /// Finds a sub-asset class by exact name.
    #[must_use]
    pub fn sub_asset_class_by_name(&self, name: &str) -> Option<&SubAssetClass> {
        self.sub_asset_classes.iter().find(|sub| sub.name() == name)
    }

    pub(crate) fn extend_classification<'t>(
        &'t self,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        classification.set_asset_class(self);
        match self.sub_asset_class_by_name(subject.sub_asset_class_name()) {
            Some(sub_asset_class) => {
                sub_asset_class.extend_classification(subject, classification);
            }
            None => {
                log::debug!(
                    "asset class '{}' has no sub-asset class named '{}'",
                    self.name,
                    subject.sub_asset_class_name()
                );
                classification.push_error(ClassificationError::UnknownSubAssetClass {
                    asset_class: self.name.clone(),
                    name: subject.sub_asset_class_name().to_string(),
                });
            }
        }
    }

    fn display(&self, prefix: &str) -> String {
        let mut target = format!("{prefix}Asset class: {}", self.name);
        for sub_asset_class in &self.sub_asset_classes {
            target.push('\n');
            target.push_str(&sub_asset_class.display(&format!("{prefix}- ")));
        }
        target
    }
}

/// A sub-asset class: the taxonomy leaf carrying the ordered segmentation
/// criteria and, where the tables define them, the threshold specification.
#[derive(Debug)]
pub struct SubAssetClass {
    name: String,
    description: Option<String>,
    criteria: Vec<Criterion>,
    thresholds: Option<ThresholdSpecification>,
}

impl SubAssetClass {
    /// Creates a sub-asset class with no criteria yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            criteria: Vec::new(),
            thresholds: None,
        }
    }

    /// Sets the descriptive text from the regulation.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a criterion. Declaration order fixes the "Segmentation
    /// criterion N" numbering.
    #[must_use]
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Attaches the threshold specification.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ThresholdSpecification) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// The sub-asset class name, unique within its asset class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptive text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The segmentation criteria, in declaration order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// The threshold specification, consumed after classification.
    #[must_use]
    pub fn thresholds(&self) -> Option<&ThresholdSpecification> {
        self.thresholds.as_ref()
    }

    pub(crate) fn extend_classification<'t>(
        &'t self,
        subject: &Subject,
        classification: &mut Classification<'t>,
    ) {
        classification.set_sub_asset_class(self);
        for (index, criterion) in self.criteria.iter().enumerate() {
            criterion.extend_classification(index + 1, subject, classification);
        }
    }

    fn display(&self, prefix: &str) -> String {
        let mut target = format!("{prefix}Sub-asset class: {}", self.name);
        for (index, criterion) in self.criteria.iter().enumerate() {
            target.push('\n');
            target.push_str(&criterion.display(index + 1, &format!("{prefix}- ")));
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::BucketChain;
    use crate::subject::{DateKind, SubjectAttr};
    use rts2_core::{BucketCeiling, Date};

    fn small_taxonomy() -> Taxonomy {
        let chain = BucketChain::new(vec![
            BucketCeiling::weeks(1),
            BucketCeiling::months(3),
            BucketCeiling::years(1),
            BucketCeiling::years(2),
            BucketCeiling::years(3),
        ])
        .unwrap();
        Taxonomy::new("test-version").with_asset_class(
            AssetClass::new("Foreign Exchange Derivatives")
                .with_reference("Table 8.1, 8.2 and 8.3")
                .with_sub_asset_class(
                    SubAssetClass::new("Deliverable forward (DF)")
                        .with_criterion(Criterion::arbitrary(
                            SubjectAttr::UnderlyingCurrencyPair,
                            "underlying currency pair",
                        ))
                        .with_criterion(Criterion::bucketed(
                            DateKind::Lifetime,
                            "time to maturity bucket of the swap",
                            chain,
                        )),
                ),
        )
    }

    #[test]
    fn test_resolution_finds_exact_nodes() {
        let taxonomy = small_taxonomy();
        let asset_class = taxonomy
            .asset_class_by_name("Foreign Exchange Derivatives")
            .unwrap();
        assert!(asset_class
            .sub_asset_class_by_name("Deliverable forward (DF)")
            .is_some());
        assert!(taxonomy
            .sub_asset_class_by_name("Deliverable forward (DF)")
            .is_some());
        assert!(taxonomy.asset_class_by_name("foreign exchange derivatives").is_none());
    }

    #[test]
    fn test_unknown_asset_class_is_single_fatal_error() {
        let taxonomy = small_taxonomy();
        let subject = Subject::new("Weather Derivatives", "Anything");
        let classification = taxonomy.classify(&subject);
        assert!(classification.asset_class().is_none());
        assert!(classification.sub_asset_class().is_none());
        assert_eq!(classification.errors().len(), 1);
    }

    #[test]
    fn test_unknown_sub_asset_class_names_both_levels() {
        let taxonomy = small_taxonomy();
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
    fn test_complete_classification() {
        let taxonomy = small_taxonomy();
        let from = Date::from_ymd(2025, 2, 3).unwrap();
        let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
            .with(SubjectAttr::UnderlyingCurrencyPair, "EUR~USD")
            .with_dates(DateKind::Lifetime, from, from.add_days(60));
        let classification = taxonomy.classify(&subject);
        assert!(classification.is_complete());
        let key = classification.key();
        assert_eq!(key.get("Segmentation criterion 1").unwrap(), "EUR~USD");
        assert_eq!(
            key.get("Segmentation criterion 2").unwrap(),
            "Maturity bucket 2: 1 week to 3 months"
        );
    }

    #[test]
    fn test_criterion_failure_does_not_abort_siblings() {
        let taxonomy = small_taxonomy();
        let from = Date::from_ymd(2025, 2, 3).unwrap();
        // No currency pair: criterion 1 errors, criterion 2 still matches.
        let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
            .with_dates(DateKind::Lifetime, from, from.add_days(1));
        let classification = taxonomy.classify(&subject);
        assert!(!classification.is_complete());
        assert_eq!(classification.errors().len(), 1);
        assert_eq!(classification.options().len(), 1);
        assert_eq!(
            classification.options()[0].option().display_value(),
            "Maturity bucket 1: Zero to 1 week"
        );
    }

    #[test]
    fn test_same_subject_twice_yields_equal_keys() {
        let taxonomy = small_taxonomy();
        let from = Date::from_ymd(2025, 2, 3).unwrap();
        let subject = Subject::new("Foreign Exchange Derivatives", "Deliverable forward (DF)")
            .with(SubjectAttr::UnderlyingCurrencyPair, "EUR~USD")
            .with_dates(DateKind::Lifetime, from, from.add_days(400));
        let first = taxonomy.classify(&subject);
        let second = taxonomy.classify(&subject);
        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn test_display_renders_tree() {
        let taxonomy = small_taxonomy();
        let rendered = taxonomy.display();
        assert!(rendered.contains("Asset class: Foreign Exchange Derivatives"));
        assert!(rendered.contains("Sub-asset class: Deliverable forward (DF)"));
        assert!(rendered.contains("Segmentation criterion 1 - underlying currency pair"));
        assert!(rendered.contains("Maturity bucket 1: Zero to 1 week"));
    }
}
