//! The classification accumulator and the derived sub-class key.
//!
//! A `Classification` is the result of walking one subject through the
//! taxonomy: the resolved asset class and sub-asset class, the matched option
//! per segmentation criterion, and any diagnostics collected on the way. A
//! complete classification identifies an RTS 2 sub-class — a sort of virtual
//! ISIN: trades with the same key are the same reportable instrument class.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::criterion::CriterionOption;
use crate::error::ClassificationError;
use crate::taxonomy::{AssetClass, SubAssetClass};

/// A matched option together with its criterion position and description.
#[derive(Debug, Clone)]
pub struct MatchedOption<'t> {
    number: usize,
    criterion_description: &'t str,
    option: Arc<CriterionOption>,
}

impl<'t> MatchedOption<'t> {
    /// The 1-based segmentation criterion number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// The key label, "Segmentation criterion N".
    #[must_use]
    pub fn criterion_name(&self) -> String {
        format!("Segmentation criterion {}", self.number)
    }

    /// The description of the criterion that produced this option.
    #[must_use]
    pub fn criterion_description(&self) -> &'t str {
        self.criterion_description
    }

    /// The matched option.
    #[must_use]
    pub fn option(&self) -> &Arc<CriterionOption> {
        &self.option
    }
}

/// The outcome of classifying one subject.
///
/// Holds references into the taxonomy it was produced from; like the
/// taxonomy, it is cheap and transient — one instance per request.
#[derive(Debug, Clone)]
pub struct Classification<'t> {
    version: &'t str,
    asset_class: Option<&'t AssetClass>,
    sub_asset_class: Option<&'t SubAssetClass>,
    options: Vec<MatchedOption<'t>>,
    errors: Vec<ClassificationError>,
}

impl<'t> Classification<'t> {
    pub(crate) fn new(version: &'t str) -> Self {
        Self {
            version,
            asset_class: None,
            sub_asset_class: None,
            options: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// The taxonomy version this classification was made against.
    #[must_use]
    pub fn version(&self) -> &str {
        self.version
    }

    /// The resolved asset class, if the subject named a known one.
    #[must_use]
    pub fn asset_class(&self) -> Option<&'t AssetClass> {
        self.asset_class
    }

    /// The resolved sub-asset class, if resolution got that far.
    #[must_use]
    pub fn sub_asset_class(&self) -> Option<&'t SubAssetClass> {
        self.sub_asset_class
    }

    /// The matched options, in criterion order.
    #[must_use]
    pub fn options(&self) -> &[MatchedOption<'t>] {
        &self.options
    }

    /// The diagnostics recorded during the walk.
    #[must_use]
    pub fn errors(&self) -> &[ClassificationError] {
        &self.errors
    }

    /// True when the sub-asset class resolved, every criterion matched, and
    /// no errors were recorded. Only a complete classification is a valid
    /// reporting identity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.sub_asset_class {
            None => false,
            Some(sub) => self.errors.is_empty() && self.options.len() == sub.criteria().len(),
        }
    }

    /// Derives the canonical sub-class key.
    ///
    /// The mapping carries the taxonomy version, the resolved names, and per
    /// matched criterion both its description and its chosen value. Map
    /// equality is content-based, so key comparison is order-insensitive.
    /// When errors were recorded the key carries an `errors` entry and must
    /// not be treated as a valid reporting identity.
    #[must_use]
    pub fn key(&self) -> BTreeMap<String, String> {
        let mut key = BTreeMap::new();
        key.insert("RTS 2 version".to_string(), self.version.to_string());
        if let Some(asset_class) = self.asset_class {
            key.insert("Asset class".to_string(), asset_class.name().to_string());
        }
        if let Some(sub) = self.sub_asset_class {
            key.insert("Sub-asset class".to_string(), sub.name().to_string());
        }
        for matched in &self.options {
            let name = matched.criterion_name();
            key.insert(
                format!("{name} description"),
                matched.criterion_description().to_string(),
            );
            key.insert(name, matched.option().display_value());
        }
        if !self.errors.is_empty() {
            let rendered = self
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            key.insert("errors".to_string(), rendered);
        }
        key
    }

    /// The sub-class path and options as a readable multi-line name.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut target = String::new();
        if let Some(asset_class) = self.asset_class {
            target.push_str(&format!("Asset class: {}", asset_class.name()));
        }
        if let Some(sub) = self.sub_asset_class {
            target.push_str(&format!("\nSub-asset class: {}", sub.name()));
        }
        if !self.options.is_empty() {
            target.push_str("\nSegmentation criteria options:");
            for matched in &self.options {
                target.push_str(&format!(
                    "\n- {}: {}",
                    matched.criterion_name(),
                    matched.option()
                ));
            }
        }
        target
    }

    pub(crate) fn set_asset_class(&mut self, asset_class: &'t AssetClass) {
        if self.asset_class.is_none() {
            self.asset_class = Some(asset_class);
        }
    }

    pub(crate) fn set_sub_asset_class(&mut self, sub_asset_class: &'t SubAssetClass) {
        if self.sub_asset_class.is_none() {
            self.sub_asset_class = Some(sub_asset_class);
        }
    }

    pub(crate) fn push_option(
        &mut self,
        number: usize,
        criterion_description: &'t str,
        option: Arc<CriterionOption>,
    ) {
        self.options.push(MatchedOption {
            number,
            criterion_description,
            option,
        });
    }

    pub(crate) fn push_error(&mut self, error: ClassificationError) {
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_classification_is_incomplete() {
        let classification = Classification::new("v1");
        assert!(!classification.is_complete());
        assert_eq!(classification.key().get("RTS 2 version").unwrap(), "v1");
        assert!(classification.key().get("Asset class").is_none());
    }

    #[test]
    fn test_errors_appear_in_key() {
        let mut classification = Classification::new("v1");
        classification.push_error(ClassificationError::UnknownAssetClass {
            name: "Nope".into(),
        });
        let key = classification.key();
        assert!(key.get("errors").unwrap().contains("Nope"));
        assert!(!classification.is_complete());
    }

    #[test]
    fn test_key_entries_for_matched_option() {
        let mut classification = Classification::new("v1");
        classification.push_option(
            1,
            "notional currency",
            Arc::new(CriterionOption::Value("EUR".into())),
        );
        let key = classification.key();
        assert_eq!(key.get("Segmentation criterion 1").unwrap(), "EUR");
        assert_eq!(
            key.get("Segmentation criterion 1 description").unwrap(),
            "notional currency"
        );
    }
}
