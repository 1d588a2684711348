//! Reference-table consistency audit
//!
//! Lookups are keyed by free-text labels, so a renamed gallery or checkbox
//! label fails silently: the selection falls through to a less specific
//! classifier rule or the default recommendation entry. `check_labels`
//! surfaces exactly those labels so drift is caught by tests rather than
//! discovered by users.

use serde::Deserialize;
use std::fmt;

use crate::errors::Result;
use crate::reference::{MatchKind, ReferenceData};

const UI_LABELS_JSON: &str = include_str!("data/ui_labels.json");

/// Inventory of every label the wizard UI can emit
#[derive(Debug, Clone, Deserialize)]
pub struct UiLabelSet {
    pub image_descriptions: Vec<String>,
    pub factor_tags: Vec<String>,
}

impl UiLabelSet {
    /// The inventory bundled alongside the crate's own reference data
    pub fn bundled() -> Result<Self> {
        Ok(serde_json::from_str(UI_LABELS_JSON)?)
    }
}

/// Which side of the UI a problem label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    ImageDescription,
    FactorTag,
}

/// One label that does not resolve cleanly against the reference tables
#[derive(Debug, Clone)]
pub struct LabelIssue {
    pub label: String,
    pub kind: LabelKind,
    pub problem: String,
}

impl fmt::Display for LabelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}: {}", self.kind, self.label, self.problem)
    }
}

impl ReferenceData {
    /// Audit a UI label inventory against the reference tables
    ///
    /// An empty result means every label resolves exactly. Substring and
    /// default resolutions are reported too: they keep the engine total but
    /// indicate a renamed label whose table entry was never updated.
    pub fn check_labels(&self, labels: &UiLabelSet) -> Vec<LabelIssue> {
        let mut issues = Vec::new();

        for description in &labels.image_descriptions {
            if self.condition(description).is_none() {
                issues.push(LabelIssue {
                    label: description.clone(),
                    kind: LabelKind::ImageDescription,
                    problem: "no condition descriptor; this image never affects classification"
                        .to_string(),
                });
            }
            if self.severity_descriptor(description).is_none() {
                issues.push(LabelIssue {
                    label: description.clone(),
                    kind: LabelKind::ImageDescription,
                    problem: "no severity descriptor".to_string(),
                });
            }
        }

        for tag in &labels.factor_tags {
            let resolved = self.recommendations().resolve(tag);
            match resolved.kind {
                MatchKind::Exact => {}
                MatchKind::Substring => issues.push(LabelIssue {
                    label: tag.clone(),
                    kind: LabelKind::FactorTag,
                    problem: format!(
                        "resolves only via substring fallback to {:?}",
                        resolved.matched_key
                    ),
                }),
                MatchKind::Default => issues.push(LabelIssue {
                    label: tag.clone(),
                    kind: LabelKind::FactorTag,
                    problem: "falls through to the default recommendation entry".to_string(),
                }),
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_inventory_is_consistent() {
        let data = ReferenceData::load().unwrap();
        let labels = UiLabelSet::bundled().unwrap();
        let issues = data.check_labels(&labels);
        assert!(
            issues.is_empty(),
            "label drift detected: {:?}",
            issues.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_renamed_image_label_is_reported() {
        let data = ReferenceData::load().unwrap();
        let labels = UiLabelSet {
            image_descriptions: vec!["Male AGA - Phase 3".to_string()],
            factor_tags: vec![],
        };
        let issues = data.check_labels(&labels);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| i.kind == LabelKind::ImageDescription));
    }

    #[test]
    fn test_abbreviated_tag_is_reported_as_substring() {
        let data = ReferenceData::load().unwrap();
        let labels = UiLabelSet {
            image_descriptions: vec![],
            factor_tags: vec!["Wind".to_string()],
        };
        let issues = data.check_labels(&labels);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].problem.contains("Windy conditions"));
    }
}
