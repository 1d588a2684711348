//! Assessment result types
//!
//! The derived record handed back to the session layer after a full
//! assessment run. Results are immutable once produced; a changed selection
//! set means a full re-run, never a patch.

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

use crate::types::selections::FactorCategory;

/// Top-level condition bucket
///
/// The rule-based classifier only ever returns the first three variants.
/// `Unknown` exists so results produced by the conversational assistant
/// collaborator, which shares this schema, still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Temporary")]
    Temporary,
    #[serde(rename = "Permanent Non-Scarring")]
    PermanentNonScarring,
    #[serde(rename = "Permanent Scarring")]
    PermanentScarring,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Temporary => "Temporary",
            Classification::PermanentNonScarring => "Permanent Non-Scarring",
            Classification::PermanentScarring => "Permanent Scarring",
            Classification::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 5-point ordinal severity, independent of classification
///
/// `Unknown` follows the same rule as [`Classification::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Mild")]
    Mild,
    #[serde(rename = "Mild to Moderate")]
    MildToModerate,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Moderate to Severe")]
    ModerateToSevere,
    #[serde(rename = "Severe")]
    Severe,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::MildToModerate => "Mild to Moderate",
            Severity::Moderate => "Moderate",
            Severity::ModerateToSevere => "Moderate to Severe",
            Severity::Severe => "Severe",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One issue/impact/recommendation record per selected factor tag
///
/// `tag` and `category` always echo the user's selection, even when the
/// matched table entry was found under a different key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub tag: String,
    #[serde(default)]
    pub category: Option<FactorCategory>,
    pub issue: String,
    pub impact: String,
    pub recommendation: String,
}

/// Insertion-ordered category-to-labels mapping
///
/// Grouping order follows the caller's selection order and is an observable
/// contract, so entries are kept as a vector of pairs and serialized as a
/// JSON object in that order rather than going through a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SummaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label under a category, creating the group on first sight
    pub fn push(&mut self, category: &str, label: impl Into<String>) {
        if let Some(index) = self.entries.iter().position(|(c, _)| c == category) {
            self.entries[index].1.push(label.into());
        } else {
            self.entries.push((category.to_string(), vec![label.into()]));
        }
    }

    /// Labels grouped under a category, in encounter order
    pub fn labels(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, labels)| labels.as_slice())
    }

    /// Number of category groups
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate groups in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(c, labels)| (c.as_str(), labels.as_slice()))
    }
}

impl Serialize for SummaryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, labels) in &self.entries {
            map.serialize_entry(category, labels)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SummaryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SummaryMapVisitor;

        impl<'de> Visitor<'de> for SummaryMapVisitor {
            type Value = SummaryMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to list of labels")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, labels)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    entries.push((category, labels));
                }
                Ok(SummaryMap { entries })
            }
        }

        deserializer.deserialize_map(SummaryMapVisitor)
    }
}

impl FromIterator<(String, Vec<String>)> for SummaryMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        SummaryMap {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Complete output of one assessment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResults {
    /// Fresh id per run
    pub assessment_id: Uuid,

    pub classification: Classification,

    pub severity: Severity,

    /// Selected photos grouped by gallery category
    pub selected_image_summary: SummaryMap,

    /// Ticked factors grouped by factor category
    pub contributing_factors_summary: SummaryMap,

    /// One record per selected tag, in selection order
    pub recommendations: Vec<RecommendationRecord>,

    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_wire_names() {
        let json = serde_json::to_string(&Classification::PermanentNonScarring).unwrap();
        assert_eq!(json, "\"Permanent Non-Scarring\"");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Mild < Severity::MildToModerate);
        assert!(Severity::ModerateToSevere < Severity::Severe);
    }

    #[test]
    fn test_unknown_variants_deserialize() {
        // The assistant-produced payload may carry Unknown in either field.
        let c: Classification = serde_json::from_str("\"Unknown\"").unwrap();
        let s: Severity = serde_json::from_str("\"Unknown\"").unwrap();
        assert_eq!(c, Classification::Unknown);
        assert_eq!(s, Severity::Unknown);
    }

    #[test]
    fn test_summary_map_preserves_insertion_order() {
        let mut map = SummaryMap::new();
        map.push("patchy", "Alopecia Areata - Single Patch");
        map.push("male-pattern", "Male AGA - Stage 3");
        map.push("patchy", "Alopecia Areata - Multiple Patches");

        let keys: Vec<&str> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!["patchy", "male-pattern"]);
        assert_eq!(
            map.labels("patchy").unwrap(),
            &[
                "Alopecia Areata - Single Patch".to_string(),
                "Alopecia Areata - Multiple Patches".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_map_serializes_as_object() {
        let mut map = SummaryMap::new();
        map.push("other", "Telogen Effluvium - Diffuse Shedding");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"other":["Telogen Effluvium - Diffuse Shedding"]}"#
        );

        let back: SummaryMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
