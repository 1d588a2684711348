//! Selection input types
//!
//! Records created by the wizard UI when the user picks reference photos and
//! contributing-factor checkboxes. The engine treats both as immutable,
//! caller-owned values; identity and toggle semantics are enforced upstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed photo gallery categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageCategory {
    MalePattern,
    FemalePattern,
    Patchy,
    Other,
}

impl ImageCategory {
    /// Wire/display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            ImageCategory::MalePattern => "male-pattern",
            ImageCategory::FemalePattern => "female-pattern",
            ImageCategory::Patchy => "patchy",
            ImageCategory::Other => "other",
        }
    }

    /// Whether this category indicates androgenetic pattern loss
    pub fn is_pattern_loss(&self) -> bool {
        matches!(self, ImageCategory::MalePattern | ImageCategory::FemalePattern)
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The 8 fixed contributing-factor categories shown by the checkbox step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorCategory {
    #[serde(rename = "LIFESTYLE & STRESS")]
    LifestyleStress,
    #[serde(rename = "DIET & NUTRITION")]
    DietNutrition,
    #[serde(rename = "MEDICAL CONDITIONS")]
    MedicalConditions,
    #[serde(rename = "MEDICATIONS & TREATMENTS")]
    MedicationsTreatments,
    #[serde(rename = "HORMONAL FACTORS")]
    HormonalFactors,
    #[serde(rename = "HAIR CARE PRACTICES")]
    HairCarePractices,
    #[serde(rename = "SCALP CONDITIONS")]
    ScalpConditions,
    #[serde(rename = "EXTERNAL FACTORS")]
    ExternalFactors,
}

impl FactorCategory {
    /// Wire/display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            FactorCategory::LifestyleStress => "LIFESTYLE & STRESS",
            FactorCategory::DietNutrition => "DIET & NUTRITION",
            FactorCategory::MedicalConditions => "MEDICAL CONDITIONS",
            FactorCategory::MedicationsTreatments => "MEDICATIONS & TREATMENTS",
            FactorCategory::HormonalFactors => "HORMONAL FACTORS",
            FactorCategory::HairCarePractices => "HAIR CARE PRACTICES",
            FactorCategory::ScalpConditions => "SCALP CONDITIONS",
            FactorCategory::ExternalFactors => "EXTERNAL FACTORS",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A photo the user picked as resembling their condition
///
/// `description` is the pre-assigned gallery label; reference tables are keyed
/// by it. `url` is opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSelection {
    /// Gallery identity key
    pub id: String,

    /// Opaque image location, passed through for display
    pub url: String,

    /// Pre-assigned gallery label, e.g. "Male AGA - Stage 3"
    pub description: String,

    /// Gallery category; selections without one are skipped by the summarizer
    #[serde(default)]
    pub category: Option<ImageCategory>,
}

impl ImageSelection {
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        category: Option<ImageCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            description: description.into(),
            category,
        }
    }
}

/// A contributing-factor checkbox the user ticked
///
/// Identity is the (tag, category) pair; presence is binary, the UI toggles
/// rather than accumulates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorTag {
    /// Checkbox label, e.g. "Chronic stress"
    pub tag: String,

    /// Factor category; tags without one are skipped by the summarizer
    #[serde(default)]
    pub category: Option<FactorCategory>,
}

impl FactorTag {
    pub fn new(tag: impl Into<String>, category: Option<FactorCategory>) -> Self {
        Self {
            tag: tag.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_category_wire_names() {
        let json = serde_json::to_string(&ImageCategory::MalePattern).unwrap();
        assert_eq!(json, "\"male-pattern\"");

        let parsed: ImageCategory = serde_json::from_str("\"female-pattern\"").unwrap();
        assert_eq!(parsed, ImageCategory::FemalePattern);
    }

    #[test]
    fn test_factor_category_wire_names() {
        let json = serde_json::to_string(&FactorCategory::DietNutrition).unwrap();
        assert_eq!(json, "\"DIET & NUTRITION\"");
    }

    #[test]
    fn test_selection_without_category_deserializes() {
        let json = r#"{"id":"img-7","url":"/gallery/7.jpg","description":"Unlabeled"}"#;
        let sel: ImageSelection = serde_json::from_str(json).unwrap();
        assert!(sel.category.is_none());
    }

    #[test]
    fn test_pattern_loss_categories() {
        assert!(ImageCategory::MalePattern.is_pattern_loss());
        assert!(ImageCategory::FemalePattern.is_pattern_loss());
        assert!(!ImageCategory::Patchy.is_pattern_loss());
        assert!(!ImageCategory::Other.is_pattern_loss());
    }
}
