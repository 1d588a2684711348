//! Assessment engine facade
//!
//! Owns the reference tables, package catalog, and configuration, and runs
//! the whole pipeline per call. The engine is stateless between calls: every
//! run recomputes the complete results record, so revisiting a wizard step
//! with a changed selection set just means calling [`AssessmentEngine::assess`]
//! again.

use chrono::Utc;
use uuid::Uuid;

use crate::classifier::Classifier;
use crate::config::EngineConfig;
use crate::errors::Result;
use crate::packages::{PackageCatalog, PackageFilter, PackageRecommendation, TreatmentPackage};
use crate::recommend::RecommendationGenerator;
use crate::reference::{ConditionDescriptor, ReferenceData, SeverityDescriptor};
use crate::summary::summarize;
use crate::types::{
    AssessmentResults, FactorTag, ImageSelection, TreatmentPreferences,
};

/// Condition details behind one selected image, for the results page
#[derive(Debug, Clone, Copy)]
pub struct MatchedCondition<'a> {
    pub description: &'a str,
    pub condition: &'a ConditionDescriptor,
    pub severity: Option<&'a SeverityDescriptor>,
}

/// The single entry point the session layer calls
pub struct AssessmentEngine {
    reference: ReferenceData,
    catalog: PackageCatalog,
    config: EngineConfig,
}

impl AssessmentEngine {
    /// Load embedded reference data, the package catalog, and on-disk
    /// configuration (defaults when no config file exists)
    pub fn new() -> Result<Self> {
        Ok(Self {
            reference: ReferenceData::load()?,
            catalog: PackageCatalog::load()?,
            config: EngineConfig::load()?,
        })
    }

    /// Assemble an engine from substitute parts
    pub fn with_parts(
        reference: ReferenceData,
        catalog: PackageCatalog,
        config: EngineConfig,
    ) -> Self {
        Self {
            reference,
            catalog,
            config,
        }
    }

    /// Run the full assessment pipeline over one selection set
    ///
    /// Classification, summaries, and recommendations are computed in one
    /// pass and stamped with a fresh run id and timestamp.
    pub fn assess(&self, images: &[ImageSelection], tags: &[FactorTag]) -> AssessmentResults {
        let classifier = Classifier::new(&self.reference, self.config.thresholds);
        let verdict = classifier.classify(images, tags);
        let generator = RecommendationGenerator::new(self.reference.recommendations());

        AssessmentResults {
            assessment_id: Uuid::new_v4(),
            classification: verdict.classification,
            severity: verdict.severity,
            selected_image_summary: summarize(images),
            contributing_factors_summary: summarize(tags),
            recommendations: generator.recommend(tags),
            generated_at: Utc::now(),
        }
    }

    /// Condition and severity descriptors for the selected images, in
    /// selection order; descriptions absent from the tables are skipped
    pub fn matched_conditions<'a>(
        &'a self,
        images: &'a [ImageSelection],
    ) -> Vec<MatchedCondition<'a>> {
        images
            .iter()
            .filter_map(|img| {
                self.reference
                    .condition(&img.description)
                    .map(|condition| MatchedCondition {
                        description: &img.description,
                        condition,
                        severity: self.reference.severity_descriptor(&img.description),
                    })
            })
            .collect()
    }

    /// Narrow the package catalog by the user's treatment preferences
    pub fn recommend_package(&self, prefs: &TreatmentPreferences) -> PackageRecommendation {
        PackageFilter::new(&self.catalog).filter(prefs)
    }

    /// Read-only catalog access for the presentation layer
    pub fn package_catalog(&self) -> &[TreatmentPackage] {
        self.catalog.packages()
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
