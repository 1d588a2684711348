//! End-to-end assessment pipeline tests
//!
//! Exercises the engine facade over the scenarios the wizard actually
//! produces: photo picks plus factor checkboxes in one call.

use trichoguide::config::EngineConfig;
use trichoguide::packages::PackageCatalog;
use trichoguide::reference::{ReferenceData, UiLabelSet};
use trichoguide::types::{Classification, FactorCategory, ImageCategory, Severity};
use trichoguide::{AssessmentEngine, FactorTag, ImageSelection};

fn engine() -> AssessmentEngine {
    AssessmentEngine::with_parts(
        ReferenceData::load().unwrap(),
        PackageCatalog::load().unwrap(),
        EngineConfig::default(),
    )
}

fn image(id: &str, description: &str, category: ImageCategory) -> ImageSelection {
    ImageSelection::new(id, format!("/gallery/{id}.jpg"), description, Some(category))
}

fn tag(label: &str, category: FactorCategory) -> FactorTag {
    FactorTag::new(label, Some(category))
}

#[test]
fn test_stage_five_male_pattern_scenario() {
    let engine = engine();
    let images = vec![image("m5", "Male AGA - Stage 5", ImageCategory::MalePattern)];

    let results = engine.assess(&images, &[]);

    assert_eq!(results.classification, Classification::PermanentNonScarring);
    assert_eq!(results.severity, Severity::ModerateToSevere);
    assert!(results.recommendations.is_empty());
    assert_eq!(
        results.selected_image_summary.labels("male-pattern").unwrap(),
        &["Male AGA - Stage 5".to_string()]
    );
}

#[test]
fn test_crash_dieting_scenario() {
    let engine = engine();
    let tags = vec![tag(
        "Crash dieting/Calorie restriction",
        FactorCategory::DietNutrition,
    )];

    let results = engine.assess(&[], &tags);

    assert_eq!(results.classification, Classification::Temporary);
    assert_eq!(results.severity, Severity::MildToModerate);
    assert_eq!(results.recommendations.len(), 1);
    assert_eq!(
        results.recommendations[0].tag,
        "Crash dieting/Calorie restriction"
    );
}

#[test]
fn test_scarring_tag_preempts_aga_evidence() {
    let engine = engine();
    let images = vec![image("m4", "Male AGA - Stage 4", ImageCategory::MalePattern)];
    let tags = vec![tag("Scalp wounds/sores", FactorCategory::ScalpConditions)];

    let results = engine.assess(&images, &tags);

    assert_eq!(results.classification, Classification::PermanentScarring);
    assert_eq!(results.severity, Severity::Severe);
}

#[test]
fn test_abbreviated_tag_resolves_through_substring_fallback() {
    let engine = engine();
    let tags = vec![tag("Wind", FactorCategory::ExternalFactors)];

    let results = engine.assess(&[], &tags);

    assert_eq!(results.recommendations.len(), 1);
    let record = &results.recommendations[0];
    // Matched entry is "Windy conditions"; displayed tag stays "Wind".
    assert_eq!(record.tag, "Wind");
    assert_eq!(record.category, Some(FactorCategory::ExternalFactors));
    assert!(!record.recommendation.is_empty());
}

#[test]
fn test_empty_selection_set_still_produces_results() {
    let engine = engine();
    let results = engine.assess(&[], &[]);

    assert_eq!(results.classification, Classification::Temporary);
    assert_eq!(results.severity, Severity::Mild);
    assert!(results.selected_image_summary.is_empty());
    assert!(results.contributing_factors_summary.is_empty());
    assert!(results.recommendations.is_empty());
}

#[test]
fn test_rerun_with_changed_selections_recomputes_everything() {
    let engine = engine();
    let first = engine.assess(
        &[image("p1", "Alopecia Areata - Single Patch", ImageCategory::Patchy)],
        &[],
    );

    // User goes back and swaps the photo for a scarring one.
    let second = engine.assess(
        &[image("o1", "Frontal Fibrosing Alopecia", ImageCategory::Other)],
        &[],
    );

    assert_ne!(first.assessment_id, second.assessment_id);
    assert_eq!(second.classification, Classification::PermanentScarring);
    assert!(second.selected_image_summary.labels("patchy").is_none());
}

#[test]
fn test_mixed_selection_walkthrough() {
    let engine = engine();
    let images = vec![
        image("f2", "Female AGA - Stage 2", ImageCategory::FemalePattern),
        image("f3", "Female AGA - Widening Part", ImageCategory::FemalePattern),
    ];
    let tags = vec![
        tag("PCOS", FactorCategory::HormonalFactors),
        tag("Iron deficiency", FactorCategory::DietNutrition),
        tag("Heat styling", FactorCategory::HairCarePractices),
    ];

    let results = engine.assess(&images, &tags);

    // Stage 2 image carries no advanced-stage marker; 2 images and 1 AGA tag
    // stay under the escalation thresholds.
    assert_eq!(results.classification, Classification::PermanentNonScarring);
    assert_eq!(results.severity, Severity::Moderate);

    assert_eq!(results.recommendations.len(), 3);
    let order: Vec<&str> = results
        .recommendations
        .iter()
        .map(|r| r.tag.as_str())
        .collect();
    assert_eq!(order, vec!["PCOS", "Iron deficiency", "Heat styling"]);

    assert_eq!(results.contributing_factors_summary.len(), 3);
}

#[test]
fn test_bundled_labels_resolve_against_reference_tables() {
    let engine = engine();
    let labels = UiLabelSet::bundled().unwrap();
    let issues = engine.reference().check_labels(&labels);
    assert!(issues.is_empty(), "label drift: {issues:?}");
}

#[test]
fn test_assistant_payload_with_unknown_fields_deserializes() {
    // The conversational assistant produces a structurally compatible record
    // that may carry "Unknown" in either field.
    let json = r#"{
        "assessment_id": "6f2f84e3-58d4-4b38-9f19-2f8a7f3d9f01",
        "classification": "Unknown",
        "severity": "Unknown",
        "selected_image_summary": {},
        "contributing_factors_summary": {},
        "recommendations": [],
        "generated_at": "2026-07-14T10:30:00Z"
    }"#;
    let results: trichoguide::AssessmentResults = serde_json::from_str(json).unwrap();
    assert_eq!(results.classification, Classification::Unknown);
    assert_eq!(results.severity, Severity::Unknown);
}
