//! Type definitions module
//!
//! Input records supplied by the wizard UI, derived assessment results,
//! and treatment preference types consumed by the package filter.

pub mod selections;
pub mod results;
pub mod preferences;

// Re-export commonly used types
pub use selections::{FactorCategory, FactorTag, ImageCategory, ImageSelection};
pub use results::{
    AssessmentResults, Classification, RecommendationRecord, Severity, SummaryMap,
};
pub use preferences::{BudgetBand, ClinicVisitPreference, TreatmentPreferences};
