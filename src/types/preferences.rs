//! Treatment preference types
//!
//! Collected by the preferences step after the assessment and consumed only
//! by the package filter. Unrecognized wire values are not errors: they fall
//! through to permissive `Unspecified` variants, which leave the catalog
//! unfiltered on that axis.

use serde::{Deserialize, Serialize};

/// The 5 fixed monthly budget bands offered by the preferences step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetBand {
    #[serde(rename = "Under €200/month")]
    Under200,
    #[serde(rename = "€200-€350/month")]
    Band200To350,
    #[serde(rename = "€350-€500/month")]
    Band350To500,
    #[serde(rename = "€500+/month")]
    Over500,
    #[serde(rename = "Budget is not a concern")]
    NotAConcern,
    /// Any other wire value: budget filtering is skipped
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Willingness to attend in-clinic sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClinicVisitPreference {
    #[serde(rename = "Yes - open to clinic visits")]
    OpenToVisits,
    #[serde(rename = "No clinic visits - home treatment only")]
    HomeOnly,
    /// Any other wire value: clinic filtering is skipped
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ClinicVisitPreference {
    /// Whether clinic-requiring packages must be excluded
    pub fn is_home_only(&self) -> bool {
        matches!(self, ClinicVisitPreference::HomeOnly)
    }
}

/// Preferences supplied by the UI ahead of package matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreatmentPreferences {
    pub monthly_budget: BudgetBand,
    pub clinic_visits: ClinicVisitPreference,
    /// Free-text region; compared case-insensitively against the supported
    /// in-clinic region
    #[serde(default)]
    pub location: String,
}
