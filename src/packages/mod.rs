//! Treatment package catalog and preference filter
//!
//! A fixed 4-tier catalog plus the filter that narrows it by budget band,
//! clinic-visit willingness, and region. Catalog content (prices, features)
//! can change without touching the filtering contract.

use serde::{Deserialize, Serialize};

use crate::errors::{AssessmentError, Result};
use crate::types::{BudgetBand, TreatmentPreferences};

const CATALOG_JSON: &str = include_str!("data/catalog.json");

/// Packages that include in-clinic sessions
const CLINIC_REQUIRED: [&str; 2] = ["home_clinic_360", "intensive"];

/// One entry of the treatment package catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentPackage {
    pub id: String,
    pub title: String,
    pub price: String,
    pub program_price: String,
    pub features: Vec<String>,
    pub expected_results: String,
    pub details_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    supported_region: String,
    packages: Vec<TreatmentPackage>,
}

/// The static package catalog plus the one region served in-clinic
#[derive(Debug, Clone)]
pub struct PackageCatalog {
    supported_region: String,
    packages: Vec<TreatmentPackage>,
}

impl PackageCatalog {
    /// Parse and validate the embedded catalog
    pub fn load() -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(CATALOG_JSON)?;
        Self::from_packages(file.supported_region, file.packages)
    }

    /// Build a catalog from substitute entries, validating that every id the
    /// filter can emit actually exists
    pub fn from_packages(
        supported_region: String,
        packages: Vec<TreatmentPackage>,
    ) -> Result<Self> {
        let catalog = Self {
            supported_region,
            packages,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(AssessmentError::Catalog("catalog is empty".to_string()));
        }
        let bands = [
            BudgetBand::Under200,
            BudgetBand::Band200To350,
            BudgetBand::Band350To500,
            BudgetBand::Over500,
            BudgetBand::NotAConcern,
            BudgetBand::Unspecified,
        ];
        let referenced = bands
            .iter()
            .flat_map(|band| budget_candidates(*band).iter().copied())
            .chain(CLINIC_REQUIRED)
            .chain(FALLBACK_IDS);
        for id in referenced {
            if self.get(id).is_none() {
                return Err(AssessmentError::Catalog(format!(
                    "filter references unknown package id {id:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn packages(&self) -> &[TreatmentPackage] {
        &self.packages
    }

    pub fn get(&self, id: &str) -> Option<&TreatmentPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn supported_region(&self) -> &str {
        &self.supported_region
    }
}

/// Ranked outcome: one primary suggestion plus up to two alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecommendation {
    pub recommended: Option<String>,
    pub alternatives: Vec<String>,
}

/// Fallback ids when filtering empties the candidate list
const FALLBACK_IDS: [&str; 2] = ["essential", "starter"];

/// Budget band to ordered candidate ids
///
/// Low bands lead with the cheapest compatible package; the open-ended bands
/// lead with capability. An unspecified band applies no budget narrowing.
fn budget_candidates(band: BudgetBand) -> &'static [&'static str] {
    match band {
        BudgetBand::Under200 => &["starter"],
        BudgetBand::Band200To350 => &["essential", "starter"],
        BudgetBand::Band350To500 => &["home_clinic_360", "essential"],
        BudgetBand::Over500 => &["intensive", "home_clinic_360"],
        BudgetBand::NotAConcern | BudgetBand::Unspecified => {
            &["intensive", "home_clinic_360", "essential", "starter"]
        }
    }
}

/// Preference-driven package filter
///
/// Total over all preference values; never returns an empty recommendation
/// while the catalog is non-empty.
pub struct PackageFilter<'a> {
    catalog: &'a PackageCatalog,
}

impl<'a> PackageFilter<'a> {
    pub fn new(catalog: &'a PackageCatalog) -> Self {
        Self { catalog }
    }

    pub fn filter(&self, prefs: &TreatmentPreferences) -> PackageRecommendation {
        let budget = budget_candidates(prefs.monthly_budget);
        let mut candidates: Vec<&str> = budget.to_vec();

        if prefs.clinic_visits.is_home_only() {
            candidates.retain(|id| !CLINIC_REQUIRED.contains(id));
        }
        if !self.location_supported(&prefs.location) {
            candidates.retain(|id| !CLINIC_REQUIRED.contains(id));
        }

        if candidates.is_empty() {
            candidates = if budget.contains(&FALLBACK_IDS[0]) {
                FALLBACK_IDS.to_vec()
            } else {
                vec![FALLBACK_IDS[1]]
            };
        }

        let mut ids = candidates.into_iter();
        let recommended = ids.next().map(str::to_string);
        let alternatives = ids.take(2).map(str::to_string).collect();
        PackageRecommendation {
            recommended,
            alternatives,
        }
    }

    fn location_supported(&self, location: &str) -> bool {
        location
            .trim()
            .eq_ignore_ascii_case(self.catalog.supported_region())
    }
}
