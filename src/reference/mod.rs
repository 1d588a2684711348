//! Static clinical reference data
//!
//! Condition and severity descriptors keyed by gallery image description, the
//! contributing-factor recommendation table, and the tag sets driving the
//! classifier rules. The tables ship as embedded JSON and are parsed once into
//! a read-only [`ReferenceData`] value that callers hand to the pure
//! functions; tests inject substitute tables through
//! [`ReferenceData::from_parts`].

mod check;

pub use check::{LabelIssue, LabelKind, UiLabelSet};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::errors::{AssessmentError, Result};
use crate::types::Severity;

const CONDITIONS_JSON: &str = include_str!("data/conditions.json");
const SEVERITIES_JSON: &str = include_str!("data/severities.json");
const RECOMMENDATIONS_JSON: &str = include_str!("data/recommendations.json");
const RULE_TAGS_JSON: &str = include_str!("data/rule_tags.json");

/// How long a condition is expected to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationClass {
    Temporary,
    Permanent,
    Variable,
}

/// Named clinical staging scale for pattern loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StagingScale {
    Norwood,
    Sinclair,
}

/// Clinical descriptor behind one gallery image label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDescriptor {
    /// Stable condition id, shared by labels depicting the same condition
    pub id: String,
    pub name: String,
    pub common_name: String,
    pub scarring: bool,
    pub duration: DurationClass,
}

/// Severity estimate attached to one gallery image label
///
/// Staged scales only exist for pattern loss; patchy and diffuse images carry
/// a stage number without a named scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityDescriptor {
    pub severity: Severity,
    pub stage: u8,
    #[serde(default)]
    pub scale: Option<StagingScale>,
}

/// Issue/impact/recommendation text behind one factor tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub issue: String,
    pub impact: String,
    pub recommendation: String,
}

/// One row of the recommendation table
///
/// `alias_of` marks rows kept for historical selection data after a checkbox
/// label rename; the UI no longer emits those tags.
#[derive(Debug, Clone, Deserialize)]
struct RecommendationRow {
    tag: String,
    #[serde(default)]
    alias_of: Option<String>,
    #[serde(flatten)]
    entry: RecommendationEntry,
}

/// How a selected tag resolved against the recommendation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The tag is a table key
    Exact,
    /// A table key contains the tag, case-insensitively
    Substring,
    /// Fell through to the default entry
    Default,
}

/// Outcome of resolving one tag
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub entry: &'a RecommendationEntry,
    pub matched_key: &'a str,
    pub kind: MatchKind,
}

/// Ordered recommendation table with a guaranteed default entry
///
/// Row order matters: the substring fallback picks the first key whose
/// lowercased form contains the lowercased selected tag, so lookup never
/// fails even for renamed or abbreviated UI labels.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    rows: Vec<RecommendationRow>,
    default_index: usize,
}

impl RecommendationTable {
    pub const DEFAULT_KEY: &'static str = "__DEFAULT__";

    fn from_rows(rows: Vec<RecommendationRow>) -> Result<Self> {
        let default_index = rows
            .iter()
            .position(|row| row.tag == Self::DEFAULT_KEY)
            .ok_or_else(|| AssessmentError::InvalidTable {
                table: "recommendations".to_string(),
                message: format!("missing {} entry", Self::DEFAULT_KEY),
            })?;
        Ok(Self {
            rows,
            default_index,
        })
    }

    /// Build a table from (tag, entry) pairs plus a default entry
    pub fn from_entries(
        entries: Vec<(String, RecommendationEntry)>,
        default: RecommendationEntry,
    ) -> Self {
        let mut rows: Vec<RecommendationRow> = entries
            .into_iter()
            .map(|(tag, entry)| RecommendationRow {
                tag,
                alias_of: None,
                entry,
            })
            .collect();
        rows.push(RecommendationRow {
            tag: Self::DEFAULT_KEY.to_string(),
            alias_of: None,
            entry: default,
        });
        let default_index = rows.len() - 1;
        Self {
            rows,
            default_index,
        }
    }

    fn default_entry(&self) -> &RecommendationEntry {
        &self.rows[self.default_index].entry
    }

    /// Resolve a selected tag: exact key, then first substring-containing
    /// key in table order, then the default entry. Total by construction.
    pub fn resolve(&self, tag: &str) -> Resolved<'_> {
        if let Some(row) = self
            .rows
            .iter()
            .find(|row| row.tag != Self::DEFAULT_KEY && row.tag == tag)
        {
            return Resolved {
                entry: &row.entry,
                matched_key: &row.tag,
                kind: MatchKind::Exact,
            };
        }

        let needle = tag.to_lowercase();
        if let Some(row) = self
            .rows
            .iter()
            .find(|row| row.tag != Self::DEFAULT_KEY && row.tag.to_lowercase().contains(&needle))
        {
            return Resolved {
                entry: &row.entry,
                matched_key: &row.tag,
                kind: MatchKind::Substring,
            };
        }

        Resolved {
            entry: self.default_entry(),
            matched_key: Self::DEFAULT_KEY,
            kind: MatchKind::Default,
        }
    }

    /// Table keys in order, default excluded
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(|row| row.tag != Self::DEFAULT_KEY)
            .map(|row| row.tag.as_str())
    }

    /// (alias key, current key) pairs retained for historical data
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().filter_map(|row| {
            row.alias_of
                .as_deref()
                .map(|current| (row.tag.as_str(), current))
        })
    }
}

/// Tag sets and keyword lists driving the classifier rules
#[derive(Debug, Clone, Deserialize)]
pub struct RuleTags {
    scarring_tags: Vec<String>,
    aga_indicator_tags: Vec<String>,
    temporary_cause_tags: Vec<String>,
    scarring_keywords: Vec<String>,
    aga_stage_markers: Vec<String>,
}

impl RuleTags {
    pub fn new(
        scarring_tags: Vec<String>,
        aga_indicator_tags: Vec<String>,
        temporary_cause_tags: Vec<String>,
        scarring_keywords: Vec<String>,
        aga_stage_markers: Vec<String>,
    ) -> Self {
        Self {
            scarring_tags,
            aga_indicator_tags,
            temporary_cause_tags,
            scarring_keywords,
            aga_stage_markers,
        }
    }

    pub fn is_scarring_tag(&self, tag: &str) -> bool {
        self.scarring_tags.iter().any(|t| t == tag)
    }

    pub fn is_aga_indicator(&self, tag: &str) -> bool {
        self.aga_indicator_tags.iter().any(|t| t == tag)
    }

    pub fn is_temporary_cause(&self, tag: &str) -> bool {
        self.temporary_cause_tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive scarring keyword scan over an image description
    pub fn description_has_scarring_keyword(&self, description: &str) -> bool {
        let lower = description.to_lowercase();
        self.scarring_keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Whether a description contains any temporary-cause tag string,
    /// case-insensitively
    pub fn description_matches_temporary_cause(&self, description: &str) -> bool {
        let lower = description.to_lowercase();
        self.temporary_cause_tags
            .iter()
            .any(|t| lower.contains(&t.to_lowercase()))
    }

    /// Whether a description carries an advanced-stage marker
    pub fn description_has_stage_marker(&self, description: &str) -> bool {
        self.aga_stage_markers
            .iter()
            .any(|m| description.contains(m.as_str()))
    }
}

/// All reference tables, parsed once and read-only afterwards
#[derive(Debug, Clone)]
pub struct ReferenceData {
    conditions: HashMap<String, ConditionDescriptor>,
    severities: HashMap<String, SeverityDescriptor>,
    recommendations: RecommendationTable,
    rules: RuleTags,
}

impl ReferenceData {
    /// Parse the embedded tables
    ///
    /// Intended to run once at startup. The returned value has no interior
    /// mutability and is safe to share across any number of threads.
    pub fn load() -> Result<Self> {
        let conditions = parse_table("conditions", CONDITIONS_JSON)?;
        let severities = parse_table("severities", SEVERITIES_JSON)?;
        let rows: Vec<RecommendationRow> = parse_table("recommendations", RECOMMENDATIONS_JSON)?;
        let rules = parse_table("rule_tags", RULE_TAGS_JSON)?;
        Ok(Self {
            conditions,
            severities,
            recommendations: RecommendationTable::from_rows(rows)?,
            rules,
        })
    }

    /// Assemble reference data from substitute tables
    pub fn from_parts(
        conditions: HashMap<String, ConditionDescriptor>,
        severities: HashMap<String, SeverityDescriptor>,
        recommendations: RecommendationTable,
        rules: RuleTags,
    ) -> Self {
        Self {
            conditions,
            severities,
            recommendations,
            rules,
        }
    }

    /// Condition descriptor for a gallery image description, if any
    pub fn condition(&self, description: &str) -> Option<&ConditionDescriptor> {
        self.conditions.get(description)
    }

    /// Severity descriptor for a gallery image description, if any
    pub fn severity_descriptor(&self, description: &str) -> Option<&SeverityDescriptor> {
        self.severities.get(description)
    }

    pub fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    pub fn rules(&self) -> &RuleTags {
        &self.rules
    }
}

fn parse_table<T: DeserializeOwned>(table: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| AssessmentError::ReferenceData {
        table: table.to_string(),
        source,
    })
}
