//! Recommendation generator
//!
//! Turns the selected contributing-factor tags into issue/impact/
//! recommendation records, one per tag in the caller's selection order.

use crate::reference::RecommendationTable;
use crate::types::{FactorTag, RecommendationRecord};

pub struct RecommendationGenerator<'a> {
    table: &'a RecommendationTable,
}

impl<'a> RecommendationGenerator<'a> {
    pub fn new(table: &'a RecommendationTable) -> Self {
        Self { table }
    }

    /// One record per tag, order preserved, no deduplication
    ///
    /// Resolution per tag: exact key, then first substring-containing key,
    /// then the default entry. The record echoes the selected tag and
    /// category even when the matched entry came from a different key, so
    /// display stays consistent with what the user ticked.
    pub fn recommend(&self, tags: &[FactorTag]) -> Vec<RecommendationRecord> {
        tags.iter()
            .map(|selected| {
                let resolved = self.table.resolve(&selected.tag);
                RecommendationRecord {
                    tag: selected.tag.clone(),
                    category: selected.category,
                    issue: resolved.entry.issue.clone(),
                    impact: resolved.entry.impact.clone(),
                    recommendation: resolved.entry.recommendation.clone(),
                }
            })
            .collect()
    }
}
