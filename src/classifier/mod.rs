//! Condition classifier
//!
//! An ordered rule chain evaluated top to bottom with first-match-wins
//! semantics. The precedence is part of the public contract: scarring, then
//! androgenetic, then temporary, then the fallback. Each rule is a standalone
//! function over the selection set so the chain stays testable rule by rule.

use crate::config::SeverityThresholds;
use crate::reference::ReferenceData;
use crate::types::{Classification, FactorTag, ImageCategory, ImageSelection, Severity};

/// Classification plus severity for one selection set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub classification: Classification,
    pub severity: Severity,
}

impl Verdict {
    /// Outcome when no rule matches, including the empty selection set.
    /// There is no "insufficient data" state in the rule-based path.
    pub fn fallback() -> Self {
        Verdict {
            classification: Classification::Temporary,
            severity: Severity::Mild,
        }
    }
}

/// Everything a rule may look at
struct RuleContext<'a> {
    images: &'a [ImageSelection],
    tags: &'a [FactorTag],
    reference: &'a ReferenceData,
    thresholds: &'a SeverityThresholds,
}

/// A single classification rule; `None` falls through to the next one
type Rule = fn(&RuleContext<'_>) -> Option<Verdict>;

/// Evaluation order, highest clinical urgency first
const RULE_CHAIN: [Rule; 3] = [scarring_rule, androgenetic_rule, temporary_rule];

/// The rule-based classifier
///
/// Total over all inputs: both selection lists may be empty, labels absent
/// from the reference tables never match, and the result is always drawn
/// from the fixed classification and severity sets.
pub struct Classifier<'a> {
    reference: &'a ReferenceData,
    thresholds: SeverityThresholds,
}

impl<'a> Classifier<'a> {
    pub fn new(reference: &'a ReferenceData, thresholds: SeverityThresholds) -> Self {
        Self {
            reference,
            thresholds,
        }
    }

    pub fn classify(&self, images: &[ImageSelection], tags: &[FactorTag]) -> Verdict {
        let ctx = RuleContext {
            images,
            tags,
            reference: self.reference,
            thresholds: &self.thresholds,
        };
        for rule in RULE_CHAIN {
            if let Some(verdict) = rule(&ctx) {
                return verdict;
            }
        }
        Verdict::fallback()
    }
}

/// Scarring indicators preempt everything else: any scarring tag, or an
/// "other"-category image whose description names a scarring condition.
fn scarring_rule(ctx: &RuleContext<'_>) -> Option<Verdict> {
    let rules = ctx.reference.rules();

    let tag_hit = ctx.tags.iter().any(|t| rules.is_scarring_tag(&t.tag));
    let image_hit = ctx.images.iter().any(|img| {
        img.category == Some(ImageCategory::Other)
            && rules.description_has_scarring_keyword(&img.description)
    });

    (tag_hit || image_hit).then(|| Verdict {
        classification: Classification::PermanentScarring,
        severity: Severity::Severe,
    })
}

/// Pattern-loss images or AGA-indicator tags mean androgenetic loss
fn androgenetic_rule(ctx: &RuleContext<'_>) -> Option<Verdict> {
    let rules = ctx.reference.rules();

    let aga_image_count = ctx
        .images
        .iter()
        .filter(|img| img.category.is_some_and(|c| c.is_pattern_loss()))
        .count();
    let aga_tag_count = ctx
        .tags
        .iter()
        .filter(|t| rules.is_aga_indicator(&t.tag))
        .count();

    if aga_image_count == 0 && aga_tag_count == 0 {
        return None;
    }

    let staged_count = ctx
        .images
        .iter()
        .filter(|img| {
            img.category.is_some_and(|c| c.is_pattern_loss())
                && rules.description_has_stage_marker(&img.description)
        })
        .count();

    Some(Verdict {
        classification: Classification::PermanentNonScarring,
        severity: aga_severity(staged_count, aga_image_count, aga_tag_count, ctx.thresholds),
    })
}

/// Known temporary causes, as selected tags or mentioned in an image label
fn temporary_rule(ctx: &RuleContext<'_>) -> Option<Verdict> {
    let rules = ctx.reference.rules();

    let tag_count = ctx
        .tags
        .iter()
        .filter(|t| rules.is_temporary_cause(&t.tag))
        .count();
    let image_count = ctx
        .images
        .iter()
        .filter(|img| rules.description_matches_temporary_cause(&img.description))
        .count();

    if tag_count == 0 && image_count == 0 {
        return None;
    }

    Some(Verdict {
        classification: Classification::Temporary,
        severity: temporary_severity(tag_count, image_count, ctx.thresholds),
    })
}

/// Severity sub-rule for the androgenetic classification
fn aga_severity(
    staged_count: usize,
    image_count: usize,
    tag_count: usize,
    thresholds: &SeverityThresholds,
) -> Severity {
    if staged_count > 0
        || image_count > thresholds.aga_images_moderate_to_severe_over
        || tag_count > thresholds.aga_tags_moderate_to_severe_over
    {
        Severity::ModerateToSevere
    } else if image_count > 0 || tag_count > 0 {
        Severity::Moderate
    } else {
        Severity::Mild
    }
}

/// Severity sub-rule for the temporary classification
fn temporary_severity(
    tag_count: usize,
    image_count: usize,
    thresholds: &SeverityThresholds,
) -> Severity {
    if tag_count > thresholds.temp_tags_moderate_over
        || (tag_count > 0 && image_count > 0)
        || image_count > thresholds.temp_images_moderate_over
    {
        Severity::Moderate
    } else if tag_count > 0 || image_count > 0 {
        Severity::MildToModerate
    } else {
        Severity::Mild
    }
}
