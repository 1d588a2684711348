//! Selection summarizer
//!
//! Groups selections into a category-to-labels mapping for display. Both
//! grouping order and within-group order follow the caller's selection order.

use crate::types::{FactorTag, ImageSelection, SummaryMap};

/// Anything that can be folded into a category summary
pub trait Summarized {
    /// Display label contributed to the group
    fn label(&self) -> &str;

    /// Grouping category; items without one are skipped silently
    fn category_label(&self) -> Option<&'static str>;
}

impl Summarized for ImageSelection {
    fn label(&self) -> &str {
        &self.description
    }

    fn category_label(&self) -> Option<&'static str> {
        self.category.map(|c| c.label())
    }
}

impl Summarized for FactorTag {
    fn label(&self) -> &str {
        &self.tag
    }

    fn category_label(&self) -> Option<&'static str> {
        self.category.map(|c| c.label())
    }
}

/// Group selections by category in encounter order
///
/// Repeated labels are kept as-is; selection-set uniqueness is the UI's
/// concern, not enforced here.
pub fn summarize<T: Summarized>(items: &[T]) -> SummaryMap {
    let mut map = SummaryMap::new();
    for item in items {
        if let Some(category) = item.category_label() {
            map.push(category, item.label());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FactorCategory, ImageCategory};

    #[test]
    fn test_images_group_by_category_in_order() {
        let images = vec![
            ImageSelection::new(
                "a",
                "/g/a.jpg",
                "Alopecia Areata - Single Patch",
                Some(ImageCategory::Patchy),
            ),
            ImageSelection::new(
                "b",
                "/g/b.jpg",
                "Male AGA - Stage 3",
                Some(ImageCategory::MalePattern),
            ),
            ImageSelection::new(
                "c",
                "/g/c.jpg",
                "Alopecia Areata - Multiple Patches",
                Some(ImageCategory::Patchy),
            ),
        ];
        let map = summarize(&images);
        assert_eq!(map.len(), 2);
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
    fn test_tags_group_by_factor_category() {
        let tags = vec![
            FactorTag::new("Chronic stress", Some(FactorCategory::LifestyleStress)),
            FactorTag::new("Poor sleep", Some(FactorCategory::LifestyleStress)),
        ];
        let map = summarize(&tags);
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.labels("LIFESTYLE & STRESS").unwrap(),
            &["Chronic stress".to_string(), "Poor sleep".to_string()]
        );
    }

    #[test]
    fn test_items_without_category_are_skipped() {
        let tags = vec![
            FactorTag::new("Chronic stress", Some(FactorCategory::LifestyleStress)),
            FactorTag::new("Orphaned tag", None),
        ];
        let map = summarize(&tags);
        assert_eq!(map.len(), 1);
        assert!(map.labels("LIFESTYLE & STRESS").is_some());
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        let images: Vec<ImageSelection> = vec![];
        assert!(summarize(&images).is_empty());
    }
}
