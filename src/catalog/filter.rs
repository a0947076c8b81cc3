//! Keyword filtering of the dataset.
//!
//! Matching is a case-insensitive substring test against the product title
//! only. The filter is stable: matches keep their dataset order.

use crate::domain::Product;
use std::rc::Rc;

/// Committed keyword filter.
///
/// Holds the text exactly as the user committed it; matching uses the trimmed,
/// lowercased form. An empty or whitespace-only keyword means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    keyword: String,
}

impl FilterState {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// The keyword as committed, untrimmed.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The normalized needle, or `None` when the filter is inactive.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.keyword.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.keyword.trim().is_empty()
    }
}

/// Returns `true` if `title` contains the already-lowercased `needle`.
#[must_use]
pub fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

/// Produces a new view holding the dataset entries whose title contains
/// `keyword`, in dataset order.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use zshelf::catalog::apply_filter;
/// use zshelf::Product;
///
/// let dataset = vec![
///     Rc::new(Product::new(1, "Apple", 10.0)),
///     Rc::new(Product::new(2, "Banana", 5.0)),
/// ];
/// let view = apply_filter(&dataset, "AN");
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].title, "Banana");
/// ```
#[must_use]
pub fn apply_filter(dataset: &[Rc<Product>], keyword: &str) -> Vec<Rc<Product>> {
    let _span = tracing::debug_span!("apply_filter",
        dataset_len = dataset.len(),
        keyword_len = keyword.len()
    ).entered();

    let Some(needle) = FilterState::new(keyword).needle() else {
        return dataset.to_vec();
    };

    let view: Vec<Rc<Product>> = dataset
        .iter()
        .filter(|product| title_matches(&product.title, &needle))
        .cloned()
        .collect();

    tracing::debug!(matched = view.len(), "keyword filter applied");
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(titles: &[&str]) -> Vec<Rc<Product>> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Rc::new(Product::new(i as u64, *t, i as f64)))
            .collect()
    }

    fn titles(view: &[Rc<Product>]) -> Vec<&str> {
        view.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_keyword_is_identity() {
        let data = dataset(&["Chair", "Apple", "Banana"]);
        let view = apply_filter(&data, "");
        assert_eq!(titles(&view), ["Chair", "Apple", "Banana"]);
        assert!(view.iter().zip(&data).all(|(a, b)| Rc::ptr_eq(a, b)));
    }

    #[test]
    fn whitespace_keyword_is_identity() {
        let data = dataset(&["Chair", "Apple"]);
        assert_eq!(titles(&apply_filter(&data, "   \t")), ["Chair", "Apple"]);
    }

    #[test]
    fn scenario_a_only_banana_contains_an() {
        let data = vec![
            Rc::new(Product::new(1, "Apple", 10.0)),
            Rc::new(Product::new(2, "Banana", 5.0)),
        ];
        let view = apply_filter(&data, "an");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Banana");
        assert!((view[0].price - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let data = dataset(&["Wooden CHAIR", "Table", "armchair"]);
        assert_eq!(titles(&apply_filter(&data, "  Chair ")), ["Wooden CHAIR", "armchair"]);
    }

    #[test]
    fn only_title_is_searched() {
        let mut product = Product::new(1, "Mug", 3.0);
        product.description = "a chair-shaped mug".to_string();
        let data = vec![Rc::new(product)];
        assert!(apply_filter(&data, "chair").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_subsequence() {
        let data = dataset(&["red shoe", "blue hat", "Red hat", "green", "shred"]);
        let view = apply_filter(&data, "red");

        for product in &view {
            assert!(product.title.to_lowercase().contains("red"));
        }
        let expected: Vec<&str> = data
            .iter()
            .filter(|p| p.title.to_lowercase().contains("red"))
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles(&view), expected);
    }

    #[test]
    fn filter_state_reports_activity() {
        assert!(!FilterState::default().is_active());
        assert!(!FilterState::new("  ").is_active());
        assert_eq!(FilterState::new(" Hat ").needle().as_deref(), Some("hat"));
        assert_eq!(FilterState::new(" Hat ").keyword(), " Hat ");
    }
}
