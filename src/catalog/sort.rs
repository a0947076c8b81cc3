//! Column sorting of a view.
//!
//! Sorting is always stable and in place: entries the comparator considers
//! equal keep their current relative order, so consecutive sorts compose the
//! same way the listing did when sorting its displayed rows directly.

use crate::domain::Product;
use std::cmp::Reverse;
use std::fmt;
use std::rc::Rc;

/// Column a view can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// No ordering beyond the filter's dataset order.
    #[default]
    None,
    Price,
    Title,
}

impl SortKey {
    /// Maps a table column name to a sort key.
    ///
    /// Only `price` and `title` are sortable. Any other column maps to
    /// [`SortKey::None`], which leaves the view untouched rather than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use zshelf::catalog::SortKey;
    ///
    /// assert_eq!(SortKey::from_column("Price"), SortKey::Price);
    /// assert_eq!(SortKey::from_column("category"), SortKey::None);
    /// ```
    #[must_use]
    pub fn from_column(column: &str) -> Self {
        match column.trim().to_ascii_lowercase().as_str() {
            "price" => Self::Price,
            "title" => Self::Title,
            other => {
                tracing::debug!(column = %other, "column is not sortable, ignoring");
                Self::None
            }
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow shown next to the sorted column header.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Ascending => '▲',
            Self::Descending => '▼',
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

/// Active sort selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.key, SortKey::None)
    }
}

/// Reorders `view` in place by `key` and `direction`.
///
/// [`SortKey::None`] is a no-op. Descending order reverses the comparison, not
/// the result, so ties still keep their prior order. Titles are lowercased
/// once per entry, not once per comparison.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use zshelf::catalog::{apply_sort, SortDirection, SortKey};
/// use zshelf::Product;
///
/// let mut view = vec![
///     Rc::new(Product::new(1, "B", 3.0)),
///     Rc::new(Product::new(2, "A", 1.0)),
///     Rc::new(Product::new(3, "C", 2.0)),
/// ];
/// apply_sort(&mut view, SortKey::Price, SortDirection::Ascending);
/// let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
/// assert_eq!(titles, ["A", "C", "B"]);
/// ```
pub fn apply_sort(view: &mut [Rc<Product>], key: SortKey, direction: SortDirection) {
    if key == SortKey::None {
        return;
    }

    let _span = tracing::debug_span!("apply_sort",
        view_len = view.len(),
        key = ?key,
        direction = %direction
    ).entered();

    match (key, direction) {
        (SortKey::None, _) => {}
        (SortKey::Price, SortDirection::Ascending) => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
        (SortKey::Price, SortDirection::Descending) => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
        (SortKey::Title, SortDirection::Ascending) => view.sort_by_cached_key(|p| p.title.to_lowercase()),
        (SortKey::Title, SortDirection::Descending) => {
            view.sort_by_cached_key(|p| Reverse(p.title.to_lowercase()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(items: &[(&str, f64)]) -> Vec<Rc<Product>> {
        items
            .iter()
            .enumerate()
            .map(|(i, (t, p))| Rc::new(Product::new(i as u64, *t, *p)))
            .collect()
    }

    fn ids(view: &[Rc<Product>]) -> Vec<u64> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn scenario_b_price_ascending() {
        let mut v = view(&[("B", 3.0), ("A", 1.0), ("C", 2.0)]);
        apply_sort(&mut v, SortKey::Price, SortDirection::Ascending);
        let got: Vec<(&str, f64)> = v.iter().map(|p| (p.title.as_str(), p.price)).collect();
        assert_eq!(got, [("A", 1.0), ("C", 2.0), ("B", 3.0)]);
    }

    #[test]
    fn price_descending_is_non_increasing() {
        let mut v = view(&[("a", 4.0), ("b", 10.0), ("c", 0.0), ("d", 7.5), ("e", 10.0)]);
        apply_sort(&mut v, SortKey::Price, SortDirection::Descending);
        assert!(v.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn title_sort_ignores_case() {
        let mut v = view(&[("banana", 1.0), ("Apple", 1.0), ("cherry", 1.0), ("apricot", 1.0)]);
        apply_sort(&mut v, SortKey::Title, SortDirection::Ascending);
        let titles: Vec<&str> = v.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "apricot", "banana", "cherry"]);

        apply_sort(&mut v, SortKey::Title, SortDirection::Descending);
        assert!(v
            .windows(2)
            .all(|w| w[0].title.to_lowercase() >= w[1].title.to_lowercase()));
    }

    #[test]
    fn equal_titles_keep_prior_order_in_both_directions() {
        let mut v = view(&[("Mug", 1.0), ("mug", 2.0), ("Bowl", 3.0), ("MUG", 4.0)]);
        apply_sort(&mut v, SortKey::Title, SortDirection::Ascending);
        assert_eq!(ids(&v), [2, 0, 1, 3]);

        let mut v = view(&[("Mug", 1.0), ("mug", 2.0), ("Bowl", 3.0), ("MUG", 4.0)]);
        apply_sort(&mut v, SortKey::Title, SortDirection::Descending);
        assert_eq!(ids(&v), [0, 1, 3, 2]);
    }

    #[test]
    fn large_mixed_case_view_sorts_stably() {
        let titles = ["Lamp", "lamp", "DESK", "chair", "LAMP", "desk", "Chair"];
        let items: Vec<(&str, f64)> = (0..210).map(|i| (titles[i % titles.len()], i as f64)).collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut v = view(&items);
            apply_sort(&mut v, SortKey::Title, direction);
            for pair in v.windows(2) {
                let (a, b) = (pair[0].title.to_lowercase(), pair[1].title.to_lowercase());
                match direction {
                    SortDirection::Ascending => assert!(a <= b),
                    SortDirection::Descending => assert!(a >= b),
                }
                if a == b {
                    assert!(pair[0].id < pair[1].id, "tie reordered: {direction}");
                }
            }
        }
    }

    #[test]
    fn sorts_compose_through_stability() {
        let mut v = view(&[("b", 2.0), ("a", 2.0), ("c", 1.0)]);
        apply_sort(&mut v, SortKey::Title, SortDirection::Ascending);
        apply_sort(&mut v, SortKey::Price, SortDirection::Ascending);
        let titles: Vec<&str> = v.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[test]
    fn none_key_leaves_view_untouched() {
        let mut v = view(&[("z", 9.0), ("a", 1.0)]);
        apply_sort(&mut v, SortKey::None, SortDirection::Descending);
        assert_eq!(ids(&v), [0, 1]);
    }

    #[test]
    fn unsortable_column_is_a_silent_no_op() {
        let key = SortKey::from_column("description");
        assert_eq!(key, SortKey::None);

        let mut v = view(&[("z", 9.0), ("a", 1.0)]);
        apply_sort(&mut v, key, SortDirection::Ascending);
        assert_eq!(ids(&v), [0, 1]);
    }

    #[test]
    fn column_names_are_matched_loosely() {
        assert_eq!(SortKey::from_column(" TITLE "), SortKey::Title);
        assert_eq!(SortKey::from_column("price"), SortKey::Price);
        assert_eq!(SortKey::from_column(""), SortKey::None);
    }
}
