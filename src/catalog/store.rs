//! Dataset and derived view ownership.
//!
//! [`DataStore`] owns the fetched dataset and the view derived from it by the
//! current [`FilterState`] and [`SortState`]. Every mutation of either state
//! goes through the store so the view can never drift from them.

use super::filter::{apply_filter, FilterState};
use super::sort::{apply_sort, SortDirection, SortKey, SortState};
use crate::domain::Product;
use std::rc::Rc;

/// Full dataset plus its filtered and sorted view.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    dataset: Vec<Rc<Product>>,
    view: Vec<Rc<Product>>,
    filter: FilterState,
    sort: SortState,
}

impl DataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the dataset and resets the view to an unfiltered, unsorted
    /// copy of it. Filter and sort selections are cleared as well, so the new
    /// view agrees with them.
    pub fn load(&mut self, products: Vec<Product>) {
        let _span = tracing::debug_span!("datastore_load", count = products.len()).entered();

        self.dataset = products.into_iter().map(Rc::new).collect();
        self.view = self.dataset.clone();
        self.filter = FilterState::default();
        self.sort = SortState::default();

        tracing::debug!(dataset_len = self.dataset.len(), "dataset loaded");
    }

    /// Commits a new keyword: rebuilds the view from the dataset and
    /// re-applies the active sort to it.
    pub fn set_filter(&mut self, keyword: impl Into<String>) {
        self.filter = FilterState::new(keyword);
        self.view = apply_filter(&self.dataset, self.filter.keyword());
        apply_sort(&mut self.view, self.sort.key, self.sort.direction);

        tracing::debug!(
            keyword = %self.filter.keyword(),
            view_len = self.view.len(),
            sort_key = ?self.sort.key,
            "view rebuilt after filter change"
        );
    }

    /// Records a sort selection and reorders the current view in place.
    ///
    /// With [`SortKey::None`] the view keeps its present order; the next
    /// filter change will then produce plain dataset order.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = SortState::new(key, direction);
        apply_sort(&mut self.view, key, direction);
    }

    #[must_use]
    pub fn dataset(&self) -> &[Rc<Product>] {
        &self.dataset
    }

    #[must_use]
    pub fn view(&self) -> &[Rc<Product>] {
        &self.view
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}
