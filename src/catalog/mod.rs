//! View-state core: dataset ownership, filtering, sorting and paging.
//!
//! Nothing in this module touches Zellij or the terminal; it is plain data
//! manipulation that the application layer drives.
//!
//! - `store`: [`DataStore`], the dataset and its derived view
//! - `filter`: keyword matching against product titles
//! - `sort`: stable column ordering
//! - `paginator`: fixed-size slicing and page bounds

pub mod filter;
pub mod paginator;
pub mod sort;
pub mod store;

pub use filter::{apply_filter, FilterState};
pub use paginator::{get_page, total_pages, Page, PageState, RangeLabel, DEFAULT_PAGE_SIZE};
pub use sort::{apply_sort, SortDirection, SortKey, SortState};
pub use store::DataStore;
