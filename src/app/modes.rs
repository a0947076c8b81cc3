//! Input mode, load status and column focus types.
//!
//! These enums control which keybindings are active, which screen is shown
//! and which table column the sort keys act on.
//!
//! # Example
//!
//! ```rust
//! use zshelf::app::modes::{Column, InputMode, LoadStatus};
//!
//! let mode = InputMode::Normal;
//! let status = LoadStatus::Loading;
//! assert_eq!(Column::Title.next(), Column::Price);
//! # let _ = (mode, status);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command mode.
    ///
    /// Available keybindings: / (search), j/k (row), h/l (column), a/d (sort),
    /// n/p (page), +/- (page size), q (quit).
    Normal,

    /// Editing the keyword draft.
    ///
    /// Characters go to the draft; Enter commits it as the filter, Esc drops it.
    Search,
}

/// Progress of the one-shot product fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Waiting for permission, the web response or the worker's decode.
    Loading,

    /// Dataset is loaded; the listing is interactive.
    Ready,

    /// The fetch failed. This state is terminal; there is no retry.
    Failed {
        /// Technical cause shown under the user-facing message.
        reason: String,
    },
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Price,
    Category,
    Description,
    Image,
}

impl Column {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Price,
        Self::Category,
        Self::Description,
        Self::Image,
    ];

    /// Column identifier, as passed to [`crate::catalog::SortKey::from_column`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Price => "price",
            Self::Category => "category",
            Self::Description => "description",
            Self::Image => "image",
        }
    }

    /// Header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Price => "PRICE",
            Self::Category => "CATEGORY",
            Self::Description => "DESCRIPTION",
            Self::Image => "IMAGE",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next column to the right, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next column to the left, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
