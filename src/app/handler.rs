//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes. It returns whether
//! the frame must be redrawn, plus the side effects the plugin shim should run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `PermissionsGranted`, `PermissionsDenied`, `FetchCompleted`,
//!   `WorkerResponse`
//! - **Keyword**: `SearchMode`, `Char`, `Backspace`, `CommitSearch`,
//!   `ExitSearch`, `ClearFilter`
//! - **Sorting**: `FocusNextColumn`, `FocusPrevColumn`, `SortFocused`, `Sort`
//! - **Paging**: `NextPage`, `PrevPage`, `PageSizeUp`, `PageSizeDown`,
//!   `SetPageSize`, `CursorDown`, `CursorUp`
//!
//! Catalog events are ignored until the dataset has loaded.
//!
//! # Example
//!
//! ```rust
//! use zshelf::{handle_event, Action, AppState, Config, Event, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions[0], Action::FetchProducts { .. }));
//! # Ok::<(), zshelf::ShelfError>(())
//! ```

use crate::app::{Action, AppState};
use crate::catalog::SortDirection;
use crate::domain::error::{Result, ShelfError};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, Zellij or the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Hides the plugin pane.
    CloseFocus,

    /// `WebAccess` was granted; the fetch can start.
    PermissionsGranted,
    /// `WebAccess` was refused; the listing can never load.
    PermissionsDenied,

    /// The listing request finished.
    FetchCompleted {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Enters search mode.
    SearchMode,
    /// Appends a character to the keyword draft.
    Char(char),
    /// Removes the last character from the keyword draft.
    Backspace,
    /// Applies the draft as the filter keyword.
    CommitSearch,
    /// Leaves search mode without applying the draft.
    ExitSearch,
    /// Removes the committed keyword.
    ClearFilter,

    /// Moves the header focus one column right.
    FocusNextColumn,
    /// Moves the header focus one column left.
    FocusPrevColumn,
    /// Sorts by the focused column.
    SortFocused(SortDirection),
    /// Sorts by a column given by name.
    Sort {
        column: String,
        direction: SortDirection,
    },

    NextPage,
    PrevPage,
    /// Next larger configured page size.
    PageSizeUp,
    /// Next smaller configured page size.
    PageSizeDown,
    /// Switches to an explicit page size.
    SetPageSize(usize),
    /// Moves the row cursor within the page, scrolling tall pages.
    CursorDown,
    CursorUp,
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; fetch and decode failures become
/// [`LoadStatus::Failed`](crate::app::modes::LoadStatus::Failed) rather than
/// errors so that they stay visible.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsGranted => {
            if !state.is_loading() {
                return Ok((false, vec![]));
            }
            tracing::debug!(url = %state.endpoint, "web access granted, fetching products");
            Ok((false, vec![Action::FetchProducts {
                url: state.endpoint.clone(),
            }]))
        }
        Event::PermissionsDenied => {
            if !state.is_loading() {
                return Ok((false, vec![]));
            }
            state.fail(ShelfError::Fetch("web access permission denied".to_string()).to_string());
            Ok((true, vec![]))
        }
        Event::FetchCompleted { status, body } => {
            if !state.is_loading() {
                tracing::debug!(status, "ignoring fetch result, not loading");
                return Ok((false, vec![]));
            }
            tracing::debug!(status, body_len = body.len(), "fetch completed");

            if !(200..300).contains(status) {
                state.fail(ShelfError::Fetch(format!("upstream returned status {status}")).to_string());
                return Ok((true, vec![]));
            }

            match std::str::from_utf8(body).map(str::to_owned) {
                Ok(text) => Ok((false, vec![Action::PostToWorker(WorkerMessage::decode_products(text))])),
                Err(e) => {
                    state.fail(ShelfError::Fetch(format!("response body is not UTF-8: {e}")).to_string());
                    Ok((true, vec![]))
                }
            }
        }
        Event::WorkerResponse(response) => {
            if !state.is_loading() {
                tracing::debug!("ignoring worker response, not loading");
                return Ok((false, vec![]));
            }
            match response {
                WorkerResponse::ProductsDecoded { products } => {
                    tracing::info!(count = products.len(), "products loaded");
                    state.load_products(products.clone());
                }
                WorkerResponse::Error { message } => {
                    tracing::error!("Worker error: {}", message);
                    state.fail(message.clone());
                }
            }
            Ok((true, vec![]))
        }
        _ if !state.is_ready() => Ok((false, vec![])),
        Event::SearchMode => {
            state.enter_search();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != super::modes::InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_draft.push(*c);
            tracing::trace!(draft = %state.search_draft, char = %c, "keyword draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != super::modes::InputMode::Search {
                return Ok((false, vec![]));
            }
            Ok((state.search_draft.pop().is_some(), vec![]))
        }
        Event::CommitSearch => {
            if state.input_mode != super::modes::InputMode::Search {
                return Ok((false, vec![]));
            }
            state.commit_search();
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.cancel_search();
            Ok((true, vec![]))
        }
        Event::ClearFilter => Ok((state.clear_filter(), vec![])),
        Event::FocusNextColumn => {
            state.focus_next_column();
            Ok((true, vec![]))
        }
        Event::FocusPrevColumn => {
            state.focus_prev_column();
            Ok((true, vec![]))
        }
        Event::SortFocused(direction) => {
            state.sort_focused(*direction);
            Ok((true, vec![]))
        }
        Event::Sort { column, direction } => {
            state.sort_column(column, *direction);
            Ok((true, vec![]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PrevPage => Ok((state.prev_page(), vec![])),
        Event::CursorDown => Ok((state.cursor_down(), vec![])),
        Event::CursorUp => Ok((state.cursor_up(), vec![])),
        Event::PageSizeUp => Ok((state.page_size_up(), vec![])),
        Event::PageSizeDown => Ok((state.page_size_down(), vec![])),
        Event::SetPageSize(size) => Ok((state.set_page_size(*size), vec![])),
    }
}

/// Short event name for span fields; avoids logging whole response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::CloseFocus => "close_focus",
        Event::PermissionsGranted => "permissions_granted",
        Event::PermissionsDenied => "permissions_denied",
        Event::FetchCompleted { .. } => "fetch_completed",
        Event::WorkerResponse(_) => "worker_response",
        Event::SearchMode => "search_mode",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::CommitSearch => "commit_search",
        Event::ExitSearch => "exit_search",
        Event::ClearFilter => "clear_filter",
        Event::FocusNextColumn => "focus_next_column",
        Event::FocusPrevColumn => "focus_prev_column",
        Event::SortFocused(_) => "sort_focused",
        Event::Sort { .. } => "sort",
        Event::NextPage => "next_page",
        Event::PrevPage => "prev_page",
        Event::CursorDown => "cursor_down",
        Event::CursorUp => "cursor_up",
        Event::PageSizeUp => "page_size_up",
        Event::PageSizeDown => "page_size_down",
        Event::SetPageSize(_) => "set_page_size",
    }
}
