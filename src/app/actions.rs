//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; the library never calls Zellij itself.
//!
//! # Example
//!
//! ```rust
//! use zshelf::app::Action;
//!
//! let actions = vec![Action::FetchProducts {
//!     url: "https://api.escuelajs.co/api/v1/products".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the single GET request for the product listing.
    ///
    /// The response comes back as a `WebRequestResult` Zellij event.
    FetchProducts {
        /// Listing endpoint.
        url: String,
    },

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
