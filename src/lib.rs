//! zshelf: a Zellij plugin for browsing a remote product catalog.
//!
//! The plugin fetches a product listing once, then lets the user:
//! - Filter it by a keyword matched against product titles
//! - Sort it by title or price, ascending or descending
//! - Page through it with a configurable page size
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, load lifecycle                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - DataStore   │   │ - JSON decode │
//! │ - Theming     │   │ - Filter/Sort │   │ - IPC bridge  │
//! │ - Components  │   │ - Paginator   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Product model (domain/product)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Dataset, view, filtering, sorting and paging
//! - [`domain`]: Core domain types (Product, errors)
//! - [`infrastructure`]: Sandbox path utilities
//! - [`worker`]: Background worker decoding the listing
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zshelf.wasm" {
//!         endpoint "https://api.escuelajs.co/api/v1/products"
//!         page_sizes "10,20,50"
//!         page_size "20"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Load Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    request `WebAccess`
//! 2. **Permission Granted**: issue the single GET to `endpoint`
//! 3. **Response**: a 2xx body is posted to the worker; anything else ends in
//!    the failure screen
//! 4. **Worker**: decodes the JSON listing and posts the products back
//! 5. **Browsing**: keyword, sort and paging events mutate `AppState`; each
//!    redraw renders the view model
//!
//! # Example
//!
//! ```rust
//! use zshelf::{handle_event, initialize, Config, Event, Product};
//! use zshelf::worker::WorkerResponse;
//!
//! let mut state = initialize(&Config::default());
//!
//! let products = vec![Product::new(1, "Apple", 10.0), Product::new(2, "Banana", 5.0)];
//! handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::ProductsDecoded { products }))?;
//!
//! for event in [Event::SearchMode, Event::Char('a'), Event::Char('n'), Event::CommitSearch] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.store.view().len(), 1);
//! # Ok::<(), zshelf::ShelfError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Column, Event, InputMode, LoadStatus};
pub use domain::{Product, Result, ShelfError};
pub use ui::Theme;

use catalog::DEFAULT_PAGE_SIZE;
use std::collections::BTreeMap;

/// Listing endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.escuelajs.co/api/v1/products";

/// Page size choices used when none are configured.
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zshelf.wasm" {
///     endpoint "https://shop.example.com/api/products"
///     page_sizes "5,10,25"
///     page_size "10"
///     theme "catppuccin-latte"
///     theme_file "~/themes/zshelf.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Product listing URL, fetched once with GET.
    pub endpoint: String,

    /// Initial page size. Always one of `page_sizes`.
    pub page_size: usize,

    /// Page size choices, ascending, no duplicates, never empty.
    pub page_sizes: Vec<usize>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` already expanded.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn` or `error`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Invalid values fall back to defaults:
    ///
    /// - `page_sizes`: comma-separated; zero and non-numeric entries are
    ///   dropped, the rest sorted and deduplicated
    /// - `page_size`: falls back to 10 if offered, else the smallest choice;
    ///   a valid size that is not among the choices is added to them
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_sizes".to_string(), "50, 5,x,5".to_string());
    /// map.insert("page_size".to_string(), "15".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_sizes, vec![5, 15, 50]);
    /// assert_eq!(config.page_size, 15);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let mut page_sizes = config
            .get("page_sizes")
            .map(|s| parse_page_sizes(s))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PAGE_SIZES.to_vec());

        let page_size = match config.get("page_size").map(|s| s.trim().parse::<usize>()) {
            Some(Ok(size)) if size > 0 => size,
            other => {
                if other.is_some() {
                    tracing::debug!(value = ?config.get("page_size"), "invalid page_size, using default");
                }
                if page_sizes.contains(&DEFAULT_PAGE_SIZE) {
                    DEFAULT_PAGE_SIZE
                } else {
                    page_sizes[0]
                }
            }
        };
        if let Err(pos) = page_sizes.binary_search(&page_size) {
            page_sizes.insert(pos, page_size);
        }

        Self {
            endpoint,
            page_size,
            page_sizes,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|p| infrastructure::expand_tilde(p)),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_page_sizes(raw: &str) -> Vec<usize> {
    let mut sizes: Vec<usize> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<usize>() {
            Ok(0) | Err(_) => {
                let error = ShelfError::Config(format!("invalid page size {s:?}"));
                tracing::debug!(error = %error, "ignoring page size entry");
                None
            }
            Ok(n) => Some(n),
        })
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

/// Builds the initial [`AppState`] from configuration.
///
/// The theme comes from `theme_file`, else `theme_name`, else the default;
/// a theme that fails to load falls back to the default with a debug log.
/// The state starts in [`LoadStatus::Loading`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing zshelf plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}
