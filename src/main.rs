//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zshelf library and the Zellij plugin
//! system. It translates Zellij events into library events and library actions
//! into Zellij API calls.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, web request
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   ShelfWorker    │   │  ← Listing decode
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permission**: Request `WebAccess`; the grant triggers the fetch
//! 3. **Fetch**: `WebRequestResult` → `Event::FetchCompleted`
//! 4. **Decode**: Body posted to the worker; its reply → `Event::WorkerResponse`
//! 5. **Update/Render**: Key events drive the library; render delegates to it
//!
//! # Keybindings
//!
//! In normal mode:
//! - `/`: Edit keyword
//! - `Esc`: Clear keyword
//! - `j`/`Down`, `k`/`Up`: Move the row cursor, scrolling tall pages
//! - `h`/`Left`, `l`/`Right`: Move column focus
//! - `a`/`d`: Sort focused column ascending/descending
//! - `n`/`PageDown`, `p`/`PageUp`: Next/previous page
//! - `+`/`-`: Larger/smaller page size
//! - `1`-`9`: Pick a page size by position
//! - `q`: Close plugin
//!
//! In search mode:
//! - Printable keys: Type into the keyword draft
//! - `Enter`: Apply keyword
//! - `Esc`: Discard draft

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zshelf::catalog::SortDirection;
use zshelf::worker::{ShelfWorker, WorkerMessage, WorkerResponse};
use zshelf::{handle_event, Action, Config, Event, InputMode, ShelfError};

#[cfg(target_arch = "wasm32")]
register_plugin!(State);
#[cfg(target_arch = "wasm32")]
register_worker!(ShelfWorker, zshelf_worker, ZSHELF_WORKER);

/// Native builds only exist so the library tests link; the plugin itself
/// runs inside Zellij.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let _ = (State::default(), ShelfWorker::default());
    eprintln!("zshelf is a Zellij plugin; build it for wasm32-wasip1 and load it in Zellij");
}

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zshelf::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zshelf::initialize(&Config::default()),
            worker_name: "zshelf".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state and tracing, requests
    /// `WebAccess` and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zshelf::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, page_sizes = ?config.page_sizes, "parsed configuration");
        self.app = zshelf::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event` and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                Event::FetchCompleted { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => match permissions {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => {
                    tracing::warn!("web access denied - the catalog cannot be loaded");
                    Event::PermissionsDenied
                }
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zshelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return None;
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Enter => Event::CommitSearch,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Esc => Event::ClearFilter,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Left | BareKey::Char('h') => Event::FocusPrevColumn,
                BareKey::Right | BareKey::Char('l') => Event::FocusNextColumn,
                BareKey::Char('a') => Event::SortFocused(SortDirection::Ascending),
                BareKey::Char('d') => Event::SortFocused(SortDirection::Descending),
                BareKey::Down | BareKey::Char('j') => Event::CursorDown,
                BareKey::Up | BareKey::Char('k') => Event::CursorUp,
                BareKey::PageDown | BareKey::Char('n') => Event::NextPage,
                BareKey::PageUp | BareKey::Char('p') => Event::PrevPage,
                BareKey::Char('+' | '=') => Event::PageSizeUp,
                BareKey::Char('-') => Event::PageSizeDown,
                BareKey::Char(c @ '1'..='9') => {
                    let index = c.to_digit(10)? as usize - 1;
                    Event::SetPageSize(*self.app.page_sizes.get(index)?)
                }
                _ => return None,
            }),
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    Some(Event::WorkerResponse(WorkerResponse::Error {
                        message: ShelfError::Worker(format!("malformed worker response: {e}")).to_string(),
                    }))
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread as JSON.
    ///
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates a library action into Zellij API calls.
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchProducts { url } => {
                tracing::info!(url = %url, "fetching product listing");
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());
                web_request(url, HttpVerb::Get, headers, vec![], BTreeMap::new());
            }
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }
}
