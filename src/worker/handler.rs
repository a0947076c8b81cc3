//! Worker thread implementation for decoding product listings.
//!
//! Listing bodies can be large, so JSON decoding runs on a Zellij worker
//! thread instead of inside the plugin's `update` callback. The worker keeps
//! no state between messages.

use crate::domain::decode_listing;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Stateless listing decoder running on the worker thread.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShelfWorker;

impl ShelfWorker {
    /// Decodes a listing body, mapping failures to [`WorkerResponse::Error`].
    fn handle_decode_products(body: &str) -> WorkerResponse {
        match decode_listing(body) {
            Ok(products) => {
                tracing::debug!(product_count = products.len(), "listing decoded");
                WorkerResponse::ProductsDecoded { products }
            }
            Err(e) => {
                tracing::warn!(error = %e, body_len = body.len(), "listing decode failed");
                WorkerResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Re-attaches the plugin thread's trace context so spans created here
    /// are children of the span that posted the message.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes a worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message");
        let _guard = span.entered();

        match message {
            WorkerMessage::DecodeProducts { body, .. } => Self::handle_decode_products(&body),
        }
    }
}

/// Initializes tracing for the worker thread with the default configuration.
fn init_worker_tracing() {
    crate::observability::init_tracing(&crate::Config::default());
}

static WORKER_TRACING_INITIALIZED: std::sync::Once = std::sync::Once::new();

impl ZellijWorker<'_> for ShelfWorker {
    /// Decodes the JSON `WorkerMessage` payload, handles it and posts the
    /// serialized `WorkerResponse` back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        WORKER_TRACING_INITIALIZED.call_once(init_worker_tracing);

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed worker message: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_listing() {
        let mut worker = ShelfWorker;
        let response = worker.handle_message(WorkerMessage::decode_products(
            r#"[{"id": 1, "title": "Lamp", "price": 20}]"#.to_string(),
        ));
        match response {
            WorkerResponse::ProductsDecoded { products } => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].title, "Lamp");
            }
            WorkerResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn malformed_body_becomes_an_error_response() {
        let mut worker = ShelfWorker;
        let response = worker.handle_message(WorkerMessage::decode_products("<html>".to_string()));
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }

    #[test]
    fn invalid_trace_context_is_ignored() {
        let message = WorkerMessage::DecodeProducts {
            body: "[]".to_string(),
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "not-hex".to_string(),
                parent_span_id: "nope".to_string(),
            }),
        };
        let mut worker = ShelfWorker;
        assert_eq!(
            worker.handle_message(message),
            WorkerResponse::ProductsDecoded { products: vec![] }
        );
    }
}
