//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread hands raw listing bodies to the worker, which decodes
//! them off the render loop. Every request carries the caller's trace context
//! so worker spans join the plugin's trace.

use crate::domain::Product;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Parent span ID as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry context is active, e.g. when
    /// tracing was never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Requests sent from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a listing response body into products.
    DecodeProducts {
        /// Response body, UTF-8.
        body: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds a `DecodeProducts` request tagged with the current trace context.
    #[must_use]
    pub fn decode_products(body: String) -> Self {
        Self::DecodeProducts {
            body,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Trace context attached to this message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::DecodeProducts { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The body decoded into a product listing.
    ProductsDecoded {
        /// Products in upstream order.
        products: Vec<Product>,
    },

    /// The worker could not fulfil the request.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
