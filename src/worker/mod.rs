//! Background worker thread for decoding product listings.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ShelfWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
