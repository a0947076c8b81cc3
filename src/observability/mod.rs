//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! - Traces go to `~/.local/share/zellij/zshelf/zshelf-otlp.json`
//! - The file rotates at 10 MiB, keeping three numbered backups
//! - Each line is one OTLP JSON document
//!
//! Level resolution: `RUST_LOG`, then the `trace_level` plugin option, then
//! `info`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `otlp`: OTLP JSON document model
//! - `file_writer`: Rotating file writer

mod exporter;
mod file_writer;
mod init;
mod otlp;

pub use init::init_tracing;
