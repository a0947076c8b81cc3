//! File-based OpenTelemetry span exporter and tracer provider.
//!
//! Zellij plugins have no network path for telemetry, so spans are written as
//! OTLP JSON documents, one per line, to a rotating file in the data
//! directory.

use super::file_writer::FileWriter;
use super::otlp::TracesDocument;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Instrumentation scope name written into every document.
pub const SCOPE_NAME: &str = "zshelf";

/// Writes each exported batch as one OTLP JSON line.
#[derive(Debug)]
pub struct FileSpanExporter {
    writer: FileWriter,
    resource: Resource,
    is_shutdown: bool,
}

impl FileSpanExporter {
    pub const fn new(writer: FileWriter, resource: Resource) -> Self {
        Self {
            writer,
            resource,
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        if self.is_shutdown {
            return Err(TraceError::from("exporter is shut down"));
        }

        let document = TracesDocument::from_batch(&self.resource, SCOPE_NAME, batch);
        let line = serde_json::to_string(&document).map_err(|e| TraceError::from(e.to_string()))?;
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, res: &Resource) {
        self.resource = res.clone();
    }
}

/// Builds a tracer provider that exports every finished span immediately to
/// `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(FileWriter::new(file_path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
