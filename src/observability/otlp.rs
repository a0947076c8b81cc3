//! OTLP JSON document model.
//!
//! Typed mirror of the subset of the OTLP/JSON trace encoding the exporter
//! writes: one [`TracesDocument`] per exported batch, with IDs as lowercase
//! hex, timestamps as decimal nanosecond strings and 64-bit integers as
//! strings.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Top-level document: `{"resourceSpans": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracesDocument {
    pub resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpans {
    pub resource: ResourceAttributes,
    pub scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceAttributes {
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeSpans {
    pub scope: Scope,
    pub spans: Vec<OtlpSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpSpan {
    pub trace_id: String,
    pub span_id: String,
    /// Empty for root spans.
    pub parent_span_id: String,
    pub name: String,
    pub kind: u8,
    pub start_time_unix_nano: String,
    pub end_time_unix_nano: String,
    pub attributes: Vec<Attribute>,
    pub events: Vec<OtlpEvent>,
    pub links: Vec<OtlpLink>,
    pub status: OtlpStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpEvent {
    pub time_unix_nano: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpLink {
    pub trace_id: String,
    pub span_id: String,
    pub attributes: Vec<Attribute>,
}

/// 0 = unset, 1 = ok, 2 = error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtlpStatus {
    pub code: u8,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: AttributeValue,
}

/// Serializes as a single-key object, e.g. `{"intValue": "42"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeValue {
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl From<&Value> for AttributeValue {
    /// Arrays have no typed counterpart here and fall back to their debug text.
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            Value::Array(_) => Self::StringValue(format!("{value:?}")),
        }
    }
}

impl From<&KeyValue> for Attribute {
    fn from(kv: &KeyValue) -> Self {
        Self {
            key: kv.key.to_string(),
            value: AttributeValue::from(&kv.value),
        }
    }
}

impl TracesDocument {
    /// Builds the document for one exported batch under a single scope.
    #[must_use]
    pub fn from_batch(resource: &Resource, scope: &str, batch: &[SpanData]) -> Self {
        let attributes = resource
            .iter()
            .map(|(k, v)| Attribute {
                key: k.to_string(),
                value: AttributeValue::from(v),
            })
            .collect();

        Self {
            resource_spans: vec![ResourceSpans {
                resource: ResourceAttributes { attributes },
                scope_spans: vec![ScopeSpans {
                    scope: Scope {
                        name: scope.to_string(),
                    },
                    spans: batch.iter().map(OtlpSpan::from).collect(),
                }],
            }],
        }
    }
}

impl From<&SpanData> for OtlpSpan {
    fn from(span: &SpanData) -> Self {
        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };

        Self {
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            kind: span_kind_code(&span.span_kind),
            start_time_unix_nano: unix_nanos(span.start_time),
            end_time_unix_nano: unix_nanos(span.end_time),
            attributes: attributes(&span.attributes),
            events: span.events.iter().map(OtlpEvent::from).collect(),
            links: span.links.iter().map(OtlpLink::from).collect(),
            status: OtlpStatus::from(&span.status),
        }
    }
}

impl From<&Event> for OtlpEvent {
    fn from(event: &Event) -> Self {
        Self {
            time_unix_nano: unix_nanos(event.timestamp),
            name: event.name.to_string(),
            attributes: attributes(&event.attributes),
        }
    }
}

impl From<&Link> for OtlpLink {
    fn from(link: &Link) -> Self {
        Self {
            trace_id: format!("{:032x}", link.span_context.trace_id()),
            span_id: format!("{:016x}", link.span_context.span_id()),
            attributes: attributes(&link.attributes),
        }
    }
}

impl From<&Status> for OtlpStatus {
    fn from(status: &Status) -> Self {
        match status {
            Status::Unset => Self { code: 0, message: String::new() },
            Status::Ok => Self { code: 1, message: String::new() },
            Status::Error { description } => Self {
                code: 2,
                message: description.to_string(),
            },
        }
    }
}

fn attributes(kvs: &[KeyValue]) -> Vec<Attribute> {
    kvs.iter().map(Attribute::from).collect()
}

const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch times give "0".
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn values_use_otlp_json_encoding() {
        let json = |v: Value| serde_json::to_value(AttributeValue::from(&v)).unwrap();
        assert_eq!(json(Value::I64(42)), serde_json::json!({"intValue": "42"}));
        assert_eq!(json(Value::Bool(true)), serde_json::json!({"boolValue": true}));
        assert_eq!(json("mug".into()), serde_json::json!({"stringValue": "mug"}));
    }

    #[test]
    fn empty_batch_keeps_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "zshelf")]);
        let doc = TracesDocument::from_batch(&resource, "zshelf", &[]);
        let json = serde_json::to_value(&doc).unwrap();

        let resource_spans = &json["resourceSpans"][0];
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "zshelf");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], serde_json::json!([]));
        assert!(resource_spans["resource"]["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "zshelf"));
    }

    #[test]
    fn error_status_keeps_description() {
        let status = OtlpStatus::from(&Status::error("decode failed"));
        assert_eq!(status.code, 2);
        assert_eq!(status.message, "decode failed");
    }

    #[test]
    fn timestamps_are_nanosecond_strings() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_micros(3)), "3000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }
}
