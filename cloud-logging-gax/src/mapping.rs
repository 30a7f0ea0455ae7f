//! Mapping form of log entries and sinks.
//!
//! These are the loosely keyed, serde-friendly shapes exchanged with callers.
//! Every optional field stands for a key that may or may not be present:
//! `None` means "absent", which is different from an empty or zero value.
//! Absent keys are skipped when serialized and unknown keys are ignored when
//! deserialized.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::proto::logging::r#type::LogSeverity;
use crate::Error;

/// A log entry in mapping form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntryMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<MonitoredResourceMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_payload: Option<Map<String, Value>>,
    /// A `google.protobuf.Any` as `{"@type": <url>, "value": <base64>}`.
    ///
    /// This is not the proto3 JSON mapping of `Any`, which inlines the fields
    /// of the packed message; that form is rejected with
    /// [`Error::ProtoPayload`](crate::Error::ProtoPayload).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proto_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_request: Option<HttpRequestMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<OperationMapping>,
}

/// The monitored resource descriptor attached to an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredResourceMapping {
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl MonitoredResourceMapping {
    pub fn new(r#type: impl Into<String>) -> Self {
        MonitoredResourceMapping {
            r#type: r#type.into(),
            labels: HashMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

/// Severity of an entry, either already resolved to its numeric value or
/// given by its symbolic name (`"ERROR"`, `"WARNING"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Severity {
    Value(i32),
    Name(String),
}

impl Severity {
    /// Resolves the severity to its numeric wire value.
    ///
    /// Names are looked up in the [`LogSeverity`] table and must match a
    /// variant name exactly. Numeric values are passed through unchecked.
    pub fn resolve(&self) -> Result<i32, Error> {
        match self {
            Severity::Value(value) => Ok(*value),
            Severity::Name(name) => LogSeverity::from_str_name(name)
                .map(|severity| severity as i32)
                .ok_or_else(|| Error::UnknownSeverity(name.clone())),
        }
    }
}

impl From<LogSeverity> for Severity {
    fn from(severity: LogSeverity) -> Self {
        Severity::Value(severity as i32)
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::Name(name.to_owned())
    }
}

/// HTTP request metadata. Only these nine keys are carried to the wire message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpRequestMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_hit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
}

/// Identifies the long-running operation an entry belongs to.
///
/// `producer` and `id` are required when converting to a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
}

/// A sink in mapping form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkMapping {
    pub name: String,
    pub destination: String,
    pub filter: String,
}
