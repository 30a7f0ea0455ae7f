use crate::mapping::{
    HttpRequestMapping, LogEntryMapping, MonitoredResourceMapping, OperationMapping, Severity,
};
use crate::proto::api::MonitoredResource;
use crate::proto::logging::r#type::HttpRequest;
use crate::proto::logging::v2::{log_entry::Payload, LogEntry, LogEntryOperation};
use crate::transform::common::{
    any_to_json, from_timestamp, json_to_any, json_to_struct, struct_to_json, to_timestamp,
};
use crate::Error;

impl From<MonitoredResource> for MonitoredResourceMapping {
    fn from(resource: MonitoredResource) -> Self {
        MonitoredResourceMapping {
            r#type: resource.r#type,
            labels: resource.labels,
        }
    }
}

/// Carries type and labels. Used for the request-level default resource; entry
/// level resources go through [`LogEntry::try_from`], which keeps only the type.
impl From<&MonitoredResourceMapping> for MonitoredResource {
    fn from(resource: &MonitoredResourceMapping) -> Self {
        MonitoredResource {
            r#type: resource.r#type.clone(),
            labels: resource.labels.clone(),
        }
    }
}

impl From<HttpRequest> for HttpRequestMapping {
    fn from(request: HttpRequest) -> Self {
        HttpRequestMapping {
            request_method: Some(request.request_method),
            request_url: Some(request.request_url),
            status: Some(request.status),
            referer: Some(request.referer),
            user_agent: Some(request.user_agent),
            cache_hit: Some(request.cache_hit),
            request_size: Some(request.request_size),
            response_size: Some(request.response_size),
            remote_ip: Some(request.remote_ip),
        }
    }
}

impl From<&HttpRequestMapping> for HttpRequest {
    fn from(info: &HttpRequestMapping) -> Self {
        let mut request = HttpRequest::default();
        if let Some(method) = &info.request_method {
            request.request_method = method.clone();
        }
        if let Some(url) = &info.request_url {
            request.request_url = url.clone();
        }
        if let Some(status) = info.status {
            request.status = status;
        }
        if let Some(referer) = &info.referer {
            request.referer = referer.clone();
        }
        if let Some(user_agent) = &info.user_agent {
            request.user_agent = user_agent.clone();
        }
        if let Some(cache_hit) = info.cache_hit {
            request.cache_hit = cache_hit;
        }
        if let Some(size) = info.request_size {
            request.request_size = size;
        }
        if let Some(size) = info.response_size {
            request.response_size = size;
        }
        if let Some(remote_ip) = &info.remote_ip {
            request.remote_ip = remote_ip.clone();
        }
        request
    }
}

impl From<LogEntryOperation> for OperationMapping {
    fn from(operation: LogEntryOperation) -> Self {
        OperationMapping {
            producer: Some(operation.producer),
            id: Some(operation.id),
            first: Some(operation.first),
            last: Some(operation.last),
        }
    }
}

impl TryFrom<&OperationMapping> for LogEntryOperation {
    type Error = Error;

    fn try_from(info: &OperationMapping) -> Result<Self, Self::Error> {
        let producer = info
            .producer
            .clone()
            .ok_or(Error::MissingField("operation.producer"))?;
        let id = info.id.clone().ok_or(Error::MissingField("operation.id"))?;

        Ok(LogEntryOperation {
            id,
            producer,
            first: info.first.unwrap_or_default(),
            last: info.last.unwrap_or_default(),
        })
    }
}

/// Every scalar key is always present in the result. `http_request` and
/// `operation` appear only when the message carries a non-default value.
impl From<LogEntry> for LogEntryMapping {
    fn from(entry: LogEntry) -> Self {
        let (text_payload, json_payload, proto_payload) = match entry.payload {
            Some(Payload::TextPayload(text)) => (text, Default::default(), None),
            Some(Payload::JsonPayload(object)) => (String::new(), struct_to_json(object), None),
            Some(Payload::ProtoPayload(any)) => (String::new(), Default::default(), Some(any)),
            None => (String::new(), Default::default(), None),
        };

        LogEntryMapping {
            log_name: Some(entry.log_name),
            resource: Some(entry.resource.unwrap_or_default().into()),
            severity: Some(Severity::Value(entry.severity)),
            insert_id: Some(entry.insert_id),
            timestamp: Some(from_timestamp(entry.timestamp.as_ref())),
            labels: Some(entry.labels),
            text_payload: Some(text_payload),
            json_payload: Some(json_payload),
            proto_payload: Some(any_to_json(proto_payload)),
            http_request: entry
                .http_request
                .filter(|request| *request != HttpRequest::default())
                .map(Into::into),
            operation: entry
                .operation
                .filter(|operation| *operation != LogEntryOperation::default())
                .map(Into::into),
        }
    }
}

/// Only keys present in the mapping touch the message.
///
/// The three payloads share a oneof on the wire. They are applied in the order
/// text, json, proto; empty json and proto payloads are skipped, so the last
/// non-empty payload wins. A converted message always carries `text_payload`,
/// so an entry listed with an empty json payload is written back as empty text.
impl TryFrom<&LogEntryMapping> for LogEntry {
    type Error = Error;

    fn try_from(mapping: &LogEntryMapping) -> Result<Self, Self::Error> {
        let mut entry = LogEntry::default();

        if let Some(log_name) = &mapping.log_name {
            entry.log_name = log_name.clone();
        }
        if let Some(insert_id) = &mapping.insert_id {
            entry.insert_id = insert_id.clone();
        }
        if let Some(text) = &mapping.text_payload {
            entry.payload = Some(Payload::TextPayload(text.clone()));
        }

        if let Some(resource) = &mapping.resource {
            entry.resource = Some(MonitoredResource {
                r#type: resource.r#type.clone(),
                ..Default::default()
            });
        }

        if let Some(severity) = &mapping.severity {
            entry.severity = severity.resolve()?;
        }

        if let Some(timestamp) = &mapping.timestamp {
            entry.timestamp = Some(to_timestamp(timestamp));
        }

        if let Some(labels) = &mapping.labels {
            entry
                .labels
                .extend(labels.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        if let Some(object) = mapping.json_payload.as_ref().filter(|o| !o.is_empty()) {
            entry.payload = Some(Payload::JsonPayload(json_to_struct(object)));
        }

        if let Some(payload) = &mapping.proto_payload {
            if let Some(any) = json_to_any(payload)? {
                entry.payload = Some(Payload::ProtoPayload(any));
            }
        }

        if let Some(request) = &mapping.http_request {
            entry.http_request = Some(request.into());
        }

        if let Some(operation) = &mapping.operation {
            entry.operation = Some(operation.try_into()?);
        }

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::logging::r#type::LogSeverity;
    use chrono::DateTime;
    use serde_json::json;
    use std::collections::HashMap;

    const SCALAR_KEYS: [&str; 9] = [
        "log_name",
        "resource",
        "severity",
        "insert_id",
        "timestamp",
        "labels",
        "text_payload",
        "json_payload",
        "proto_payload",
    ];

    fn keys(mapping: &LogEntryMapping) -> Vec<String> {
        let value = serde_json::to_value(mapping).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn sorted(keys: &[&str]) -> Vec<String> {
        let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        keys.sort();
        keys
    }

    #[test]
    fn default_message_yields_scalar_keys_only() {
        let mapping = LogEntryMapping::from(LogEntry::default());

        assert_eq!(keys(&mapping), sorted(&SCALAR_KEYS));
        assert_eq!(mapping.log_name.as_deref(), Some(""));
        assert_eq!(mapping.severity, Some(Severity::Value(0)));
        assert_eq!(mapping.text_payload.as_deref(), Some(""));
        assert_eq!(mapping.json_payload, Some(Default::default()));
        assert_eq!(mapping.proto_payload, Some(json!({})));
        assert_eq!(mapping.resource, Some(MonitoredResourceMapping::default()));
        assert!(mapping.http_request.is_none());
        assert!(mapping.operation.is_none());
    }

    #[test]
    fn default_sub_messages_are_omitted() {
        let entry = LogEntry {
            http_request: Some(HttpRequest::default()),
            operation: Some(LogEntryOperation::default()),
            ..Default::default()
        };
        let mapping = LogEntryMapping::from(entry);
        assert!(mapping.http_request.is_none());
        assert!(mapping.operation.is_none());
    }

    #[test]
    fn populated_message_to_mapping() {
        let entry = LogEntry {
            log_name: "projects/p1/logs/app".into(),
            resource: Some(MonitoredResource {
                r#type: "gce_instance".into(),
                labels: HashMap::from([("zone".into(), "us-central1-a".into())]),
            }),
            severity: LogSeverity::Warning as i32,
            insert_id: "id-1".into(),
            timestamp: Some(prost_types::Timestamp {
                seconds: 1_600_000_000,
                nanos: 500,
            }),
            labels: HashMap::from([("env".into(), "prod".into())]),
            http_request: Some(HttpRequest {
                request_method: "POST".into(),
                status: 503,
                latency: Some(prost_types::Duration {
                    seconds: 1,
                    nanos: 0,
                }),
                ..Default::default()
            }),
            operation: Some(LogEntryOperation {
                id: "op-1".into(),
                producer: "svc".into(),
                first: true,
                last: false,
            }),
            payload: Some(Payload::TextPayload("hello".into())),
            ..Default::default()
        };

        let mapping = LogEntryMapping::from(entry);

        let mut expected_keys = SCALAR_KEYS.to_vec();
        expected_keys.extend(["http_request", "operation"]);
        assert_eq!(keys(&mapping), sorted(&expected_keys));

        assert_eq!(
            mapping.resource,
            Some(MonitoredResourceMapping::new("gce_instance").with_label("zone", "us-central1-a"))
        );
        assert_eq!(mapping.severity, Some(Severity::Value(400)));
        assert_eq!(
            mapping.timestamp,
            DateTime::from_timestamp(1_600_000_000, 500)
        );
        assert_eq!(mapping.text_payload.as_deref(), Some("hello"));

        let request = mapping.http_request.unwrap();
        assert_eq!(request.request_method.as_deref(), Some("POST"));
        assert_eq!(request.status, Some(503));
        assert_eq!(request.cache_hit, Some(false));
        assert_eq!(request.remote_ip.as_deref(), Some(""));

        assert_eq!(
            mapping.operation,
            Some(OperationMapping {
                producer: Some("svc".into()),
                id: Some("op-1".into()),
                first: Some(true),
                last: Some(false),
            })
        );
    }

    #[test]
    fn json_and_proto_payloads_to_mapping() {
        let json_entry = LogEntry {
            payload: Some(Payload::JsonPayload(json_to_struct(
                json!({"message": "hi"}).as_object().unwrap(),
            ))),
            ..Default::default()
        };
        let mapping = LogEntryMapping::from(json_entry);
        assert_eq!(mapping.json_payload.unwrap()["message"], json!("hi"));
        assert_eq!(mapping.text_payload.as_deref(), Some(""));

        let proto_entry = LogEntry {
            payload: Some(Payload::ProtoPayload(prost_types::Any {
                type_url: "type.googleapis.com/google.cloud.audit.AuditLog".into(),
                value: vec![0x0a, 0x00],
            })),
            ..Default::default()
        };
        let mapping = LogEntryMapping::from(proto_entry);
        assert_eq!(
            mapping.proto_payload,
            Some(json!({
                "@type": "type.googleapis.com/google.cloud.audit.AuditLog",
                "value": "CgA=",
            }))
        );
    }

    #[test]
    fn empty_mapping_yields_default_message() {
        let entry = LogEntry::try_from(&LogEntryMapping::default()).unwrap();
        assert_eq!(entry, LogEntry::default());
    }

    #[test]
    fn labels_are_copied_only_when_present() {
        let entry = LogEntry::try_from(&LogEntryMapping::default()).unwrap();
        assert!(entry.labels.is_empty());

        let mapping = LogEntryMapping {
            labels: Some(HashMap::from([("a".into(), "b".into())])),
            ..Default::default()
        };
        let entry = LogEntry::try_from(&mapping).unwrap();
        assert_eq!(entry.labels, HashMap::from([("a".into(), "b".into())]));
    }

    #[test]
    fn severity_by_name_matches_severity_by_value() {
        let by_name = LogEntryMapping {
            severity: Some("ERROR".into()),
            ..Default::default()
        };
        let by_value = LogEntryMapping {
            severity: Some(LogSeverity::Error.into()),
            ..Default::default()
        };
        assert_eq!(
            LogEntry::try_from(&by_name).unwrap().severity,
            LogEntry::try_from(&by_value).unwrap().severity
        );
    }

    #[test]
    fn unknown_severity_name_fails_conversion() {
        let mapping = LogEntryMapping {
            severity: Some("VERBOSE".into()),
            ..Default::default()
        };
        assert!(matches!(
            LogEntry::try_from(&mapping),
            Err(Error::UnknownSeverity(name)) if name == "VERBOSE"
        ));
    }

    #[test]
    fn resource_keeps_only_type() {
        let mapping = LogEntryMapping {
            resource: Some(MonitoredResourceMapping::new("global").with_label("project_id", "p1")),
            ..Default::default()
        };
        let entry = LogEntry::try_from(&mapping).unwrap();
        let resource = entry.resource.unwrap();
        assert_eq!(resource.r#type, "global");
        assert!(resource.labels.is_empty());
    }

    #[test]
    fn timestamp_is_converted() {
        let time = DateTime::from_timestamp(1_650_000_000, 42).unwrap();
        let mapping = LogEntryMapping {
            timestamp: Some(time),
            ..Default::default()
        };
        let entry = LogEntry::try_from(&mapping).unwrap();
        assert_eq!(
            entry.timestamp,
            Some(prost_types::Timestamp {
                seconds: 1_650_000_000,
                nanos: 42,
            })
        );
    }

    #[test]
    fn leap_second_timestamp_stays_in_range() {
        let mapping: LogEntryMapping =
            serde_json::from_value(json!({"timestamp": "2016-12-31T23:59:60.5Z"})).unwrap();
        let entry = LogEntry::try_from(&mapping).unwrap();
        assert_eq!(
            entry.timestamp,
            Some(prost_types::Timestamp {
                seconds: 1_483_228_800,
                nanos: 500_000_000,
            })
        );
    }

    #[test]
    fn http_request_sets_only_present_fields() {
        let mapping = LogEntryMapping {
            http_request: Some(HttpRequestMapping {
                request_method: Some("GET".into()),
                status: Some(200),
                cache_hit: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let request = LogEntry::try_from(&mapping).unwrap().http_request.unwrap();
        assert_eq!(
            request,
            HttpRequest {
                request_method: "GET".into(),
                status: 200,
                cache_hit: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn operation_requires_producer_and_id() {
        let missing_producer = LogEntryMapping {
            operation: Some(OperationMapping {
                id: Some("op".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            LogEntry::try_from(&missing_producer),
            Err(Error::MissingField("operation.producer"))
        ));

        let missing_id = LogEntryMapping {
            operation: Some(OperationMapping {
                producer: Some("svc".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(
            LogEntry::try_from(&missing_id),
            Err(Error::MissingField("operation.id"))
        ));
    }

    #[test]
    fn operation_flags_are_optional() {
        let mapping = LogEntryMapping {
            operation: Some(OperationMapping {
                producer: Some("svc".into()),
                id: Some("op".into()),
                last: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let operation = LogEntry::try_from(&mapping).unwrap().operation.unwrap();
        assert_eq!(
            operation,
            LogEntryOperation {
                id: "op".into(),
                producer: "svc".into(),
                first: false,
                last: true,
            }
        );
    }

    #[test]
    fn last_non_empty_payload_wins() {
        let mapping = LogEntryMapping {
            text_payload: Some(String::new()),
            json_payload: Some(json!({"k": "v"}).as_object().unwrap().clone()),
            proto_payload: Some(json!({})),
            ..Default::default()
        };
        let entry = LogEntry::try_from(&mapping).unwrap();
        assert!(matches!(entry.payload, Some(Payload::JsonPayload(_))));

        let mapping = LogEntryMapping {
            text_payload: Some("plain".into()),
            json_payload: Some(Default::default()),
            ..Default::default()
        };
        let entry = LogEntry::try_from(&mapping).unwrap();
        assert_eq!(entry.payload, Some(Payload::TextPayload("plain".into())));

        let mapping = LogEntryMapping {
            json_payload: Some(json!({"k": "v"}).as_object().unwrap().clone()),
            proto_payload: Some(json!({"@type": "type.googleapis.com/x.Y", "value": ""})),
            ..Default::default()
        };
        let entry = LogEntry::try_from(&mapping).unwrap();
        assert_eq!(
            entry.payload,
            Some(Payload::ProtoPayload(prost_types::Any {
                type_url: "type.googleapis.com/x.Y".into(),
                value: vec![],
            }))
        );
    }

    #[test]
    fn invalid_proto_payload_fails_conversion() {
        let mapping = LogEntryMapping {
            proto_payload: Some(json!([1, 2, 3])),
            ..Default::default()
        };
        assert!(matches!(
            LogEntry::try_from(&mapping),
            Err(Error::ProtoPayload(_))
        ));
    }

    #[test]
    fn listed_entry_can_be_written_back() {
        let listed = LogEntry {
            log_name: "projects/p1/logs/app".into(),
            severity: LogSeverity::Info as i32,
            payload: Some(Payload::TextPayload("hello".into())),
            ..Default::default()
        };
        let mapping = LogEntryMapping::from(listed);
        let written = LogEntry::try_from(&mapping).unwrap();

        assert_eq!(written.log_name, "projects/p1/logs/app");
        assert_eq!(written.severity, LogSeverity::Info as i32);
        assert_eq!(written.payload, Some(Payload::TextPayload("hello".into())));
        assert_eq!(written.timestamp, Some(prost_types::Timestamp::default()));
    }

    #[test]
    fn listed_empty_json_payload_is_written_back_as_empty_text() {
        let listed = LogEntry {
            payload: Some(Payload::JsonPayload(prost_types::Struct::default())),
            ..Default::default()
        };
        let written = LogEntry::try_from(&LogEntryMapping::from(listed)).unwrap();
        assert_eq!(written.payload, Some(Payload::TextPayload(String::new())));
    }
}
