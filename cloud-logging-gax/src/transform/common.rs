use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use prost_types::{value::Kind, ListValue, Struct, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::Error;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// chrono keeps a leap second as a subsecond value past one second; it is
/// carried into the next second, since `Timestamp.nanos` must stay below 1e9.
pub(crate) fn to_timestamp(time: &DateTime<Utc>) -> Timestamp {
    let nanos = time.timestamp_subsec_nanos();
    Timestamp {
        seconds: time.timestamp() + i64::from(nanos / NANOS_PER_SECOND),
        nanos: (nanos % NANOS_PER_SECOND) as i32,
    }
}

/// Out of range or negative-nanos timestamps fall back to the epoch.
pub(crate) fn from_timestamp(timestamp: Option<&Timestamp>) -> DateTime<Utc> {
    timestamp
        .and_then(|ts| {
            let nanos = u32::try_from(ts.nanos).ok()?;
            DateTime::from_timestamp(ts.seconds, nanos)
        })
        .unwrap_or_default()
}

pub(crate) fn json_to_struct(object: &Map<String, Value>) -> Struct {
    Struct {
        fields: object
            .iter()
            .map(|(key, value)| (key.clone(), json_to_value(value)))
            .collect(),
    }
}

fn json_to_value(value: &Value) -> prost_types::Value {
    let kind = match value {
        Value::Null => Kind::NullValue(0),
        Value::Bool(b) => Kind::BoolValue(*b),
        // google.protobuf.Value has a single double-typed number kind.
        Value::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or_default()),
        Value::String(s) => Kind::StringValue(s.clone()),
        Value::Array(items) => Kind::ListValue(ListValue {
            values: items.iter().map(json_to_value).collect(),
        }),
        Value::Object(object) => Kind::StructValue(json_to_struct(object)),
    };
    prost_types::Value { kind: Some(kind) }
}

pub(crate) fn struct_to_json(object: Struct) -> Map<String, Value> {
    object
        .fields
        .into_iter()
        .map(|(key, value)| (key, value_to_json(value)))
        .collect()
}

fn value_to_json(value: prost_types::Value) -> Value {
    match value.kind {
        None | Some(Kind::NullValue(_)) => Value::Null,
        Some(Kind::BoolValue(b)) => Value::Bool(b),
        Some(Kind::NumberValue(n)) => Number::from_f64(n).map_or(Value::Null, Value::Number),
        Some(Kind::StringValue(s)) => Value::String(s),
        Some(Kind::ListValue(list)) => {
            Value::Array(list.values.into_iter().map(value_to_json).collect())
        }
        Some(Kind::StructValue(object)) => Value::Object(struct_to_json(object)),
    }
}

/// JSON shape of a `google.protobuf.Any` whose payload type is not known
/// locally: the type URL plus the serialized message, base64 encoded.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnyJson {
    #[serde(rename = "@type", default)]
    type_url: String,
    #[serde(default)]
    value: String,
}

/// Parses a mapping-form proto payload into an `Any`.
///
/// The value goes through its JSON text so that anything serde can print is
/// accepted as input, and rejected only if it does not have the `Any` shape.
/// Returns `Ok(None)` for an empty object, which leaves the target untouched.
pub(crate) fn json_to_any(payload: &Value) -> Result<Option<prost_types::Any>, Error> {
    if payload.as_object().is_some_and(Map::is_empty) {
        return Ok(None);
    }
    let text = serde_json::to_string(payload).map_err(|e| Error::ProtoPayload(e.into()))?;
    let any: AnyJson = serde_json::from_str(&text).map_err(|e| Error::ProtoPayload(e.into()))?;
    let value = STANDARD
        .decode(any.value)
        .map_err(|e| Error::ProtoPayload(e.into()))?;
    Ok(Some(prost_types::Any {
        type_url: any.type_url,
        value,
    }))
}

pub(crate) fn any_to_json(any: Option<prost_types::Any>) -> Value {
    match any {
        Some(any) => serde_json::json!({
            "@type": any.type_url,
            "value": STANDARD.encode(any.value),
        }),
        None => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timestamp_keeps_subsecond_precision() {
        let time = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let ts = to_timestamp(&time);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 123_456_789);
        assert_eq!(from_timestamp(Some(&ts)), time);
    }

    #[test]
    fn leap_second_carries_into_next_second() {
        let leap = DateTime::parse_from_rfc3339("2016-12-31T23:59:60.5Z")
            .unwrap()
            .with_timezone(&Utc);
        let ts = to_timestamp(&leap);
        assert_eq!(ts.seconds, 1_483_228_800);
        assert_eq!(ts.nanos, 500_000_000);
    }

    #[test]
    fn missing_or_invalid_timestamp_is_epoch() {
        assert_eq!(from_timestamp(None), DateTime::<Utc>::default());
        let invalid = Timestamp {
            seconds: 10,
            nanos: -1,
        };
        assert_eq!(from_timestamp(Some(&invalid)), DateTime::<Utc>::default());
    }

    #[test]
    fn nested_json_survives_struct_conversion() {
        let object = json!({
            "message": "disk full",
            "count": 3.0,
            "ok": false,
            "tags": ["a", "b"],
            "details": {"device": "/dev/sda1", "missing": null},
        });
        let object = object.as_object().unwrap();
        assert_eq!(&struct_to_json(json_to_struct(object)), object);
    }

    #[test]
    fn integers_become_doubles() {
        let object = json!({"count": 3});
        let converted = struct_to_json(json_to_struct(object.as_object().unwrap()));
        assert_eq!(converted["count"], json!(3.0));
    }

    #[test]
    fn any_payload_from_json() {
        let payload = json!({"@type": "type.googleapis.com/google.protobuf.Empty", "value": "AQI="});
        let any = json_to_any(&payload).unwrap().unwrap();
        assert_eq!(any.type_url, "type.googleapis.com/google.protobuf.Empty");
        assert_eq!(any.value, vec![1, 2]);
        assert_eq!(any_to_json(Some(any)), payload);
    }

    #[test]
    fn empty_any_payload_is_a_no_op() {
        assert!(json_to_any(&json!({})).unwrap().is_none());
    }

    #[test]
    fn canonical_any_json_is_rejected() {
        let well_known = json!({
            "@type": "type.googleapis.com/google.protobuf.Struct",
            "value": {"a": 1},
        });
        assert!(matches!(json_to_any(&well_known), Err(Error::ProtoPayload(_))));

        let inlined = json!({
            "@type": "type.googleapis.com/google.cloud.audit.AuditLog",
            "methodName": "SetIamPolicy",
        });
        assert!(matches!(json_to_any(&inlined), Err(Error::ProtoPayload(_))));
    }

    #[test]
    fn malformed_any_payload_fails() {
        for payload in [
            json!("text"),
            json!({"@type": "x", "unexpected": 1}),
            json!({"@type": "x", "value": "not base64!"}),
        ] {
            assert!(matches!(json_to_any(&payload), Err(Error::ProtoPayload(_))));
        }
    }
}
