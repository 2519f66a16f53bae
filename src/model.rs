// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Entity types for one pipeline run.
//!
//! Upstream records arrive as arbitrary JSON objects. The connector
//! normalizes each record's primary key onto an explicit `id` and keeps the
//! remaining fields as an opaque passthrough map, preserving the upstream
//! field order so serialized node content is deterministic.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::SourceError;

/// Upstream field carrying an event's stable primary key.
pub const EVENT_ID_FIELD: &str = "eventId";

/// Upstream field carrying an event's human-readable identifier. Child
/// resources are fetched and associated under this key.
pub const READABLE_EVENT_ID_FIELD: &str = "readableEventId";

/// Upstream field holding the relative path of a record's image in the API's
/// asset namespace. Carried by speaker records and, for some events, by the
/// event record itself.
pub const IMAGE_PATH_FIELD: &str = "imagePath";

/// A published event, hydrated with child-record reference ids.
///
/// Relationships are stored as ordered id sequences only, never embedded
/// records; resolution back to full nodes happens at query time via the
/// declared schema (see [`crate::schema`]).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: String,
    #[serde(rename = "readableEventId")]
    pub readable_event_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub speakers: Vec<String>,
    pub sponsorships: Vec<String>,
}

impl Event {
    /// Build an event from a raw upstream record, normalizing `eventId` onto
    /// the stable `id` field. The reference sets start empty and are attached
    /// exactly once during hydration.
    pub fn from_record(record: Value) -> Result<Self, SourceError> {
        let mut fields = into_object(record, "event")?;
        let id = take_id_field(&mut fields, EVENT_ID_FIELD, "event")?;
        let readable_event_id = take_id_field(&mut fields, READABLE_EVENT_ID_FIELD, "event")?;

        Ok(Self {
            id,
            readable_event_id,
            fields,
            speakers: Vec::new(),
            sponsorships: Vec::new(),
        })
    }

    /// Relative path of this event's image, when the upstream record carries
    /// one.
    pub fn image_path(&self) -> Option<&str> {
        image_path_field(&self.fields)
    }
}

/// A speaker, flattened out of its per-event grouping.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Speaker {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Speaker {
    pub fn from_record(record: Value) -> Result<Self, SourceError> {
        let mut fields = into_object(record, "speaker")?;
        let id = take_id_field(&mut fields, "id", "speaker")?;
        Ok(Self { id, fields })
    }

    /// Relative path of this speaker's image, when the upstream record
    /// carries one. Absence must not fail node creation.
    pub fn image_path(&self) -> Option<&str> {
        image_path_field(&self.fields)
    }
}

fn image_path_field(fields: &Map<String, Value>) -> Option<&str> {
    fields
        .get(IMAGE_PATH_FIELD)
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
}

/// A sponsorship, flattened out of its per-event grouping, with its derived
/// logo asset URI.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Sponsorship {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub logo: Option<String>,
}

impl Sponsorship {
    pub fn from_record(record: Value) -> Result<Self, SourceError> {
        let mut fields = into_object(record, "sponsorship")?;
        let id = take_id_field(&mut fields, "id", "sponsorship")?;
        Ok(Self {
            id,
            fields,
            logo: None,
        })
    }
}

/// Extract the id of a raw child record without consuming it. Used during
/// hydration, where only the reference id is attached to the parent event.
pub fn record_id(record: &Value, kind: &str) -> Result<String, SourceError> {
    record
        .get("id")
        .and_then(id_value_to_string)
        .ok_or_else(|| {
            SourceError::MalformedRecord(format!("{kind} record has no usable 'id' field"))
        })
}

fn into_object(record: Value, kind: &str) -> Result<Map<String, Value>, SourceError> {
    match record {
        Value::Object(fields) => Ok(fields),
        other => Err(SourceError::MalformedRecord(format!(
            "{kind} record is not a JSON object: {other}"
        ))),
    }
}

/// Remove an identifier field from a record's map, accepting string or
/// integer upstream representations.
fn take_id_field(
    fields: &mut Map<String, Value>,
    field: &str,
    kind: &str,
) -> Result<String, SourceError> {
    let value = fields.remove(field).ok_or_else(|| {
        SourceError::MalformedRecord(format!("{kind} record is missing '{field}'"))
    })?;

    id_value_to_string(&value).ok_or_else(|| {
        SourceError::MalformedRecord(format!(
            "{kind} record field '{field}' is neither a string nor an integer: {value}"
        ))
    })
}

fn id_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_from_record_normalizes_primary_key() {
        let event = Event::from_record(json!({
            "eventId": 7,
            "readableEventId": "rustconf-2026",
            "title": "RustConf",
        }))
        .unwrap();

        assert_eq!(event.id, "7");
        assert_eq!(event.readable_event_id, "rustconf-2026");
        assert_eq!(event.fields.get("title"), Some(&json!("RustConf")));
        assert!(event.speakers.is_empty());
        assert!(event.sponsorships.is_empty());
    }

    #[test]
    fn test_event_from_record_rejects_missing_event_id() {
        let err = Event::from_record(json!({ "readableEventId": "x" })).unwrap_err();
        assert!(matches!(err, SourceError::MalformedRecord(_)));
    }

    #[test]
    fn test_event_serialization_has_no_duplicate_id_keys() {
        let event = Event::from_record(json!({
            "eventId": "E1",
            "readableEventId": "first",
            "title": "First",
        }))
        .unwrap();

        let serialized = serde_json::to_string(&event).unwrap();
        assert_eq!(serialized.matches("\"readableEventId\"").count(), 1);
        assert_eq!(serialized.matches("\"eventId\"").count(), 0);
    }

    #[test]
    fn test_speaker_image_path_present_and_absent() {
        let with_image = Speaker::from_record(json!({
            "id": "S1",
            "name": "Ada",
            "imagePath": "images/ada.png",
        }))
        .unwrap();
        assert_eq!(with_image.image_path(), Some("images/ada.png"));

        let without_image = Speaker::from_record(json!({ "id": "S2", "name": "Grace" })).unwrap();
        assert_eq!(without_image.image_path(), None);

        let empty_image =
            Speaker::from_record(json!({ "id": "S3", "imagePath": "" })).unwrap();
        assert_eq!(empty_image.image_path(), None);
    }

    #[test]
    fn test_record_id_accepts_numeric_ids() {
        assert_eq!(record_id(&json!({ "id": 12 }), "speaker").unwrap(), "12");
        assert_eq!(
            record_id(&json!({ "id": "P1" }), "sponsorship").unwrap(),
            "P1"
        );
        assert!(record_id(&json!({ "name": "no id" }), "speaker").is_err());
    }
}
