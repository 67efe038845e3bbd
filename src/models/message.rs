//! Message Record Model
//!
//! One decoded event from an SNS message body, enriched with the owning
//! envelope's identifiers and, after classification, its origin.

use serde_json::{Map, Value};

use super::origin::OriginDescriptor;
use crate::utils::error::{AppError, AppResult};

/// A single event decoded from the envelope `Message` field.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    fields: Map<String, Value>,
    message_id: String,
    topic_name: String,
    origin: Option<&'static OriginDescriptor>,
}

impl MessageRecord {
    /// Create an unclassified record.
    pub fn new(
        fields: Map<String, Value>,
        message_id: impl Into<String>,
        topic_name: impl Into<String>,
    ) -> Self {
        Self {
            fields,
            message_id: message_id.into(),
            topic_name: topic_name.into(),
            origin: None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Origin assigned by the classifier, `None` before classification.
    pub fn origin(&self) -> Option<&'static OriginDescriptor> {
        self.origin
    }

    pub fn set_origin(&mut self, origin: &'static OriginDescriptor) {
        self.origin = Some(origin);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Required top-level field, or `MissingField` naming it.
    pub fn require(&self, key: &str) -> AppResult<&Value> {
        self.fields
            .get(key)
            .ok_or_else(|| AppError::missing_field(key))
    }

    /// Required field nested one level down, e.g. `detail.severity`.
    pub fn require_nested(&self, parent: &str, key: &str) -> AppResult<&Value> {
        self.require(parent)?
            .get(key)
            .ok_or_else(|| AppError::missing_field(format!("{}.{}", parent, key)))
    }

    /// Required top-level field rendered as display text.
    pub fn text(&self, key: &str) -> AppResult<String> {
        self.require(key).map(display_value)
    }

    /// Required nested field rendered as display text.
    pub fn nested_text(&self, parent: &str, key: &str) -> AppResult<String> {
        self.require_nested(parent, key).map(display_value)
    }
}

/// Render a JSON value for inclusion in alert text.
///
/// Strings are emitted without quotes; everything else uses its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
