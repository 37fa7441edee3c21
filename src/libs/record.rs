//! Challenge records and their lifecycle classification.
//!
//! A [`Record`] is one entry of the `records` array of the board document.
//! The document is hand-written, so every field is read leniently: a value of
//! an unexpected JSON type counts as "not set" instead of rejecting the record
//! or the whole document.
//!
//! ## Classification
//!
//! | `failed` | `end` present | Status      |
//! |----------|---------------|-------------|
//! | truthy   | any           | `Failed`    |
//! | falsy    | yes           | `Completed` |
//! | falsy    | no            | `Active`    |
//!
//! `end` only has to be present (non-null) for a record to count as ended;
//! whether it parses as an instant is decided later by the presenter.
//!
//! ```rust
//! use challenge_board::libs::record::{Record, Status};
//! use serde_json::json;
//!
//! let record = Record::from_value(&json!({
//!     "title": "매일 달리기",
//!     "start": "2024-01-01T06:00:00+09:00",
//!     "failed": true
//! }))
//! .unwrap();
//! assert_eq!(record.classify().status, Status::Failed);
//! ```

use super::messages::Message;
use crate::msg_debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One challenge entry as supplied by the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw start value; parsed into an instant only when displayed.
    pub start: Option<Value>,
    /// Raw end value. Presence alone marks the record as ended.
    pub end: Option<Value>,
    pub failed: Option<bool>,
    pub failure_reason: Option<String>,
    pub hidden: Option<bool>,
    pub template: Option<bool>,
}

/// Derived lifecycle status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Completed,
    Failed,
}

/// Result of [`classify`]: the status together with the two flags it was
/// derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_failed: bool,
    pub has_ended: bool,
    pub status: Status,
}

impl Status {
    pub fn label(&self) -> Message {
        match self {
            Status::Active => Message::StatusActive,
            Status::Completed => Message::StatusCompleted,
            Status::Failed => Message::StatusFailed,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a record. Total over every input: absent fields count as unset.
pub fn classify(record: &Record) -> Classification {
    let is_failed = record.failed.unwrap_or(false);
    let has_ended = record.end.is_some();

    let status = if is_failed {
        Status::Failed
    } else if has_ended {
        Status::Completed
    } else {
        Status::Active
    };

    Classification { is_failed, has_ended, status }
}

impl Record {
    /// Builds a record from a JSON value, or `None` when the value is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(Self::from_object)
    }

    pub fn from_object(object: &Map<String, Value>) -> Self {
        Record {
            title: object.get("title").and_then(text),
            description: object.get("description").filter(|value| truthy(value) == Some(true)).and_then(text),
            start: present(object.get("start")),
            end: present(object.get("end")),
            failed: object.get("failed").and_then(truthy),
            failure_reason: object.get("failureReason").and_then(Value::as_str).map(str::to_string),
            hidden: object.get("hidden").and_then(truthy),
            template: object.get("template").and_then(truthy),
        }
    }

    pub fn classify(&self) -> Classification {
        classify(self)
    }

    pub fn is_failed(&self) -> bool {
        self.failed.unwrap_or(false)
    }

    /// Hidden and template entries never reach the board.
    pub fn is_visible(&self) -> bool {
        !self.hidden.unwrap_or(false) && !self.template.unwrap_or(false)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Record::from_value(&value).ok_or_else(|| serde::de::Error::custom("record must be a JSON object"))
    }
}

/// The top-level board document: `{ "records": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsDocument {
    pub records: Vec<Record>,
}

impl RecordsDocument {
    /// Extracts the records from a parsed document.
    ///
    /// A missing or non-array `records` field yields an empty document.
    /// Entries that are not objects are skipped.
    pub fn from_value(value: &Value) -> Self {
        let Some(entries) = value.get("records").and_then(Value::as_array) else {
            return Self::default();
        };

        let records = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let record = Record::from_value(entry);
                if record.is_none() {
                    msg_debug!(Message::RecordEntrySkipped(index));
                }
                record
            })
            .collect();

        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }
}

/// JavaScript-style truthiness. `null` means "not set".
fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => Some(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(text) => Some(!text.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|value| !value.is_null()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_of_failed_flag() {
        assert_eq!(truthy(&json!(1)), Some(true));
        assert_eq!(truthy(&json!(0)), Some(false));
        assert_eq!(truthy(&json!("")), Some(false));
        assert_eq!(truthy(&json!("yes")), Some(true));
        assert_eq!(truthy(&json!(null)), None);
    }

    #[test]
    fn test_falsy_description_is_not_set() {
        for value in [json!(false), json!(0), json!(""), json!(null)] {
            let record = Record::from_value(&json!({ "description": value })).unwrap();
            assert_eq!(record.description, None);
        }
    }

    #[test]
    fn test_null_end_is_not_present() {
        let record = Record::from_value(&json!({ "start": "2024-01-01", "end": null })).unwrap();
        assert!(record.end.is_none());
        assert_eq!(record.classify().status, Status::Active);
    }
}
