use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the ISO-8601 time of a log entry.
pub const TIMESTAMP_FIELD: &str = "@timestamp";

/// One parsed log entry.
///
/// A record is whatever JSON object appeared on its line. No schema is
/// enforced when loading; consumers look fields up and decide for
/// themselves what a missing or mistyped field means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// Records in load order: input file order, then line order within a file.
pub type RecordSet = Vec<Record>;

impl Record {
    /// Look up a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Look up a top-level field, only if it holds a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Raw `@timestamp` value, if present
    pub fn timestamp(&self) -> Option<&Value> {
        self.get(TIMESTAMP_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_field_access() {
        let record: Record = serde_json::from_value(json!({
            "url": "/api/users",
            "response_time": 0.25,
            "@timestamp": "2024-01-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(record.get_str("url"), Some("/api/users"));
        assert_eq!(record.get("response_time"), Some(&json!(0.25)));
        assert_eq!(record.timestamp(), Some(&json!("2024-01-01T10:00:00")));
        assert!(record.contains("url"));
        assert!(!record.contains("status"));
    }

    #[test]
    fn test_get_str_ignores_non_strings() {
        let record: Record = serde_json::from_value(json!({ "url": 42 })).unwrap();

        assert!(record.contains("url"));
        assert_eq!(record.get_str("url"), None);
    }

    #[test]
    fn test_record_rejects_non_objects() {
        assert!(serde_json::from_str::<Record>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Record>("\"text\"").is_err());
        assert!(serde_json::from_str::<Record>("12").is_err());
    }
}
