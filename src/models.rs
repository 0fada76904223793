//! Wire types for the task store API.

use serde::{Deserialize, Serialize};

/// One task's observable state, as returned by `GET {base}/task/{arn}`.
///
/// The store serializes with omit-empty semantics, so every field except
/// the task ARN may be absent. A record is held immutably for the duration
/// of one render pass; mutations go to the store and only become visible on
/// the next full fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_arn: String,

    /// Container instance currently hosting the task. Grouping key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_instance: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_protection_enabled: Option<bool>,

    /// Opaque timestamp; meaningful only while protection is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_protection_expiry: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_health: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_health: Option<String>,

    /// Server-side diagnostics attached to the record, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl TaskRecord {
    pub fn protection_enabled(&self) -> bool {
        self.task_protection_enabled.unwrap_or(false)
    }
}

/// Response body of `GET {base}/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskIndex {
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Partial update posted to `POST {base}/task/{arn}`.
///
/// Unset fields are omitted from the body; the store applies only what is
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_protection_enabled: Option<bool>,

    /// Protection window in minutes. Store default applies when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_minutes: Option<i64>,
}

impl UpdateRequest {
    /// Toggle protection with the store's default expiry.
    pub fn protection(enabled: bool) -> Self {
        Self {
            task_protection_enabled: Some(enabled),
            expires_in_minutes: None,
        }
    }

    /// Enable protection with an explicit expiry window.
    pub fn protection_for_minutes(minutes: i64) -> Self {
        Self {
            task_protection_enabled: Some(true),
            expires_in_minutes: Some(minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_record_deserializes_store_payload() {
        let payload = r#"{
            "taskArn": "arn:aws:ecs:us-east-1:123456789012:task/web/abc123",
            "ec2Instance": "i-0abc",
            "taskProtectionEnabled": true,
            "taskProtectionExpiry": "2026-08-06T12:00:00Z",
            "localHealth": "Healthy",
            "remoteHealth": "Unhealthy"
        }"#;

        let record: TaskRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(
            record.task_arn,
            "arn:aws:ecs:us-east-1:123456789012:task/web/abc123"
        );
        assert_eq!(record.ec2_instance.as_deref(), Some("i-0abc"));
        assert!(record.protection_enabled());
        assert_eq!(record.local_health.as_deref(), Some("Healthy"));
        assert_eq!(record.remote_health.as_deref(), Some("Unhealthy"));
        assert!(record.errors.is_empty());
    }

    #[test]
    fn test_task_record_tolerates_sparse_payload() {
        let record: TaskRecord =
            serde_json::from_str(r#"{"taskArn": "arn:aws:ecs::1:task/t"}"#).unwrap();
        assert!(record.ec2_instance.is_none());
        assert!(!record.protection_enabled());
        assert!(record.task_protection_expiry.is_none());
    }

    #[test]
    fn test_task_index_defaults_to_empty() {
        let index: TaskIndex = serde_json::from_str("{}").unwrap();
        assert!(index.tasks.is_empty());

        let index: TaskIndex = serde_json::from_str(r#"{"tasks": ["a", "b"]}"#).unwrap();
        assert_eq!(index.tasks, vec!["a", "b"]);
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let body = serde_json::to_value(UpdateRequest::protection(true)).unwrap();
        assert_eq!(body, serde_json::json!({"taskProtectionEnabled": true}));

        let body = serde_json::to_value(UpdateRequest::protection_for_minutes(30)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"taskProtectionEnabled": true, "expiresInMinutes": 30})
        );
    }
}
