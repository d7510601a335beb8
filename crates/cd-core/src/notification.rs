//! Notification wire models.
//!
//! Notifications are consumed as read-only display data; the broadcast
//! payload is the admin-facing write side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Reminder,
    Warning,
}

/// One notification record as listed by `GET /notifications`.
///
/// The API spells some fields two ways depending on which service produced
/// the record; the aliases absorb both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(alias = "description")]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub action_link: Option<String>,
}

/// Who a broadcast is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "id")]
pub enum BroadcastAudience {
    All,
    Cohort(String),
    Client(String),
}

/// Payload for `POST /notifications/broadcast`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastDraft {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub audience: BroadcastAudience,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_absorb_both_field_spellings() {
        let notification: Notification = serde_json::from_str(
            r#"{"_id":"n1","title":"Welcome","description":"Session starts Monday","type":"reminder"}"#,
        )
        .unwrap();
        assert_eq!(notification.id, "n1");
        assert_eq!(notification.message, "Session starts Monday");
        assert_eq!(notification.kind, NotificationKind::Reminder);
        assert!(!notification.read);
    }

    #[test]
    fn audience_serializes_with_scope_tag() {
        let draft = BroadcastDraft {
            title: "Heads up".into(),
            message: "Bring your documents".into(),
            kind: NotificationKind::Info,
            audience: BroadcastAudience::Cohort("g7".into()),
            action_link: None,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""audience":{"scope":"cohort","id":"g7"}"#));
    }
}
