//! Notification payload model.
//!
//! A `Notification` is the single message shape published to every transport.
//! Its JSON form is the on-wire body consumers receive from both Kafka and
//! Kinesis.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Notification type used for system-wide announcements
pub const SYSTEM_NOTIFICATION_TYPE: &str = "system";

/// Target identifier meaning "every user"
pub const ALL_USERS_TARGET: &str = "all_users";

/// Broadcast message sent through a notification producer
///
/// `id` and `timestamp` may be left unset by callers; producers fill them in
/// right before transmission (see `Normalizer`). An empty `id` and a `None`
/// timestamp are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier, also used as the Kinesis partition key
    #[serde(default)]
    pub id: String,

    /// Category tag such as "system" or "marketing"
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Short title
    #[serde(default)]
    pub title: String,

    /// Message body
    #[serde(default)]
    pub message: String,

    /// Creation time, serialized as an RFC 3339 string
    #[serde(default)]
    pub timestamp: Option<Timestamp>,

    /// Audience identifiers, interpreted by downstream consumers
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Notification {
    /// Creates a notification without id or timestamp
    pub fn new(
        kind: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        targets: Vec<String>,
    ) -> Self {
        Self {
            id: String::new(),
            kind: kind.into(),
            title: title.into(),
            message: message.into(),
            timestamp: None,
            targets,
        }
    }

    /// Creates a system announcement addressed to all users
    pub fn system_announcement(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            SYSTEM_NOTIFICATION_TYPE,
            title,
            message,
            vec![ALL_USERS_TARGET.to_string()],
        )
    }

    /// Whether the caller left the id unset
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Serializes the notification into its wire form
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Parses a notification from its wire form
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    fn sample() -> Notification {
        Notification {
            id: "1700000000000000000".to_string(),
            kind: "marketing".to_string(),
            title: "Special Offer!".to_string(),
            message: "50% off".to_string(),
            timestamp: Some(Timestamp::from_second(1_700_000_000).unwrap()),
            targets: vec!["premium_users".to_string(), "active_users".to_string()],
        }
    }

    #[test]
    fn test_wire_field_names() {
        let bytes = sample().to_json_bytes().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["id", "message", "targets", "timestamp", "title", "type"]
        );
        assert_eq!(object["type"], "marketing");
        assert_eq!(object["timestamp"], "2023-11-14T22:13:20Z");
        assert_eq!(object["targets"][1], "active_users");
    }

    #[test]
    fn test_empty_targets_serialize_as_array() {
        let notification = Notification::new("system", "t", "m", Vec::new());
        let value: Value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["targets"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_system_announcement_shape() {
        let notification = Notification::system_announcement("T", "M");
        assert_eq!(notification.kind, "system");
        assert_eq!(notification.title, "T");
        assert_eq!(notification.message, "M");
        assert_eq!(notification.targets, vec!["all_users".to_string()]);
        assert!(!notification.has_id());
        assert!(notification.timestamp.is_none());
    }

    #[test]
    fn test_parse_payload_from_other_producers() {
        let raw = br#"{"id":"42","type":"system","title":"T","message":"M","timestamp":"2024-05-01T10:00:00.123456789Z","targets":["all_users"]}"#;
        let parsed = Notification::from_json_slice(raw).unwrap();
        assert_eq!(parsed.id, "42");
        assert_eq!(
            parsed.timestamp,
            Some("2024-05-01T10:00:00.123456789Z".parse().unwrap())
        );
    }

    fn arb_notification() -> impl Strategy<Value = Notification> {
        (
            "[0-9a-f-]{0,36}",
            prop_oneof![Just("system".to_string()), Just("marketing".to_string()), "[a-z]{1,12}"],
            ".{0,40}",
            ".{0,200}",
            proptest::option::of((0i64..4_000_000_000i64, 0i32..1_000_000_000i32)),
            proptest::collection::vec("[a-z_]{1,16}", 0..5),
        )
            .prop_map(|(id, kind, title, message, timestamp, targets)| Notification {
                id,
                kind,
                title,
                message,
                timestamp: timestamp.map(|(secs, nanos)| Timestamp::new(secs, nanos).unwrap()),
                targets,
            })
    }

    proptest! {
        #[test]
        fn prop_wire_round_trip(notification in arb_notification()) {
            let bytes = notification.to_json_bytes().unwrap();
            let parsed = Notification::from_json_slice(&bytes).unwrap();
            prop_assert_eq!(parsed, notification);
        }
    }
}
