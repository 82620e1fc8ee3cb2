//! # Direct message views module
//!
//! The API speaks two direct message dialects: streams deliver the classic
//! shape with embedded sender and recipient accounts, while the REST events
//! endpoints produce an event envelope keyed by identifiers only. One view
//! per dialect.

use std::sync::Arc;

use serde_json::Value;
use time::OffsetDateTime;

use super::{entities::Entities, parse_created_at, user::User, JsonView};

/// Read-only accessors over a classic direct message payload, as delivered
/// by a stream under its `direct_message` node.
#[derive(Debug, Clone)]
pub struct DirectMessage {
    view: JsonView,
}

impl DirectMessage {
    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Numeric message identifier.
    pub fn id(&self) -> Option<u64> {
        self.view.u64_field("id")
    }

    /// String form of the identifier, safe against integer truncation.
    pub fn id_str(&self) -> Option<&str> {
        self.view.str_field("id_str")
    }

    /// Message text.
    pub fn text(&self) -> Option<&str> {
        self.view.str_field("text")
    }

    /// Creation time exactly as the API sent it.
    pub fn created_at(&self) -> Option<&str> {
        self.view.str_field("created_at")
    }

    /// Creation time parsed into a date-time value.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at().and_then(parse_created_at)
    }

    /// The account that sent the message.
    pub fn sender(&self) -> User {
        User::from_view(self.view.at("sender"))
    }

    /// String identifier of the sender.
    pub fn sender_id(&self) -> Option<&str> {
        self.view.str_field("sender_id_str")
    }

    /// Screen name of the sender.
    pub fn sender_screen_name(&self) -> Option<&str> {
        self.view.str_field("sender_screen_name")
    }

    /// The account that received the message.
    pub fn recipient(&self) -> User {
        User::from_view(self.view.at("recipient"))
    }

    /// String identifier of the recipient.
    pub fn recipient_id(&self) -> Option<&str> {
        self.view.str_field("recipient_id_str")
    }

    /// Screen name of the recipient.
    pub fn recipient_screen_name(&self) -> Option<&str> {
        self.view.str_field("recipient_screen_name")
    }

    /// Entities attached to the message text.
    pub fn entities(&self) -> Entities {
        Entities::from_view(self.view.at("entities"))
    }
}

impl From<Value> for DirectMessage {
    fn from(value: Value) -> Self {
        DirectMessage::from_view(JsonView::new(Arc::new(value)))
    }
}

/// Read-only accessors over a `message_create` event envelope, as returned
/// by the REST direct message endpoints.
#[derive(Debug, Clone)]
pub struct DirectMessageEvent {
    view: JsonView,
}

impl DirectMessageEvent {
    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// String identifier of the event.
    pub fn id(&self) -> Option<&str> {
        self.view.str_field("id")
    }

    /// Event kind, `message_create` for sent messages.
    pub fn event_type(&self) -> Option<&str> {
        self.view.str_field("type")
    }

    /// Millisecond creation timestamp.
    pub fn created_timestamp(&self) -> Option<i64> {
        self.view
            .str_field("created_timestamp")
            .and_then(|raw| raw.parse().ok())
    }

    /// Message text.
    pub fn text(&self) -> Option<&str> {
        self.value()
            .pointer("/message_create/message_data/text")
            .and_then(Value::as_str)
    }

    /// String identifier of the sending account.
    pub fn sender_id(&self) -> Option<&str> {
        self.value()
            .pointer("/message_create/sender_id")
            .and_then(Value::as_str)
    }

    /// String identifier of the receiving account.
    pub fn recipient_id(&self) -> Option<&str> {
        self.value()
            .pointer("/message_create/target/recipient_id")
            .and_then(Value::as_str)
    }
}

impl From<Value> for DirectMessageEvent {
    fn from(value: Value) -> Self {
        DirectMessageEvent::from_view(JsonView::new(Arc::new(value)))
    }
}

/// Deletion notice for a direct message, streamed as a nested
/// `delete.direct_message` node.
#[derive(Debug, Clone)]
pub struct DirectMessageDeleted {
    view: JsonView,
}

impl DirectMessageDeleted {
    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Numeric identifier of the deleted message.
    pub fn id(&self) -> Option<u64> {
        self.view.u64_field("id")
    }

    /// String identifier of the deleted message.
    pub fn id_str(&self) -> Option<&str> {
        self.view.str_field("id_str")
    }

    /// Numeric identifier of the account the deletion applies to.
    pub fn user_id(&self) -> Option<u64> {
        self.view.u64_field("user_id")
    }
}

impl From<Value> for DirectMessageDeleted {
    fn from(value: Value) -> Self {
        DirectMessageDeleted::from_view(JsonView::new(Arc::new(value)))
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;

    #[test]
    fn expose_classic_message_fields() {
        let message = DirectMessage::from(json!({
            "id": 950418179129511940u64,
            "id_str": "950418179129511940",
            "text": "are you around?",
            "created_at": "Mon Jan 08 18:52:42 +0000 2018",
            "sender": {"screen_name": "ahmad"},
            "sender_id_str": "399856418",
            "recipient": {"screen_name": "tayeb"},
            "recipient_screen_name": "tayeb"
        }));

        assert_eq!(message.id_str(), Some("950418179129511940"));
        assert_eq!(message.text(), Some("are you around?"));
        assert_eq!(message.sender().screen_name(), Some("ahmad"));
        assert_eq!(message.sender_id(), Some("399856418"));
        assert_eq!(message.recipient_screen_name(), Some("tayeb"));
        assert_eq!(message.timestamp().unwrap().year(), 2018);
    }

    #[test]
    fn expose_event_envelope_fields() {
        let event = DirectMessageEvent::from(json!({
            "id": "110",
            "type": "message_create",
            "created_timestamp": "1518816980574",
            "message_create": {
                "sender_id": "399856418",
                "target": {"recipient_id": "2244994945"},
                "message_data": {"text": "hello from the events api"}
            }
        }));

        assert_eq!(event.id(), Some("110"));
        assert_eq!(event.event_type(), Some("message_create"));
        assert_eq!(event.created_timestamp(), Some(1518816980574));
        assert_eq!(event.text(), Some("hello from the events api"));
        assert_eq!(event.sender_id(), Some("399856418"));
        assert_eq!(event.recipient_id(), Some("2244994945"));
    }

    #[test]
    fn expose_deletion_notices() {
        let deleted = DirectMessageDeleted::from(json!({
            "id": 950418179129511940u64,
            "id_str": "950418179129511940",
            "user_id": 3
        }));

        assert_eq!(deleted.id(), Some(950418179129511940));
        assert_eq!(deleted.user_id(), Some(3));
    }
}
