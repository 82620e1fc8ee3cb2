//! # Social notification view module

use std::sync::Arc;

use serde_json::Value;
use time::OffsetDateTime;

use super::{parse_created_at, tweet::Tweet, user::User, JsonView};

/// Read-only accessors over an account-level notification payload: follows,
/// blocks, likes, mutes, list changes and profile updates.
///
/// Every notification names the acting account (`source`), the affected
/// account (`target`) and, for status-related notifications, the status
/// involved (`target_object`).
#[derive(Debug, Clone)]
pub struct UserEvent {
    view: JsonView,
}

impl UserEvent {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            view: JsonView::new(root),
        }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Wire name of the notification, e.g. `favorite` or `follow`.
    pub fn event(&self) -> Option<&str> {
        self.view.str_field("event")
    }

    /// The account that performed the action.
    pub fn source(&self) -> User {
        User::from_view(self.view.at("source"))
    }

    /// The account the action was performed on.
    pub fn target(&self) -> User {
        User::from_view(self.view.at("target"))
    }

    /// Raw object the action applies to, when the notification carries one.
    pub fn target_object(&self) -> &Value {
        self.view.field("target_object")
    }

    /// The status the action applies to, for status-related notifications.
    pub fn target_status(&self) -> Option<Tweet> {
        self.view
            .is_present("target_object")
            .then(|| Tweet::from_view(self.view.at("target_object")))
    }

    /// Notification time exactly as the API sent it.
    pub fn created_at(&self) -> Option<&str> {
        self.view.str_field("created_at")
    }

    /// Notification time parsed into a date-time value.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at().and_then(parse_created_at)
    }
}

impl From<Value> for UserEvent {
    fn from(value: Value) -> Self {
        UserEvent::new(Arc::new(value))
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;

    #[test]
    fn expose_actor_and_subject() {
        let event = UserEvent::from(json!({
            "event": "favorite",
            "created_at": "Mon Jan 08 18:52:42 +0000 2018",
            "source": {"screen_name": "fan"},
            "target": {"screen_name": "author"},
            "target_object": {"id_str": "7", "text": "the liked status"}
        }));

        assert_eq!(event.event(), Some("favorite"));
        assert_eq!(event.source().screen_name(), Some("fan"));
        assert_eq!(event.target().screen_name(), Some("author"));
        assert_eq!(
            event.target_status().unwrap().text(),
            Some("the liked status")
        );
        assert_eq!(event.timestamp().unwrap().year(), 2018);
    }

    #[test]
    fn omit_the_target_status_when_absent() {
        let event = UserEvent::from(json!({
            "event": "follow",
            "source": {"screen_name": "fan"},
            "target": {"screen_name": "author"}
        }));

        assert!(event.target_status().is_none());
        assert!(event.target_object().is_null());
    }
}
