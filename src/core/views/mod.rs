//! # Payload views module
//!
//! Read-only, zero-copy accessor types over the raw JSON payloads produced
//! by the Twitter API. A view never deserializes the whole payload into an
//! owned struct: it keeps a shared handle to the JSON document and resolves
//! fields on access, returning `None` for anything the payload does not
//! carry.

use std::sync::Arc;

use serde_json::Value;
use time::{Date, Month, OffsetDateTime, Time, UtcOffset};

pub mod direct_message;
pub mod entities;
pub mod error;
pub mod social;
pub mod tweet;
pub mod user;

#[doc(inline)]
pub use direct_message::{DirectMessage, DirectMessageDeleted, DirectMessageEvent};
#[doc(inline)]
pub use entities::{Entities, Media, MediaUpload};
#[doc(inline)]
pub use error::ApiErrors;
#[doc(inline)]
pub use social::UserEvent;
#[doc(inline)]
pub use tweet::{SearchMetadata, SearchResults, Tweet, TweetDeleted, TweetList};
#[doc(inline)]
pub use user::User;

static NULL: Value = Value::Null;

/// Shared backbone of every payload view.
///
/// Holds the whole JSON document behind an [`Arc`] together with a JSON
/// pointer to the node this view reads from. Cloning a view or deriving a
/// nested view never copies payload data.
#[derive(Debug, Clone)]
pub struct JsonView {
    root: Arc<Value>,
    pointer: String,
}

impl JsonView {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            root,
            pointer: String::new(),
        }
    }

    pub(crate) fn rooted(root: Arc<Value>, pointer: impl Into<String>) -> Self {
        Self {
            root,
            pointer: pointer.into(),
        }
    }

    /// The JSON node backing this view, `Null` when the path is absent.
    pub fn value(&self) -> &Value {
        self.root.pointer(&self.pointer).unwrap_or(&NULL)
    }

    /// Derive a view over a direct child of this view's node.
    pub(crate) fn at(&self, segment: &str) -> JsonView {
        let mut pointer = self.pointer.clone();
        pointer.push('/');
        pointer.push_str(segment);

        JsonView {
            root: Arc::clone(&self.root),
            pointer,
        }
    }

    pub(crate) fn field(&self, name: &str) -> &Value {
        self.value().get(name).unwrap_or(&NULL)
    }

    pub(crate) fn is_present(&self, name: &str) -> bool {
        !self.field(name).is_null()
    }

    pub(crate) fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).as_str()
    }

    pub(crate) fn u64_field(&self, name: &str) -> Option<u64> {
        self.field(name).as_u64()
    }

    pub(crate) fn i64_field(&self, name: &str) -> Option<i64> {
        self.field(name).as_i64()
    }

    pub(crate) fn f64_field(&self, name: &str) -> Option<f64> {
        self.field(name).as_f64()
    }

    pub(crate) fn bool_field(&self, name: &str) -> Option<bool> {
        self.field(name).as_bool()
    }
}

/// Parse the timestamp format the API uses everywhere,
/// e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub(crate) fn parse_created_at(raw: &str) -> Option<OffsetDateTime> {
    let mut parts = raw.split_whitespace();

    let _weekday = parts.next()?;
    let month = match parts.next()? {
        "Jan" => Month::January,
        "Feb" => Month::February,
        "Mar" => Month::March,
        "Apr" => Month::April,
        "May" => Month::May,
        "Jun" => Month::June,
        "Jul" => Month::July,
        "Aug" => Month::August,
        "Sep" => Month::September,
        "Oct" => Month::October,
        "Nov" => Month::November,
        "Dec" => Month::December,
        _ => return None,
    };
    let day: u8 = parts.next()?.parse().ok()?;

    let mut clock = parts.next()?.splitn(3, ':');
    let hour: u8 = clock.next()?.parse().ok()?;
    let minute: u8 = clock.next()?.parse().ok()?;
    let second: u8 = clock.next()?.parse().ok()?;

    let zone = parts.next()?;
    let year: i32 = parts.next()?.parse().ok()?;

    let (negative, digits) = match zone.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, zone.strip_prefix('+')?),
    };
    let mut offset_hours: i8 = digits.get(..2)?.parse().ok()?;
    let mut offset_minutes: i8 = digits.get(2..4)?.parse().ok()?;
    if negative {
        offset_hours = -offset_hours;
        offset_minutes = -offset_minutes;
    }

    let date = Date::from_calendar_date(year, month, day).ok()?;
    let time = Time::from_hms(hour, minute, second).ok()?;
    let offset = UtcOffset::from_hms(offset_hours, offset_minutes, 0).ok()?;

    Some(date.with_time(time).assume_offset(offset))
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_nested_nodes_without_copying() {
        let root = Arc::new(json!({"delete": {"status": {"id": 42, "id_str": "42"}}}));

        let view = JsonView::rooted(root, "/delete/status");
        assert_eq!(view.u64_field("id"), Some(42));
        assert_eq!(view.str_field("id_str"), Some("42"));
        assert!(!view.is_present("user_id"));
    }

    #[test]
    fn return_null_for_absent_paths() {
        let view = JsonView::rooted(Arc::new(json!({"a": 1})), "/missing/node");
        assert!(view.value().is_null());
        assert_eq!(view.u64_field("a"), None);
    }

    #[test]
    fn parse_api_timestamps() {
        let parsed = parse_created_at("Mon Jan 08 18:52:42 +0000 2018").unwrap();

        assert_eq!(parsed.year(), 2018);
        assert_eq!(parsed.month(), Month::January);
        assert_eq!(parsed.day(), 8);
        assert_eq!(parsed.hour(), 18);
        assert_eq!(parsed.minute(), 52);
        assert_eq!(parsed.second(), 42);
        assert!(parsed.offset().is_utc());
    }

    #[test]
    fn parse_non_utc_offsets() {
        let parsed = parse_created_at("Wed Oct 10 20:19:24 -0530 2018").unwrap();
        assert_eq!(parsed.offset().whole_minutes(), -330);
    }

    #[test]
    fn reject_malformed_timestamps() {
        assert!(parse_created_at("not a timestamp").is_none());
        assert!(parse_created_at("Mon Foo 08 18:52:42 +0000 2018").is_none());
        assert!(parse_created_at("").is_none());
    }
}
