//! # Tweet views module
//!
//! This module contains the [`Tweet`] view and the collection views built
//! on top of it.

use std::sync::Arc;

use serde_json::Value;
use time::OffsetDateTime;

use super::{entities::Entities, parse_created_at, user::User, JsonView};

/// Read-only accessors over a single status payload.
///
/// A tweet view is handed to stream subscribers for every status coming in
/// over a stream, and returned by the REST operations that produce a single
/// status. The backing JSON is shared, so cloning the view is cheap.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tweetkit::core::views::Tweet;
///
/// let tweet = Tweet::from(json!({
///     "id": 950419294101430272u64,
///     "id_str": "950419294101430272",
///     "text": "morning",
///     "user": {"screen_name": "ahmad"}
/// }));
///
/// assert_eq!(tweet.text(), Some("morning"));
/// assert_eq!(tweet.user().screen_name(), Some("ahmad"));
/// assert!(!tweet.is_retweet());
/// ```
#[derive(Debug, Clone)]
pub struct Tweet {
    view: JsonView,
}

impl Tweet {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            view: JsonView::new(root),
        }
    }

    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Numeric status identifier.
    pub fn id(&self) -> Option<u64> {
        self.view.u64_field("id")
    }

    /// String form of the identifier, safe against integer truncation.
    pub fn id_str(&self) -> Option<&str> {
        self.view.str_field("id_str")
    }

    /// Status text, preferring the untruncated form when one is present.
    ///
    /// Extended payloads carry the full text under `full_text`, streaming
    /// payloads under `extended_tweet.full_text`, classic payloads under
    /// `text`.
    pub fn text(&self) -> Option<&str> {
        self.view
            .str_field("full_text")
            .or_else(|| {
                self.value()
                    .pointer("/extended_tweet/full_text")
                    .and_then(Value::as_str)
            })
            .or_else(|| self.view.str_field("text"))
    }

    /// BCP 47 language identifier detected for the text.
    pub fn lang(&self) -> Option<&str> {
        self.view.str_field("lang")
    }

    /// Utility used to post the status, as an HTML-formatted string.
    pub fn source(&self) -> Option<&str> {
        self.view.str_field("source")
    }

    /// Creation time exactly as the API sent it.
    pub fn created_at(&self) -> Option<&str> {
        self.view.str_field("created_at")
    }

    /// Creation time parsed into a date-time value.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at().and_then(parse_created_at)
    }

    /// Millisecond timestamp attached to streamed statuses.
    pub fn timestamp_ms(&self) -> Option<i64> {
        self.view
            .str_field("timestamp_ms")
            .and_then(|raw| raw.parse().ok())
            .or_else(|| self.view.i64_field("timestamp_ms"))
    }

    /// The author of the status.
    pub fn user(&self) -> User {
        User::from_view(self.view.at("user"))
    }

    /// Entities attached to the status, read from the extended payload when
    /// one is present.
    pub fn entities(&self) -> Entities {
        let extended = self.view.at("extended_tweet");
        if extended.is_present("entities") {
            Entities::from_view(extended.at("entities"))
        } else {
            Entities::from_view(self.view.at("entities"))
        }
    }

    /// Whether this status is a retweet of another status.
    pub fn is_retweet(&self) -> bool {
        self.view.is_present("retweeted_status")
    }

    /// The original status, when this one is a retweet.
    pub fn retweeted_status(&self) -> Option<Tweet> {
        self.view
            .is_present("retweeted_status")
            .then(|| Tweet::from_view(self.view.at("retweeted_status")))
    }

    /// Whether this status quotes another status.
    pub fn is_quote(&self) -> bool {
        self.view.bool_field("is_quote_status").unwrap_or(false)
    }

    /// Identifier of the quoted status.
    pub fn quoted_status_id(&self) -> Option<&str> {
        self.view.str_field("quoted_status_id_str")
    }

    /// The quoted status, when one is embedded.
    pub fn quoted_status(&self) -> Option<Tweet> {
        self.view
            .is_present("quoted_status")
            .then(|| Tweet::from_view(self.view.at("quoted_status")))
    }

    /// Whether this status replies to another status.
    pub fn is_reply(&self) -> bool {
        self.view.is_present("in_reply_to_status_id_str")
    }

    /// Identifier of the status this one replies to.
    pub fn in_reply_to_status_id(&self) -> Option<&str> {
        self.view.str_field("in_reply_to_status_id_str")
    }

    /// Screen name of the author this one replies to.
    pub fn in_reply_to_screen_name(&self) -> Option<&str> {
        self.view.str_field("in_reply_to_screen_name")
    }

    /// Whether the `text` field was truncated by the API.
    pub fn truncated(&self) -> bool {
        self.view.bool_field("truncated").unwrap_or(false)
    }

    /// Whether the authenticating user has liked this status.
    pub fn favorited(&self) -> bool {
        self.view.bool_field("favorited").unwrap_or(false)
    }

    /// Whether the authenticating user has retweeted this status.
    pub fn retweeted(&self) -> bool {
        self.view.bool_field("retweeted").unwrap_or(false)
    }

    /// Number of times this status has been retweeted.
    pub fn retweet_count(&self) -> Option<u64> {
        self.view.u64_field("retweet_count")
    }

    /// Number of times this status has been liked.
    pub fn favorite_count(&self) -> Option<u64> {
        self.view.u64_field("favorite_count")
    }

    /// Number of replies to this status.
    pub fn reply_count(&self) -> Option<u64> {
        self.view.u64_field("reply_count")
    }

    /// Number of times this status has been quoted.
    pub fn quote_count(&self) -> Option<u64> {
        self.view.u64_field("quote_count")
    }
}

impl From<Value> for Tweet {
    fn from(value: Value) -> Self {
        Tweet::new(Arc::new(value))
    }
}

/// Deletion notice for a status.
///
/// Streamed as a nested `delete.status` node, carrying only identifiers.
#[derive(Debug, Clone)]
pub struct TweetDeleted {
    view: JsonView,
}

impl TweetDeleted {
    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Numeric identifier of the deleted status.
    pub fn id(&self) -> Option<u64> {
        self.view.u64_field("id")
    }

    /// String identifier of the deleted status.
    pub fn id_str(&self) -> Option<&str> {
        self.view.str_field("id_str")
    }

    /// Numeric identifier of the author who deleted the status.
    pub fn user_id(&self) -> Option<u64> {
        self.view.u64_field("user_id")
    }

    /// String identifier of the author who deleted the status.
    pub fn user_id_str(&self) -> Option<&str> {
        self.view.str_field("user_id_str")
    }
}

impl From<Value> for TweetDeleted {
    fn from(value: Value) -> Self {
        TweetDeleted::from_view(JsonView::new(Arc::new(value)))
    }
}

/// View over a JSON array of statuses, as returned by timeline and lookup
/// operations.
#[derive(Debug, Clone)]
pub struct TweetList {
    view: JsonView,
}

impl TweetList {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            view: JsonView::new(root),
        }
    }

    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Number of statuses in the list.
    pub fn len(&self) -> usize {
        self.view
            .value()
            .as_array()
            .map(|items| items.len())
            .unwrap_or(0)
    }

    /// Whether the list holds no statuses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View over the status at `index`.
    pub fn get(&self, index: usize) -> Option<Tweet> {
        (index < self.len()).then(|| Tweet::from_view(self.view.at(&index.to_string())))
    }

    /// Iterate over all statuses in the list.
    pub fn iter(&self) -> impl Iterator<Item = Tweet> + '_ {
        (0..self.len()).map(move |index| Tweet::from_view(self.view.at(&index.to_string())))
    }
}

impl From<Value> for TweetList {
    fn from(value: Value) -> Self {
        TweetList::new(Arc::new(value))
    }
}

/// Result page of a standard search call: matched statuses plus the search
/// metadata block.
#[derive(Debug, Clone)]
pub struct SearchResults {
    view: JsonView,
}

impl SearchResults {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            view: JsonView::new(root),
        }
    }

    /// The statuses matched by the query.
    pub fn statuses(&self) -> TweetList {
        TweetList::from_view(self.view.at("statuses"))
    }

    /// The metadata block describing the search that produced this page.
    pub fn metadata(&self) -> SearchMetadata {
        SearchMetadata {
            view: self.view.at("search_metadata"),
        }
    }
}

impl From<Value> for SearchResults {
    fn from(value: Value) -> Self {
        SearchResults::new(Arc::new(value))
    }
}

/// Search metadata accessors.
#[derive(Debug, Clone)]
pub struct SearchMetadata {
    view: JsonView,
}

impl SearchMetadata {
    /// Seconds the search took to complete.
    pub fn completed_in(&self) -> Option<f64> {
        self.view.f64_field("completed_in")
    }

    /// The query the page was produced for.
    pub fn query(&self) -> Option<&str> {
        self.view.str_field("query")
    }

    /// Number of statuses requested per page.
    pub fn count(&self) -> Option<u64> {
        self.view.u64_field("count")
    }

    /// Highest status identifier in the page.
    pub fn max_id(&self) -> Option<&str> {
        self.view.str_field("max_id_str")
    }

    /// Lowest status identifier bound of the page.
    pub fn since_id(&self) -> Option<&str> {
        self.view.str_field("since_id_str")
    }

    /// Query-string fragment requesting the next page, when one exists.
    pub fn next_results(&self) -> Option<&str> {
        self.view.str_field("next_results")
    }
}
