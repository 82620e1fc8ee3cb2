//! # User view module

use std::sync::Arc;

use serde_json::Value;
use time::OffsetDateTime;

use super::{parse_created_at, tweet::Tweet, JsonView};

/// Read-only accessors over an account payload.
///
/// Returned by the user lookup operations and embedded in every status and
/// social notification payload.
#[derive(Debug, Clone)]
pub struct User {
    view: JsonView,
}

impl User {
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

    /// Numeric account identifier.
    pub fn id(&self) -> Option<u64> {
        self.view.u64_field("id")
    }

    /// String form of the identifier, safe against integer truncation.
    pub fn id_str(&self) -> Option<&str> {
        self.view.str_field("id_str")
    }

    /// Display name of the account.
    pub fn name(&self) -> Option<&str> {
        self.view.str_field("name")
    }

    /// Handle of the account, without the leading `@`.
    pub fn screen_name(&self) -> Option<&str> {
        self.view.str_field("screen_name")
    }

    /// Profile description.
    pub fn description(&self) -> Option<&str> {
        self.view.str_field("description")
    }

    /// Free-form location string from the profile.
    pub fn location(&self) -> Option<&str> {
        self.view.str_field("location")
    }

    /// URL from the profile.
    pub fn url(&self) -> Option<&str> {
        self.view.str_field("url")
    }

    /// Account creation time exactly as the API sent it.
    pub fn created_at(&self) -> Option<&str> {
        self.view.str_field("created_at")
    }

    /// Account creation time parsed into a date-time value.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at().and_then(parse_created_at)
    }

    /// Number of accounts following this one.
    pub fn followers_count(&self) -> Option<u64> {
        self.view.u64_field("followers_count")
    }

    /// Number of accounts this one follows.
    pub fn friends_count(&self) -> Option<u64> {
        self.view.u64_field("friends_count")
    }

    /// Number of statuses the account has posted.
    pub fn statuses_count(&self) -> Option<u64> {
        self.view.u64_field("statuses_count")
    }

    /// Number of statuses the account has liked.
    ///
    /// The wire field keeps the API's British spelling.
    pub fn favourites_count(&self) -> Option<u64> {
        self.view.u64_field("favourites_count")
    }

    /// Number of public lists the account appears on.
    pub fn listed_count(&self) -> Option<u64> {
        self.view.u64_field("listed_count")
    }

    /// Whether the account carries a verified badge.
    pub fn verified(&self) -> bool {
        self.view.bool_field("verified").unwrap_or(false)
    }

    /// Whether the account's statuses are protected.
    pub fn protected(&self) -> bool {
        self.view.bool_field("protected").unwrap_or(false)
    }

    /// Whether the account has geo-tagging enabled.
    pub fn geo_enabled(&self) -> bool {
        self.view.bool_field("geo_enabled").unwrap_or(false)
    }

    /// Declared interface language of the account.
    pub fn lang(&self) -> Option<&str> {
        self.view.str_field("lang")
    }

    /// HTTPS profile image URL.
    pub fn profile_image_url(&self) -> Option<&str> {
        self.view.str_field("profile_image_url_https")
    }

    /// Profile banner URL.
    pub fn profile_banner_url(&self) -> Option<&str> {
        self.view.str_field("profile_banner_url")
    }

    /// Confirmed email address.
    ///
    /// Only present on credential verification responses, and only when the
    /// application is allowed to read it.
    pub fn email(&self) -> Option<&str> {
        self.view.str_field("email")
    }

    /// The account's most recent status, when the API embedded one.
    pub fn latest_status(&self) -> Option<Tweet> {
        self.view
            .is_present("status")
            .then(|| Tweet::from_view(self.view.at("status")))
    }
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        User::new(Arc::new(value))
    }
}
