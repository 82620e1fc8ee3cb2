//! Stream event types module.

use crate::core::views::{
    ApiErrors, DirectMessage, DirectMessageDeleted, Tweet, TweetDeleted, UserEvent,
};
use serde_json::Value;
use std::{fmt::Formatter, sync::Arc};

/// Events fired by the stream adapters.
///
/// Every message a streaming connection delivers is classified into one or
/// more of these names; listeners registered for a name are invoked each time
/// it fires. The names cover the catch-all event, the message families of
/// the user and filter streams and the specific kinds of social
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventName {
    /// Catch-all event fired for every object received on the stream, before
    /// the more specific events. Connection lifecycle and errors don't feed
    /// it.
    Any,

    /// A new tweet.
    Tweet,

    /// A new tweet which reshares another one.
    ///
    /// Fires in addition to [`EventName::Tweet`]; a tweet feeds exactly one
    /// of [`EventName::TweetRetweet`] and [`EventName::TweetOriginal`].
    TweetRetweet,

    /// A new tweet which is not a reshare.
    ///
    /// Fires in addition to [`EventName::Tweet`]; a tweet feeds exactly one
    /// of [`EventName::TweetRetweet`] and [`EventName::TweetOriginal`].
    TweetOriginal,

    /// A deletion notice, for a tweet or a direct message.
    ///
    /// Fires with the nested deletion payload; exactly one of
    /// [`EventName::DeleteTweet`] and [`EventName::DeleteDirectMessage`]
    /// fires after it.
    Delete,

    /// A tweet deletion notice.
    DeleteTweet,

    /// A direct message deletion notice.
    DeleteDirectMessage,

    /// A direct message sent to the authenticated user.
    DirectMessage,

    /// The friend id preamble sent once after a user stream connects.
    Friends,

    /// A rate limitation notice with the count of undelivered matches.
    Limit,

    /// A notice that geolocation data must be scrubbed from older tweets.
    ScrubGeo,

    /// A notice that a tweet was withheld in one or more countries.
    StatusWithheld,

    /// A notice that a user's content was withheld in one or more countries.
    UserWithheld,

    /// The connection attempt was started.
    Connect,

    /// The connection was established.
    Connected,

    /// A reconnect was scheduled by the connection.
    Reconnect,

    /// The service announced it is about to close the connection.
    Disconnect,

    /// A stall warning: the client is falling behind the stream.
    Warning,

    /// The connection reported a failure.
    Error,

    /// A stream object of an unrecognized shape.
    Other,

    /// A social notification around the authenticated user.
    ///
    /// Fires for every social notification, before the specific event named
    /// by the payload's `event` field.
    UserEvent,

    /// The authenticated user blocked someone, or was blocked.
    Blocked,

    /// A block was lifted.
    Unblocked,

    /// A tweet was favorited.
    Favorite,

    /// A favorite was withdrawn.
    Unfavorite,

    /// The authenticated user followed someone, or gained a follower.
    Follow,

    /// The authenticated user unfollowed someone.
    Unfollow,

    /// The authenticated user muted someone.
    Mute,

    /// A mute was lifted.
    Unmute,

    /// The authenticated user updated their profile.
    UserUpdate,

    /// A list was created.
    ListCreated,

    /// A list was deleted.
    ListDestroyed,

    /// A list's metadata was edited.
    ListUpdated,

    /// A member was added to a list.
    ListMemberAdded,

    /// A member was removed from a list.
    ListMemberRemoved,

    /// Someone subscribed to a list of the authenticated user.
    ListUserSubscribed,

    /// Someone unsubscribed from a list of the authenticated user.
    ListUserUnsubscribed,

    /// A tweet of the authenticated user was quoted.
    QuotedTweet,

    /// A retweet of the authenticated user's tweet was retweeted.
    RetweetedRetweet,

    /// A retweet of the authenticated user's tweet was favorited.
    FavoritedRetweet,

    /// A social notification of a kind this crate doesn't know.
    UnknownUserEvent,
}

impl EventName {
    /// Stable name of the event, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Tweet => "tweet",
            Self::TweetRetweet => "tweet_retweet",
            Self::TweetOriginal => "tweet_original",
            Self::Delete => "delete",
            Self::DeleteTweet => "delete_tweet",
            Self::DeleteDirectMessage => "delete_direct_message",
            Self::DirectMessage => "direct_message",
            Self::Friends => "friends",
            Self::Limit => "limit",
            Self::ScrubGeo => "scrub_geo",
            Self::StatusWithheld => "status_withheld",
            Self::UserWithheld => "user_withheld",
            Self::Connect => "connect",
            Self::Connected => "connected",
            Self::Reconnect => "reconnect",
            Self::Disconnect => "disconnect",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Other => "other",
            Self::UserEvent => "user_event",
            Self::Blocked => "blocked",
            Self::Unblocked => "unblocked",
            Self::Favorite => "favorite",
            Self::Unfavorite => "unfavorite",
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::UserUpdate => "user_update",
            Self::ListCreated => "list_created",
            Self::ListDestroyed => "list_destroyed",
            Self::ListUpdated => "list_updated",
            Self::ListMemberAdded => "list_member_added",
            Self::ListMemberRemoved => "list_member_removed",
            Self::ListUserSubscribed => "list_user_subscribed",
            Self::ListUserUnsubscribed => "list_user_unsubscribed",
            Self::QuotedTweet => "quoted_tweet",
            Self::RetweetedRetweet => "retweeted_retweet",
            Self::FavoritedRetweet => "favorited_retweet",
            Self::UnknownUserEvent => "unknown_user_event",
        }
    }

    /// Classify a social notification by the `event` field of its payload.
    ///
    /// Both spellings seen on the wire are accepted: the bare verb the API
    /// documents (`block`, `favorite`) and the past form some streaming
    /// clients re-emit (`blocked`, `favorited`). Unknown kinds map to
    /// [`EventName::UnknownUserEvent`] instead of being dropped.
    pub fn from_user_event(kind: &str) -> Self {
        match kind {
            "block" | "blocked" => Self::Blocked,
            "unblock" | "unblocked" => Self::Unblocked,
            "favorite" | "favorited" => Self::Favorite,
            "unfavorite" | "unfavorited" => Self::Unfavorite,
            "follow" | "followed" => Self::Follow,
            "unfollow" | "unfollowed" => Self::Unfollow,
            "mute" | "muted" => Self::Mute,
            "unmute" | "unmuted" => Self::Unmute,
            "user_update" => Self::UserUpdate,
            "list_created" => Self::ListCreated,
            "list_destroyed" => Self::ListDestroyed,
            "list_updated" => Self::ListUpdated,
            "list_member_added" => Self::ListMemberAdded,
            "list_member_removed" => Self::ListMemberRemoved,
            "list_user_subscribed" => Self::ListUserSubscribed,
            "list_user_unsubscribed" => Self::ListUserUnsubscribed,
            "quoted_tweet" => Self::QuotedTweet,
            "retweeted_retweet" => Self::RetweetedRetweet,
            "favorited_retweet" => Self::FavoritedRetweet,
            _ => Self::UnknownUserEvent,
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload handed to listeners when an event fires.
///
/// Every firing carries the variant matching what the stream delivered: the
/// catch-all event and the events without a dedicated view carry the raw
/// JSON, everything else carries a typed view over it. Cloning is cheap; the
/// underlying JSON document is shared.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Raw JSON payload, exactly as it arrived on the wire.
    Raw(Arc<Value>),

    /// A tweet.
    Tweet(Tweet),

    /// A direct message.
    DirectMessage(DirectMessage),

    /// A tweet deletion notice.
    TweetDeleted(TweetDeleted),

    /// A direct message deletion notice.
    DirectMessageDeleted(DirectMessageDeleted),

    /// A social notification.
    UserEvent(UserEvent),

    /// A failure reported by the stream.
    Error(ApiErrors),
}

impl StreamEvent {
    /// The raw JSON payload, if this firing carries one.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// The tweet, if this firing carries one.
    pub fn tweet(&self) -> Option<&Tweet> {
        match self {
            Self::Tweet(tweet) => Some(tweet),
            _ => None,
        }
    }

    /// The direct message, if this firing carries one.
    pub fn direct_message(&self) -> Option<&DirectMessage> {
        match self {
            Self::DirectMessage(message) => Some(message),
            _ => None,
        }
    }

    /// The tweet deletion notice, if this firing carries one.
    pub fn deleted_tweet(&self) -> Option<&TweetDeleted> {
        match self {
            Self::TweetDeleted(deleted) => Some(deleted),
            _ => None,
        }
    }

    /// The direct message deletion notice, if this firing carries one.
    pub fn deleted_direct_message(&self) -> Option<&DirectMessageDeleted> {
        match self {
            Self::DirectMessageDeleted(deleted) => Some(deleted),
            _ => None,
        }
    }

    /// The social notification, if this firing carries one.
    pub fn user_event(&self) -> Option<&UserEvent> {
        match self {
            Self::UserEvent(event) => Some(event),
            _ => None,
        }
    }

    /// The reported failure, if this firing carries one.
    pub fn errors(&self) -> Option<&ApiErrors> {
        match self {
            Self::Error(errors) => Some(errors),
            _ => None,
        }
    }
}
