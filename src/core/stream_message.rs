//! # Stream Message
//!
//! This module contains the [`StreamMessage`] enum: the named messages a
//! streaming connection delivers to the handler bound at connect time.
//!
//! `StreamMessage` is the boundary contract between a [`StreamConnection`]
//! and the stream adapters: the connection names what arrived, the adapter
//! decides which logical events to fire for it.
//!
//! [`StreamConnection`]: ../stream_connector/trait.StreamConnection.html

use serde_json::Value;

/// A named message delivered by a streaming connection.
///
/// Data-bearing variants carry the raw JSON payload exactly as it arrived on
/// the wire; classification of composite payloads (reshare vs. original
/// post, tweet vs. direct message deletion, social event kinds) is the
/// receiving adapter's job, not the connection's.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamMessage {
    /// A new post.
    ///
    /// # Example
    /// ```json
    /// {"id":1050118621198921728,"text":"hello","user":{"screen_name":"jack"}}
    /// ```
    Tweet(Value),

    /// A deletion notice for a post or a direct message.
    ///
    /// # Example
    /// ```json
    /// {"delete":{"status":{"id":1234,"user_id":3},"timestamp_ms":"1498289340506"}}
    /// ```
    Delete(Value),

    /// An incoming direct message, classic envelope.
    ///
    /// # Example
    /// ```json
    /// {"direct_message":{"id":666024290140217347,"text":"hi"}}
    /// ```
    DirectMessage(Value),

    /// A social notification (follow, favorite, list change, ...).
    ///
    /// The payload's `event` field names the kind.
    ///
    /// # Example
    /// ```json
    /// {"event":"favorite","source":{"id":3},"target":{"id":4},"target_object":{}}
    /// ```
    UserEvent(Value),

    /// The friend id preamble sent once after a user stream connects.
    ///
    /// # Example
    /// ```json
    /// {"friends":[1497,169686021]}
    /// ```
    Friends(Value),

    /// A rate limitation notice with the count of undelivered matches.
    Limit(Value),

    /// A notice that geolocation data must be scrubbed from older posts.
    ScrubGeo(Value),

    /// A notice that a post was withheld in one or more countries.
    StatusWithheld(Value),

    /// A notice that a user's content was withheld in one or more countries.
    UserWithheld(Value),

    /// The connection attempt was started. Client-side lifecycle, not a
    /// stream object.
    Connect(Value),

    /// The connection was established. Client-side lifecycle, not a stream
    /// object.
    Connected(Value),

    /// A reconnect was scheduled by the connection. Client-side lifecycle,
    /// not a stream object.
    Reconnect(Value),

    /// The service announced it is about to close the connection.
    Disconnect(Value),

    /// A stall warning: the client is falling behind the stream.
    Warning(Value),

    /// The connection reported a failure.
    Error(Value),

    /// A stream object of a shape the connection does not recognize.
    Other(Value),
}

impl StreamMessage {
    /// Whether this message represents an object received on the stream, as
    /// opposed to client-side connection lifecycle or failure reporting.
    ///
    /// Only stream objects feed the catch-all event.
    pub fn is_stream_object(&self) -> bool {
        !matches!(
            self,
            StreamMessage::Connect(_)
                | StreamMessage::Connected(_)
                | StreamMessage::Reconnect(_)
                | StreamMessage::Error(_)
        )
    }
}
