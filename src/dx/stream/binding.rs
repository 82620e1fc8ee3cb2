//! Stream binding module.
//!
//! This module contains the [`StreamBinding`] type which backs both stream
//! adapters. A binding owns the adapter's [`EventRegistry`], the connection
//! taken from the configured [`StreamConnector`] and the event streams
//! handed out next to callback listeners. Messages delivered by the
//! connection are classified here and fan out to the listeners as typed
//! events.

use serde_json::Value;
use spin::RwLock;
use std::sync::Arc;

use crate::{
    core::{
        views::{
            ApiErrors, DirectMessage, DirectMessageDeleted, JsonView, Tweet, TweetDeleted,
            UserEvent,
        },
        DataStream, MessageHandler, StreamConnection, StreamConnector, StreamMessage,
        StreamRequest, TwitterError,
    },
    dx::stream::{registry::EventRegistry, EventName, StreamEvent},
};

/// Shared state of a single stream adapter.
///
/// The registry (and with it every registered listener) outlives the
/// connection: stopping or replacing the connection never touches the
/// listeners, so an adapter keeps firing to the same audience across
/// restarts.
#[derive(Debug)]
pub(crate) struct StreamBinding {
    /// Listener registry of the adapter which owns this binding.
    pub(crate) registry: EventRegistry,

    /// Connector used to establish connections, when the client was
    /// configured with one.
    connector: Option<Arc<dyn StreamConnector + Send + Sync>>,

    /// Currently bound connection.
    connection: RwLock<Option<Box<dyn StreamConnection>>>,

    /// Event streams handed out by the adapter.
    event_streams: RwLock<Vec<DataStream<(EventName, StreamEvent)>>>,
}

impl StreamBinding {
    pub(crate) fn new(connector: Option<Arc<dyn StreamConnector + Send + Sync>>) -> Self {
        Self {
            registry: EventRegistry::new(),
            connector,
            connection: RwLock::new(None),
            event_streams: RwLock::new(Vec::new()),
        }
    }

    /// Bind a connection for `request`, or resume the bound one.
    ///
    /// With a connection already bound the request is ignored and the bound
    /// connection is asked to resume delivery.
    ///
    /// # Errors
    /// Returns [`TwitterError::MissingStreamConnector`] when the client was
    /// configured without a stream connector, or whatever error the
    /// connector reports for the failed connection attempt.
    pub(crate) async fn start(self: &Arc<Self>, request: StreamRequest) -> Result<(), TwitterError> {
        if let Some(connection) = self.connection.read().as_ref() {
            return connection.start();
        }

        let connector = self
            .connector
            .as_ref()
            .ok_or(TwitterError::MissingStreamConnector)?
            .clone();

        let connection = connector.connect(request, self.message_handler()).await?;

        let mut slot = self.connection.write();
        match slot.as_ref() {
            // A concurrent `start` took the slot while this one connected.
            Some(_) => connection.stop(),
            None => *slot = Some(connection),
        }

        Ok(())
    }

    /// Suspend message delivery while keeping the connection bound.
    ///
    /// Returns [`None`] when no connection is bound.
    pub(crate) fn pause(&self) -> Option<()> {
        self.connection
            .read()
            .as_ref()
            .map(|connection| connection.stop())
    }

    /// Stop and unbind the connection.
    ///
    /// Returns [`None`] when no connection is bound.
    pub(crate) fn disconnect(&self) -> Option<()> {
        self.connection
            .write()
            .take()
            .map(|connection| connection.stop())
    }

    /// Whether a connection is currently bound.
    pub(crate) fn is_bound(&self) -> bool {
        self.connection.read().is_some()
    }

    /// Create an event stream fed by this binding.
    ///
    /// Each firing pushes one `(event name, payload)` pair into every stream
    /// taken from the adapter, so a single stream message usually yields
    /// several pairs: one for the catch-all and one per typed event.
    pub(crate) fn event_stream(&self) -> DataStream<(EventName, StreamEvent)> {
        let stream = DataStream::new();
        self.event_streams.write().push(stream.clone());
        stream
    }

    /// Message sink handed to the connector.
    ///
    /// Holds the binding weakly so an orphaned connection cannot keep the
    /// adapter alive; messages delivered after the adapter is gone are
    /// dropped.
    fn message_handler(self: &Arc<Self>) -> MessageHandler {
        let binding = Arc::downgrade(self);

        Arc::new(move |message| {
            if let Some(binding) = binding.upgrade() {
                binding.route_message(message);
            }
        })
    }

    /// Classify a raw stream message and fire the matching events.
    ///
    /// Every stream object additionally feeds the catch-all event with its
    /// raw payload before any typed event fires; connection lifecycle and
    /// failure messages fire their own event only.
    pub(crate) fn route_message(&self, message: StreamMessage) {
        match message {
            StreamMessage::Tweet(value) => self.route_tweet(Arc::new(value)),
            StreamMessage::Delete(value) => self.route_deletion(Arc::new(value)),
            StreamMessage::DirectMessage(value) => self.route_direct_message(Arc::new(value)),
            StreamMessage::UserEvent(value) => self.route_user_event(Arc::new(value)),
            StreamMessage::Friends(value) => self.route_raw(EventName::Friends, Arc::new(value)),
            StreamMessage::Limit(value) => self.route_raw(EventName::Limit, Arc::new(value)),
            StreamMessage::ScrubGeo(value) => self.route_raw(EventName::ScrubGeo, Arc::new(value)),
            StreamMessage::StatusWithheld(value) => {
                self.route_raw(EventName::StatusWithheld, Arc::new(value))
            }
            StreamMessage::UserWithheld(value) => {
                self.route_raw(EventName::UserWithheld, Arc::new(value))
            }
            StreamMessage::Disconnect(value) => {
                self.route_raw(EventName::Disconnect, Arc::new(value))
            }
            StreamMessage::Warning(value) => self.route_raw(EventName::Warning, Arc::new(value)),
            StreamMessage::Other(value) => self.route_raw(EventName::Other, Arc::new(value)),
            StreamMessage::Connect(value) => {
                self.fire(EventName::Connect, &StreamEvent::Raw(Arc::new(value)));
            }
            StreamMessage::Connected(value) => {
                self.fire(EventName::Connected, &StreamEvent::Raw(Arc::new(value)));
            }
            StreamMessage::Reconnect(value) => {
                self.fire(EventName::Reconnect, &StreamEvent::Raw(Arc::new(value)));
            }
            StreamMessage::Error(value) => {
                let errors = ApiErrors::new(Arc::new(value));
                self.fire(EventName::Error, &StreamEvent::Error(errors));
            }
        }
    }

    /// A status fires the generic tweet event and exactly one of the
    /// retweet / original events, decided by the presence of
    /// `retweeted_status`.
    fn route_tweet(&self, raw: Arc<Value>) {
        self.fire(EventName::Any, &StreamEvent::Raw(raw.clone()));

        let tweet = Tweet::new(raw);
        let specific = if tweet.is_retweet() {
            EventName::TweetRetweet
        } else {
            EventName::TweetOriginal
        };
        let payload = StreamEvent::Tweet(tweet);

        self.fire(EventName::Tweet, &payload);
        self.fire(specific, &payload);
    }

    /// A deletion notice fires the generic deletion event and exactly one of
    /// the status / direct message deletion events. Both firings carry the
    /// view over whichever nested payload the notice holds.
    fn route_deletion(&self, raw: Arc<Value>) {
        self.fire(EventName::Any, &StreamEvent::Raw(raw.clone()));

        if raw.pointer("/delete/direct_message").is_some() {
            let deleted =
                DirectMessageDeleted::from_view(JsonView::rooted(raw, "/delete/direct_message"));
            let payload = StreamEvent::DirectMessageDeleted(deleted);

            self.fire(EventName::Delete, &payload);
            self.fire(EventName::DeleteDirectMessage, &payload);
        } else {
            let deleted = TweetDeleted::from_view(JsonView::rooted(raw, "/delete/status"));
            let payload = StreamEvent::TweetDeleted(deleted);

            self.fire(EventName::Delete, &payload);
            self.fire(EventName::DeleteTweet, &payload);
        }
    }

    fn route_direct_message(&self, raw: Arc<Value>) {
        self.fire(EventName::Any, &StreamEvent::Raw(raw.clone()));

        let message = DirectMessage::from_view(JsonView::rooted(raw, "/direct_message"));
        self.fire(EventName::DirectMessage, &StreamEvent::DirectMessage(message));
    }

    /// An account notification fires the generic notification event and the
    /// event its `event` field classifies to.
    fn route_user_event(&self, raw: Arc<Value>) {
        self.fire(EventName::Any, &StreamEvent::Raw(raw.clone()));

        let event = UserEvent::new(raw);
        let specific = event
            .event()
            .map_or(EventName::UnknownUserEvent, EventName::from_user_event);
        let payload = StreamEvent::UserEvent(event);

        self.fire(EventName::UserEvent, &payload);
        self.fire(specific, &payload);
    }

    fn route_raw(&self, event: EventName, raw: Arc<Value>) {
        let payload = StreamEvent::Raw(raw);
        self.fire(EventName::Any, &payload);
        self.fire(event, &payload);
    }

    /// Fire `event` to the registry and feed the event streams.
    fn fire(&self, event: EventName, payload: &StreamEvent) -> bool {
        let known = self.registry.fire(event, payload);

        self.event_streams
            .read()
            .iter()
            .for_each(|stream| stream.push_data((event, payload.clone())));

        known
    }

    fn invalidate_streams(&self) {
        let mut streams = self.event_streams.write();
        streams.iter().for_each(|stream| stream.invalidate());
        streams.clear();
    }
}

impl Drop for StreamBinding {
    fn drop(&mut self) {
        self.disconnect();
        self.invalidate_streams();
    }
}

#[cfg(test)]
mod it_should {
    use super::*;
    use crate::dx::stream::registry::Listener;
    use futures::StreamExt;
    use serde_json::json;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    #[derive(Debug)]
    struct MockConnection {
        resumed: Arc<AtomicUsize>,
        stopped: Arc<AtomicUsize>,
    }

    impl StreamConnection for MockConnection {
        fn start(&self) -> Result<(), TwitterError> {
            self.resumed.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn stop(&self) {
            self.stopped.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[derive(Default)]
    struct MockConnector {
        connects: Arc<AtomicUsize>,
        resumed: Arc<AtomicUsize>,
        stopped: Arc<AtomicUsize>,
        handler: Mutex<Option<MessageHandler>>,
    }

    impl std::fmt::Debug for MockConnector {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MockConnector").finish_non_exhaustive()
        }
    }

    #[async_trait::async_trait]
    impl StreamConnector for MockConnector {
        async fn connect(
            &self,
            _request: StreamRequest,
            handler: MessageHandler,
        ) -> Result<Box<dyn StreamConnection>, TwitterError> {
            self.connects.fetch_add(1, Ordering::Relaxed);
            *self.handler.lock().unwrap() = Some(handler);

            Ok(Box::new(MockConnection {
                resumed: self.resumed.clone(),
                stopped: self.stopped.clone(),
            }))
        }
    }

    fn recording_listener(calls: &Arc<Mutex<Vec<EventName>>>, event: EventName) -> Listener {
        let calls = calls.clone();
        Arc::new(move |_| calls.lock().unwrap().push(event))
    }

    fn binding_with_listeners(
        events: &[EventName],
    ) -> (Arc<StreamBinding>, Arc<Mutex<Vec<EventName>>>) {
        let binding = Arc::new(StreamBinding::new(None));
        let calls = Arc::new(Mutex::new(Vec::new()));

        for event in events {
            binding
                .registry
                .register(*event, recording_listener(&calls, *event));
        }

        (binding, calls)
    }

    #[test]
    fn fire_the_catch_all_before_typed_events() {
        let (binding, calls) = binding_with_listeners(&[
            EventName::Any,
            EventName::Tweet,
            EventName::TweetOriginal,
            EventName::TweetRetweet,
        ]);

        binding.route_message(StreamMessage::Tweet(json!({
            "id_str": "7",
            "text": "plain status"
        })));

        assert_eq!(
            *calls.lock().unwrap(),
            vec![EventName::Any, EventName::Tweet, EventName::TweetOriginal]
        );
    }

    #[test]
    fn classify_retweets_apart_from_originals() {
        let (binding, calls) = binding_with_listeners(&[
            EventName::TweetOriginal,
            EventName::TweetRetweet,
        ]);

        binding.route_message(StreamMessage::Tweet(json!({
            "id_str": "8",
            "text": "RT @someone: look",
            "retweeted_status": {"id_str": "7", "text": "look"}
        })));

        assert_eq!(*calls.lock().unwrap(), vec![EventName::TweetRetweet]);
    }

    #[test]
    fn route_typed_events_to_their_listeners_only() {
        let binding = Arc::new(StreamBinding::new(None));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let others = Arc::new(Mutex::new(0));

        {
            let seen = seen.clone();
            binding.registry.register(
                EventName::Tweet,
                Arc::new(move |event| {
                    let text = event
                        .tweet()
                        .and_then(|tweet| tweet.text())
                        .unwrap_or_default()
                        .to_string();
                    seen.lock().unwrap().push(text);
                }),
            );
        }
        {
            let others = others.clone();
            binding.registry.register(
                EventName::Other,
                Arc::new(move |_| *others.lock().unwrap() += 1),
            );
        }

        binding.route_message(StreamMessage::Tweet(json!({"text": "hello"})));
        binding.route_message(StreamMessage::Other(json!({"kind": "unrecognized"})));

        assert_eq!(*seen.lock().unwrap(), vec!["hello"]);
        assert_eq!(*others.lock().unwrap(), 1);
    }

    #[test]
    fn carry_the_nested_status_deletion_payload() {
        let binding = Arc::new(StreamBinding::new(None));
        let deletions = Arc::new(Mutex::new(Vec::new()));

        for event in [EventName::Delete, EventName::DeleteTweet] {
            let deletions = deletions.clone();
            binding.registry.register(
                event,
                Arc::new(move |payload: &StreamEvent| {
                    let deleted = payload.deleted_tweet().expect("a status deletion");
                    deletions
                        .lock()
                        .unwrap()
                        .push((deleted.id_str().map(str::to_string), deleted.user_id()));
                }),
            );
        }

        binding.route_message(StreamMessage::Delete(json!({
            "delete": {"status": {"id": 7, "id_str": "7", "user_id": 3, "user_id_str": "3"}}
        })));

        assert_eq!(
            *deletions.lock().unwrap(),
            vec![(Some("7".to_string()), Some(3)), (Some("7".to_string()), Some(3))]
        );
    }

    #[test]
    fn classify_direct_message_deletions() {
        let (binding, calls) = binding_with_listeners(&[
            EventName::Delete,
            EventName::DeleteTweet,
            EventName::DeleteDirectMessage,
        ]);

        binding.route_message(StreamMessage::Delete(json!({
            "delete": {"direct_message": {"id": 12, "user_id": 3}}
        })));

        assert_eq!(
            *calls.lock().unwrap(),
            vec![EventName::Delete, EventName::DeleteDirectMessage]
        );
    }

    #[test]
    fn classify_account_notifications_by_kind() {
        let binding = Arc::new(StreamBinding::new(None));
        let actors = Arc::new(Mutex::new(Vec::new()));

        {
            let actors = actors.clone();
            binding.registry.register(
                EventName::Favorite,
                Arc::new(move |payload: &StreamEvent| {
                    let event = payload.user_event().expect("a notification payload");
                    actors
                        .lock()
                        .unwrap()
                        .push(event.source().screen_name().map(str::to_string));
                }),
            );
        }

        binding.route_message(StreamMessage::UserEvent(json!({
            "event": "favorite",
            "source": {"screen_name": "fan"},
            "target": {"screen_name": "author"}
        })));

        assert_eq!(*actors.lock().unwrap(), vec![Some("fan".to_string())]);
    }

    #[test]
    fn fall_back_to_the_unknown_notification_event() {
        let (binding, calls) = binding_with_listeners(&[
            EventName::UserEvent,
            EventName::UnknownUserEvent,
        ]);

        binding.route_message(StreamMessage::UserEvent(json!({
            "event": "access_revoked",
            "source": {}, "target": {}
        })));

        assert_eq!(
            *calls.lock().unwrap(),
            vec![EventName::UserEvent, EventName::UnknownUserEvent]
        );
    }

    #[test]
    fn unwrap_the_direct_message_envelope() {
        let binding = Arc::new(StreamBinding::new(None));
        let texts = Arc::new(Mutex::new(Vec::new()));

        {
            let texts = texts.clone();
            binding.registry.register(
                EventName::DirectMessage,
                Arc::new(move |payload: &StreamEvent| {
                    let message = payload.direct_message().expect("a direct message payload");
                    texts
                        .lock()
                        .unwrap()
                        .push(message.text().map(str::to_string));
                }),
            );
        }

        binding.route_message(StreamMessage::DirectMessage(json!({
            "direct_message": {"id_str": "12", "text": "psst"}
        })));

        assert_eq!(*texts.lock().unwrap(), vec![Some("psst".to_string())]);
    }

    #[test]
    fn keep_lifecycle_messages_away_from_the_catch_all() {
        let (binding, calls) = binding_with_listeners(&[
            EventName::Any,
            EventName::Connect,
            EventName::Connected,
            EventName::Reconnect,
            EventName::Error,
        ]);

        for message in [
            StreamMessage::Connect(json!({})),
            StreamMessage::Connected(json!({})),
            StreamMessage::Reconnect(json!({})),
            StreamMessage::Error(json!({"message": "over capacity", "code": 130})),
        ] {
            assert!(!message.is_stream_object());
            binding.route_message(message);
        }

        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                EventName::Connect,
                EventName::Connected,
                EventName::Reconnect,
                EventName::Error
            ]
        );
    }

    #[tokio::test]
    async fn deliver_every_firing_to_event_streams() {
        let binding = Arc::new(StreamBinding::new(None));
        let mut stream = binding.event_stream();

        binding.route_message(StreamMessage::Tweet(json!({"id_str": "7", "text": "hi"})));

        let (name, payload) = stream.next().await.expect("the catch-all pair");
        assert_eq!(name, EventName::Any);
        assert!(payload.raw().is_some());

        let (name, _) = stream.next().await.expect("the generic pair");
        assert_eq!(name, EventName::Tweet);

        let (name, payload) = stream.next().await.expect("the specific pair");
        assert_eq!(name, EventName::TweetOriginal);
        assert_eq!(payload.tweet().expect("a status payload").text(), Some("hi"));
    }

    #[tokio::test]
    async fn require_a_connector_to_start() {
        let binding = Arc::new(StreamBinding::new(None));

        let result = binding.start(StreamRequest::default()).await;

        assert!(matches!(
            result,
            Err(TwitterError::MissingStreamConnector)
        ));
        assert!(!binding.is_bound());
    }

    #[tokio::test]
    async fn resume_the_bound_connection_instead_of_reconnecting() {
        let connector = Arc::new(MockConnector::default());
        let binding = Arc::new(StreamBinding::new(Some(connector.clone())));

        binding.start(StreamRequest::default()).await.unwrap();
        binding.start(StreamRequest::default()).await.unwrap();

        assert_eq!(connector.connects.load(Ordering::Relaxed), 1);
        assert_eq!(connector.resumed.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn keep_the_connection_across_a_pause() {
        let connector = Arc::new(MockConnector::default());
        let binding = Arc::new(StreamBinding::new(Some(connector.clone())));

        assert!(binding.pause().is_none());

        binding.start(StreamRequest::default()).await.unwrap();
        assert!(binding.pause().is_some());

        assert!(binding.is_bound());
        assert_eq!(connector.stopped.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn unbind_the_connection_on_disconnect() {
        let connector = Arc::new(MockConnector::default());
        let binding = Arc::new(StreamBinding::new(Some(connector.clone())));

        assert!(binding.disconnect().is_none());

        binding.start(StreamRequest::default()).await.unwrap();
        assert!(binding.disconnect().is_some());

        assert!(!binding.is_bound());
        assert_eq!(connector.stopped.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn deliver_connector_messages_to_listeners() {
        let connector = Arc::new(MockConnector::default());
        let binding = Arc::new(StreamBinding::new(Some(connector.clone())));
        let calls = Arc::new(Mutex::new(Vec::new()));
        binding
            .registry
            .register(EventName::Tweet, recording_listener(&calls, EventName::Tweet));

        binding.start(StreamRequest::default()).await.unwrap();

        let handler = connector.handler.lock().unwrap().clone().unwrap();
        handler(StreamMessage::Tweet(json!({"id_str": "7", "text": "hi"})));

        assert_eq!(*calls.lock().unwrap(), vec![EventName::Tweet]);

        drop(binding);
        handler(StreamMessage::Tweet(json!({"id_str": "8", "text": "late"})));
        assert_eq!(*calls.lock().unwrap(), vec![EventName::Tweet]);
    }
}
