#[cfg(test)]
mod integration {
    use serde_json::json;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use tweetkit::core::{
        MessageHandler, StreamConnection, StreamConnector, StreamEndpoint, StreamMessage,
        StreamRequest, Transport, TransportRequest, TransportResponse, TwitterError,
    };
    use tweetkit::stream::EventName;
    use tweetkit::{Credentials, TwitterClientBuilder, TwitterGenericClient};

    #[derive(Debug)]
    struct NoopTransport;

    #[async_trait::async_trait]
    impl Transport for NoopTransport {
        async fn send(
            &self,
            _request: TransportRequest,
        ) -> Result<TransportResponse, TwitterError> {
            Ok(TransportResponse::default())
        }
    }

    #[derive(Debug)]
    struct ScriptedConnection {
        resumed: Arc<AtomicUsize>,
        stopped: Arc<AtomicUsize>,
    }

    impl StreamConnection for ScriptedConnection {
        fn start(&self) -> Result<(), TwitterError> {
            self.resumed.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn stop(&self) {
            self.stopped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Connector which records every connection request and keeps the bound
    /// message handlers around, so tests can push messages through them as if
    /// they arrived on the wire.
    #[derive(Default)]
    struct ScriptedConnector {
        requests: Arc<Mutex<Vec<StreamRequest>>>,
        handlers: Arc<Mutex<Vec<MessageHandler>>>,
        resumed: Arc<AtomicUsize>,
        stopped: Arc<AtomicUsize>,
    }

    impl std::fmt::Debug for ScriptedConnector {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("ScriptedConnector").finish_non_exhaustive()
        }
    }

    #[async_trait::async_trait]
    impl StreamConnector for ScriptedConnector {
        async fn connect(
            &self,
            request: StreamRequest,
            handler: MessageHandler,
        ) -> Result<Box<dyn StreamConnection>, TwitterError> {
            self.requests.lock().unwrap().push(request);
            self.handlers.lock().unwrap().push(handler);

            Ok(Box::new(ScriptedConnection {
                resumed: self.resumed.clone(),
                stopped: self.stopped.clone(),
            }))
        }
    }

    struct ConnectorProbe {
        requests: Arc<Mutex<Vec<StreamRequest>>>,
        handlers: Arc<Mutex<Vec<MessageHandler>>>,
        resumed: Arc<AtomicUsize>,
    }

    impl ConnectorProbe {
        fn connects(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> StreamRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        fn last_handler(&self) -> MessageHandler {
            self.handlers.lock().unwrap().last().cloned().unwrap()
        }
    }

    fn credentials() -> Credentials<&'static str> {
        Credentials {
            consumer_key: "consumer-key",
            consumer_secret: "consumer-secret",
            access_token: "access-token",
            access_token_secret: "access-token-secret",
        }
    }

    fn client_with_connector() -> (TwitterGenericClient<NoopTransport>, ConnectorProbe) {
        let connector = ScriptedConnector::default();
        let probe = ConnectorProbe {
            requests: connector.requests.clone(),
            handlers: connector.handlers.clone(),
            resumed: connector.resumed.clone(),
        };

        let client = TwitterClientBuilder::with_transport(NoopTransport)
            .with_credentials(credentials())
            .with_stream_connector(connector)
            .build()
            .expect("client should build");

        (client, probe)
    }

    fn recording_listener(
        calls: &Arc<Mutex<Vec<EventName>>>,
        event: EventName,
    ) -> impl Fn(&tweetkit::stream::StreamEvent) + Send + Sync + 'static {
        let calls = calls.clone();
        move |_| calls.lock().unwrap().push(event)
    }

    /// Repeated adapter access yields the same shared instance.
    #[tokio::test]
    async fn should_share_one_adapter_per_client() -> Result<(), Box<dyn std::error::Error>> {
        let (client, _probe) = client_with_connector();

        assert!(Arc::ptr_eq(&client.user_stream(), &client.user_stream()));
        assert!(Arc::ptr_eq(&client.filter_stream(), &client.filter_stream()));

        Ok(())
    }

    /// Listeners of one adapter never hear messages of the other.
    #[tokio::test]
    async fn should_keep_adapters_independent() -> Result<(), Box<dyn std::error::Error>> {
        let (client, probe) = client_with_connector();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let user = client.user_stream();
        let filter = client.filter_stream();
        user.on(EventName::Tweet, recording_listener(&calls, EventName::Tweet));
        filter.on(
            EventName::Delete,
            recording_listener(&calls, EventName::Delete),
        );

        user.start().await?;
        let user_handler = probe.last_handler();
        filter.start().await?;
        let filter_handler = probe.last_handler();

        // the status arrives on the user stream, the deletion on the filter
        // stream; the cross-adapter listeners stay silent
        user_handler(StreamMessage::Tweet(json!({"id_str": "7", "text": "hi"})));
        user_handler(StreamMessage::Delete(
            json!({"delete": {"status": {"id_str": "7"}}}),
        ));
        filter_handler(StreamMessage::Delete(
            json!({"delete": {"status": {"id_str": "8"}}}),
        ));

        assert_eq!(
            *calls.lock().unwrap(),
            vec![EventName::Tweet, EventName::Delete]
        );

        Ok(())
    }

    /// For one status the catch-all fires first, then the generic event,
    /// then exactly one of the reshare / original events.
    #[tokio::test]
    async fn should_order_firings_from_generic_to_specific(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (client, probe) = client_with_connector();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let stream = client.user_stream();
        for event in [
            EventName::TweetOriginal,
            EventName::TweetRetweet,
            EventName::Tweet,
            EventName::Any,
        ] {
            stream.on(event, recording_listener(&calls, event));
        }

        stream.start().await?;
        probe.last_handler()(StreamMessage::Tweet(json!({
            "id_str": "8",
            "text": "RT @author: look",
            "retweeted_status": {"id_str": "7", "text": "look"}
        })));

        assert_eq!(
            *calls.lock().unwrap(),
            vec![EventName::Any, EventName::Tweet, EventName::TweetRetweet]
        );

        Ok(())
    }

    /// Stopping the user stream suspends delivery; the next start resumes
    /// the bound connection instead of opening a new one.
    #[tokio::test]
    async fn should_resume_the_user_stream_after_a_stop(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (client, probe) = client_with_connector();
        let stream = client.user_stream();

        assert!(stream.stop().is_none());

        stream.start().await?;
        assert!(stream.stop().is_some());
        stream.start().await?;

        assert_eq!(probe.connects(), 1);
        assert_eq!(probe.resumed.load(Ordering::Relaxed), 1);

        Ok(())
    }

    /// The filter stream sends the track list bound at connection time and
    /// applies later changes on the next connection only.
    #[tokio::test]
    async fn should_read_the_track_list_at_connection_time(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (client, probe) = client_with_connector();
        let stream = client.filter_stream();

        stream.set_track(["rustlang".into(), "async await".into()].to_vec());
        stream.start().await?;

        let request = probe.last_request();
        assert_eq!(request.endpoint, StreamEndpoint::Filter);
        assert_eq!(
            request.query_parameters.get("track"),
            Some(&"rustlang,async await".to_string())
        );

        // updating the keywords while connected changes nothing on the wire
        stream.set_track(["tokio".into()].to_vec());
        assert_eq!(probe.connects(), 1);

        stream.restart().await?;
        assert_eq!(probe.connects(), 2);
        assert_eq!(
            probe.last_request().query_parameters.get("track"),
            Some(&"tokio".to_string())
        );

        Ok(())
    }

    /// A listener panic is reported to the fault handler while the
    /// remaining listeners of the firing still run.
    #[tokio::test]
    async fn should_isolate_listener_panics() -> Result<(), Box<dyn std::error::Error>> {
        let (client, probe) = client_with_connector();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let faults = Arc::new(Mutex::new(Vec::new()));

        let stream = client.user_stream();
        {
            let faults = faults.clone();
            stream.set_fault_handler(move |fault| {
                faults.lock().unwrap().push(fault.event);
            });
        }

        stream.on(EventName::Tweet, |_| panic!("listener went sideways"));
        stream.on(EventName::Tweet, recording_listener(&calls, EventName::Tweet));

        stream.start().await?;
        probe.last_handler()(StreamMessage::Tweet(json!({"id_str": "7", "text": "hi"})));

        assert_eq!(*calls.lock().unwrap(), vec![EventName::Tweet]);
        assert_eq!(*faults.lock().unwrap(), vec![EventName::Tweet]);

        Ok(())
    }

    /// Listeners can be detached again; the count reflects it.
    #[tokio::test]
    async fn should_detach_listeners_by_handle() -> Result<(), Box<dyn std::error::Error>> {
        let (client, probe) = client_with_connector();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let stream = client.user_stream();
        let handle = stream.on(EventName::Tweet, recording_listener(&calls, EventName::Tweet));
        assert_eq!(stream.listener_count(EventName::Tweet), 1);

        assert!(stream.unregister(&handle));
        assert!(!stream.unregister(&handle));
        assert_eq!(stream.listener_count(EventName::Tweet), 0);

        stream.start().await?;
        probe.last_handler()(StreamMessage::Tweet(json!({"id_str": "7", "text": "hi"})));
        assert!(calls.lock().unwrap().is_empty());

        Ok(())
    }

    /// A client built without a stream connector reports it on start.
    #[tokio::test]
    async fn should_require_a_connector_to_start() -> Result<(), Box<dyn std::error::Error>> {
        let client = TwitterClientBuilder::with_transport(NoopTransport)
            .with_credentials(credentials())
            .build()?;

        let result = client.user_stream().start().await;

        match result {
            Ok(_) => panic!("Start should fail."),
            Err(TwitterError::MissingStreamConnector) => Ok(()),
            Err(err) => panic!("Unexpected error type: {err}"),
        }
    }
}
