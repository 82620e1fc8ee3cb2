use serde_json::json;

use tweetkit::core::{
    MessageHandler, StreamConnection, StreamConnector, StreamMessage, StreamRequest, TwitterError,
};
use tweetkit::{stream::EventName, Credentials, TwitterClientBuilder};

/// Connection handed out by [`ReplayConnector`]. Delivery already happened
/// at connect time, so the lifecycle calls have nothing left to do.
#[derive(Debug)]
struct ReplayConnection;

impl StreamConnection for ReplayConnection {
    fn start(&self) -> Result<(), TwitterError> {
        Ok(())
    }

    fn stop(&self) {}
}

/// Connector that replays a canned session instead of talking to the live
/// API. Swap in a connector backed by your streaming client to go live.
#[derive(Debug)]
struct ReplayConnector;

#[async_trait::async_trait]
impl StreamConnector for ReplayConnector {
    async fn connect(
        &self,
        request: StreamRequest,
        handler: MessageHandler,
    ) -> Result<Box<dyn StreamConnection>, TwitterError> {
        println!(
            "\nconnecting to the {} endpoint (query: {:?})",
            request.endpoint, request.query_parameters
        );

        for message in replayed_session() {
            handler(message);
        }

        Ok(Box::new(ReplayConnection))
    }
}

fn replayed_session() -> Vec<StreamMessage> {
    vec![
        StreamMessage::Friends(json!({"friends": [1497, 169686021]})),
        StreamMessage::Tweet(json!({
            "id_str": "1050118621198921728",
            "text": "To make room for more expression, we will now count all emojis as equal",
            "user": {"id_str": "6253282", "screen_name": "TwitterAPI"}
        })),
        StreamMessage::Tweet(json!({
            "id_str": "1050120000000000000",
            "text": "RT @TwitterAPI: To make room for more expression",
            "user": {"id_str": "12", "screen_name": "jack"},
            "retweeted_status": {
                "id_str": "1050118621198921728",
                "text": "To make room for more expression, we will now count all emojis as equal"
            }
        })),
        StreamMessage::UserEvent(json!({
            "event": "favorite",
            "source": {"screen_name": "jack"},
            "target": {"screen_name": "TwitterAPI"},
            "target_object": {"id_str": "1050118621198921728"}
        })),
        StreamMessage::Delete(json!({
            "delete": {
                "status": {"id_str": "1050120000000000000", "user_id_str": "12"},
                "timestamp_ms": "1498289340506"
            }
        })),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = TwitterClientBuilder::with_reqwest_transport()
        .with_credentials(Credentials {
            consumer_key: "demo-consumer-key",
            consumer_secret: "demo-consumer-secret",
            access_token: "demo-access-token",
            access_token_secret: "demo-access-token-secret",
        })
        .with_stream_connector(ReplayConnector)
        .build()?;

    let stream = client.user_stream();

    // the catch-all listener sees every stream object, always first
    stream.on(EventName::Any, |event| {
        if let Some(raw) = event.raw() {
            println!("(any) {}", raw);
        }
    });

    // every new status, reshare or not
    stream.on(EventName::Tweet, |event| {
        if let Some(tweet) = event.tweet() {
            println!(
                "(tweet) @{}: {}",
                tweet.user().screen_name().unwrap_or_default(),
                tweet.text().unwrap_or_default()
            );
        }
    });

    // only reshares; original statuses fire `TweetOriginal` instead
    stream.on(EventName::TweetRetweet, |event| {
        let reshared = event.tweet().and_then(|tweet| tweet.retweeted_status());
        if let Some(reshared) = reshared {
            println!(
                "(retweet) of {}",
                reshared.id_str().unwrap_or_default()
            );
        }
    });

    stream.on(EventName::Favorite, |event| {
        if let Some(notification) = event.user_event() {
            println!(
                "(favorite) by @{}",
                notification.source().screen_name().unwrap_or_default()
            );
        }
    });

    stream.on(EventName::DeleteTweet, |event| {
        if let Some(deleted) = event.deleted_tweet() {
            println!("(deleted) {}", deleted.id_str().unwrap_or_default());
        }
    });

    // a panicking listener only takes down its own invocation; the fault
    // handler hears about it and the remaining listeners still run
    stream.set_fault_handler(|fault| {
        eprintln!(
            "listener for '{}' failed: {}",
            fault.event,
            fault.details.as_deref().unwrap_or("no details")
        )
    });

    // listeners can be detached again through their registration handle
    let probe = stream.on(EventName::Friends, |_| println!("(friends) preamble"));
    println!(
        "friends listeners attached: {}",
        stream.listener_count(EventName::Friends)
    );
    stream.unregister(&probe);

    stream.start().await?;

    // stopping suspends delivery but keeps the connection and the listeners;
    // a later start resumes the same connection
    let _ = stream.stop();
    stream.start().await?;

    // the filter stream is independent from the user stream and reads its
    // track list at the moment it connects
    let filter = client.filter_stream();
    filter.set_track(["rustlang".into(), "async".into()].to_vec());
    filter.on(EventName::Tweet, |event| {
        if let Some(tweet) = event.tweet() {
            println!("(filtered) {}", tweet.text().unwrap_or_default());
        }
    });
    filter.start().await?;

    // changing the keywords only affects the next connection
    filter.set_track(["tokio".into()].to_vec());
    filter.restart().await?;

    Ok(())
}
