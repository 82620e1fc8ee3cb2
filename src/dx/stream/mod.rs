//! Stream module.
//!
//! Allows to consume the Twitter streaming endpoints through event listeners
//! attached to the [`UserStream`] and [`FilterStream`] adapters.

use spin::RwLock;
use std::{collections::HashMap, sync::Arc};

use crate::{
    core::{
        DataStream, StreamConnector, StreamEndpoint, StreamRequest, TwitterError,
    },
    dx::twitter_client::TwitterClientInstance,
};

use binding::StreamBinding;
mod binding;

#[doc(inline)]
pub use registry::{EventRegistry, FaultHandler, Listener, ListenerFault, ListenerHandle};
pub mod registry;

#[doc(inline)]
pub use types::{EventName, StreamEvent};
pub mod types;

/// Adapter for the authenticated account's user stream.
///
/// Listeners attached to the adapter survive the connection: stopping the
/// stream suspends delivery while keeping both the connection and the
/// listeners in place, and a later [`start`] resumes where delivery left
/// off.
///
/// [`start`]: UserStream::start
#[derive(Debug)]
pub struct UserStream {
    binding: Arc<StreamBinding>,
}

impl UserStream {
    pub(crate) fn new(connector: Option<Arc<dyn StreamConnector + Send + Sync>>) -> Self {
        Self {
            binding: Arc::new(StreamBinding::new(connector)),
        }
    }

    /// Attach `listener` to `event`.
    ///
    /// Listeners fire in the order they were attached, after the catch-all
    /// and more generic events of the same stream message. Attaching the
    /// same listener twice makes it fire twice.
    pub fn on<F>(&self, event: EventName, listener: F) -> ListenerHandle
    where
        F: Fn(&StreamEvent) + Send + Sync + 'static,
    {
        self.binding.registry.register(event, Arc::new(listener))
    }

    /// Detach the listener attached with [`on`].
    ///
    /// Returns whether the listener was still attached. The event itself
    /// stays known to the adapter.
    ///
    /// [`on`]: UserStream::on
    pub fn unregister(&self, handle: &ListenerHandle) -> bool {
        self.binding.registry.remove(handle)
    }

    /// Number of listeners currently attached to `event`.
    pub fn listener_count(&self, event: EventName) -> usize {
        self.binding.registry.listener_count(event)
    }

    /// Replace the handler notified when one of the listeners panics.
    pub fn set_fault_handler<F>(&self, handler: F)
    where
        F: Fn(&ListenerFault) + Send + Sync + 'static,
    {
        self.binding.registry.set_fault_handler(Arc::new(handler))
    }

    /// Stream of every `(event name, payload)` pair fired by the adapter.
    pub fn event_stream(&self) -> DataStream<(EventName, StreamEvent)> {
        self.binding.event_stream()
    }

    /// Connect the user stream, or resume it after [`stop`].
    ///
    /// # Errors
    /// Returns [`TwitterError::MissingStreamConnector`] when the client was
    /// built without a stream connector, or the error the connector reports
    /// for the failed connection attempt.
    ///
    /// [`stop`]: UserStream::stop
    pub async fn start(&self) -> Result<(), TwitterError> {
        self.binding
            .start(StreamRequest {
                endpoint: StreamEndpoint::User,
                query_parameters: HashMap::new(),
            })
            .await
    }

    /// Suspend delivery while keeping the connection bound.
    ///
    /// Returns [`None`] when the stream was never started.
    pub fn stop(&self) -> Option<()> {
        self.binding.pause()
    }
}

/// Adapter for the keyword-filtered public stream.
///
/// The track list is read once, at the moment the connection is
/// established; to apply changes made while connected use [`restart`].
/// Unlike the user stream adapter, [`stop`] drops the connection, so the
/// next [`start`] connects anew.
///
/// [`restart`]: FilterStream::restart
/// [`start`]: FilterStream::start
/// [`stop`]: FilterStream::stop
#[derive(Debug)]
pub struct FilterStream {
    binding: Arc<StreamBinding>,
    tracks: RwLock<Vec<String>>,
}

impl FilterStream {
    pub(crate) fn new(connector: Option<Arc<dyn StreamConnector + Send + Sync>>) -> Self {
        Self {
            binding: Arc::new(StreamBinding::new(connector)),
            tracks: RwLock::new(Vec::new()),
        }
    }

    /// Attach `listener` to `event`.
    ///
    /// Listeners fire in the order they were attached, after the catch-all
    /// and more generic events of the same stream message.
    pub fn on<F>(&self, event: EventName, listener: F) -> ListenerHandle
    where
        F: Fn(&StreamEvent) + Send + Sync + 'static,
    {
        self.binding.registry.register(event, Arc::new(listener))
    }

    /// Detach the listener attached with [`on`].
    ///
    /// [`on`]: FilterStream::on
    pub fn unregister(&self, handle: &ListenerHandle) -> bool {
        self.binding.registry.remove(handle)
    }

    /// Number of listeners currently attached to `event`.
    pub fn listener_count(&self, event: EventName) -> usize {
        self.binding.registry.listener_count(event)
    }

    /// Replace the handler notified when one of the listeners panics.
    pub fn set_fault_handler<F>(&self, handler: F)
    where
        F: Fn(&ListenerFault) + Send + Sync + 'static,
    {
        self.binding.registry.set_fault_handler(Arc::new(handler))
    }

    /// Stream of every `(event name, payload)` pair fired by the adapter.
    pub fn event_stream(&self) -> DataStream<(EventName, StreamEvent)> {
        self.binding.event_stream()
    }

    /// Replace the tracked keyword list.
    ///
    /// Takes effect on the next connection; an established connection keeps
    /// the list it was started with.
    pub fn set_track(&self, keywords: Vec<String>) {
        *self.tracks.write() = keywords;
    }

    /// Keyword list the next connection will track.
    pub fn track(&self) -> Vec<String> {
        self.tracks.read().clone()
    }

    /// Connect the filter stream with the current track list.
    ///
    /// # Errors
    /// Returns [`TwitterError::MissingStreamConnector`] when the client was
    /// built without a stream connector, or the error the connector reports
    /// for the failed connection attempt.
    pub async fn start(&self) -> Result<(), TwitterError> {
        self.binding.start(self.connection_request()).await
    }

    /// Stop and drop the connection, keeping the listeners attached.
    ///
    /// Returns [`None`] when the stream was never started.
    pub fn stop(&self) -> Option<()> {
        self.binding.disconnect()
    }

    /// Reconnect with the current track list.
    ///
    /// # Errors
    /// Same as [`start`].
    ///
    /// [`start`]: FilterStream::start
    pub async fn restart(&self) -> Result<(), TwitterError> {
        let _ = self.stop();
        self.start().await
    }

    fn connection_request(&self) -> StreamRequest {
        let tracks = self.tracks.read();
        let mut query_parameters = HashMap::new();

        if !tracks.is_empty() {
            query_parameters.insert("track".into(), tracks.join(","));
        }

        StreamRequest {
            endpoint: StreamEndpoint::Filter,
            query_parameters,
        }
    }
}

impl<T> TwitterClientInstance<T> {
    /// Adapter for the authenticated account's user stream.
    ///
    /// Created on first access and shared by every caller of this client,
    /// together with its listeners.
    ///
    /// # Example
    /// ```no_run
    /// use tweetkit::{stream::EventName, Credentials, TwitterClientBuilder};
    /// # use tweetkit::core::{
    /// #     MessageHandler, StreamConnection, StreamConnector, StreamRequest, TwitterError,
    /// # };
    /// # #[derive(Debug)]
    /// # struct MyConnection;
    /// # impl StreamConnection for MyConnection {
    /// #     fn start(&self) -> Result<(), TwitterError> {
    /// #         Ok(())
    /// #     }
    /// #     fn stop(&self) {}
    /// # }
    /// # #[derive(Debug)]
    /// # struct MyConnector;
    /// # #[async_trait::async_trait]
    /// # impl StreamConnector for MyConnector {
    /// #     async fn connect(
    /// #         &self,
    /// #         _request: StreamRequest,
    /// #         _handler: MessageHandler,
    /// #     ) -> Result<Box<dyn StreamConnection>, TwitterError> {
    /// #         Ok(Box::new(MyConnection))
    /// #     }
    /// # }
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TwitterClientBuilder::with_reqwest_transport()
    ///         .with_credentials(Credentials {
    ///             consumer_key: "<consumer key>",
    ///             consumer_secret: "<consumer secret>",
    ///             access_token: "<access token>",
    ///             access_token_secret: "<access token secret>",
    ///         })
    ///         .with_stream_connector(MyConnector)
    ///         .build()?;
    ///
    ///     let stream = client.user_stream();
    ///     stream.on(EventName::Tweet, |event| {
    ///         if let Some(tweet) = event.tweet() {
    ///             println!("{}", tweet.text().unwrap_or_default());
    ///         }
    ///     });
    ///     stream.start().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn user_stream(&self) -> Arc<UserStream> {
        {
            let slot = self.user_stream.read();
            if let Some(stream) = slot.as_ref() {
                return stream.clone();
            }
        }

        let mut slot = self.user_stream.write();
        slot.get_or_insert_with(|| Arc::new(UserStream::new(self.stream_connector.clone())))
            .clone()
    }

    /// Adapter for the keyword-filtered public stream.
    ///
    /// Created on first access and shared by every caller of this client.
    /// Independent from the user stream adapter: each owns its listeners.
    pub fn filter_stream(&self) -> Arc<FilterStream> {
        {
            let slot = self.filter_stream.read();
            if let Some(stream) = slot.as_ref() {
                return stream.clone();
            }
        }

        let mut slot = self.filter_stream.write();
        slot.get_or_insert_with(|| Arc::new(FilterStream::new(self.stream_connector.clone())))
            .clone()
    }
}
