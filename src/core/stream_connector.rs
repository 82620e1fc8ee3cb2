//! # Stream connector module
//!
//! This module contains the [`StreamConnector`] and [`StreamConnection`]
//! traits: the boundary to the external streaming client.
//!
//! The crate ships no network implementation of these traits; the streaming
//! wire protocol belongs to the external client. Implement them over the
//! streaming library of your choice and hand the connector to the client
//! builder; the adapters drive it through exactly this surface.

use crate::core::{StreamMessage, StreamRequest, TwitterError};
use std::{fmt::Debug, sync::Arc};

/// Handler invoked by a [`StreamConnection`] for every message it delivers.
///
/// Bound once, at connect time; connections are never re-subscribed.
pub type MessageHandler = Arc<dyn Fn(StreamMessage) + Send + Sync>;

/// An established streaming connection.
///
/// A connection begins delivering messages as soon as it is created by
/// [`StreamConnector::connect`]. `start` and `stop` signal the connection to
/// resume and pause delivery; reconnects, backoff and keep-alive handling
/// stay inside the implementation and are surfaced only as the lifecycle
/// messages it delivers.
pub trait StreamConnection: Debug + Send + Sync {
    /// Resume (or restart) delivery on this connection.
    ///
    /// # Errors
    /// Should return an [`TwitterError::Stream`] if the connection can no
    /// longer be resumed.
    fn start(&self) -> Result<(), TwitterError>;

    /// Pause delivery on this connection.
    fn stop(&self);
}

/// This trait is used to establish streaming connections.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use tweetkit::core::{
///     MessageHandler, StreamConnection, StreamConnector, StreamRequest, TwitterError,
/// };
///
/// #[derive(Debug)]
/// struct MyConnection;
///
/// impl StreamConnection for MyConnection {
///     fn start(&self) -> Result<(), TwitterError> {
///         Ok(())
///     }
///
///     fn stop(&self) {}
/// }
///
/// #[derive(Debug)]
/// struct MyConnector;
///
/// #[async_trait::async_trait]
/// impl StreamConnector for MyConnector {
///     async fn connect(
///         &self,
///         _request: StreamRequest,
///         _handler: MessageHandler,
///     ) -> Result<Box<dyn StreamConnection>, TwitterError> {
///         // Open your connection here and deliver messages through the handler
///
///         Ok(Box::new(MyConnection))
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait StreamConnector: Debug + Send + Sync {
    /// Establish a streaming connection for `request` and bind `handler` as
    /// its one message sink.
    ///
    /// The returned connection is live: delivery starts without a separate
    /// `start` call.
    ///
    /// # Errors
    /// Should return an [`TwitterError::Stream`] if the connection cannot be
    /// established.
    async fn connect(
        &self,
        request: StreamRequest,
        handler: MessageHandler,
    ) -> Result<Box<dyn StreamConnection>, TwitterError>;
}
