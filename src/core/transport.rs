//! # Transport module
//!
//! This module contains the [`Transport`] trait.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.
//!
//! [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index

use super::{transport_response::TransportResponse, TransportRequest, TwitterError};

/// This trait is used to send requests to the [`Twitter API`].
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library. Auth signing belongs to the
/// implementor: the request it receives is exactly the request the operation
/// built.
///
/// # Examples
/// ```
/// use tweetkit::core::{Transport, TransportRequest, TransportResponse, TwitterError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, TwitterError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
///
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the [`Twitter API`].
    ///
    /// # Errors
    /// Should return an [`TwitterError::Transport`] if the request cannot be
    /// sent.
    ///
    /// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, TwitterError>;
}
