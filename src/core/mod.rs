//! # Tweetkit Core
//!
//! Core functionality of the Twitter client.
//!
//! The `core` module contains the transport and streaming boundaries of the
//! Twitter client together with the payload views shared by every API
//! operation. It is intended to be used by the [`tweetkit`] crate.
//!
//! [`tweetkit`]: ../index.html

pub use error::TwitterError;
pub mod error;

pub(crate) mod error_response;

pub use transport::Transport;
pub mod transport;

pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

#[cfg(feature = "stream")]
pub use stream_request::{StreamEndpoint, StreamRequest};
#[cfg(feature = "stream")]
pub mod stream_request;

#[cfg(feature = "stream")]
pub use stream_message::StreamMessage;
#[cfg(feature = "stream")]
pub mod stream_message;

#[cfg(feature = "stream")]
pub use stream_connector::{MessageHandler, StreamConnection, StreamConnector};
#[cfg(feature = "stream")]
pub mod stream_connector;

#[cfg(feature = "stream")]
pub use data_stream::DataStream;
#[cfg(feature = "stream")]
pub mod data_stream;

pub mod views;

pub(crate) mod utils;
