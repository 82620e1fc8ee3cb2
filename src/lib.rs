//! # Tweetkit Rust SDK
//!
//! This crate is a convenience layer over the Twitter REST and Streaming
//! APIs. It gives you two surfaces that share one client:
//!
//! * REST operations for statuses, timelines, accounts, direct messages and
//!   media uploads, each exposed as a builder on the client.
//! * Stream adapters for the user stream and the keyword-filtered public
//!   stream, which translate raw stream payloads into named events your
//!   listeners subscribe to.
//!
//! The client is transport-layer-agnostic: the bundled [`reqwest`] transport
//! covers the REST side out of the box, and anything that implements the
//! [`Transport`] or [`StreamConnector`] traits can stand in for it.
//!
//! ## Getting started
//!
//! You need a Twitter developer application with a consumer key pair and a
//! user access token pair. All four values go into [`Credentials`].
//!
//! ### Import
//!
//! ```toml
//! [dependencies]
//! tweetkit = "0.1"
//! ```
//!
//! ### Usage
//!
//! ```no_run
//! use tweetkit::{Credentials, TwitterClientBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TwitterClientBuilder::with_reqwest_transport()
//!         .with_credentials(Credentials {
//!             consumer_key: "<consumer key>",
//!             consumer_secret: "<consumer secret>",
//!             access_token: "<access token>",
//!             access_token_secret: "<access token secret>",
//!         })
//!         .build()?;
//!
//!     let tweet = client.post_tweet("tea & biscuits").execute().await?;
//!     println!("posted: {}", tweet.id_str().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! Listening on a stream works through the adapters; see
//! [`TwitterClientInstance::user_stream`] and
//! [`TwitterClientInstance::filter_stream`].
//!
//! ## Features
//!
//! The `tweetkit` crate is split into multiple features:
//!
//! * `full`: enables all non-conflicting features (default).
//! * `stream`: enables the event registry, the stream adapters and the
//!   [`StreamConnector`] boundary traits.
//! * `reqwest`: enables the [`reqwest`] implementation of the REST
//!   [`Transport`] layer.
//!
//! ## License
//!
//! This project is licensed under the MIT license.
//!
//! [`Transport`]: crate::core::Transport
//! [`StreamConnector`]: crate::core::StreamConnector
//! [`reqwest`]: https://docs.rs/reqwest

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use dx::TwitterClient;

#[doc(inline)]
pub use dx::{Credentials, TwitterClientBuilder, TwitterClientInstance, TwitterGenericClient};

pub mod core;
pub mod dx;
pub mod transport;

#[cfg(feature = "stream")]
pub mod stream {
    //! Event listeners over the Twitter streaming endpoints.
    //!
    //! Re-exports the stream surface of the [`dx`] module.
    //!
    //! [`dx`]: crate::dx

    #[doc(inline)]
    pub use crate::dx::stream::*;
}
