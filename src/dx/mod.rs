//! # Twitter Developer Experience
//!
//! This module provides a structures and methods for the [Twitter] REST and
//! streaming APIs. It is intended to be used by the [`tweetkit`] crate.
//!
//! [`tweetkit`]: ../index.html
//! [Twitter]: https://developer.twitter.com/en/docs

pub mod direct_messages;
pub mod media;
pub mod timelines;
pub mod tweets;
pub mod users;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(feature = "reqwest")]
pub use twitter_client::TwitterClient;
pub use twitter_client::{
    Credentials, TwitterClientBuilder, TwitterClientInstance, TwitterGenericClient,
};
pub mod twitter_client;
