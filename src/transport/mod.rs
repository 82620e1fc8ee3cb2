//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by
//! [`TwitterClient`].
//! It is intended to be used by the [`tweetkit`] crate.
//!
//! [`TwitterClient`]: ../dx/twitter_client/type.TwitterClient.html
//! [`tweetkit`]: ../index.html

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

pub mod middleware;
