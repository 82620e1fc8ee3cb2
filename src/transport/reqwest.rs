//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests to the [`Twitter API`] using the [`reqwest`] crate.
//! It is intended to be used by the [`tweetkit`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
//! [`reqwest`]: https://docs.rs/reqwest
//! [`tweetkit`]: ../index.html
//! [`TwitterClient`]: ../dx/twitter_client/type.TwitterClient.html
//! [`reqwest` feature]: ../index.html#features

use crate::{
    core::{
        utils::encoding::url_encode, Transport, TransportMethod, TransportRequest,
        TransportResponse, TwitterError,
    },
    dx::twitter_client::{TwitterClientBuilder, TwitterClientCredentialsBuilder},
};
use bytes::Bytes;
use log::info;
use reqwest::{header::HeaderMap, StatusCode};
use std::{collections::HashMap, time::Duration};

/// This struct is used to send requests to the [`Twitter API`] using the
/// [`reqwest`] crate.
/// It is used as the transport type for the [`TwitterClient`].
/// It is intended to be used by the [`tweetkit`] crate.
///
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
/// [`reqwest`]: https://docs.rs/reqwest
/// [`tweetkit`]: ../index.html
/// [`TwitterClient`]: ../dx/twitter_client/type.TwitterClient.html
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The hostname to use for requests.
    /// It is used as the base URL for all requests that don't address another
    /// host themselves (media uploads do).
    ///
    /// It defaults to `https://api.twitter.com`.
    /// # Examples
    /// ```
    /// use tweetkit::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://api.gateway.example.com".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TwitterError> {
        let host = request.host.as_deref().unwrap_or(&self.hostname);
        let request_url = prepare_url(host, &request.path, &request.query_parameters);
        info!("{}", request_url);
        let headers = prepare_headers(&request.headers)?;
        let timeout = request.timeout;
        let builder = match request.method {
            TransportMethod::Get => self.prepare_get_method(request, request_url),
            TransportMethod::Post => self.prepare_post_method(request, request_url),
            TransportMethod::Delete => self.prepare_delete_method(request, request_url),
        }?;
        let builder = match timeout {
            0 => builder,
            seconds => builder.timeout(Duration::from_secs(seconds)),
        };

        let result = builder
            .headers(headers)
            .send()
            .await
            .map_err(|e| TwitterError::Transport(e.to_string()))?;

        let status = result.status();
        result
            .bytes()
            .await
            .map_err(|e| TwitterError::Transport(e.to_string()))
            .and_then(|bytes| create_result(status, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            hostname: "https://api.twitter.com".into(),
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    /// It is used as the transport type for the [`TwitterClient`].
    /// It is intended to be used by the [`tweetkit`] crate.
    /// It is used by the [`TwitterClientBuilder`] to create a [`TwitterClient`].
    ///
    /// It provides a default [`reqwest`] client using [`reqwest::Client::default()`]
    /// and a default hostname of `https://api.twitter.com`.
    ///
    /// # Example
    /// ```
    /// use tweetkit::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    ///
    /// ```
    ///
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    /// [`TwitterClient`]: ../dx/twitter_client/type.TwitterClient.html
    /// [`tweetkit`]: ../index.html
    /// [`TwitterClientBuilder`]: ../dx/twitter_client/struct.TwitterClientBuilder.html
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }

    fn prepare_get_method(
        &self,
        _request: TransportRequest,
        url: String,
    ) -> Result<reqwest::RequestBuilder, TwitterError> {
        Ok(self.reqwest_client.get(url))
    }

    fn prepare_post_method(
        &self,
        request: TransportRequest,
        url: String,
    ) -> Result<reqwest::RequestBuilder, TwitterError> {
        // Some POST endpoints (retweets, status removal) carry all of their
        // input in the path, so an absent body stays absent.
        let builder = self.reqwest_client.post(url);

        Ok(match request.body {
            Some(body) => builder.body(body),
            None => builder,
        })
    }

    fn prepare_delete_method(
        &self,
        _request: TransportRequest,
        url: String,
    ) -> Result<reqwest::RequestBuilder, TwitterError> {
        Ok(self.reqwest_client.delete(url))
    }
}

fn prepare_headers(request_headers: &HashMap<String, String>) -> Result<HeaderMap, TwitterError> {
    HeaderMap::try_from(request_headers).map_err(|err| TwitterError::Transport(err.to_string()))
}

fn prepare_url(hostname: &str, path: &str, query_params: &HashMap<String, String>) -> String {
    if query_params.is_empty() {
        return format!("{}{}", hostname, path);
    }
    let mut qp = query_params
        .iter()
        .fold(format!("{}{}?", hostname, path), |acc_query, (k, v)| {
            format!("{}{}={}&", acc_query, k, url_encode(v.as_bytes()))
        });

    qp.remove(qp.len() - 1);
    qp
}

fn create_result(status: StatusCode, body: Bytes) -> Result<TransportResponse, TwitterError> {
    Ok(TransportResponse {
        status: status.as_u16(),
        body: (!body.is_empty()).then(|| body.to_vec()),
        ..Default::default()
    })
}

impl TwitterClientBuilder {
    /// Creates a new [`TwitterClientCredentialsBuilder`] with the default
    /// [`TransportReqwest`] transport.
    /// The default transport uses the [`reqwest`] crate to send requests to the
    /// [`Twitter API`].
    /// The default hostname is `https://api.twitter.com`.
    /// The default [`reqwest`] client is created using [`reqwest::Client::default()`].
    ///
    /// # Examples
    /// ```
    /// use tweetkit::{Credentials, TwitterClientBuilder};
    ///
    /// # fn main() -> Result<(), tweetkit::core::TwitterError> {
    /// let client = TwitterClientBuilder::with_reqwest_transport()
    ///     .with_credentials(Credentials {
    ///         consumer_key: "my-consumer-key",
    ///         consumer_secret: "my-consumer-secret",
    ///         access_token: "my-access-token",
    ///         access_token_secret: "my-access-token-secret",
    ///     })
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`TwitterClientCredentialsBuilder`]: ../dx/twitter_client/struct.TwitterClientCredentialsBuilder.html
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    /// [`reqwest`]: https://docs.rs/reqwest
    /// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
    /// [`TwitterClient`]: ../dx/twitter_client/type.TwitterClient.html
    pub fn with_reqwest_transport() -> TwitterClientCredentialsBuilder<TransportReqwest> {
        TwitterClientCredentialsBuilder {
            transport: TransportReqwest::new(),
        }
    }
}
