//! Twitter client module
//!
//! This module contains the [`TwitterClient`] struct.
//! It's used to send requests to the [`Twitter API`].
//! It's intended to be used by the [`tweetkit`] crate.
//!
//! [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
//! [`tweetkit`]: ../index.html

use derive_builder::Builder;
use log::info;
use uuid::Uuid;

use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

#[cfg(feature = "stream")]
use spin::RwLock;

#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

#[cfg(feature = "stream")]
use crate::{
    core::StreamConnector,
    dx::stream::{FilterStream, UserStream},
};

use crate::{core::TwitterError, transport::middleware::TwitterMiddleware};

/// SDK identifier used in the default `User-Agent` header value.
pub(crate) const SDK_ID: &str = "tweetkit-rust";

/// Crate version used in the default `User-Agent` header value.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Twitter client
///
/// Client for the [`Twitter API`] with support for all [`selected`] features.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// You can create clients using the [`TwitterClientBuilder::with_transport`]
/// method.
/// You must provide a valid [`Credentials`] set with the application key pair
/// and the user token pair to identify the client.
///
/// To see available methods, please refer to the [`TwitterClientInstance`]
/// documentation.
///
/// # Examples
/// ```
/// use tweetkit::{Credentials, TwitterClientBuilder};
///
/// // note that `with_reqwest_transport` requires `reqwest` feature
/// // to be enabled (default)
/// # fn main() -> Result<(), tweetkit::core::TwitterError> {
/// let twitter = TwitterClientBuilder::with_reqwest_transport()
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
/// Using your own [`Transport`] implementation:
///
/// ```
/// use tweetkit::{Credentials, TwitterClientBuilder};
///
/// # use tweetkit::core::{Transport, TransportRequest, TransportResponse, TwitterError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TwitterError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # impl MyTransport {
/// #     fn new() -> Self {
/// #         Self
/// #     }
/// # }
///
/// # fn main() -> Result<(), TwitterError> {
/// // note that MyTransport must implement the `Transport` trait
/// let transport = MyTransport::new();
///
/// let twitter = TwitterClientBuilder::with_transport(transport)
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
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. You don't need to
/// wrap it in `Arc` or `Mutex` because it is already wrapped in `Arc` and uses
/// interior mutability for its internal state.
///
/// # See also
/// [`Credentials`]
/// [`Transport`]
///
/// [`selected`]: ../index.html#features
/// [`Transport`]: ../core/trait.Transport.html
/// [`Credentials`]: struct.Credentials.html
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
/// [`TwitterClientBuilder::with_transport`]: struct.TwitterClientBuilder.html#method.with_transport
pub type TwitterGenericClient<T> = TwitterClientInstance<TwitterMiddleware<T>>;

/// Twitter client
///
/// Client for the [`Twitter API`] with support for all [`selected`] features.
/// The client uses [`reqwest`] as a transport layer.
///
/// You can create clients using the
/// [`TwitterClientBuilder::with_reqwest_transport`] method.
/// You must provide a valid [`Credentials`] set with the application key pair
/// and the user token pair to identify the client.
///
/// To see available methods, please refer to the [`TwitterClientInstance`]
/// documentation.
///
/// # Examples
/// ```
/// use tweetkit::{Credentials, TwitterClientBuilder};
///
/// // note that `with_reqwest_transport` requires `reqwest` feature
/// // to be enabled (default)
/// # fn main() -> Result<(), tweetkit::core::TwitterError> {
/// let twitter = TwitterClientBuilder::with_reqwest_transport()
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
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. You don't need to
/// wrap it in `Arc` or `Mutex` because it is already wrapped in `Arc` and uses
/// interior mutability for its internal state.
///
/// # See also
/// [Credentials](struct.Credentials.html)
/// [Transport](../core/trait.Transport.html)
///
/// [`selected`]: ../index.html#features
/// [`Credentials`]: struct.Credentials.html
/// [`reqwest`]: https://crates.io/crates/reqwest
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
/// [`TwitterClientBuilder::with_reqwest_transport`]: struct.TwitterClientBuilder.html#method.with_reqwest_transport
#[cfg(feature = "reqwest")]
pub type TwitterClient = TwitterGenericClient<TransportReqwest>;

/// Twitter client raw instance.
///
/// This struct contains the actual client state.
/// It shouldn't be used directly. Use [`TwitterGenericClient`] or
/// [`TwitterClient`] instead.
#[derive(Debug)]
pub struct TwitterClientInstance<T> {
    pub(crate) inner: Arc<TwitterClientRef<T>>,
}

impl<T> Deref for TwitterClientInstance<T> {
    type Target = TwitterClientRef<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TwitterClientInstance<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        Arc::get_mut(&mut self.inner)
            .expect("Multiple mutable references to TwitterClientInstance are not allowed")
    }
}

impl<T> Clone for TwitterClientInstance<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`TwitterClient`] and uses interior mutability for
/// its internal state.
///
/// Not intended to be used directly. Use [`TwitterClient`] instead.
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "TwitterClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct TwitterClientRef<T> {
    /// Transport layer
    pub(crate) transport: T,

    /// Instance ID
    #[builder(
        setter(into),
        field(type = "String", build = "Arc::new(Some(Uuid::new_v4().to_string()))")
    )]
    pub(crate) instance_id: Arc<Option<String>>,

    /// Configuration
    pub(crate) config: TwitterConfig,

    /// Streaming connection factory.
    ///
    /// Connector used by the client when the [`UserStream`] and
    /// [`FilterStream`] adapters open their live connections.
    #[cfg(feature = "stream")]
    #[builder(
        setter(custom, strip_option),
        field(vis = "pub(crate)"),
        default = "None"
    )]
    pub(crate) stream_connector: Option<Arc<dyn StreamConnector + Send + Sync>>,

    /// User stream adapter.
    ///
    /// > **Important**: Use `.user_stream()` to access it instead of field.
    #[cfg(feature = "stream")]
    #[builder(setter(skip), field(vis = "pub(crate)"))]
    pub(crate) user_stream: Arc<RwLock<Option<Arc<UserStream>>>>,

    /// Filter stream adapter.
    ///
    /// > **Important**: Use `.filter_stream()` to access it instead of field.
    #[cfg(feature = "stream")]
    #[builder(setter(skip), field(vis = "pub(crate)"))]
    pub(crate) filter_stream: Arc<RwLock<Option<Arc<FilterStream>>>>,
}

impl<T> TwitterClientConfigBuilder<T> {
    /// Requests processing timeout.
    ///
    /// For how long (in seconds) the transport should wait for a response
    /// before giving up on a request. Zero disables the per-request timeout.
    ///
    /// It returns [`TwitterClientConfigBuilder`] that you can use to set the
    /// configuration for the client. This is a part of the
    /// [`TwitterClientConfigBuilder`].
    pub fn with_request_timeout(mut self, timeout: u64) -> Self {
        if let Some(configuration) = self.config.as_mut() {
            configuration.request_timeout = timeout;
        }

        self
    }

    /// `User-Agent` header value.
    ///
    /// Value which will be sent with every request in the `User-Agent`
    /// header.
    ///
    /// It returns [`TwitterClientConfigBuilder`] that you can use to set the
    /// configuration for the client. This is a part of the
    /// [`TwitterClientConfigBuilder`].
    pub fn with_user_agent<S>(mut self, user_agent: S) -> Self
    where
        S: Into<String>,
    {
        if let Some(configuration) = self.config.as_mut() {
            configuration.user_agent = user_agent.into();
        }

        self
    }

    /// Streaming connection factory.
    ///
    /// Connector used by the client when the user and filter stream adapters
    /// open their live connections.
    ///
    /// It returns [`TwitterClientConfigBuilder`] that you can use to set the
    /// configuration for the client. This is a part of the
    /// [`TwitterClientConfigBuilder`].
    #[cfg(feature = "stream")]
    pub fn with_stream_connector<C>(mut self, connector: C) -> Self
    where
        C: StreamConnector + Send + Sync + 'static,
    {
        self.stream_connector = Some(Some(Arc::new(connector)));

        self
    }

    /// Build a [`TwitterClient`] from the builder
    pub fn build(self) -> Result<TwitterClientInstance<TwitterMiddleware<T>>, TwitterError> {
        self.build_internal()
            .map_err(|err| TwitterError::ClientInitialization(err.to_string()))
            .map(|pre_build| {
                info!(
                    "Client Configuration: \n consumer_key: {}\n user_agent: {}\n instance_id: {:?}",
                    pre_build.config.credentials.consumer_key,
                    pre_build.config.user_agent,
                    pre_build.instance_id
                );

                TwitterClientRef {
                    transport: TwitterMiddleware {
                        transport: pre_build.transport,
                        user_agent: pre_build.config.user_agent.clone(),
                        instance_id: pre_build.instance_id.clone(),
                    },
                    instance_id: pre_build.instance_id,
                    config: pre_build.config,

                    #[cfg(feature = "stream")]
                    stream_connector: pre_build.stream_connector.clone(),

                    #[cfg(feature = "stream")]
                    user_stream: Arc::new(RwLock::new(None)),

                    #[cfg(feature = "stream")]
                    filter_stream: Arc::new(RwLock::new(None)),
                }
            })
            .map(|client| TwitterClientInstance {
                inner: Arc::new(client),
            })
    }
}

/// Twitter configuration
///
/// Configuration for [`TwitterClient`].
/// This struct separates the configuration from the actual client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterConfig {
    /// API credentials.
    pub(crate) credentials: Credentials<String>,

    /// For how long (in seconds) the transport should wait for a response
    /// before giving up on a request.
    ///
    /// Zero disables the per-request timeout.
    pub request_timeout: u64,

    /// `User-Agent` header value sent with every request.
    pub user_agent: String,
}

/// Twitter builder for [`TwitterClient`]
///
/// Builder for [`TwitterClient`] that is a first step to create a client.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// The builder provides methods to set the transport layer and returns the
/// next step of the builder with the remaining parameters.
///
/// See [`TwitterClient`] for more information.
///
/// [`Transport`]: ../core/trait.Transport.html
#[derive(Debug, Clone)]
pub struct TwitterClientBuilder;

impl TwitterClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// Returns [`TwitterClientCredentialsBuilder`] where the API credentials
    /// used to authorize against the [`Twitter API`] can be set.
    ///
    /// # Examples
    /// ```
    /// # use tweetkit::core::{Transport, TransportRequest, TransportResponse, TwitterError};
    /// use tweetkit::{Credentials, TwitterClientBuilder};
    /// #
    /// # struct MyTransport;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MyTransport {
    /// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TwitterError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    /// # impl MyTransport {
    /// #     fn new() -> Self {
    /// #         Self
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // note that MyTransport must implement the `Transport` trait
    /// let transport = MyTransport::new();
    ///
    /// let twitter = TwitterClientBuilder::with_transport(transport)
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
    /// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
    pub fn with_transport<T>(transport: T) -> TwitterClientCredentialsBuilder<T>
    where
        T: crate::core::Transport,
    {
        TwitterClientCredentialsBuilder { transport }
    }
}

/// Twitter builder for [`TwitterClient`] to set API credentials.
///
/// The builder provides a method to set the [`Twitter API`] credentials and
/// returns the next step of the builder with the remaining parameters.
///
/// See [`TwitterClient`] for more information.
///
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
#[derive(Debug, Clone)]
pub struct TwitterClientCredentialsBuilder<T> {
    /// Transport layer.
    pub(crate) transport: T,
}

impl<T> TwitterClientCredentialsBuilder<T> {
    /// Set credentials for the client.
    ///
    /// It returns [`TwitterClientConfigBuilder`] that you can use
    /// to set the configuration for the client. This is a part
    /// the TwitterClientConfigBuilder.
    ///
    /// See [`Credentials`] for more information.
    ///
    /// # Examples
    /// ```
    /// use tweetkit::{Credentials, TwitterClientBuilder};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // note that with_reqwest_transport is only available when
    /// // the `reqwest` feature is enabled (default)
    /// let builder = TwitterClientBuilder::with_reqwest_transport()
    ///     .with_credentials(Credentials {
    ///         consumer_key: "my-consumer-key",
    ///         consumer_secret: "my-consumer-secret",
    ///         access_token: "my-access-token",
    ///         access_token_secret: "my-access-token-secret",
    ///     });
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`TwitterClientConfigBuilder`]: struct.TwitterClientConfigBuilder.html
    /// [`Credentials`]: struct.Credentials.html
    pub fn with_credentials<S>(self, credentials: Credentials<S>) -> TwitterClientConfigBuilder<T>
    where
        S: Into<String>,
    {
        TwitterClientConfigBuilder {
            transport: Some(self.transport),
            config: Some(TwitterConfig {
                credentials: Credentials {
                    consumer_key: credentials.consumer_key.into(),
                    consumer_secret: credentials.consumer_secret.into(),
                    access_token: credentials.access_token.into(),
                    access_token_secret: credentials.access_token_secret.into(),
                },
                request_timeout: 60,
                user_agent: format!("{}/{}", SDK_ID, VERSION),
            }),
            ..Default::default()
        }
    }
}

/// Credentials for the Twitter client
///
/// The [`Twitter API`] authorizes requests with an application key pair and a
/// user token pair; all four values are required.
///
/// The client doesn't run the authorization dance itself: request signing
/// belongs to the [`Transport`] implementation which talks to the live API.
/// Credentials are kept in the client configuration so an application has one
/// place to thread them from.
///
/// # Examples
/// ```
/// use tweetkit::Credentials;
///
/// Credentials {
///     consumer_key: "my-consumer-key",
///     consumer_secret: "my-consumer-secret",
///     access_token: "my-access-token",
///     access_token_secret: "my-access-token-secret",
/// };
/// ```
///
/// [`Transport`]: ../core/trait.Transport.html
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Credentials<S>
where
    S: Into<String>,
{
    /// Application consumer key
    pub consumer_key: S,

    /// Application consumer secret
    pub consumer_secret: S,

    /// User access token
    pub access_token: S,

    /// User access token secret
    pub access_token_secret: S,
}
