//! # Error types
//!
//! This module contains the error types for the [`tweetkit`] crate.
//!
//! [`tweetkit`]: ../index.html

/// Tweetkit error type
///
/// This type is used to represent errors that can occur while talking to the
/// Twitter API or while dispatching stream events. It is used as the error
/// type for the [`Result`] type.
///
/// # Examples
/// ```
/// use tweetkit::core::TwitterError;
///
/// fn foo() -> Result<(), TwitterError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   TwitterError::Transport(_) => println!("Transport error"),
///   TwitterError::Api { .. } => println!("Service rejected the request"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TwitterError {
    /// this error is returned when the transport layer fails
    #[error("Transport error: {0}")]
    Transport(String),

    /// this error is returned when the service answers with an error body
    #[error("API error: {message}")]
    Api {
        /// A message explaining what went wrong.
        message: String,

        /// Twitter error code (e.g. `88` for rate limiting), when the
        /// response body carried one.
        code: Option<i64>,

        /// HTTP status of the response.
        status: Option<u16>,
    },

    /// this error is returned when the serialization of the request fails
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// this error is returned when the deserialization of the response fails
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// this error is returned when the initialization of the client fails
    #[error("Client initialization error: {0}")]
    ClientInitialization(String),

    /// this error is returned when an operation builder was given an
    /// incomplete or contradictory parameter set
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// this error is returned when a streaming connection cannot be
    /// established or signalled
    #[error("Stream error: {0}")]
    Stream(String),

    /// this error is returned when a stream surface is requested from a
    /// client that was built without a stream connector
    #[error("Stream connector is not configured")]
    MissingStreamConnector,
}

impl TwitterError {
    /// Create an [`TwitterError::Api`] instance from a plain message and an
    /// optional response status code.
    pub(crate) fn general_api_error(
        message: impl Into<String>,
        code: Option<i64>,
        status: Option<u16>,
    ) -> Self {
        Self::Api {
            message: message.into(),
            code,
            status,
        }
    }
}
