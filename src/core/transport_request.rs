//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! The [`TransportRequest`] struct is used to represent a request to be sent
//! to the [`Twitter API`]. It is used as the request type for the
//! [`Transport`] trait.
//!
//! [`Transport`]: ../transport/trait.Transport.html
//! [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index

use std::{collections::HashMap, fmt::Display};

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
///
/// [`TransportRequest`]: struct.TransportRequest.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub enum TransportMethod {
    /// The GET method.
    #[default]
    Get,

    /// The POST method.
    Post,

    /// The DELETE method.
    ///
    /// Used by the handful of endpoints that remove a resource through an
    /// HTTP DELETE (e.g. direct message removal).
    Delete,
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMethod::Get => "GET",
                TransportMethod::Post => "POST",
                TransportMethod::Delete => "DELETE",
            }
        )
    }
}

/// This struct is used to represent a request to be sent to the
/// [`Twitter API`]. It is used as the request type for the [`Transport`]
/// trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
/// [`Twitter API`]: https://developer.twitter.com/en/docs/api-reference-index
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportRequest {
    /// path to the resource, e.g. `/1.1/statuses/update.json`
    pub path: String,

    /// query parameters to be sent with the request
    pub query_parameters: HashMap<String, String>,

    /// method to use for the request
    pub method: TransportMethod,

    /// headers to be sent with the request
    pub headers: HashMap<String, String>,

    /// body to be sent with the request
    pub body: Option<Vec<u8>>,

    /// for how long (in seconds) the transport should wait for a response
    ///
    /// Zero disables the per-request timeout.
    pub timeout: u64,

    /// host to send the request to instead of the transport's default
    ///
    /// Almost every endpoint lives on the API host, but media uploads go to
    /// a dedicated upload host; operations targeting it set this field.
    pub host: Option<String>,
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case(TransportMethod::Get, "GET" ; "get method")]
    #[test_case(TransportMethod::Post, "POST" ; "post method")]
    #[test_case(TransportMethod::Delete, "DELETE" ; "delete method")]
    fn display_method_name(method: TransportMethod, expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[test]
    fn default_to_get_without_host_override() {
        let request = TransportRequest::default();

        assert_eq!(request.method, TransportMethod::Get);
        assert!(request.host.is_none());
    }
}
