//! # Stream Request
//!
//! This module contains the `StreamRequest` struct and related types.
//!
//! The [`StreamRequest`] struct describes the streaming connection a
//! [`StreamConnector`] is asked to establish. It is the streaming counterpart
//! of [`TransportRequest`].
//!
//! [`StreamConnector`]: ../stream_connector/trait.StreamConnector.html
//! [`TransportRequest`]: ../transport_request/struct.TransportRequest.html

use std::{collections::HashMap, fmt::Display};

/// The streaming endpoint a connection is bound to.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum StreamEndpoint {
    /// The unfiltered home/user stream of the authenticated account.
    #[default]
    User,

    /// The keyword-filtered public stream.
    Filter,
}

impl Display for StreamEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StreamEndpoint::User => "user",
                StreamEndpoint::Filter => "filter",
            }
        )
    }
}

/// This struct describes the streaming connection a [`StreamConnector`] is
/// asked to establish.
///
/// The query parameters carry everything the endpoint is parameterized with;
/// for the filter endpoint that is the comma-joined `track` keyword list,
/// captured at the moment the connection is established.
///
/// [`StreamConnector`]: ../stream_connector/trait.StreamConnector.html
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamRequest {
    /// endpoint to bind the connection to
    pub endpoint: StreamEndpoint,

    /// query parameters of the connection, e.g. `track`
    pub query_parameters: HashMap<String, String>,
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn display_endpoint_name() {
        assert_eq!(StreamEndpoint::User.to_string(), "user");
        assert_eq!(StreamEndpoint::Filter.to_string(), "filter");
    }

    #[test]
    fn default_to_user_endpoint() {
        assert_eq!(StreamRequest::default().endpoint, StreamEndpoint::User);
    }
}
