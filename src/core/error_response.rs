//! # Error response
//!
//! The module contains the parsed service error response shapes and the one
//! helper through which every REST operation routes its response before
//! touching the body. Keeping the status check and error-body parsing in a
//! single place means no operation can wire its own error path differently.

use crate::core::{TransportResponse, TwitterError};
use serde_json::Value;

/// Error description.
///
/// One entry of the `errors` list the service attaches to most rejected
/// requests.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorObject {
    /// Service-defined error code (e.g. `88` for "Rate limit exceeded").
    pub code: Option<i64>,

    /// A message explaining what went wrong.
    pub message: String,
}

/// Twitter service error response.
///
/// `ErrorResponseBody` enum variants cover the error body shapes the Twitter
/// API is known to answer with.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorResponseBody {
    /// Error response in format of a list of coded errors.
    ///
    /// # Example
    /// ```json
    /// {"errors":[{"code":34,"message":"Sorry, that page does not exist."}]}
    /// ```
    AsErrorList {
        /// Reported errors, most specific first.
        errors: Vec<ErrorObject>,
    },

    /// Error response echoing the request path.
    ///
    /// # Example
    /// ```json
    /// {"request":"/1.1/statuses/update.json","error":"Status is a duplicate."}
    /// ```
    AsRequestAndError {
        /// Path of the request the error belongs to.
        request: String,

        /// A message explaining what went wrong.
        error: String,
    },

    /// Error response in format of a bare message.
    ///
    /// # Example
    /// ```json
    /// {"error":"Not authorized."}
    /// ```
    AsErrorMessage {
        /// A message explaining what went wrong.
        error: String,
    },
}

impl ErrorResponseBody {
    /// Convert a parsed error body into [`TwitterError::Api`], attaching the
    /// HTTP status of the response it was read from.
    pub(crate) fn into_error(self, status: u16) -> TwitterError {
        match self {
            Self::AsErrorList { errors } => {
                let code = errors.first().and_then(|error| error.code);
                let message = if errors.is_empty() {
                    "Service error".into()
                } else {
                    errors
                        .iter()
                        .map(|error| error.message.as_str())
                        .collect::<Vec<_>>()
                        .join("; ")
                };
                TwitterError::general_api_error(message, code, Some(status))
            }
            Self::AsRequestAndError { request, error } => TwitterError::general_api_error(
                format!("{error} (request: {request})"),
                None,
                Some(status),
            ),
            Self::AsErrorMessage { error } => {
                TwitterError::general_api_error(error, None, Some(status))
            }
        }
    }
}

/// Parse an error response body, falling back to a generic API error when the
/// body doesn't match any known shape.
fn error_from_body(status: u16, body: &[u8]) -> TwitterError {
    serde_json::from_slice::<ErrorResponseBody>(body)
        .map(|parsed| parsed.into_error(status))
        .unwrap_or_else(|_| {
            let message = if body.is_empty() {
                "Service error".into()
            } else {
                String::from_utf8_lossy(body).into_owned()
            };
            TwitterError::general_api_error(message, None, Some(status))
        })
}

/// Turn a transport response into its JSON body.
///
/// Responses with an error status are converted into [`TwitterError::Api`]
/// via the error body shapes above; successful responses are parsed into a
/// [`Value`] for the operation's result builder.
pub(crate) fn response_to_json(response: &TransportResponse) -> Result<Value, TwitterError> {
    let body = response.body.as_deref().unwrap_or_default();

    if response.status >= 400 {
        return Err(error_from_body(response.status, body));
    }

    serde_json::from_slice(body).map_err(|error| TwitterError::Deserialization(error.to_string()))
}

/// Check a transport response of an operation that answers with an empty
/// body on success.
pub(crate) fn check_response(response: &TransportResponse) -> Result<(), TwitterError> {
    if response.status >= 400 {
        let body = response.body.as_deref().unwrap_or_default();
        return Err(error_from_body(response.status, body));
    }

    Ok(())
}

#[cfg(test)]
mod should {
    use super::*;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: (!body.is_empty()).then(|| body.as_bytes().to_vec()),
            ..Default::default()
        }
    }

    #[test]
    fn parse_coded_error_list() {
        let result = response_to_json(&response(
            404,
            r#"{"errors":[{"code":34,"message":"Sorry, that page does not exist."}]}"#,
        ));

        assert_eq!(
            result,
            Err(TwitterError::Api {
                message: "Sorry, that page does not exist.".into(),
                code: Some(34),
                status: Some(404),
            })
        );
    }

    #[test]
    fn join_messages_of_multiple_errors() {
        let result = response_to_json(&response(
            403,
            r#"{"errors":[{"code":220,"message":"Your credentials do not allow access to this resource."},{"code":200,"message":"Forbidden."}]}"#,
        ));

        assert_eq!(
            result,
            Err(TwitterError::Api {
                message: "Your credentials do not allow access to this resource.; Forbidden."
                    .into(),
                code: Some(220),
                status: Some(403),
            })
        );
    }

    #[test]
    fn parse_request_echo_error() {
        let result = response_to_json(&response(
            403,
            r#"{"request":"/1.1/statuses/update.json","error":"Status is a duplicate."}"#,
        ));

        assert_eq!(
            result,
            Err(TwitterError::Api {
                message: "Status is a duplicate. (request: /1.1/statuses/update.json)".into(),
                code: None,
                status: Some(403),
            })
        );
    }

    #[test]
    fn parse_bare_error_message() {
        let result = response_to_json(&response(401, r#"{"error":"Not authorized."}"#));

        assert_eq!(
            result,
            Err(TwitterError::Api {
                message: "Not authorized.".into(),
                code: None,
                status: Some(401),
            })
        );
    }

    #[test]
    fn fall_back_to_raw_body_for_unknown_error_shape() {
        let result = response_to_json(&response(502, "Bad Gateway"));

        assert_eq!(
            result,
            Err(TwitterError::Api {
                message: "Bad Gateway".into(),
                code: None,
                status: Some(502),
            })
        );
    }

    #[test]
    fn pass_successful_body_through_as_json() {
        let result = response_to_json(&response(200, r#"{"id":1050118621198921728}"#));

        assert_eq!(
            result.unwrap(),
            serde_json::json!({ "id": 1050118621198921728u64 })
        );
    }

    #[test]
    fn reject_malformed_successful_body() {
        let result = response_to_json(&response(200, "not json"));

        assert!(matches!(result, Err(TwitterError::Deserialization(_))));
    }

    #[test]
    fn accept_empty_body_for_status_only_operations() {
        assert_eq!(check_response(&response(204, "")), Ok(()));
    }

    #[test]
    fn report_error_status_for_status_only_operations() {
        let result = check_response(&response(401, r#"{"error":"Not authorized."}"#));

        assert!(matches!(result, Err(TwitterError::Api { .. })));
    }
}
