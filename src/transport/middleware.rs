//! Request decoration middleware.
//!
//! Every configured transport is wrapped in [`TwitterMiddleware`] by the
//! client builder. The middleware stamps outgoing requests with the
//! configured `User-Agent` value and a fresh trace identifier, then hands
//! them to the wrapped transport untouched.

use log::debug;
use uuid::Uuid;

use crate::core::{
    utils::headers::USER_AGENT, Transport, TransportRequest, TransportResponse, TwitterError,
};
use std::sync::Arc;

/// Header carrying the per-request trace identifier.
const REQUEST_ID: &str = "X-Request-ID";

/// Transport decorator applied to every configured transport by
/// [`TwitterClientConfigBuilder::build`].
///
/// [`TwitterClientConfigBuilder::build`]: crate::dx::twitter_client::TwitterClientConfigBuilder::build
pub struct TwitterMiddleware<T> {
    pub(crate) transport: T,
    pub(crate) user_agent: String,
    pub(crate) instance_id: Arc<Option<String>>,
}

#[async_trait::async_trait]
impl<T> Transport for TwitterMiddleware<T>
where
    T: Transport,
{
    async fn send(&self, mut request: TransportRequest) -> Result<TransportResponse, TwitterError> {
        request
            .headers
            .insert(USER_AGENT.into(), self.user_agent.clone());
        request
            .headers
            .insert(REQUEST_ID.into(), Uuid::new_v4().to_string());

        debug!(
            "{} {} (instance: {})",
            request.method,
            request.path,
            self.instance_id.as_deref().unwrap_or("none")
        );

        self.transport.send(request).await
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::TransportMethod;
    use std::sync::Mutex;

    #[tokio::test]
    async fn stamp_requests_before_forwarding() {
        #[derive(Default)]
        struct MockTransport;

        #[async_trait::async_trait]
        impl Transport for MockTransport {
            async fn send(
                &self,
                request: TransportRequest,
            ) -> Result<TransportResponse, TwitterError> {
                assert_eq!(
                    "tweetkit-test/0",
                    request.headers.get(USER_AGENT).unwrap().clone()
                );
                assert!(!request.headers.get(REQUEST_ID).unwrap().is_empty());
                assert_eq!("/1.1/statuses/update.json", request.path);
                Ok(TransportResponse::default())
            }
        }

        let middleware = TwitterMiddleware {
            transport: MockTransport,
            user_agent: "tweetkit-test/0".into(),
            instance_id: Arc::new(Some("instance".into())),
        };

        let result = middleware
            .send(TransportRequest {
                path: "/1.1/statuses/update.json".into(),
                ..Default::default()
            })
            .await;

        assert!(dbg!(result).is_ok());
    }

    #[tokio::test]
    async fn leave_the_rest_of_the_request_untouched() {
        #[derive(Default)]
        struct MockTransport;

        #[async_trait::async_trait]
        impl Transport for MockTransport {
            async fn send(
                &self,
                request: TransportRequest,
            ) -> Result<TransportResponse, TwitterError> {
                assert_eq!(request.method, TransportMethod::Post);
                assert_eq!(request.host.as_deref(), Some("https://upload.twitter.com"));
                assert_eq!(request.timeout, 5);
                assert_eq!(request.body, Some(b"media_data=R0lGODlh".to_vec()));
                Ok(TransportResponse::default())
            }
        }

        let middleware = TwitterMiddleware {
            transport: MockTransport,
            user_agent: "tweetkit-test/0".into(),
            instance_id: Arc::new(None),
        };

        let result = middleware
            .send(TransportRequest {
                path: "/1.1/media/upload.json".into(),
                method: TransportMethod::Post,
                host: Some("https://upload.twitter.com".into()),
                timeout: 5,
                body: Some(b"media_data=R0lGODlh".to_vec()),
                ..Default::default()
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn assign_each_request_a_fresh_identifier() {
        #[derive(Default)]
        struct RecordingTransport {
            request_ids: Mutex<Vec<String>>,
        }

        #[async_trait::async_trait]
        impl Transport for RecordingTransport {
            async fn send(
                &self,
                request: TransportRequest,
            ) -> Result<TransportResponse, TwitterError> {
                self.request_ids
                    .lock()
                    .unwrap()
                    .push(request.headers.get(REQUEST_ID).unwrap().clone());
                Ok(TransportResponse::default())
            }
        }

        let middleware = TwitterMiddleware {
            transport: RecordingTransport::default(),
            user_agent: "tweetkit-test/0".into(),
            instance_id: Arc::new(None),
        };

        middleware.send(TransportRequest::default()).await.unwrap();
        middleware.send(TransportRequest::default()).await.unwrap();

        let request_ids = middleware.transport.request_ids.lock().unwrap();
        assert_eq!(request_ids.len(), 2);
        assert_ne!(request_ids[0], request_ids[1]);
    }
}
