//! Direct messages module.
//!
//! Send a direct message to another account, fetch one by its event
//! identifier, or remove one from the authenticated account's view of the
//! conversation.

#[doc(inline)]
pub use builders::{
    DeleteDirectMessage, DeleteDirectMessageBuilder, GetDirectMessage, GetDirectMessageBuilder,
    SendDirectMessage, SendDirectMessageBuilder,
};
pub mod builders;

use std::sync::Arc;

use serde_json::json;

use crate::{
    core::{
        error_response::{check_response, response_to_json},
        utils::headers::{APPLICATION_JSON, CONTENT_TYPE},
        views::{DirectMessageEvent, JsonView},
        Transport, TransportMethod, TransportRequest, TwitterError,
    },
    dx::twitter_client::{TwitterClientInstance, TwitterConfig},
};

impl<T> TwitterClientInstance<T> {
    /// Create a new send direct message request builder.
    /// This method is used to send a direct message to another account,
    /// addressed by its string identifier.
    ///
    /// Instance of [`SendDirectMessageBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use tweetkit::{Credentials, TwitterClientBuilder};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let twitter = // TwitterClient
    /// # TwitterClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials {
    /// #         consumer_key: "my-consumer-key",
    /// #         consumer_secret: "my-consumer-secret",
    /// #         access_token: "my-access-token",
    /// #         access_token_secret: "my-access-token-secret",
    /// #     })
    /// #     .build()?;
    ///
    /// let message = twitter
    ///     .send_direct_message("6253282", "hi there")
    ///     .execute()
    ///     .await?;
    ///
    /// println!("sent message {:?}", message.id());
    /// # Ok(())
    /// # }
    /// ```
    pub fn send_direct_message<S, M>(&self, recipient_id: S, text: M) -> SendDirectMessageBuilder<T>
    where
        S: Into<String>,
        M: Into<String>,
    {
        SendDirectMessageBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .recipient_id(recipient_id)
        .text(text)
    }

    /// Create a new get direct message request builder.
    /// This method is used to fetch a single direct message event by its
    /// identifier.
    ///
    /// Instance of [`GetDirectMessageBuilder`] is returned.
    pub fn get_direct_message<S>(&self, id: S) -> GetDirectMessageBuilder<T>
    where
        S: Into<String>,
    {
        GetDirectMessageBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .id(id)
    }

    /// Create a new delete direct message request builder.
    /// This method is used to remove a direct message from the authenticated
    /// account's view of the conversation.
    ///
    /// Instance of [`DeleteDirectMessageBuilder`] is returned.
    pub fn delete_direct_message<S>(&self, id: S) -> DeleteDirectMessageBuilder<T>
    where
        S: Into<String>,
    {
        DeleteDirectMessageBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .id(id)
    }
}

impl<T> SendDirectMessage<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let event = json!({
            "event": {
                "type": "message_create",
                "message_create": {
                    "target": {"recipient_id": self.recipient_id},
                    "message_data": {"text": self.text}
                }
            }
        });
        let body =
            serde_json::to_vec(&event).map_err(|err| TwitterError::Serialization(err.to_string()))?;

        Ok(TransportRequest {
            path: "/1.1/direct_messages/events/new.json".into(),
            method: TransportMethod::Post,
            headers: [(CONTENT_TYPE.into(), APPLICATION_JSON.into())].into(),
            body: Some(body),
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> SendDirectMessageBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`DirectMessageEvent`] view over the sent
    /// message or a [`TwitterError`].
    pub async fn execute(self) -> Result<DirectMessageEvent, TwitterError> {
        let request = self
            .build()
            .map_err(|err| TwitterError::InvalidRequest(err.to_string()))?;
        let transport_request = request.create_transport_request(&request.twitter_client.config)?;

        request
            .twitter_client
            .transport
            .send(transport_request)
            .await
            .and_then(|response| response_to_json(&response))
            .map(|body| DirectMessageEvent::from_view(JsonView::rooted(Arc::new(body), "/event")))
    }
}

impl<T> GetDirectMessage<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        Ok(TransportRequest {
            path: "/1.1/direct_messages/events/show.json".into(),
            query_parameters: [("id".into(), self.id.clone())].into(),
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> GetDirectMessageBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`DirectMessageEvent`] view or a
    /// [`TwitterError`].
    pub async fn execute(self) -> Result<DirectMessageEvent, TwitterError> {
        let request = self
            .build()
            .map_err(|err| TwitterError::InvalidRequest(err.to_string()))?;
        let transport_request = request.create_transport_request(&request.twitter_client.config)?;

        request
            .twitter_client
            .transport
            .send(transport_request)
            .await
            .and_then(|response| response_to_json(&response))
            .map(|body| DirectMessageEvent::from_view(JsonView::rooted(Arc::new(body), "/event")))
    }
}

impl<T> DeleteDirectMessage<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        Ok(TransportRequest {
            path: "/1.1/direct_messages/events/destroy.json".into(),
            query_parameters: [("id".into(), self.id.clone())].into(),
            method: TransportMethod::Delete,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> DeleteDirectMessageBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to `()` or a [`TwitterError`]; the API answers
    /// a successful removal with an empty `204 No Content` response.
    pub async fn execute(self) -> Result<(), TwitterError> {
        let request = self
            .build()
            .map_err(|err| TwitterError::InvalidRequest(err.to_string()))?;
        let transport_request = request.create_transport_request(&request.twitter_client.config)?;

        request
            .twitter_client
            .transport
            .send(transport_request)
            .await
            .and_then(|response| check_response(&response))
    }
}
