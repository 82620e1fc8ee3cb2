//! Media module.
//!
//! Upload images to the dedicated upload host. An upload resolves to a media
//! identifier which a later [`post_tweet`] call can attach through its
//! `media_ids` parameter.
//!
//! [`post_tweet`]: crate::dx::twitter_client::TwitterClientInstance::post_tweet

#[doc(inline)]
pub use builders::{UploadMedia, UploadMediaBuilder};
pub mod builders;

use base64::{engine::general_purpose, Engine as _};

use crate::{
    core::{
        error_response::response_to_json,
        utils::{
            encoding::url_encoded_pairs,
            headers::{APPLICATION_FORM_URLENCODED, CONTENT_TYPE},
        },
        views::MediaUpload,
        Transport, TransportMethod, TransportRequest, TwitterError,
    },
    dx::twitter_client::{TwitterClientInstance, TwitterConfig},
};

/// Media uploads bypass the API host entirely.
const UPLOAD_HOST: &str = "https://upload.twitter.com";

impl<T> TwitterClientInstance<T> {
    /// Create a new upload media request builder.
    /// This method is used to upload an image to the dedicated upload host.
    /// The resolved media identifier stays attachable for a limited time,
    /// reported by the receipt.
    ///
    /// Instance of [`UploadMediaBuilder`] is returned.
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
    /// let picture = std::fs::read("cat.jpg")?;
    /// let upload = twitter.upload_media(picture).execute().await?;
    ///
    /// twitter
    ///     .post_tweet("look at this cat")
    ///     .media_ids([upload.media_id_string().unwrap_or_default().into()].to_vec())
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn upload_media(&self, data: Vec<u8>) -> UploadMediaBuilder<T> {
        UploadMediaBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .data(data)
    }
}

impl<T> UploadMedia<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let encoded = general_purpose::STANDARD.encode(&self.data);

        Ok(TransportRequest {
            path: "/1.1/media/upload.json".into(),
            method: TransportMethod::Post,
            headers: [(CONTENT_TYPE.into(), APPLICATION_FORM_URLENCODED.into())].into(),
            body: Some(url_encoded_pairs(&[("media_data", encoded.as_str())]).into_bytes()),
            timeout: config.request_timeout,
            host: Some(UPLOAD_HOST.into()),
            ..Default::default()
        })
    }
}

impl<T> UploadMediaBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`MediaUpload`] receipt or a
    /// [`TwitterError`].
    pub async fn execute(self) -> Result<MediaUpload, TwitterError> {
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
            .map(MediaUpload::from)
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::TransportResponse,
        dx::twitter_client::{Credentials, TwitterClientBuilder, TwitterGenericClient},
    };
    use serde_json::json;

    #[derive(Default, Debug)]
    struct MockTransport;

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TwitterError> {
            Ok(TransportResponse {
                status: 200,
                body: Some(
                    json!({
                        "media_id": 710511363345354753u64,
                        "media_id_string": "710511363345354753",
                        "size": 11065,
                        "expires_after_secs": 86400
                    })
                    .to_string()
                    .into_bytes(),
                ),
                ..Default::default()
            })
        }
    }

    fn client() -> TwitterGenericClient<MockTransport> {
        TwitterClientBuilder::with_transport(MockTransport)
            .with_credentials(Credentials {
                consumer_key: "",
                consumer_secret: "",
                access_token: "",
                access_token_secret: "",
            })
            .build()
            .unwrap()
    }

    #[test]
    fn target_the_dedicated_upload_host() {
        let request = client().upload_media(b"GIF89a".to_vec()).build().unwrap();
        let transport_request = request
            .create_transport_request(&request.twitter_client.config)
            .unwrap();

        assert_eq!(transport_request.host.as_deref(), Some(UPLOAD_HOST));
        assert_eq!(transport_request.path, "/1.1/media/upload.json");
        assert_eq!(transport_request.method, TransportMethod::Post);
        assert_eq!(
            transport_request.headers.get(CONTENT_TYPE),
            Some(&APPLICATION_FORM_URLENCODED.to_string())
        );
    }

    #[test]
    fn carry_the_payload_as_base64() {
        let request = client().upload_media(b"GIF89a".to_vec()).build().unwrap();
        let transport_request = request
            .create_transport_request(&request.twitter_client.config)
            .unwrap();

        assert_eq!(transport_request.body, Some(b"media_data=R0lGODlh".to_vec()));
    }

    #[test]
    fn escape_reserved_base64_characters() {
        let request = client().upload_media(vec![251, 239]).build().unwrap();
        let transport_request = request
            .create_transport_request(&request.twitter_client.config)
            .unwrap();

        assert_eq!(
            transport_request.body,
            Some(b"media_data=%2B%2B8%3D".to_vec())
        );
    }

    #[tokio::test]
    async fn parse_the_upload_receipt() {
        let upload = client()
            .upload_media(b"GIF89a".to_vec())
            .execute()
            .await
            .unwrap();

        assert_eq!(upload.media_id_string(), Some("710511363345354753"));
        assert_eq!(upload.size(), Some(11065));
    }
}
