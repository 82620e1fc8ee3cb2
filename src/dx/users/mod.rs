//! Users module.
//!
//! Look up account profiles and verify the credentials the client was
//! configured with.

#[doc(inline)]
pub use builders::{GetUser, GetUserBuilder, VerifyCredentials, VerifyCredentialsBuilder};
pub mod builders;

use std::collections::HashMap;

use crate::{
    core::{
        error_response::response_to_json, views::User, Transport, TransportRequest, TwitterError,
    },
    dx::twitter_client::{TwitterClientInstance, TwitterConfig},
};

impl<T> TwitterClientInstance<T> {
    /// Create a new get user request builder.
    /// This method is used to look up an account profile by its numeric
    /// identifier or screen name; exactly one of the two must be set on the
    /// returned builder.
    ///
    /// Instance of [`GetUserBuilder`] is returned.
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
    /// let user = twitter
    ///     .get_user()
    ///     .screen_name("TwitterAPI")
    ///     .execute()
    ///     .await?;
    ///
    /// println!("{:?} has {:?} followers", user.name(), user.followers_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_user(&self) -> GetUserBuilder<T> {
        GetUserBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
    }

    /// Create a new verify credentials request builder.
    /// This method is used to fetch the profile of the account the client
    /// credentials belong to, including the confirmed email address when the
    /// application is allowed to read it.
    ///
    /// Instance of [`VerifyCredentialsBuilder`] is returned.
    pub fn verify_credentials(&self) -> VerifyCredentialsBuilder<T> {
        VerifyCredentialsBuilder {
            twitter_client: Some(self.clone()),
        }
    }
}

impl<T> GetUser<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let query_parameters: HashMap<String, String> =
            match (self.user_id.as_ref(), self.screen_name.as_ref()) {
                (Some(user_id), None) => [("user_id".into(), user_id.clone())].into(),
                (None, Some(screen_name)) => [("screen_name".into(), screen_name.clone())].into(),
                _ => {
                    return Err(TwitterError::InvalidRequest(
                        "account lookup requires exactly one of user_id or screen_name".into(),
                    ))
                }
            };

        Ok(TransportRequest {
            path: "/1.1/users/show.json".into(),
            query_parameters,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> GetUserBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`User`] view or a [`TwitterError`].
    pub async fn execute(self) -> Result<User, TwitterError> {
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
            .map(User::from)
    }
}

impl<T> VerifyCredentials<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        Ok(TransportRequest {
            path: "/1.1/account/verify_credentials.json".into(),
            query_parameters: [("include_email".into(), "true".into())].into(),
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> VerifyCredentialsBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`User`] view over the authenticated
    /// account or a [`TwitterError`].
    pub async fn execute(self) -> Result<User, TwitterError> {
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
            .map(User::from)
    }
}
