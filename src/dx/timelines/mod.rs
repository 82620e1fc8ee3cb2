//! Timelines module.
//!
//! List statuses in reverse-chronological order: the home timeline of the
//! authenticated account, the timeline of a single account, and the mentions
//! of the authenticated account.

#[doc(inline)]
pub use builders::{
    HomeTimeline, HomeTimelineBuilder, MentionsTimeline, MentionsTimelineBuilder, UserTimeline,
    UserTimelineBuilder,
};
pub mod builders;

use std::collections::HashMap;

use crate::{
    core::{
        error_response::response_to_json, views::TweetList, Transport, TransportRequest,
        TwitterError,
    },
    dx::twitter_client::{TwitterClientInstance, TwitterConfig},
};

impl<T> TwitterClientInstance<T> {
    /// Create a new home timeline request builder.
    /// This method is used to list recent statuses posted by the
    /// authenticated account and the accounts it follows. The API serves up
    /// to 800 statuses through this timeline.
    ///
    /// Instance of [`HomeTimelineBuilder`] is returned.
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
    /// let timeline = twitter
    ///     .home_timeline()
    ///     .count(200)
    ///     .execute()
    ///     .await?;
    ///
    /// for tweet in timeline.iter() {
    ///     println!("{:?}", tweet.text());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn home_timeline(&self) -> HomeTimelineBuilder<T> {
        HomeTimelineBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
    }

    /// Create a new user timeline request builder.
    /// This method is used to list recent statuses posted by one account,
    /// addressed by numeric identifier or screen name. With neither set, the
    /// timeline of the authenticated account is listed. The API serves up to
    /// 3200 statuses through this timeline.
    ///
    /// Instance of [`UserTimelineBuilder`] is returned.
    pub fn user_timeline(&self) -> UserTimelineBuilder<T> {
        UserTimelineBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
    }

    /// Create a new mentions timeline request builder.
    /// This method is used to list recent statuses that mention the
    /// authenticated account.
    ///
    /// Instance of [`MentionsTimelineBuilder`] is returned.
    pub fn mentions_timeline(&self) -> MentionsTimelineBuilder<T> {
        MentionsTimelineBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
    }
}

impl<T> HomeTimeline<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let mut query_parameters = HashMap::new();
        if let Some(count) = self.count {
            query_parameters.insert("count".into(), count.to_string());
        }
        if let Some(since_id) = self.since_id.clone() {
            query_parameters.insert("since_id".into(), since_id);
        }
        if let Some(max_id) = self.max_id.clone() {
            query_parameters.insert("max_id".into(), max_id);
        }

        Ok(TransportRequest {
            path: "/1.1/statuses/home_timeline.json".into(),
            query_parameters,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> HomeTimelineBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`TweetList`] view or a [`TwitterError`].
    pub async fn execute(self) -> Result<TweetList, TwitterError> {
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
            .map(TweetList::from)
    }
}

impl<T> UserTimeline<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let mut query_parameters = HashMap::new();
        match (self.user_id.as_ref(), self.screen_name.as_ref()) {
            (Some(_), Some(_)) => {
                return Err(TwitterError::InvalidRequest(
                    "timeline lookup accepts either user_id or screen_name, not both".into(),
                ))
            }
            (Some(user_id), None) => {
                query_parameters.insert("user_id".into(), user_id.clone());
            }
            (None, Some(screen_name)) => {
                query_parameters.insert("screen_name".into(), screen_name.clone());
            }
            (None, None) => {}
        }
        if let Some(count) = self.count {
            query_parameters.insert("count".into(), count.to_string());
        }
        if let Some(since_id) = self.since_id.clone() {
            query_parameters.insert("since_id".into(), since_id);
        }
        if let Some(max_id) = self.max_id.clone() {
            query_parameters.insert("max_id".into(), max_id);
        }

        Ok(TransportRequest {
            path: "/1.1/statuses/user_timeline.json".into(),
            query_parameters,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> UserTimelineBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`TweetList`] view or a [`TwitterError`].
    pub async fn execute(self) -> Result<TweetList, TwitterError> {
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
            .map(TweetList::from)
    }
}

impl<T> MentionsTimeline<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let mut query_parameters = HashMap::new();
        if let Some(count) = self.count {
            query_parameters.insert("count".into(), count.to_string());
        }
        if let Some(since_id) = self.since_id.clone() {
            query_parameters.insert("since_id".into(), since_id);
        }
        if let Some(max_id) = self.max_id.clone() {
            query_parameters.insert("max_id".into(), max_id);
        }

        Ok(TransportRequest {
            path: "/1.1/statuses/mentions_timeline.json".into(),
            query_parameters,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> MentionsTimelineBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`TweetList`] view or a [`TwitterError`].
    pub async fn execute(self) -> Result<TweetList, TwitterError> {
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
            .map(TweetList::from)
    }
}
