//! Tweets module.
//!
//! Post a status to the authenticated account's timeline, remove or reshare
//! one, and look statuses up by identifier or search query. Every operation
//! resolves to a payload view from [`crate::core::views`].

#[doc(inline)]
pub use builders::{
    DeleteTweet, DeleteTweetBuilder, GetTweet, GetTweetBuilder, GetTweets, GetTweetsBuilder,
    PostTweet, PostTweetBuilder, Retweet, RetweetBuilder, SearchTweets, SearchTweetsBuilder,
};
pub mod builders;

use std::collections::HashMap;

use crate::{
    core::{
        error_response::response_to_json,
        utils::{
            encoding::{url_encode, url_encoded_pairs},
            headers::{APPLICATION_FORM_URLENCODED, CONTENT_TYPE},
        },
        views::{SearchResults, Tweet, TweetList},
        Transport, TransportMethod, TransportRequest, TwitterError,
    },
    dx::twitter_client::{TwitterClientInstance, TwitterConfig},
};

impl<T> TwitterClientInstance<T> {
    /// Create a new post tweet request builder.
    /// This method is used to post a status to the authenticated account's
    /// timeline.
    ///
    /// Instance of [`PostTweetBuilder`] is returned.
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
    /// let tweet = twitter
    ///     .post_tweet("Hello, world!")
    ///     .execute()
    ///     .await?;
    ///
    /// println!("posted status {:?}", tweet.id_str());
    /// # Ok(())
    /// # }
    /// ```
    pub fn post_tweet<S>(&self, status: S) -> PostTweetBuilder<T>
    where
        S: Into<String>,
    {
        PostTweetBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .status(status)
    }

    /// Create a new delete tweet request builder.
    /// This method is used to remove a status previously posted by the
    /// authenticated account.
    ///
    /// Instance of [`DeleteTweetBuilder`] is returned.
    pub fn delete_tweet<S>(&self, id: S) -> DeleteTweetBuilder<T>
    where
        S: Into<String>,
    {
        DeleteTweetBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .id(id)
    }

    /// Create a new get tweet request builder.
    /// This method is used to look up a single status by its identifier.
    ///
    /// Instance of [`GetTweetBuilder`] is returned.
    pub fn get_tweet<S>(&self, id: S) -> GetTweetBuilder<T>
    where
        S: Into<String>,
    {
        GetTweetBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .id(id)
    }

    /// Create a new get tweets request builder.
    /// This method is used to look up several statuses in one request, up to
    /// 100 identifiers at a time.
    ///
    /// Instance of [`GetTweetsBuilder`] is returned.
    pub fn get_tweets(&self, ids: Vec<String>) -> GetTweetsBuilder<T> {
        GetTweetsBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .ids(ids)
    }

    /// Create a new search tweets request builder.
    /// This method is used to run a standard search query over recent
    /// statuses.
    ///
    /// Instance of [`SearchTweetsBuilder`] is returned.
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
    /// let results = twitter
    ///     .search_tweets("#rustlang")
    ///     .count(50)
    ///     .execute()
    ///     .await?;
    ///
    /// for tweet in results.statuses().iter() {
    ///     println!("{:?}", tweet.text());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn search_tweets<S>(&self, query: S) -> SearchTweetsBuilder<T>
    where
        S: Into<String>,
    {
        SearchTweetsBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .query(query)
    }

    /// Create a new retweet request builder.
    /// This method is used to reshare a status from the authenticated
    /// account.
    ///
    /// Instance of [`RetweetBuilder`] is returned.
    pub fn retweet<S>(&self, id: S) -> RetweetBuilder<T>
    where
        S: Into<String>,
    {
        RetweetBuilder {
            twitter_client: Some(self.clone()),
            ..Default::default()
        }
        .id(id)
    }
}

impl<T> PostTweet<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let media_ids = self.media_ids.as_ref().map(|ids| ids.join(","));

        let mut form = vec![("status", self.status.as_str())];
        if let Some(in_reply_to) = self.in_reply_to_status_id.as_deref() {
            form.push(("in_reply_to_status_id", in_reply_to));
        }
        if let Some(media_ids) = media_ids.as_deref() {
            form.push(("media_ids", media_ids));
        }
        if let Some(sensitive) = self.possibly_sensitive {
            form.push(("possibly_sensitive", if sensitive { "true" } else { "false" }));
        }

        Ok(TransportRequest {
            path: "/1.1/statuses/update.json".into(),
            method: TransportMethod::Post,
            headers: [(CONTENT_TYPE.into(), APPLICATION_FORM_URLENCODED.into())].into(),
            body: Some(url_encoded_pairs(&form).into_bytes()),
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> PostTweetBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`Tweet`] view over the posted status or
    /// a [`TwitterError`].
    pub async fn execute(self) -> Result<Tweet, TwitterError> {
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
            .map(Tweet::from)
    }
}

impl<T> DeleteTweet<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        Ok(TransportRequest {
            path: format!(
                "/1.1/statuses/destroy/{}.json",
                url_encode(self.id.as_bytes())
            ),
            method: TransportMethod::Post,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> DeleteTweetBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`Tweet`] view over the removed status or
    /// a [`TwitterError`].
    pub async fn execute(self) -> Result<Tweet, TwitterError> {
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
            .map(Tweet::from)
    }
}

impl<T> GetTweet<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        Ok(TransportRequest {
            path: "/1.1/statuses/show.json".into(),
            query_parameters: [("id".into(), self.id.clone())].into(),
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> GetTweetBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`Tweet`] view or a [`TwitterError`].
    pub async fn execute(self) -> Result<Tweet, TwitterError> {
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
            .map(Tweet::from)
    }
}

impl<T> GetTweets<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let ids = self.ids.join(",");

        Ok(TransportRequest {
            path: "/1.1/statuses/lookup.json".into(),
            method: TransportMethod::Post,
            headers: [(CONTENT_TYPE.into(), APPLICATION_FORM_URLENCODED.into())].into(),
            body: Some(url_encoded_pairs(&[("id", ids.as_str())]).into_bytes()),
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> GetTweetsBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`TweetList`] view or a [`TwitterError`].
    /// Identifiers the API could not resolve are absent from the list.
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

impl<T> SearchTweets<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        let mut query_parameters: HashMap<String, String> =
            [("q".into(), self.query.clone())].into();
        if let Some(count) = self.count {
            query_parameters.insert("count".into(), count.to_string());
        }
        if let Some(result_type) = self.result_type.clone() {
            query_parameters.insert("result_type".into(), result_type);
        }
        if let Some(since_id) = self.since_id.clone() {
            query_parameters.insert("since_id".into(), since_id);
        }
        if let Some(max_id) = self.max_id.clone() {
            query_parameters.insert("max_id".into(), max_id);
        }
        if let Some(lang) = self.lang.clone() {
            query_parameters.insert("lang".into(), lang);
        }

        Ok(TransportRequest {
            path: "/1.1/search/tweets.json".into(),
            query_parameters,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> SearchTweetsBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`SearchResults`] page or a
    /// [`TwitterError`].
    pub async fn execute(self) -> Result<SearchResults, TwitterError> {
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
            .map(SearchResults::from)
    }
}

impl<T> Retweet<T> {
    fn create_transport_request(
        &self,
        config: &TwitterConfig,
    ) -> Result<TransportRequest, TwitterError> {
        Ok(TransportRequest {
            path: format!(
                "/1.1/statuses/retweet/{}.json",
                url_encode(self.id.as_bytes())
            ),
            method: TransportMethod::Post,
            timeout: config.request_timeout,
            ..Default::default()
        })
    }
}

impl<T> RetweetBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the result.
    /// This method is asynchronous and will return a future.
    /// The future will resolve to a [`Tweet`] view over the reshare or a
    /// [`TwitterError`].
    pub async fn execute(self) -> Result<Tweet, TwitterError> {
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
            .map(Tweet::from)
    }
}
