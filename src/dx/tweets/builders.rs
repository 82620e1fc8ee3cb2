//! Tweets builders module.
//!
//! This module contains the builders for the status operations: posting,
//! deletion, lookup, search and retweeting.

use derive_builder::Builder;

use crate::dx::twitter_client::TwitterClientInstance;

/// The [`PostTweetBuilder`] is used to post a new status to the authenticated
/// account's timeline.
///
/// This struct is used by the [`post_tweet`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`post_tweet`]: crate::dx::twitter_client::TwitterClientInstance::post_tweet
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct PostTweet<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Text of the status to post.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(into))]
    pub(super) status: String,

    /// Identifier of the status this one replies to.
    ///
    /// The API links the reply only when the replied-to author is mentioned
    /// in the status text.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) in_reply_to_status_id: Option<String>,

    /// Identifiers of previously uploaded media to attach, up to four
    /// images.
    #[builder(
        setter(strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) media_ids: Option<Vec<String>>,

    /// Mark the attached media as sensitive content.
    #[builder(
        setter(strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) possibly_sensitive: Option<bool>,
}

/// The [`DeleteTweetBuilder`] is used to remove a previously posted status.
///
/// This struct is used by the [`delete_tweet`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`delete_tweet`]: crate::dx::twitter_client::TwitterClientInstance::delete_tweet
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct DeleteTweet<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Identifier of the status to remove.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(into))]
    pub(super) id: String,
}

/// The [`GetTweetBuilder`] is used to look up a single status by its
/// identifier.
///
/// This struct is used by the [`get_tweet`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`get_tweet`]: crate::dx::twitter_client::TwitterClientInstance::get_tweet
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct GetTweet<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Identifier of the status to look up.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(into))]
    pub(super) id: String,
}

/// The [`GetTweetsBuilder`] is used to look up several statuses in one
/// request.
///
/// This struct is used by the [`get_tweets`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`get_tweets`]: crate::dx::twitter_client::TwitterClientInstance::get_tweets
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct GetTweets<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Identifiers of the statuses to look up, up to 100 per request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(into))]
    pub(super) ids: Vec<String>,
}

/// The [`SearchTweetsBuilder`] is used to run a standard search query over
/// recent statuses.
///
/// This struct is used by the [`search_tweets`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`search_tweets`]: crate::dx::twitter_client::TwitterClientInstance::search_tweets
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct SearchTweets<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Search query, in the standard search operator syntax.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(into))]
    pub(super) query: String,

    /// Number of statuses to return per page, up to 100.
    #[builder(
        setter(strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) count: Option<u32>,

    /// Which flavor of results to prefer: `mixed`, `recent` or `popular`.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) result_type: Option<String>,

    /// Only return statuses with an identifier greater than this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) since_id: Option<String>,

    /// Only return statuses with an identifier less than or equal to this
    /// one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) max_id: Option<String>,

    /// Restrict results to statuses detected as the given ISO 639-1
    /// language.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::tweets)")
    )]
    pub(super) lang: Option<String>,
}

/// The [`RetweetBuilder`] is used to reshare a status from the authenticated
/// account.
///
/// This struct is used by the [`retweet`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`retweet`]: crate::dx::twitter_client::TwitterClientInstance::retweet
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct Retweet<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Identifier of the status to reshare.
    #[builder(field(vis = "pub(in crate::dx::tweets)"), setter(into))]
    pub(super) id: String,
}
