//! Timelines builders module.
//!
//! This module contains the builders for the reverse-chronological status
//! listings: the home timeline, an account's own timeline and the mentions
//! timeline.

use derive_builder::Builder;

use crate::dx::twitter_client::TwitterClientInstance;

/// The [`HomeTimelineBuilder`] is used to list recent statuses posted by the
/// authenticated account and the accounts it follows.
///
/// This struct is used by the [`home_timeline`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`home_timeline`]: crate::dx::twitter_client::TwitterClientInstance::home_timeline
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct HomeTimeline<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::timelines)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Number of statuses to return, up to 200 per page.
    #[builder(
        setter(strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) count: Option<u32>,

    /// Only list statuses with an identifier greater than this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) since_id: Option<String>,

    /// Only list statuses with an identifier less than or equal to this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) max_id: Option<String>,
}

/// The [`UserTimelineBuilder`] is used to list recent statuses posted by one
/// account.
///
/// The account can be addressed by its numeric identifier or screen name;
/// with neither set, the timeline of the authenticated account is listed.
///
/// This struct is used by the [`user_timeline`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`user_timeline`]: crate::dx::twitter_client::TwitterClientInstance::user_timeline
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct UserTimeline<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::timelines)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Numeric identifier of the account whose timeline to list.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) user_id: Option<String>,

    /// Screen name of the account whose timeline to list.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) screen_name: Option<String>,

    /// Number of statuses to return, up to 200 per page.
    #[builder(
        setter(strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) count: Option<u32>,

    /// Only list statuses with an identifier greater than this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) since_id: Option<String>,

    /// Only list statuses with an identifier less than or equal to this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) max_id: Option<String>,
}

/// The [`MentionsTimelineBuilder`] is used to list recent statuses that
/// mention the authenticated account.
///
/// This struct is used by the [`mentions_timeline`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`mentions_timeline`]: crate::dx::twitter_client::TwitterClientInstance::mentions_timeline
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct MentionsTimeline<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::timelines)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Number of statuses to return, up to 200 per page.
    #[builder(
        setter(strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) count: Option<u32>,

    /// Only list statuses with an identifier greater than this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) since_id: Option<String>,

    /// Only list statuses with an identifier less than or equal to this one.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::timelines)")
    )]
    pub(super) max_id: Option<String>,
}
