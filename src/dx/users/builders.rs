//! Users builders module.
//!
//! This module contains the builders for account lookup and credential
//! verification.

use derive_builder::Builder;

use crate::dx::twitter_client::TwitterClientInstance;

/// The [`GetUserBuilder`] is used to look up an account profile.
///
/// The account can be addressed either by its numeric identifier or by its
/// screen name; exactly one of the two must be provided.
///
/// This struct is used by the [`get_user`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`get_user`]: crate::dx::twitter_client::TwitterClientInstance::get_user
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct GetUser<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::users)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Numeric identifier of the account to look up.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::users)")
    )]
    pub(super) user_id: Option<String>,

    /// Screen name of the account to look up, without the leading `@`.
    #[builder(
        setter(into, strip_option),
        default = "None",
        field(vis = "pub(in crate::dx::users)")
    )]
    pub(super) screen_name: Option<String>,
}

/// The [`VerifyCredentialsBuilder`] is used to fetch the profile of the
/// account the client credentials belong to.
///
/// This struct is used by the [`verify_credentials`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`verify_credentials`]: crate::dx::twitter_client::TwitterClientInstance::verify_credentials
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct VerifyCredentials<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::users)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,
}
