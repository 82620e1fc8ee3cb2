//! Direct messages builders module.
//!
//! This module contains the builders for sending, fetching and removing
//! direct messages.

use derive_builder::Builder;

use crate::dx::twitter_client::TwitterClientInstance;

/// The [`SendDirectMessageBuilder`] is used to send a direct message to
/// another account.
///
/// This struct is used by the [`send_direct_message`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`send_direct_message`]: crate::dx::twitter_client::TwitterClientInstance::send_direct_message
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct SendDirectMessage<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// String identifier of the receiving account.
    ///
    /// The recipient must follow the sender or have messages from anyone
    /// enabled, otherwise the API rejects the request.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(into))]
    pub(super) recipient_id: String,

    /// Text of the message.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(into))]
    pub(super) text: String,
}

/// The [`GetDirectMessageBuilder`] is used to fetch a single direct message
/// event by its identifier.
///
/// This struct is used by the [`get_direct_message`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`get_direct_message`]: crate::dx::twitter_client::TwitterClientInstance::get_direct_message
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct GetDirectMessage<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Identifier of the message event to fetch.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(into))]
    pub(super) id: String,
}

/// The [`DeleteDirectMessageBuilder`] is used to remove a direct message
/// from the authenticated account's view of the conversation.
///
/// Removal only hides the message for the requesting account; the other
/// participant keeps their copy.
///
/// This struct is used by the [`delete_direct_message`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`delete_direct_message`]: crate::dx::twitter_client::TwitterClientInstance::delete_direct_message
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct DeleteDirectMessage<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Identifier of the message event to remove.
    #[builder(field(vis = "pub(in crate::dx::direct_messages)"), setter(into))]
    pub(super) id: String,
}
