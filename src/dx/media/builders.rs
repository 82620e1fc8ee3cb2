//! Media builders module.
//!
//! This module contains the builder for uploading media files to the
//! dedicated upload host.

use derive_builder::Builder;

use crate::dx::twitter_client::TwitterClientInstance;

/// The [`UploadMediaBuilder`] is used to upload an image to the dedicated
/// upload host, ahead of attaching it to a status.
///
/// This struct is used by the [`upload_media`] method of the
/// [`TwitterClientInstance`], which is the preferred way to create instances
/// of this builder.
///
/// [`upload_media`]: crate::dx::twitter_client::TwitterClientInstance::upload_media
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct UploadMedia<T> {
    /// Current client which can send the request.
    #[builder(field(vis = "pub(in crate::dx::media)"), setter(custom))]
    pub(super) twitter_client: TwitterClientInstance<T>,

    /// Raw bytes of the file to upload, at most 5 MB for images.
    #[builder(field(vis = "pub(in crate::dx::media)"), setter(into))]
    pub(super) data: Vec<u8>,
}
