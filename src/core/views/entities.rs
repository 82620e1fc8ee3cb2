//! # Entities view module

use std::sync::Arc;

use serde_json::Value;

use super::JsonView;

/// Accessors over the `entities` block of a status or direct message:
/// hashtags, links, user mentions and attached media.
#[derive(Debug, Clone)]
pub struct Entities {
    view: JsonView,
}

impl Entities {
    pub(crate) fn from_view(view: JsonView) -> Self {
        Self { view }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Hashtag texts, without the leading `#`.
    pub fn hashtags(&self) -> Vec<&str> {
        self.collect_str("hashtags", "text")
    }

    /// Screen names mentioned in the text.
    pub fn mention_screen_names(&self) -> Vec<&str> {
        self.collect_str("user_mentions", "screen_name")
    }

    /// Expanded URLs for every link in the text.
    pub fn urls(&self) -> Vec<&str> {
        self.collect_str("urls", "expanded_url")
    }

    /// Views over the attached media items.
    pub fn media(&self) -> Vec<Media> {
        let count = self
            .view
            .field("media")
            .as_array()
            .map(|items| items.len())
            .unwrap_or(0);

        (0..count)
            .map(|index| Media {
                view: self.view.at("media").at(&index.to_string()),
            })
            .collect()
    }

    fn collect_str(&self, list: &str, field: &str) -> Vec<&str> {
        self.view
            .field(list)
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get(field).and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Accessors over a single attached media item.
#[derive(Debug, Clone)]
pub struct Media {
    view: JsonView,
}

impl Media {
    /// String identifier of the media item.
    pub fn id_str(&self) -> Option<&str> {
        self.view.str_field("id_str")
    }

    /// Media kind: `photo`, `video` or `animated_gif`.
    pub fn media_type(&self) -> Option<&str> {
        self.view.str_field("type")
    }

    /// HTTPS URL of the media file.
    pub fn media_url(&self) -> Option<&str> {
        self.view.str_field("media_url_https")
    }

    /// Shortened URL as rendered inside the status text.
    pub fn display_url(&self) -> Option<&str> {
        self.view.str_field("display_url")
    }
}

/// Accessors over the receipt the upload host answers a media upload with.
///
/// The media identifier taken from here is what a status posted later refers
/// to when it attaches the upload.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    view: JsonView,
}

impl MediaUpload {
    pub(crate) fn new(root: Arc<Value>) -> Self {
        Self {
            view: JsonView::new(root),
        }
    }

    /// Raw JSON node backing this view.
    pub fn value(&self) -> &Value {
        self.view.value()
    }

    /// Numeric identifier of the uploaded media.
    pub fn media_id(&self) -> Option<u64> {
        self.view.u64_field("media_id")
    }

    /// String identifier of the uploaded media.
    pub fn media_id_string(&self) -> Option<&str> {
        self.view.str_field("media_id_string")
    }

    /// Size of the uploaded file in bytes.
    pub fn size(&self) -> Option<u64> {
        self.view.u64_field("size")
    }

    /// Seconds until the identifier expires unless attached to a status.
    pub fn expires_after_secs(&self) -> Option<u64> {
        self.view.u64_field("expires_after_secs")
    }
}

impl From<Value> for MediaUpload {
    fn from(value: Value) -> Self {
        MediaUpload::new(Arc::new(value))
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::views::Tweet;
    use serde_json::json;

    #[test]
    fn collect_hashtags_mentions_and_urls() {
        let tweet = Tweet::from(json!({
            "text": "#rustlang with @ahmad https://t.co/abc",
            "entities": {
                "hashtags": [{"text": "rustlang"}],
                "user_mentions": [{"screen_name": "ahmad"}],
                "urls": [{"expanded_url": "https://example.com/post"}]
            }
        }));

        let entities = tweet.entities();
        assert_eq!(entities.hashtags(), vec!["rustlang"]);
        assert_eq!(entities.mention_screen_names(), vec!["ahmad"]);
        assert_eq!(entities.urls(), vec!["https://example.com/post"]);
        assert!(entities.media().is_empty());
    }

    #[test]
    fn prefer_extended_entities() {
        let tweet = Tweet::from(json!({
            "text": "truncated...",
            "entities": {"hashtags": []},
            "extended_tweet": {
                "full_text": "the whole text #late",
                "entities": {"hashtags": [{"text": "late"}]}
            }
        }));

        assert_eq!(tweet.entities().hashtags(), vec!["late"]);
    }

    #[test]
    fn expose_attached_media() {
        let tweet = Tweet::from(json!({
            "text": "look",
            "entities": {
                "media": [{
                    "id_str": "9000",
                    "type": "photo",
                    "media_url_https": "https://pbs.example.com/9000.jpg",
                    "display_url": "pic.example.com/9000"
                }]
            }
        }));

        let media = tweet.entities().media();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].media_type(), Some("photo"));
        assert_eq!(
            media[0].media_url(),
            Some("https://pbs.example.com/9000.jpg")
        );
    }

    #[test]
    fn expose_upload_receipt_fields() {
        let upload = MediaUpload::from(json!({
            "media_id": 710511363345354753u64,
            "media_id_string": "710511363345354753",
            "size": 11065,
            "expires_after_secs": 86400
        }));

        assert_eq!(upload.media_id(), Some(710511363345354753));
        assert_eq!(upload.media_id_string(), Some("710511363345354753"));
        assert_eq!(upload.size(), Some(11065));
        assert_eq!(upload.expires_after_secs(), Some(86400));
    }
}
