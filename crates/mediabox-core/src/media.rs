//! Gallery data model.
//!
//! A page holds an ordered list of galleries, each an ordered list of
//! media items. The variant of every item is decided once, when the
//! collection is built, from the marker data the page exposes.

use std::sync::Arc;

// ============================================================================
// Media Items
// ============================================================================

/// A `<source>` child of a video element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub src: String,
    /// MIME type from the `type` attribute, if any.
    pub mime_type: Option<String>,
}

/// A gallery image.
///
/// `deferred_src` is the lazy-load source (`data-src`). It wins over
/// `src`, which may still hold a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageItem {
    pub src: Option<String>,
    pub deferred_src: Option<String>,
    pub alt: String,
}

impl ImageItem {
    /// The URL the image should finally display.
    pub fn resolved_src(&self) -> &str {
        self.deferred_src
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.src.as_deref())
            .unwrap_or_default()
    }
}

/// One entry of a gallery, in navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    Image(ImageItem),
    Video { source: Option<VideoSource> },
    /// External YouTube video, by video id.
    YouTube { id: String },
    /// External VK video, by `{owner}_{video}` id.
    VkVideo { id: String },
}

/// Variant tag of a [`MediaItem`], for logging and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    YouTube,
    VkVideo,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::YouTube => "youtube",
            Self::VkVideo => "vk-video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Classification
// ============================================================================

/// The first `img` or `video` element found inside a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaElement {
    Image {
        src: Option<String>,
        data_src: Option<String>,
        alt: Option<String>,
    },
    Video { source: Option<VideoSource> },
}

/// Raw marker data read from one media item on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemMarkers {
    /// `data-youtube-id` of a YouTube poster, if the item has one.
    pub youtube_id: Option<String>,
    /// `data-vk-video-id` of a VK poster, if the item has one.
    pub vk_video_id: Option<String>,
    pub media: Option<MediaElement>,
}

impl MediaItem {
    /// Decide the variant of an item from its markers.
    ///
    /// YouTube is checked first, then VK, then a plain image or video.
    /// Blank ids do not count as markers. Returns `None` when nothing
    /// matches.
    pub fn classify(markers: ItemMarkers) -> Option<Self> {
        if let Some(id) = non_blank(markers.youtube_id) {
            return Some(Self::YouTube { id });
        }
        if let Some(id) = non_blank(markers.vk_video_id) {
            return Some(Self::VkVideo { id });
        }
        match markers.media? {
            MediaElement::Image { src, data_src, alt } => Some(Self::Image(ImageItem {
                src,
                deferred_src: data_src,
                alt: alt.unwrap_or_default(),
            })),
            MediaElement::Video { source } => Some(Self::Video { source }),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Image(_) => MediaKind::Image,
            Self::Video { .. } => MediaKind::Video,
            Self::YouTube { .. } => MediaKind::YouTube,
            Self::VkVideo { .. } => MediaKind::VkVideo,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Galleries
// ============================================================================

/// An ordered, immutable list of media items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    position: usize,
    items: Vec<MediaItem>,
}

impl Gallery {
    pub fn new(position: usize, items: Vec<MediaItem>) -> Self {
        Self { position, items }
    }

    /// Position of the gallery on the page (0-based).
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every gallery on the page, in page order.
#[derive(Debug, Clone, Default)]
pub struct GalleryCollection {
    galleries: Vec<Arc<Gallery>>,
}

impl GalleryCollection {
    /// Build a collection; positions follow iteration order.
    pub fn new(galleries: impl IntoIterator<Item = Vec<MediaItem>>) -> Self {
        Self {
            galleries: galleries
                .into_iter()
                .enumerate()
                .map(|(position, items)| Arc::new(Gallery::new(position, items)))
                .collect(),
        }
    }

    pub fn get(&self, position: usize) -> Option<&Arc<Gallery>> {
        self.galleries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Gallery>> {
        self.galleries.iter()
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    /// Total number of items across all galleries.
    pub fn item_count(&self) -> usize {
        self.galleries.iter().map(|g| g.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_markers(src: &str) -> ItemMarkers {
        ItemMarkers {
            media: Some(MediaElement::Image {
                src: Some(src.to_string()),
                data_src: None,
                alt: Some("alt".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_priority() {
        let markers = ItemMarkers {
            youtube_id: Some("abc123".to_string()),
            vk_video_id: Some("200_1".to_string()),
            media: image_markers("a.jpg").media,
        };
        assert_eq!(
            MediaItem::classify(markers.clone()),
            Some(MediaItem::YouTube {
                id: "abc123".to_string()
            })
        );

        let vk = ItemMarkers {
            youtube_id: None,
            ..markers
        };
        assert_eq!(
            MediaItem::classify(vk),
            Some(MediaItem::VkVideo {
                id: "200_1".to_string()
            })
        );
    }

    #[test]
    fn test_classify_blank_ids_fall_through() {
        let markers = ItemMarkers {
            youtube_id: Some("  ".to_string()),
            vk_video_id: Some(String::new()),
            ..image_markers("a.jpg")
        };
        assert_eq!(
            MediaItem::classify(markers).map(|m| m.kind()),
            Some(MediaKind::Image)
        );
    }

    #[test]
    fn test_classify_video_and_nothing() {
        let source = VideoSource {
            src: "clip.mp4".to_string(),
            mime_type: Some("video/mp4".to_string()),
        };
        let markers = ItemMarkers {
            media: Some(MediaElement::Video {
                source: Some(source.clone()),
            }),
            ..Default::default()
        };
        assert_eq!(
            MediaItem::classify(markers),
            Some(MediaItem::Video {
                source: Some(source)
            })
        );
        assert_eq!(MediaItem::classify(ItemMarkers::default()), None);
    }

    #[test]
    fn test_image_resolved_src() {
        let deferred = ImageItem {
            src: Some("placeholder.gif".to_string()),
            deferred_src: Some("photo.jpg".to_string()),
            alt: String::new(),
        };
        assert_eq!(deferred.resolved_src(), "photo.jpg");

        let loaded = ImageItem {
            src: Some("photo.jpg".to_string()),
            deferred_src: Some(String::new()),
            alt: String::new(),
        };
        assert_eq!(loaded.resolved_src(), "photo.jpg");
        assert_eq!(ImageItem::default().resolved_src(), "");
    }

    #[test]
    fn test_collection_positions() {
        let collection = GalleryCollection::new(vec![
            vec![],
            vec![MediaItem::VkVideo {
                id: "1_2".to_string(),
            }],
        ]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.item_count(), 1);
        assert_eq!(collection.get(1).map(|g| g.position()), Some(1));
        assert!(collection.get(0).is_some_and(|g| g.is_empty()));
        assert!(collection.get(2).is_none());
    }
}
