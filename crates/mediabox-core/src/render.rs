//! Media item to modal content mapping.
//!
//! [`RenderPlan`] describes what the lightbox shows for an item. It is a
//! pure function of the item; applying it to the page is the web
//! crate's job.

use crate::media::{MediaItem, VideoSource};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";
const VK_VIDEO_BASE: &str = "https://vk.com/video";

/// Permissions granted to the YouTube frame.
pub const YOUTUBE_FRAME_ALLOW: &str = "accelerometer; encrypted-media; gyroscope; picture-in-picture";

/// Content of the lightbox for one media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// A standalone image.
    Image { src: String, alt: String },
    /// A video element with playback controls.
    Video { source: Option<VideoSource> },
    /// An embedded YouTube frame behind a play overlay.
    YouTube(YouTubeEmbed),
    /// A notice linking out to VK, which refuses embedding.
    VkNotice(VkNotice),
}

impl From<&MediaItem> for RenderPlan {
    fn from(item: &MediaItem) -> Self {
        match item {
            MediaItem::Image(image) => Self::Image {
                src: image.resolved_src().to_string(),
                alt: image.alt.clone(),
            },
            MediaItem::Video { source } => Self::Video {
                source: source.clone(),
            },
            MediaItem::YouTube { id } => Self::YouTube(YouTubeEmbed::new(id.clone())),
            MediaItem::VkVideo { id } => Self::VkNotice(VkNotice::new(id)),
        }
    }
}

/// YouTube frame state.
///
/// The frame starts without autoplay. Clicking the overlay calls
/// [`YouTubeEmbed::play`], which swaps in the autoplay URL and hides
/// the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YouTubeEmbed {
    id: String,
    playing: bool,
}

impl YouTubeEmbed {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            playing: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn overlay_visible(&self) -> bool {
        !self.playing
    }

    /// Current frame URL.
    pub fn frame_src(&self) -> String {
        if self.playing {
            format!(
                "{}/{}?autoplay=1&rel=0&enablejsapi=1",
                YOUTUBE_EMBED_BASE, self.id
            )
        } else {
            format!("{}/{}?rel=0&enablejsapi=1", YOUTUBE_EMBED_BASE, self.id)
        }
    }
}

/// Outbound link for a VK video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VkNotice {
    pub link: String,
}

impl VkNotice {
    pub fn new(id: &str) -> Self {
        Self {
            link: format!("{}{}", VK_VIDEO_BASE, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageItem;

    #[test]
    fn test_image_plan_prefers_deferred_source() {
        let item = MediaItem::Image(ImageItem {
            src: None,
            deferred_src: Some("photo.jpg".to_string()),
            alt: "Sunset".to_string(),
        });
        assert_eq!(
            RenderPlan::from(&item),
            RenderPlan::Image {
                src: "photo.jpg".to_string(),
                alt: "Sunset".to_string(),
            }
        );
    }

    #[test]
    fn test_video_plan_copies_source() {
        let source = VideoSource {
            src: "clip.webm".to_string(),
            mime_type: Some("video/webm".to_string()),
        };
        let item = MediaItem::Video {
            source: Some(source.clone()),
        };
        assert_eq!(
            RenderPlan::from(&item),
            RenderPlan::Video {
                source: Some(source)
            }
        );
        assert_eq!(
            RenderPlan::from(&MediaItem::Video { source: None }),
            RenderPlan::Video { source: None }
        );
    }

    #[test]
    fn test_youtube_overlay_starts_playback() {
        let item = MediaItem::YouTube {
            id: "abc123".to_string(),
        };
        let RenderPlan::YouTube(mut embed) = RenderPlan::from(&item) else {
            panic!("expected a YouTube plan");
        };

        assert_eq!(embed.id(), "abc123");
        assert!(embed.overlay_visible());
        assert_eq!(
            embed.frame_src(),
            "https://www.youtube.com/embed/abc123?rel=0&enablejsapi=1"
        );
        assert!(!embed.frame_src().contains("autoplay"));

        embed.play();
        assert!(embed.is_playing());
        assert!(!embed.overlay_visible());
        assert!(embed.frame_src().contains("autoplay=1"));
    }

    #[test]
    fn test_vk_plan_links_out() {
        let item = MediaItem::VkVideo {
            id: "200_1".to_string(),
        };
        assert_eq!(
            RenderPlan::from(&item),
            RenderPlan::VkNotice(VkNotice {
                link: "https://vk.com/video200_1".to_string()
            })
        );
    }
}
