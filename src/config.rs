//! Application configuration.
//!
//! Centralizes the page markup contract (selectors, attributes, class
//! names), UI text and the embedded tunables file.

use mediabox_core::Settings;

// =============================================================================
// Settings (loaded at compile time)
// =============================================================================

/// Tunables for particles, lazy loading, scroll reveal and scrolling.
pub const SETTINGS_TOML: &str = include_str!("../assets/settings.toml");

/// Parse the embedded settings, falling back to defaults if they are invalid.
pub fn load_settings() -> Settings {
    match Settings::from_toml(SETTINGS_TOML) {
        Ok(settings) => settings,
        Err(e) => {
            web_sys::console::warn_1(&format!("Using default settings: {}", e).into());
            Settings::default()
        }
    }
}

// =============================================================================
// Mount Points
// =============================================================================

/// Element the lightbox is rendered into (falls back to `<body>`).
pub const LIGHTBOX_HOST_ID: &str = "lightbox";

/// Element the particle background is rendered into.
pub const PARTICLE_HOST_ID: &str = "background-animation";

// =============================================================================
// Page Markup
// =============================================================================

/// CSS selectors for elements authored in the page.
pub mod selectors {
    pub const GALLERY: &str = ".media-gallery";
    pub const GALLERY_CONTAINER: &str = ".gallery-container";
    pub const SCROLL_PREV: &str = ".prev";
    pub const SCROLL_NEXT: &str = ".next";
    pub const MEDIA_ITEM: &str = ".media-item";
    pub const YOUTUBE_POSTER: &str = ".youtube-poster";
    pub const VK_POSTER: &str = ".vk-video-poster";
    /// First image or video inside a media item.
    pub const MEDIA_ELEMENT: &str = "img, video";
    pub const VIDEO_SOURCE: &str = "source";
    pub const LAZY_IMAGE: &str = ".lazy-image";
    /// Images fetched eagerly once the page has loaded.
    pub const CRITICAL_IMAGE: &str = ".image-content .lazy-image";
    pub const CONTENT_BLOCK: &str = ".content-block";
    pub const VIDEO: &str = "video";
}

/// Data attributes read from the page.
pub mod attributes {
    pub const DEFERRED_SRC: &str = "data-src";
    pub const YOUTUBE_ID: &str = "data-youtube-id";
    pub const VK_VIDEO_ID: &str = "data-vk-video-id";
}

/// Classes added to page elements.
pub mod classes {
    /// Lazy image finished loading.
    pub const LOADED: &str = "loaded";
    /// Lazy image failed to load.
    pub const ERROR: &str = "error";
    /// Content block revealed.
    pub const VISIBLE: &str = "visible";
}

/// Media query under which the particle layer stays still.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// UI Text
// =============================================================================

pub mod text {
    pub const CLOSE: &str = "Close";
    pub const PREVIOUS: &str = "Previous";
    pub const NEXT: &str = "Next";
    pub const YOUTUBE_PLAY_HINT: &str = "Click to play";
    pub const VK_TITLE: &str = "VK video";
    pub const VK_BODY: &str = "Open this video directly on VK to watch it.";
    pub const VK_LINK: &str = "Open on VK";
    pub const VK_NOTE: &str = "VK does not allow embedding on sites without a registered domain.";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
