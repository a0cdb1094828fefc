//! Browser-independent logic for the media gallery page.
//!
//! This crate holds everything that can be decided without a DOM:
//!
//! - [`media`] - gallery data model and variant classification
//! - [`session`] - the lightbox [`ModalController`] state machine
//! - [`render`] - pure mapping from a [`MediaItem`] to a [`RenderPlan`]
//! - [`particles`] - decorative particle field simulation
//! - [`reveal`] - debounced scroll-reveal scheduling
//! - [`scroller`] - gallery scroll button and swipe math
//! - [`settings`] - tunables loaded from TOML
//!
//! The `mediabox` web crate applies these decisions to the page.

pub mod error;
pub mod media;
pub mod particles;
pub mod render;
pub mod reveal;
pub mod scroller;
pub mod session;
pub mod settings;

pub use error::{LightboxError, SettingsError};
pub use media::{Gallery, GalleryCollection, ImageItem, ItemMarkers, MediaElement, MediaItem, MediaKind, VideoSource};
pub use particles::{Particle, ParticleField, Pointer, Viewport};
pub use render::{RenderPlan, VkNotice, YouTubeEmbed};
pub use reveal::RevealTimers;
pub use scroller::{ScrollButtons, ScrollMetrics, SwipeTracker};
pub use session::{Direction, ModalController};
pub use settings::Settings;
